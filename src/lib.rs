//! Terminal mini-games about environmental restoration.
//!
//! The library holds the two games and the terminal shell around them: a maze clean-up where the
//! player collects mud and plants seedlings against the clock, and a reef rescue where litter has
//! to be clicked away before it lands on the coral. The binary only parses the command line and
//! hands over to [`App`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod config;
mod events;
mod logging;
mod maze;
mod reef;
mod scheduler;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
pub use logging::init as init_logging;
