//! Reef rescue reaction game.
//!
//! Litter, polluted water and reef wildlife fall through the play field. Clicking litter scores,
//! clicking anything else costs score and reef health, and litter left to reach the floor damages
//! the reef.

mod game;
mod item;
mod particle;

pub(crate) use game::{ReefGame, ReefPhase, MAX_HEALTH, MAX_LEVEL};
pub(crate) use item::{Category, ItemKind, FIELD_EXTENT};
pub(crate) use particle::Tone;
