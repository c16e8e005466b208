//! Core application state and the terminal loop driving both games.

use std::{io::stdout, time::Instant};

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::{
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
    },
    layout::Rect,
    DefaultTerminal,
};

use crate::{
    config::GameChoice,
    events,
    maze::{MazeGame, LEVELS},
    reef::ReefGame,
    scheduler::{Ticker, COUNTDOWN_PERIOD, FRAME_PERIOD},
    types::{MainMenuItem, Screen},
    ui, Config,
};

/// Initial position of the keyboard crosshair over the reef play field.
pub(crate) const CROSSHAIR_HOME: (f64, f64) = (50., 75.);

/// Application state container for both games.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the games and Crossterm events will help writing to. Each game owns its
/// whole state; the application only routes input to the game on screen and drives its timers.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// State of the maze clean-up game.
    pub(crate) maze: MazeGame,
    /// State of the reef rescue game.
    pub(crate) reef: ReefGame,
    /// One-second countdown of the maze level being played.
    pub(crate) countdown: Ticker,
    /// Frame loop moving the reef items and particles.
    pub(crate) frames: Ticker,
    /// Loop dropping new items over the reef.
    ///
    /// Its period follows the spawn interval of the current reef level.
    pub(crate) spawner: Ticker,
    /// Random number generator shared by the maze generator and the reef spawner.
    pub(crate) rng: StdRng,
    /// Area of the reef play field during the last redraw.
    ///
    /// This field holds the rectangle in terminal cells the play field was drawn into, so that
    /// mouse clicks can be mapped back to field coordinates. It is empty until the field is drawn.
    pub(crate) play_field: Rect,
    /// Field coordinates of the keyboard crosshair.
    pub(crate) crosshair: (f64, f64),
    /// Whether the panel about the reef is shown over the play field.
    pub(crate) reef_info: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Creates a new instance of the App structure from the command-line configuration.
    ///
    /// The random number generator is seeded from the configured seed when there is one, and
    /// from the operating system otherwise. A game requested on the command line opens on its
    /// briefing screen instead of the main menu.
    pub fn new(config: &Config) -> Self {
        let rng = config
            .seed()
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let screen = match config.game() {
            Some(GameChoice::Maze) => Screen::Maze,
            Some(GameChoice::Reef) => Screen::Reef,
            None => Screen::MainMenu(MainMenuItem::Maze),
        };

        Self {
            exit: false,
            screen,
            maze: MazeGame::new(&LEVELS),
            reef: ReefGame::new(),
            countdown: Ticker::new(COUNTDOWN_PERIOD),
            frames: Ticker::new(FRAME_PERIOD),
            spawner: Ticker::new(ReefGame::new().spawn_interval()),
            rng,
            play_field: Rect::default(),
            crosshair: CROSSHAIR_HOME,
            reef_info: false,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function captures the mouse, then draws, handles user input and advances the timers
    /// until the exit condition is `true`. Mouse capture is released before returning, even when
    /// the loop fails.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        execute!(stdout(), EnableMouseCapture)?;
        let result = self.event_loop(terminal);
        execute!(stdout(), DisableMouseCapture)?;

        result
    }

    /// Draws, handles input and advances the timers until the exit flag is raised.
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
            self.advance(Instant::now());
        }

        Ok(())
    }

    /// Starts and stops the timers so that exactly the loops of the game being played run.
    ///
    /// This is called after every input event and every advance, so a game leaving its playing
    /// phase stops its loops before any further period can fire.
    pub(crate) fn sync_timers(&mut self, now: Instant) {
        self.countdown.follow(self.maze.is_playing(), now);

        let interval = self.reef.spawn_interval();
        if self.spawner.period() != interval {
            self.spawner.set_period(interval);
        }
        self.frames.follow(self.reef.is_playing(), now);
        self.spawner.follow(self.reef.is_playing(), now);
    }

    /// Runs every timer period elapsed at `now`.
    ///
    /// A game that stops playing halfway through a catch-up skips the remaining periods.
    pub(crate) fn advance(&mut self, now: Instant) {
        for _ in 0..self.countdown.poll(now) {
            if !self.maze.is_playing() {
                break;
            }
            self.maze.tick();
        }

        for _ in 0..self.spawner.poll(now) {
            if !self.reef.is_playing() {
                break;
            }
            self.reef.spawn(&mut self.rng);
        }

        for _ in 0..self.frames.poll(now) {
            if !self.reef.is_playing() {
                break;
            }
            self.reef.frame();
        }

        self.sync_timers(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::MazePhase, reef::ReefPhase};
    use clap::Parser as _;
    use std::time::Duration;

    /// Creates an app with a fixed seed sitting on the main menu.
    fn seeded_app() -> App {
        let config = Config::try_parse_from(["ecotuine", "--seed", "7"])
            .expect("parsing should succeed");
        App::new(&config)
    }

    #[test]
    fn test_app_starts_on_main_menu() {
        let app = App::default();

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Maze));
        assert_eq!(app.maze.phase(), MazePhase::Menu);
        assert_eq!(app.reef.phase(), ReefPhase::Menu);
        assert!(!app.countdown.is_running());
        assert!(!app.frames.is_running());
        assert!(!app.spawner.is_running());
        assert!(!app.reef_info);
    }

    #[test]
    fn test_game_option_opens_its_screen() {
        let maze = Config::try_parse_from(["ecotuine", "--game", "maze"])
            .expect("parsing should succeed");
        let reef = Config::try_parse_from(["ecotuine", "--game", "reef"])
            .expect("parsing should succeed");

        assert_eq!(App::new(&maze).screen, Screen::Maze);
        assert_eq!(App::new(&reef).screen, Screen::Reef);
    }

    #[test]
    fn test_seed_makes_boards_reproducible() {
        let mut first = seeded_app();
        let mut second = seeded_app();

        first.maze.start(&mut first.rng);
        second.maze.start(&mut second.rng);

        assert_eq!(
            first.maze.grid().to_string(),
            second.maze.grid().to_string()
        );
    }

    #[test]
    fn test_countdown_runs_only_while_the_maze_is_played() {
        let origin = Instant::now();
        let mut app = seeded_app();
        app.sync_timers(origin);
        assert!(!app.countdown.is_running());

        app.maze.start(&mut app.rng);
        app.sync_timers(origin);
        assert!(app.countdown.is_running());

        app.advance(origin + Duration::from_secs(3));
        assert_eq!(app.maze.time_left(), 37);

        app.maze.reset();
        app.sync_timers(origin + Duration::from_secs(3));
        assert!(!app.countdown.is_running());

        app.advance(origin + Duration::from_secs(10));
        assert_eq!(app.maze.phase(), MazePhase::Menu);
    }

    #[test]
    fn test_countdown_stops_on_game_over() {
        let origin = Instant::now();
        let mut app = seeded_app();
        app.maze.start(&mut app.rng);
        app.sync_timers(origin);

        for second in 1..=45 {
            app.advance(origin + Duration::from_secs(second));
        }

        assert_eq!(app.maze.phase(), MazePhase::GameOver);
        assert_eq!(app.maze.time_left(), 0);
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn test_reef_loops_spawn_and_move_items() {
        let origin = Instant::now();
        let mut app = seeded_app();
        app.reef.start();
        app.sync_timers(origin);
        assert!(app.frames.is_running());
        assert!(app.spawner.is_running());
        assert_eq!(app.spawner.period(), Duration::from_millis(1250));

        app.advance(origin + Duration::from_millis(1250));

        assert_eq!(app.reef.items().len(), 1);
        let item = app.reef.items().first().expect("an item should spawn");
        assert!(item.y > -10., "the item should have started falling");
    }

    #[test]
    fn test_reef_loops_stop_when_the_run_ends() {
        let origin = Instant::now();
        let mut app = seeded_app();
        app.reef.start();
        app.sync_timers(origin);

        app.reef.reset();
        app.sync_timers(origin);

        assert!(!app.frames.is_running());
        assert!(!app.spawner.is_running());
        app.advance(origin + Duration::from_secs(5));
        assert!(app.reef.items().is_empty());
    }

    #[test]
    fn test_repeated_runs_keep_single_loops() {
        let origin = Instant::now();
        let mut app = seeded_app();

        for round in 0..5 {
            let now = origin + Duration::from_millis(round * 100);
            app.reef.start();
            app.sync_timers(now);
            app.reef.reset();
            app.sync_timers(now);
        }
        app.reef.start();
        app.sync_timers(origin + Duration::from_secs(1));

        app.advance(origin + Duration::from_millis(2250));

        assert_eq!(app.reef.items().len(), 1);
    }
}
