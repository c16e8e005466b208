//! Event handling functions for user input and application state updates.

use std::time::Instant;

use color_eyre::eyre::Result;
use log::debug;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};

use crate::{
    app::CROSSHAIR_HOME,
    maze::{Direction, MazePhase},
    reef::{ReefPhase, FIELD_EXTENT},
    scheduler::FRAME_PERIOD,
    types::{MainMenuItem, Screen},
    App,
};

/// Distance the keyboard crosshair travels per key press, in field units.
const CROSSHAIR_STEP: f64 = 4.;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard and mouse events and dispatches them to the handler of the
/// current screen. It waits at most one frame so that the timers keep being advanced, and
/// re-synchronises the timers with the games afterwards.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(FRAME_PERIOD)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key.code),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    app.sync_timers(Instant::now());

    Ok(())
}

/// Handles a key press.
///
/// The `q` key quits from every screen; any other key is routed to the handler of the current
/// screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return;
    }

    match app.screen {
        Screen::MainMenu(item) => handle_main_menu_key(app, item, code),
        Screen::Maze => handle_maze_key(app, code),
        Screen::Reef => handle_reef_key(app, code),
    }
}

/// Handles a key press on the main menu.
fn handle_main_menu_key(app: &mut App, item: MainMenuItem, code: KeyCode) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::MainMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::MainMenu(item.previous()),
        KeyCode::Char('l') | KeyCode::Enter => match item {
            MainMenuItem::Maze => app.screen = Screen::Maze,
            MainMenuItem::Reef => app.screen = Screen::Reef,
            MainMenuItem::Quit => app.exit = true,
        },
        _ => {}
    }
}

/// Maps a key to a maze movement.
///
/// Arrows always move; the `hjkl` keys only move while a level is being played, since they drive
/// the dialogs otherwise.
const fn maze_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    }
}

/// Returns whether the key confirms the current dialog.
const fn is_confirm(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('l') | KeyCode::Enter)
}

/// Handles a key press on the maze screen, depending on the phase of the run.
fn handle_maze_key(app: &mut App, code: KeyCode) {
    match app.maze.phase() {
        MazePhase::Menu => match code {
            _ if is_confirm(code) => app.maze.start(&mut app.rng),
            KeyCode::Char('h') | KeyCode::Esc => {
                app.screen = Screen::MainMenu(MainMenuItem::Maze);
            }
            _ => {}
        },
        MazePhase::Playing => {
            if code == KeyCode::Esc {
                app.maze.reset();
            } else if let Some(direction) = maze_direction(code) {
                let outcome = app.maze.step(direction);
                debug!("maze step {direction:?}: {outcome:?}");
            }
        }
        MazePhase::LevelComplete => match code {
            _ if is_confirm(code) && app.maze.is_last_level() => app.maze.finish(),
            _ if is_confirm(code) => app.maze.next_level(&mut app.rng),
            KeyCode::Esc => app.maze.reset(),
            _ => {}
        },
        MazePhase::GameOver => match code {
            _ if is_confirm(code) => app.maze.retry(&mut app.rng),
            KeyCode::Esc => app.maze.reset(),
            _ => {}
        },
        MazePhase::Victory => {
            if is_confirm(code) {
                app.maze.reset();
                app.maze.start(&mut app.rng);
            } else if code == KeyCode::Esc {
                app.maze.reset();
            }
        }
    }
}

/// Handles a key press on the reef screen, depending on the phase of the run.
fn handle_reef_key(app: &mut App, code: KeyCode) {
    match app.reef.phase() {
        ReefPhase::Menu => match code {
            _ if is_confirm(code) => start_reef(app),
            KeyCode::Char('h') | KeyCode::Esc => {
                app.screen = Screen::MainMenu(MainMenuItem::Reef);
            }
            _ => {}
        },
        ReefPhase::Playing => match code {
            KeyCode::Esc => app.reef.reset(),
            KeyCode::Char('i') => app.reef_info = !app.reef_info,
            KeyCode::Char(' ') => {
                let (x, y) = app.crosshair;
                click_reef(app, x, y);
            }
            KeyCode::Up => move_crosshair(app, 0., -CROSSHAIR_STEP),
            KeyCode::Down => move_crosshair(app, 0., CROSSHAIR_STEP),
            KeyCode::Left => move_crosshair(app, -CROSSHAIR_STEP, 0.),
            KeyCode::Right => move_crosshair(app, CROSSHAIR_STEP, 0.),
            _ => {}
        },
        ReefPhase::GameOver | ReefPhase::Victory => match code {
            _ if is_confirm(code) => start_reef(app),
            KeyCode::Esc => app.reef.reset(),
            _ => {}
        },
    }
}

/// Starts a fresh reef run with the crosshair back in place.
fn start_reef(app: &mut App) {
    app.reef.start();
    app.crosshair = CROSSHAIR_HOME;
}

/// Moves the keyboard crosshair, keeping it inside the play field.
fn move_crosshair(app: &mut App, dx: f64, dy: f64) {
    let (x, y) = app.crosshair;
    app.crosshair = (
        (x + dx).clamp(0., FIELD_EXTENT),
        (y + dy).clamp(0., FIELD_EXTENT),
    );
}

/// Clicks the reef at field coordinates `(x, y)`.
fn click_reef(app: &mut App, x: f64, y: f64) {
    if let Some(kind) = app.reef.click(x, y) {
        debug!("reef click at ({x:.1}, {y:.1}) hit {kind:?}");
    }
}

/// Handles a mouse event.
///
/// Only left clicks on the reef play field matter; they are mapped to field coordinates and
/// also move the keyboard crosshair there.
pub(crate) fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.screen != Screen::Reef || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some((x, y)) = field_point(app.play_field, mouse.column, mouse.row) {
        if app.reef.is_playing() {
            app.crosshair = (x, y);
        }
        click_reef(app, x, y);
    }
}

/// Maps a terminal cell to play-field coordinates.
///
/// The centre of the cell is mapped linearly onto the `0..=100` field on both axes. Cells outside
/// `area` have no field coordinates.
pub(crate) fn field_point(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    let inside = column >= area.left()
        && column < area.right()
        && row >= area.top()
        && row < area.bottom();
    if !inside {
        return None;
    }

    let x = (f64::from(column - area.left()) + 0.5) / f64::from(area.width) * FIELD_EXTENT;
    let y = (f64::from(row - area.top()) + 0.5) / f64::from(area.height) * FIELD_EXTENT;

    Some((x, y))
}
