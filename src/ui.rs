//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap,
    },
    Frame,
};

use crate::{
    maze::{Cell, MazePhase, Position},
    reef::{Category, ItemKind, ReefGame, ReefPhase, Tone, FIELD_EXTENT, MAX_HEALTH, MAX_LEVEL},
    types::{Dialog, MainMenuItem, Screen},
    App,
};

/// Countdown value from which the maze timer is drawn as urgent.
const URGENT_SECONDS: u32 = 10;

/// Width and height of the panel about the reef, borders included.
const REEF_INFO_SIZE: (u16, u16) = (40, 8);

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen and game phase.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item)?,
        Screen::Maze => maze_screen(app, frame)?,
        Screen::Reef => reef_screen(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the layout structure of a centered menu with `items` rows.
///
/// This function creates the centered positioning and border styling of the menu, and returns one
/// single-row area per item for the caller to fill in.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, items: u16) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(items + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); items.into()]).split(inner_space)
}

/// Renders the main menu screen with the game choices.
///
/// This function displays one entry per game plus "Quit", and highlights the currently selected
/// entry.
///
/// # Errors
///
/// This function may return errors if the number of entries does not fit the layout.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) -> Result<()> {
    clear(frame);

    let inner_layout = init_menu(
        frame,
        "Ecotuine",
        u16::try_from(MainMenuItem::ALL.len())?,
    );

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in MainMenuItem::ALL.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.label(), style).centered(), *area);
    }

    Ok(())
}

/// Renders a centered dialog with a wrapped body.
///
/// The dialog takes its title, key hints and colour from `kind`.
///
/// # Errors
///
/// This function may return errors if the layout areas cannot be retrieved.
pub(crate) fn dialog(frame: &mut Frame, kind: Dialog, body: Vec<Line<'static>>) -> Result<()> {
    clear(frame);

    let space = Layout::vertical([
        Constraint::Percentage(15),
        Constraint::Percentage(70),
        Constraint::Percentage(15),
    ])
    .split(frame.area())
    .get(1)
    .copied()
    .ok_or_eyre("failed to get dialog row from layout")?;
    let space = Layout::horizontal([
        Constraint::Percentage(15),
        Constraint::Percentage(70),
        Constraint::Percentage(15),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get dialog column from layout")?;

    let color = if kind.is_failure() {
        Color::Red
    } else {
        Color::Green
    };
    let block = Block::bordered()
        .title(kind.title())
        .title_bottom(kind.hint())
        .title_alignment(Alignment::Center)
        .style(color)
        .border_type(BorderType::Rounded);
    let paragraph = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, space);

    Ok(())
}

/// Splits the frame into a status bar, a content area and a key-hint bar.
///
/// # Errors
///
/// This function may return errors if the layout areas cannot be retrieved.
fn game_layout(frame: &Frame) -> Result<(Rect, Rect, Rect)> {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .split(frame.area());

    let status = *layout.first().ok_or_eyre("failed to get status area from layout")?;
    let content = *layout.get(1).ok_or_eyre("failed to get content area from layout")?;
    let hints = *layout.last().ok_or_eyre("failed to get hint area from layout")?;

    Ok((status, content, hints))
}

/// Renders the key hints at the bottom of a game screen.
fn hints(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::bordered()
        .title(text)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(block, area);
}

/// Renders the maze screen for the current phase of the run.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversions.
pub(crate) fn maze_screen(app: &App, frame: &mut Frame) -> Result<()> {
    let maze = &app.maze;
    let level = maze.level_number();
    let score = maze.score();

    match maze.phase() {
        MazePhase::Menu => {
            let descriptor = maze
                .descriptor()
                .ok_or_eyre("failed to retrieve the current maze level")?;
            let mut body = vec![
                Line::styled(
                    format!("Level {level} of {}", maze.level_count()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::raw(descriptor.briefing),
                Line::raw(""),
                Line::raw(format!(
                    "Collect {} patches of mud (+10 each) and plant {} seedlings (+15 each), then \
                     reach the exit (E) within {} seconds. Every second left at the exit is worth \
                     2 points.",
                    descriptor.dirt_count, descriptor.seed_count, descriptor.time_limit
                )),
            ];
            if let Some(illustration) = descriptor.illustration {
                body.push(Line::raw(""));
                body.push(Line::styled(
                    format!("Illustration: {illustration}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            dialog(frame, Dialog::MazeBriefing, body)
        }
        MazePhase::Playing => maze_board(app, frame),
        MazePhase::LevelComplete => {
            let mut body = vec![
                Line::raw(format!("Level {level} is clean!")),
                Line::raw(format!(
                    "Mud {}   Seedlings {}   Seconds to spare {}   Score {score}",
                    maze.dirt_collected(),
                    maze.seeds_planted(),
                    maze.time_left()
                )),
            ];
            if let Some(upcoming) = maze.upcoming_descriptor() {
                body.push(Line::raw(""));
                body.push(Line::styled(
                    "Did you know?",
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                body.push(Line::raw(upcoming.briefing));
                if let Some(illustration) = upcoming.illustration {
                    body.push(Line::styled(
                        format!("Illustration: {illustration}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            dialog(frame, Dialog::MazeLevelComplete, body)
        }
        MazePhase::GameOver => dialog(
            frame,
            Dialog::MazeGameOver,
            vec![
                Line::raw(format!("Time ran out on level {level}.")),
                Line::raw(format!(
                    "Mud collected: {}   Seedlings planted: {}",
                    maze.dirt_collected(),
                    maze.seeds_planted()
                )),
                Line::raw(format!("Score: {score}")),
            ],
        ),
        MazePhase::Victory => dialog(
            frame,
            Dialog::MazeVictory,
            vec![
                Line::raw("Every level is clean and the region can breathe again."),
                Line::raw(""),
                Line::styled(
                    format!("Final score: {score}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ],
        ),
    }
}

/// Transforms board coordinates to canvas coordinates.
///
/// The board is centered on the canvas origin: columns grow to the right and rows grow downwards,
/// so the row index is flipped.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn board_point(position: Position, size: usize) -> Result<(f64, f64)> {
    let half = (f64::from(u16::try_from(size)?) - 1.) / 2.;

    Ok((
        f64::from(u16::try_from(position.x)?) - half,
        half - f64::from(u16::try_from(position.y)?),
    ))
}

/// Glyph drawn over mud and seedling cells once they have been collected.
const RESTORED_GLYPH: &str = "+";

/// Returns the glyph and colour drawn for a cell, if any.
///
/// Collected mud and seedling cells keep their code on the grid and are drawn as restored ground.
const fn cell_glyph(cell: Cell, collected: bool) -> Option<(&'static str, Color)> {
    match cell {
        Cell::Dirt | Cell::Seed if collected => Some((RESTORED_GLYPH, Color::Green)),
        Cell::Dirt => Some(("*", Color::Yellow)),
        Cell::Seed => Some(("^", Color::LightGreen)),
        Cell::Hazard => Some(("~", Color::Magenta)),
        Cell::Exit => Some(("E", Color::Cyan)),
        Cell::Floor | Cell::Wall => None,
    }
}

/// Renders the maze board being played, with its status bar.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversions.
pub(crate) fn maze_board(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze = &app.maze;
    let grid = maze.grid();
    let size = grid.size();
    let (status_area, content_area, hint_area) = game_layout(frame)?;

    let time_style = if maze.time_left() <= URGENT_SECONDS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let status = Line::from(vec![
        Span::raw(format!(
            "Level {}/{}   ",
            maze.level_number(),
            maze.level_count()
        )),
        Span::styled(format!("Time {}s", maze.time_left()), time_style),
        Span::raw(format!(
            "   Mud {}/{}   Seedlings {}/{}   Score {}",
            maze.dirt_collected(),
            grid.count(Cell::Dirt),
            maze.seeds_planted(),
            grid.count(Cell::Seed),
            maze.score()
        )),
    ]);
    let status_block = Block::bordered()
        .title("Mariana Clean-up")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    frame.render_widget(
        Paragraph::new(status)
            .block(status_block)
            .alignment(Alignment::Center),
        status_area,
    );

    let side = u16::try_from(size)?;
    let row = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(side),
        Constraint::Min(0),
    ])
    .split(content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board row from layout")?;
    let space = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(side),
        Constraint::Min(0),
    ])
    .split(row)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get board space from layout")?;

    // Pre-compute canvas coordinates to handle errors before the paint closure
    let mut walls = Vec::new();
    let mut labels = Vec::new();
    for (position, cell) in grid.cells() {
        if cell == Cell::Wall {
            walls.push(board_point(position, size)?);
        } else if let Some((glyph, color)) = cell_glyph(cell, maze.is_collected(position)) {
            let (x, y) = board_point(position, size)?;
            labels.push((x, y, glyph, color));
        }
    }
    let (player_x, player_y) = board_point(maze.position(), size)?;

    // One board cell per terminal cell: the outermost cell centres sit on the bounds
    let half = (f64::from(side) - 1.) / 2.;
    let board = Canvas::default()
        .x_bounds([-half, half])
        .y_bounds([-half, half])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &walls,
                color: Color::DarkGray,
            });
            for &(x, y, glyph, color) in &labels {
                ctx.print(x, y, Line::styled(glyph, color));
            }
            ctx.print(
                player_x,
                player_y,
                Line::styled("@", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        });

    frame.render_widget(board, space);

    hints(
        frame,
        hint_area,
        "(arrows) move / (esc) back / (q) quit  * mud ^ seed + restored ~ sludge E exit",
    );

    Ok(())
}

/// Returns the colour used for items of a category.
const fn category_color(category: Category) -> Color {
    match category {
        Category::Litter => Color::Yellow,
        Category::Pollution => Color::Magenta,
        Category::MarineLife => Color::LightCyan,
    }
}

/// Returns the colour used for particles of a tone.
const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Gain => Color::LightGreen,
        Tone::Harm => Color::LightRed,
        Tone::Pollution => Color::Magenta,
    }
}

/// Returns the glyphs of every item kind in `category`, separated by spaces.
fn legend(category: Category) -> String {
    ItemKind::ALL
        .into_iter()
        .map(ItemKind::attributes)
        .filter(|attributes| attributes.category == category)
        .map(|attributes| attributes.glyph)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the reef screen for the current phase of the run.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn reef_screen(app: &mut App, frame: &mut Frame) -> Result<()> {
    let reef = &app.reef;
    let score = reef.score();
    let level = reef.level();

    match reef.phase() {
        ReefPhase::Menu => dialog(
            frame,
            Dialog::ReefBriefing,
            vec![
                Line::raw(
                    "Litter and polluted water are sinking onto the coral reef. Click the litter \
                     away before it lands, but leave the reef's inhabitants alone.",
                ),
                Line::raw(""),
                Line::styled(
                    format!("{}   litter: click it", legend(Category::Litter)),
                    Style::default().fg(category_color(Category::Litter)),
                ),
                Line::styled(
                    format!("{}   marine life: leave it", legend(Category::MarineLife)),
                    Style::default().fg(category_color(Category::MarineLife)),
                ),
                Line::styled(
                    format!("{}   polluted water: leave it", legend(Category::Pollution)),
                    Style::default().fg(category_color(Category::Pollution)),
                ),
                Line::raw(""),
                Line::raw(format!(
                    "Every 50 points the current gets faster. Reach level {MAX_LEVEL} and 250 \
                     points to save the reef. Use the mouse, or the arrows and space."
                )),
            ],
        ),
        ReefPhase::Playing => reef_board(app, frame),
        ReefPhase::GameOver => dialog(
            frame,
            Dialog::ReefGameOver,
            vec![
                Line::raw("The reef could not take any more damage."),
                Line::raw(format!("Score: {score}   Level: {level}/{MAX_LEVEL}")),
            ],
        ),
        ReefPhase::Victory => dialog(
            frame,
            Dialog::ReefVictory,
            vec![
                Line::raw("The reef is safe and its life is coming back."),
                Line::raw(""),
                Line::styled(
                    format!("Final score: {score}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ],
        ),
    }
}

/// Renders the health gauge and the score line of a reef run.
///
/// # Errors
///
/// This function may return errors from layout lookups.
fn reef_status(frame: &mut Frame, reef: &ReefGame, status_area: Rect) -> Result<()> {
    let status_layout = Layout::horizontal([Constraint::Percentage(40), Constraint::Fill(1)])
        .split(status_area);
    let health_area = *status_layout
        .first()
        .ok_or_eyre("failed to get health area from layout")?;
    let stats_area = *status_layout
        .last()
        .ok_or_eyre("failed to get stats area from layout")?;

    let health = reef.health();
    let health_color = match health {
        0..=25 => Color::Red,
        26..=60 => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = Gauge::default()
        .block(
            Block::bordered()
                .title("Reef health")
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(health_color))
        .ratio((f64::from(health) / f64::from(MAX_HEALTH)).clamp(0., 1.))
        .label(format!("{health}/{MAX_HEALTH}"));
    frame.render_widget(gauge, health_area);

    let progress = if reef.level() < MAX_LEVEL {
        format!("Next level in {} pts", reef.points_to_next_level())
    } else {
        "Final level".to_owned()
    };
    let stats = Paragraph::new(Line::raw(format!(
        "Score {}   Level {}/{MAX_LEVEL}   {progress}",
        reef.score(),
        reef.level()
    )))
    .block(
        Block::bordered()
            .title("Reef Guardians")
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded),
    )
    .alignment(Alignment::Center)
    .style(Color::Green);
    frame.render_widget(stats, stats_area);

    Ok(())
}

/// Renders the reef play field with its status bar.
///
/// The inner area of the field is stored in the application so that mouse clicks can be mapped
/// back to field coordinates.
///
/// # Errors
///
/// This function may return errors from layout lookups.
pub(crate) fn reef_board(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let (status_area, content_area, hint_area) = game_layout(frame)?;
    reef_status(frame, &app.reef, status_area)?;

    let field_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Blue));
    let field_area = field_block.inner(content_area);
    frame.render_widget(field_block, content_area);
    app.play_field = field_area;

    let reef = &app.reef;
    let (crosshair_x, crosshair_y) = app.crosshair;
    let level_up = reef
        .shows_level_up()
        .then(|| format!("LEVEL {}!", reef.level()));

    let field = Canvas::default()
        .x_bounds([0., FIELD_EXTENT])
        .y_bounds([0., FIELD_EXTENT])
        .paint(|ctx| {
            for item in reef.items() {
                let attributes = item.attributes;
                ctx.print(
                    item.x,
                    FIELD_EXTENT - item.y,
                    Line::styled(attributes.glyph, category_color(attributes.category)),
                );
            }
            for particle in reef.particles() {
                let mut style = Style::default()
                    .fg(tone_color(particle.tone))
                    .add_modifier(Modifier::BOLD);
                if particle.opacity < 0.5 {
                    style = style.add_modifier(Modifier::DIM);
                }
                ctx.print(
                    particle.x,
                    FIELD_EXTENT - particle.y,
                    Line::styled(particle.label.clone(), style),
                );
            }
            ctx.print(
                crosshair_x,
                FIELD_EXTENT - crosshair_y,
                Line::styled("+", Style::default().fg(Color::White)),
            );
            if let Some(banner) = &level_up {
                ctx.print(
                    FIELD_EXTENT / 2. - 5.,
                    FIELD_EXTENT / 2.,
                    Line::styled(
                        banner.clone(),
                        Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    frame.render_widget(field, field_area);

    if app.reef_info {
        reef_info(frame, field_area);
    }

    hints(
        frame,
        hint_area,
        "(click) or (arrows + space) collect / (i) info / (esc) briefing / (q) quit",
    );

    Ok(())
}

/// Renders the panel about the reef at the top of the play field.
fn reef_info(frame: &mut Frame, field_area: Rect) {
    let width = REEF_INFO_SIZE.0.min(field_area.width);
    let height = REEF_INFO_SIZE.1.min(field_area.height);
    let area = Rect::new(
        field_area.x + rounded_div::u16(field_area.width - width, 2),
        field_area.y,
        width,
        height,
    );

    let panel = Paragraph::new(vec![
        Line::raw(
            "The coral reefs of Guarapari shelter rich marine life and protect the beaches.",
        ),
        Line::raw(""),
        Line::styled(
            "Every action counts to preserve this ecosystem of Espirito Santo!",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .block(
        Block::bordered()
            .title("About the reef")
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded),
    )
    .style(Style::default().fg(Color::White))
    .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use rand::SeedableRng as _;
    use ratatui::{backend::TestBackend, symbols, Terminal};
    use std::collections::{HashMap, HashSet, VecDeque};

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        let mut app = App::default();
        app.rng = rand::rngs::StdRng::seed_from_u64(21);
        app
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Draws the app once and returns the rendered text.
    fn render(app: &mut App) -> String {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing should succeed");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    /// Walks from the start along the top row and down the right column onto the exit.
    fn walk_to_exit(app: &mut App) {
        let steps = app.maze.grid().size() - 3;
        for _ in 0..steps {
            let _ = app.maze.step(Direction::Right);
        }
        for _ in 0..steps {
            let _ = app.maze.step(Direction::Down);
        }
    }

    /// Walks the shortest path from the player onto the nearest mud or seedling cell.
    ///
    /// The exit is never crossed, so the level keeps being played. Returns the last step taken.
    fn walk_to_collectible(app: &mut App) -> Direction {
        let grid = app.maze.grid();
        let origin = app.maze.position();
        let mut came_from = HashMap::new();
        let mut queue = VecDeque::from([origin]);
        let mut target = None;

        while let Some(position) = queue.pop_front() {
            if matches!(grid.get(position), Some(Cell::Dirt | Cell::Seed)) {
                target = Some(position);
                break;
            }
            for direction in Direction::ALL {
                let Some(next) = position.step(direction) else {
                    continue;
                };
                let open = grid
                    .get(next)
                    .is_some_and(|cell| cell.is_passable() && cell != Cell::Exit);
                if open && next != origin && !came_from.contains_key(&next) {
                    let _ = came_from.insert(next, (position, direction));
                    queue.push_back(next);
                }
            }
        }

        let mut position = target.expect("the board should have a reachable collectible");
        let mut path = Vec::new();
        while let Some(&(previous, direction)) = came_from.get(&position) {
            path.push(direction);
            position = previous;
        }
        let last = *path.first().expect("the start never holds a collectible");
        for direction in path.into_iter().rev() {
            let _ = app.maze.step(direction);
        }

        last
    }

    /// Counts the cells of the rendered text showing `glyph`.
    fn count_glyph(text: &str, glyph: char) -> usize {
        text.chars().filter(|symbol| *symbol == glyph).count()
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();

        for item in MainMenuItem::ALL {
            app.screen = Screen::MainMenu(item);
            let text = render(&mut app);

            assert!(text.contains("Reef Guardians"), "menu should list the reef game");
            assert!(text.contains("Quit"), "menu should list quit");
        }
    }

    #[test]
    fn test_init_menu_main_menu() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, "Ecotuine", 3);
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
        });

        assert!(result.is_ok(), "initializing main menu should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_draw_maze_briefing() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;

        let text = render(&mut app);

        assert!(text.contains("Level 1 of 4"), "briefing should name the level");
    }

    #[test]
    fn test_draw_maze_board() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);

        let text = render(&mut app);

        assert!(text.contains("Time 40s"), "status bar should show the countdown");
        assert!(text.contains('@'), "the player should be drawn");
        assert!(text.contains('E'), "the exit should be drawn");
    }

    #[test]
    fn test_maze_board_draws_one_cell_per_board_index() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        let size = app.maze.grid().size();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&mut app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing should succeed");

        let buffer = terminal.backend().buffer();
        let mut columns = HashSet::new();
        let mut rows = HashSet::new();
        for row in buffer.area.top()..buffer.area.bottom() {
            for column in buffer.area.left()..buffer.area.right() {
                if buffer
                    .cell((column, row))
                    .is_some_and(|cell| cell.symbol() == symbols::block::FULL)
                {
                    let _ = columns.insert(column);
                    let _ = rows.insert(row);
                }
            }
        }

        assert_eq!(columns.len(), size, "every board column should get its own cell");
        assert_eq!(rows.len(), size, "every board row should get its own cell");
    }

    #[test]
    fn test_cell_glyph_marks_collected_ground() {
        assert_eq!(cell_glyph(Cell::Dirt, false), Some(("*", Color::Yellow)));
        assert_eq!(cell_glyph(Cell::Seed, false), Some(("^", Color::LightGreen)));
        assert_eq!(cell_glyph(Cell::Dirt, true), Some((RESTORED_GLYPH, Color::Green)));
        assert_eq!(cell_glyph(Cell::Seed, true), Some((RESTORED_GLYPH, Color::Green)));
        assert_eq!(cell_glyph(Cell::Exit, true), Some(("E", Color::Cyan)));
        assert_eq!(cell_glyph(Cell::Floor, false), None);
    }

    #[test]
    fn test_draw_collected_cell_as_restored() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        let restored = count_glyph(&render(&mut app), '+');

        let last = walk_to_collectible(&mut app);
        let collected = app.maze.position();
        assert!(app.maze.is_collected(collected), "the cell should be collected");
        let back = match last {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };
        let _ = app.maze.step(back);
        assert_ne!(app.maze.position(), collected, "the player should step off the cell");

        let text = render(&mut app);

        assert_eq!(
            count_glyph(&text, '+'),
            restored + 1,
            "the collected cell should be drawn as restored ground"
        );
    }

    #[test]
    fn test_draw_largest_maze_board() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        for _ in 1..app.maze.level_count() {
            walk_to_exit(&mut app);
            app.maze.next_level(&mut app.rng);
        }
        assert_eq!(app.maze.grid().size(), 15);

        let text = render(&mut app);

        assert!(text.contains("Level 4/4"), "status bar should show the last level");
    }

    #[test]
    fn test_draw_maze_level_complete() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        walk_to_exit(&mut app);
        assert_eq!(app.maze.phase(), MazePhase::LevelComplete);

        let text = render(&mut app);

        assert!(text.contains("Level Complete"), "dialog title should be shown");
        assert!(
            text.contains("The mud reached the Doce river"),
            "the briefing of level 2 should be shown"
        );
    }

    #[test]
    fn test_level_complete_briefs_the_upcoming_level() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        walk_to_exit(&mut app);
        app.maze.next_level(&mut app.rng);
        walk_to_exit(&mut app);
        assert_eq!(app.maze.level_number(), 2);
        assert_eq!(app.maze.phase(), MazePhase::LevelComplete);

        let text = render(&mut app);

        assert!(text.contains("Level 2 is clean!"), "the finished level should be named");
        assert!(
            text.contains("Contaminated soil"),
            "the briefing of level 3 should be shown"
        );
        assert!(text.contains("Illustration:"), "the illustration should be referenced");
    }

    #[test]
    fn test_draw_maze_game_over() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        let _ = walk_to_collectible(&mut app);
        let counts = format!(
            "Mud collected: {}   Seedlings planted: {}",
            app.maze.dirt_collected(),
            app.maze.seeds_planted()
        );
        assert_eq!(app.maze.dirt_collected() + app.maze.seeds_planted(), 1);
        for _ in 0..40 {
            app.maze.tick();
        }

        let text = render(&mut app);

        assert!(text.contains("Game Over"), "dialog title should be shown");
        assert!(text.contains(&counts), "the collected counts should be shown");
    }

    #[test]
    fn test_draw_maze_victory() {
        let mut app = create_test_app();
        app.screen = Screen::Maze;
        app.maze.start(&mut app.rng);
        for _ in 1..app.maze.level_count() {
            walk_to_exit(&mut app);
            app.maze.next_level(&mut app.rng);
        }
        walk_to_exit(&mut app);
        assert!(
            !render(&mut app).contains("Did you know?"),
            "the last level has no upcoming briefing"
        );
        app.maze.finish();
        assert_eq!(app.maze.phase(), MazePhase::Victory);

        let text = render(&mut app);

        assert!(text.contains("Final score"), "final score should be shown");
    }

    #[test]
    fn test_draw_reef_briefing() {
        let mut app = create_test_app();
        app.screen = Screen::Reef;

        let text = render(&mut app);

        assert!(text.contains("[#]"), "legend should show the litter glyphs");
    }

    #[test]
    fn test_draw_reef_board_records_play_field() {
        let mut app = create_test_app();
        app.screen = Screen::Reef;
        app.reef.start();
        let _ = app.reef.push_item(ItemKind::Turtle, 50., 1.);
        for _ in 0..40 {
            app.reef.frame();
        }

        let text = render(&mut app);

        assert!(text.contains("Reef health"), "health gauge should be shown");
        assert!(text.contains("{@}"), "the turtle should be drawn");
        assert!(app.play_field.width > 0 && app.play_field.height > 0);
    }

    #[test]
    fn test_draw_reef_level_up_banner() {
        let mut app = create_test_app();
        app.screen = Screen::Reef;
        app.reef.start();
        for _ in 0..5 {
            let _ = app.reef.push_item(ItemKind::Trash, 50., 1.);
            for _ in 0..50 {
                app.reef.frame();
            }
            let _ = app.reef.click(50., 40.);
        }
        assert!(app.reef.shows_level_up());

        let text = render(&mut app);

        assert!(text.contains("LEVEL 2!"), "level-up banner should be shown");
        assert!(text.contains("+10"), "score particles should be shown");
    }

    #[test]
    fn test_draw_reef_info_panel() {
        let mut app = create_test_app();
        app.screen = Screen::Reef;
        app.reef.start();
        assert!(!render(&mut app).contains("About the reef"));

        app.reef_info = true;
        let text = render(&mut app);

        assert!(text.contains("About the reef"), "the panel title should be shown");
        assert!(
            text.contains("The coral reefs of Guarapari"),
            "the panel text should be shown"
        );
        assert!(text.contains("Reef health"), "the status bar should stay visible");
    }

    #[test]
    fn test_draw_reef_end_dialogs() {
        let mut app = create_test_app();
        app.screen = Screen::Reef;
        app.reef.start();
        for _ in 0..15 {
            let _ = app.reef.push_item(ItemKind::Bottle, 50., 150.);
            app.reef.frame();
        }
        assert_eq!(app.reef.phase(), ReefPhase::GameOver);
        assert!(render(&mut app).contains("Game Over"));

        app.reef.start();
        for _ in 0..17 {
            let _ = app.reef.push_item(ItemKind::Bottle, 50., 1.);
            let _ = app.reef.click(50., -10.);
        }
        assert_eq!(app.reef.phase(), ReefPhase::Victory);
        assert!(render(&mut app).contains("Victory"));
    }

    #[test]
    fn test_board_point_centres_the_board() {
        let size = 9;

        let (x, y) = board_point(Position::new(0, 0), size).expect("conversion should succeed");
        assert!((x + 4.).abs() < 1e-9 && (y - 4.).abs() < 1e-9);

        let (x, y) = board_point(Position::new(8, 8), size).expect("conversion should succeed");
        assert!((x - 4.).abs() < 1e-9 && (y + 4.).abs() < 1e-9);

        let (x, y) = board_point(Position::new(4, 4), size).expect("conversion should succeed");
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn test_legend_groups_glyphs_by_category() {
        assert_eq!(legend(Category::Litter), "[#] [b] [&] [u] [/]");
        assert_eq!(legend(Category::Pollution), "~*~");
        assert_eq!(legend(Category::MarineLife), "><> <>< (o) {@}");
    }
}
