//! Type definitions and enums for the application screens and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. This is used to
/// determine which screen to render and what actions to take based on user input. The phases of
/// each game are kept by the games themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen.
    ///
    /// This variant represents the game selection menu shown on launch.
    MainMenu(MainMenuItem),
    /// Maze clean-up game screen.
    Maze,
    /// Reef rescue game screen.
    Reef,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which items
/// can the user select in the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Mariana Clean-up" menu option.
    Maze,
    /// "Reef Guardians" menu option.
    Reef,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Menu items in display order.
    pub(crate) const ALL: [Self; 3] = [Self::Maze, Self::Reef, Self::Quit];

    /// Returns the label shown for the item.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Maze => "Mariana Clean-up",
            Self::Reef => "Reef Guardians",
            Self::Quit => "Quit",
        }
    }

    /// Returns the item below this one, staying on the last item.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Maze => Self::Reef,
            Self::Reef | Self::Quit => Self::Quit,
        }
    }

    /// Returns the item above this one, staying on the first item.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Maze | Self::Reef => Self::Maze,
            Self::Quit => Self::Reef,
        }
    }
}

/// Centered dialog shown in place of a game board.
///
/// This enumeration holds the specifics of every dialog the games display between rounds. The
/// dialogs share their layout and only differ in title, colour and key hints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dialog {
    /// Maze briefing before the first level.
    MazeBriefing,
    /// Maze level completed.
    MazeLevelComplete,
    /// Maze countdown expired.
    MazeGameOver,
    /// Every maze level completed.
    MazeVictory,
    /// Reef briefing.
    ReefBriefing,
    /// Reef health gone.
    ReefGameOver,
    /// Reef final score reached.
    ReefVictory,
}

impl Dialog {
    /// Returns the title drawn in the dialog border.
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::MazeBriefing => "Mariana Clean-up",
            Self::MazeLevelComplete => "Level Complete",
            Self::MazeGameOver | Self::ReefGameOver => "Game Over",
            Self::MazeVictory | Self::ReefVictory => "Victory",
            Self::ReefBriefing => "Reef Guardians",
        }
    }

    /// Returns the key hints drawn at the bottom of the dialog.
    pub(crate) const fn hint(self) -> &'static str {
        match self {
            Self::MazeBriefing | Self::ReefBriefing => "(l) start / (h) return / (q) quit",
            Self::MazeLevelComplete => "(l) continue / (esc) menu",
            Self::MazeGameOver => "(l) retry / (esc) menu",
            Self::MazeVictory => "(l) play again",
            Self::ReefGameOver | Self::ReefVictory => "(l) play again / (esc) menu",
        }
    }

    /// Returns whether the dialog reports a bad outcome.
    pub(crate) const fn is_failure(self) -> bool {
        matches!(self, Self::MazeGameOver | Self::ReefGameOver)
    }
}
