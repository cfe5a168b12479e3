//! Common types for the engine: coordinates, cell states, shot results and
//! the error enums shared between modules.

use core::fmt;

/// A 0-based `(row, col)` position on a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when both components lie in `[0, size)`.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index into a `size`×`size` grid.
    pub(crate) fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub(crate) fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// State of a single cell as seen by whoever is shooting at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Never targeted.
    #[default]
    Unknown,
    /// Targeted, no ship present.
    Miss,
    /// Targeted, ship present.
    Hit,
}

/// Outcome of resolving one shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The cell was resolved earlier; nothing changed.
    AlreadyTried,
    Hit,
    Miss,
}

impl ShotResult {
    /// `true` for `Hit` and `Miss`, i.e. the shot consumed a turn.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ShotResult::AlreadyTried)
    }
}

/// Rejections produced while turning a line of text into a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input shorter than two characters.
    BadFormat,
    /// First character is not a row letter for this board.
    RowOutOfRange,
    /// Remainder is not a non-negative integer literal.
    ColumnNotNumeric,
    /// Column outside `[1, size]`.
    ColumnOutOfRange,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadFormat => write!(f, "Input too short, expected a row letter and a column number"),
            ParseError::RowOutOfRange => write!(f, "Row letter is outside the board"),
            ParseError::ColumnNotNumeric => write!(f, "Column must be a number"),
            ParseError::ColumnOutOfRange => write!(f, "Column number is outside the board"),
        }
    }
}

/// Invalid construction-time parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall,
    BoardTooLarge { size: usize, max: usize },
    NoShips,
    TooManyShips { ships: usize, cells: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge { size, max } => {
                write!(f, "Board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::NoShips => write!(f, "Fleet must contain at least one ship"),
            ConfigError::TooManyShips { ships, cells } => {
                write!(f, "{} ships do not fit on a board of {} cells", ships, cells)
            }
        }
    }
}

/// Errors returned by grid construction and shot application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { coord: Coordinate, size: usize },
    /// Two ships were given the same coordinate.
    DuplicateShip(Coordinate),
    /// Requested more ships than the grid has cells.
    TooManyShips { ships: usize, cells: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { coord, size } => write!(
                f,
                "Coordinate ({}, {}) is outside the {}x{} board",
                coord.row, coord.col, size, size
            ),
            BoardError::DuplicateShip(c) => {
                write!(f, "Two ships placed at ({}, {})", c.row, c.col)
            }
            BoardError::TooManyShips { ships, cells } => {
                write!(f, "Unable to place {} ships on {} cells", ships, cells)
            }
        }
    }
}

/// Errors returned when the match engine is driven incorrectly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Fleets or placement were rejected while building the match.
    Board(BoardError),
    /// Fleet given for one side does not match the configured size.
    FleetSizeMismatch { expected: usize, actual: usize },
    /// Shot coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// A player shot was submitted while the opponent is due to move.
    NotPlayerTurn,
    /// The opponent turn was requested while the player is due to move.
    NotOpponentTurn,
    /// The match already has a winner.
    MatchOver,
    /// The target selector had nothing left to choose from.
    NoTargetsLeft,
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Board(e) => write!(f, "Board error: {}", e),
            MatchError::FleetSizeMismatch { expected, actual } => {
                write!(f, "Expected a fleet of {} ships, got {}", expected, actual)
            }
            MatchError::OutOfBounds(c) => {
                write!(f, "Shot at ({}, {}) is outside the board", c.row, c.col)
            }
            MatchError::NotPlayerTurn => write!(f, "It is not the player's turn"),
            MatchError::NotOpponentTurn => write!(f, "It is not the opponent's turn"),
            MatchError::MatchOver => write!(f, "The match is already over"),
            MatchError::NoTargetsLeft => write!(f, "No untried coordinates remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
