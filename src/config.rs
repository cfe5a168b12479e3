use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const DEFAULT_NUM_SHIPS: usize = 3;
/// Rows are labelled `A..=Z`, which caps the board edge.
pub const MAX_BOARD_SIZE: usize = 26;

/// Construction-time parameters of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    board_size: usize,
    num_ships: usize,
}

impl MatchConfig {
    /// Validate and build a configuration.
    pub fn new(board_size: usize, num_ships: usize) -> Result<Self, ConfigError> {
        if board_size == 0 {
            return Err(ConfigError::BoardTooSmall);
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if num_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        let cells = board_size * board_size;
        if num_ships > cells {
            return Err(ConfigError::TooManyShips {
                ships: num_ships,
                cells,
            });
        }
        Ok(Self {
            board_size,
            num_ships,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn num_ships(&self) -> usize {
        self.num_ships
    }

    /// Total number of cells on one grid.
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            num_ships: DEFAULT_NUM_SHIPS,
        }
    }
}
