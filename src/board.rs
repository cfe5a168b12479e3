//! One side's grid: cell states plus the set of ships not yet found.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, CellState, Coordinate, ShotResult};

/// Remaining single-cell ships of one side. Only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: BTreeSet<Coordinate>,
}

impl Fleet {
    /// Build a fleet from explicit coordinates, rejecting duplicates and
    /// anything outside a `size`×`size` board.
    pub fn from_coords<I>(size: usize, coords: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut ships = BTreeSet::new();
        for coord in coords {
            if !coord.in_bounds(size) {
                return Err(BoardError::OutOfBounds { coord, size });
            }
            if !ships.insert(coord) {
                return Err(BoardError::DuplicateShip(coord));
            }
        }
        Ok(Self { ships })
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.ships.contains(coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.ships.iter()
    }

    fn remove(&mut self, coord: &Coordinate) -> bool {
        self.ships.remove(coord)
    }
}

/// Draw `n` distinct coordinates uniformly from a `size`×`size` board.
///
/// Ships are points, so adjacency is allowed.
pub fn place_ships_randomly<R: Rng + ?Sized>(
    n: usize,
    size: usize,
    rng: &mut R,
) -> Result<Fleet, BoardError> {
    let cells = size * size;
    if n > cells {
        return Err(BoardError::TooManyShips { ships: n, cells });
    }
    let ships = rand::seq::index::sample(rng, cells, n)
        .into_iter()
        .map(|i| Coordinate::from_index(i, size))
        .collect();
    Ok(Fleet { ships })
}

/// How a cell is shown in a [`GridView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    Unknown,
    /// Undiscovered ship; only present in revealed views.
    Ship,
    Miss,
    Hit,
}

/// Read-only, row-major picture of a grid for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridView {
    pub size: usize,
    pub cells: Vec<Mark>,
}

impl GridView {
    pub fn get(&self, coord: Coordinate) -> Option<Mark> {
        if coord.in_bounds(self.size) {
            Some(self.cells[coord.index(self.size)])
        } else {
            None
        }
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}

/// Cell states of one board and the ships still afloat on it.
#[derive(Clone, PartialEq, Eq)]
pub struct GridState {
    size: usize,
    cells: Vec<CellState>,
    fleet: Fleet,
    initial_ships: usize,
}

impl GridState {
    /// A fresh grid of `Unknown` cells holding `fleet`.
    pub fn new(size: usize, fleet: Fleet) -> Result<Self, BoardError> {
        if let Some(coord) = fleet.iter().find(|c| !c.in_bounds(size)) {
            return Err(BoardError::OutOfBounds { coord: *coord, size });
        }
        Ok(Self {
            size,
            cells: alloc::vec![CellState::Unknown; size * size],
            initial_ships: fleet.len(),
            fleet,
        })
    }

    /// Grid with ships at the given coordinates.
    pub fn with_fleet<I>(size: usize, coords: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Self::new(size, Fleet::from_coords(size, coords)?)
    }

    /// Grid with `n` ships placed uniformly at random.
    pub fn with_random_fleet<R: Rng + ?Sized>(
        size: usize,
        n: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let fleet = place_ships_randomly(n, size, rng)?;
        log::debug!("placed {} ships on a {}x{} grid", fleet.len(), size, size);
        Self::new(size, fleet)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the cell at `coord`, or `None` if out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        if coord.in_bounds(self.size) {
            Some(self.cells[coord.index(self.size)])
        } else {
            None
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Ships placed at construction.
    pub fn initial_ships(&self) -> usize {
        self.initial_ships
    }

    pub fn ships_remaining(&self) -> usize {
        self.fleet.len()
    }

    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellState::Hit).count()
    }

    /// Number of cells that have not been targeted yet.
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellState::Unknown).count()
    }

    /// Apply one shot. A cell that was already resolved is left untouched.
    pub fn resolve(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        if !coord.in_bounds(self.size) {
            return Err(BoardError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        let idx = coord.index(self.size);
        if self.cells[idx] != CellState::Unknown {
            return Ok(ShotResult::AlreadyTried);
        }
        if self.fleet.remove(&coord) {
            self.cells[idx] = CellState::Hit;
            Ok(ShotResult::Hit)
        } else {
            self.cells[idx] = CellState::Miss;
            Ok(ShotResult::Miss)
        }
    }

    /// `true` once every ship has been hit.
    pub fn is_defeated(&self) -> bool {
        self.fleet.is_empty()
    }

    /// View for the side shooting at this grid: ships stay hidden.
    pub fn concealed_view(&self) -> GridView {
        self.view(false)
    }

    /// View for the owner of this grid: undiscovered ships are shown.
    pub fn revealed_view(&self) -> GridView {
        self.view(true)
    }

    fn view(&self, reveal: bool) -> GridView {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, state)| match state {
                CellState::Hit => Mark::Hit,
                CellState::Miss => Mark::Miss,
                CellState::Unknown
                    if reveal && self.fleet.contains(&Coordinate::from_index(i, self.size)) =>
                {
                    Mark::Ship
                }
                CellState::Unknown => Mark::Unknown,
            })
            .collect();
        GridView {
            size: self.size,
            cells,
        }
    }
}

impl fmt::Debug for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GridState {{ size: {}, ships: {}/{}, hits: {}, unknown: {} }}",
            self.size,
            self.fleet.len(),
            self.initial_ships,
            self.hit_count(),
            self.unknown_count()
        )
    }
}
