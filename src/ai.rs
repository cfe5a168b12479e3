// Targeting policies for the scripted opponent.

use alloc::collections::BTreeSet;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::common::{Coordinate, ShotResult};

/// Draws before falling back to choosing from the remaining cells directly.
const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Opponent coordinate-choice policy.
///
/// Implementations pick one coordinate of a `board_size`×`board_size` grid
/// that is not in `tried`, or return `None` when every cell has been tried.
pub trait TargetSelector {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
        tried: &BTreeSet<Coordinate>,
    ) -> Option<Coordinate>;

    /// Inform the selector of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coordinate, _result: ShotResult) {}
}

fn untried(board_size: usize, tried: &BTreeSet<Coordinate>) -> impl Iterator<Item = Coordinate> + '_ {
    (0..board_size * board_size)
        .map(move |i| Coordinate::from_index(i, board_size))
        .filter(move |c| !tried.contains(c))
}

/// Uniform choice over the untried cells.
///
/// Draws from the whole board and redraws on collision; once the board is
/// crowded enough that the draws keep colliding it picks uniformly among the
/// remaining cells instead, so selection always terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetSelector for RandomTargeting {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
        tried: &BTreeSet<Coordinate>,
    ) -> Option<Coordinate> {
        let cells = board_size * board_size;
        if tried.len() >= cells {
            return None;
        }
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let coord = Coordinate::new(
                rng.random_range(0..board_size),
                rng.random_range(0..board_size),
            );
            if !tried.contains(&coord) {
                return Some(coord);
            }
        }
        untried(board_size, tried).choose(rng)
    }
}

/// Fires at the untried cells in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepTargeting;

impl SweepTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetSelector for SweepTargeting {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        board_size: usize,
        tried: &BTreeSet<Coordinate>,
    ) -> Option<Coordinate> {
        untried(board_size, tried).next()
    }
}
