use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use rand::rngs::SmallRng;

use crate::{
    ai::{RandomTargeting, TargetSelector},
    board::{Fleet, GridState, GridView},
    common::{Coordinate, MatchError, ShotResult},
    config::MatchConfig,
};

/// Terminal result of a match from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Victory,
    Defeat,
}

/// How an interactive session ended. `Abandoned` means the player quit
/// before either fleet was sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionOutcome {
    Victory,
    Defeat,
    Abandoned,
}

impl From<Outcome> for SessionOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Victory => SessionOutcome::Victory,
            Outcome::Defeat => SessionOutcome::Defeat,
        }
    }
}

/// Turn state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    AwaitingPlayerShot,
    AwaitingOpponentShot,
    MatchOver(Outcome),
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub coord: Coordinate,
    pub result: ShotResult,
}

/// Shots made during one call to [`MatchEngine::play_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub player: ShotRecord,
    /// `None` when the player's shot was a repeat or ended the match.
    pub opponent: Option<ShotRecord>,
    pub phase: MatchPhase,
}

/// Everything the presentation layer needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    /// The player's view of the opponent's grid; ships are hidden.
    pub target_view: GridView,
    /// The player's own grid with ships shown.
    pub own_view: GridView,
    pub player_ships_remaining: usize,
    pub opponent_ships_remaining: usize,
    pub last_player_shot: Option<ShotRecord>,
    pub last_opponent_shot: Option<ShotRecord>,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// Rules and turn sequencing for a human player against a scripted opponent.
pub struct MatchEngine {
    config: MatchConfig,
    /// The human's own board, shot at by the opponent.
    player_grid: GridState,
    /// The opponent's board, shot at by the human.
    opponent_grid: GridState,
    opponent_tried: BTreeSet<Coordinate>,
    selector: Box<dyn TargetSelector>,
    rng: SmallRng,
    phase: MatchPhase,
    last_player_shot: Option<ShotRecord>,
    last_opponent_shot: Option<ShotRecord>,
    player_shots: usize,
}

impl MatchEngine {
    /// Start a match with both fleets placed at random and the opponent
    /// using [`RandomTargeting`].
    pub fn new(config: MatchConfig, rng: SmallRng) -> Result<Self, MatchError> {
        Self::with_selector(config, rng, Box::new(RandomTargeting::new()))
    }

    /// Start a match with random placement and a custom opponent policy.
    pub fn with_selector(
        config: MatchConfig,
        mut rng: SmallRng,
        selector: Box<dyn TargetSelector>,
    ) -> Result<Self, MatchError> {
        let size = config.board_size();
        let player_grid = GridState::with_random_fleet(size, config.num_ships(), &mut rng)?;
        let opponent_grid = GridState::with_random_fleet(size, config.num_ships(), &mut rng)?;
        Ok(Self::assemble(config, player_grid, opponent_grid, selector, rng))
    }

    /// Start a match from explicit fleets. Both must hold exactly
    /// `config.num_ships()` ships inside the board.
    pub fn from_fleets(
        config: MatchConfig,
        player_fleet: Fleet,
        opponent_fleet: Fleet,
        rng: SmallRng,
        selector: Box<dyn TargetSelector>,
    ) -> Result<Self, MatchError> {
        for fleet in [&player_fleet, &opponent_fleet] {
            if fleet.len() != config.num_ships() {
                return Err(MatchError::FleetSizeMismatch {
                    expected: config.num_ships(),
                    actual: fleet.len(),
                });
            }
        }
        let size = config.board_size();
        let player_grid = GridState::new(size, player_fleet)?;
        let opponent_grid = GridState::new(size, opponent_fleet)?;
        Ok(Self::assemble(config, player_grid, opponent_grid, selector, rng))
    }

    fn assemble(
        config: MatchConfig,
        player_grid: GridState,
        opponent_grid: GridState,
        selector: Box<dyn TargetSelector>,
        rng: SmallRng,
    ) -> Self {
        log::debug!(
            "match started: {}x{} board, {} ships per side",
            config.board_size(),
            config.board_size(),
            config.num_ships()
        );
        Self {
            config,
            player_grid,
            opponent_grid,
            opponent_tried: BTreeSet::new(),
            selector,
            rng,
            phase: MatchPhase::AwaitingPlayerShot,
            last_player_shot: None,
            last_opponent_shot: None,
            player_shots: 0,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            MatchPhase::MatchOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The human's own board.
    pub fn player_grid(&self) -> &GridState {
        &self.player_grid
    }

    /// The opponent's board.
    pub fn opponent_grid(&self) -> &GridState {
        &self.opponent_grid
    }

    /// Coordinates the opponent has already fired at.
    pub fn opponent_tried(&self) -> &BTreeSet<Coordinate> {
        &self.opponent_tried
    }

    /// Fire the human player's shot at the opponent's grid.
    ///
    /// `AlreadyTried` leaves the phase unchanged so the caller can prompt
    /// again. A shot that sinks the last opponent ship ends the match before
    /// the opponent can reply.
    pub fn submit_player_shot(&mut self, coord: Coordinate) -> Result<ShotResult, MatchError> {
        match self.phase {
            MatchPhase::AwaitingPlayerShot => {}
            MatchPhase::AwaitingOpponentShot => return Err(MatchError::NotPlayerTurn),
            MatchPhase::MatchOver(_) => return Err(MatchError::MatchOver),
        }
        let result = self
            .opponent_grid
            .resolve(coord)
            .map_err(|_| MatchError::OutOfBounds(coord))?;
        log::trace!("player fired at {}: {:?}", coord, result);
        if !result.is_resolved() {
            return Ok(result);
        }

        self.player_shots += 1;
        self.last_player_shot = Some(ShotRecord { coord, result });
        self.phase = if self.opponent_grid.is_defeated() {
            log::info!("opponent fleet destroyed after {} shots", self.player_shots);
            MatchPhase::MatchOver(Outcome::Victory)
        } else {
            MatchPhase::AwaitingOpponentShot
        };
        Ok(result)
    }

    /// Let the scripted opponent fire one shot at the player's grid.
    pub fn run_opponent_turn(&mut self) -> Result<(Coordinate, ShotResult), MatchError> {
        match self.phase {
            MatchPhase::AwaitingOpponentShot => {}
            MatchPhase::AwaitingPlayerShot => return Err(MatchError::NotOpponentTurn),
            MatchPhase::MatchOver(_) => return Err(MatchError::MatchOver),
        }
        let size = self.config.board_size();
        let coord = self
            .selector
            .select_target(&mut self.rng, size, &self.opponent_tried)
            .ok_or(MatchError::NoTargetsLeft)?;
        if !coord.in_bounds(size) {
            return Err(MatchError::OutOfBounds(coord));
        }
        // the tried set, not the grid, guards against repeats
        let coord = if self.opponent_tried.contains(&coord) {
            log::warn!("selector repeated {}, redrawing", coord);
            RandomTargeting::new()
                .select_target(&mut self.rng, size, &self.opponent_tried)
                .ok_or(MatchError::NoTargetsLeft)?
        } else {
            coord
        };
        self.opponent_tried.insert(coord);
        self.fire_opponent_shot(coord)
    }

    fn fire_opponent_shot(&mut self, coord: Coordinate) -> Result<(Coordinate, ShotResult), MatchError> {
        let result = self
            .player_grid
            .resolve(coord)
            .map_err(|_| MatchError::OutOfBounds(coord))?;
        log::trace!("opponent fired at {}: {:?}", coord, result);
        self.selector.handle_shot_result(coord, result);
        self.last_opponent_shot = Some(ShotRecord { coord, result });
        self.phase = if self.player_grid.is_defeated() {
            log::info!(
                "player fleet destroyed after {} opponent shots",
                self.opponent_tried.len()
            );
            MatchPhase::MatchOver(Outcome::Defeat)
        } else {
            MatchPhase::AwaitingPlayerShot
        };
        Ok((coord, result))
    }

    /// Player shot followed, if the match continues, by the opponent's reply.
    pub fn play_round(&mut self, coord: Coordinate) -> Result<RoundReport, MatchError> {
        let result = self.submit_player_shot(coord)?;
        let player = ShotRecord { coord, result };
        let opponent = if self.phase == MatchPhase::AwaitingOpponentShot {
            let (coord, result) = self.run_opponent_turn()?;
            Some(ShotRecord { coord, result })
        } else {
            None
        };
        Ok(RoundReport {
            player,
            opponent,
            phase: self.phase,
        })
    }

    /// Read-only picture of the match for rendering.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            target_view: self.opponent_grid.concealed_view(),
            own_view: self.player_grid.revealed_view(),
            player_ships_remaining: self.player_grid.ships_remaining(),
            opponent_ships_remaining: self.opponent_grid.ships_remaining(),
            last_player_shot: self.last_player_shot,
            last_opponent_shot: self.last_opponent_shot,
            player_shots: self.player_shots,
            opponent_shots: self.opponent_tried.len(),
        }
    }
}
