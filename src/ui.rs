#![cfg(feature = "std")]
//! Text rendering of engine snapshots. Nothing here touches game state.

use std::fmt::Write as _;

use crate::{
    board::{GridView, Mark},
    common::ShotResult,
    coordinate::row_label,
    game::{MatchSnapshot, SessionOutcome, ShotRecord},
};

fn mark_char(mark: Mark) -> char {
    match mark {
        Mark::Unknown => '.',
        Mark::Ship => 'S',
        Mark::Miss => 'o',
        Mark::Hit => 'X',
    }
}

/// Draw a grid with row letters down the side and 1-based columns on top.
pub fn render_grid(view: &GridView) -> String {
    let mut out = String::new();
    // each column takes three characters so two-digit labels stay aligned
    let inner = view.size * 3 + 4;
    let _ = writeln!(out, "    ╔{}╗", "═".repeat(inner));
    let _ = write!(out, "    ║   ");
    for c in 0..view.size {
        let _ = write!(out, "{:>3}", c + 1);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠{}╣", "═".repeat(inner));
    for (r, row) in view.rows().enumerate() {
        let _ = write!(out, "    ║ {}", row_label(r));
        for mark in row {
            let _ = write!(out, "{:>3}", mark_char(*mark));
        }
        let _ = writeln!(out, "  ║");
    }
    let _ = writeln!(out, "    ╚{}╝", "═".repeat(inner));
    out
}

pub fn legend(reveal: bool) -> &'static str {
    if reveal {
        "    Legend: S=Ship  X=Hit  o=Miss  .=Water"
    } else {
        "    Legend: X=Hit  o=Miss  .=Unknown"
    }
}

/// Both boards plus remaining-ship counts.
pub fn render_snapshot(snapshot: &MatchSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Opponent board ({} ships left):",
        snapshot.opponent_ships_remaining
    );
    out.push_str(&render_grid(&snapshot.target_view));
    let _ = writeln!(out, "{}", legend(false));
    let _ = writeln!(
        out,
        "\nYour board ({} ships left):",
        snapshot.player_ships_remaining
    );
    out.push_str(&render_grid(&snapshot.own_view));
    let _ = writeln!(out, "{}", legend(true));
    out
}

pub fn player_shot_message(shot: &ShotRecord) -> String {
    match shot.result {
        ShotResult::Hit => format!("🎯 HIT! Your shot at {} sank an enemy ship!", shot.coord),
        ShotResult::Miss => format!("💧 Miss. Your shot at {} hit only water.", shot.coord),
        ShotResult::AlreadyTried => {
            format!("✗ You already fired at {}. Choose another target.", shot.coord)
        }
    }
}

pub fn opponent_shot_message(shot: &ShotRecord) -> String {
    match shot.result {
        ShotResult::Hit => format!("💀 ENEMY HIT! They sank your ship at {}.", shot.coord),
        ShotResult::Miss => format!("✓ Enemy missed at {}.", shot.coord),
        ShotResult::AlreadyTried => format!("Enemy fired at {} again.", shot.coord),
    }
}

pub fn outcome_banner(outcome: SessionOutcome) -> &'static str {
    match outcome {
        SessionOutcome::Victory => "🎉 VICTORY! You have sunk all enemy ships!",
        SessionOutcome::Defeat => "💀 DEFEAT. All your ships have been destroyed.",
        SessionOutcome::Abandoned => "Game abandoned. No winner declared.",
    }
}

pub fn targeting_help(size: usize) -> String {
    let last_row = row_label(size.saturating_sub(1));
    format!(
        "Enter a target as <ROW><COLUMN>, e.g. A1 or {}{}.\n\
         Rows: A-{}  Columns: 1-{}\n\
         Type Q to quit, HELP to show this message.",
        last_row, size, last_row, size
    )
}
