#![cfg(feature = "std")]
//! Interactive loop: read a line, fire, show what happened.

use std::io::{BufRead, Write};

use crate::{
    common::ShotResult,
    coordinate::{parse_command, Command},
    game::{MatchEngine, MatchPhase, SessionOutcome, ShotRecord},
    ui,
};

/// Play `engine` to completion against lines read from `input`.
///
/// End of input is treated like the quit sentinel.
pub fn run_session<R, W>(
    engine: &mut MatchEngine,
    mut input: R,
    mut output: W,
) -> anyhow::Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let size = engine.config().board_size();
    writeln!(output, "{}\n", ui::targeting_help(size))?;

    loop {
        if let Some(outcome) = engine.outcome() {
            let outcome = SessionOutcome::from(outcome);
            writeln!(output, "\n{}", ui::render_snapshot(&engine.snapshot()))?;
            writeln!(output, "{}", ui::outcome_banner(outcome))?;
            return Ok(outcome);
        }

        writeln!(output, "{}", ui::render_snapshot(&engine.snapshot()))?;
        let coord = loop {
            write!(output, "Enter target (Q to quit): ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                log::info!("input closed, abandoning session");
                writeln!(output, "\n{}", ui::outcome_banner(SessionOutcome::Abandoned))?;
                return Ok(SessionOutcome::Abandoned);
            }
            match parse_command(&line, size) {
                Ok(Command::Quit) => {
                    writeln!(output, "{}", ui::outcome_banner(SessionOutcome::Abandoned))?;
                    return Ok(SessionOutcome::Abandoned);
                }
                Ok(Command::Help) => writeln!(output, "{}", ui::targeting_help(size))?,
                Ok(Command::Fire(coord)) => break coord,
                Err(e) => writeln!(output, "✗ Invalid coordinate: {}", e)?,
            }
        };

        let result = engine.submit_player_shot(coord)?;
        writeln!(
            output,
            "\n{}",
            ui::player_shot_message(&ShotRecord { coord, result })
        )?;
        if result == ShotResult::AlreadyTried {
            continue;
        }

        if engine.phase() == MatchPhase::AwaitingOpponentShot {
            let (coord, result) = engine.run_opponent_turn()?;
            writeln!(
                output,
                "{}\n",
                ui::opponent_shot_message(&ShotRecord { coord, result })
            )?;
        }
    }
}
