#![cfg(feature = "std")]

//! Text-based hot-seat driver: both marks are entered from the same input.

use std::io::{BufRead, Write};

use anyhow::anyhow;

use crate::{board::Outcome, common::InputError, game::GameEngine};

pub const WRONG_ARITY_MSG: &str = "Invalid number of arguments. Please try again.";
pub const BAD_NUMBER_MSG: &str = "Invalid number format. Please try again.";
pub const BAD_POSITION_MSG: &str = "Invalid position. Please try again.";

/// Parse `row,col` (0-indexed, row first).
pub fn parse_move(input: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongArity(tokens.len()));
    }
    let parse = |token: &str| -> Result<usize, InputError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber(token.to_string()));
        }
        token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

/// Run one game to completion, reading moves from `input` and writing the
/// board, prompts and the final result to `output`.
///
/// Malformed lines and rejected positions re-prompt the same player. Running
/// out of input before the game ends is an error.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    mut output: W,
) -> anyhow::Result<Outcome> {
    while engine.can_continue() {
        writeln!(output, "{}", engine.board())?;
        let mark = engine.current_mark();
        writeln!(
            output,
            "Player {}'s turn. Enter row and column separated by comma.",
            mark
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(anyhow!(
                "input closed before the game finished ({} moves played)",
                engine.board().move_count()
            ));
        }

        let (row, col) = match parse_move(&line) {
            Ok(coord) => coord,
            Err(e) => {
                log::debug!("malformed input {:?}: {}", line.trim_end(), e);
                let msg = match e {
                    InputError::WrongArity(_) => WRONG_ARITY_MSG,
                    InputError::NotANumber(_) => BAD_NUMBER_MSG,
                };
                writeln!(output, "{}", msg)?;
                continue;
            }
        };

        if engine.play(row, col).is_err() {
            writeln!(output, "{}", BAD_POSITION_MSG)?;
        }
    }

    let outcome = engine
        .result()
        .ok_or_else(|| anyhow!("game loop ended without a result"))?;
    writeln!(output, "{}", engine.board())?;
    writeln!(output, "{}", outcome)?;
    output.flush()?;
    log::info!("game over after {} moves: {}", engine.board().move_count(), outcome);
    Ok(outcome)
}
