use std::io::{self, BufWriter, Write};

use anyhow::Context;
use hanoi_common::config::Config;
use hanoi_core::solver::{Moves, Puzzle};
use hanoi_core::{emit, towers};
use tracing::{debug, warn};

/// Prints the full move sequence for `cfg` to stdout.
///
/// Arguments are validated before anything is written, so an invalid request
/// produces no partial output.
pub fn solve(cfg: &Config) -> anyhow::Result<()> {
    let puzzle = Puzzle::from_config(cfg)?;

    if puzzle.disks.total_moves().is_none() {
        warn!(
            "{} disks need more than 2^64 moves; output will not finish",
            puzzle.disks
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if !print_moves(&mut out, puzzle.moves())? {
        return Ok(());
    }

    if cfg.verify {
        towers::replay(puzzle.disks, puzzle.pegs, puzzle.moves())
            .context("generated sequence failed verification")?;
    }

    Ok(())
}

/// Writes and flushes every move. Returns `false` if the reader went away first.
fn print_moves<W: Write>(out: &mut W, moves: Moves) -> anyhow::Result<bool> {
    let result = emit::write_moves(out, moves).and_then(|written| {
        out.flush()?;
        Ok(written)
    });

    match result {
        Ok(written) => {
            debug!("Wrote {written} moves");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early: {e}");
            Ok(false)
        }
        Err(e) => Err(e).context("failed to write moves to stdout"),
    }
}
