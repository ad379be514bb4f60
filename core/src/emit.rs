use std::io::{self, Write};

use hanoi_common::puzzle::Move;

/// Writes one line per move, in order, and returns the number of lines written.
pub fn write_moves<W, I>(writer: &mut W, moves: I) -> io::Result<u64>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Move>,
{
    let mut written: u64 = 0;
    for mv in moves {
        writeln!(writer, "{mv}")?;
        written += 1;
    }
    Ok(written)
}
