pub mod solve;

use clap::Parser;
use hanoi_common::config::DEFAULT_DISK_COUNT;
use hanoi_common::puzzle::DEFAULT_PEGS;

#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Prints the moves that solve the Tower of Hanoi.")]
pub struct CommandLine {
    /// Number of disks to move
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISK_COUNT, allow_negative_numbers = true)]
    pub disks: i64,
    /// Label of the peg the disks start on
    #[arg(long, default_value_t = DEFAULT_PEGS.0)]
    pub from: u32,
    /// Label of the intermediate peg
    #[arg(long, default_value_t = DEFAULT_PEGS.1)]
    pub using: u32,
    /// Label of the peg the disks end on
    #[arg(long, default_value_t = DEFAULT_PEGS.2)]
    pub to: u32,
    /// Replay the printed moves against simulated pegs
    #[arg(long)]
    pub verify: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
