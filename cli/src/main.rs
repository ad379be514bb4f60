mod commands;
mod terminal;

use commands::{CommandLine, solve};
use hanoi_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        disk_count: commands.disks,
        pegs: (commands.from, commands.using, commands.to),
        verify: commands.verify,
    };

    solve::solve(&cfg)
}
