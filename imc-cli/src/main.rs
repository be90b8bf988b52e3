//! IMC CLI - Command line tool for campaign report export and series dumps.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "imc-cli",
    version,
    about = "Investor-campaign dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: imc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    imc_cmd::run(cli.command)
}
