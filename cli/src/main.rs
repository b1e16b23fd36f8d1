use clap::Parser;
use mesa_explorer_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mesa_explorer_cli::logging::init(cli.verbose);
    cli.run()
}
