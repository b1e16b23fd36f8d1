//! `mesa-explorer-tools`: build helpers for the MESA data explorer site.
//!
//! ## Commands
//!
//! - `gen-columns` - write `profile_columns.csv` from `$MESA_DIR`
//! - `switch-to-dev` - activate the `/js/` scripts in `index.html`
//! - `switch-to-prod` - activate the `/mesa-explorer/js/` scripts
//! - `mode` - report which mode `index.html` is in
//!
//! Every command works without arguments from the site's root directory.

use clap::{Parser, Subcommand};

pub mod columns_cmd;
pub mod html_cmd;
pub mod logging;

use columns_cmd::GenColumnsArgs;
use html_cmd::PageArgs;
use mesa_explorer_html_mode::SiteMode;

#[derive(Debug, Parser)]
#[command(name = "mesa-explorer-tools", version, about = "Build helpers for the MESA data explorer")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the column metadata CSV from a MESA column list
    GenColumns(GenColumnsArgs),

    /// Switch index.html to development scripts (/js/)
    SwitchToDev(PageArgs),

    /// Switch index.html to production scripts (/mesa-explorer/js/)
    SwitchToProd(PageArgs),

    /// Print whether index.html is in development or production mode
    Mode(PageArgs),
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::GenColumns(args) => columns_cmd::run_gen_columns(args),
            Command::SwitchToDev(args) => html_cmd::run_switch(args, SiteMode::Development),
            Command::SwitchToProd(args) => html_cmd::run_switch(args, SiteMode::Production),
            Command::Mode(args) => html_cmd::run_mode(args),
        }
    }
}
