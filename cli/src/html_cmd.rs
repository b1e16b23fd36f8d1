//! `switch-to-dev`, `switch-to-prod` and `mode`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mesa_explorer_html_mode::{ScriptLayout, SiteMode, read_mode, switch_file};

#[derive(Debug, Parser)]
pub struct PageArgs {
    /// Page to rewrite
    #[arg(long, value_name = "FILE", default_value = "index.html")]
    pub index: PathBuf,

    /// TOML file overriding script prefixes and groups
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,
}

impl PageArgs {
    fn load_layout(&self) -> anyhow::Result<ScriptLayout> {
        match &self.layout {
            Some(path) => ScriptLayout::load(path)
                .with_context(|| format!("loading script layout {}", path.display())),
            None => Ok(ScriptLayout::default()),
        }
    }
}

fn switched_message(mode: SiteMode) -> &'static str {
    match mode {
        SiteMode::Development => {
            "Switched to development mode. Development scripts are now active."
        }
        SiteMode::Production => "Switched to production mode. Production scripts are now active.",
    }
}

pub fn run_switch(args: PageArgs, mode: SiteMode) -> anyhow::Result<()> {
    let layout = args.load_layout()?;
    switch_file(&args.index, mode, &layout)
        .with_context(|| format!("switching {} to {mode} mode", args.index.display()))?;
    println!("{}", switched_message(mode));
    Ok(())
}

pub fn run_mode(args: PageArgs) -> anyhow::Result<()> {
    let layout = args.load_layout()?;
    let mode = read_mode(&args.index, &layout)
        .with_context(|| format!("inspecting {}", args.index.display()))?;
    match mode {
        Some(mode) => println!("{mode}"),
        None => println!("mixed"),
    }
    Ok(())
}
