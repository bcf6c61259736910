use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use easel_tui::{Shell, install_panic_hook};

mod demo;

#[derive(Parser)]
#[command(name = "easel", about = "Demo shell for the easel panel container")]
#[command(version)]
struct Cli {
    /// Theme to start with
    #[arg(short, long, default_value = "easel")]
    theme: String,

    /// Directory of extra .toml themes
    #[arg(long)]
    theme_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    install_panic_hook();

    let mut shell = Shell::new(demo::build_container());
    if let Some(dir) = &cli.theme_dir {
        let loaded = shell.themes.load_dir(dir)?;
        tracing::info!(loaded, dir = %dir.display(), "loaded extra themes");
    }
    shell = shell.with_theme(&cli.theme);

    shell.run()?;
    Ok(())
}
