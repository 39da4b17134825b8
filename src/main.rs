mod cli;
mod commands;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::convert::ConvertOptions;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if !cli.pdf.exists() {
        eprintln!("Error: {} not found", cli.pdf.display());
        std::process::exit(1);
    }

    let output = cli.output_path();
    let options = ConvertOptions {
        range: cli.page_range(),
        include_page_numbers: !cli.no_page_numbers,
        engine: cli.engine,
    };
    commands::convert::run(&cli.pdf, Some(&output), &options)?;

    Ok(())
}
