// testchars: create empty files with awkward names for exercising file pickers
// and editor plugins.
// Usage: testchars [generate [--dir PATH] [--profile basic|full] [--parallel]] | list

use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;

use testchars::cli::{render_listing, Cli, Command};
use testchars::generate::{generate, GenerateOptions};
use testchars::logging;
use testchars::settings::{load_settings, Overrides, RunConfig, Settings};

fn main() {
    let mut cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(&mut cli) {
        eprintln!("testchars: {:#}", e);
        exit(1);
    }
}

fn run(cli: &mut Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    match cli.command() {
        Command::Generate(args) => {
            let config = RunConfig::resolve(settings, Overrides::from(&args));
            let corpus = config.corpus().context("invalid extra_names in settings")?;
            let report = generate(
                &config.dir,
                &corpus,
                GenerateOptions {
                    parallel: config.parallel,
                },
            )?;
            println!(
                "Created {} files under {}",
                report.created.len(),
                report.directory.display()
            );
        }
        Command::List(args) => {
            let config = RunConfig::resolve(settings, Overrides::from(&args));
            let corpus = config.corpus().context("invalid extra_names in settings")?;
            print!("{}", render_listing(&corpus));
        }
    }
    Ok(())
}
