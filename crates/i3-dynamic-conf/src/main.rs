#![warn(missing_docs)]

//! Entry point for the `i3-dynamic-conf` binary.

mod cli;
mod error;

use std::{
    fs,
    io::{self, Write},
    process,
};

use clap::Parser;
use tracing::{error, info};

use crate::{
    cli::Cli,
    error::{Error, Result},
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and generate the config.
fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log.spec());

    let config = i3conf::resolve_config_path(cli.config_file.as_deref())?;
    let template = i3conf::resolve_template_path(cli.template.as_deref())?;
    info!(config = %config.display(), template = %template.display(), "generating");

    let rendered = i3conf::generate(&config, &template)?;

    match cli.output {
        Some(path) => fs::write(&path, &rendered).map_err(|source| Error::Write { path, source }),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")
                .and_then(|()| stdout.flush())
                .map_err(Error::Stdout)
        }
    }
}
