//! Command-line interface definitions for i3-dynamic-conf.

use std::path::PathBuf;

use clap::Parser;
use logging::LogArgs;

/// Reads a template for an i3 configuration file and fills it in from a
/// specification of modes and variables.
#[derive(Parser, Debug)]
#[command(name = "i3-dynamic-conf", version)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// Spec file (YAML). Defaults to ~/.config/i3-dynamic-conf/config.yaml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// i3 config template used for substitution. Defaults to ~/.config/i3-dynamic-conf/template
    #[arg(short = 't', long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Write the generated config here instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
