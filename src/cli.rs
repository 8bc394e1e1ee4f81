// CLI module - command-line argument parsing and handlers
//
// The wizard itself takes a handful of flags. One subcommand inspects
// configuration:
// - config --show: Display effective configuration
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use crate::theme::Appearance;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Long flags the launcher passes Go-style, with a single dash
const SINGLE_DASH_FLAGS: &[&str] = &["output", "appearance", "no-splash"];

/// zero-wizard - Interactive project scaffolding wizard
#[derive(Parser, Debug)]
#[command(name = "zero-wizard")]
#[command(version = VERSION)]
#[command(about = "Interactive project scaffolding wizard", long_about = None)]
pub struct Cli {
    /// Write the JSON record to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Palette variant
    #[arg(long, value_parser = ["auto", "dark", "light"])]
    pub appearance: Option<String>,

    /// Skip the splash animation
    #[arg(long)]
    pub no_splash: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn appearance(&self) -> Option<Appearance> {
        self.appearance.as_deref().map(Appearance::from_str)
    }
}

/// Rewrite `-output x` and `-output=x` into their double-dash form
///
/// Anything after a bare `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if SINGLE_DASH_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config { show, path }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show()?;
            } else {
                // No flag provided, show help
                println!("Usage: zero-wizard config [--show|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the wizard
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}
