//! Configuration management CLI commands.

use crate::cli::common::{resolve_catalog, to_json, CliError, CliResult};
use beadgrid::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default catalog (MARD, COCO, manman, panpan, mixiaowo)
    #[arg(long, value_name = "NAME")]
    catalog: Option<String>,

    /// Indent JSON output (true or false)
    #[arg(long, value_name = "BOOL")]
    pretty_json: Option<bool>,

    /// Catalog table JSON file replacing the built-in sample table
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => show_path(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            println!("{}", to_json(&config, true)?);
        } else {
            println!("Catalog:");
            println!("  default:     {}", config.catalog.default);
            match &config.catalog.table {
                Some(table) => println!("  table:       {}", table.display()),
                None => println!("  table:       (built-in sample)"),
            }
            println!("Output:");
            println!("  pretty_json: {}", config.output.pretty_json);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.catalog.is_none() && self.pretty_json.is_none() && self.table.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog, --pretty-json or --table",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(name) = &self.catalog {
            config.catalog.default = resolve_catalog(Some(name), &config)?;
        }
        if let Some(table) = &self.table {
            config.catalog.table = Some(table.clone());
        }
        if let Some(pretty) = self.pretty_json {
            config.output.pretty_json = pretty;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn show_path() -> CliResult<()> {
    let path = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate configuration: {e:#}")))?;
    println!("{}", path.display());
    Ok(())
}
