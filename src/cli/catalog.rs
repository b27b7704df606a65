//! Color catalog lookup commands.

use crate::cli::common::{load_config, resolve_catalog, to_json, CliError, CliResult};
use beadgrid::catalog::{sort_by_hue, Catalog, ColorCatalog};
use beadgrid::constants::UNKNOWN_CODE;
use beadgrid::models::RgbColor;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Color catalog lookups
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Translate a #RRGGBB color to its catalog code
    Code(CatalogCodeArgs),
    /// Translate a catalog code to its #RRGGBB color
    Hex(CatalogHexArgs),
    /// List the colors a catalog stocks
    List(CatalogListArgs),
}

/// Translate a hex color to a code
#[derive(Args, Debug)]
pub struct CatalogCodeArgs {
    /// Color as #RRGGBB
    #[arg(value_name = "HEX")]
    hex: String,

    /// Catalog to translate into (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    catalog: Option<String>,

    /// Show the code in every catalog
    #[arg(long, conflicts_with = "catalog")]
    all: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Translate a code to a hex color
#[derive(Args, Debug)]
pub struct CatalogHexArgs {
    /// Catalog color code
    #[arg(value_name = "CODE")]
    code: String,

    /// Catalog the code belongs to (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    catalog: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// List catalog colors
#[derive(Args, Debug)]
pub struct CatalogListArgs {
    /// Catalog to list (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    catalog: Option<String>,

    /// Order by hue instead of table order
    #[arg(long)]
    by_hue: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CodeEntry {
    catalog: Catalog,
    code: String,
    color_hex: String,
}

impl CatalogArgs {
    /// Execute catalog subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CatalogCommand::Code(args) => args.execute(),
            CatalogCommand::Hex(args) => args.execute(),
            CatalogCommand::List(args) => args.execute(),
        }
    }
}

impl CatalogCodeArgs {
    /// Execute code command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let hex = RgbColor::from_hex(&self.hex)
            .map_err(|e| CliError::validation(format!("{e:#}")))?
            .to_hex();

        let catalogs = if self.all {
            Catalog::ALL.to_vec()
        } else {
            vec![resolve_catalog(self.catalog.as_deref(), &config)?]
        };

        let table = ColorCatalog::global();
        let entries: Vec<CodeEntry> = catalogs
            .into_iter()
            .map(|catalog| CodeEntry {
                catalog,
                code: table.code_for(&hex, catalog),
                color_hex: hex.clone(),
            })
            .collect();

        if self.json {
            println!("{}", to_json(&entries, config.output.pretty_json)?);
        } else {
            for entry in &entries {
                println!("{}: {}", entry.catalog, entry.code);
            }
        }

        if entries.iter().all(|entry| entry.code == UNKNOWN_CODE) {
            return Err(CliError::validation(format!(
                "{hex} is not stocked by the requested catalog(s)"
            )));
        }
        Ok(())
    }
}

impl CatalogHexArgs {
    /// Execute hex command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = resolve_catalog(self.catalog.as_deref(), &config)?;

        let hex = ColorCatalog::global().hex_for(&self.code, catalog);
        if hex == self.code {
            return Err(CliError::validation(format!(
                "Unknown {catalog} color code '{}'",
                self.code
            )));
        }

        let entry = CodeEntry {
            catalog,
            code: self.code.clone(),
            color_hex: hex,
        };

        if self.json {
            println!("{}", to_json(&entry, config.output.pretty_json)?);
        } else {
            println!("{}", entry.color_hex);
        }
        Ok(())
    }
}

impl CatalogListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = resolve_catalog(self.catalog.as_deref(), &config)?;
        let table = ColorCatalog::global();

        let mut entries: Vec<CodeEntry> = table
            .entries()
            .iter()
            .filter_map(|entry| {
                entry.code(catalog).map(|code| CodeEntry {
                    catalog,
                    code: code.to_string(),
                    color_hex: entry.hex.clone(),
                })
            })
            .collect();

        if self.by_hue {
            entries = sort_by_hue(&entries, |entry| entry.color_hex.as_str());
        }

        if self.json {
            println!("{}", to_json(&entries, config.output.pretty_json)?);
        } else {
            println!("{} ({} colors, table {})", catalog, entries.len(), table.version());
            for entry in &entries {
                println!("  {:<6} {}", entry.code, entry.color_hex);
            }
        }
        Ok(())
    }
}
