//! Bead statistics command.

use crate::cli::common::{
    load_config, read_done_set, read_grid, resolve_catalog, to_json, CliResult,
};
use beadgrid::catalog;
use beadgrid::services::{completed_count, progress_percentage, ColorStatistics};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Count the beads of each color in a pattern
#[derive(Debug, Clone, Args)]
pub struct StatsArgs {
    /// Path to grid JSON file
    #[arg(short, long, value_name = "FILE")]
    pub grid: PathBuf,

    /// Catalog used for color codes (defaults to the configured catalog)
    #[arg(short, long, value_name = "NAME")]
    pub catalog: Option<String>,

    /// JSON file listing finished cells, to report progress
    #[arg(long, value_name = "FILE")]
    pub done: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    catalog: String,
    total_count: usize,
    colors: Vec<ColorRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress: Option<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ColorRow {
    code: String,
    color_hex: String,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<usize>,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let catalog = resolve_catalog(self.catalog.as_deref(), &config)?;
        let grid = read_grid(&self.grid)?;
        let done = self.done.as_deref().map(read_done_set).transpose()?;

        let stats = ColorStatistics::from_grid(&grid);
        let colors: Vec<ColorRow> = stats
            .entries_by_hue()
            .into_iter()
            .map(|entry| ColorRow {
                code: catalog::code_for(&entry.color_hex, catalog),
                completed: done
                    .as_ref()
                    .map(|done| completed_count(&grid, done, &entry.color_hex)),
                color_hex: entry.color_hex,
                count: entry.count,
            })
            .collect();

        let progress = done.as_ref().map(|_| {
            let completed = colors.iter().filter_map(|row| row.completed).sum();
            progress_percentage(completed, stats.total_count())
        });

        let report = StatsReport {
            catalog: catalog.to_string(),
            total_count: stats.total_count(),
            colors,
            progress,
        };

        if self.json {
            println!("{}", to_json(&report, config.output.pretty_json)?);
        } else {
            print_table(&report);
        }

        Ok(())
    }
}

fn print_table(report: &StatsReport) {
    println!("Catalog: {}", report.catalog);
    println!("Total beads: {}", report.total_count);
    if let Some(progress) = report.progress {
        println!("Progress: {progress}%");
    }
    println!();

    if report.colors.is_empty() {
        println!("No beads placed.");
        return;
    }

    println!("{:<8} {:<8} {:>6}", "CODE", "HEX", "COUNT");
    for row in &report.colors {
        match row.completed {
            Some(completed) => println!(
                "{:<8} {:<8} {:>6}  ({completed} done)",
                row.code, row.color_hex, row.count
            ),
            None => println!("{:<8} {:<8} {:>6}", row.code, row.color_hex, row.count),
        }
    }
}
