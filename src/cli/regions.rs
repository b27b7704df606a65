//! Connected-region inspection command.

use crate::cli::common::{
    check_position, load_config, read_done_set, read_grid, to_json, CliError, CliResult,
};
use beadgrid::models::{CellPosition, Grid, RgbColor};
use beadgrid::services::{
    all_regions_of, center_of, is_fully_done, is_partially_done, order_by_distance,
    order_by_size, region_from, Region,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Region ordering for `regions --color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionOrder {
    /// Scan order (top-left first)
    Scan,
    /// Largest region first
    Size,
    /// Closest to `--near` first
    Distance,
}

/// List connected regions of one color
#[derive(Debug, Clone, Args)]
pub struct RegionsArgs {
    /// Path to grid JSON file
    #[arg(short, long, value_name = "FILE")]
    pub grid: PathBuf,

    /// List every region of this `#RRGGBB` color
    #[arg(long, value_name = "HEX", conflicts_with = "at")]
    pub color: Option<String>,

    /// Show the single region containing ROW,COL
    #[arg(long, value_name = "ROW,COL")]
    pub at: Option<String>,

    /// Order of listed regions
    #[arg(long, value_enum, default_value_t = RegionOrder::Scan)]
    pub order: RegionOrder,

    /// Reference cell ROW,COL for distance ordering
    #[arg(long, value_name = "ROW,COL")]
    pub near: Option<String>,

    /// JSON file listing finished cells, to report region progress
    #[arg(long, value_name = "FILE")]
    pub done: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegionReport {
    size: usize,
    center: CellPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    cells: Region,
}

impl RegionsArgs {
    /// Execute the regions command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config();
        let grid = read_grid(&self.grid)?;
        let done = self.done.as_deref().map(read_done_set).transpose()?;

        let regions = self.collect(&grid)?;
        let reports: Vec<RegionReport> = regions
            .into_iter()
            .map(|cells| RegionReport {
                size: cells.len(),
                center: center_of(&cells),
                status: done.as_ref().map(|done| done_status(&cells, done)),
                cells,
            })
            .collect();

        if self.json {
            println!("{}", to_json(&reports, config.output.pretty_json)?);
        } else if reports.is_empty() {
            println!("No matching regions.");
        } else {
            for (index, report) in reports.iter().enumerate() {
                print!(
                    "Region {}: {} cell(s), center ({}, {})",
                    index + 1,
                    report.size,
                    report.center.row,
                    report.center.col
                );
                match report.status {
                    Some(status) => println!(" [{status}]"),
                    None => println!(),
                }
            }
        }

        Ok(())
    }

    fn collect(&self, grid: &Grid) -> CliResult<Vec<Region>> {
        if let Some(at) = &self.at {
            let CellPosition { row, col } = parse_position(at)?;
            check_position(grid, row, col)?;
            let hex = grid
                .get(row, col)
                .map(|cell| cell.color_hex.clone())
                .unwrap_or_default();
            let region = region_from(grid, row, col, &hex);
            return Ok(if region.is_empty() { Vec::new() } else { vec![region] });
        }

        let Some(color) = &self.color else {
            return Err(CliError::validation("Either --color or --at must be given"));
        };
        let hex = RgbColor::from_hex(color)
            .map_err(|e| CliError::validation(format!("{e:#}")))?
            .to_hex();
        let regions = all_regions_of(grid, &hex);

        Ok(match self.order {
            RegionOrder::Scan => regions,
            RegionOrder::Size => order_by_size(regions),
            RegionOrder::Distance => {
                let Some(near) = &self.near else {
                    return Err(CliError::validation("--order distance requires --near"));
                };
                order_by_distance(regions, parse_position(near)?)
            }
        })
    }
}

fn parse_position(value: &str) -> CliResult<CellPosition> {
    let invalid = || CliError::validation(format!("Invalid position '{value}', expected ROW,COL"));
    let (row, col) = value.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(CellPosition::new(row, col))
}

fn done_status(region: &[CellPosition], done: &HashSet<CellPosition>) -> &'static str {
    if is_fully_done(region, done) {
        "done"
    } else if is_partially_done(region, done) {
        "partial"
    } else {
        "todo"
    }
}
