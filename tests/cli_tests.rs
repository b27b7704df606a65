//! End-to-end tests for the `beadgrid` command line.

use std::fs;
use std::process::Output;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run(config_dir: &TempDir, args: &[&str]) -> Output {
    beadgrid_command(config_dir.path(), args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn test_stats_json() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["PPQ", "P.x"]));

    let output = run(&temp, &["stats", "--grid", grid.to_str().unwrap(), "--json"]);
    assert_success(&output);

    let report = stdout_json(&output);
    assert_eq!(report["catalog"], "MARD");
    assert_eq!(report["totalCount"], 4);
    let colors = report["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 2);
    let pink = colors.iter().find(|c| c["colorHex"] == PINK_HEX).unwrap();
    assert_eq!(pink["code"], "A1");
    assert_eq!(pink["count"], 3);
    assert!(report.get("progress").is_none());
}

#[test]
fn test_stats_with_done_set() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["PP", "QQ"]));
    let done = temp.path().join("done.json");
    fs::write(&done, r#"[{"row":0,"col":0},{"row":1,"col":1}]"#).unwrap();

    let output = run(
        &temp,
        &[
            "stats",
            "--grid",
            grid.to_str().unwrap(),
            "--done",
            done.to_str().unwrap(),
            "--catalog",
            "coco",
            "--json",
        ],
    );
    assert_success(&output);

    let report = stdout_json(&output);
    assert_eq!(report["catalog"], "COCO");
    assert_eq!(report["progress"], 50);
    let rose = report["colors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["colorHex"] == ROSE_HEX)
        .unwrap();
    assert_eq!(rose["code"], "E02");
    assert_eq!(rose["completed"], 1);
}

#[test]
fn test_stats_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");
    let output = run(&temp, &["stats", "--grid", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_ragged_grid_is_validation_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ragged.json");
    fs::write(
        &path,
        r##"[[{"key":"A1","colorHex":"#F3CECE"}],[]]"##,
    )
    .unwrap();

    let output = run(&temp, &["stats", "--grid", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Regions
// ============================================================================

#[test]
fn test_regions_by_color_ordered_by_size() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["R.RR", "..RR"]));

    let output = run(
        &temp,
        &[
            "regions",
            "--grid",
            grid.to_str().unwrap(),
            "--color",
            "#ff0000",
            "--order",
            "size",
            "--json",
        ],
    );
    assert_success(&output);

    let regions = stdout_json(&output);
    let sizes: Vec<_> = regions
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["size"].as_u64().unwrap())
        .collect();
    assert_eq!(sizes, vec![4, 1]);
}

#[test]
fn test_regions_at_position() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["RRR", "R.R", "RRR"]));

    let output = run(
        &temp,
        &["regions", "--grid", grid.to_str().unwrap(), "--at", "0,0", "--json"],
    );
    assert_success(&output);

    let regions = stdout_json(&output);
    assert_eq!(regions[0]["size"], 8);
    assert_eq!(regions[0]["center"]["row"], 1);
}

#[test]
fn test_regions_distance_requires_reference() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["R"]));

    let output = run(
        &temp,
        &[
            "regions",
            "--grid",
            grid.to_str().unwrap(),
            "--color",
            "#FF0000",
            "--order",
            "distance",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_erase_writes_output_file() {
    let temp = TempDir::new().unwrap();
    let original = grid_from(&["RRG", "R.G"]);
    let grid = write_grid_file(temp.path(), "grid.json", &original);
    let out = temp.path().join("out.json");

    let output = run(
        &temp,
        &[
            "erase",
            "--grid",
            grid.to_str().unwrap(),
            "--row",
            "0",
            "--col",
            "0",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Erased 3 bead(s)"));

    assert_eq!(read_grid_file(&out), grid_from(&["xxG", "x.G"]));
    assert_eq!(read_grid_file(&grid), original, "Input file untouched");
}

#[test]
fn test_erase_background_cell_fails() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["R."]));

    let output = run(
        &temp,
        &["erase", "--grid", grid.to_str().unwrap(), "--row", "0", "--col", "1"],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_replace_by_catalog_code() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["PPQ", ".PQ"]));
    let out = temp.path().join("out.json");

    let output = run(
        &temp,
        &[
            "replace",
            "--grid",
            grid.to_str().unwrap(),
            "--from",
            "A1",
            "--to",
            "A2",
            "--output",
            out.to_str().unwrap(),
        ],
    );
    assert_success(&output);

    assert_eq!(read_grid_file(&out), grid_from(&["QQQ", ".QQ"]));
}

#[test]
fn test_replace_unknown_code_fails() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["P"]));

    let output = run(
        &temp,
        &["replace", "--grid", grid.to_str().unwrap(), "--from", "ZZ9", "--to", "A2"],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_paint_to_stdout() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["PP"]));

    let output = run(
        &temp,
        &[
            "paint",
            "--grid",
            grid.to_str().unwrap(),
            "--row",
            "0",
            "--col",
            "1",
            "--color",
            "ERASE",
        ],
    );
    assert_success(&output);

    let painted: beadgrid::models::Grid =
        serde_json::from_slice(&output.stdout).expect("Grid JSON on stdout");
    assert_eq!(painted, grid_from(&["Px"]));
}

#[test]
fn test_paint_out_of_bounds_fails() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["PP"]));

    let output = run(
        &temp,
        &[
            "paint", "--grid", grid.to_str().unwrap(), "--row", "3", "--col", "0", "--color",
            "A2",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_recode_to_manman() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["PQ"]));

    let output = run(
        &temp,
        &["recode", "--grid", grid.to_str().unwrap(), "--catalog", "漫漫"],
    );
    assert_success(&output);

    let recoded = stdout_json(&output);
    assert_eq!(recoded[0][0]["key"], "D11");
    assert_eq!(recoded[0][1]["key"], "D12");
    assert_eq!(recoded[0][0]["colorHex"], PINK_HEX);
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_code_and_hex() {
    let temp = TempDir::new().unwrap();

    let output = run(&temp, &["catalog", "code", "#f3cece", "--catalog", "panpan"]);
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "盼盼: 101");

    let output = run(&temp, &["catalog", "hex", "H11"]);
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), WHITE_HEX);
}

#[test]
fn test_catalog_code_all_json() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["catalog", "code", PINK_HEX, "--all", "--json"]);
    assert_success(&output);

    let entries = stdout_json(&output);
    let codes: Vec<_> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, vec!["A1", "E01", "D11", "101", "1"]);
}

#[test]
fn test_catalog_unknown_lookups_fail() {
    let temp = TempDir::new().unwrap();
    assert_eq!(run(&temp, &["catalog", "code", "#010203"]).status.code(), Some(1));
    assert_eq!(run(&temp, &["catalog", "hex", "NOPE"]).status.code(), Some(1));
    assert_eq!(
        run(&temp, &["catalog", "list", "--catalog", "acme"]).status.code(),
        Some(1)
    );
}

#[test]
fn test_catalog_list_counts() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["catalog", "list", "--catalog", "mixiaowo", "--json"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 67);

    let output = run(&temp, &["catalog", "list", "--by-hue", "--json"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 72);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_default_and_path() {
    let temp = TempDir::new().unwrap();

    let output = run(&temp, &["config", "show", "--json"]);
    assert_success(&output);
    let config = stdout_json(&output);
    assert_eq!(config["catalog"]["default"], "MARD");
    assert_eq!(config["output"]["pretty_json"], true);

    let output = run(&temp, &["config", "path"]);
    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        temp.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_set_changes_default_catalog() {
    let temp = TempDir::new().unwrap();

    let output = run(&temp, &["config", "set", "--catalog", "coco", "--pretty-json", "false"]);
    assert_success(&output);
    assert!(temp.path().join("config.toml").exists());

    let output = run(&temp, &["catalog", "code", PINK_HEX]);
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "COCO: E01");

    let grid = write_grid_file(temp.path(), "grid.json", &grid_from(&["P"]));
    let output = run(&temp, &["recode", "--grid", grid.to_str().unwrap()]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "Compact JSON");
    assert!(stdout.contains("\"E01\""));
}

#[test]
fn test_config_set_requires_option() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["config", "set"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_configured_catalog_table_replaces_sample() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("table.json"),
        r##"{"version":"shop-2025","entries":[{"hex":"#123456","codes":{"COCO":"Z9"}}]}"##,
    )
    .unwrap();

    let output = run(&temp, &["config", "set", "--catalog", "coco", "--table", "table.json"]);
    assert_success(&output);

    let output = run(&temp, &["catalog", "code", "#123456"]);
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "COCO: Z9");

    // Sample colors are gone once a table is configured
    assert_eq!(run(&temp, &["catalog", "code", PINK_HEX]).status.code(), Some(1));

    let output = run(&temp, &["catalog", "list"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("table shop-2025"));
}

#[test]
fn test_config_set_rejects_unreadable_table() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["config", "set", "--table", "missing.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp.path().join("config.toml").exists());
}
