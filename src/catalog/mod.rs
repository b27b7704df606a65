//! Bead color catalogs and code translation.
//!
//! Every bead color has one canonical `#RRGGBB` value and a code in each
//! vendor catalog that stocks it. The process-wide table is set once, either
//! from a file with [`ColorCatalog::install`] or, on first access, from the
//! table embedded in the binary. It is never modified afterwards.
//!
//! The embedded `catalog.json` is sample data (table version `sample`): its
//! colors and codes are placeholders that exercise the lookups, not a real
//! vendor mapping. Supply the real mapping through the `[catalog] table`
//! config key, which the CLI installs before any lookup.
//!
//! Lookups are total: a hex color missing from a catalog translates to
//! [`UNKNOWN_CODE`], and an unknown code translates to itself.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::constants::{ERASE_KEY, UNKNOWN_CODE};
use crate::models::rgb::normalize_hex;
use crate::models::ColorSelection;

pub use crate::models::rgb::sort_by_hue;

/// Vendor color-code system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Catalog {
    /// MARD
    #[serde(rename = "MARD")]
    Mard,
    /// COCO
    #[serde(rename = "COCO")]
    Coco,
    /// 漫漫 (Manman)
    #[serde(rename = "漫漫")]
    Manman,
    /// 盼盼 (Panpan)
    #[serde(rename = "盼盼")]
    Panpan,
    /// 咪小窝 (Mixiaowo)
    #[serde(rename = "咪小窝")]
    Mixiaowo,
}

impl Catalog {
    /// All supported catalogs, in display order.
    pub const ALL: [Self; 5] = [
        Self::Mard,
        Self::Coco,
        Self::Manman,
        Self::Panpan,
        Self::Mixiaowo,
    ];

    /// Display name, as used in catalog data and config files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mard => "MARD",
            Self::Coco => "COCO",
            Self::Manman => "漫漫",
            Self::Panpan => "盼盼",
            Self::Mixiaowo => "咪小窝",
        }
    }

    /// ASCII alias accepted on the command line.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self {
            Self::Mard => "mard",
            Self::Coco => "coco",
            Self::Manman => "manman",
            Self::Panpan => "panpan",
            Self::Mixiaowo => "mixiaowo",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|catalog| catalog.name() == s || catalog.alias().eq_ignore_ascii_case(s))
            .with_context(|| {
                let known: Vec<_> = Self::ALL.iter().map(Catalog::alias).collect();
                format!("Unknown catalog '{s}'. Expected one of: {}", known.join(", "))
            })
    }
}

/// One canonical color and its code in each catalog that stocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical `#RRGGBB` value (uppercase)
    pub hex: String,
    codes: [Option<String>; Catalog::ALL.len()],
}

impl CatalogEntry {
    /// Code of this color in `catalog`, if the catalog stocks it.
    #[must_use]
    pub fn code(&self, catalog: Catalog) -> Option<&str> {
        self.codes[catalog.index()].as_deref()
    }
}

/// Schema of catalog.json.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: String,
    entries: Vec<CatalogFileEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogFileEntry {
    hex: String,
    codes: BTreeMap<String, String>,
}

/// Read-only lookup table between canonical hex colors and catalog codes.
#[derive(Debug, Clone)]
pub struct ColorCatalog {
    version: String,
    /// Entries in file order
    entries: Vec<CatalogEntry>,
    /// Normalized hex -> entry index
    by_hex: HashMap<String, usize>,
    /// (catalog, code) -> first entry index carrying that code
    by_code: HashMap<(Catalog, String), usize>,
}

static GLOBAL_CATALOG: OnceLock<ColorCatalog> = OnceLock::new();

impl ColorCatalog {
    /// Loads the sample table embedded in the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("catalog.json")).context("Failed to parse embedded catalog.json")
    }

    /// Loads a table from a JSON file in the catalog.json schema.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog table: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog table: {}", path.display()))
    }

    /// Builds a catalog from JSON text in the catalog.json schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(file.entries.len());
        let mut by_hex = HashMap::new();
        let mut by_code = HashMap::new();

        for raw in file.entries {
            let hex = normalize_hex(&raw.hex);
            if by_hex.contains_key(&hex) {
                anyhow::bail!("Duplicate catalog entry for {hex}");
            }

            let mut codes: [Option<String>; Catalog::ALL.len()] = Default::default();
            for (name, code) in raw.codes {
                let catalog: Catalog = name
                    .parse()
                    .with_context(|| format!("Invalid catalog name in entry {hex}"))?;
                codes[catalog.index()] = Some(code);
            }

            let index = entries.len();
            for catalog in Catalog::ALL {
                if let Some(code) = &codes[catalog.index()] {
                    by_code.entry((catalog, code.clone())).or_insert(index);
                }
            }
            by_hex.insert(hex.clone(), index);
            entries.push(CatalogEntry { hex, codes });
        }

        Ok(Self {
            version: file.version,
            entries,
            by_hex,
            by_code,
        })
    }

    /// Makes `table` the process-wide catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the process-wide catalog was already set, either
    /// by an earlier call or by a lookup that loaded the embedded table.
    pub fn install(table: Self) -> Result<&'static Self> {
        let version = table.version.clone();
        GLOBAL_CATALOG
            .set(table)
            .map_err(|_| anyhow::anyhow!("Color catalog already loaded, cannot install table {version}"))?;
        tracing::debug!("Installed catalog table {version}");
        Ok(Self::global())
    }

    /// Process-wide catalog. Falls back to the embedded sample table when
    /// none was installed.
    ///
    /// If the embedded table cannot be parsed, an empty catalog is used and
    /// every lookup falls back to its "not found" result.
    pub fn global() -> &'static Self {
        GLOBAL_CATALOG.get_or_init(|| {
            Self::load().unwrap_or_else(|err| {
                tracing::warn!("Color catalog unavailable, translations disabled: {err:#}");
                Self::empty()
            })
        })
    }

    fn empty() -> Self {
        Self {
            version: String::new(),
            entries: Vec::new(),
            by_hex: HashMap::new(),
            by_code: HashMap::new(),
        }
    }

    /// Data version of the loaded table.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of canonical colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the table has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Gets the entry for a hex color (case-insensitive).
    #[must_use]
    pub fn entry(&self, hex: &str) -> Option<&CatalogEntry> {
        let index = self.by_hex.get(&normalize_hex(hex))?;
        self.entries.get(*index)
    }

    /// Translates a hex color to its code in `catalog`.
    ///
    /// The erase key, the empty string and [`UNKNOWN_CODE`] pass through
    /// untouched. A color the catalog does not stock yields [`UNKNOWN_CODE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use beadgrid::catalog::{Catalog, ColorCatalog};
    ///
    /// let catalog = ColorCatalog::load().unwrap();
    /// assert_eq!(catalog.code_for("#f3cece", Catalog::Mard), "A1");
    /// assert_eq!(catalog.code_for("#010203", Catalog::Mard), "?");
    /// assert_eq!(catalog.code_for("ERASE", Catalog::Coco), "ERASE");
    /// ```
    #[must_use]
    pub fn code_for(&self, hex: &str, catalog: Catalog) -> String {
        if is_passthrough_key(hex) {
            return hex.to_string();
        }

        self.entry(hex)
            .and_then(|entry| entry.code(catalog))
            .unwrap_or(UNKNOWN_CODE)
            .to_string()
    }

    /// Translates a catalog code back to its canonical hex color.
    ///
    /// A `#RRGGBB` literal is returned normalized. An unknown code is returned
    /// unchanged, so translating it again is harmless.
    ///
    /// # Examples
    ///
    /// ```
    /// use beadgrid::catalog::{Catalog, ColorCatalog};
    ///
    /// let catalog = ColorCatalog::load().unwrap();
    /// assert_eq!(catalog.hex_for("A1", Catalog::Mard), "#F3CECE");
    /// assert_eq!(catalog.hex_for("#abcdef", Catalog::Mard), "#ABCDEF");
    /// assert_eq!(catalog.hex_for("NOPE", Catalog::Mard), "NOPE");
    /// ```
    #[must_use]
    pub fn hex_for(&self, code: &str, catalog: Catalog) -> String {
        if is_hex_literal(code) {
            return normalize_hex(code);
        }

        self.by_code
            .get(&(catalog, code.to_string()))
            .and_then(|index| self.entries.get(*index))
            .map_or_else(|| code.to_string(), |entry| entry.hex.clone())
    }

    /// All canonical hex values, in table order.
    #[must_use]
    pub fn all_hex_values(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.hex.as_str()).collect()
    }

    /// Map from every code in `catalog` to its hex color.
    #[must_use]
    pub fn code_to_hex_map(&self, catalog: Catalog) -> HashMap<String, String> {
        self.by_code
            .iter()
            .filter(|((c, _), _)| *c == catalog)
            .filter_map(|((_, code), index)| {
                self.entries
                    .get(*index)
                    .map(|entry| (code.clone(), entry.hex.clone()))
            })
            .collect()
    }

    /// Checks if `catalog` stocks the given hex color.
    #[must_use]
    pub fn is_valid_in(&self, hex: &str, catalog: Catalog) -> bool {
        self.entry(hex).and_then(|entry| entry.code(catalog)).is_some()
    }

    /// Rewrites the display keys of a palette to `catalog` codes.
    ///
    /// Palette entries the catalog does not stock keep their current key.
    #[must_use]
    pub fn recode_palette(&self, palette: &[ColorSelection], catalog: Catalog) -> Vec<ColorSelection> {
        palette
            .iter()
            .map(|color| match self.entry(&color.color_hex).and_then(|e| e.code(catalog)) {
                Some(code) => ColorSelection {
                    key: code.to_string(),
                    ..color.clone()
                },
                None => color.clone(),
            })
            .collect()
    }
}

/// Checks for a `#RRGGBB` literal.
fn is_hex_literal(value: &str) -> bool {
    static HEX_LITERAL: OnceLock<Option<Regex>> = OnceLock::new();
    HEX_LITERAL
        .get_or_init(|| Regex::new("^#[0-9A-Fa-f]{6}$").ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(value))
}

/// Keys that are never translated.
fn is_passthrough_key(value: &str) -> bool {
    value == ERASE_KEY || value.is_empty() || value == UNKNOWN_CODE
}

/// Translates a hex color to its `catalog` code using the global table.
#[must_use]
pub fn code_for(hex: &str, catalog: Catalog) -> String {
    ColorCatalog::global().code_for(hex, catalog)
}

/// Translates a `catalog` code to its hex color using the global table.
#[must_use]
pub fn hex_for(code: &str, catalog: Catalog) -> String {
    ColorCatalog::global().hex_for(code, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_TABLE: &str = r##"{
        "version": "test",
        "entries": [
            { "hex": "#ff0000", "codes": { "MARD": "R1", "COCO": "X" } },
            { "hex": "#00FF00", "codes": { "MARD": "G1", "COCO": "X" } }
        ]
    }"##;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = ColorCatalog::load().expect("Failed to load catalog");
        assert_eq!(catalog.len(), 72);
        assert_eq!(catalog.version(), "sample");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("table.json");
        fs::write(&path, SMALL_TABLE).unwrap();

        let catalog = ColorCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.version(), "test");
        assert_eq!(catalog.code_for("#FF0000", Catalog::Mard), "R1");

        let err = ColorCatalog::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }

    #[test]
    fn test_install_after_first_lookup_is_rejected() {
        let _ = ColorCatalog::global();
        let table = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        assert!(ColorCatalog::install(table).is_err());
        assert_eq!(ColorCatalog::global().version(), "sample");
    }

    #[test]
    fn test_code_for_normalizes_hex() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        assert_eq!(catalog.code_for("#FF0000", Catalog::Mard), "R1");
        assert_eq!(catalog.code_for("#ff0000", Catalog::Mard), "R1");
    }

    #[test]
    fn test_code_for_missing_catalog_is_unknown() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        assert_eq!(catalog.code_for("#FF0000", Catalog::Panpan), UNKNOWN_CODE);
        assert_eq!(catalog.code_for("#123456", Catalog::Mard), UNKNOWN_CODE);
    }

    #[test]
    fn test_code_for_passthrough_keys() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        assert_eq!(catalog.code_for(ERASE_KEY, Catalog::Mard), ERASE_KEY);
        assert_eq!(catalog.code_for("", Catalog::Mard), "");
        assert_eq!(catalog.code_for("?", Catalog::Mard), "?");
    }

    #[test]
    fn test_hex_for_first_match_wins() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        // Both entries carry COCO code "X"; table order decides
        assert_eq!(catalog.hex_for("X", Catalog::Coco), "#FF0000");
    }

    #[test]
    fn test_hex_for_literal_and_unknown() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        assert_eq!(catalog.hex_for("#00ff00", Catalog::Mard), "#00FF00");
        assert_eq!(catalog.hex_for("#00ff0", Catalog::Mard), "#00ff0");
        assert_eq!(catalog.hex_for("#GGGGGG", Catalog::Mard), "#GGGGGG");
        assert_eq!(catalog.hex_for("Z9", Catalog::Mard), "Z9");
    }

    #[test]
    fn test_rejects_unknown_catalog_name() {
        let json = r##"{ "version": "x", "entries": [ { "hex": "#000000", "codes": { "ACME": "1" } } ] }"##;
        assert!(ColorCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_duplicate_hex() {
        let json = r##"{ "version": "x", "entries": [
            { "hex": "#000000", "codes": {} },
            { "hex": "#000000", "codes": {} }
        ] }"##;
        assert!(ColorCatalog::from_json(json).is_err());
    }

    #[test]
    fn test_catalog_from_str() {
        assert_eq!("MARD".parse::<Catalog>().unwrap(), Catalog::Mard);
        assert_eq!("coco".parse::<Catalog>().unwrap(), Catalog::Coco);
        assert_eq!("漫漫".parse::<Catalog>().unwrap(), Catalog::Manman);
        assert_eq!("PanPan".parse::<Catalog>().unwrap(), Catalog::Panpan);
        assert!("acme".parse::<Catalog>().is_err());
    }

    #[test]
    fn test_recode_palette_keeps_unmapped() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        let palette = vec![
            ColorSelection::new("old", "#FF0000"),
            ColorSelection::new("keep", "#0000FF"),
        ];
        let recoded = catalog.recode_palette(&palette, Catalog::Mard);
        assert_eq!(recoded[0].key, "R1");
        assert_eq!(recoded[1].key, "keep");
    }

    #[test]
    fn test_code_to_hex_map() {
        let catalog = ColorCatalog::from_json(SMALL_TABLE).unwrap();
        let map = catalog.code_to_hex_map(Catalog::Mard);
        assert_eq!(map.len(), 2);
        assert_eq!(map["G1"], "#00FF00");
        assert!(catalog.code_to_hex_map(Catalog::Panpan).is_empty());
    }
}
