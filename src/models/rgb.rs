//! RGB color handling with hex parsing, normalization and hue ordering.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Width (degrees) of a hue bucket.
const HUE_BUCKET: f32 = 5.0;

/// Width (percentage points) of a lightness bucket.
const LIGHTNESS_BUCKET: f32 = 3.0;

/// RGB color value with hex string representation.
///
/// Bead colors travel through the engine as `#RRGGBB` strings; this type is
/// used where the channels themselves matter (validation and hue ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use beadgrid::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use beadgrid::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)` where:
    /// - `h` (Hue): 0.0-360.0 degrees (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-100.0
    /// - `l` (Lightness): 0.0-100.0
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, l * 100.0);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (h * 60.0, s * 100.0, l * 100.0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Normalizes a hex color string for comparison and use as a map key.
///
/// Only case is folded; the `#` prefix is kept as given.
#[must_use]
pub fn normalize_hex(hex: &str) -> String {
    hex.trim().to_ascii_uppercase()
}

/// Compares two hex color strings case-insensitively.
#[must_use]
pub fn same_hex(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Orders two hex colors the way palettes are presented: grouped into 5°
/// hue buckets, light before dark within a bucket (3-point lightness steps),
/// vivid before muted.
///
/// Unparseable hex strings sort as black.
#[must_use]
pub fn compare_by_hue(a: &str, b: &str) -> Ordering {
    let (ha, sa, la) = RgbColor::from_hex(a).unwrap_or_default().to_hsl();
    let (hb, sb, lb) = RgbColor::from_hex(b).unwrap_or_default().to_hsl();

    bucket(ha, HUE_BUCKET)
        .total_cmp(&bucket(hb, HUE_BUCKET))
        .then_with(|| bucket(lb, LIGHTNESS_BUCKET).total_cmp(&bucket(la, LIGHTNESS_BUCKET)))
        .then_with(|| sb.total_cmp(&sa))
}

// Bucketing keeps the comparison a total order, which `sort_by` requires.
fn bucket(value: f32, width: f32) -> f32 {
    (value / width).floor()
}

/// Returns a copy of `items` sorted by the hue of the color `hex_of` yields.
///
/// The sort is stable, so items with equal ordering keep their input order.
pub fn sort_by_hue<T, F>(items: &[T], hex_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_by_hue(hex_of(a), hex_of(b)));
    sorted
}

impl Default for RgbColor {
    /// Default color is black (#000000).
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}
