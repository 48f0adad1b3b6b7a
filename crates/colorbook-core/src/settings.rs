// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line-art processing settings: the raw wire form sent by the generator form
// and the validated, immutable configuration the pipeline runs with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorbookError;

/// Lowest accepted line thickness.
pub const MIN_LINE_THICKNESS: u8 = 1;
/// Highest accepted line thickness. Larger requests are clamped here.
pub const MAX_LINE_THICKNESS: u8 = 5;
/// Highest accepted edge softness (percent).
pub const MAX_EDGE_SOFTNESS: u8 = 100;

/// Mirror folding applied as the last pixel stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    #[default]
    None,
    /// Left half reflected onto the right half.
    Horizontal,
    /// Top half reflected onto the bottom half.
    Vertical,
    /// Horizontal then vertical: four-fold symmetry.
    Both,
}

impl Symmetry {
    /// The literal used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Both => "Both",
        }
    }

    /// Whether the left/right fold runs.
    pub fn mirrors_horizontally(&self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether the top/bottom fold runs.
    pub fn mirrors_vertically(&self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symmetry {
    type Err = ColorbookError;

    /// Parse one of the four exact literals. Matching is case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Horizontal" => Ok(Self::Horizontal),
            "Vertical" => Ok(Self::Vertical),
            "Both" => Ok(Self::Both),
            other => Err(ColorbookError::InvalidConfig(format!(
                "unknown symmetry {other:?} (expected None, Horizontal, Vertical or Both)"
            ))),
        }
    }
}

/// Unvalidated settings exactly as the client sends them.
///
/// Numbers may be out of range and `symmetry` may hold any string; convert
/// with [`ProcessingConfig::try_from`] before running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineArtSettings {
    pub line_thickness: i64,
    pub edge_softness: i64,
    pub remove_background: bool,
    pub symmetry: String,
}

impl Default for LineArtSettings {
    fn default() -> Self {
        let config = ProcessingConfig::default();
        Self {
            line_thickness: i64::from(config.line_thickness()),
            edge_softness: i64::from(config.edge_softness()),
            remove_background: config.remove_background(),
            symmetry: config.symmetry().as_str().to_owned(),
        }
    }
}

impl From<&ProcessingConfig> for LineArtSettings {
    fn from(config: &ProcessingConfig) -> Self {
        Self {
            line_thickness: i64::from(config.line_thickness),
            edge_softness: i64::from(config.edge_softness),
            remove_background: config.remove_background,
            symmetry: config.symmetry.as_str().to_owned(),
        }
    }
}

/// Validated, immutable configuration for one pipeline run.
///
/// Cosmetic parameters are clamped into range rather than rejected; only the
/// symmetry literal can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessingConfig {
    line_thickness: u8,
    edge_softness: u8,
    remove_background: bool,
    symmetry: Symmetry,
}

impl ProcessingConfig {
    /// Build a config, clamping `line_thickness` to 1..=5 and
    /// `edge_softness` to 0..=100.
    pub fn new(
        line_thickness: i64,
        edge_softness: i64,
        remove_background: bool,
        symmetry: Symmetry,
    ) -> Self {
        Self {
            line_thickness: line_thickness
                .clamp(i64::from(MIN_LINE_THICKNESS), i64::from(MAX_LINE_THICKNESS))
                as u8,
            edge_softness: edge_softness.clamp(0, i64::from(MAX_EDGE_SOFTNESS)) as u8,
            remove_background,
            symmetry,
        }
    }

    /// Stroke weight, 1..=5. Drives the edge-response divisor.
    pub fn line_thickness(&self) -> u8 {
        self.line_thickness
    }

    /// Pre-edge-detection contrast bias, 0..=100.
    ///
    /// Despite the name this does not soften the output strokes: higher values
    /// push midtones darker before the Laplacian runs.
    pub fn edge_softness(&self) -> u8 {
        self.edge_softness
    }

    pub fn remove_background(&self) -> bool {
        self.remove_background
    }

    pub fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Divisor applied to the raw 3×3 edge response: `1 + thickness / 2`.
    pub fn edge_scale(&self) -> f32 {
        1.0 + f32::from(self.line_thickness) / 2.0
    }

    /// Additive offset of the contrast stretch: `-(softness / 100) * 128`.
    pub fn contrast_offset(&self) -> f32 {
        -(f32::from(self.edge_softness) / 100.0) * 128.0
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::new(3, 50, false, Symmetry::None)
    }
}

impl TryFrom<&LineArtSettings> for ProcessingConfig {
    type Error = ColorbookError;

    fn try_from(settings: &LineArtSettings) -> Result<Self, Self::Error> {
        let symmetry = settings.symmetry.parse::<Symmetry>()?;
        Ok(Self::new(
            settings.line_thickness,
            settings.edge_softness,
            settings.remove_background,
            symmetry,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn settings(symmetry: &str) -> LineArtSettings {
        LineArtSettings {
            line_thickness: 3,
            edge_softness: 50,
            remove_background: false,
            symmetry: symmetry.into(),
        }
    }

    #[test]
    fn parses_all_symmetry_literals() {
        for literal in ["None", "Horizontal", "Vertical", "Both"] {
            let parsed: Symmetry = literal.parse().expect("known literal");
            assert_eq!(parsed.as_str(), literal);
        }
    }

    #[test]
    fn diagonal_is_invalid_config() {
        let err = ProcessingConfig::try_from(&settings("Diagonal")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn symmetry_is_case_sensitive() {
        assert!("horizontal".parse::<Symmetry>().is_err());
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        let mut raw = settings("None");
        raw.line_thickness = 999;
        raw.edge_softness = -20;
        let config = ProcessingConfig::try_from(&raw).expect("clamped, not rejected");
        assert_eq!(config.line_thickness(), MAX_LINE_THICKNESS);
        assert_eq!(config.edge_softness(), 0);
        assert!((config.edge_scale() - 3.5).abs() < f32::EPSILON);

        raw.line_thickness = 0;
        raw.edge_softness = 400;
        let config = ProcessingConfig::try_from(&raw).expect("clamped");
        assert_eq!(config.line_thickness(), MIN_LINE_THICKNESS);
        assert_eq!(config.edge_softness(), MAX_EDGE_SOFTNESS);
    }

    #[test]
    fn derived_parameters() {
        let config = ProcessingConfig::new(3, 50, false, Symmetry::None);
        assert!((config.edge_scale() - 2.5).abs() < f32::EPSILON);
        assert!((config.contrast_offset() + 64.0).abs() < f32::EPSILON);
    }

    #[test]
    fn settings_wire_format_is_camel_case() {
        let json = r#"{"lineThickness":2,"edgeSoftness":10,"removeBackground":true,"symmetry":"Both"}"#;
        let raw: LineArtSettings = serde_json::from_str(json).expect("deserialise");
        let config = ProcessingConfig::try_from(&raw).expect("valid");
        assert_eq!(config.symmetry(), Symmetry::Both);
        assert!(config.remove_background());
        assert_eq!(LineArtSettings::from(&config), raw);
    }

    #[test]
    fn default_settings_match_default_config() {
        let config = ProcessingConfig::try_from(&LineArtSettings::default()).expect("valid");
        assert_eq!(config, ProcessingConfig::default());
    }
}
