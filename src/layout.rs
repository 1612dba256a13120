//! Layout parameters
//!
//! All lengths are in figure units (inches of the printed chart). The SVG
//! writer multiplies them by [`LayoutParams::scale`] to get pixels; font
//! sizes are in points.
//!
//! Two presets exist. `compact` is the dashboard default; `classic` uses
//! bigger cells and wider gaps and turns on the "Rank"/"Year" axis labels.
//! A YAML (or JSON) file can override any subset of fields:
//!
//! ```yaml
//! cell: 0.9
//! gap: 0.1
//! axis_labels: true
//! ```

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutParams {
    /// Side of one square
    pub cell: f64,
    /// Space between neighbouring squares
    pub gap: f64,
    /// Corner radius
    pub rounding: f64,
    pub left_margin: f64,
    /// Room above the grid for title and legend
    pub top_margin: f64,
    /// Room below the grid for the footnote
    pub bottom_margin: f64,
    pub right_pad: f64,
    pub title_size: f64,
    pub legend_size: f64,
    pub label_size: f64,
    pub footnote_size: f64,
    /// Space after each legend label
    pub legend_spacing: f64,
    /// Draw "Rank" and "Year" axis captions
    pub axis_labels: bool,
    /// Pixels per unit in SVG output
    pub scale: f64,
}

impl LayoutParams {
    pub fn compact() -> Self {
        Self {
            cell: 0.8,
            gap: 0.15,
            rounding: 0.1,
            left_margin: 0.5,
            top_margin: 2.5,
            bottom_margin: 1.0,
            right_pad: 0.8,
            title_size: 20.0,
            legend_size: 10.0,
            label_size: 9.0,
            footnote_size: 8.0,
            legend_spacing: 0.3,
            axis_labels: false,
            scale: 72.0,
        }
    }

    pub fn classic() -> Self {
        Self {
            cell: 1.0,
            gap: 0.2,
            label_size: 10.0,
            footnote_size: 9.0,
            legend_spacing: 0.4,
            axis_labels: true,
            ..Self::compact()
        }
    }

    /// Distance from one cell's origin to the next
    pub fn pitch(&self) -> f64 {
        self.cell + self.gap
    }

    pub fn figure_width(&self, cols: usize) -> f64 {
        self.left_margin + cols as f64 * self.pitch() + self.right_pad
    }

    pub fn figure_height(&self, rows: usize) -> f64 {
        self.top_margin + rows as f64 * self.pitch() + self.bottom_margin
    }

    /// Top-left corner of cell (row, col), y growing downward
    pub fn cell_origin(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.left_margin + col as f64 * self.pitch(),
            self.top_margin + row as f64 * self.pitch(),
        )
    }

    /// Reject values that would make cells overlap or vanish
    pub fn validate(&self) -> Result<()> {
        positive("cell", self.cell)?;
        positive("scale", self.scale)?;
        positive("title_size", self.title_size)?;
        positive("legend_size", self.legend_size)?;
        positive("label_size", self.label_size)?;
        positive("footnote_size", self.footnote_size)?;

        non_negative("gap", self.gap)?;
        non_negative("rounding", self.rounding)?;
        non_negative("left_margin", self.left_margin)?;
        non_negative("top_margin", self.top_margin)?;
        non_negative("bottom_margin", self.bottom_margin)?;
        non_negative("right_pad", self.right_pad)?;
        non_negative("legend_spacing", self.legend_spacing)?;

        if self.rounding > self.cell / 2.0 {
            return Err(GridError::invalid_layout(
                "rounding",
                format!("must not exceed half the cell size ({} > {})", self.rounding, self.cell / 2.0),
            ));
        }
        Ok(())
    }

    /// Load overrides from a YAML/JSON file on top of `base`.
    pub fn load<P: AsRef<Path>>(path: P, base: &LayoutParams) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
        let layout = Self::from_yaml_str(&text, base).map_err(|e| match e {
            GridError::Config { source, .. } => GridError::Config {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded layout overrides");
        Ok(layout)
    }

    /// Parse overrides from YAML text. Fields that are absent keep `base`'s values.
    pub fn from_yaml_str(text: &str, base: &LayoutParams) -> Result<Self> {
        let config_err = |source| GridError::Config {
            path: "<inline>".into(),
            source,
        };

        let mut merged = serde_yaml::to_value(base).map_err(config_err)?;
        let overrides: serde_yaml::Value = serde_yaml::from_str(text).map_err(config_err)?;

        match overrides {
            serde_yaml::Value::Mapping(overrides) => {
                if let serde_yaml::Value::Mapping(fields) = &mut merged {
                    for (key, value) in overrides {
                        fields.insert(key, value);
                    }
                }
            }
            // empty file
            serde_yaml::Value::Null => {}
            // not a mapping: let serde report the type mismatch
            other => merged = other,
        }

        let layout: LayoutParams = serde_yaml::from_value(merged).map_err(config_err)?;
        layout.validate()?;
        Ok(layout)
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::compact()
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::invalid_layout(field, format!("must be positive (got {})", value)))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::invalid_layout(field, format!("must not be negative (got {})", value)))
    }
}

/// Named starting point for [`LayoutParams`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Compact,
    Classic,
}

impl Preset {
    pub fn params(self) -> LayoutParams {
        match self {
            Preset::Compact => LayoutParams::compact(),
            Preset::Classic => LayoutParams::classic(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Compact => f.write_str("compact"),
            Preset::Classic => f.write_str("classic"),
        }
    }
}

impl FromStr for Preset {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Preset::Compact),
            "classic" => Ok(Preset::Classic),
            _ => Err(GridError::invalid_layout(
                "preset",
                format!("must be compact or classic (got '{}')", s),
            )),
        }
    }
}
