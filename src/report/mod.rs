//! Chart output in several formats
//!
//! - **SVG**: the chart for one selection, viewable in any browser
//! - **HTML**: offline dashboard with every selection pre-rendered
//! - **JSON**: the computed scene, for other tools to draw
//!
//! # Usage
//!
//! ```ignore
//! use rankgrid::{report, Grid, LayoutParams, Selection};
//!
//! // Automatically picks format based on extension
//! report::generate("chart.svg", &grid, Selection::All, &layout)?;   // SVG
//! report::generate("chart.html", &grid, Selection::All, &layout)?;  // HTML
//! report::generate("scene.json", &grid, Selection::All, &layout)?;  // JSON
//! ```

pub mod html;
pub mod svg;

use crate::data::Grid;
use crate::error::{GridError, Result};
use crate::layout::LayoutParams;
use crate::render::render;
use crate::selection::Selection;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Html,
    Json,
}

impl Format {
    /// Pick a format from a file extension; unknown extensions get SVG
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "html" | "htm" => Format::Html,
            "json" => Format::Json,
            "svg" => Format::Svg,
            _ => {
                tracing::warn!(
                    path = %path.display(),
                    extension = %ext,
                    "unrecognized extension, writing SVG"
                );
                Format::Svg
            }
        }
    }
}

/// Auto-generated output name: `rankgrid_<selection>_<timestamp>.svg`
pub fn default_file_name(selection: Selection, now: chrono::DateTime<chrono::Local>) -> String {
    format!("rankgrid_{}_{}.svg", selection.key(), now.format("%Y%m%d_%H%M%S"))
}

/// Write one chart to `writer`
pub fn write<W: Write>(
    writer: &mut W,
    format: Format,
    grid: &Grid,
    selection: Selection,
    layout: &LayoutParams,
) -> Result<()> {
    match format {
        Format::Svg => svg::write(writer, &render(grid, selection, layout))?,
        // The offline page carries every selection; `selection` doesn't apply
        Format::Html => html::write_standalone(writer, grid, layout)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, &render(grid, selection, layout))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Generate a file in the appropriate format based on its extension
pub fn generate<P: AsRef<Path>>(
    path: P,
    grid: &Grid,
    selection: Selection,
    layout: &LayoutParams,
) -> Result<Format> {
    let path = path.as_ref();
    let format = Format::from_path(path);

    let file = std::fs::File::create(path).map_err(|e| GridError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write(&mut out, format, grid, selection, layout)?;
    out.flush().map_err(|e| GridError::io(path, e))?;

    tracing::debug!(path = %path.display(), ?format, "wrote chart");
    Ok(format)
}
