//! Chart rendering
//!
//! [`render`] turns the grid, the current selection and a layout into a
//! [`Scene`]: plain geometry in figure units with y growing downward. The
//! writers in [`report`](crate::report) serialize a scene for display.
//!
//! ```text
//!  ┌──────────────────────────────────────────┐
//!  │ Title (two lines)                        │
//!  │ Broadcasts: ■ Macy’s Parade ■ Academy …  │  legend
//!  │      2014    ’16    ’18    ’20    ’22    │  column labels
//!  │  1 ■ ■ ■ ■ ■ ■ ■ ■ ■ ■ ■                 │
//!  │  …                                       │  row labels + cells
//!  │ 10 ■ ■ ■ ■ ■ ■ ■ ■ ■ ■ ■                 │
//!  │ Note: …                                  │  footnote
//!  └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use rankgrid::{render, Grid, LayoutParams, Selection};
//!
//! let scene = render::render(&Grid::broadcasts(), Selection::All, &LayoutParams::compact());
//! assert_eq!(scene.cells.len(), 110);
//! let svg = rankgrid::report::svg::to_string(&scene);
//! assert!(svg.starts_with("<svg"));
//! ```


use crate::data::{self, Category, Grid, FADED_COLOR};
use crate::layout::LayoutParams;
use crate::selection::Selection;
use serde::Serialize;

/// Title baseline offset from the top edge
const TITLE_TOP: f64 = 0.2;
/// Vertical center of the legend row, measured from the top edge
const LEGEND_ROW: f64 = 1.3;
/// x where the first legend swatch starts
const LEGEND_START: f64 = 2.6;
/// Space between a label and the grid edge
const LABEL_PAD: f64 = 0.15;
/// Rough advance of one character as a fraction of the font size
const CHAR_WIDTH_EM: f64 = 0.55;
const POINTS_PER_UNIT: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Which edge of the text box `y` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub anchor: Anchor,
    pub baseline: Baseline,
    /// Degrees, counter-clockwise
    pub rotation: f64,
}

impl TextItem {
    fn new(text: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            bold: false,
            anchor: Anchor::Start,
            baseline: Baseline::Middle,
            rotation: 0.0,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// One grid square
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellShape {
    pub row: usize,
    pub col: usize,
    pub year: u16,
    pub category: Category,
    pub rect: Rect,
    pub rounding: f64,
    pub fill: &'static str,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub category: Category,
    pub swatch: Rect,
    pub fill: &'static str,
    pub label: TextItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub caption: TextItem,
    pub entries: Vec<LegendEntry>,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub selection: Selection,
    pub width: f64,
    pub height: f64,
    /// Pixels per unit for raster/SVG output
    pub scale: f64,
    pub title: TextItem,
    pub legend: Legend,
    pub column_labels: Vec<TextItem>,
    pub row_labels: Vec<TextItem>,
    pub axis_labels: Vec<TextItem>,
    pub cells: Vec<CellShape>,
    pub footnote: TextItem,
}

impl Scene {
    /// Cells that keep their own color
    pub fn highlighted(&self) -> impl Iterator<Item = &CellShape> {
        self.cells.iter().filter(|c| c.highlighted)
    }

    /// Bounding box of the grid squares
    pub fn grid_bounds(&self) -> Option<Rect> {
        let first = self.cells.first()?.rect;
        let last = self.cells.last()?.rect;
        Some(Rect {
            x: first.x,
            y: first.y,
            width: last.right() - first.x,
            height: last.bottom() - first.y,
        })
    }
}

/// Fill for a cell of `category` under `selection`
pub fn fill_for(category: Category, selection: Selection) -> &'static str {
    if selection.highlights(category) {
        category.color()
    } else {
        FADED_COLOR
    }
}

/// Compute the full scene. Pure: equal inputs give equal scenes.
pub fn render(grid: &Grid, selection: Selection, layout: &LayoutParams) -> Scene {
    let width = layout.figure_width(grid.cols());
    let height = layout.figure_height(grid.rows());

    let cells: Vec<CellShape> = grid
        .cells()
        .map(|(row, col, category)| {
            let (x, y) = layout.cell_origin(row, col);
            CellShape {
                row,
                col,
                year: data::column_year(col),
                category,
                rect: Rect { x, y, width: layout.cell, height: layout.cell },
                rounding: layout.rounding,
                fill: fill_for(category, selection),
                highlighted: selection.highlights(category),
            }
        })
        .collect();

    tracing::debug!(
        selection = %selection,
        highlighted = cells.iter().filter(|c| c.highlighted).count(),
        "rendered scene"
    );

    Scene {
        selection,
        width,
        height,
        scale: layout.scale,
        title: TextItem::new(data::TITLE, 0.0, TITLE_TOP, layout.title_size)
            .bold()
            .baseline(Baseline::Top),
        legend: legend(layout),
        column_labels: column_labels(grid, layout),
        row_labels: row_labels(grid, layout),
        axis_labels: if layout.axis_labels { axis_labels(grid, layout) } else { Vec::new() },
        cells,
        footnote: TextItem::new(data::FOOTNOTE, 0.0, height - layout.bottom_margin / 2.0, layout.footnote_size),
    }
}

/// Approximate rendered width of `text` at `size` points
fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * CHAR_WIDTH_EM / POINTS_PER_UNIT
}

fn legend(layout: &LayoutParams) -> Legend {
    let swatch = layout.legend_size * 1.6 / POINTS_PER_UNIT;
    let label_gap = swatch / 2.0;

    let mut x = LEGEND_START;
    let entries = Category::ALL
        .iter()
        .map(|&category| {
            let name = category.display_name();
            let entry = LegendEntry {
                category,
                swatch: Rect { x, y: LEGEND_ROW - swatch / 2.0, width: swatch, height: swatch },
                fill: category.color(),
                label: TextItem::new(name, x + swatch + label_gap, LEGEND_ROW, layout.legend_size),
            };
            x += swatch + label_gap + text_width(name, layout.legend_size) + layout.legend_spacing;
            entry
        })
        .collect();

    Legend {
        caption: TextItem::new(data::LEGEND_CAPTION, 0.0, LEGEND_ROW, layout.legend_size).bold(),
        entries,
    }
}

fn column_labels(grid: &Grid, layout: &LayoutParams) -> Vec<TextItem> {
    data::YEAR_LABELS
        .iter()
        .enumerate()
        .take(grid.cols())
        .filter(|(_, label)| !label.is_empty())
        .map(|(col, label)| {
            let (x, _) = layout.cell_origin(0, col);
            TextItem::new(*label, x + layout.cell / 2.0, layout.top_margin - LABEL_PAD, layout.label_size)
                .anchor(Anchor::Middle)
                .baseline(Baseline::Bottom)
        })
        .collect()
}

fn row_labels(grid: &Grid, layout: &LayoutParams) -> Vec<TextItem> {
    (0..grid.rows())
        .map(|row| {
            let (_, y) = layout.cell_origin(row, 0);
            TextItem::new((row + 1).to_string(), layout.left_margin - LABEL_PAD, y + layout.cell / 2.0, layout.label_size)
                .anchor(Anchor::End)
        })
        .collect()
}

fn axis_labels(grid: &Grid, layout: &LayoutParams) -> Vec<TextItem> {
    let grid_mid_x = layout.left_margin + grid.cols() as f64 * layout.pitch() / 2.0;
    let grid_mid_y = layout.top_margin + grid.rows() as f64 * layout.pitch() / 2.0;
    let above_years = layout.top_margin - LABEL_PAD - layout.label_size * 1.6 / POINTS_PER_UNIT;

    vec![
        TextItem::new("Year", grid_mid_x, above_years, layout.label_size)
            .bold()
            .anchor(Anchor::Middle)
            .baseline(Baseline::Bottom),
        TextItem::new("Rank", layout.left_margin / 4.0, grid_mid_y, layout.label_size)
            .bold()
            .anchor(Anchor::Middle)
            .rotated(90.0),
    ]
}
