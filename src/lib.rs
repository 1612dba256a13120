//! rankgrid - The most-watched nonsports broadcasts, ranked by year
//!
//! Renders a fixed 10×11 table (ranks 1-10 by years 2013-2023) as a grid of
//! rounded squares, one color per broadcast type. A selector picks one
//! broadcast type to highlight; every other square fades to a neutral gray.
//!
//! # Overview
//!
//! The dataset never changes, so the whole program is presentation: a pure
//! renderer from (grid, selection, layout) to a [`Scene`], writers that turn
//! a scene into SVG or an HTML page, and a small HTTP server that renders
//! again whenever the selector changes.
//!
//! # Quick Start
//!
//! ```
//! use rankgrid::{render, Category, Grid, LayoutParams, Selection};
//!
//! let grid = Grid::broadcasts();
//! let scene = render::render(&grid, Selection::Only(Category::Ncis), &LayoutParams::compact());
//!
//! for cell in scene.highlighted() {
//!     println!("rank {} in {}", cell.row + 1, cell.year);
//! }
//! ```
//!
//! # Color Rule
//!
//! | Selection | Cell category | Fill |
//! |-----------|---------------|------|
//! | All | any | the category's color |
//! | X | X | X's color |
//! | X | not X | `#f2f2f2` (faded) |
//!
//! # Modules
//!
//! - [`data`]: categories, the grid literal, labels
//! - [`selection`]: the selector's value
//! - [`layout`]: sizes, margins, presets and layout files
//! - [`render`]: scene geometry
//! - [`report`]: SVG, HTML and JSON output
//! - [`serve`]: the interactive dashboard server

pub mod data;
pub mod error;
pub mod layout;
pub mod render;
pub mod report;
pub mod selection;
pub mod serve;

pub use data::{Category, Grid, Tally, FADED_COLOR};
pub use error::{GridError, Result};
pub use layout::{LayoutParams, Preset};
pub use render::Scene;
pub use selection::Selection;
