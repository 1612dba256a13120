//! The static dataset
//!
//! The ten most-watched nonsports entertainment broadcasts of each year,
//! 2013 through 2023, bucketed into five broadcast types:
//!
//! ```text
//! Key     | Display name     | Color
//! --------|------------------|---------
//! parade  | Macy’s Parade    | #4b2500  dark brown
//! awards  | Academy Awards   | #e9a7a7  soft pink
//! 60m     | “60 Minutes”     | #ddc7ae  beige
//! ncis    | “NCIS”           | #7f9baa  muted blue
//! other   | Other            | #e6e6e6  light gray
//! ```
//!
//! Rows are ranks (1 at the top), columns are years (2013 on the left).
//! Nothing here is computed; the table is authored by hand.

use crate::error::{GridError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const ROWS: usize = 10;
pub const COLS: usize = 11;

/// Year of the leftmost column
pub const FIRST_YEAR: u16 = 2013;

pub const TITLE: &str = "The 10 Most-Watched Nonsports Entertainment Programs,\nRanked by Year";

pub const LEGEND_CAPTION: &str = "Broadcasts:";

pub const FOOTNOTE: &str =
    "Note: Sports broadcasts are excluded. Each column is one calendar year, 2013 to 2023.";

/// Column headers; only every other year is labeled
pub const YEAR_LABELS: [&str; COLS] = ["", "2014", "", "’16", "", "’18", "", "’20", "", "’22", ""];

/// Fill for cells that don't match the current selection
pub const FADED_COLOR: &str = "#f2f2f2";

/// One broadcast type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Parade,
    Awards,
    #[serde(rename = "60m")]
    SixtyMinutes,
    Ncis,
    Other,
}

impl Category {
    /// All categories in legend order
    pub const ALL: [Category; 5] = [
        Category::Parade,
        Category::Awards,
        Category::SixtyMinutes,
        Category::Ncis,
        Category::Other,
    ];

    /// Short key used in URLs and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Category::Parade => "parade",
            Category::Awards => "awards",
            Category::SixtyMinutes => "60m",
            Category::Ncis => "ncis",
            Category::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Parade => "Macy’s Parade",
            Category::Awards => "Academy Awards",
            Category::SixtyMinutes => "“60 Minutes”",
            Category::Ncis => "“NCIS”",
            Category::Other => "Other",
        }
    }

    /// Hex fill color
    pub fn color(self) -> &'static str {
        match self {
            Category::Parade => "#4b2500",
            Category::Awards => "#e9a7a7",
            Category::SixtyMinutes => "#ddc7ae",
            Category::Ncis => "#7f9baa",
            Category::Other => "#e6e6e6",
        }
    }

    /// Look a category up by its selector label ("Academy Awards", "“NCIS”", ...)
    pub fn from_display_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GridError::UnknownCategory(s.to_string()))
    }
}

/// Cell count per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub parade: usize,
    pub awards: usize,
    #[serde(rename = "60m")]
    pub sixty_minutes: usize,
    pub ncis: usize,
    pub other: usize,
}

impl Tally {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Parade => self.parade,
            Category::Awards => self.awards,
            Category::SixtyMinutes => self.sixty_minutes,
            Category::Ncis => self.ncis,
            Category::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }
}

/// The rank-by-year table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Category; COLS]; ROWS],
}

impl Grid {
    pub fn new(cells: [[Category; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// The broadcast rankings, 2013-2023
    pub fn broadcasts() -> Self {
        use Category::{Awards as A, Ncis as N, Other as O, Parade as P, SixtyMinutes as S};

        Self::new([
            [A, A, A, A, A, O, A, O, P, P, P], // rank 1
            [O, O, O, O, O, A, O, A, O, A, A], // rank 2
            [A, O, O, O, O, P, P, P, O, O, O], // rank 3
            [P, A, A, P, P, S, O, O, O, S, O], // rank 4
            [N, O, O, A, A, O, O, O, S, S, O], // rank 5
            [O, O, P, S, O, O, O, O, S, S, O], // rank 6
            [N, P, O, O, O, O, O, S, S, S, S], // rank 7
            [N, O, N, O, O, O, A, O, S, S, S], // rank 8
            [N, N, N, S, O, O, O, O, S, S, O], // rank 9
            [N, O, O, N, O, O, O, O, A, S, S], // rank 10
        ])
    }

    /// Parse a table of category keys, e.g. from a test fixture
    pub fn from_keys(rows: &[[&str; COLS]; ROWS]) -> Result<Self> {
        let mut cells = [[Category::Other; COLS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            for (c, key) in row.iter().enumerate() {
                cells[r][c] = key.parse()?;
            }
        }
        Ok(Self::new(cells))
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        COLS
    }

    /// Category at zero-based (row, col); `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Category> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Every cell in row-major order as (row, col, category)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Category)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &cat)| (r, c, cat)))
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for (_, _, category) in self.cells() {
            match category {
                Category::Parade => tally.parade += 1,
                Category::Awards => tally.awards += 1,
                Category::SixtyMinutes => tally.sixty_minutes += 1,
                Category::Ncis => tally.ncis += 1,
                Category::Other => tally.other += 1,
            }
        }
        tally
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::broadcasts()
    }
}

/// Calendar year shown by a column
pub fn column_year(col: usize) -> u16 {
    FIRST_YEAR + col as u16
}
