//! Property-based tests for the renderer.
//!
//! Checks that the color rule, coverage and geometry invariants hold for
//! every selection and across randomly sized (but valid) layouts.

use proptest::prelude::*;
use rankgrid::render::render;
use rankgrid::report::svg;
use rankgrid::{Grid, LayoutParams, Selection, FADED_COLOR};
use std::collections::HashSet;

fn any_selection() -> impl Strategy<Value = Selection> {
    prop::sample::select(Selection::options().to_vec())
}

fn any_layout() -> impl Strategy<Value = LayoutParams> {
    (0.2f64..2.0, 0.01f64..0.5, 0.0f64..1.0, 0.0f64..2.0, 1.0f64..4.0, any::<bool>()).prop_map(
        |(cell, gap, rounding_frac, left_margin, top_margin, axis_labels)| LayoutParams {
            cell,
            gap,
            rounding: cell / 2.0 * rounding_frac,
            left_margin,
            top_margin,
            axis_labels,
            ..LayoutParams::compact()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fill_is_native_or_faded(selection in any_selection(), layout in any_layout()) {
        let scene = render(&Grid::broadcasts(), selection, &layout);
        for cell in &scene.cells {
            let expected = if selection.highlights(cell.category) {
                cell.category.color()
            } else {
                FADED_COLOR
            };
            prop_assert_eq!(cell.fill, expected, "cell ({}, {})", cell.row, cell.col);
        }
    }

    #[test]
    fn every_cell_rendered_once(selection in any_selection(), layout in any_layout()) {
        let scene = render(&Grid::broadcasts(), selection, &layout);
        prop_assert_eq!(scene.cells.len(), 110);
        let coords: HashSet<(usize, usize)> = scene.cells.iter().map(|c| (c.row, c.col)).collect();
        prop_assert_eq!(coords.len(), 110);
        prop_assert!(coords.iter().all(|&(r, c)| r < 10 && c < 11));
    }

    #[test]
    fn rendering_is_idempotent(selection in any_selection(), layout in any_layout()) {
        let grid = Grid::broadcasts();
        let first = render(&grid, selection, &layout);
        let second = render(&grid, selection, &layout);
        prop_assert_eq!(svg::to_string(&first), svg::to_string(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cells_never_overlap(layout in any_layout()) {
        let scene = render(&Grid::broadcasts(), Selection::All, &layout);
        for (i, a) in scene.cells.iter().enumerate() {
            for b in &scene.cells[i + 1..] {
                prop_assert!(!a.rect.overlaps(&b.rect), "({}, {}) overlaps ({}, {})", a.row, a.col, b.row, b.col);
            }
        }
    }

    #[test]
    fn placement_is_monotonic(layout in any_layout()) {
        let scene = render(&Grid::broadcasts(), Selection::All, &layout);
        for pair in scene.cells.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.row == b.row {
                prop_assert!(b.rect.x > a.rect.x);
                prop_assert_eq!(a.rect.y, b.rect.y);
            } else {
                prop_assert!(b.rect.y > a.rect.y);
            }
        }
        // every cell fits inside the figure
        for cell in &scene.cells {
            prop_assert!(cell.rect.right() <= scene.width);
            prop_assert!(cell.rect.bottom() <= scene.height);
        }
    }

    #[test]
    fn selection_changes_only_fills(a in any_selection(), b in any_selection(), layout in any_layout()) {
        let grid = Grid::broadcasts();
        let left = render(&grid, a, &layout);
        let right = render(&grid, b, &layout);
        prop_assert_eq!(left.width, right.width);
        prop_assert_eq!(left.height, right.height);
        prop_assert_eq!(&left.legend, &right.legend);
        prop_assert_eq!(&left.row_labels, &right.row_labels);
        prop_assert_eq!(&left.column_labels, &right.column_labels);
        for (x, y) in left.cells.iter().zip(&right.cells) {
            prop_assert_eq!(x.rect, y.rect);
            prop_assert_eq!(x.category, y.category);
        }
    }

    #[test]
    fn selection_parse_never_panics(s in "\\PC{0,40}") {
        let _ = s.parse::<Selection>();
    }
}
