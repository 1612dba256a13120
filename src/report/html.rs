//! Dashboard pages
//!
//! [`dashboard_page`] is what the server returns for `/`: a sidebar with the
//! broadcast-type selector and the current chart inlined as SVG. Changing the
//! selector resubmits the form, so the server renders again.
//!
//! [`write_standalone`] produces a single offline file with one pre-rendered
//! chart per selection; the selector just toggles which one is visible.

use crate::data::Grid;
use crate::layout::LayoutParams;
use crate::render::render;
use crate::report::svg;
use crate::selection::Selection;
use std::io::{self, Write};

const PAGE_TITLE: &str = "Most-Watched Nonsports Broadcasts";

const STYLE: &str = r#"
        :root {
            --bg: #ffffff;
            --sidebar: #f0f2f6;
            --border: #d6d9e0;
            --text: #262730;
            --dim: #6b6f7b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            display: flex;
            min-height: 100vh;
        }
        .sidebar {
            width: 18rem;
            flex-shrink: 0;
            background: var(--sidebar);
            border-right: 1px solid var(--border);
            padding: 2rem 1.5rem;
        }
        .sidebar h2 { font-size: 1.25rem; margin-bottom: 1.25rem; }
        .sidebar label { display: block; font-size: 0.875rem; margin-bottom: 0.5rem; }
        .sidebar select {
            width: 100%;
            padding: 0.5rem;
            border: 1px solid var(--border);
            border-radius: 6px;
            font-size: 0.95rem;
            background: var(--bg);
        }
        .sidebar button { margin-top: 0.75rem; padding: 0.4rem 1rem; }
        .counts { margin-top: 2rem; font-size: 0.8rem; color: var(--dim); list-style: none; }
        .counts li { display: flex; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
        .dot { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }
        .main { flex: 1; padding: 2rem; overflow: auto; }
        .main svg { max-width: 100%; height: auto; }
        .chart[hidden] { display: none; }
"#;

/// Page served for one selection, with `chart_svg` inlined
pub fn dashboard_page(grid: &Grid, selection: Selection, chart_svg: &str) -> String {
    let mut page = Vec::with_capacity(chart_svg.len() + 8 * 1024);
    // Vec<u8> never fails to write
    let _ = write_page(&mut page, grid, selection, Mode::Form, |out| out.write_all(chart_svg.as_bytes()));
    String::from_utf8_lossy(&page).into_owned()
}

/// Offline page containing every selection's chart
pub fn write_standalone<W: Write>(writer: &mut W, grid: &Grid, layout: &LayoutParams) -> io::Result<()> {
    write_page(writer, grid, Selection::All, Mode::Toggle, |out| {
        for selection in Selection::options() {
            let scene = render(grid, selection, layout);
            let hidden = if selection == Selection::All { "" } else { " hidden" };
            writeln!(out, r#"<div class="chart" data-selection="{}"{}>"#, selection.key(), hidden)?;
            svg::write(out, &scene)?;
            writeln!(out, "</div>")?;
        }
        Ok(())
    })
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    /// Selector submits a GET form back to the server
    Form,
    /// Selector shows/hides pre-rendered charts in the page
    Toggle,
}

fn write_page<W, F>(writer: &mut W, grid: &Grid, selection: Selection, mode: Mode, charts: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    write!(
        writer,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <aside class="sidebar">
        <h2>Filter View</h2>
        <form method="get" action="/">
            <label for="selection">Select Broadcast Type:</label>
            <select id="selection" name="selection"{onchange}>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        onchange = match mode {
            Mode::Form => r#" onchange="this.form.submit()""#,
            Mode::Toggle => r#" onchange="showChart(this.value)""#,
        },
    )?;

    for option in Selection::options() {
        let selected = if option == selection { " selected" } else { "" };
        writeln!(
            writer,
            r#"                <option value="{}"{}>{}</option>"#,
            option.key(),
            selected,
            svg::escape(option.label())
        )?;
    }

    writeln!(writer, "            </select>")?;
    if mode == Mode::Form {
        writeln!(writer, r#"            <noscript><button type="submit">Apply</button></noscript>"#)?;
    }
    writeln!(writer, "        </form>")?;

    let tally = grid.tally();
    writeln!(writer, r#"        <ul class="counts">"#)?;
    for category in crate::data::Category::ALL {
        writeln!(
            writer,
            r#"            <li><span class="dot" style="background: {}"></span>{}: {} of {} slots</li>"#,
            category.color(),
            svg::escape(category.display_name()),
            tally.get(category),
            tally.total()
        )?;
    }
    writeln!(writer, "        </ul>")?;
    writeln!(writer, "    </aside>")?;

    writeln!(writer, r#"    <main class="main">"#)?;
    charts(writer)?;
    writeln!(writer, "    </main>")?;

    if mode == Mode::Toggle {
        writeln!(
            writer,
            r#"    <script>
        function showChart(key) {{
            document.querySelectorAll('.chart').forEach(function (el) {{
                el.hidden = el.dataset.selection !== key;
            }});
        }}
    </script>"#
        )?;
    }

    writeln!(writer, "</body>\n</html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    // ==========================================================================
    // SERVED DASHBOARD
    // ==========================================================================

    #[test]
    fn test_dashboard_has_sidebar_and_chart() {
        let grid = Grid::broadcasts();
        let page = dashboard_page(&grid, Selection::All, "<svg id=\"probe\"></svg>");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h2>Filter View</h2>"));
        assert!(page.contains("Select Broadcast Type:"));
        assert!(page.contains("<svg id=\"probe\"></svg>"));
        assert!(page.contains("this.form.submit()"));
        assert!(page.contains("<noscript>"));
    }

    #[test]
    fn test_dashboard_lists_all_options_in_order() {
        let page = dashboard_page(&Grid::broadcasts(), Selection::All, "");
        let mut last = 0;
        for option in Selection::options() {
            let needle = format!(r#"value="{}""#, option.key());
            let at = page.find(&needle).unwrap_or_else(|| panic!("missing option {}", option.key()));
            assert!(at >= last, "option {} out of order", option.key());
            last = at;
        }
        assert_eq!(page.matches("<option ").count(), 6);
    }

    #[test]
    fn test_dashboard_marks_current_selection() {
        let page = dashboard_page(&Grid::broadcasts(), Selection::Only(Category::Ncis), "");
        assert!(page.contains(r#"<option value="ncis" selected>“NCIS”</option>"#));
        assert!(page.contains(r#"<option value="all">All</option>"#));
        assert_eq!(page.matches(" selected>").count(), 1);
    }

    #[test]
    fn test_dashboard_shows_counts() {
        let page = dashboard_page(&Grid::broadcasts(), Selection::All, "");
        assert!(page.contains("“NCIS”: 9 of 110 slots"));
        assert!(page.contains("Macy’s Parade: 11 of 110 slots"));
    }

    // ==========================================================================
    // STANDALONE FILE
    // ==========================================================================

    #[test]
    fn test_standalone_embeds_one_chart_per_option() {
        let mut buf = Vec::new();
        write_standalone(&mut buf, &Grid::broadcasts(), &LayoutParams::compact()).unwrap();
        let page = String::from_utf8(buf).unwrap();

        assert_eq!(page.matches("<div class=\"chart\"").count(), 6);
        assert_eq!(page.matches("<svg ").count(), 6);
        // only the "All" chart is visible initially
        assert!(page.contains(r#"<div class="chart" data-selection="all">"#));
        assert!(page.contains(r#"<div class="chart" data-selection="60m" hidden>"#));
        assert!(page.contains("function showChart(key)"));
        assert!(!page.contains("this.form.submit()"));
    }
}
