//! SVG output

use crate::render::{Anchor, Baseline, Rect, Scene, TextItem};
use std::fmt::Write as _;
use std::io::{self, Write};

const FONT_FAMILY: &str = "'DejaVu Serif', Georgia, serif";
const TEXT_COLOR: &str = "#222222";
const LINE_HEIGHT: f64 = 1.2;

pub fn write<W: Write>(writer: &mut W, scene: &Scene) -> io::Result<()> {
    writer.write_all(to_string(scene).as_bytes())
}

/// Serialize a scene as a standalone SVG document
pub fn to_string(scene: &Scene) -> String {
    let s = scene.scale;
    let mut out = String::with_capacity(32 * 1024);

    // Writing into a String can't fail
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.1} {h:.1}" font-family="{font}" role="img" aria-label="{label}">"#,
        w = scene.width * s,
        h = scene.height * s,
        font = FONT_FAMILY,
        label = escape(&scene.title.text.replace('\n', " ")),
    );
    let _ = writeln!(out, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

    text(&mut out, &scene.title, s);

    text(&mut out, &scene.legend.caption, s);
    for entry in &scene.legend.entries {
        rect(&mut out, &entry.swatch, entry.swatch.width * 0.2, entry.fill, s, None);
        text(&mut out, &entry.label, s);
    }

    let _ = writeln!(out, r#"<g class="labels">"#);
    for label in scene.column_labels.iter().chain(&scene.row_labels).chain(&scene.axis_labels) {
        text(&mut out, label, s);
    }
    let _ = writeln!(out, "</g>");

    let _ = writeln!(out, r#"<g class="cells" data-selection="{}">"#, scene.selection);
    for cell in &scene.cells {
        let tooltip = format!("Rank {}, {}: {}", cell.row + 1, cell.year, cell.category.display_name());
        rect(&mut out, &cell.rect, cell.rounding, cell.fill, s, Some(&tooltip));
    }
    let _ = writeln!(out, "</g>");

    text(&mut out, &scene.footnote, s);
    out.push_str("</svg>\n");
    out
}

fn rect(out: &mut String, r: &Rect, rounding: f64, fill: &str, s: f64, tooltip: Option<&str>) {
    let _ = write!(
        out,
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}""#,
        r.x * s,
        r.y * s,
        r.width * s,
        r.height * s,
        rounding * s,
        rounding * s,
        fill
    );
    match tooltip {
        Some(tip) => {
            let _ = writeln!(out, "><title>{}</title></rect>", escape(tip));
        }
        None => out.push_str("/>\n"),
    }
}

fn text(out: &mut String, item: &TextItem, s: f64) {
    // points -> pixels at this scale
    let font_px = item.size * s / 72.0;
    let anchor = match item.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let baseline = match item.baseline {
        Baseline::Top => "hanging",
        Baseline::Middle => "central",
        Baseline::Bottom => "alphabetic",
    };
    let x = item.x * s;
    let y = item.y * s;

    let _ = write!(
        out,
        r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" text-anchor="{}" dominant-baseline="{}" fill="{}""#,
        x, y, font_px, anchor, baseline, TEXT_COLOR
    );
    if item.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    if item.rotation != 0.0 {
        // SVG rotates clockwise
        let _ = write!(out, r#" transform="rotate({:.1} {:.1} {:.1})""#, -item.rotation, x, y);
    }
    out.push('>');

    let mut lines = item.lines();
    if let Some(first) = lines.next() {
        out.push_str(&escape(first));
    }
    for line in lines {
        let _ = write!(
            out,
            r#"<tspan x="{:.1}" dy="{:.1}">{}</tspan>"#,
            x,
            font_px * LINE_HEIGHT,
            escape(line)
        );
    }
    out.push_str("</text>\n");
}

/// Escape text for XML content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, Grid, FADED_COLOR};
    use crate::layout::LayoutParams;
    use crate::render::render;
    use crate::selection::Selection;

    fn svg(selection: Selection) -> String {
        to_string(&render(&Grid::broadcasts(), selection, &LayoutParams::compact()))
    }

    #[test]
    fn test_document_shape() {
        let doc = svg(Selection::All);
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(doc.trim_end().ends_with("</svg>"));
        // 11.75 x 13 units at 72 px per unit
        assert!(doc.contains(r#"width="846" height="936""#));
    }

    #[test]
    fn test_one_titled_rect_per_cell() {
        let doc = svg(Selection::All);
        assert_eq!(doc.matches("<title>").count(), 110);
        assert!(doc.contains("<title>Rank 1, 2013: Academy Awards</title>"));
        assert!(doc.contains("<title>Rank 10, 2013: “NCIS”</title>"));
    }

    #[test]
    fn test_faded_cells_in_output() {
        let doc = svg(Selection::Only(Category::Parade));
        assert!(doc.contains(FADED_COLOR));
        assert!(doc.contains(r#"data-selection="parade""#));

        let all = svg(Selection::All);
        assert!(!all.contains(FADED_COLOR));
    }

    #[test]
    fn test_title_is_two_lines() {
        let doc = svg(Selection::All);
        assert!(doc.contains("The 10 Most-Watched Nonsports Entertainment Programs,"));
        assert!(doc.contains(">Ranked by Year</tspan>"));
        assert!(doc.contains(r#"font-weight="bold""#));
    }

    #[test]
    fn test_rotation_is_emitted_for_axis_labels() {
        let doc = to_string(&render(&Grid::broadcasts(), Selection::All, &LayoutParams::classic()));
        assert!(doc.contains("transform=\"rotate(-90.0"));
        assert!(doc.contains(">Rank</text>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(svg(Selection::Only(Category::Ncis)), svg(Selection::Only(Category::Ncis)));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape("Macy’s Parade"), "Macy’s Parade");
    }

    #[test]
    fn test_write_matches_to_string() {
        let scene = render(&Grid::broadcasts(), Selection::All, &LayoutParams::compact());
        let mut buf = Vec::new();
        write(&mut buf, &scene).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_string(&scene));
    }
}
