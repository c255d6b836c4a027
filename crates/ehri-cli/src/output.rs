//! Output formatting helpers.
//!
//! Charts are rendered into plain strings first so they can be tested; only
//! the printing helpers add color.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use ehri_core::GeoPoint;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 24;

pub const MAP_WIDTH: usize = 72;
pub const MAP_HEIGHT: usize = 20;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a section header.
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.chars().count()).dimmed());
}

/// Print a side note to stderr.
pub fn notice(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as compact JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print rows as JSON, pretty or compact.
pub fn rows<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    if pretty {
        json_pretty(value)
    } else {
        json(value)
    }
}

fn truncate(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(max - 1).collect();
        short.push('…');
        short
    }
}

/// Render a horizontal bar chart, one line per `(label, value)` in order.
///
/// Bars are scaled to the largest value; any non-zero value gets at least
/// one block.
pub fn render_bar_chart(bars: &[(&str, u64)]) -> String {
    let max = bars.iter().map(|(_, value)| *value).max().unwrap_or(0);
    let label_width = bars
        .iter()
        .map(|(label, _)| label.chars().count().min(LABEL_WIDTH))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in bars {
        let len = if max == 0 {
            0
        } else {
            ((*value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
        };
        let len = if *value > 0 { len.max(1) } else { 0 };

        out.push_str(&format!(
            "{:>label_width$} │{} {}\n",
            truncate(label, LABEL_WIDTH),
            "█".repeat(len),
            value
        ));
    }
    out
}

fn density_glyph(count: u32) -> char {
    match count {
        0 => ' ',
        1 => '·',
        2..=4 => 'o',
        5..=9 => 'O',
        _ => '@',
    }
}

/// Render points on an equirectangular grid fitted to their bounding box.
///
/// Each cell shows how many points fall into it: `·` one, `o` up to four,
/// `O` up to nine, `@` ten or more. Returns an empty string for no points.
pub fn render_point_map(points: &[GeoPoint], width: usize, height: usize) -> String {
    if points.is_empty() {
        return String::new();
    }
    let width = width.max(2);
    let height = height.max(2);

    let mut min_lat = f64::MAX;
    let mut max_lat = f64::MIN;
    let mut min_lon = f64::MAX;
    let mut max_lon = f64::MIN;
    for p in points {
        min_lat = min_lat.min(p.latitude);
        max_lat = max_lat.max(p.latitude);
        min_lon = min_lon.min(p.longitude);
        max_lon = max_lon.max(p.longitude);
    }

    // Pad so a single point or a straight line still spans an area.
    let lat_pad = ((max_lat - min_lat) * 0.05).max(0.5);
    let lon_pad = ((max_lon - min_lon) * 0.05).max(0.5);
    let min_lat = (min_lat - lat_pad).max(-90.0);
    let max_lat = (max_lat + lat_pad).min(90.0);
    let min_lon = (min_lon - lon_pad).max(-180.0);
    let max_lon = (max_lon + lon_pad).min(180.0);

    let mut cells = vec![0u32; width * height];
    for p in points {
        let col = ((p.longitude - min_lon) / (max_lon - min_lon) * (width - 1) as f64).round();
        let row = ((max_lat - p.latitude) / (max_lat - min_lat) * (height - 1) as f64).round();
        let col = (col.max(0.0) as usize).min(width - 1);
        let row = (row.max(0.0) as usize).min(height - 1);
        cells[row * width + col] += 1;
    }

    let border = format!("+{}+\n", "-".repeat(width));
    let mut out = border.clone();
    for row in cells.chunks(width) {
        let line: String = row.iter().map(|&n| density_glyph(n)).collect();
        out.push_str(&format!("|{line}|\n"));
    }
    out.push_str(&border);
    out.push_str(&format!(
        "lat {min_lat:.1}..{max_lat:.1}  lon {min_lon:.1}..{max_lon:.1}  ({} points)\n",
        points.len()
    ));
    out
}
