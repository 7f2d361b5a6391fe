//! Rendering a mapping history as an SVG chart.
//!
//! Each layer of the history becomes a row of horizontal bars, one bar per
//! interval, colored by seed group. Between consecutive rows, every
//! transition paints a translucent band from its before span down to its
//! after span, so splits and shifts can be followed across the chain.

#![expect(
    clippy::cast_precision_loss,
    reason = "chart coordinates tolerate float rounding of large values"
)]

use range_remap::{History, Interval, Value};

use crate::almanac::SeedGroup;

/// Bar & band colors by seed group, cycling when groups run past the end.
const PALETTE: [&str; 10] = [
    "red", "green", "blue", "orange", "purple", "brown", "pink", "gray", "black", "cyan",
];

const CHART_WIDTH: f64 = 1500.0;
const SIDE_MARGIN: f64 = 70.0;
const TOP_MARGIN: f64 = 60.0;
const BOTTOM_MARGIN: f64 = 45.0;
const ROW_SPACING: f64 = 90.0;
const BAR_HEIGHT: f64 = 26.0;

fn color_for(group: SeedGroup) -> &'static str {
    PALETTE[group.0 % PALETTE.len()]
}

/// A linear scale from values onto the drawable x span.
struct ValueScale {
    lowest: Value,
    per_value: f64,
}

impl ValueScale {
    fn new(lowest: Value, highest: Value) -> Self {
        // a value occupies one unit of span, so a single-value extent still
        // has width
        let span = (highest - lowest) as f64 + 1.0;
        Self {
            lowest,
            per_value: (CHART_WIDTH - 2.0 * SIDE_MARGIN) / span,
        }
    }

    /// The x position of a value's left edge.
    fn left_of(&self, value: Value) -> f64 {
        SIDE_MARGIN + (value - self.lowest) as f64 * self.per_value
    }

    /// The x position of a value's right edge.
    fn right_of(&self, value: Value) -> f64 {
        self.left_of(value) + self.per_value
    }
}

/// The y position of a layer row's top edge.
fn row_top(row: usize) -> f64 {
    TOP_MARGIN + row as f64 * ROW_SPACING
}

/// The lowest and highest values appearing anywhere in the history.
fn value_extent(history: &History<SeedGroup>) -> Option<(Value, Value)> {
    let mut extent: Option<(Value, Value)> = None;
    for layer in history.layers() {
        for piece in layer {
            let (start, end) = (piece.interval.start(), piece.interval.end());
            extent = Some(extent.map_or((start, end), |(lowest, highest)| {
                (lowest.min(start), highest.max(end))
            }));
        }
    }
    extent
}

/// Render the full history as a standalone SVG document.
///
/// The caller decides where the document goes; this only builds the string.
#[must_use]
pub fn render_svg(history: &History<SeedGroup>) -> String {
    let layer_count = history.layers().count();
    let height = row_top(layer_count - 1) + BAR_HEIGHT + BOTTOM_MARGIN;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CHART_WIDTH}" height="{height}" viewBox="0 0 {CHART_WIDTH} {height}">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<rect width="{CHART_WIDTH}" height="{height}" fill="white"/>"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{SIDE_MARGIN}" y="30" font-family="sans-serif" font-size="20">Evolution of seed ranges through transitions</text>"#
    ));
    svg.push('\n');

    let Some((lowest, highest)) = value_extent(history) else {
        // nothing to draw for an empty seed set
        svg.push_str("</svg>\n");
        return svg;
    };
    let scale = ValueScale::new(lowest, highest);

    // transition bands go underneath the bars they connect
    for (index, step) in history.steps().iter().enumerate() {
        let band_top = row_top(index) + BAR_HEIGHT;
        let band_bottom = row_top(index + 1);
        for transition in &step.transitions {
            svg.push_str(&band(transition.before, transition.after, band_top, band_bottom, &scale, color_for(transition.label)));
            svg.push('\n');
        }
    }

    for (row, layer) in history.layers().enumerate() {
        let top = row_top(row);
        let label_y = top + BAR_HEIGHT - 7.0;
        svg.push_str(&format!(
            r#"<text x="20" y="{label_y:.1}" font-family="sans-serif" font-size="14">{row}</text>"#
        ));
        svg.push('\n');
        for piece in layer {
            svg.push_str(&bar(piece.interval, top, &scale, color_for(piece.label)));
            svg.push('\n');
        }
    }

    let axis_y = height - 15.0;
    svg.push_str(&format!(
        r#"<text x="{SIDE_MARGIN}" y="{axis_y:.1}" font-family="sans-serif" font-size="14">{lowest}</text>"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{axis_y:.1}" font-family="sans-serif" font-size="14" text-anchor="end">{highest}</text>"#,
        CHART_WIDTH - SIDE_MARGIN,
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// One interval drawn as a horizontal bar.
fn bar(interval: Interval, top: f64, scale: &ValueScale, color: &str) -> String {
    let x = scale.left_of(interval.start());
    // keep slivers visible at chart resolution
    let width = (scale.right_of(interval.end()) - x).max(1.0);
    format!(
        r#"<rect class="bar" x="{x:.2}" y="{top:.2}" width="{width:.2}" height="{BAR_HEIGHT}" fill="{color}" fill-opacity="0.7"/>"#
    )
}

/// One transition drawn as a translucent band between two rows.
fn band(
    before: Interval,
    after: Interval,
    top: f64,
    bottom: f64,
    scale: &ValueScale,
    color: &str,
) -> String {
    format!(
        r#"<polygon class="band" points="{:.2},{top:.2} {:.2},{top:.2} {:.2},{bottom:.2} {:.2},{bottom:.2}" fill="{color}" fill-opacity="0.25"/>"#,
        scale.left_of(before.start()),
        scale.right_of(before.end()),
        scale.right_of(after.end()),
        scale.left_of(after.start()),
    )
}
