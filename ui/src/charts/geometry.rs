//! Pure geometry for the SVG charts: scales, axis ticks and path strings.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

/// Outer box of a chart in SVG user units, with the plot inset by margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn plot_left(&self) -> f64 {
        self.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.right
    }

    pub fn plot_top(&self) -> f64 {
        self.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Maps a numeric domain linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Rounds `max` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| normalized <= *candidate)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced ticks from zero to `nice_ceiling(max)`.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let top = nice_ceiling(max);
    let count = count.max(1);
    (0..=count)
        .map(|i| top * i as f64 / count as f64)
        .collect()
}

/// Horizontal position of the `index`-th of `len` evenly spread points.
pub fn spread(frame: &Frame, index: usize, len: usize) -> f64 {
    if len <= 1 {
        return frame.plot_left() + frame.plot_width() / 2.0;
    }
    frame.plot_left() + frame.plot_width() * index as f64 / (len - 1) as f64
}

/// `M x y L x y ...` through `points`; empty for no points.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        let cmd = if idx == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{cmd}{x:.2},{y:.2} ");
    }
    path.trim_end().to_string()
}

/// Angular extent of one pie slice, in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    pub end: f64,
}

impl SliceAngles {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Splits the circle proportionally to `values`, leaving `pad` radians
/// between neighbouring slices. A single slice gets the full circle.
/// Non-positive values get an empty slice so indices still line up.
pub fn pie_slices(values: &[f64], pad: f64) -> Vec<SliceAngles> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let live = values.iter().filter(|v| **v > 0.0).count();
    if total <= 0.0 {
        return values
            .iter()
            .map(|_| SliceAngles {
                start: 0.0,
                end: 0.0,
            })
            .collect();
    }

    let pad = if live > 1 { pad.max(0.0) } else { 0.0 };
    let available = (TAU - pad * live as f64).max(0.0);
    let mut cursor = 0.0;

    values
        .iter()
        .map(|value| {
            if *value <= 0.0 {
                return SliceAngles {
                    start: cursor,
                    end: cursor,
                };
            }
            let start = cursor;
            let end = start + available * value / total;
            cursor = end + pad;
            SliceAngles { start, end }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// SVG path for a donut segment. A full-circle sweep is drawn as a ring
/// (use `fill-rule: evenodd`).
pub fn donut_path(cx: f64, cy: f64, inner: f64, outer: f64, slice: SliceAngles) -> String {
    let sweep = slice.sweep();
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= TAU - 1e-9 {
        return format!(
            "M{:.2},{:.2} A{outer:.2},{outer:.2} 0 1 1 {:.2},{:.2} A{outer:.2},{outer:.2} 0 1 1 {:.2},{:.2} Z \
             M{:.2},{:.2} A{inner:.2},{inner:.2} 0 1 0 {:.2},{:.2} A{inner:.2},{inner:.2} 0 1 0 {:.2},{:.2} Z",
            cx, cy - outer, cx, cy + outer, cx, cy - outer,
            cx, cy - inner, cx, cy + inner, cx, cy - inner,
        );
    }

    let large_arc = if sweep > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, slice.start);
    let (ox1, oy1) = polar(cx, cy, outer, slice.end);
    let (ix1, iy1) = polar(cx, cy, inner, slice.end);
    let (ix0, iy0) = polar(cx, cy, inner, slice.start);

    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
    )
}
