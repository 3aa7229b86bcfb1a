//! Inline SVG charts.
//!
//! Two charts exist: average fitness per generation with a one standard
//! deviation band, and a fitted density curve for one generation's population.

use std::fmt::{self, Write};

use tanager_core::entities::{DensityCurve, StatisticsSeries};

use super::html::escape;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const LEFT: f64 = 64.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 36.0;
const BOTTOM: f64 = 48.0;
const TICKS: usize = 5;

const MEAN_COLOR: &str = "rgb(31, 119, 180)";
const BAND_COLOR: &str = "rgba(68, 68, 68, 0.3)";

/// Data-to-pixel mapping for one plot area.
struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn new((x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) -> Self {
        let (x_min, x_max) = widen(x_min, x_max);
        let (y_min, y_max) = widen(y_min, y_max);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn x(&self, v: f64) -> f64 {
        LEFT + (v - self.x_min) / (self.x_max - self.x_min) * (WIDTH - LEFT - RIGHT)
    }

    fn y(&self, v: f64) -> f64 {
        TOP + (self.y_max - v) / (self.y_max - self.y_min) * (HEIGHT - TOP - BOTTOM)
    }

    fn axes(&self, out: &mut String, x_label: &str, y_label: &str) -> fmt::Result {
        let bottom = HEIGHT - BOTTOM;
        let right = WIDTH - RIGHT;
        writeln!(
            out,
            "<rect x=\"{LEFT}\" y=\"{TOP}\" width=\"{}\" height=\"{}\" fill=\"#fff\" stroke=\"#ddd\"/>",
            right - LEFT,
            bottom - TOP
        )?;

        for i in 0..=TICKS {
            let t = i as f64 / TICKS as f64;

            let xv = t.mul_add(self.x_max - self.x_min, self.x_min);
            let px = self.x(xv);
            writeln!(
                out,
                "<line x1=\"{px:.1}\" y1=\"{bottom}\" x2=\"{px:.1}\" y2=\"{}\" stroke=\"#999\"/>\
                 <text x=\"{px:.1}\" y=\"{}\" font-size=\"11\" text-anchor=\"middle\">{}</text>",
                bottom + 4.0,
                bottom + 16.0,
                tick_label(xv, self.x_max - self.x_min)
            )?;

            let yv = t.mul_add(self.y_max - self.y_min, self.y_min);
            let py = self.y(yv);
            writeln!(
                out,
                "<line x1=\"{}\" y1=\"{py:.1}\" x2=\"{LEFT}\" y2=\"{py:.1}\" stroke=\"#999\"/>\
                 <text x=\"{}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"end\">{}</text>",
                LEFT - 4.0,
                LEFT - 6.0,
                py + 4.0,
                tick_label(yv, self.y_max - self.y_min)
            )?;
        }

        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>",
            (LEFT + right) / 2.0,
            HEIGHT - 10.0,
            escape(x_label)
        )?;
        writeln!(
            out,
            "<text x=\"14\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\" transform=\"rotate(-90 14 {:.1})\">{}</text>",
            (TOP + bottom) / 2.0,
            (TOP + bottom) / 2.0,
            escape(y_label)
        )
    }
}

/// Give a degenerate range some width so single points still plot.
fn widen(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        (min - pad, max + pad)
    }
}

fn tick_label(value: f64, span: f64) -> String {
    let step = span / TICKS as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil().clamp(0.0, 6.0) as usize
    };
    format!("{value:.decimals$}")
}

fn open_svg(out: &mut String, id: &str, points: usize, title: &str) -> fmt::Result {
    writeln!(
        out,
        "<svg id=\"{id}\" class=\"chart\" data-points=\"{points}\" width=\"100%\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\">"
    )?;
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"22\" font-size=\"15\" text-anchor=\"middle\">{}</text>",
        WIDTH / 2.0,
        escape(title)
    )
}

fn polyline(out: &mut String, frame: &Frame, xs: &[f64], ys: &[f64], color: &str) -> fmt::Result {
    let points = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| format!("{:.2},{:.2}", frame.x(*x), frame.y(*y)))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "<polyline points=\"{points}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>"
    )
}

/// Average fitness per generation with a shaded mean ± std band.
///
/// # Errors
///
/// Only fails if writing to the output string fails.
pub fn fitness_vs_generation(out: &mut String, series: &StatisticsSeries) -> fmt::Result {
    let xs: Vec<f64> = series.generations.iter().map(|g| f64::from(*g)).collect();
    let x_range = xs
        .iter()
        .copied()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let y_range = series.value_range().unwrap_or((0.0, 1.0));
    let frame = Frame::new(x_range, y_range);

    open_svg(out, "fitness_vs_generation", series.len(), "Average Fitness vs Generation")?;
    frame.axes(out, "Generation", "Fitness")?;

    let band = xs
        .iter()
        .zip(&series.upper)
        .chain(xs.iter().zip(&series.lower).rev())
        .map(|(x, y)| format!("{:.2},{:.2}", frame.x(*x), frame.y(*y)))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        "<polygon class=\"band\" points=\"{band}\" fill=\"{BAND_COLOR}\" stroke=\"none\"/>"
    )?;
    polyline(out, &frame, &xs, &series.mean, MEAN_COLOR)?;

    for (x, y) in xs.iter().zip(&series.mean) {
        writeln!(
            out,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2\" fill=\"{MEAN_COLOR}\"><title>generation {x}: {y}</title></circle>",
            frame.x(*x),
            frame.y(*y)
        )?;
    }
    writeln!(out, "</svg>")
}

/// Normal density curve for one generation's fitness values.
///
/// # Errors
///
/// Only fails if writing to the output string fails.
pub fn generation_distribution(
    out: &mut String,
    curve: &DensityCurve,
    generation: usize,
) -> fmt::Result {
    let (xs, ys): (Vec<f64>, Vec<f64>) = curve.points.iter().copied().unzip();
    let x_range = (
        xs.first().copied().unwrap_or(0.0),
        xs.last().copied().unwrap_or(1.0),
    );
    let frame = Frame::new(x_range, (0.0, curve.peak()));

    open_svg(
        out,
        "generation_distribution",
        curve.points.len(),
        &format!("Fitness Distribution (generation {generation})"),
    )?;
    frame.axes(out, "Fitness", "Density")?;
    polyline(out, &frame, &xs, &ys, MEAN_COLOR)?;
    writeln!(
        out,
        "<text x=\"{:.1}\" y=\"{TOP}\" font-size=\"11\" text-anchor=\"end\">mean {:.4}, std {:.4}</text>",
        WIDTH - RIGHT - 4.0,
        curve.mean,
        curve.std_dev
    )?;
    writeln!(out, "</svg>")
}
