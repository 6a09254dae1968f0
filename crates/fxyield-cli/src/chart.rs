//! SVG line chart of profit against redemption exchange rate.

use std::fmt::Write as _;
use std::path::Path;

use fxyield_analytics::{ProfitCurve, ProfitSink};

use crate::error::{CliError, CliResult};

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TARGET_TICKS: f64 = 8.0;

/// Writes a [`ProfitCurve`] as an SVG line chart.
#[derive(Debug, Clone)]
pub struct SvgChart {
    width: f64,
    height: f64,
    title: String,
    x_label: String,
    y_label: String,
}

impl Default for SvgChart {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            title: "Bond Investment Profit vs. End Exchange Rate".to_string(),
            x_label: "End Exchange Rate (local/investment)".to_string(),
            y_label: "Profit".to_string(),
        }
    }
}

/// Axis extent with tick spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    min: f64,
    max: f64,
    tick: f64,
}

impl Axis {
    /// Expands `[lo, hi]` outward to whole multiples of a 1/2/5 tick step.
    fn nice(lo: f64, hi: f64) -> Self {
        let (lo, hi) = if (hi - lo).abs() < f64::EPSILON {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        };
        let tick = nice_step((hi - lo) / TARGET_TICKS);
        Self {
            min: (lo / tick).floor() * tick,
            max: (hi / tick).ceil() * tick,
            tick,
        }
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        let count = ((self.max - self.min) / self.tick).round() as usize;
        (0..=count).map(move |i| self.min + i as f64 * self.tick)
    }

    fn contains(&self, value: f64) -> bool {
        self.min < value && value < self.max
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn tick_label(value: f64, tick: f64) -> String {
    if tick >= 1.0 {
        format!("{:.0}", value)
    } else {
        let decimals = (-tick.log10().floor()) as usize;
        format!("{:.*}", decimals, value)
    }
}

impl SvgChart {
    /// Creates a chart with the default size and labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the chart to an SVG document.
    pub fn render(&self, curve: &ProfitCurve) -> CliResult<String> {
        if curve.is_empty() {
            return Err(CliError::Chart("profit curve has no points".to_string()));
        }

        let points = curve.points();
        let (x_lo, x_hi) = min_max(points.iter().map(|p| p.end_rate));
        let (y_lo, y_hi) = min_max(points.iter().map(|p| p.profit));
        let x_axis = Axis::nice(x_lo, x_hi);
        let y_axis = Axis::nice(y_lo, y_hi);

        let plot_w = self.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = self.height - MARGIN_TOP - MARGIN_BOTTOM;
        let sx = |x: f64| MARGIN_LEFT + (x - x_axis.min) / (x_axis.max - x_axis.min) * plot_w;
        let sy = |y: f64| MARGIN_TOP + (y_axis.max - y) / (y_axis.max - y_axis.min) * plot_h;

        let fmt_err = |e: std::fmt::Error| CliError::Chart(e.to_string());
        let mut svg = String::new();

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        )
        .map_err(fmt_err)?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#).map_err(fmt_err)?;
        writeln!(
            svg,
            r#"<text x="{}" y="30" text-anchor="middle" font-size="20">{}</text>"#,
            self.width / 2.0,
            self.title
        )
        .map_err(fmt_err)?;

        // Grid and tick labels
        writeln!(svg, r#"<g stroke="lightgray" stroke-width="1">"#).map_err(fmt_err)?;
        for x in x_axis.ticks() {
            writeln!(
                svg,
                r#"<line x1="{x:.2}" y1="{top:.2}" x2="{x:.2}" y2="{bottom:.2}"/>"#,
                x = sx(x),
                top = MARGIN_TOP,
                bottom = MARGIN_TOP + plot_h
            )
            .map_err(fmt_err)?;
        }
        for y in y_axis.ticks() {
            writeln!(
                svg,
                r#"<line x1="{left:.2}" y1="{y:.2}" x2="{right:.2}" y2="{y:.2}"/>"#,
                y = sy(y),
                left = MARGIN_LEFT,
                right = MARGIN_LEFT + plot_w
            )
            .map_err(fmt_err)?;
        }
        writeln!(svg, "</g>").map_err(fmt_err)?;

        writeln!(svg, r#"<g font-size="12" fill="black">"#).map_err(fmt_err)?;
        for x in x_axis.ticks() {
            writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
                sx(x),
                MARGIN_TOP + plot_h + 18.0,
                tick_label(x, x_axis.tick)
            )
            .map_err(fmt_err)?;
        }
        for y in y_axis.ticks() {
            writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 8.0,
                sy(y) + 4.0,
                tick_label(y, y_axis.tick)
            )
            .map_err(fmt_err)?;
        }
        writeln!(svg, "</g>").map_err(fmt_err)?;

        // Break-even reference
        if y_axis.contains(0.0) {
            writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="gray" stroke-dasharray="6 4"/>"#,
                MARGIN_LEFT,
                MARGIN_LEFT + plot_w,
                y = sy(0.0)
            )
            .map_err(fmt_err)?;
        }

        writeln!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            MARGIN_LEFT, MARGIN_TOP, plot_w, plot_h
        )
        .map_err(fmt_err)?;

        let polyline = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", sx(p.end_rate), sy(p.profit)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            svg,
            r#"<polyline points="{}" fill="none" stroke="steelblue" stroke-width="2"/>"#,
            polyline
        )
        .map_err(fmt_err)?;

        writeln!(svg, r#"<g fill="steelblue">"#).map_err(fmt_err)?;
        for p in points {
            writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="3"/>"#,
                sx(p.end_rate),
                sy(p.profit)
            )
            .map_err(fmt_err)?;
        }
        writeln!(svg, "</g>").map_err(fmt_err)?;

        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14">{}</text>"#,
            MARGIN_LEFT + plot_w / 2.0,
            self.height - 20.0,
            self.x_label
        )
        .map_err(fmt_err)?;
        writeln!(
            svg,
            r#"<text x="20" y="{y:.2}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {y:.2})">{}</text>"#,
            self.y_label,
            y = MARGIN_TOP + plot_h / 2.0
        )
        .map_err(fmt_err)?;
        writeln!(svg, "</svg>").map_err(fmt_err)?;

        Ok(svg)
    }
}

impl ProfitSink for SvgChart {
    type Error = CliError;

    fn write(&self, curve: &ProfitCurve, path: &Path) -> Result<(), Self::Error> {
        let svg = self.render(curve)?;
        std::fs::write(path, svg)?;
        tracing::info!("Wrote chart with {} points to {}", curve.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxyield_analytics::{ProfitSweep, RateRange};
    use fxyield_core::BondSpec;

    fn curve(from: f64, to: f64) -> ProfitCurve {
        let spec = BondSpec::builder()
            .coupon_rate(9.85)
            .unwrap()
            .nominal_yield_rate(19.70)
            .unwrap()
            .duration_years(2.5)
            .unwrap()
            .build()
            .unwrap();
        ProfitSweep::new(1000.0, 37.0, spec)
            .run(&RateRange::new(from, to, 1.0).unwrap())
            .unwrap()
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(14.25), 20.0);
        assert_eq!(nice_step(0.3), 0.5);
        assert_eq!(nice_step(100.0), 100.0);
        assert_eq!(nice_step(7.0), 10.0);
    }

    #[test]
    fn test_axis_covers_data() {
        let axis = Axis::nice(37.0, 150.0);
        assert!(axis.min <= 37.0);
        assert!(axis.max >= 150.0);
        assert_eq!(axis.tick, 20.0);
        assert_eq!(axis.ticks().next(), Some(20.0));
    }

    #[test]
    fn test_flat_axis_is_widened() {
        let axis = Axis::nice(5.0, 5.0);
        assert!(axis.min < 5.0 && axis.max > 5.0);
    }

    #[test]
    fn test_render_contains_every_point() {
        let curve = curve(37.0, 150.0);
        let svg = SvgChart::new().render(&curve).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Bond Investment Profit vs. End Exchange Rate"));
        assert_eq!(svg.matches("<circle").count(), curve.len());
        // Profit crosses zero inside the default sweep.
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_render_single_point() {
        let svg = SvgChart::new().render(&curve(37.0, 37.0)).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profit.svg");

        SvgChart::new().write(&curve(37.0, 40.0), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<polyline"));
    }
}
