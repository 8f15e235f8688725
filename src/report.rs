use std::fmt::Write as _;
use std::path::Path;

use ansiterm::{Color, Style};
use anyhow::Context;

use crate::geometry::{Metrics, Orientation, Scaled};
use crate::options::Options;

/// Renders the uborder parameter file.
pub fn render_params(metrics: &Metrics) -> String {
    format!(
        "fr_aspect_x = \"1.000000\"\n\
         fr_aspect_y = \"{:.6}\"\n\
         fr_zoom = \"{:.6}\"\n\
         fr_center_x = \"{:.6}\"\n\
         fr_center_y = \"{:.6}\"\n",
        metrics.aspect_ratio_norm,
        metrics.zoom,
        100.0 * metrics.center_x,
        100.0 * metrics.center_y,
    )
}

pub fn write_params(path: &Path, metrics: &Metrics) -> anyhow::Result<()> {
    std::fs::write(path, render_params(metrics))
        .with_context(|| format!("Failed to write parameters to {}", path.display()))
}

/// Inputs of the preview report.
pub struct Preview<'a> {
    pub size: (u32, u32),
    pub options: &'a Options,
    pub metrics: &'a Metrics,
}

trait DisplayStyle {
    fn get_style(&self) -> Style;
}

impl DisplayStyle for Orientation {
    fn get_style(&self) -> Style {
        match self {
            Self::Horizontal => Style::new().fg(Color::BrightGreen),
            Self::Vertical => Style::new().fg(Color::BrightYellow),
        }
    }
}

fn paint(styled: bool, style: Style, text: &str) -> String {
    if styled {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

// Reference resolutions are truncated to whole pixels.
fn scaled_line(label: &str, norm: f64, pick: impl Fn(&Scaled) -> f64, m: &Metrics) -> String {
    format!(
        "\t{:<15} = (Norm.: \"{:.6}\"), (1080p: {:4}), (1440p: {:4}), (4k: {:4})",
        label,
        norm,
        pick(&m.res_1080p) as i64,
        pick(&m.res_1440p) as i64,
        pick(&m.res_4k) as i64,
    )
}

/// Renders the human readable report printed with `--preview`.
pub fn render_preview(preview: &Preview, styled: bool) -> String {
    let heading = Style::new().bold();
    let m = preview.metrics;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "\nImage Resolution = ({}, {})",
        preview.size.0, preview.size.1
    );
    let _ = writeln!(
        out,
        "Game Orientation (estimated) = {}",
        paint(styled, m.orientation.get_style(), &m.orientation.to_string())
    );

    let _ = writeln!(out, "\n{}", paint(styled, heading, "Options:"));
    let _ = writeln!(out, "\tSearch Step = {}", preview.options.step);
    let _ = writeln!(out, "\tTransparency Threshold = {}", preview.options.threshold);

    let _ = writeln!(out, "\n{}", paint(styled, heading, "Results:"));
    let _ = writeln!(out, "{}", scaled_line("Viewport Height", m.height_norm, |s| s.height, m));
    let _ = writeln!(out, "{}", scaled_line("Viewport Width", m.width_norm, |s| s.width, m));
    let _ = writeln!(out, "{}", scaled_line("Viewport X", m.left_norm, |s| s.x, m));
    let _ = writeln!(out, "{}", scaled_line("Viewport Y", m.up_norm, |s| s.y, m));

    let _ = writeln!(out, "\n{}", paint(styled, heading, "Uborder parameters:"));
    let _ = writeln!(
        out,
        "\tAspect Ratio = (Norm.: \"1.0\", \"{:.6}\"), (\"8.0\", \"{:.6}\")",
        m.aspect_ratio_norm, m.aspect_ratio_8
    );
    let _ = writeln!(out, "\tZOOM     = \"{:.6}\"", m.zoom);
    let _ = writeln!(out, "\tcenter_x = \"{:.6}\"", 100.0 * m.center_x);
    let _ = writeln!(out, "\tcenter_y = \"{:.6}\"", 100.0 * m.center_y);

    out
}
