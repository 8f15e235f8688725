//! Marker overlay for the `--preview` image.

use std::path::PathBuf;

use anyhow::Context;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::bounds::Bounds;

const MARKER_RADIUS: i64 = 10;
const MARKER_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// Draws a square marker on each corner and each edge midpoint of `bounds`.
/// Parts of a marker falling outside the image are dropped.
pub fn mark_bounds(img: &mut RgbaImage, bounds: &Bounds) {
    let (cx, cy) = bounds.center();
    let points = [
        (bounds.left(), bounds.up()),
        (bounds.right(), bounds.up()),
        (bounds.left(), bounds.down()),
        (bounds.right(), bounds.down()),
        (bounds.left(), cy),
        (bounds.right(), cy),
        (cx, bounds.up()),
        (cx, bounds.down()),
    ];

    for (x, y) in points {
        draw_square(img, x as i64, y as i64);
    }
}

fn draw_square(img: &mut RgbaImage, cx: i64, cy: i64) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for dx in -MARKER_RADIUS..MARKER_RADIUS {
        for dy in -MARKER_RADIUS..MARKER_RADIUS {
            let (x, y) = (cx + dx, cy + dy);
            if (0..w).contains(&x) && (0..h).contains(&y) {
                img.put_pixel(x as u32, y as u32, MARKER_COLOR);
            }
        }
    }
}

/// Writes the annotated image to the temp directory and opens it in the
/// default viewer.
pub fn show(img: &RgbaImage) -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("uborder-preview-{}.png", std::process::id()));
    img.save_with_format(&path, ImageFormat::Png)
        .with_context(|| format!("Failed to save preview to {}", path.display()))?;
    open::that(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(path)
}
