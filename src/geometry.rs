use std::fmt;

use crate::bounds::Bounds;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "HORIZONTAL"),
            Orientation::Vertical => write!(f, "VERTICAL"),
        }
    }
}

/// Viewport geometry projected onto a reference canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    pub height: f64,
    pub width: f64,
    pub x: f64,
    pub y: f64,
}

impl Scaled {
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Scaled {
            height: f(self.height),
            width: f(self.width),
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// 1080p to 4k.
    pub fn doubled(self) -> Self {
        self.map(|v| v * 2.0)
    }

    /// 4k to 1440p. Divides before multiplying to keep legacy output identical.
    pub fn two_thirds(self) -> Self {
        self.map(|v| (v / 3.0) * 2.0)
    }
}

/// Everything derived from a detected rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub left_norm: f64,
    pub up_norm: f64,
    pub width_norm: f64,
    pub height_norm: f64,
    pub orientation: Orientation,
    /// height / width of the viewport.
    pub aspect_ratio_norm: f64,
    /// Same ratio expressed against a width of 8.
    pub aspect_ratio_8: f64,
    pub res_1080p: Scaled,
    pub res_1440p: Scaled,
    pub res_4k: Scaled,
    /// Horizontal offset of the image center from the viewport center, as a
    /// fraction of the viewport width.
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

/// Derives normalized geometry and calibration parameters for `bounds` found in
/// an `image_width` x `image_height` image.
///
/// Fails with [`Error::DegenerateRegion`] if the rectangle has no area.
pub fn derive(bounds: &Bounds, image_width: u32, image_height: u32) -> Result<Metrics> {
    let width = bounds.width();
    let height = bounds.height();
    if bounds.is_degenerate() {
        return Err(Error::DegenerateRegion { width, height });
    }

    let (w, h) = (image_width as f64, image_height as f64);
    let (left, up) = (bounds.left() as f64, bounds.up() as f64);
    let (width, height) = (width as f64, height as f64);

    let left_norm = left / w;
    let up_norm = up / h;
    let width_norm = width / w;
    let height_norm = height / h;

    let orientation = if width < height {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };

    let aspect_ratio_norm = height / width;
    let aspect_ratio_8 = 8.0 * aspect_ratio_norm;

    // A portrait overlay around a landscape viewport is laid out on a 1080x1920 canvas.
    let portrait_canvas = image_width < image_height && orientation == Orientation::Horizontal;
    let (canvas_w, canvas_h) = if portrait_canvas {
        (1080.0, 1920.0)
    } else {
        (1920.0, 1080.0)
    };
    let res_1080p = Scaled {
        height: height_norm * canvas_h,
        width: width_norm * canvas_w,
        x: left_norm * canvas_w,
        y: up_norm * canvas_h,
    };
    let res_4k = res_1080p.doubled();
    let res_1440p = res_4k.two_thirds();

    let center_x = (width + 2.0 * left - w) / (2.0 * width);
    let center_y = (height + 2.0 * up - h) / (2.0 * height);

    let zoom = 100.0 * aspect_ratio_norm.min(1.0) * width_norm;

    Ok(Metrics {
        left_norm,
        up_norm,
        width_norm,
        height_norm,
        orientation,
        aspect_ratio_norm,
        aspect_ratio_8,
        res_1080p,
        res_1440p,
        res_4k,
        center_x,
        center_y,
        zoom,
    })
}
