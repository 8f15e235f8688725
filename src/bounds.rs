use image::{GenericImageView, Rgba};

use crate::options::Options;

/// Represents the bounds of the transparent region of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    left: u32,
    up: u32,
    right: u32,
    down: u32,
}

impl Bounds {
    /// Creates a new `Bounds` instance for a `width` x `height` image. Initially the
    /// rectangle is inverted (left/up at the far edge, right/down at zero) so it can
    /// only be narrowed onto the pixels that are actually found.
    pub fn new(width: u32, height: u32) -> Self {
        Bounds {
            left: width,
            up: height,
            right: 0,
            down: 0,
        }
    }

    #[cfg(test)]
    pub fn from_edges(left: u32, up: u32, right: u32, down: u32) -> Self {
        Bounds {
            left,
            up,
            right,
            down,
        }
    }

    /// Updates the bounds based on the x, y coordinates provided.
    fn update(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.up = self.up.min(y);
        self.right = self.right.max(x);
        self.down = self.down.max(y);
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn up(&self) -> u32 {
        self.up
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn down(&self) -> u32 {
        self.down
    }

    /// Negative when nothing was found.
    pub fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub fn height(&self) -> i64 {
        self.down as i64 - self.up as i64
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Integer midpoint of the horizontal and vertical extents.
    pub fn center(&self) -> (u32, u32) {
        ((self.left + self.right) / 2, (self.up + self.down) / 2)
    }
}

fn is_transparent<I>(img: &I, x: u32, y: u32, threshold: u8) -> bool
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    img.get_pixel(x, y).0[3] < threshold
}

/// Finds the rectangle enclosing every sampled pixel whose alpha is below the
/// threshold.
///
/// A strided scan over the whole image gives a first estimate, then each edge is
/// swept once, pixel by pixel, within `step` of its estimate. The result is not
/// iterated to a fixed point. If nothing qualifies the returned bounds stay
/// inverted, see [`Bounds::is_degenerate`].
pub fn detect<I>(img: &I, options: &Options) -> Bounds
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = img.dimensions();
    let step = options.step.max(1);
    let threshold = options.threshold;

    let mut bounds = Bounds::new(width, height);

    for x in (0..width).step_by(step as usize) {
        for y in (0..height).step_by(step as usize) {
            if is_transparent(img, x, y, threshold) {
                bounds.update(x, y);
            }
        }
    }

    refine_left(img, &mut bounds, step, threshold);
    refine_right(img, &mut bounds, step, threshold);
    refine_up(img, &mut bounds, step, threshold);
    refine_down(img, &mut bounds, step, threshold);

    bounds
}

fn refine_left<I>(img: &I, bounds: &mut Bounds, step: u32, threshold: u8)
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = img.dimensions();
    let start = bounds.left.saturating_sub(step);
    let end = bounds.left.saturating_add(step).min(width);

    for x in start..end {
        for y in (0..height).step_by(step as usize) {
            if x != bounds.left && is_transparent(img, x, y, threshold) {
                bounds.left = bounds.left.min(x);
            }
        }
    }
}

fn refine_right<I>(img: &I, bounds: &mut Bounds, step: u32, threshold: u8)
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = img.dimensions();
    let start = bounds.right.saturating_sub(step);
    let end = bounds.right.saturating_add(step).min(width);

    for x in start..end {
        for y in (0..height).step_by(step as usize) {
            if is_transparent(img, x, y, threshold) {
                bounds.right = bounds.right.max(x);
            }
        }
    }
}

fn refine_up<I>(img: &I, bounds: &mut Bounds, step: u32, threshold: u8)
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = img.dimensions();
    let start = bounds.up.saturating_sub(step);
    let end = bounds.up.saturating_add(step).min(height);

    for x in (0..width).step_by(step as usize) {
        for y in start..end {
            if is_transparent(img, x, y, threshold) {
                bounds.up = bounds.up.min(y);
            }
        }
    }
}

fn refine_down<I>(img: &I, bounds: &mut Bounds, step: u32, threshold: u8)
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = img.dimensions();
    let start = bounds.down.saturating_sub(step);
    let end = bounds.down.saturating_add(step).min(height);

    for x in (0..width).step_by(step as usize) {
        for y in start..end {
            if is_transparent(img, x, y, threshold) {
                bounds.down = bounds.down.max(y);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::RgbaImage;

    /// An opaque canvas with a fully transparent hole covering
    /// `left..=right` x `up..=down`.
    pub(crate) fn overlay(w: u32, h: u32, left: u32, up: u32, right: u32, down: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (left..=right).contains(&x) && (up..=down).contains(&y) {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([20, 20, 20, 255])
            }
        })
    }

    fn options(step: u32, threshold: u8) -> Options {
        Options { step, threshold }
    }

    #[test]
    fn test_new_is_inverted() {
        let bounds = Bounds::new(64, 32);
        assert_eq!(bounds.left(), 64);
        assert_eq!(bounds.up(), 32);
        assert_eq!(bounds.width(), -64);
        assert_eq!(bounds.height(), -32);
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_step_one_is_exact() {
        let img = overlay(40, 30, 5, 3, 20, 12);
        let bounds = detect(&img, &options(1, 100));
        assert_eq!(bounds, Bounds::from_edges(5, 3, 20, 12));
    }

    #[test]
    fn test_full_hd_viewport() {
        let img = overlay(1920, 1080, 100, 50, 1820, 1030);
        let bounds = detect(&img, &options(1, 100));
        assert_eq!(bounds, Bounds::from_edges(100, 50, 1820, 1030));
    }

    #[test]
    fn test_refinement_recovers_unaligned_edges() {
        // Edges 13 and 90 are not multiples of 7; the coarse pass alone gives 14 and 84.
        let img = overlay(120, 100, 13, 21, 90, 70);
        let bounds = detect(&img, &options(7, 100));
        assert_eq!(bounds, Bounds::from_edges(13, 21, 90, 70));
    }

    #[test]
    fn test_large_step_stays_within_one_step() {
        let (l, u, r, d) = (31u32, 17u32, 149u32, 88u32);
        for step in [2u32, 5, 9, 16] {
            let img = overlay(180, 120, l, u, r, d);
            let bounds = detect(&img, &options(step, 100));
            assert!(bounds.left() >= l && bounds.left() <= l + step, "step {step}: {bounds:?}");
            assert!(bounds.up() >= u && bounds.up() <= u + step, "step {step}: {bounds:?}");
            assert!(bounds.right() <= r && bounds.right() + step >= r, "step {step}: {bounds:?}");
            assert!(bounds.down() <= d && bounds.down() + step >= d, "step {step}: {bounds:?}");
        }
    }

    #[test]
    fn test_alpha_at_threshold_is_not_transparent() {
        let mut img = overlay(20, 20, 5, 5, 10, 10);
        for x in 5..=10 {
            for y in 5..=10 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 100]));
            }
        }
        assert!(detect(&img, &options(1, 100)).is_degenerate());
        assert_eq!(detect(&img, &options(1, 101)), Bounds::from_edges(5, 5, 10, 10));
    }

    #[test]
    fn test_opaque_image_stays_inverted() {
        let img = RgbaImage::from_pixel(50, 40, Rgba([255, 255, 255, 255]));
        let bounds = detect(&img, &options(5, 100));
        assert_eq!(bounds, Bounds::new(50, 40));
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_hole_touching_image_edges() {
        let img = overlay(33, 27, 0, 0, 32, 26);
        let bounds = detect(&img, &options(10, 100));
        assert_eq!(bounds, Bounds::from_edges(0, 0, 32, 26));
    }

    #[test]
    fn test_center() {
        let bounds = Bounds::from_edges(100, 50, 1821, 1030);
        assert_eq!(bounds.center(), (960, 540));
    }
}
