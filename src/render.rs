//! PNG previews of sampled sequences.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use glam::DVec2;
use image::{Rgb, RgbImage};

use crate::math::hsv_to_rgb;
use crate::traits::SequenceRenderer;
use crate::types::PointSequence;

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const START_MARKER: Rgb<u8> = Rgb([255, 255, 255]);
const START_MARKER_RADIUS: i64 = 3;
/// Guide colors, cycled per guide and drawn at half brightness
const GUIDE_PALETTE: [[u8; 3]; 4] = [[70, 110, 255], [255, 80, 80], [80, 220, 80], [190, 90, 255]];

/// Draws the path as a rainbow line on black, oldest samples red, with the
/// first sample marked in white.
#[derive(Clone, Debug)]
pub struct PngRenderer {
    pub size: u32,
    pub margin: u32,
    pub output_dir: PathBuf,
}

impl PngRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            size: 1024,
            margin: 32,
            output_dir: output_dir.into(),
        }
    }

    /// `{name}_{YYYYmmddHHMMSS}.png` inside the output directory
    pub fn output_path(&self, name: &str) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d%H%M%S");
        self.output_dir.join(format!("{name}_{timestamp}.png"))
    }

    /// Fit the sequence into the image and draw it
    pub fn rasterize(&self, sequence: &PointSequence) -> RgbImage {
        self.rasterize_with_guides(sequence, &[])
    }

    /// Like [`Self::rasterize`], with `guides` drawn underneath the path in
    /// dimmed palette colors. The fit covers the guides too.
    pub fn rasterize_with_guides(&self, sequence: &PointSequence, guides: &[PointSequence]) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.size, self.size, BACKGROUND);
        let Some((min, max)) = combined_bounds(sequence, guides) else {
            return img;
        };

        let drawable = f64::from(self.size.saturating_sub(2 * self.margin).max(1));
        let extent = max - min;
        let scale = drawable / extent.max_element().max(1.0);
        // center the shorter axis
        let pad = (DVec2::splat(drawable) - extent * scale) / 2.0 + f64::from(self.margin);
        let top = f64::from(self.size.saturating_sub(1));

        // subtract in f64: saturated samples span the whole i64 range
        let to_pixel = |x: i64, y: i64| {
            let p = (DVec2::new(x as f64, y as f64) - min) * scale + pad;
            DVec2::new(p.x, top - p.y)
        };

        for (g, guide) in guides.iter().enumerate() {
            let color = Rgb(GUIDE_PALETTE[g % GUIDE_PALETTE.len()].map(|c| c / 2));
            for pair in guide.points().windows(2) {
                let from = to_pixel(pair[0].x, pair[0].y);
                let to = to_pixel(pair[1].x, pair[1].y);
                draw_line(&mut img, from, to, color);
            }
        }

        let points = sequence.points();
        if points.is_empty() {
            return img;
        }

        let count = points.len() as f64;
        for (i, pair) in points.windows(2).enumerate() {
            let color = Rgb(hsv_to_rgb(i as f64 / count, 1.0, 1.0));
            let from = to_pixel(pair[0].x, pair[0].y);
            let to = to_pixel(pair[1].x, pair[1].y);
            draw_line(&mut img, from, to, color);
        }

        let start = to_pixel(points[0].x, points[0].y);
        draw_disk(&mut img, start, START_MARKER_RADIUS, START_MARKER);

        img
    }
}

/// Bounding box of the path and its guides, in f64
fn combined_bounds(sequence: &PointSequence, guides: &[PointSequence]) -> Option<(DVec2, DVec2)> {
    std::iter::once(sequence)
        .chain(guides)
        .filter_map(PointSequence::bounds)
        .map(|((min_x, min_y), (max_x, max_y))| {
            (
                DVec2::new(min_x as f64, min_y as f64),
                DVec2::new(max_x as f64, max_y as f64),
            )
        })
        .reduce(|(a_min, a_max), (b_min, b_max)| (a_min.min(b_min), a_max.max(b_max)))
}

impl SequenceRenderer for PngRenderer {
    fn render(&self, name: &str, sequence: &PointSequence, guides: &[PointSequence]) -> Result<PathBuf> {
        if sequence.is_empty() {
            bail!("cannot render an empty sequence");
        }

        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create {:?}", self.output_dir))?;

        let path = self.output_path(name);
        save_png(&self.rasterize_with_guides(sequence, guides), &path)?;
        log::info!("Saved visualization as {}", path.display());
        Ok(path)
    }
}

fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("Failed to write PNG: {:?}", path))
}

fn put_pixel_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// DDA line between two pixel-space positions
fn draw_line(img: &mut RgbImage, from: DVec2, to: DVec2, color: Rgb<u8>) {
    let delta = to - from;
    let steps = delta.abs().max_element().ceil().max(1.0) as usize;
    for step in 0..=steps {
        let p = from + delta * (step as f64 / steps as f64);
        put_pixel_clipped(img, p.x.round() as i64, p.y.round() as i64, color);
    }
}

fn draw_disk(img: &mut RgbImage, center: DVec2, radius: i64, color: Rgb<u8>) {
    let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_pixel_clipped(img, cx + dx, cy + dy, color);
            }
        }
    }
}
