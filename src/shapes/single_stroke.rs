use std::f64::consts::TAU;

use glam::DVec2;

use crate::core::sample_curve;
use crate::math::segment_fraction;
use crate::traits::Shape;
use crate::types::PointSequence;

const BASE_RADIUS: f64 = 80.0;
const LOBE_AMPLITUDE: f64 = 100.0;
const WAVE_AMPLITUDE: f64 = 20.0;
const RIPPLE_AMPLITUDE: f64 = 30.0;
const LOBES: f64 = 5.0;
const WAVES: f64 = 8.0;
const REFERENCE_SCALE: f64 = 200.0;

/// A closed, modulated rose curve drawn in one stroke
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SingleStrokeArt {
    pub scale: f64,
    pub complexity: f64,
}

impl SingleStrokeArt {
    pub const fn new(scale: f64, complexity: f64) -> Self {
        Self { scale, complexity }
    }

    pub fn position(&self, t: f64) -> DVec2 {
        let c = self.complexity;

        let modulation = WAVE_AMPLITUDE * (WAVES * t).sin() + RIPPLE_AMPLITUDE * (c * WAVES * t).cos();
        let r = BASE_RADIUS + LOBE_AMPLITUDE * (LOBES * t).sin() + modulation * (t * 2.0 * c).sin();

        let swirl = 0.2 * self.scale * (t * c).sin();
        let curve = DVec2::new(
            r * t.cos() + swirl * (t * LOBES * 2.0).cos(),
            r * t.sin() + swirl * (t * LOBES * 2.0).sin(),
        );

        curve * self.scale / REFERENCE_SCALE
    }
}

impl Default for SingleStrokeArt {
    fn default() -> Self {
        Self::new(250.0, 3.0)
    }
}

impl Shape for SingleStrokeArt {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| self.position(segment_fraction(i, n) * TAU)).close_loop()
    }

    fn name(&self) -> &str {
        "single_stroke_art"
    }

    fn closes_loop(&self) -> bool {
        true
    }
}
