mod circle;
mod ellipse;
mod maze;
mod single_stroke;
mod spiral;
mod square;
mod superformula;

use glam::DVec2;

pub use circle::{Circle, SinusoidalCircle};
pub use ellipse::Ellipse;
pub use maze::CurlyMaze;
pub use single_stroke::SingleStrokeArt;
pub use spiral::{ArchimedeanSpiral, GoldenSpiral};
pub use square::Square;
pub use superformula::{SuperformulaArt, SuperformulaLayer};

/// `center + trunc(r·(cos θ, sin θ))`: polar shapes snap the offset before
/// moving it onto the center.
fn polar(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + DVec2::new(radius * angle.cos(), radius * angle.sin()).trunc()
}

/// Angle of sample `i` when `n` samples go once around without repeating
/// the start.
fn full_turn_angle(i: usize, n: usize) -> f64 {
    std::f64::consts::TAU * i as f64 / n as f64
}
