use std::f64::consts::TAU;

use glam::DVec2;

use crate::core::sample_curve;
use crate::math::{segment_fraction, Superformula};
use crate::traits::Shape;
use crate::types::PointSequence;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SuperformulaLayer {
    pub formula: Superformula,
    pub weight: f64,
}

impl SuperformulaLayer {
    pub const fn new(formula: Superformula, weight: f64) -> Self {
        Self { formula, weight }
    }
}

/// Sum of weighted superformula curves with a slow wobble applied along the
/// path. Each layer wobbles at its own symmetry `m`.
#[derive(Clone, Debug, PartialEq)]
pub struct SuperformulaArt {
    pub scale: f64,
    pub wobble: f64,
    pub layers: Vec<SuperformulaLayer>,
}

impl SuperformulaArt {
    pub fn new(scale: f64, layers: Vec<SuperformulaLayer>) -> Self {
        Self {
            scale,
            wobble: 20.0,
            layers,
        }
    }

    pub fn default_layers() -> Vec<SuperformulaLayer> {
        vec![
            SuperformulaLayer::new(Superformula::new(1.0, 1.0, 6.0, 1.0, 7.0, 8.0), 1.0),
            SuperformulaLayer::new(Superformula::new(1.0, 1.0, 3.0, 2.0, 7.0, 4.0), 0.5),
            SuperformulaLayer::new(Superformula::new(1.0, 1.0, 5.0, 2.0, 13.0, 8.0), 0.3),
            SuperformulaLayer::new(Superformula::new(1.0, 1.0, 2.0, 0.7, 7.0, 15.0), 0.2),
        ]
    }

    /// Position of one layer at angle `phi` with wobble amplitude `wobble`
    pub fn layer_position(&self, layer: &SuperformulaLayer, phi: f64, wobble: f64) -> DVec2 {
        let r = layer.formula.radius(phi) * self.scale * layer.weight;
        let m = layer.formula.m;
        DVec2::new(
            r * phi.cos() + wobble * (phi * m).sin(),
            r * phi.sin() + wobble * (phi * m).cos(),
        )
    }
}

impl SuperformulaArt {
    /// Angle and wobble amplitude of sample `i` of `n`
    fn phase(&self, i: usize, n: usize) -> (f64, f64) {
        let phi = segment_fraction(i, n) * TAU;
        // two full wobble cycles over the drawing
        let wobble = (i as f64 / n as f64 * TAU * 2.0).sin() * self.wobble;
        (phi, wobble)
    }
}

impl Default for SuperformulaArt {
    fn default() -> Self {
        Self::new(200.0, Self::default_layers())
    }
}

impl Shape for SuperformulaArt {
    fn sample(&self, num_points: usize) -> PointSequence {
        sample_curve(num_points, |i, n| {
            let (phi, wobble) = self.phase(i, n);
            self.layers
                .iter()
                .map(|layer| self.layer_position(layer, phi, wobble))
                .fold(DVec2::ZERO, |acc, p| acc + p)
        })
    }

    /// Each layer on its own, as summed into the drawing
    fn guides(&self, num_points: usize) -> Vec<PointSequence> {
        self.layers
            .iter()
            .map(|layer| {
                sample_curve(num_points, |i, n| {
                    let (phi, wobble) = self.phase(i, n);
                    self.layer_position(layer, phi, wobble)
                })
            })
            .collect()
    }

    fn name(&self) -> &str {
        "superformula_art"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_is_sum_of_weights() {
        let seq = SuperformulaArt::default().sample(100);
        assert_eq!(seq.points()[0].coords(), (400, 0));
    }

    #[test]
    fn test_guides_one_per_layer() {
        let art = SuperformulaArt::default();
        let guides = art.guides(50);
        assert_eq!(guides.len(), 4);
        assert!(guides.iter().all(|g| g.len() == 50));
        // layer 0 starts at scale·weight on the x axis
        assert_eq!(guides[0].points()[0].coords(), (200, 0));
        assert_eq!(guides[1].points()[0].coords(), (100, 0));
    }

    #[test]
    fn test_no_layers_stays_at_origin() {
        let seq = SuperformulaArt::new(200.0, Vec::new()).sample(10);
        assert!(seq.iter().all(|p| p.coords() == (0, 0)));
    }

    #[test]
    fn test_single_layer_without_wobble_is_superformula() {
        let formula = Superformula::new(1.0, 1.0, 4.0, 2.0, 2.0, 2.0);
        let mut art = SuperformulaArt::new(100.0, vec![SuperformulaLayer::new(formula, 1.0)]);
        art.wobble = 0.0;

        let seq = art.sample(5);
        // quarter turn: φ = π/2
        let expected = formula.radius(std::f64::consts::FRAC_PI_2) * 100.0;
        assert_eq!(seq.points()[1].y, expected as i64);
    }
}
