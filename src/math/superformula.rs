/// Gielis superformula parameters
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Superformula {
    pub a: f64,
    pub b: f64,
    pub m: f64,
    pub n1: f64,
    pub n2: f64,
    pub n3: f64,
}

impl Superformula {
    pub const fn new(a: f64, b: f64, m: f64, n1: f64, n2: f64, n3: f64) -> Self {
        Self { a, b, m, n1, n2, n3 }
    }

    /// r(φ) = (|cos(mφ/4)/a|^n2 + |sin(mφ/4)/b|^n3)^(-1/n1)
    pub fn radius(&self, phi: f64) -> f64 {
        let t = self.m * phi * 0.25;
        let t1 = (t.cos() / self.a).abs().powf(self.n2);
        let t2 = (t.sin() / self.b).abs().powf(self.n3);
        (t1 + t2).powf(-1.0 / self.n1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_circle_parameters() {
        // m = 0 collapses to a circle of radius a (n2 = n1)
        let circle = Superformula::new(1.0, 1.0, 0.0, 2.0, 2.0, 2.0);
        for i in 0..8 {
            let phi = i as f64 * 0.7;
            assert!((circle.radius(phi) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_radius_at_zero() {
        let sf = Superformula::new(1.0, 1.0, 6.0, 1.0, 7.0, 8.0);
        assert!((sf.radius(0.0) - 1.0).abs() < 1e-12);
    }
}
