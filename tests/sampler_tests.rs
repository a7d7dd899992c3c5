use drawing_sampler::shapes::{
    ArchimedeanSpiral, Circle, CurlyMaze, Ellipse, GoldenSpiral, SingleStrokeArt, SinusoidalCircle,
    Square, SuperformulaArt,
};
use drawing_sampler::{PointSequence, Shape};
use glam::DVec2;

fn all_shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Circle::default()),
        Box::new(SinusoidalCircle::default()),
        Box::new(Ellipse::default()),
        Box::new(ArchimedeanSpiral::default()),
        Box::new(GoldenSpiral::default()),
        Box::new(Square::default()),
        Box::new(CurlyMaze::default()),
        Box::new(SuperformulaArt::default()),
        Box::new(SingleStrokeArt::default()),
    ]
}

fn assert_time_normalized(seq: &PointSequence, label: &str) {
    assert_eq!(seq.first().map(|p| p.time), Some(0.0), "{label}: first time");
    assert_eq!(seq.last().map(|p| p.time), Some(1.0), "{label}: last time");
    for pair in seq.points().windows(2) {
        assert!(
            pair[1].time >= pair[0].time,
            "{label}: time decreased from {} to {}",
            pair[0].time,
            pair[1].time
        );
    }
}

#[cfg(test)]
mod sequence_property_tests {
    use super::*;

    #[test]
    fn test_every_shape_produces_requested_count() {
        for shape in all_shapes() {
            for n in [2, 3, 4, 5, 16, 17, 101, 1500] {
                let seq = shape.sample(n);
                assert_eq!(seq.len(), n, "{} with {n} points", shape.name());
            }
        }
    }

    #[test]
    fn test_every_shape_normalizes_time() {
        for shape in all_shapes() {
            for n in [2, 7, 64, 999] {
                let seq = shape.sample(n);
                assert_time_normalized(&seq, &format!("{} n={n}", shape.name()));
            }
        }
    }

    #[test]
    fn test_every_shape_passes_service_validation() {
        for shape in all_shapes() {
            assert_eq!(shape.sample(250).validate(), Ok(()), "{}", shape.name());
        }
    }

    #[test]
    fn test_closed_shapes_end_where_they_start() {
        for shape in all_shapes().into_iter().filter(|s| s.closes_loop()) {
            for n in [2, 10, 15000] {
                assert!(shape.sample(n).is_closed(), "{} n={n}", shape.name());
            }
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        for shape in all_shapes() {
            assert_eq!(shape.sample(333), shape.sample(333), "{}", shape.name());
        }
    }
}

#[cfg(test)]
mod known_value_tests {
    use super::*;

    #[test]
    fn test_circle_four_points() {
        let seq = Circle::new(DVec2::ZERO, 100.0).sample(4);
        let got: Vec<_> = seq.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(got, vec![(100, 0), (0, 100), (-100, 0), (0, -100)]);

        let times: Vec<_> = seq.iter().map(|p| p.time).collect();
        assert_eq!(times[0], 0.0);
        assert!((times[1] - 0.333).abs() < 1e-3);
        assert!((times[2] - 0.667).abs() < 1e-3);
        assert_eq!(times[3], 1.0);
    }

    #[test]
    fn test_square_sixteen_points_has_four_sides() {
        let seq = Square::new(DVec2::ZERO, 200.0).sample(16);
        let corners = [(-100, -100), (100, -100), (100, 100), (-100, 100)];

        for (side, corner) in corners.iter().enumerate() {
            assert_eq!(seq.points()[side * 4].coords(), *corner, "side {side} start");
        }
        assert_eq!(seq.points()[15].coords(), (-100, -100));
        assert_eq!(seq.points()[0].time, 0.0);
        assert_eq!(seq.points()[15].time, 1.0);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 100·cos(2π/3) = -49.99..., which truncates to -49
        let seq = Circle::new(DVec2::ZERO, 100.0).sample(3);
        assert_eq!(seq.points()[1].x, -49);
        assert_eq!(seq.points()[1].y, 86);
    }

    #[test]
    fn test_curly_maze_fills_every_point() {
        let seq = CurlyMaze::default().sample(15000);
        assert_eq!(seq.len(), 15000);
        assert_eq!(seq.last().map(|p| p.time), Some(1.0));
    }
}
