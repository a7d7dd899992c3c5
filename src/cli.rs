// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glam::DVec2;

use crate::core::MIN_POINTS;
use crate::shapes::{
    ArchimedeanSpiral, Circle, CurlyMaze, Ellipse, GoldenSpiral, SingleStrokeArt, SinusoidalCircle,
    Square, SuperformulaArt,
};
use crate::traits::Shape;
use crate::transport::DEFAULT_API_URL;

#[derive(Parser, Debug, Clone)]
#[command(name = "drawing-sampler")]
#[command(about = "Sample parametric curves and submit them to a drawing service", long_about = None)]
pub struct Cli {
    /// Base URL of the drawing service
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Simplification budget passed to the service (shape default when omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub max_vectors: Option<i64>,

    /// Write a PNG preview of the sampled path
    #[arg(long, default_value = "false")]
    pub render: bool,

    /// Directory for PNG previews
    #[arg(long, default_value = ".")]
    pub render_dir: PathBuf,

    /// Print the request body instead of sending it
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    #[command(subcommand)]
    pub shape: ShapeCommand,
}

fn parse_point_count(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n < MIN_POINTS {
        return Err(format!("at least {MIN_POINTS} points are needed"));
    }
    Ok(n)
}

fn parse_complexity(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 {
        return Err("complexity must be at least 1".to_string());
    }
    Ok(n)
}

#[derive(Args, Debug, Clone)]
pub struct Center {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_x: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f64,
}

impl Center {
    pub fn to_vec(&self) -> DVec2 {
        DVec2::new(self.center_x, self.center_y)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ShapeCommand {
    /// Plain circle
    Circle {
        #[arg(long, default_value_t = 1000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Circle with radius a + b·sin(freq·θ)
    CircleSin {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 100.0)]
        a: f64,
        #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
        b: f64,
        #[arg(long, default_value_t = 3.0)]
        freq: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Axis-aligned ellipse
    Ellipse {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 150.0)]
        a: f64,
        #[arg(long, default_value_t = 80.0)]
        b: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Archimedean spiral r = a + b·θ
    Spiral {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 10.0)]
        a: f64,
        #[arg(long, default_value_t = 1.0)]
        b: f64,
        #[arg(long, default_value_t = 15.0)]
        turns: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Logarithmic spiral r = scale·e^(growth·θ)
    GoldenSpiral {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        #[arg(long, default_value_t = 10.0)]
        turns: f64,
        #[arg(long, default_value_t = GoldenSpiral::DEFAULT_GROWTH)]
        growth: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Square traced side by side
    Square {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 200.0)]
        side: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Perturbed spiral with cross circles
    CurlyMaze {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 200.0)]
        size: f64,
        #[arg(long, default_value_t = 7, value_parser = parse_complexity)]
        complexity: usize,
        #[arg(long, default_value_t = 0.8)]
        density: f64,
        #[command(flatten)]
        center: Center,
    },
    /// Layered superformula drawing
    Superformula {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 200.0)]
        scale: f64,
    },
    /// Closed single-stroke rose curve
    SingleStroke {
        #[arg(long, default_value_t = 15000, value_parser = parse_point_count)]
        points: usize,
        #[arg(long, default_value_t = 250.0)]
        scale: f64,
        #[arg(long, default_value_t = 3.0)]
        complexity: f64,
    },
}

impl ShapeCommand {
    pub fn points(&self) -> usize {
        match *self {
            Self::Circle { points, .. }
            | Self::CircleSin { points, .. }
            | Self::Ellipse { points, .. }
            | Self::Spiral { points, .. }
            | Self::GoldenSpiral { points, .. }
            | Self::Square { points, .. }
            | Self::CurlyMaze { points, .. }
            | Self::Superformula { points, .. }
            | Self::SingleStroke { points, .. } => points,
        }
    }

    /// Budget each drawing was tuned for
    pub fn default_max_vectors(&self) -> i64 {
        match self {
            Self::CurlyMaze { .. } => 1000,
            Self::Superformula { .. } => 150,
            Self::SingleStroke { .. } => 200,
            _ => 100,
        }
    }

    pub fn build(&self) -> Box<dyn Shape> {
        match self {
            Self::Circle { radius, center, .. } => Box::new(Circle::new(center.to_vec(), *radius)),
            Self::CircleSin { a, b, freq, center, .. } => {
                Box::new(SinusoidalCircle::new(center.to_vec(), *a, *b, *freq))
            }
            Self::Ellipse { a, b, center, .. } => Box::new(Ellipse::new(center.to_vec(), *a, *b)),
            Self::Spiral { a, b, turns, center, .. } => {
                Box::new(ArchimedeanSpiral::new(center.to_vec(), *a, *b, *turns))
            }
            Self::GoldenSpiral { scale, turns, growth, center, .. } => Box::new(GoldenSpiral {
                center: center.to_vec(),
                scale: *scale,
                turns: *turns,
                growth: *growth,
            }),
            Self::Square { side, center, .. } => Box::new(Square::new(center.to_vec(), *side)),
            Self::CurlyMaze { size, complexity, density, center, .. } => {
                Box::new(CurlyMaze::new(center.to_vec(), *size, *complexity, *density))
            }
            Self::Superformula { scale, .. } => {
                Box::new(SuperformulaArt::new(*scale, SuperformulaArt::default_layers()))
            }
            Self::SingleStroke { scale, complexity, .. } => {
                Box::new(SingleStrokeArt::new(*scale, *complexity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["drawing-sampler", "circle"]).unwrap();
        assert_eq!(cli.api_url, DEFAULT_API_URL);
        assert_eq!(cli.max_vectors, None);
        assert!(!cli.render);
        assert!(!cli.dry_run);
        assert_eq!(cli.shape.points(), 1000);
        assert_eq!(cli.shape.default_max_vectors(), 100);
        assert_eq!(cli.shape.build().name(), "circle");
    }

    #[test]
    fn test_rejects_too_few_points() {
        assert!(Cli::try_parse_from(["drawing-sampler", "square", "--points", "1"]).is_err());
        assert!(Cli::try_parse_from(["drawing-sampler", "square", "--points", "2"]).is_ok());
    }

    #[test]
    fn test_rejects_zero_maze_complexity() {
        assert!(Cli::try_parse_from(["drawing-sampler", "curly-maze", "--complexity", "0"]).is_err());
        assert!(Cli::try_parse_from(["drawing-sampler", "curly-maze", "--complexity", "1"]).is_ok());
    }

    #[test]
    fn test_shape_options_and_negative_center() {
        let cli = Cli::try_parse_from([
            "drawing-sampler",
            "--max-vectors",
            "250",
            "curly-maze",
            "--complexity",
            "3",
            "--center-x",
            "-50",
        ])
        .unwrap();
        assert_eq!(cli.max_vectors, Some(250));
        match cli.shape {
            ShapeCommand::CurlyMaze { complexity, ref center, points, .. } => {
                assert_eq!(complexity, 3);
                assert_eq!(center.center_x, -50.0);
                assert_eq!(points, 15000);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_single_stroke_builds_closed_shape() {
        let cli = Cli::try_parse_from(["drawing-sampler", "single-stroke", "--points", "20"]).unwrap();
        let shape = cli.shape.build();
        assert!(shape.closes_loop());
        assert!(shape.sample(cli.shape.points()).is_closed());
    }
}
