use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single timestamped sample, as accepted by the drawing service
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub time: f64,
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(time: f64, x: i64, y: i64) -> Self {
        Self { time, x, y }
    }

    /// Project a continuous position onto integer space, truncating toward zero
    pub fn from_continuous(time: f64, pos: DVec2) -> Self {
        Self {
            time,
            x: pos.x as i64,
            y: pos.y as i64,
        }
    }

    pub fn coords(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

/// Reasons a sequence would be refused by the drawing service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    #[error("there needs to be at least 1 point")]
    Empty,
    #[error("the first point's time must be zero, got {0}")]
    FirstTimeNotZero(f64),
    #[error("point {index} has time {time}, earlier than the previous point")]
    NotSequential { index: usize, time: f64 },
}

/// Ordered, time-normalized list of points describing one drawable path
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSequence(Vec<Point>);

impl PointSequence {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Overwrite the last point's coordinates with the first point's so the
    /// path ends exactly where it started. Time values are left untouched.
    pub fn close_loop(mut self) -> Self {
        let first = self.0.first().copied();
        if let (Some(first), Some(last)) = (first, self.0.last_mut()) {
            last.x = first.x;
            last.y = first.y;
        }
        self
    }

    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first.coords() == last.coords(),
            _ => false,
        }
    }

    /// Check the admission rules the drawing service applies on submit
    pub fn validate(&self) -> Result<(), SequenceError> {
        let first = self.first().ok_or(SequenceError::Empty)?;
        if first.time != 0.0 {
            return Err(SequenceError::FirstTimeNotZero(first.time));
        }

        for (index, pair) in self.0.windows(2).enumerate() {
            if pair[1].time < pair[0].time {
                return Err(SequenceError::NotSequential {
                    index: index + 1,
                    time: pair[1].time,
                });
            }
        }

        Ok(())
    }

    /// Min and max integer coordinates, `None` for an empty sequence
    pub fn bounds(&self) -> Option<((i64, i64), (i64, i64))> {
        let first = self.first()?;
        let init = ((first.x, first.y), (first.x, first.y));
        Some(self.iter().fold(init, |((min_x, min_y), (max_x, max_y)), p| {
            (
                (min_x.min(p.x), min_y.min(p.y)),
                (max_x.max(p.x), max_y.max(p.y)),
            )
        }))
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Request body for `POST /drawing`
#[derive(Clone, Debug, Serialize)]
pub struct DrawingRequest<'a> {
    pub points: &'a PointSequence,
    #[serde(rename = "maxVectors")]
    pub max_vectors: i64,
}

/// Response body from `POST /drawing`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DrawingResponse {
    pub id: i64,
}
