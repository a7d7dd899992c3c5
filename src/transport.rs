//! Submission of point sequences to the drawing service.

use log::{debug, warn};
use thiserror::Error;

use crate::types::{DrawingRequest, DrawingResponse, PointSequence, SequenceError};

pub const DEFAULT_API_URL: &str = "http://localhost:8081";
pub const DEFAULT_MAX_VECTORS: i64 = 100;
pub const MAX_MAX_VECTORS: i64 = 500;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("sequence rejected before sending: {0}")]
    InvalidSequence(#[from] SequenceError),
    #[error("request to drawing service failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("drawing service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode drawing service response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Bring `max_vectors` into the range the service accepts: non-positive
/// values fall back to the default, large ones are capped.
pub fn clamp_max_vectors(max_vectors: i64) -> i64 {
    if max_vectors <= 0 {
        DEFAULT_MAX_VECTORS
    } else {
        max_vectors.min(MAX_MAX_VECTORS)
    }
}

/// Blocking client for `POST /drawing`
pub struct DrawingClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl DrawingClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(TransportError::Request)?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/drawing", self.base_url.trim_end_matches('/'))
    }

    /// Send one sequence. A single attempt is made; any failure is returned.
    pub fn submit(
        &self,
        sequence: &PointSequence,
        max_vectors: i64,
    ) -> Result<DrawingResponse, TransportError> {
        sequence.validate()?;

        let clamped = clamp_max_vectors(max_vectors);
        if clamped != max_vectors {
            warn!("maxVectors {max_vectors} is outside 1..={MAX_MAX_VECTORS}, sending {clamped}");
        }

        let endpoint = self.endpoint();
        debug!("POST {endpoint} with {} points", sequence.len());

        let res = self
            .http
            .post(&endpoint)
            .json(&DrawingRequest {
                points: sequence,
                max_vectors: clamped,
            })
            .send()
            .map_err(TransportError::Request)?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .unwrap_or_else(|_| "<failed to get body>".to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        res.json::<DrawingResponse>().map_err(TransportError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_max_vectors() {
        assert_eq!(clamp_max_vectors(0), 100);
        assert_eq!(clamp_max_vectors(-5), 100);
        assert_eq!(clamp_max_vectors(150), 150);
        assert_eq!(clamp_max_vectors(500), 500);
        assert_eq!(clamp_max_vectors(501), 500);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = DrawingClient::new("http://localhost:8081/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8081/drawing");
    }

    #[test]
    fn test_invalid_sequence_is_not_sent() {
        let client = DrawingClient::new("http://127.0.0.1:9").unwrap();
        let err = client.submit(&PointSequence::default(), 100).unwrap_err();
        assert!(matches!(err, TransportError::InvalidSequence(SequenceError::Empty)));
    }
}
