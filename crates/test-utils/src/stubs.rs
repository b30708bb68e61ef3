//! Stub projection providers.
//!
//! All stubs treat map units as radians: the forward transform returns
//! (lon, lat) unchanged and the inverse returns (x, y) unchanged. That
//! makes every mapping error visible as pure affine/rotation error.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use projection::{
    ForwardTransform, InverseTransform, ProjectionError, ProjectionProvider, ProjectionRequest,
    Result,
};

struct Identity;

impl ForwardTransform for Identity {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        Ok((lon, lat))
    }
}

impl InverseTransform for Identity {
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Ok((x, y))
    }
}

/// Provider whose transforms are exact identities.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProvider;

impl ProjectionProvider for IdentityProvider {
    fn forward_init(&self, _request: &ProjectionRequest) -> Result<Box<dyn ForwardTransform>> {
        Ok(Box::new(Identity))
    }

    fn inverse_init(&self, _request: &ProjectionRequest) -> Result<Box<dyn InverseTransform>> {
        Ok(Box::new(Identity))
    }
}

struct Counting {
    calls: Arc<AtomicUsize>,
}

impl ForwardTransform for Counting {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((lon, lat))
    }
}

impl InverseTransform for Counting {
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((x, y))
    }
}

/// Identity provider that counts every forward and inverse call.
///
/// Clones share the counter, so keep one clone to read it after the
/// provider has been handed to setup.
#[derive(Debug, Clone, Default)]
pub struct CountingProvider {
    calls: Arc<AtomicUsize>,
    requests: Arc<std::sync::Mutex<Vec<ProjectionRequest>>>,
}

impl CountingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests seen by the initializers, in order.
    pub fn requests(&self) -> Vec<ProjectionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, request: &ProjectionRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
    }
}

impl ProjectionProvider for CountingProvider {
    fn forward_init(&self, request: &ProjectionRequest) -> Result<Box<dyn ForwardTransform>> {
        self.record(request);
        Ok(Box::new(Counting {
            calls: Arc::clone(&self.calls),
        }))
    }

    fn inverse_init(&self, request: &ProjectionRequest) -> Result<Box<dyn InverseTransform>> {
        self.record(request);
        Ok(Box::new(Counting {
            calls: Arc::clone(&self.calls),
        }))
    }
}

/// Where a [`FailingProvider`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    ForwardInit,
    InverseInit,
    /// Inverse transform fails once this many calls have succeeded.
    InverseAfter(usize),
    /// Every forward transform fails.
    Forward,
}

struct Flaky {
    point: FailurePoint,
    calls: AtomicUsize,
}

impl ForwardTransform for Flaky {
    fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        if self.point == FailurePoint::Forward {
            return Err(ProjectionError::out_of_domain("stub forward failure"));
        }
        Ok((lon, lat))
    }
}

impl InverseTransform for Flaky {
    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let done = self.calls.fetch_add(1, Ordering::SeqCst);
        if let FailurePoint::InverseAfter(limit) = self.point {
            if done >= limit {
                return Err(ProjectionError::out_of_domain(format!(
                    "stub inverse failure after {} calls",
                    limit
                )));
            }
        }
        Ok((x, y))
    }
}

/// Provider that fails at a chosen point.
#[derive(Debug, Clone, Copy)]
pub struct FailingProvider {
    pub point: FailurePoint,
}

impl FailingProvider {
    pub fn new(point: FailurePoint) -> Self {
        Self { point }
    }
}

impl ProjectionProvider for FailingProvider {
    fn forward_init(&self, _request: &ProjectionRequest) -> Result<Box<dyn ForwardTransform>> {
        if self.point == FailurePoint::ForwardInit {
            return Err(ProjectionError::invalid_parameter("stub forward init failure"));
        }
        Ok(Box::new(Flaky {
            point: self.point,
            calls: AtomicUsize::new(0),
        }))
    }

    fn inverse_init(&self, _request: &ProjectionRequest) -> Result<Box<dyn InverseTransform>> {
        if self.point == FailurePoint::InverseInit {
            return Err(ProjectionError::invalid_parameter("stub inverse init failure"));
        }
        Ok(Box::new(Flaky {
            point: self.point,
            calls: AtomicUsize::new(0),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espa_common::{ProjectionCode, NPROJ_PARAM};

    fn request() -> ProjectionRequest {
        ProjectionRequest::new(ProjectionCode::Geographic, 0, [0.0; NPROJ_PARAM], 12)
    }

    #[test]
    fn test_counting_provider_shares_counter() {
        let provider = CountingProvider::new();
        let forward = provider.clone().forward_init(&request()).unwrap();
        forward.forward(0.1, 0.2).unwrap();
        forward.forward(0.3, 0.4).unwrap();
        assert_eq!(provider.calls(), 2);
        assert_eq!(provider.requests().len(), 1);
    }

    #[test]
    fn test_inverse_after_limit() {
        let provider = FailingProvider::new(FailurePoint::InverseAfter(1));
        let inverse = provider.inverse_init(&request()).unwrap();
        assert!(inverse.inverse(0.0, 0.0).is_ok());
        assert!(inverse.inverse(0.0, 0.0).is_err());
    }
}
