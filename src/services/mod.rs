//! Optional Services
//!
//! The enhancement layer is made of services the backend can run without:
//! - `memory` - conversation and preference storage (placeholder)
//! - `payment` - payment processing and usage statistics (placeholder)
//!
//! Each service owns a [`Lifecycle`] that only ever moves from
//! `Uninitialized` to `Ready`. Whether a service is wired in at all is
//! expressed by [`ServiceHandle`].

pub mod memory;
pub mod payment;

pub use memory::MemoryService;
pub use payment::PaymentService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::{AppError, AppResult, ServiceKind};

/// Initialization state of a service instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Ready,
}

impl Lifecycle {
    pub fn is_ready(self) -> bool {
        self == Lifecycle::Ready
    }

    /// Fails with `NotInitialized` unless the service is ready
    pub fn ensure_ready(self, kind: ServiceKind) -> AppResult<()> {
        match self {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Uninitialized => Err(AppError::NotInitialized(kind)),
        }
    }
}

/// Fixed-shape status record reported by every service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub available: bool,
    #[serde(rename = "type")]
    pub service_type: String,
    pub backend: String,
}

impl StatusReport {
    pub fn placeholder(lifecycle: Lifecycle) -> Self {
        Self {
            available: lifecycle.is_ready(),
            service_type: "placeholder".to_string(),
            backend: "none".to_string(),
        }
    }
}

/// Common surface of the optional services
#[async_trait]
pub trait OptionalService: Send + Sync {
    const KIND: ServiceKind;

    async fn initialize(&mut self);

    fn is_ready(&self) -> bool;

    async fn status(&self) -> StatusReport;
}

/// Entry of the `/api/status` services map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    pub reason: String,
}

/// A service that may or may not be wired into the application
#[derive(Debug)]
pub enum ServiceHandle<S> {
    Absent,
    Present(Arc<S>),
}

impl<S> Clone for ServiceHandle<S> {
    fn clone(&self) -> Self {
        match self {
            ServiceHandle::Absent => ServiceHandle::Absent,
            ServiceHandle::Present(service) => ServiceHandle::Present(Arc::clone(service)),
        }
    }
}

impl<S: OptionalService> ServiceHandle<S> {
    pub fn present(service: S) -> Self {
        ServiceHandle::Present(Arc::new(service))
    }

    /// Builds and initializes the service when `enabled`. The service is
    /// initialized while still owned, before it is wrapped for sharing.
    pub async fn start(enabled: bool, build: impl FnOnce() -> S) -> Self {
        if !enabled {
            tracing::info!("{} service disabled by configuration", S::KIND);
            return ServiceHandle::Absent;
        }

        let mut service = build();
        service.initialize().await;
        Self::present(service)
    }

    pub fn is_available(&self) -> bool {
        match self {
            ServiceHandle::Absent => false,
            ServiceHandle::Present(service) => service.is_ready(),
        }
    }

    /// Returns the ready service, or the error to surface to the caller
    pub fn require(&self) -> AppResult<&S> {
        match self {
            ServiceHandle::Absent => Err(AppError::Unavailable(S::KIND)),
            ServiceHandle::Present(service) if service.is_ready() => Ok(service.as_ref()),
            ServiceHandle::Present(_) => Err(AppError::NotInitialized(S::KIND)),
        }
    }

    /// Status of the service; an absent service reports unavailable
    pub async fn status(&self) -> StatusReport {
        match self {
            ServiceHandle::Absent => StatusReport::placeholder(Lifecycle::Uninitialized),
            ServiceHandle::Present(service) => service.status().await,
        }
    }

    /// Entry for `/api/status`. An absent service reports "Not configured"
    /// so it can be told apart from one that is wired in but not initialized.
    pub fn availability(&self) -> Availability {
        let (available, reason) = match self {
            ServiceHandle::Absent => (false, "Not configured"),
            ServiceHandle::Present(service) if service.is_ready() => (true, "Ready"),
            ServiceHandle::Present(_) => (false, "Not initialized"),
        };

        Availability {
            available,
            reason: reason.to_string(),
        }
    }
}
