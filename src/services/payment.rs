// Payment service: optional payment processing for premium features
// TODO: Replace the placeholder receipt with a real payment gateway integration

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Lifecycle, OptionalService, StatusReport};
use crate::types::{AppResult, Payload, ServiceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub usage: String,
    pub tier: String,
    pub requests_made: u64,
    pub requests_remaining: String,
}

impl UsageStats {
    pub fn unlimited_free_tier() -> Self {
        Self {
            usage: "unlimited".to_string(),
            tier: "free".to_string(),
            requests_made: 0,
            requests_remaining: "unlimited".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PaymentService {
    lifecycle: Lifecycle,
}

impl PaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready() -> Self {
        Self { lifecycle: Lifecycle::Ready }
    }

    pub async fn process_payment(&self, _payment: &Payload) -> AppResult<PaymentReceipt> {
        self.lifecycle.ensure_ready(Self::KIND)?;

        Ok(PaymentReceipt {
            success: true,
            transaction_id: "txn_placeholder".to_string(),
            message: "Payment processed (placeholder)".to_string(),
        })
    }

    pub async fn get_usage_stats(&self, _user_id: &str) -> AppResult<UsageStats> {
        self.lifecycle.ensure_ready(Self::KIND)?;
        Ok(UsageStats::unlimited_free_tier())
    }
}

#[async_trait]
impl OptionalService for PaymentService {
    const KIND: ServiceKind = ServiceKind::Payment;

    async fn initialize(&mut self) {
        self.lifecycle = Lifecycle::Ready;
        info!("Payment service initialized (placeholder)");
    }

    fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    async fn status(&self) -> StatusReport {
        StatusReport::placeholder(self.lifecycle)
    }
}
