use crate::config::Config;
use crate::services::{Availability, MemoryService, PaymentService, ServiceHandle};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub memory: ServiceHandle<MemoryService>,
    pub payment: ServiceHandle<PaymentService>,
}

impl AppState {
    /// Wires in the enabled services and initializes them
    pub async fn initialize(config: Config) -> Self {
        let services = &config.services;
        let memory = ServiceHandle::start(services.memory_enabled, MemoryService::new).await;
        let payment = ServiceHandle::start(services.payment_enabled, PaymentService::new).await;

        Self { config, memory, payment }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub services: ServiceFlags,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceFlags {
    pub memory: bool,
    pub payment: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StatusResponse {
    pub backend_available: bool,
    pub services: ServiceAvailability,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServiceAvailability {
    pub memory: Availability,
    pub payment: Availability,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalyticsOverview {
    pub total_conversations: u64,
    pub active_users: u64,
    pub popular_agents: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SaveConversationResponse {
    pub conversation_id: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<crate::types::Payload>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ConversationListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SavePreferencesResponse {
    pub saved: bool,
}
