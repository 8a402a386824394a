// Memory service: optional conversation storage
// Placeholder backend; nothing is persisted.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;
use tracing::info;

use super::{Lifecycle, OptionalService, StatusReport};
use crate::types::{AppResult, Payload, ServiceKind};

/// Default page size for conversation listings
pub const DEFAULT_CONVERSATION_LIMIT: usize = 50;

/// Writes `", "` between items and `": "` after keys, the spacing the
/// conversation id length is measured with
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Number of characters in the spaced textual form of `payload`
fn textual_length(payload: &Payload) -> AppResult<usize> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    payload.serialize(&mut serializer)?;

    // Count UTF-8 lead bytes so non-ASCII text counts once per character
    Ok(buf.iter().filter(|byte| (**byte & 0xC0) != 0x80).count())
}

#[derive(Debug, Default)]
pub struct MemoryService {
    lifecycle: Lifecycle,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that starts out initialized
    pub fn ready() -> Self {
        Self { lifecycle: Lifecycle::Ready }
    }

    /// Returns `conv_<n>`, `n` being the character count of the payload
    /// rendered as `{"a": 1, "b": [1, 2]}`
    pub async fn save_conversation(&self, conversation: &Payload) -> AppResult<String> {
        self.lifecycle.ensure_ready(Self::KIND)?;

        let conversation_id = format!("conv_{}", textual_length(conversation)?);
        info!("Saved conversation {}", conversation_id);

        Ok(conversation_id)
    }

    pub async fn get_conversations(
        &self,
        _user_id: &str,
        _limit: usize,
    ) -> AppResult<Vec<Payload>> {
        self.lifecycle.ensure_ready(Self::KIND)?;
        Ok(Vec::new())
    }

    pub async fn save_preferences(&self, user_id: &str, _preferences: &Payload) -> AppResult<()> {
        self.lifecycle.ensure_ready(Self::KIND)?;
        info!("Saved preferences for user {}", user_id);
        Ok(())
    }
}

#[async_trait]
impl OptionalService for MemoryService {
    const KIND: ServiceKind = ServiceKind::Memory;

    async fn initialize(&mut self) {
        self.lifecycle = Lifecycle::Ready;
        info!("Memory service initialized (placeholder)");
    }

    fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    async fn status(&self) -> StatusReport {
        StatusReport::placeholder(self.lifecycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_operations_require_initialization() {
        let service = MemoryService::new();
        let data = payload(json!({"a": 1}));

        let err = service.save_conversation(&data).await.unwrap_err();
        assert!(matches!(err, AppError::NotInitialized(ServiceKind::Memory)));
        assert_err!(service.get_conversations("u1", DEFAULT_CONVERSATION_LIMIT).await);
        assert_err!(service.save_preferences("u1", &data).await);
    }

    #[tokio::test]
    async fn test_save_and_list_conversations() {
        let mut service = MemoryService::new();
        service.initialize().await;

        let id = service.save_conversation(&payload(json!({"a": 1}))).await.unwrap();
        assert!(id.starts_with("conv_"));
        // {"a": 1}
        assert_eq!(id, "conv_8");

        let conversations = service.get_conversations("u1", 50).await.unwrap();
        assert!(conversations.is_empty());
    }

    #[tokio::test]
    async fn test_save_accepts_any_payload() {
        let service = MemoryService::ready();

        let empty = service.save_conversation(&Payload::new()).await.unwrap();
        assert_eq!(empty, "conv_2");

        let nested = payload(json!({
            "messages": [{"role": "user", "content": "hi"}],
            "agent": null,
        }));
        let id = service.save_conversation(&nested).await.unwrap();
        assert!(id.len() > "conv_".len());
    }

    #[test]
    fn test_textual_length_uses_spaced_separators() {
        assert_eq!(textual_length(&payload(json!({"a": 1}))).unwrap(), 8);
        // {"a": 1, "b": [1, 2]}
        assert_eq!(textual_length(&payload(json!({"a": 1, "b": [1, 2]}))).unwrap(), 21);
        // {"ok": true, "x": null}
        assert_eq!(textual_length(&payload(json!({"ok": true, "x": null}))).unwrap(), 23);
    }

    #[test]
    fn test_textual_length_counts_characters() {
        // {"name": "é"}
        assert_eq!(textual_length(&payload(json!({"name": "é"}))).unwrap(), 13);
    }

    #[tokio::test]
    async fn test_list_ignores_user_and_limit() {
        let service = MemoryService::ready();

        for (user, limit) in [("u1", 0), ("", 1), ("someone-else", 10_000)] {
            assert!(service.get_conversations(user, limit).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_save_preferences() {
        let service = MemoryService::ready();
        assert_ok!(service.save_preferences("u1", &payload(json!({"theme": "dark"}))).await);
    }

    #[tokio::test]
    async fn test_status_reflects_lifecycle() {
        let mut service = MemoryService::new();
        assert!(!service.status().await.available);

        service.initialize().await;
        service.initialize().await;

        let status = service.status().await;
        assert!(status.available);
        assert_eq!(status.service_type, "placeholder");
        assert_eq!(status.backend, "none");
    }
}
