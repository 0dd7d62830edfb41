//! Voicemail record storage

use crate::error::{Result, VoicemailError};
use crate::types::{TranscriptionStatus, VoicemailRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Persistence for voicemail records, keyed by (contact id, timestamp)
#[async_trait]
pub trait VoicemailRepository: Send + Sync {
    async fn update_transcription_status(
        &self,
        contact_id: &str,
        timestamp: i64,
        status: TranscriptionStatus,
    ) -> Result<()>;
}

/// In-memory repository
#[derive(Debug, Default)]
pub struct InMemoryVoicemailRepository {
    records: RwLock<HashMap<(String, i64), VoicemailRecord>>,
}

impl InMemoryVoicemailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: VoicemailRecord) {
        let key = (record.contact_id.clone(), record.timestamp);
        self.records.write().await.insert(key, record);
    }

    pub async fn get(&self, contact_id: &str, timestamp: i64) -> Option<VoicemailRecord> {
        self.records
            .read()
            .await
            .get(&(contact_id.to_string(), timestamp))
            .cloned()
    }
}

#[async_trait]
impl VoicemailRepository for InMemoryVoicemailRepository {
    async fn update_transcription_status(
        &self,
        contact_id: &str,
        timestamp: i64,
        status: TranscriptionStatus,
    ) -> Result<()> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&(contact_id.to_string(), timestamp))
            .ok_or_else(|| {
                VoicemailError::repository(format!("no voicemail for contact {} at {}", contact_id, timestamp))
            })?;
        record.transcribe_status = Some(status);
        Ok(())
    }
}
