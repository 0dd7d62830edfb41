//! Voicemail delivery: look up the agent and the global settings, then notify

use crate::error::DeliveryError;
use crate::types::{AgentEntry, DeliveryReceipt, GlobalSettings, VoicemailRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub type DeliveryResult<T> = std::result::Result<T, DeliveryError>;

/// Directory of the agents voicemails are addressed to
#[async_trait]
pub trait AgentDirectory: Send + Sync {
    /// Fails with [`DeliveryError::AgentNotFound`] when no agent has `agent_id`
    async fn get_agent_by_user_id(&self, agent_id: &str) -> DeliveryResult<AgentEntry>;
}

/// Source of the instance-wide delivery settings
#[async_trait]
pub trait GlobalSettingsStore: Send + Sync {
    async fn get_settings(&self) -> DeliveryResult<GlobalSettings>;
}

/// Outbound channel (email, SMS, ...) that notifies the agent
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn deliver(
        &self,
        settings: &GlobalSettings,
        record: &VoicemailRecord,
        agent: &AgentEntry,
    ) -> DeliveryResult<DeliveryReceipt>;
}

/// Sends one notification per call to [`DeliveryOrchestrator::deliver`].
///
/// Holds no state between calls; processing each change event once is up to
/// the caller.
#[derive(Clone)]
pub struct DeliveryOrchestrator {
    settings: Arc<dyn GlobalSettingsStore>,
    agents: Arc<dyn AgentDirectory>,
    notifier: Arc<dyn NotificationChannel>,
}

impl DeliveryOrchestrator {
    pub fn new(
        settings: Arc<dyn GlobalSettingsStore>,
        agents: Arc<dyn AgentDirectory>,
        notifier: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self {
            settings,
            agents,
            notifier,
        }
    }

    /// Fetch settings and agent concurrently, then notify once.
    ///
    /// The first lookup error is returned as-is and the notification channel
    /// is not called.
    pub async fn deliver(&self, record: &VoicemailRecord) -> DeliveryResult<DeliveryReceipt> {
        let (settings, agent) = tokio::try_join!(
            self.settings.get_settings(),
            self.agents.get_agent_by_user_id(&record.agent_id),
        )?;

        debug!(
            contact_id = %record.contact_id,
            agent = %agent.username,
            "Delivering voicemail"
        );
        let receipt = self.notifier.deliver(&settings, record, &agent).await?;

        info!(
            contact_id = %receipt.contact_id,
            agent_id = %receipt.agent_id,
            channels = ?receipt.channels,
            "Voicemail delivered"
        );
        Ok(receipt)
    }
}
