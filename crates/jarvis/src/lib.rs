//! # Jarvis - voice/text assistant core
//!
//! Canonical intent dispatch, conversation history, wake-word gating, and
//! session orchestration for the Jarvis assistant. The mobile front-end and
//! the HTTP backend both route messages through the same dispatcher, so the
//! two call sites can no longer drift apart.

pub mod dispatch;
pub mod history;
pub mod session;
pub mod speech;
pub mod wake;

#[cfg(test)]
mod session_tests;

use std::{sync::Arc, time::Duration};

pub use dispatch::{
    CannedTopic, DispatchResult, IntentDispatcher, LightCommand, LIGHTS_OFF_ACTION,
    LIGHTS_ON_ACTION,
};
pub use history::{ConversationHistory, ConversationTurn, Role};
use serde::{Deserialize, Serialize};
pub use session::{
    JarvisSession, LocalBackend, RemoteBackend, ReplyBackend, MIC_PLACEHOLDER,
    THINKING_LOOP_FALLBACK,
};
pub use speech::{NullSpeech, SpeechSink, TracingSpeech};
use ts_rs::TS;
pub use wake::{strip_wake_phrase, WAKE_PHRASE, WAKE_REMINDER};

/// Core configuration for Jarvis
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct JarvisConfig {
    /// Require the "Hey Jarvis" wake phrase before dispatching.
    pub wake_word_enabled: bool,
    /// Simulated thinking latency for the local backend, cosmetic only.
    pub thinking_delay_ms: u64,
}

impl JarvisConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl Default for JarvisConfig {
    fn default() -> Self {
        Self {
            wake_word_enabled: true,
            thinking_delay_ms: 350,
        }
    }
}

/// Main error types for Jarvis operations
#[derive(Debug, thiserror::Error)]
pub enum JarvisError {
    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, JarvisError>;

/// Build a fully local session from configuration.
pub fn local_session(config: &JarvisConfig) -> JarvisSession {
    let backend = Arc::new(LocalBackend::new(config.thinking_delay()));
    JarvisSession::new(config, backend, Arc::new(TracingSpeech))
}
