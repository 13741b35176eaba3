//! Session layer for Jarvis
//!
//! Owns the conversation history and wake-word gating, routes user text to
//! a reply backend, and forwards every assistant reply to the speech sink.
//! This is the Rust counterpart of the mobile front-end's message handler.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    dispatch::{DispatchResult, IntentDispatcher},
    history::{ConversationHistory, ConversationTurn},
    speech::SpeechSink,
    wake::{self, WAKE_REMINDER},
    JarvisConfig, Result,
};

/// Fallback reply when the backend fails mid-request.
pub const THINKING_LOOP_FALLBACK: &str = "Something went wrong in my thinking loop.";

/// Placeholder reply for microphone input, which needs a development build.
pub const MIC_PLACEHOLDER: &str =
    "Microphone control will work in a development build. For now, type to talk to me.";

/// Source of assistant replies
///
/// The session does not care whether replies come from the local dispatcher
/// or from a network backend; both paths share the same dispatch table.
#[async_trait]
pub trait ReplyBackend: Send + Sync {
    async fn generate(
        &self,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<DispatchResult>;
}

/// Local reply backend wrapping the intent dispatcher
///
/// The thinking delay simulates processing latency and has no functional
/// effect.
#[derive(Debug, Clone, Default)]
pub struct LocalBackend {
    dispatcher: IntentDispatcher,
    thinking_delay: Duration,
}

impl LocalBackend {
    pub fn new(thinking_delay: Duration) -> Self {
        Self {
            dispatcher: IntentDispatcher::new(),
            thinking_delay,
        }
    }
}

#[async_trait]
impl ReplyBackend for LocalBackend {
    async fn generate(
        &self,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<DispatchResult> {
        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }
        Ok(self.dispatcher.dispatch(history, message))
    }
}

/// Reply backend talking to the Jarvis HTTP server
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(serde::Serialize)]
struct RemoteChatRequest<'a> {
    history: &'a [ConversationTurn],
    message: &'a str,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ReplyBackend for RemoteBackend {
    async fn generate(
        &self,
        history: &[ConversationTurn],
        message: &str,
    ) -> Result<DispatchResult> {
        let url = format!("{}/chat", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&RemoteChatRequest { history, message })
            .send()
            .await?
            .error_for_status()?;

        let result = response.json::<DispatchResult>().await?;
        Ok(result)
    }
}

/// A single user-facing Jarvis session
pub struct JarvisSession {
    session_id: String,
    history: ConversationHistory,
    wake_word_enabled: bool,
    backend: Arc<dyn ReplyBackend>,
    speech: Arc<dyn SpeechSink>,
}

impl JarvisSession {
    pub fn new(
        config: &JarvisConfig,
        backend: Arc<dyn ReplyBackend>,
        speech: Arc<dyn SpeechSink>,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            history: ConversationHistory::new(),
            wake_word_enabled: config.wake_word_enabled,
            backend,
            speech,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn history(&self) -> &[ConversationTurn] {
        self.history.turns()
    }

    pub fn wake_word_enabled(&self) -> bool {
        self.wake_word_enabled
    }

    pub fn set_wake_word_enabled(&mut self, enabled: bool) {
        self.wake_word_enabled = enabled;
    }

    /// Handle a raw user message end to end.
    ///
    /// Returns `None` for empty input. Wake-word gating, history recording,
    /// backend failure fallback, and speech playback all happen here; the
    /// returned result is what the caller should render.
    pub async fn handle_message(&mut self, raw: &str) -> Option<DispatchResult> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let message = if self.wake_word_enabled {
            match wake::strip_wake_phrase(trimmed) {
                Some(command) => command,
                None => {
                    // Blocked by the wake word; the dispatcher is not invoked.
                    self.history.push_user(trimmed);
                    return Some(self.respond(WAKE_REMINDER.to_string(), Vec::new()));
                }
            }
        } else {
            trimmed.to_string()
        };

        self.history.push_user(message.as_str());

        let result = match self.backend.generate(self.history.turns(), &message).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(session_id = %self.session_id, "Reply backend failed: {}", e);
                DispatchResult::reply_only(THINKING_LOOP_FALLBACK)
            }
        };

        Some(self.respond(result.reply, result.actions))
    }

    /// Canned response for the microphone button, which is not wired up in
    /// this build.
    pub fn handle_mic_press(&mut self) -> DispatchResult {
        self.respond(MIC_PLACEHOLDER.to_string(), Vec::new())
    }

    /// Record an assistant turn, speak it, and hand it back to the caller.
    fn respond(&mut self, reply: String, actions: Vec<String>) -> DispatchResult {
        self.history.push_assistant(reply.as_str());
        self.speech.speak(&reply);
        DispatchResult { reply, actions }
    }
}
