//! Intent Dispatcher
//!
//! Routes free-form user text to a canned reply and a list of simulated
//! smart home action descriptors. This is the single canonical dispatch
//! table shared by the session layer and the HTTP backend.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::history::ConversationTurn;

/// ON action descriptor for the living room lights.
pub const LIGHTS_ON_ACTION: &str = "Simulated: Tapo living room lights ON";
/// OFF action descriptor for the living room lights.
pub const LIGHTS_OFF_ACTION: &str = "Simulated: Tapo living room lights OFF";

const STATUS_REPLY: &str =
    "I don't have feelings, but all systems are stable, and my code feels clean.";
const IDENTITY_REPLY: &str = "I'm your Jarvis prototype. Running locally for now, but soon I'll \
     connect to real AI and your smart home.";
const CAPABILITY_REPLY: &str = "Right now, I can chat and simulate controlling your lights. Soon, \
     I'll remember things, help you study, and control your actual house.";
const STUDY_REPLY: &str = "I'll eventually help you revise paramedic topics, track weak areas, \
     and even test you with flashcards.";
const GAME_TRACKING_REPLY: &str = "I don't know your current Diablo build yet, but I like the \
     idea of tracking your level, stats, and skill tree.";
const LIGHTS_ON_REPLY: &str =
    "Turning on the living room lights. Simulated for now, real control coming soon.";
const LIGHTS_OFF_REPLY: &str =
    "Switching off the living room lights. Still just pretending, but we're getting closer.";

/// Result of a single dispatch call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub reply: String,
    pub actions: Vec<String>,
}

impl DispatchResult {
    /// A reply with no attached actions.
    pub fn reply_only(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            actions: Vec::new(),
        }
    }
}

/// Canned conversation topics recognized by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum CannedTopic {
    /// "how are you" status check
    Status,
    /// "who are you" identity question
    Identity,
    /// "what can you do" capability question
    Capability,
    /// Study-helper placeholder
    Study,
    /// Diablo game-tracking placeholder
    GameTracking,
}

/// Simulated light control commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum LightCommand {
    On,
    Off,
}

/// Keyword-based intent dispatcher
///
/// Stateless and deterministic: identical input always produces identical
/// output. The conversation history is accepted as a snapshot for future
/// context use but does not influence the decision.
#[derive(Debug, Clone, Default)]
pub struct IntentDispatcher;

impl IntentDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch a user message to a reply and zero or more action descriptors.
    ///
    /// Topic replies take priority over device-control replies when both
    /// match; action descriptors are appended whenever their trigger phrase
    /// matches, regardless of which reply wins.
    pub fn dispatch(&self, _history: &[ConversationTurn], message: &str) -> DispatchResult {
        // Lowercase for matching only; echoed text keeps the original casing.
        let lower = message.to_lowercase();

        let mut actions = Vec::new();
        let mut reply = Self::match_topic(&lower).map(|topic| Self::topic_reply(topic).to_string());

        if let Some(command) = Self::match_light_command(&lower) {
            match command {
                LightCommand::On => {
                    actions.push(LIGHTS_ON_ACTION.to_string());
                    reply.get_or_insert_with(|| LIGHTS_ON_REPLY.to_string());
                }
                LightCommand::Off => {
                    actions.push(LIGHTS_OFF_ACTION.to_string());
                    reply.get_or_insert_with(|| LIGHTS_OFF_REPLY.to_string());
                }
            }
        }

        let reply = reply.unwrap_or_else(|| {
            format!(
                "\"{message}\" - I hear you, but I'm still in local simulation mode. \
                 Soon I'll be connected to a real AI backend."
            )
        });

        DispatchResult { reply, actions }
    }

    /// Match the fixed canned-topic table, first match wins.
    fn match_topic(lower: &str) -> Option<CannedTopic> {
        if lower.contains("how are you") {
            Some(CannedTopic::Status)
        } else if lower.contains("who are you") {
            Some(CannedTopic::Identity)
        } else if lower.contains("what can you do") {
            Some(CannedTopic::Capability)
        } else if lower.contains("study") {
            Some(CannedTopic::Study)
        } else if lower.contains("diablo") {
            Some(CannedTopic::GameTracking)
        } else {
            None
        }
    }

    fn topic_reply(topic: CannedTopic) -> &'static str {
        match topic {
            CannedTopic::Status => STATUS_REPLY,
            CannedTopic::Identity => IDENTITY_REPLY,
            CannedTopic::Capability => CAPABILITY_REPLY,
            CannedTopic::Study => STUDY_REPLY,
            CannedTopic::GameTracking => GAME_TRACKING_REPLY,
        }
    }

    /// Device-control predicate, evaluated independently of the topic table.
    fn match_light_command(lower: &str) -> Option<LightCommand> {
        if !(lower.contains("living room") && lower.contains("light")) {
            return None;
        }

        if lower.contains("turn on") || lower.contains("switch on") {
            Some(LightCommand::On)
        } else if lower.contains("turn off") || lower.contains("switch off") {
            Some(LightCommand::Off)
        } else {
            None
        }
    }
}
