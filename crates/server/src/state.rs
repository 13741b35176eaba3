//! Shared application state for the Jarvis backend

use std::sync::Arc;

use jarvis::{IntentDispatcher, LIGHTS_OFF_ACTION, LIGHTS_ON_ACTION};
use tokio::sync::RwLock;

/// Advisory record of the simulated living room lights.
///
/// Write-only in observed behavior: the dispatcher never reads it back, it
/// only mirrors the last simulated command for inspection.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightState {
    pub living_room_on: bool,
}

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<IntentDispatcher>,
    lights: Arc<RwLock<LightState>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dispatcher: Arc::new(IntentDispatcher::new()),
            lights: Arc::new(RwLock::new(LightState::default())),
        }
    }

    pub fn dispatcher(&self) -> &IntentDispatcher {
        &self.dispatcher
    }

    /// Mirror dispatched light actions into the advisory state.
    pub async fn apply_actions(&self, actions: &[String]) {
        for action in actions {
            let on = match action.as_str() {
                LIGHTS_ON_ACTION => true,
                LIGHTS_OFF_ACTION => false,
                _ => continue,
            };
            let mut lights = self.lights.write().await;
            lights.living_room_on = on;
            tracing::debug!("Living room lights now {}", if on { "ON" } else { "OFF" });
        }
    }

    pub async fn lights(&self) -> LightState {
        *self.lights.read().await
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
