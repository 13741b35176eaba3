//! Speech playback seam
//!
//! Real synthesis happens outside this crate (the mobile front-end owns the
//! speaker). The session layer only needs a fire-and-forget sink to hand
//! the final reply text to.

/// Fire-and-forget sink for spoken replies
pub trait SpeechSink: Send + Sync {
    fn speak(&self, text: &str);
}

/// Sink that logs each utterance instead of playing audio
#[derive(Debug, Clone, Default)]
pub struct TracingSpeech;

impl SpeechSink for TracingSpeech {
    fn speak(&self, text: &str) {
        tracing::info!("Speaking: {}", text);
    }
}

/// Sink that discards all output, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct NullSpeech;

impl SpeechSink for NullSpeech {
    fn speak(&self, _text: &str) {}
}
