//! Tests for the session layer

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use async_trait::async_trait;

    use crate::{
        dispatch::DispatchResult,
        history::{ConversationTurn, Role},
        session::{JarvisSession, LocalBackend, ReplyBackend},
        speech::{NullSpeech, SpeechSink},
        wake::WAKE_REMINDER,
        JarvisConfig, JarvisError, Result, THINKING_LOOP_FALLBACK,
    };

    /// Speech sink that records every utterance for assertions.
    #[derive(Default)]
    struct RecordingSpeech {
        spoken: Mutex<Vec<String>>,
    }

    impl SpeechSink for RecordingSpeech {
        fn speak(&self, text: &str) {
            self.spoken.lock().unwrap().push(text.to_string());
        }
    }

    /// Backend that always fails, to exercise the fallback path.
    struct FailingBackend;

    #[async_trait]
    impl ReplyBackend for FailingBackend {
        async fn generate(
            &self,
            _history: &[ConversationTurn],
            _message: &str,
        ) -> Result<DispatchResult> {
            Err(JarvisError::BackendError("boom".to_string()))
        }
    }

    fn test_config() -> JarvisConfig {
        JarvisConfig {
            wake_word_enabled: true,
            thinking_delay_ms: 0,
        }
    }

    fn local_session(config: &JarvisConfig) -> JarvisSession {
        let backend = Arc::new(LocalBackend::new(Duration::ZERO));
        JarvisSession::new(config, backend, Arc::new(NullSpeech))
    }

    #[tokio::test]
    async fn test_empty_input_is_ignored() {
        let mut session = local_session(&test_config());

        assert!(session.handle_message("   ").await.is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_wake_word_blocks_without_phrase() {
        let mut session = local_session(&test_config());

        let result = session.handle_message("who are you").await.unwrap();

        assert_eq!(result.reply, WAKE_REMINDER);
        assert!(result.actions.is_empty());
        // Both the raw user text and the reminder land in history.
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, Role::User);
        assert_eq!(session.history()[0].text, "who are you");
        assert_eq!(session.history()[1].text, WAKE_REMINDER);
    }

    #[tokio::test]
    async fn test_wake_word_strips_prefix_before_dispatch() {
        let mut session = local_session(&test_config());

        let result = session.handle_message("Hey Jarvis, who are you").await.unwrap();

        assert!(result.reply.contains("Jarvis prototype"));
        // The stripped command is what gets recorded, not the raw input.
        assert_eq!(session.history()[0].text, "who are you");
    }

    #[tokio::test]
    async fn test_wake_word_disabled_dispatches_directly() {
        let mut config = test_config();
        config.wake_word_enabled = false;
        let mut session = local_session(&config);

        let result = session.handle_message("who are you").await.unwrap();

        assert!(result.reply.contains("Jarvis prototype"));
    }

    #[tokio::test]
    async fn test_toggling_wake_word_at_runtime() {
        let mut session = local_session(&test_config());
        session.set_wake_word_enabled(false);

        let result = session.handle_message("how are you").await.unwrap();

        assert!(result.reply.contains("all systems are stable"));
    }

    #[tokio::test]
    async fn test_turns_recorded_in_order() {
        let mut config = test_config();
        config.wake_word_enabled = false;
        let mut session = local_session(&config);

        session.handle_message("who are you").await.unwrap();
        session.handle_message("turn on the living room light").await.unwrap();

        let history = session.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[1].role, Role::Assistant);
        assert_eq!(history[2].role, Role::User);
        assert_eq!(history[2].text, "turn on the living room light");
        assert_eq!(history[3].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_reply_is_spoken() {
        let speech = Arc::new(RecordingSpeech::default());
        let mut config = test_config();
        config.wake_word_enabled = false;
        let mut session = JarvisSession::new(
            &config,
            Arc::new(LocalBackend::new(Duration::ZERO)),
            speech.clone(),
        );

        let result = session.handle_message("how are you").await.unwrap();

        let spoken = speech.spoken.lock().unwrap();
        assert_eq!(*spoken, vec![result.reply.clone()]);
    }

    #[tokio::test]
    async fn test_backend_failure_falls_back_to_constant() {
        let speech = Arc::new(RecordingSpeech::default());
        let mut config = test_config();
        config.wake_word_enabled = false;
        let mut session = JarvisSession::new(&config, Arc::new(FailingBackend), speech.clone());

        let result = session.handle_message("who are you").await.unwrap();

        assert_eq!(result.reply, THINKING_LOOP_FALLBACK);
        assert!(result.actions.is_empty());
        // The fallback is recorded and spoken like a normal assistant turn.
        assert_eq!(session.history()[1].text, THINKING_LOOP_FALLBACK);
        assert_eq!(
            *speech.spoken.lock().unwrap(),
            vec![THINKING_LOOP_FALLBACK.to_string()]
        );
    }

    #[tokio::test]
    async fn test_mic_press_placeholder() {
        let mut session = local_session(&test_config());

        let result = session.handle_mic_press();

        assert!(result.reply.contains("development build"));
        assert!(result.actions.is_empty());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::Assistant);
    }
}
