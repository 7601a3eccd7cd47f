//! Background execution of backend requests.
//!
//! Requests run on spawned tokio tasks and report back over an unbounded
//! channel, tagged with the id they were started under so the event loop can
//! drop replies that belong to an abandoned request.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::{
    BackendError, LanguageOption, TranslateRequest, TranslationBackend, TranslationResult,
};

#[derive(Debug)]
pub enum BackendMessage {
    Languages(Result<Vec<LanguageOption>, BackendError>),
    Translation(Result<TranslationResult, BackendError>),
}

pub struct TranslationParams {
    pub backend: Arc<dyn TranslationBackend>,
    pub request: TranslateRequest,
    pub cancel_token: CancellationToken,
    pub request_id: u64,
}

pub struct LanguagesParams {
    pub backend: Arc<dyn TranslationBackend>,
    pub request_id: u64,
}

#[derive(Clone)]
pub struct TranslationService {
    tx: mpsc::UnboundedSender<(BackendMessage, u64)>,
}

impl TranslationService {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(BackendMessage, u64)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn spawn_translation(&self, params: TranslationParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let TranslationParams {
                backend,
                request,
                cancel_token,
                request_id,
            } = params;

            tokio::select! {
                outcome = backend.translate(&request) => {
                    match &outcome {
                        Ok(_) => info!(
                            request_id,
                            source = %request.source_language,
                            target = %request.target_language,
                            "translation completed"
                        ),
                        Err(error) => warn!(request_id, %error, "translation failed"),
                    }
                    let _ = tx.send((BackendMessage::Translation(outcome), request_id));
                }
                _ = cancel_token.cancelled() => {
                    debug!(request_id, "translation cancelled");
                }
            }
        });
    }

    pub fn spawn_languages(&self, params: LanguagesParams) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let LanguagesParams {
                backend,
                request_id,
            } = params;
            let outcome = backend.fetch_languages().await;
            if let Err(error) = &outcome {
                warn!(%error, "language list unavailable");
            }
            let _ = tx.send((BackendMessage::Languages(outcome), request_id));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::FakeBackend;
    use std::time::Duration;

    fn request() -> TranslateRequest {
        TranslateRequest {
            text: "hello".to_string(),
            source_language: "en".to_string(),
            target_language: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn translation_result_is_tagged_with_request_id() {
        let backend = Arc::new(FakeBackend::new(
            Ok(Vec::new()),
            Ok(TranslationResult {
                translated_text: "नमस्ते".to_string(),
                transliterated_text: "Namaste".to_string(),
            }),
        ));
        let (service, mut rx) = TranslationService::new();

        service.spawn_translation(TranslationParams {
            backend: backend.clone(),
            request: request(),
            cancel_token: CancellationToken::new(),
            request_id: 7,
        });

        let (message, id) = rx.recv().await.expect("message");
        assert_eq!(id, 7);
        match message {
            BackendMessage::Translation(Ok(result)) => {
                assert_eq!(result.transliterated_text, "Namaste")
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(backend.translate_calls(), vec![request()]);
    }

    #[tokio::test]
    async fn cancelled_translation_sends_nothing() {
        let backend = Arc::new(
            FakeBackend::new(
                Ok(Vec::new()),
                Ok(TranslationResult::default()),
            )
            .with_delay(Duration::from_secs(5)),
        );
        let (service, mut rx) = TranslationService::new();
        let token = CancellationToken::new();

        service.spawn_translation(TranslationParams {
            backend,
            request: request(),
            cancel_token: token.clone(),
            request_id: 1,
        });
        token.cancel();
        drop(service);

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn language_failure_is_forwarded() {
        let backend = Arc::new(FakeBackend::new(
            Err(BackendError::Status {
                status: 500,
                detail: None,
            }),
            Ok(TranslationResult::default()),
        ));
        let (service, mut rx) = TranslationService::new();

        service.spawn_languages(LanguagesParams {
            backend,
            request_id: 3,
        });

        let (message, id) = rx.recv().await.expect("message");
        assert_eq!(id, 3);
        assert!(matches!(message, BackendMessage::Languages(Err(_))));
    }
}
