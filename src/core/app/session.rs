use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::{TranslateRequest, TranslationBackend};
use crate::utils::logging::LoggingState;

/// Backend handle plus the bookkeeping for requests that are in flight.
pub struct SessionContext {
    pub backend: Arc<dyn TranslationBackend>,
    pub logging: LoggingState,
    pub cancel_token: Option<CancellationToken>,
    pub current_request_id: u64,
    pub languages_request_id: u64,
    pub in_flight: Option<TranslateRequest>,
}

impl SessionContext {
    pub fn new(backend: Arc<dyn TranslationBackend>, logging: LoggingState) -> Self {
        Self {
            backend,
            logging,
            cancel_token: None,
            current_request_id: 0,
            languages_request_id: 0,
            in_flight: None,
        }
    }

    /// Register a new translate request, cancelling any previous one.
    pub fn start_translation(&mut self, request: TranslateRequest) -> (CancellationToken, u64) {
        self.cancel_translation();

        self.current_request_id += 1;
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());
        self.in_flight = Some(request);

        (token, self.current_request_id)
    }

    /// Abort the in-flight request, if any, and return it.
    pub fn cancel_translation(&mut self) -> Option<TranslateRequest> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        self.in_flight.take()
    }

    pub fn is_current_translation(&self, request_id: u64) -> bool {
        self.in_flight.is_some() && self.current_request_id == request_id
    }

    /// Close out the request a reply belongs to. Returns `None` for stale ids.
    pub fn complete_translation(&mut self, request_id: u64) -> Option<TranslateRequest> {
        if !self.is_current_translation(request_id) {
            return None;
        }
        self.cancel_token = None;
        self.in_flight.take()
    }

    pub fn start_languages_request(&mut self) -> u64 {
        self.languages_request_id += 1;
        self.languages_request_id
    }

    pub fn is_current_languages_request(&self, request_id: u64) -> bool {
        self.languages_request_id == request_id
    }
}
