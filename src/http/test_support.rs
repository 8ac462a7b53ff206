use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::error::{AppError, AppResult, HttpError};

use super::{Endpoint, PayloadSink, SinkResponse};

/// Sink that remembers every payload and can simulate a dead endpoint.
#[derive(Default)]
pub(crate) struct RecordingSink {
    posts: Mutex<Vec<(Endpoint, Value)>>,
    fail_on: Option<Endpoint>,
}

impl RecordingSink {
    pub(crate) fn failing(endpoint: Endpoint) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            fail_on: Some(endpoint),
        }
    }

    pub(crate) fn posts(&self) -> Result<Vec<(Endpoint, Value)>, String> {
        self.posts
            .lock()
            .map(|posts| posts.clone())
            .map_err(|err| format!("lock poisoned: {}", err))
    }
}

#[async_trait]
impl PayloadSink for RecordingSink {
    async fn post(&self, endpoint: Endpoint, payload: &Value) -> AppResult<SinkResponse> {
        if self.fail_on == Some(endpoint) {
            return Err(AppError::http(HttpError::MissingEndpoint { endpoint }));
        }
        self.posts
            .lock()
            .map_err(|err| AppError::validation(format!("lock poisoned: {}", err)))?
            .push((endpoint, payload.clone()));
        Ok(SinkResponse {
            status: 201,
            body: "created".to_owned(),
        })
    }
}
