//! In-memory [`Connection`] for unit tests.
//!
//! Responses are queued up front and served in order; every call is
//! recorded so tests can assert on the exact requests made.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::clients::{Connection, HttpError, HttpResponse, HttpResponseError, RestError};

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub query: Option<HashMap<String, String>>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub(crate) struct MockConnection {
    responses: Mutex<VecDeque<HttpResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with a JSON body.
    pub fn respond_json(&self, code: u16, body: Value) {
        self.push(HttpResponse::new(code, HashMap::new(), body));
    }

    /// Queues an empty-bodied response with the given headers.
    pub fn respond_with_headers(&self, code: u16, headers: &[(&str, &str)]) {
        let headers = headers
            .iter()
            .map(|(name, value)| (name.to_lowercase(), vec![(*value).to_string()]))
            .collect();
        self.push(HttpResponse::new(code, headers, json!({})));
    }

    /// Returns `(method, path)` for every call so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.recorded()
            .into_iter()
            .map(|call| (call.method.to_string(), call.path))
            .collect()
    }

    /// Returns the request body of every call so far.
    pub fn bodies(&self) -> Vec<Option<Value>> {
        self.recorded().into_iter().map(|call| call.body).collect()
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn dispatch(&self, call: RecordedCall) -> Result<HttpResponse, RestError> {
        self.calls.lock().unwrap().push(call);

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(200, HashMap::new(), json!({})));

        if response.is_ok() {
            Ok(response)
        } else {
            Err(RestError::Http(HttpError::Response(HttpResponseError {
                code: response.code,
                message: response.body.to_string(),
                error_reference: None,
            })))
        }
    }
}

impl Connection for MockConnection {
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.dispatch(RecordedCall {
            method: "GET",
            path: path.to_string(),
            query,
            body: None,
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, RestError> {
        self.dispatch(RecordedCall {
            method: "POST",
            path: path.to_string(),
            query: None,
            body: Some(body),
        })
    }

    async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, RestError> {
        self.dispatch(RecordedCall {
            method: "PUT",
            path: path.to_string(),
            query: None,
            body: Some(body),
        })
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.dispatch(RecordedCall {
            method: "DELETE",
            path: path.to_string(),
            query: None,
            body: None,
        })
    }
}
