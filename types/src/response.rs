use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Ok,
    Error,
}

/// Transport envelope around a list of results and the request that produced them.
///
/// An `error` response is expected to carry an empty or diagnostic `data`
/// list; the shape does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub status: ApiStatus,
    pub data: Vec<T>,
    pub request: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(request: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            status: ApiStatus::Ok,
            data,
            request: request.into(),
        }
    }

    pub fn error(request: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            data: Vec::new(),
            request: request.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ApiStatus::Ok
    }
}
