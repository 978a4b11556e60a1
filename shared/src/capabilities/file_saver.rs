//! File-save capability.
//!
//! Asks the shell to save a remote resource to the user's device (a browser
//! download, a share sheet, a Files export). The core only names the
//! resource and the suggested filename; the shell owns the byte transfer,
//! so image data never crosses into the core.

use crux_core::capability::{CapabilityContext, Operation};
use crux_core::macros::Capability;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single save request: fetch `url` and store it as `filename`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileSaveRequest {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", content = "data")]
pub enum FileSaverOperation {
    Save(FileSaveRequest),
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileSaverError {
    #[error("save cancelled by the user")]
    Cancelled,

    #[error("save failed: {message}")]
    Failed { message: String },
}

impl FileSaverError {
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum FileSaverOutput {
    Saved { filename: String },
}

impl FileSaverOutput {
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Saved { filename } => filename,
        }
    }
}

pub type FileSaverResult = Result<FileSaverOutput, FileSaverError>;

impl Operation for FileSaverOperation {
    type Output = FileSaverResult;
}

/// Capability handle the app uses to issue save requests.
#[derive(Capability)]
pub struct FileSaver<Ev> {
    context: CapabilityContext<FileSaverOperation, Ev>,
}

impl<Ev> FileSaver<Ev>
where
    Ev: 'static,
{
    #[must_use]
    pub fn new(context: CapabilityContext<FileSaverOperation, Ev>) -> Self {
        Self { context }
    }

    /// Requests a shell-side save of `url` under `filename`. `make_event`
    /// receives the outcome once the shell resolves the request.
    pub fn save<F>(&self, url: String, filename: String, make_event: F)
    where
        F: FnOnce(FileSaverResult) -> Ev + Send + Sync + 'static,
    {
        self.context.spawn({
            let context = self.context.clone();
            async move {
                let operation = FileSaverOperation::Save(FileSaveRequest { url, filename });
                let result = context.request_from_shell(operation).await;
                context.update_app(make_event(result));
            }
        });
    }
}
