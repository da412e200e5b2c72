//! Image upload collaborator boundary.
//!
//! # Responsibility
//! - Define the async upload contract for captured photo bytes.
//! - Generate remote object names for new captures.
//!
//! # Invariants
//! - The journal engine never awaits an upload; callers drive the returned
//!   future on their own executor or drop it.
//! - Upload outcomes are logged only and never change journal state.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Remote folder holding journal photos.
pub const JOURNAL_OBJECT_PREFIX: &str = "journalEntries";

/// Future resolving when the remote upload finishes.
pub type PendingUpload = BoxFuture<'static, Result<(), UploadError>>;

/// Upload failures reported by collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Remote storage refused the object.
    Rejected(String),
    /// Network or client-side failure before the remote answered.
    Transport(String),
}

impl Display for UploadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(message) => write!(f, "upload rejected: {message}"),
            Self::Transport(message) => write!(f, "upload transport failed: {message}"),
        }
    }
}

impl Error for UploadError {}

/// Remote image storage, e.g. a cloud bucket client.
pub trait ImageUploader {
    /// Starts persisting `bytes` under `object_name`.
    fn upload(&self, object_name: String, bytes: Vec<u8>) -> PendingUpload;
}

/// Returns a fresh `journalEntries/<uuid>.jpg` object name.
pub fn journal_object_name() -> String {
    format!("{JOURNAL_OBJECT_PREFIX}/{}.jpg", Uuid::new_v4())
}

/// Wraps an upload so its outcome is logged once it resolves.
pub(crate) fn logged_upload(object_name: String, upload: PendingUpload) -> PendingUpload {
    upload
        .map(move |result| {
            match &result {
                Ok(()) => info!(
                    "event=image_upload module=upload status=ok object={}",
                    object_name
                ),
                Err(err) => warn!(
                    "event=image_upload module=upload status=error object={} error={}",
                    object_name, err
                ),
            }
            result
        })
        .boxed()
}
