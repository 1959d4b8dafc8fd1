use error_stack::{AttachmentKind, FrameKind, Report};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ModelResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    ReqwestError(String),

    #[error("Webhook returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Serde serialize error: {0}")]
    SerdeSerialize(String),
}

pub trait ReportDisplayExt {
    fn format(&self) -> String;
}

impl<C> ReportDisplayExt for Report<C> {
    fn format(&self) -> String {
        let mut output = String::new();

        for frame in self.frames() {
            if let FrameKind::Attachment(AttachmentKind::Printable(attachment)) = frame.kind() {
                output.push_str(&format!(" {attachment} "));
            }
        }

        output.trim().to_string()
    }
}
