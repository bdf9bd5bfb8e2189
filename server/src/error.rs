use std::fmt::Display;
use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::KernelError;

use crate::response::Envelope;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// The operation a failed request attempted. Selects the wording of the `fail` message.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BookAction {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl BookAction {
    fn failure(&self) -> &'static str {
        match self {
            BookAction::Create => "Gagal menambahkan buku",
            BookAction::List | BookAction::Get => "Gagal menampilkan buku",
            BookAction::Update => "Gagal memperbarui buku",
            BookAction::Delete => "Buku gagal dihapus",
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus {
    action: BookAction,
    report: Report<KernelError>,
}

impl ErrorStatus {
    pub fn new(action: BookAction, report: Report<KernelError>) -> Self {
        Self { action, report }
    }

    /// For requests the extractors could not decode.
    pub fn rejected(action: BookAction, rejection: impl Display) -> Self {
        let report =
            Report::new(KernelError::InvalidPayload).attach_printable(rejection.to_string());
        Self::new(action, report)
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        let failure = self.action.failure();
        match (self.report.current_context(), self.action) {
            (KernelError::MissingName, _) => (
                StatusCode::BAD_REQUEST,
                format!("{failure}. Mohon isi nama buku"),
            ),
            (KernelError::ReadPageExceedsPageCount, _) => (
                StatusCode::BAD_REQUEST,
                format!("{failure}. readPage tidak boleh lebih besar dari pageCount"),
            ),
            (KernelError::NotFound, BookAction::Update | BookAction::Delete) => (
                StatusCode::NOT_FOUND,
                format!("{failure}. Id tidak ditemukan"),
            ),
            (KernelError::NotFound, _) => {
                (StatusCode::NOT_FOUND, "Buku tidak ditemukan".to_string())
            }
            (KernelError::InvalidPayload, _) => (
                StatusCode::BAD_REQUEST,
                format!("{failure}. Format data tidak valid"),
            ),
            (KernelError::Internal, _) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{failure}. Terjadi kegagalan pada server"),
            ),
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("{:?}", self.report);
        } else {
            tracing::debug!("{:?}", self.report);
        }
        (status, Json(Envelope::fail(message))).into_response()
    }
}
