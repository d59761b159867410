use std::fmt::Display;
use std::process::{ExitCode, Termination};

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::{AttachmentKind, Context, FrameKind, Report};
use kernel::KernelError;
use serde::Serialize;

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

/// Failures detected while decoding a request, before any service is called.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RequestError {
    Decode,
    InvalidIdentifier,
}

impl Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Decode => write!(f, "Malformed request payload"),
            RequestError::InvalidIdentifier => write!(f, "Invalid book identifier"),
        }
    }
}

impl Context for RequestError {}

#[derive(Debug)]
pub enum ErrorStatus {
    Request(Report<RequestError>),
    Kernel(Report<KernelError>),
}

impl From<Report<RequestError>> for ErrorStatus {
    fn from(e: Report<RequestError>) -> Self {
        ErrorStatus::Request(e)
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        Report::new(RequestError::Decode)
            .attach_printable(rejection.body_text())
            .into()
    }
}

impl From<QueryRejection> for ErrorStatus {
    fn from(rejection: QueryRejection) -> Self {
        Report::new(RequestError::InvalidIdentifier)
            .attach_printable(rejection.body_text())
            .into()
    }
}

impl ErrorStatus {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorStatus::Request(report) => match report.current_context() {
                RequestError::Decode => StatusCode::BAD_REQUEST,
                RequestError::InvalidIdentifier => StatusCode::BAD_REQUEST,
            },
            ErrorStatus::Kernel(report) => match report.current_context() {
                KernelError::Validation => StatusCode::BAD_REQUEST,
                KernelError::InvalidDateFormat => StatusCode::BAD_REQUEST,
                KernelError::NotFound => StatusCode::NOT_FOUND,
                KernelError::Conflict => StatusCode::CONFLICT,
                KernelError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                KernelError::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
                KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorBody {
        let (error, details) = match self {
            ErrorStatus::Request(report) => (report.current_context().to_string(), details(report)),
            ErrorStatus::Kernel(report) => (report.current_context().to_string(), details(report)),
        };
        // Attachments of server-side failures stay in the log.
        let details = if self.status().is_client_error() {
            details
        } else {
            Vec::new()
        };
        ErrorBody { error, details }
    }
}

fn details<C>(report: &Report<C>) -> Vec<String> {
    report
        .frames()
        .filter_map(|frame| match frame.kind() {
            FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                Some(printable.to_string())
            }
            _ => None,
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{status}: {self:?}");
        } else {
            tracing::debug!("{status}: {self:?}");
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use error_stack::Report;
    use kernel::KernelError;

    use super::{ErrorStatus, RequestError};

    #[test]
    fn every_kind_has_its_own_status() {
        let cases = [
            (KernelError::Validation, StatusCode::BAD_REQUEST),
            (KernelError::InvalidDateFormat, StatusCode::BAD_REQUEST),
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::Conflict, StatusCode::CONFLICT),
            (KernelError::Timeout, StatusCode::GATEWAY_TIMEOUT),
            (KernelError::Persistence, StatusCode::INTERNAL_SERVER_ERROR),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (kind, status) in cases {
            assert_eq!(ErrorStatus::from(Report::new(kind)).status(), status);
        }
        for kind in [RequestError::Decode, RequestError::InvalidIdentifier] {
            assert_eq!(
                ErrorStatus::from(Report::new(kind)).status(),
                StatusCode::BAD_REQUEST
            );
        }
    }

    #[test]
    fn not_found_is_distinct_from_failures() {
        let not_found = ErrorStatus::from(Report::new(KernelError::NotFound)).status();
        let persistence = ErrorStatus::from(Report::new(KernelError::Persistence)).status();
        let timeout = ErrorStatus::from(Report::new(KernelError::Timeout)).status();
        assert_ne!(not_found, persistence);
        assert_ne!(not_found, timeout);
        assert_ne!(persistence, timeout);
    }

    #[test]
    fn client_errors_carry_details_server_errors_do_not() {
        let validation = ErrorStatus::from(
            Report::new(KernelError::Validation).attach_printable("title is required"),
        );
        let body = validation.body();
        assert_eq!(body.error, "Validation failed");
        assert_eq!(body.details, vec!["title is required".to_string()]);

        let persistence = ErrorStatus::from(
            Report::new(KernelError::Persistence).attach_printable("insert book"),
        );
        assert!(persistence.body().details.is_empty());
    }
}
