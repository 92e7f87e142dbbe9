use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use contract_bench_logic::{benchmark::BenchmarkError, ServiceError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// [`ServiceError`] rendered as `{"message": ...}` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) | ServiceError::InvalidArgument(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Benchmark(BenchmarkError::AlreadyRunning { .. }) => StatusCode::CONFLICT,
            ServiceError::Benchmark(BenchmarkError::Cancelled { .. }) | ServiceError::Cancelled => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServiceError::Benchmark(_) | ServiceError::DeploymentFailed(_) => {
                StatusCode::BAD_GATEWAY
            }
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        HttpResponse::build(status).json(ErrorBody {
            message: self.0.to_string(),
        })
    }
}

/// Turns extractor rejections (bad query, path or body) into JSON errors.
pub fn invalid_request<E: fmt::Display>(err: E) -> actix_web::Error {
    ApiError(ServiceError::invalid_argument(err.to_string())).into()
}
