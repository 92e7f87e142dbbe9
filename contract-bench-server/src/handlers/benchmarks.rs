use super::ApiError;
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use contract_bench_logic::{BenchmarkKey, DashboardService, FunctionBenchmark, Variant};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunBenchmarkRequest {
    pub input: String,
}

#[derive(Debug, Deserialize)]
pub struct BenchmarkPath {
    pub id: String,
    pub variant: Variant,
    pub function: String,
}

impl BenchmarkPath {
    fn key(&self) -> BenchmarkKey {
        BenchmarkKey::new(self.variant, self.function.clone())
    }
}

/// Runs until the benchmark completes. Dropping the request drops the run
/// with it, so a disconnected client never has its result stored.
pub async fn run(
    service: web::Data<DashboardService>,
    shutdown: web::Data<CancellationToken>,
    path: web::Path<BenchmarkPath>,
    request: Json<RunBenchmarkRequest>,
) -> Result<Json<FunctionBenchmark>, ApiError> {
    let session = shutdown.child_token();
    let row = service
        .run_benchmark(&path.id, path.key(), request.into_inner().input, &session)
        .await?;
    Ok(Json(row))
}

pub async fn cancel(
    service: web::Data<DashboardService>,
    path: web::Path<BenchmarkPath>,
) -> HttpResponse {
    if service.cancel_benchmark(&path.id, &path.key()) {
        HttpResponse::Accepted().finish()
    } else {
        HttpResponse::NoContent().finish()
    }
}
