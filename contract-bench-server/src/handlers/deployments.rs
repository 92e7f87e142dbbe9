use super::ApiError;
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use contract_bench_logic::{deployment::DeploymentRequest, DashboardService};
use tokio_util::sync::CancellationToken;

pub async fn submit(
    service: web::Data<DashboardService>,
    shutdown: web::Data<CancellationToken>,
    request: Json<DeploymentRequest>,
) -> Result<HttpResponse, ApiError> {
    let session = shutdown.child_token();
    let receipt = service
        .submit_deployment(request.into_inner(), &session)
        .await?;
    Ok(HttpResponse::Created().json(receipt))
}
