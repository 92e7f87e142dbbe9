use super::ApiError;
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use contract_bench_logic::{benchmark::Notice, DashboardService};

pub async fn list(service: web::Data<DashboardService>) -> Json<Vec<Notice>> {
    Json(service.notices())
}

pub async fn dismiss(
    service: web::Data<DashboardService>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    service.dismiss_notice(id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
