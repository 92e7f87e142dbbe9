use crate::handlers::{benchmarks, contracts, deployments, error::invalid_request, health, notices};
use actix_web::web;
use contract_bench_logic::DashboardService;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub trait HttpRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig);
}

pub fn configure_router(router: &impl HttpRouter) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    |service_config| router.register_routes(service_config)
}

#[derive(Clone)]
pub struct AppRouter {
    service: web::Data<DashboardService>,
    shutdown: web::Data<CancellationToken>,
    max_body_size: usize,
}

impl AppRouter {
    /// Requests run under child tokens of `shutdown`; cancelling it discards
    /// every pending benchmark and deployment.
    pub fn new(
        service: Arc<DashboardService>,
        shutdown: CancellationToken,
        max_body_size: usize,
    ) -> Self {
        Self {
            service: web::Data::from(service),
            shutdown: web::Data::new(shutdown),
            max_body_size,
        }
    }
}

impl HttpRouter for AppRouter {
    fn register_routes(&self, service_config: &mut web::ServiceConfig) {
        let json_cfg = web::JsonConfig::default()
            .limit(self.max_body_size)
            .error_handler(|err, _| invalid_request(err));
        let query_cfg = web::QueryConfig::default().error_handler(|err, _| invalid_request(err));
        let path_cfg = web::PathConfig::default().error_handler(|err, _| invalid_request(err));

        service_config
            .app_data(self.service.clone())
            .app_data(self.shutdown.clone())
            .app_data(json_cfg)
            .app_data(query_cfg)
            .app_data(path_cfg)
            .route("/health", web::get().to(health::health))
            .service(
                web::scope("/api/v1")
                    .route("/contracts", web::get().to(contracts::list))
                    .route("/contracts/{id}", web::get().to(contracts::get))
                    .service(
                        web::resource("/contracts/{id}/benchmarks/{variant}/{function}")
                            .route(web::post().to(benchmarks::run))
                            .route(web::delete().to(benchmarks::cancel)),
                    )
                    .route("/notices", web::get().to(notices::list))
                    .route("/notices/{id}", web::delete().to(notices::dismiss))
                    .route("/deployments", web::post().to(deployments::submit)),
            );
    }
}
