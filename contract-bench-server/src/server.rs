use crate::{
    logs::init_logs,
    router::{configure_router, AppRouter},
    settings::Settings,
};
use actix_web::{App, HttpServer};
use contract_bench_logic::{
    benchmark::SimulatedRunner,
    deployment::SimulatedDeployer,
    repository::{ContractRepository, InMemoryRepository},
    DashboardService,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_actix_web::TracingLogger;

pub fn build_service(settings: &Settings) -> DashboardService {
    let repository: Arc<dyn ContractRepository> = if settings.seed.enabled {
        Arc::new(InMemoryRepository::seeded())
    } else {
        Arc::new(InMemoryRepository::new())
    };
    DashboardService::new(
        repository,
        Arc::new(SimulatedRunner::new(settings.benchmark.simulated_delay)),
        Arc::new(SimulatedDeployer::new(settings.deployment.simulated_delay)),
        settings.benchmark.run_timeout,
    )
}

/// Serves until `shutdown` is cancelled or an interrupt signal arrives.
pub async fn run(settings: Settings, shutdown: CancellationToken) -> anyhow::Result<()> {
    init_logs(&settings.tracing)?;

    let service = Arc::new(build_service(&settings));
    let router = AppRouter::new(service, shutdown.clone(), settings.server.max_body_size);

    tracing::info!("starting http server on addr {}", settings.server.addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_router(&router))
    })
    .disable_signals()
    .bind(settings.server.addr)?
    .run();

    let handle = server.handle();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            tokio::select! {
                _ = shutdown.cancelled() => {}
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        tracing::error!("failed to listen for shutdown signal: {err}");
                        return;
                    }
                    tracing::info!("shutdown signal received");
                    shutdown.cancel();
                }
            }
            handle.stop(true).await;
        }
    });

    server.await?;
    shutdown.cancel();
    Ok(())
}
