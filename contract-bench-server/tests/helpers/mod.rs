#![allow(dead_code)]

use contract_bench_server::{build_service, AppRouter, Settings};
use std::{sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;

pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.tracing.enabled = false;
    settings.benchmark.simulated_delay = Duration::from_millis(5);
    settings.deployment.simulated_delay = Duration::ZERO;
    settings
}

pub fn app_router(settings: &Settings) -> AppRouter {
    app_router_with_shutdown(settings, CancellationToken::new())
}

pub fn app_router_with_shutdown(settings: &Settings, shutdown: CancellationToken) -> AppRouter {
    AppRouter::new(
        Arc::new(build_service(settings)),
        shutdown,
        settings.server.max_body_size,
    )
}
