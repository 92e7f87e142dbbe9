mod handlers;
mod logs;
mod router;
mod server;
mod settings;

pub use handlers::ApiError;
pub use logs::init_logs;
pub use router::{configure_router, AppRouter, HttpRouter};
pub use server::{build_service, run};
pub use settings::{
    BenchmarkSettings, DeploymentSettings, SeedSettings, ServerSettings, Settings, TracingFormat,
    TracingSettings,
};
