use contract_bench_server::{run, Settings};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let settings = Settings::build()?;
    run(settings, CancellationToken::new()).await
}
