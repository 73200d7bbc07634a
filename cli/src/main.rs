use std::sync::Arc;

use animales_cli::{logging, runtime, App, Config, ReqwestTransport};
use animales_core::Gateway;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_tracing(config.log_json());
    info!(base_url = config.base_url(), route = %config.route(), "starting");

    let gateway = Arc::new(Gateway::new(config.base_url(), ReqwestTransport::new()));
    let app = App::new(config.route(), config.view_settings());
    runtime::run(
        app,
        gateway,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
