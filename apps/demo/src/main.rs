use anyhow::Context;
use ridge::domain::config::DemoConfig;
use ridge::domain::constants::CONFIG_PATH_VAR;
use ridge::kernel::config::load_config;
use ridge_demo::{Server, logging};
use std::path::PathBuf;

#[ridge_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let cfg: DemoConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let _log = logging::init(env!("CARGO_PKG_NAME"), &cfg.log)?;

    Server::builder().config(cfg).build()?.run().await
}
