// Web server command

use anyhow::{Context, Result};

use super::common::build_state;
use crate::config::AppConfig;
use crate::web::run_server;

pub async fn handle_serve(config: &AppConfig, bind: Option<&str>) -> Result<()> {
    let state = build_state(config)?;
    let bind = bind.unwrap_or(&config.bind);
    run_server(state, bind)
        .await
        .with_context(|| format!("Server on {} stopped with an error", bind))
}
