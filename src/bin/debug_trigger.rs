//! Manual diagnostic: log in, open an MCP session, send one message, print
//! the reply. Exists to surface debug logs in the hosting dashboard, so the
//! process exits 0 even when a step fails; the log output is the result.

use alfred_ops::api::types::ClientInfo;
use alfred_ops::{AlfredClient, Config, OpsError};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

const DEBUG_MESSAGE: &str =
    "Debug trigger: please reply with a short confirmation so the request shows up in the logs.";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return;
        }
    };
    alfred_ops::logging::init(&cfg.loglevel);

    if let Err(e) = run(&cfg).await {
        error!(error = %e, "debug trigger failed");
    }
}

async fn run(cfg: &Config) -> Result<(), OpsError> {
    let (email, password) = cfg.debug_credentials()?;
    let client = AlfredClient::new(cfg.alfred_base_url.clone())?;
    info!(base_url = %client.base_url(), "triggering debug flow");

    let token = client.login(email, password).await?;
    info!("login succeeded");

    let session_id = client
        .connect(
            &token,
            ClientInfo {
                name: "alfred-debug-trigger".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        )
        .await?;
    info!(session_id = %session_id, "MCP session opened");

    let metadata = json!({
        "source": "alfred-debug-trigger",
        "timestamp": Utc::now().to_rfc3339(),
    });
    let reply = client
        .send_text(&token, &session_id, DEBUG_MESSAGE, metadata)
        .await?;
    info!(provider = %reply.provider, "response received");
    println!("{}", reply.content);

    client.disconnect(&token, &session_id).await?;
    info!("MCP session closed");
    Ok(())
}
