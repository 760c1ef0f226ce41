//! matrix-e2ee-filter dry run
//!
//! Loads a filter config and replays actions through the policy engine, so
//! operators can check a deny-list before deploying it.
//! - stdin: one JSON action per line (`{"action":"create_room",...}` or
//!   `{"action":"state_event",...}`)
//! - stdout: one JSON verdict per line
//! - logs: stderr, filtered by `RUST_LOG` (e.g. `matrix_e2ee_filter=info`)

use std::process::ExitCode;
use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use e2ee_filter_core::error::{FilterError, Result};
use e2ee_filter_core::event::Action;
use e2ee_filter_core::verdict::Verdict;
use e2ee_filter_module::config;
use e2ee_filter_module::hooks::{EncryptedRoomFilter, RulesRegistry};
use e2ee_filter_module::policy::PolicyEngine;

const DEFAULT_CONFIG_PATH: &str = "e2ee-filter.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    match run(&path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "e2ee-filter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> Result<()> {
    let cfg = config::load_from_file(path)?;
    let engine = Arc::new(PolicyEngine::new(&cfg)?);

    let mut registry = RulesRegistry::new();
    EncryptedRoomFilter::new(Arc::clone(&engine)).register(&mut registry);
    tracing::info!(%path, modules = ?registry.registered(), "e2ee-filter dry run starting");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.map_err(io_err)? {
        if line.trim().is_empty() {
            continue;
        }

        let out = match serde_json::from_str::<Action>(&line) {
            Ok(action) => match engine.evaluate(action) {
                Ok(verdict) => verdict_json(&verdict),
                Err(e) => error_json(&e),
            },
            Err(e) => error_json(&FilterError::Internal(format!("invalid action: {e}"))),
        };

        stdout.write_all(out.as_bytes()).await.map_err(io_err)?;
        stdout.write_all(b"\n").await.map_err(io_err)?;
    }

    stdout.flush().await.map_err(io_err)
}

fn io_err(e: std::io::Error) -> FilterError {
    FilterError::Internal(format!("stdio failed: {e}"))
}

fn verdict_json(v: &Verdict) -> String {
    match v {
        Verdict::Allow => json!({ "verdict": "allow" }),
        Verdict::AllowRewritten(content) => json!({
            "verdict": "allow_rewritten",
            "content": content
        }),
        Verdict::Deny(reason) => json!({
            "verdict": "deny",
            "reason": reason.as_str()
        }),
    }
    .to_string()
}

fn error_json(e: &FilterError) -> String {
    json!({
        "verdict": "error",
        "code": e.code().as_str(),
        "msg": e.to_string()
    })
    .to_string()
}
