use axum::Json;
use serde_json::{Value, json};

use crate::prelude::Result;

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz() -> Result<()> {
    tracing::debug!("service is healthy");
    Ok(())
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}
