use std::path::Path;

use standard_error::{Interpolate, StandardError};
use tokio::io::AsyncReadExt;

use crate::{
    pkg::{
        internal::{
            display::{TracingLog, render},
            submission::SubmissionResult,
        },
        server::uispec::ResultPanel,
    },
    prelude::Result,
};

async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StandardError::new("ERR-INPUT-001").interpolate_err(e.to_string())),
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| StandardError::new("ERR-INPUT-001").interpolate_err(e.to_string()))?;
            Ok(buf)
        }
    }
}

/// Decodes a record; blank input and `null` are an absent record.
pub fn decode(raw: &str) -> Result<Option<SubmissionResult>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(raw)
        .map_err(|e| StandardError::new("ERR-INPUT-002").interpolate_err(e.to_string()))
}

pub fn render_text(raw: &str, plain: bool) -> Result<String> {
    let result = decode(raw)?;
    let tree = render(result.as_ref(), &TracingLog);
    if plain {
        return Ok(tree.map(|t| t.to_string()).unwrap_or_default());
    }
    ResultPanel::fragment(tree.as_ref())
        .map_err(|e| StandardError::new("ERR-RENDER-001").interpolate_err(e.to_string()))
}

pub async fn apply(input: Option<&Path>, plain: bool) -> Result<String> {
    let raw = read_input(input).await?;
    tracing::debug!("read {} bytes of result input", raw.len());
    render_text(&raw, plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_null_render_nothing() -> Result<()> {
        assert_eq!(render_text("  \n", false)?, "");
        assert_eq!(render_text("null", true)?, "");
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(decode("{\"success\": ").is_err());
    }

    #[test]
    fn test_plain_output() -> Result<()> {
        let out = render_text(r#"{"success": false, "error": "Network timeout"}"#, true)?;
        assert_eq!(out, "[danger] Error Occurred\nNetwork timeout\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_apply_reads_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("formfill-display-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"success": false, "ats_friendly": false}"#).await?;
        let html = apply(Some(&path), false).await?;
        tokio::fs::remove_file(&path).await?;
        assert!(html.contains("alert alert-warning"));
        Ok(())
    }

    #[tokio::test]
    async fn test_apply_missing_file() {
        let path = Path::new("/nonexistent/formfill-display/result.json");
        assert!(apply(Some(path), false).await.is_err());
    }
}
