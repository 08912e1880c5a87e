use axum::{Json, extract::State, response::Html};

use crate::{
    pkg::{
        internal::{display::render, submission::SubmissionResult},
        server::{state::AppState, uispec::ResultPanel},
    },
    prelude::Result,
};

/// Renders a posted result record as an HTML fragment; `null` renders nothing.
pub async fn render_result(
    State(state): State<AppState>,
    Json(result): Json<Option<SubmissionResult>>,
) -> Result<Html<String>> {
    let tree = render(result.as_ref(), state.result_log.as_ref());
    tracing::debug!("rendering {:?} panel", tree.as_ref().map(|t| t.variant));
    Ok(Html(ResultPanel::fragment(tree.as_ref())?))
}
