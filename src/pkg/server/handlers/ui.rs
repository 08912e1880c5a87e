use askama::Template;
use axum::response::Html;

use crate::{conf::settings, pkg::server::uispec::Home, prelude::Result};

pub async fn home() -> Result<Html<String>> {
    let template = Home {
        service_name: &settings.service_name,
    };
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_page_posts_to_render() -> Result<()> {
        let Html(page) = home().await?;
        assert!(page.contains(&format!("<title>{}</title>", settings.service_name)));
        assert!(page.contains("/api/render"));
        Ok(())
    }
}
