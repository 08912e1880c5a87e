use askama::Template;

use crate::pkg::internal::display::{Block, RenderTree, Tone};

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub service_name: &'a str,
}

#[derive(Template)]
#[template(path = "result_display.html")]
pub struct ResultPanel<'a> {
    pub tree: &'a RenderTree,
}

impl ResultPanel<'_> {
    /// Renders an optional tree; nothing to show yields an empty fragment.
    pub fn fragment(tree: Option<&RenderTree>) -> askama::Result<String> {
        match tree {
            Some(tree) => ResultPanel { tree }.render(),
            None => Ok(String::new()),
        }
    }
}
