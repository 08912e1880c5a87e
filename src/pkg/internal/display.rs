use std::fmt::{self, Display};

use super::submission::{Presentation, SubmissionResult};

pub const SUCCESS_HEADING: &str = "Form Submitted Successfully!";
pub const SUCCESS_DESCRIPTION: &str =
    "Your form was submitted directly via API - no browser redirect needed!";
pub const FILLED_CAPTION: &str = "fields filled successfully";
pub const ATS_HEADING: &str = "⚠️ PDF is NOT ATS-Friendly";
pub const ATS_DEFAULT_MESSAGE: &str = "Your resume cannot be read by ATS systems";
pub const SUGGESTIONS_LABEL: &str = "How to fix:";
pub const HINT_TITLE: &str = "💡 Quick Test:";
pub const HINT_TEXT: &str =
    "Open your PDF and try to select/copy text. If you can't select text, it's not ATS-friendly!";
pub const ERROR_HEADING: &str = "Error Occurred";

const FILLED_GROUP_CLASS: &str = "";
const FILLED_ITEM_CLASS: &str = "px-0 py-1";
const SUGGESTION_GROUP_CLASS: &str = "bg-transparent";
const SUGGESTION_ITEM_CLASS: &str = "px-0 py-2 bg-transparent border-0";

/// Receives every record that gets rendered.
pub trait ResultLog: Send + Sync {
    fn record(&self, result: &SubmissionResult);
}

/// Logs records at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ResultLog for TracingLog {
    fn record(&self, result: &SubmissionResult) {
        tracing::debug!("result display data: {:?}", result);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ResultLog for Silent {
    fn record(&self, _result: &SubmissionResult) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Warning,
    Danger,
}

impl Variant {
    pub fn class(&self) -> &'static str {
        match self {
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Danger => "danger",
        }
    }
}

/// Bootstrap icon glyphs used by the panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CheckCircleFill,
    InfoCircle,
    Check,
    LightningFill,
    FileEarmarkXFill,
    ExclamationTriangleFill,
    ArrowRightCircle,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::CheckCircleFill => "bi-check-circle-fill",
            Icon::InfoCircle => "bi-info-circle",
            Icon::Check => "bi-check text-success",
            Icon::LightningFill => "bi-lightning-fill",
            Icon::FileEarmarkXFill => "bi-file-earmark-x-fill",
            Icon::ExclamationTriangleFill => "bi-exclamation-triangle-fill",
            Icon::ArrowRightCircle => "bi-arrow-right-circle text-warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Bold,
    /// Small trailing note, tinted with the panel colour.
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub icon: Option<Icon>,
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub count: usize,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    pub label: Option<&'static str>,
    pub marker: Icon,
    /// Extra classes for the list group and for each of its items.
    pub group_class: &'static str,
    pub item_class: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Badge(Badge),
    List(ItemList),
    Hint(Hint),
}

/// One alert panel, the whole visible output for a present result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    pub variant: Variant,
    pub icon: Icon,
    pub heading: &'static str,
    pub body: Vec<Block>,
}

/// Maps a result to its panel. An absent result renders nothing and is not logged.
pub fn render(result: Option<&SubmissionResult>, log: &dyn ResultLog) -> Option<RenderTree> {
    let result = result?;
    log.record(result);
    Some(match result.presentation() {
        Presentation::Success {
            filled_fields,
            message,
        } => success_panel(filled_fields, message),
        Presentation::AtsFailure {
            message,
            suggestions,
        } => ats_panel(message, suggestions),
        Presentation::Failure { error } => RenderTree {
            variant: Variant::Danger,
            icon: Icon::ExclamationTriangleFill,
            heading: ERROR_HEADING,
            body: error
                .map(|e| paragraph(None, e, Tone::Plain))
                .into_iter()
                .collect(),
        },
    })
}

fn success_panel(filled_fields: &[String], message: Option<&str>) -> RenderTree {
    let mut body = vec![paragraph(
        Some(Icon::InfoCircle),
        SUCCESS_DESCRIPTION,
        Tone::Plain,
    )];
    if !filled_fields.is_empty() {
        body.push(Block::Badge(Badge {
            count: filled_fields.len(),
            caption: FILLED_CAPTION,
        }));
        body.push(Block::List(ItemList {
            label: None,
            marker: Icon::Check,
            group_class: FILLED_GROUP_CLASS,
            item_class: FILLED_ITEM_CLASS,
            items: filled_fields.to_vec(),
        }));
    }
    if let Some(message) = message {
        body.push(paragraph(Some(Icon::LightningFill), message, Tone::Note));
    }
    RenderTree {
        variant: Variant::Success,
        icon: Icon::CheckCircleFill,
        heading: SUCCESS_HEADING,
        body,
    }
}

fn ats_panel(message: Option<&str>, suggestions: &[String]) -> RenderTree {
    let mut body = vec![paragraph(
        None,
        message.unwrap_or(ATS_DEFAULT_MESSAGE),
        Tone::Bold,
    )];
    if !suggestions.is_empty() {
        body.push(Block::List(ItemList {
            label: Some(SUGGESTIONS_LABEL),
            marker: Icon::ArrowRightCircle,
            group_class: SUGGESTION_GROUP_CLASS,
            item_class: SUGGESTION_ITEM_CLASS,
            items: suggestions.to_vec(),
        }));
    }
    body.push(Block::Hint(Hint {
        title: HINT_TITLE,
        text: HINT_TEXT,
    }));
    RenderTree {
        variant: Variant::Warning,
        icon: Icon::FileEarmarkXFill,
        heading: ATS_HEADING,
        body,
    }
}

fn paragraph(icon: Option<Icon>, text: &str, tone: Tone) -> Block {
    Block::Paragraph(Paragraph {
        icon,
        text: text.to_string(),
        tone,
    })
}

impl Display for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.variant.class(), self.heading)?;
        for block in &self.body {
            match block {
                Block::Paragraph(p) => writeln!(f, "{}", p.text)?,
                Block::Badge(b) => writeln!(f, "{} {}", b.count, b.caption)?,
                Block::List(list) => {
                    if let Some(label) = list.label {
                        writeln!(f, "{}", label)?;
                    }
                    for item in &list.items {
                        writeln!(f, "  - {}", item)?;
                    }
                }
                Block::Hint(h) => writeln!(f, "{} {}", h.title, h.text)?,
            }
        }
        Ok(())
    }
}
