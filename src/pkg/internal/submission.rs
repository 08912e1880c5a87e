use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Outcome of a form fill or resume ATS check, as returned by the upstream API.
///
/// Decoding is lenient: a malformed optional field decodes as absent instead
/// of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub filled_fields: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub ats_friendly: Option<bool>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The three mutually exclusive ways a result can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation<'a> {
    Success {
        filled_fields: &'a [String],
        message: Option<&'a str>,
    },
    AtsFailure {
        message: Option<&'a str>,
        suggestions: &'a [String],
    },
    Failure {
        error: Option<&'a str>,
    },
}

impl SubmissionResult {
    /// Picks the presentation mode. `success` wins over `ats_friendly`, and
    /// only an explicit `ats_friendly: false` selects the ATS failure mode.
    pub fn presentation(&self) -> Presentation<'_> {
        match (self.success, self.ats_friendly) {
            (true, _) => Presentation::Success {
                filled_fields: non_empty(&self.filled_fields),
                message: present(&self.message),
            },
            (false, Some(false)) => Presentation::AtsFailure {
                message: present(&self.message),
                suggestions: non_empty(&self.suggestions),
            },
            (false, _) => Presentation::Failure {
                error: present(&self.error),
            },
        }
    }
}

fn present(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

fn non_empty(items: &Option<Vec<String>>) -> &[String] {
    items.as_deref().unwrap_or_default()
}

/// `false`, `null`, `0`, `""` and a missing field are falsy; everything else is truthy.
fn truthy<'de, D>(deserializer: D) -> core::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> core::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> core::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> core::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Result;

    #[test]
    fn test_decode_ignores_upstream_extras() -> Result<()> {
        let result: SubmissionResult = serde_json::from_str(
            r#"{"success": true, "ats_friendly": true, "data": {"name": "x"}, "form_id": "abc"}"#,
        )?;
        assert!(result.success);
        assert_eq!(result.ats_friendly, Some(true));
        assert_eq!(result.filled_fields, None);
        Ok(())
    }

    #[test]
    fn test_decode_malformed_optionals_as_absent() -> Result<()> {
        let result: SubmissionResult = serde_json::from_str(
            r#"{"success": 0, "filled_fields": "name", "message": 42,
                "ats_friendly": null, "suggestions": {"a": 1}, "error": ["x"]}"#,
        )?;
        assert_eq!(result, SubmissionResult::default());
        Ok(())
    }

    #[test]
    fn test_decode_list_keeps_every_position() -> Result<()> {
        let result: SubmissionResult =
            serde_json::from_str(r#"{"success": true, "filled_fields": ["name", 3, null, true, {}]}"#)?;
        assert_eq!(
            result.filled_fields,
            Some(vec![
                "name".to_string(),
                "3".to_string(),
                String::new(),
                "true".to_string(),
                "{}".to_string()
            ])
        );
        Ok(())
    }

    #[test]
    fn test_truthy_success() -> Result<()> {
        for raw in ["1", "\"yes\"", "[]", "{}"] {
            let result: SubmissionResult = serde_json::from_str(&format!("{{\"success\": {raw}}}"))?;
            assert!(result.success, "{raw}");
        }
        for raw in ["0", "\"\"", "null", "false"] {
            let result: SubmissionResult = serde_json::from_str(&format!("{{\"success\": {raw}}}"))?;
            assert!(!result.success, "{raw}");
        }
        Ok(())
    }

    #[test]
    fn test_missing_success_is_failure() -> Result<()> {
        let result: SubmissionResult = serde_json::from_str(r#"{"error": "boom"}"#)?;
        assert_eq!(
            result.presentation(),
            Presentation::Failure { error: Some("boom") }
        );
        Ok(())
    }

    #[test]
    fn test_success_wins_over_ats_flag() {
        let result = SubmissionResult {
            success: true,
            ats_friendly: Some(false),
            suggestions: Some(vec!["ignored".into()]),
            ..Default::default()
        };
        assert_eq!(
            result.presentation(),
            Presentation::Success {
                filled_fields: &[],
                message: None
            }
        );
    }

    #[test]
    fn test_only_explicit_false_is_ats_failure() {
        for flag in [None, Some(true)] {
            let result = SubmissionResult {
                ats_friendly: flag,
                message: Some("ignored".into()),
                ..Default::default()
            };
            assert_eq!(result.presentation(), Presentation::Failure { error: None });
        }
        let result = SubmissionResult {
            ats_friendly: Some(false),
            message: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            result.presentation(),
            Presentation::AtsFailure {
                message: None,
                suggestions: &[]
            }
        );
    }
}
