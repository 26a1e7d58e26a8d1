use std::sync::LazyLock;

use gloo_net::http::Request;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    endpoint, read_json,
    recording::{AppliedLabel, RecordingId},
    send_json,
};

// structs and types

pub type LabelingRuleId = i64;

pub const DEFAULT_LABEL_COLOR: &str = "#3B82F6";
pub const MAX_LABEL_NAME_CHARS: usize = 100;
pub const MIN_RULE_DESCRIPTION_CHARS: usize = 10;

static LABEL_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("label color pattern is valid"));

// a user-written rule that the analysis model follows when it decides which
// labels a recording gets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelingRule {
    pub id: LabelingRuleId,
    pub label_name: String,
    pub label_color: String,
    pub rule_description: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

// the backend rejects anything outside these bounds with a 422, so check
// them before sending to get a readable message instead
pub fn validate_label_name(name: &str) -> anyhow::Result<()> {
    let chars = name.chars().count();
    if chars == 0 {
        return Err(anyhow::Error::msg("label name cannot be empty"));
    }
    if chars > MAX_LABEL_NAME_CHARS {
        return Err(anyhow::Error::msg(format!(
            "label name must be at most {MAX_LABEL_NAME_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn validate_label_color(color: &str) -> anyhow::Result<()> {
    if LABEL_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(anyhow::Error::msg(format!(
            "label color must look like #RRGGBB, not \"{color}\""
        )))
    }
}

pub fn validate_rule_description(description: &str) -> anyhow::Result<()> {
    if description.chars().count() < MIN_RULE_DESCRIPTION_CHARS {
        return Err(anyhow::Error::msg(format!(
            "rule description must be at least {MIN_RULE_DESCRIPTION_CHARS} characters"
        )));
    }
    Ok(())
}

// messages

// create a rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelingRuleCreate {
    pub label_name: String,
    pub label_color: String,
    pub rule_description: String,
    pub is_active: bool,
}

impl LabelingRuleCreate {
    pub fn new(name: &str, color: &str, description: &str, is_active: bool) -> anyhow::Result<Self> {
        let rule = LabelingRuleCreate {
            label_name: name.trim().to_owned(),
            label_color: color.trim().to_owned(),
            rule_description: description.trim().to_owned(),
            is_active,
        };

        validate_label_name(&rule.label_name)?;
        validate_label_color(&rule.label_color)?;
        validate_rule_description(&rule.rule_description)?;

        Ok(rule)
    }
}

pub async fn create_rule(rule: &LabelingRuleCreate) -> anyhow::Result<LabelingRule> {
    read_json(
        Request::post(&endpoint("/labeling/"))
            .json(rule)?
            .send()
            .await?,
    )
    .await
}

// update a rule
//
// fields left as None are not sent, and the backend leaves them alone
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelingRuleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// replace every field at once, e.g. from an edit form
impl From<LabelingRuleCreate> for LabelingRuleUpdate {
    fn from(rule: LabelingRuleCreate) -> Self {
        LabelingRuleUpdate {
            label_name: Some(rule.label_name),
            label_color: Some(rule.label_color),
            rule_description: Some(rule.rule_description),
            is_active: Some(rule.is_active),
        }
    }
}

impl LabelingRuleUpdate {
    pub fn set_active(is_active: bool) -> Self {
        LabelingRuleUpdate {
            is_active: Some(is_active),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(name) = self.label_name.as_deref() {
            validate_label_name(name)?;
        }
        if let Some(color) = self.label_color.as_deref() {
            validate_label_color(color)?;
        }
        if let Some(description) = self.rule_description.as_deref() {
            validate_rule_description(description)?;
        }
        Ok(())
    }
}

pub async fn update_rule(
    id: LabelingRuleId,
    update: &LabelingRuleUpdate,
) -> anyhow::Result<LabelingRule> {
    update.validate()?;

    read_json(
        Request::put(&endpoint(&format!("/labeling/{id}")))
            .json(update)?
            .send()
            .await?,
    )
    .await
}

// list rules, optionally only the ones the model currently follows
pub async fn get_rules(active_only: bool) -> anyhow::Result<Vec<LabelingRule>> {
    let active_only = active_only.to_string();

    send_json(Request::get(&endpoint("/labeling/")).query([("active_only", active_only.as_str())]))
        .await
}

pub async fn get_rule(id: LabelingRuleId) -> anyhow::Result<LabelingRule> {
    send_json(Request::get(&endpoint(&format!("/labeling/{id}")))).await
}

// delete a rule
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteRuleResp {
    pub message: String,
    pub status: String,
}

pub async fn delete_rule(id: LabelingRuleId) -> anyhow::Result<DeleteRuleResp> {
    send_json(Request::delete(&endpoint(&format!("/labeling/{id}")))).await
}

// run the active rules against an analyzed recording and store the result
//
// the backend refuses with a 400 until the recording has a summary
pub async fn apply_labels(recording_id: RecordingId) -> anyhow::Result<Vec<AppliedLabel>> {
    send_json(Request::post(&endpoint(&format!(
        "/labeling/apply/{recording_id}"
    ))))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_colors_must_be_six_hex_digits() {
        assert!(validate_label_color("#3B82F6").is_ok());
        assert!(validate_label_color("#a1b2c3").is_ok());
        assert!(validate_label_color(DEFAULT_LABEL_COLOR).is_ok());

        assert!(validate_label_color("3B82F6").is_err());
        assert!(validate_label_color("#fff").is_err());
        assert!(validate_label_color("#3B82F6FF").is_err());
        assert!(validate_label_color("#3B82G6").is_err());
        assert!(validate_label_color("#3B82F6\n").is_err());
    }

    #[test]
    fn label_names_are_between_one_and_a_hundred_chars() {
        assert!(validate_label_name("Effective").is_ok());
        assert!(validate_label_name(&"x".repeat(MAX_LABEL_NAME_CHARS)).is_ok());
        // counted in characters, not bytes
        assert!(validate_label_name(&"\u{e9}".repeat(MAX_LABEL_NAME_CHARS)).is_ok());

        assert!(validate_label_name("").is_err());
        assert!(validate_label_name(&"x".repeat(MAX_LABEL_NAME_CHARS + 1)).is_err());
    }

    #[test]
    fn rule_descriptions_need_ten_chars() {
        assert!(validate_rule_description("Too long!!").is_ok());
        assert!(validate_rule_description("too short").is_err());
    }

    #[test]
    fn create_trims_before_validating() {
        let rule = LabelingRuleCreate::new(
            "  Too Long ",
            "#ff0000",
            " Meetings that run over an hour ",
            true,
        )
        .unwrap();

        assert_eq!(rule.label_name, "Too Long");
        assert_eq!(rule.rule_description, "Meetings that run over an hour");

        assert!(LabelingRuleCreate::new("   ", "#ff0000", "a long enough rule", true).is_err());
        assert!(LabelingRuleCreate::new("Boring", "red", "a long enough rule", true).is_err());
        assert!(LabelingRuleCreate::new("Boring", "#ff0000", "   short  ", true).is_err());
    }

    #[test]
    fn updates_only_send_what_changed() {
        let update = LabelingRuleUpdate::set_active(false);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"is_active":false}"#
        );
        assert!(update.validate().is_ok());

        let full = LabelingRuleUpdate::from(
            LabelingRuleCreate::new("Boring", "#9CA3AF", "Nobody made a decision", false).unwrap(),
        );
        assert_eq!(full.label_name.as_deref(), Some("Boring"));
        assert_eq!(full.is_active, Some(false));
        assert!(full.validate().is_ok());

        let bad = LabelingRuleUpdate {
            label_color: Some(String::from("blue")),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn rule_fixture_deserializes() {
        let rule: LabelingRule = serde_json::from_str(
            r##"{
                "id": 3,
                "label_name": "Effective",
                "label_color": "#10B981",
                "rule_description": "Clear decisions with owners",
                "is_active": true,
                "created_at": "2024-05-01T09:30:00",
                "updated_at": "2024-05-02T10:00:00"
            }"##,
        )
        .unwrap();

        assert_eq!(rule.id, 3);
        assert!(rule.is_active);
        assert!(validate_label_color(&rule.label_color).is_ok());
    }
}
