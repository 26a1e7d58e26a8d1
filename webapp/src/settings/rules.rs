use dioxus::prelude::*;

use crate::common::{
    colors::{label_color, text_on},
    local_time,
    theme::THEME,
};
use api::labeling::*;

// suggested colors for new labels, the middle and a darker shade of each palette
fn swatches() -> Vec<&'static str> {
    THEME
        .colors
        .iter()
        .flat_map(|scale| [scale.shade(500), scale.shade(700)])
        .flatten()
        .collect()
}

fn form_field<'a>(values: &'a [(&str, String)], name: &str) -> &'a str {
    values
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

// the checkbox is simply absent from the submitted values when unchecked
fn rule_from_form(values: &[(&str, String)]) -> anyhow::Result<LabelingRuleCreate> {
    let is_active = values.iter().any(|(key, _)| *key == "is_active");

    LabelingRuleCreate::new(
        form_field(values, "label_name"),
        form_field(values, "label_color"),
        form_field(values, "rule_description"),
        is_active,
    )
}

#[derive(Clone, PartialEq, Props)]
struct RuleFormProps {
    // None creates a new rule
    editing_signal: Signal<Option<LabelingRule>>,
    refresh_signal: Signal<u64>,
    status_signal: Signal<String>,
}

#[component]
fn RuleForm(props: RuleFormProps) -> Element {
    let mut editing_signal = props.editing_signal;
    let mut refresh_signal = props.refresh_signal;
    let mut status_signal = props.status_signal;

    let editing = editing_signal();
    let (form_key, name, color, description, is_active) = match editing.as_ref() {
        Some(rule) => (
            format!("edit-{}", rule.id),
            rule.label_name.clone(),
            rule.label_color.to_lowercase(),
            rule.rule_description.clone(),
            rule.is_active,
        ),
        None => (
            String::from("new"),
            String::new(),
            DEFAULT_LABEL_COLOR.to_lowercase(),
            String::new(),
            true,
        ),
    };
    let editing_id = editing.as_ref().map(|rule| rule.id);

    rsx! {
        form {
            key: "{form_key}",
            class: "card stack",
            onsubmit: move |event| async move {
                let values: Vec<(&str, String)> = ["label_name", "label_color", "rule_description", "is_active"]
                    .into_iter()
                    .filter_map(|name| event.values().get(name).map(|val| (name, val.as_value())))
                    .collect();

                let rule = match rule_from_form(&values) {
                    Ok(rule) => rule,
                    Err(err) => {
                        status_signal.set(format!("{err}"));
                        return;
                    }
                };

                let result = match editing_id {
                    Some(id) => update_rule(id, &LabelingRuleUpdate::from(rule)).await,
                    None => create_rule(&rule).await,
                };

                match result {
                    Ok(saved) => {
                        tracing::info!({ id = saved.id }, "saved labeling rule {}", saved.label_name);
                        status_signal.set(format!("Saved \"{}\"", saved.label_name));
                        editing_signal.set(None);
                        *refresh_signal.write() += 1;
                    }
                    Err(err) => {
                        tracing::error!("failed to save labeling rule: {err}");
                        status_signal.set(format!("Save failed: {err}"));
                    }
                }
            },

            h3 { if editing_id.is_some() { "Edit rule" } else { "New rule" } }

            div { class: "row",
                div { class: "form-group grow",
                    label { class: "form-label", r#for: "label_name", "Label" }
                    input {
                        class: "form-input",
                        id: "label_name",
                        name: "label_name",
                        maxlength: "{MAX_LABEL_NAME_CHARS}",
                        placeholder: "Effective",
                        value: "{name}",
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "label_color", "Color" }
                    input {
                        class: "form-color",
                        id: "label_color",
                        name: "label_color",
                        r#type: "color",
                        list: "label_swatches",
                        value: "{color}",
                    }
                    datalist { id: "label_swatches",
                        for swatch in swatches() {
                            option { value: "{swatch}" }
                        }
                    }
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "rule_description", "Rule" }
                textarea {
                    class: "form-input",
                    id: "rule_description",
                    name: "rule_description",
                    rows: "3",
                    placeholder: "Apply when the meeting ends with clear decisions and owners",
                    value: "{description}",
                }
                p { class: "form-hint",
                    "Written for the analysis model, at least {MIN_RULE_DESCRIPTION_CHARS} characters"
                }
            }

            div { class: "row",
                label { class: "form-label",
                    input {
                        name: "is_active",
                        r#type: "checkbox",
                        value: "true",
                        checked: is_active,
                    }
                    " Active"
                }
                div { class: "row",
                    if editing_id.is_some() {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| editing_signal.set(None),
                            "Cancel"
                        }
                    }
                    input { class: "btn btn-primary", r#type: "submit", value: "Save rule" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct RuleRowProps {
    rule: LabelingRule,
    editing_signal: Signal<Option<LabelingRule>>,
    refresh_signal: Signal<u64>,
    status_signal: Signal<String>,
}

#[component]
fn RuleRow(props: RuleRowProps) -> Element {
    let rule = props.rule;
    let mut editing_signal = props.editing_signal;
    let mut refresh_signal = props.refresh_signal;
    let mut status_signal = props.status_signal;

    let rule_id = rule.id;
    let is_active = rule.is_active;
    let background = label_color(&rule.label_color);
    let chip_style = format!("background-color: {background}; color: {};", text_on(background));
    let updated = local_time(&rule.updated_at);

    rsx! {
        div { class: if is_active { "card rule-row" } else { "card rule-row rule-paused" },
            div { class: "row",
                span { class: "label-chip", style: "{chip_style}", "{rule.label_name}" }
                span { class: "muted", if is_active { "active" } else { "paused" } }
            }
            p { class: "rule-description", "{rule.rule_description}" }
            div { class: "row",
                span { class: "muted", "updated {updated}" }
                div { class: "row",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| async move {
                            // edit from a fresh copy in case another tab changed it
                            match get_rule(rule_id).await {
                                Ok(fresh) => editing_signal.set(Some(fresh)),
                                Err(err) => status_signal.set(format!("Failed to load rule: {err}")),
                            }
                        },
                        "Edit"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| async move {
                            match update_rule(rule_id, &LabelingRuleUpdate::set_active(!is_active)).await {
                                Ok(rule) => {
                                    tracing::info!({ id = rule_id, active = rule.is_active }, "toggled labeling rule");
                                    *refresh_signal.write() += 1;
                                }
                                Err(err) => status_signal.set(format!("Update failed: {err}")),
                            }
                        },
                        if is_active { "Pause" } else { "Resume" }
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| async move {
                            let confirmed = web_sys::window()
                                .and_then(|window| {
                                    window.confirm_with_message("Delete this labeling rule?").ok()
                                })
                                .unwrap_or(false);

                            if !confirmed {
                                return;
                            }

                            match delete_rule(rule_id).await {
                                Ok(resp) => {
                                    tracing::info!("deleted labeling rule {rule_id}: {}", resp.message);
                                    if editing_signal.peek().as_ref().is_some_and(|r| r.id == rule_id) {
                                        editing_signal.set(None);
                                    }
                                    *refresh_signal.write() += 1;
                                }
                                Err(err) => status_signal.set(format!("Delete failed: {err}")),
                            }
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

// the rules the backend uses to label recordings after analysis
#[component]
pub fn LabelingRules() -> Element {
    let editing_signal = use_signal::<Option<LabelingRule>>(|| None);
    let refresh_signal = use_signal(|| 0u64);
    let status_signal = use_signal(String::new);

    let rules_future = use_resource(move || async move {
        refresh_signal.read();
        get_rules(false).await
    });

    let rules = match &*rules_future.read() {
        Some(Ok(rules)) if rules.is_empty() => rsx! {
            div { class: "empty-state", "No labeling rules yet. Recordings will not be labeled." }
        },
        Some(Ok(rules)) => rsx! {
            div { class: "stack",
                for rule in rules.iter() {
                    RuleRow {
                        key: "{rule.id}",
                        rule: rule.clone(),
                        editing_signal,
                        refresh_signal,
                        status_signal,
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "error-state", "Failed to load labeling rules: {err}" }
        },
        None => rsx! {
            div { class: "card",
                div { class: "skeleton", style: "width: 50%;" }
            }
        },
    };

    rsx! {
        div { class: "row",
            h2 { class: "subsection-title", "Labeling rules" }
            span { class: "muted", "{status_signal}" }
        }
        {rules}
        RuleForm { editing_signal, refresh_signal, status_signal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_are_valid_label_colors() {
        let swatches = swatches();
        assert_eq!(swatches.len(), THEME.colors.len() * 2);
        for swatch in swatches {
            assert!(validate_label_color(swatch).is_ok(), "{swatch}");
        }
    }

    #[test]
    fn rules_are_read_from_the_form() {
        let rule = rule_from_form(&[
            ("label_name", String::from("Too Long")),
            ("label_color", String::from("#d69e2e")),
            ("rule_description", String::from("Runs past the scheduled hour")),
        ])
        .unwrap();

        assert_eq!(rule.label_name, "Too Long");
        assert!(!rule.is_active);

        let active = rule_from_form(&[
            ("label_name", String::from("Too Long")),
            ("label_color", String::from("#d69e2e")),
            ("rule_description", String::from("Runs past the scheduled hour")),
            ("is_active", String::from("true")),
        ])
        .unwrap();
        assert!(active.is_active);
    }

    #[test]
    fn invalid_forms_are_refused_before_sending() {
        let missing_name = rule_from_form(&[
            ("label_color", String::from("#d69e2e")),
            ("rule_description", String::from("Runs past the scheduled hour")),
        ]);
        assert!(missing_name.is_err());

        let short_rule = rule_from_form(&[
            ("label_name", String::from("Long")),
            ("label_color", String::from("#d69e2e")),
            ("rule_description", String::from("long")),
        ]);
        assert!(short_rule.is_err());
    }
}
