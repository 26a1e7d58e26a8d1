pub const SETTINGS_STYLES: &str = r#"
/* Settings page */
.subsection-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin: var(--space-6) 0 var(--space-3);
}

.grow {
  flex: 1;
}

.form-color {
  width: 48px;
  height: 38px;
  padding: 2px;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  cursor: pointer;
}

.rule-row {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.rule-paused {
  opacity: 0.6;
}

.rule-description {
  color: var(--text-secondary);
}
"#;
