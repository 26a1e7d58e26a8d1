use constcat::concat;

mod components;
mod home;
mod recordings;
mod settings;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use recordings::RECORDING_STYLES;
pub use settings::SETTINGS_STYLES;
pub use variables::CSS_VARIABLES;

// everything except the theme tokens, which are rendered at runtime
pub const APP_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary-dark);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application shell */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary-dark);
}

.nav-links {
  display: flex;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-sunken);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary-dark);
  background-color: var(--primary-tint);
}

.page-content {
  padding: var(--space-8) 0;
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}
"#,
    HOME_STYLES,
    RECORDING_STYLES,
    SETTINGS_STYLES
);
