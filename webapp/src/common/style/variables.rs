// semantic names layered over the theme tokens from common::theme
//
// the theme stylesheet has to be mounted before this one for the
// var(--color-...) references to resolve
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: var(--color-primary-500);
  --primary-light: var(--color-primary-300);
  --primary-dark: var(--color-primary-700);
  --primary-tint: var(--color-primary-50);
  --secondary: var(--color-secondary-600);
  --secondary-tint: var(--color-secondary-100);

  /* Semantic Colors */
  --success: var(--color-primary-600);
  --warning: var(--color-secondary-600);
  --error: #DC2626;
  --error-tint: #FEF2F2;

  /* Background and Surface Colors */
  --background: var(--color-secondary-50);
  --surface: #FFFFFF;
  --surface-sunken: var(--color-dark-50);

  /* Text Colors */
  --text-primary: var(--color-dark-900);
  --text-secondary: var(--color-dark-600);
  --text-tertiary: var(--color-dark-400);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--color-dark-100);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 60px;
  --container-width: 1120px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(4, 36, 40, 0.06);
  --shadow-md: 0 4px 6px -1px rgba(4, 36, 40, 0.1), 0 2px 4px -1px rgba(4, 36, 40, 0.06);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
