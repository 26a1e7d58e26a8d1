pub const HOME_STYLES: &str = r#"
/* Hero Section */
.hero {
  background: linear-gradient(135deg, var(--color-primary-700), var(--color-dark-900));
  color: var(--text-inverse);
  padding: var(--space-16) 0;
  text-align: center;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  letter-spacing: -0.02em;
}

.hero-subtitle {
  font-size: 1.25rem;
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  margin-top: var(--space-8);
}

/* Stats Section */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-6);
  margin-top: var(--space-8);
}

.stat-value {
  font-size: 2rem;
  font-weight: 700;
  color: var(--text-primary);
}

.stat-label {
  color: var(--text-secondary);
}

.stat-healthy { color: var(--success); }
.stat-degraded { color: var(--error); }

@media (max-width: 768px) {
  .hero-title {
    font-size: 2.25rem;
  }

  .hero-actions {
    flex-direction: column;
    align-items: center;
  }
}
"#;
