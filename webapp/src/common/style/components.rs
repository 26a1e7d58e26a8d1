pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: none;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--surface-sunken);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--border);
}

.btn-danger {
  background-color: var(--error);
  color: var(--text-inverse);
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Cards */
.card {
  display: block;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-4);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

a.card:hover {
  box-shadow: var(--shadow-md);
  text-decoration: none;
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-hint {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.form-input {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus {
  border-color: var(--border-focus);
  outline: none;
}

/* Status badges and labels */
.badge {
  display: inline-block;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
}

.badge-pending { background-color: var(--surface-sunken); color: var(--text-secondary); }
.badge-working { background-color: var(--secondary-tint); color: var(--color-secondary-800); }
.badge-done { background-color: var(--primary-tint); color: var(--primary-dark); }
.badge-failed { background-color: var(--error-tint); color: var(--error); }

.label-chip {
  display: inline-block;
  padding: 2px var(--space-2);
  margin-right: var(--space-1);
  border-radius: var(--radius-sm);
  font-size: 0.75rem;
  color: var(--text-inverse);
}

/* Skeleton loader */
.skeleton {
  background: linear-gradient(90deg, var(--border) 25%, var(--surface-sunken) 50%, var(--border) 75%);
  background-size: 200% 100%;
  animation: skeleton-loading 1.5s infinite;
  border-radius: var(--radius-md);
  height: 1em;
}

@keyframes skeleton-loading {
  0% { background-position: -200% 0; }
  100% { background-position: 200% 0; }
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.stack {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.muted {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.error-state {
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--error-tint);
  color: var(--error);
}

.empty-state {
  padding: var(--space-12) 0;
  text-align: center;
  color: var(--text-secondary);
}
"#;
