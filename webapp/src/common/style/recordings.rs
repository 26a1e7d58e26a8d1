pub const RECORDING_STYLES: &str = r#"
/* Search bar */
.subnav {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-6);
}

.subnav form {
  display: flex;
  flex: 1;
  gap: var(--space-2);
}

/* Recording list */
.recording-list {
  display: grid;
  gap: var(--space-3);
}

.recording-card-title {
  font-weight: 600;
  color: var(--text-primary);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.recording-card-summary {
  margin-top: var(--space-2);
  color: var(--text-secondary);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.search-excerpt {
  margin-top: var(--space-2);
  font-style: italic;
  color: var(--text-secondary);
}

.pager {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: var(--space-4);
  margin-top: var(--space-6);
}

/* Recording detail */
.detail-header {
  margin-bottom: var(--space-6);
}

.detail-title {
  font-size: 1.75rem;
  font-weight: 700;
  word-break: break-all;
}

.detail-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-6);
}

.detail-section h2 {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-3);
}

.detail-section ul {
  padding-left: var(--space-6);
}

.detail-player {
  width: 100%;
}

.visual-summary {
  width: 100%;
  border-radius: var(--radius-md);
}

.transcript {
  white-space: pre-wrap;
  font-family: var(--font-sans);
  line-height: 1.7;
  max-height: 480px;
  overflow-y: auto;
}

.meta-list dt {
  font-size: 0.75rem;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.meta-list dd {
  margin-bottom: var(--space-3);
}

.upload-panel {
  margin-bottom: var(--space-4);
}

.upload-panel input[type="file"] {
  cursor: pointer;
}

@media (max-width: 768px) {
  .detail-grid {
    grid-template-columns: 1fr;
  }
}
"#;
