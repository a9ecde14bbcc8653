//! Global CSS styles for Cardsmith.
//!
//! Warm workshop palette: paper tones for the chrome, the card itself takes
//! its colors from the Type Catalog.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CHROME (app surfaces) */
  --paper: #faf7f0;
  --paper-raised: #ffffff;
  --paper-border: #e5dfd2;

  /* ACCENT */
  --amber: #d97706;
  --amber-deep: #b45309;
  --slate: #475569;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --danger: #dc2626;

  /* Typography */
  --font-sans: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--text-primary);
  min-height: 100vh;
}

.app-shell {
  display: flex;
  flex-direction: column;
  height: 100vh;
}

/* === Toolbar === */
.toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1.25rem;
  background: var(--paper-raised);
  border-bottom: 1px solid var(--paper-border);
}

.toolbar-brand {
  font-size: 1.15rem;
  font-weight: 700;
  letter-spacing: 0.02em;
}

.toolbar-actions {
  display: flex;
  gap: 0.6rem;
}

.btn {
  padding: 0.45rem 1rem;
  border-radius: 8px;
  border: 1px solid transparent;
  font-size: 0.9rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-primary {
  background: var(--amber);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--amber-deep);
}

.btn-secondary {
  background: var(--paper);
  color: var(--text-primary);
  border-color: var(--paper-border);
}

.btn-secondary:hover:not(:disabled) {
  background: var(--paper-border);
}

/* === Workspace split === */
.workspace {
  display: flex;
  flex: 1;
  min-height: 0;
}

/* === Editor === */
.editor-pane {
  flex: 1;
  overflow-y: auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.editor-title {
  font-size: 1.4rem;
  margin-bottom: 0.25rem;
}

.field-row {
  display: flex;
  gap: 0.75rem;
}

.field-row > .form-field {
  flex: 1;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
}

.input-label {
  font-size: 0.8rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.input-field {
  padding: 0.45rem 0.6rem;
  border: 1px solid var(--paper-border);
  border-radius: 6px;
  background: var(--paper-raised);
  font-size: 0.9rem;
  color: var(--text-primary);
  width: 100%;
}

.input-field:focus {
  outline: none;
  border-color: var(--amber);
}

.textarea {
  resize: vertical;
}

.attack-group {
  border: 1px solid var(--paper-border);
  border-radius: 10px;
  padding: 0.9rem;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.attack-group-title {
  font-size: 0.95rem;
  color: var(--text-secondary);
}

.image-upload__error {
  font-size: 0.78rem;
  color: var(--danger);
  margin-top: 0.3rem;
}

/* === Preview === */
.preview-pane {
  flex: 0 0 460px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--paper-border);
}

.card-face {
  border-radius: 14px;
  padding: 16px;
  position: relative;
  overflow: hidden;
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.card-header {
  display: flex;
  align-items: center;
  gap: 8px;
}

.card-name {
  font-size: 1.3rem;
  font-weight: 700;
  flex: 1;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-hp {
  font-size: 1.05rem;
  font-weight: 700;
}

.card-picture {
  height: 192px;
  border: 3px solid #ca8a04;
  border-radius: 8px;
  overflow: hidden;
  background: rgba(254, 252, 232, 0.9);
}

.card-picture img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.card-panel {
  background: rgba(254, 252, 232, 0.85);
  border: 1px solid #fef08a;
  border-radius: 8px;
  padding: 8px 10px;
}

.card-type-line {
  display: flex;
  align-items: center;
  gap: 6px;
  font-size: 0.85rem;
  font-weight: 600;
}

.card-description {
  font-size: 0.75rem;
  color: var(--text-secondary);
  margin-top: 4px;
}

.card-attack {
  display: flex;
  align-items: center;
  gap: 8px;
}

.card-attack-cost {
  display: flex;
  gap: 4px;
}

.card-attack-name {
  font-weight: 600;
  font-size: 0.9rem;
  flex: 1;
}

.card-attack-damage {
  font-weight: 700;
}

.card-footer {
  margin-top: auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.card-footer-group {
  display: flex;
  align-items: center;
  gap: 4px;
  font-size: 0.7rem;
  color: var(--text-secondary);
}

/* === Type icons === */
.type-icon {
  width: 22px;
  height: 22px;
  border-radius: 50%;
  border: 1px solid;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-size: 0.7rem;
  font-weight: 700;
  flex-shrink: 0;
}

.type-icon--large {
  width: 32px;
  height: 32px;
  font-size: 0.95rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal {
  background: var(--paper-raised);
  border-radius: 12px;
  padding: 1.5rem;
  max-width: 420px;
  width: 90%;
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.25);
}

.modal-title {
  font-size: 1.1rem;
}

.modal-body {
  font-size: 0.9rem;
  color: var(--text-secondary);
  word-break: break-word;
}

.modal .btn {
  align-self: flex-end;
}
"#;
