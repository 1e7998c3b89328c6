//! Global CSS styles for the contact page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0a0e0f;
  --bg-raised: #111719;
  --border: #1f2a2d;

  /* Accents */
  --accent: #00d4aa;
  --accent-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Layout */
  --header-height: 72px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background: rgba(10, 14, 15, 0.92);
  border-bottom: 1px solid var(--border);
  z-index: 100;
}

.header-inner {
  max-width: 1100px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  gap: 2rem;
}

.brand {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--gold);
  text-decoration: none;
}

.nav {
  display: flex;
  gap: 1.5rem;
  margin-left: auto;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link:focus-visible {
  color: var(--accent);
}

.lang-switch {
  border: 1px solid var(--border);
  border-radius: 4px;
  padding: 0 0.5rem;
}

.icon-search {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: 1.1rem;
  cursor: pointer;
}

/* === Sections === */
.home {
  padding-top: var(--header-height);
}

.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1.5rem;
  padding: 4rem 1.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: 3rem;
  color: var(--gold);
}

.tagline {
  color: var(--text-secondary);
  font-size: 1.25rem;
}

.section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--gold);
}

.body-text {
  color: var(--text-secondary);
  margin: 0.75rem 0 2rem;
}

/* === Buttons === */
.btn-primary,
.btn-enter {
  background: transparent;
  border: 1px solid var(--accent);
  border-radius: 4px;
  color: var(--accent);
  padding: 0.75rem 1.5rem;
  cursor: pointer;
  text-decoration: none;
  transition: box-shadow var(--transition-normal);
}

.btn-primary:hover,
.btn-enter:hover {
  box-shadow: 0 0 12px var(--accent-glow);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-muted);
  padding: 0.75rem 1.5rem;
  cursor: pointer;
}

/* === Service Cards === */
.servicios-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.servicio-card {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 2rem;
}

.servicio-icon {
  font-size: 2rem;
  margin-bottom: 1rem;
}

.servicio-title {
  margin-bottom: 0.5rem;
}

.servicio-text {
  color: var(--text-secondary);
}

/* === Country Selector === */
.country-selector {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.country-option {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.country-option:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

.country-option.selected {
  border-color: var(--accent);
  color: var(--accent);
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  max-width: 640px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.input-field {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--accent);
  font: inherit;
  padding: 0.75rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 8px var(--accent-glow);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.textarea {
  resize: vertical;
}

.btn-submit {
  align-self: flex-start;
}

/* === Search Prompt === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(10, 10, 10, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.search-prompt {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1.5rem;
  width: 100%;
  max-width: 420px;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.search-prompt__input {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--accent);
  font: inherit;
  padding: 0.6rem;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  color: var(--text-muted);
  text-align: center;
  padding: 2rem;
}

.init-error {
  padding: 4rem 1.5rem;
  color: var(--text-secondary);
}
"#;
