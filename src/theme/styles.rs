//! Global CSS styles for the Valentine card.
//!
//! Light and dark palettes are CSS custom properties switched by the
//! `data-theme` attribute on `.card-page`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Primary actions, accents) */
  --rose: #fb7185;
  --rose-strong: #f43f5e;
  --rose-soft: #fecdd3;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 1.5rem;
  --text-4xl: 2.25rem;

  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --spring: cubic-bezier(0.22, 1, 0.36, 1);
}

.card-page {
  --bg-from: #ffffff;
  --bg-to: rgba(255, 241, 242, 0.1);
  --panel: rgba(212, 212, 216, 0.3);
  --surface: #ffffff;
  --border: #e2e8f0;
  --border-strong: #cbd5e1;
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --text-muted: #64748b;
  --toggle-bg: rgba(255, 255, 255, 0.8);
}

.card-page[data-theme="dark"] {
  --bg-from: #27272a;
  --bg-to: #18181b;
  --panel: #000000;
  --surface: rgba(24, 24, 27, 0.4);
  --border: #27272a;
  --border-strong: #3f3f46;
  --text-primary: #f4f4f5;
  --text-secondary: #a1a1aa;
  --text-muted: #71717a;
  --toggle-bg: rgba(24, 24, 27, 0.7);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
  overflow: hidden;
}

/* === Layout === */
.card-page {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 0 1rem;
  background: linear-gradient(to bottom right, var(--bg-from), var(--bg-to));
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.card-panel {
  width: 100%;
  max-width: 28rem;
  padding: 1.75rem;
  border-radius: 1rem;
  background: var(--panel);
  text-align: center;
}

/* === Typography === */
.screen-emoji {
  font-size: var(--text-4xl);
  margin-bottom: 0.75rem;
}

.card-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.card-title.question {
  margin-bottom: 1.5rem;
}

.card-subtitle {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.card-tagline {
  color: var(--text-secondary);
  font-weight: 600;
  margin-bottom: 1.25rem;
}

.card-hint {
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin: 0.75rem 0;
}

.card-footnote {
  font-size: var(--text-xs);
  color: var(--text-muted);
  margin-top: 0.75rem;
}

.recipient {
  display: inline-block;
  cursor: pointer;
  font-weight: 800;
  background-image: linear-gradient(90deg, #fb7185, #fda4af, #fecdd3, #fb7185);
  background-size: 400% 100%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: gradientMove 4s linear infinite;
  will-change: background-position;
}

.verse-link {
  margin-bottom: 1.5rem;
  font-weight: 700;
  color: var(--text-muted);
  text-decoration: none;
}

/* === Buttons === */
.btn-primary,
.btn-decline,
.btn-outline {
  width: 100%;
  padding: 1rem 1.5rem;
  border-radius: 0.75rem;
  font-size: var(--text-base);
  font-weight: 600;
  font-family: inherit;
  cursor: pointer;
}

.btn-primary {
  border: none;
  background: var(--rose);
  color: #ffffff;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary:hover {
  background: var(--rose-strong);
}

.btn-decline {
  border: 1px solid var(--border-strong);
  background: var(--surface);
  color: var(--text-primary);
  transition: transform 220ms var(--spring);
  will-change: transform;
}

.btn-decline.wiggle {
  animation: wiggle 0.22s ease-in-out 1;
}

.btn-outline {
  margin-top: 1.5rem;
  border: 1px solid var(--border-strong);
  background: transparent;
  color: var(--text-secondary);
}

.btn-primary:active,
.btn-outline:active {
  transform: scale(0.98);
}

.btn-ghost {
  border: 1px solid var(--border);
  border-radius: 9999px;
  background: var(--toggle-bg);
  color: var(--text-secondary);
  font-size: var(--text-xs);
  font-weight: 600;
  padding: 0.375rem 0.75rem;
  cursor: pointer;
  backdrop-filter: blur(8px);
}

.theme-toggle {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 2;
}

.answer-stack {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

/* === Countdown === */
.countdown-dial {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 6rem;
  height: 6rem;
  margin: 0 auto;
  border-radius: 9999px;
  border: 1px solid var(--border);
  background: var(--surface);
  font-size: var(--text-4xl);
  font-weight: 800;
}

/* === Flip Clock === */
.flip-clock {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.5rem;
}

.flip-unit {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.375rem;
}

.flip-window {
  position: relative;
  width: 100%;
  height: 3.5rem;
  overflow: hidden;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: var(--surface);
}

.flip-digit {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-2xl);
  font-weight: 800;
  font-variant-numeric: tabular-nums;
}

.flip-digit.slide-out {
  animation: slideOut 320ms ease forwards;
}

.flip-digit.slide-in {
  animation: slideIn 320ms ease forwards;
}

.flip-label {
  font-size: 0.625rem;
  letter-spacing: 0.08em;
  color: var(--text-muted);
}

/* === Location Card === */
.location-card {
  margin-top: 1.5rem;
  padding: 1.25rem;
  border-radius: 1rem;
  border: 1px solid var(--border);
  background: var(--surface);
  text-align: left;
  transform: scale(1);
  transition: transform var(--transition-normal);
}

.location-card.unlock-pulse {
  transform: scale(1.02);
}

.location-heading {
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

.location-locked {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.location-value {
  font-size: var(--text-lg);
  font-weight: 600;
}

.location-hint,
.location-note {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.location-note {
  padding-top: 0.25rem;
}

.maps-link {
  display: inline-block;
  margin: 0.5rem 0;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-primary);
  text-decoration: underline;
  text-underline-offset: 4px;
}

/* === Particles === */
.particle-layer {
  position: fixed;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
  z-index: 10;
}

.particle {
  position: absolute;
  bottom: -2rem;
  animation-timing-function: cubic-bezier(0.15, 0.6, 0.35, 1);
  animation-fill-mode: both;
  will-change: transform, opacity;
}

.particle.confetti {
  border-radius: 2px;
  animation-name: confettiRise;
}

.particle.heart {
  line-height: 1;
  animation-name: heartFloat;
  animation-timing-function: ease-out;
}

/* === Keyframes === */
@keyframes gradientMove {
  0% { background-position: 0% 50%; }
  100% { background-position: 400% 50%; }
}

@keyframes wiggle {
  0%, 100% { rotate: 0deg; }
  25% { rotate: -4deg; }
  75% { rotate: 4deg; }
}

@keyframes slideOut {
  from { transform: translateY(0); opacity: 1; }
  to { transform: translateY(-100%); opacity: 0; }
}

@keyframes slideIn {
  from { transform: translateY(100%); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes confettiRise {
  0% { transform: translate(0, 0) rotate(0deg); }
  100% {
    transform: translate(var(--drift), calc(-1 * var(--rise))) rotate(var(--rot));
    opacity: 0;
  }
}

@keyframes heartFloat {
  0% { transform: translate(0, 0) rotate(0deg) scale(0.9); }
  100% {
    transform: translate(var(--drift), calc(-1 * var(--rise))) rotate(var(--rot)) scale(var(--end-scale));
    opacity: 0;
  }
}
"#;
