//! Global CSS styles for the Esoteric Knowledge Hub.
//!
//! Dark stone background with a blood-red card palette. Web fonts are
//! imported remotely; every family lists local fallbacks so rendering never
//! waits on them.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Creepster&family=Metal+Mania&family=IBM+Plex+Sans:wght@400;700&display=swap');

/* === CSS Custom Properties === */
:root {
  /* STONE (Backgrounds) */
  --stone: #0c0a09;

  /* BLOOD (Cards, Panels) */
  --blood-deep: #450a0a;
  --blood: #7f1d1d;
  --ember: #b91c1c;
  --ember-hover: #dc2626;
  --ember-dark: #991b1b;
  --flame: #f87171;
  --rose: #fca5a5;

  /* TEXT */
  --ash: #fee2e2;
  --ash-muted: #fecaca;

  /* Typography */
  --font-title: 'Creepster', 'Chiller', cursive;
  --font-heading: 'Metal Mania', 'Times New Roman', serif;
  --font-body: 'IBM Plex Sans', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--stone);
  color: var(--ash);
  font-family: var(--font-body);
  line-height: 1.6;
}

/* === Shell === */
.archive-shell {
  min-height: 100vh;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  position: relative;
  overflow: hidden;
}

.site-title {
  font-family: var(--font-title);
  font-size: 3rem;
  text-align: center;
  margin: 1rem 0 2rem;
  text-shadow: 0 4px 8px rgba(0, 0, 0, 0.6);
  z-index: 10;
}

.archive-nav {
  width: 100%;
  max-width: 56rem;
  background: var(--blood);
  border: 1px solid var(--ember);
  border-radius: 8px;
  padding: 1rem;
  margin-bottom: 2rem;
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  z-index: 20;
}

.archive-footer {
  margin-top: 3rem;
  text-align: center;
  color: #ef4444;
  font-size: 0.875rem;
  z-index: 10;
}

/* === Pentagrams === */
.pentagram {
  position: absolute;
  color: var(--ember);
  opacity: 0.1;
  pointer-events: none;
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.pentagram--top-left { top: 1rem; left: 1rem; width: 6rem; height: 6rem; transform: rotate(45deg); }
.pentagram--bottom-right { bottom: 1rem; right: 1rem; width: 6rem; height: 6rem; transform: rotate(-30deg); }
.pentagram--upper-right { top: 25%; right: 2rem; width: 4rem; height: 4rem; opacity: 0.08; transform: rotate(90deg); }
.pentagram--lower-left { bottom: 25%; left: 2rem; width: 4rem; height: 4rem; opacity: 0.08; transform: rotate(-90deg); }

@media (max-width: 767px) {
  .pentagram--wide-only { display: none; }
}

@keyframes pulse {
  0%, 100% { opacity: 0.1; }
  50% { opacity: 0.05; }
}

/* === Buttons === */
.nav-link {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 6px;
  background: var(--ember);
  color: var(--ash);
  font-family: var(--font-body);
  font-weight: 700;
  white-space: nowrap;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.nav-link:hover { background: var(--ember-hover); }
.nav-link--active { background: var(--ember-dark); box-shadow: inset 0 0 0 2px var(--flame); }

.close-btn {
  border: none;
  border-radius: 9999px;
  background: var(--ember);
  color: var(--ash);
  cursor: pointer;
  transition: background var(--transition-fast);
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2.75rem;
  height: 2.75rem;
  font-size: 1.875rem;
  font-weight: 700;
  line-height: 1;
  z-index: 10;
}

.close-btn:hover { background: var(--ember-dark); color: #ffffff; }

/* === Pages === */
.page-panel {
  width: 100%;
  max-width: 56rem;
  background: var(--blood);
  border: 2px solid var(--ember);
  border-radius: 8px;
  padding: 1.5rem;
  margin-bottom: 2rem;
  z-index: 10;
}

.page-panel--home {
  min-height: 50vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.page-heading {
  font-family: var(--font-heading);
  font-size: 2.25rem;
  color: var(--flame);
  border-bottom: 2px solid var(--flame);
  padding-bottom: 0.5rem;
  margin-bottom: 1.5rem;
}

.page-heading--plain { border-bottom: none; }

.home-intro {
  font-size: 1.25rem;
  color: var(--ash-muted);
  margin-bottom: 2rem;
}

.home-shortcuts {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

/* === Cards === */
.card-stack { display: flex; flex-direction: column; gap: 1rem; }

.card-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }

@media (min-width: 640px) {
  .card-grid--three { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
  .card-grid--two { grid-template-columns: repeat(2, 1fr); }
  .card-grid--three { grid-template-columns: repeat(3, 1fr); }
}

.archive-card {
  background: var(--blood);
  border: 1px solid var(--ember);
  border-radius: 8px;
  padding: 1.5rem;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
  transition: transform var(--transition-normal);
}

.archive-card--expandable, .archive-card--sigil { cursor: pointer; }
.archive-card--expandable:hover { transform: scale(1.02); }
.archive-card--sigil:hover { transform: scale(1.05); }

.archive-card--pixel {
  padding: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.card-title {
  font-family: var(--font-heading);
  font-size: 1.5rem;
  color: var(--ash);
  margin-bottom: 0.5rem;
}

.card-title--split { display: flex; align-items: center; justify-content: space-between; }
.card-title--small { font-size: 1.25rem; }

.card-author { color: var(--rose); font-size: 1.125rem; margin-bottom: 0.75rem; }
.card-summary { color: var(--ash-muted); }
.card-hint { font-weight: 700; color: var(--flame); }
.card-hint-muted { color: var(--ash-muted); margin-top: 0.5rem; }

.card-details { margin-top: 0.75rem; color: var(--ash-muted); }
.card-details ul { margin: 0.5rem 0 0.5rem 1.5rem; }
.card-details strong { color: var(--rose); }

.idle-indicator {
  color: var(--flame);
  font-size: 2.25rem;
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.pixel-art-img {
  width: 10rem;
  height: 10rem;
  object-fit: contain;
  border: 2px solid #dc2626;
  border-radius: 6px;
}

.img-fallback { opacity: 0.7; }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(12px);
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 42rem;
  max-height: 95vh;
  overflow-y: auto;
  background: var(--blood-deep);
  border: 2px solid var(--ember);
  border-radius: 8px;
  padding: 1.5rem;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
}

.modal-title {
  font-family: var(--font-heading);
  font-size: 2.25rem;
  color: var(--ash);
  border-bottom: 2px solid var(--flame);
  padding-bottom: 0.5rem;
  margin-bottom: 1rem;
  padding-right: 3rem;
}

.modal-gif-frame { display: flex; justify-content: center; margin-bottom: 1.5rem; }

.modal-gif {
  width: 8rem;
  height: 8rem;
  object-fit: cover;
  border-radius: 9999px;
  border: 4px solid #dc2626;
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.modal-gif--zoomed { transform: scale(1.5); box-shadow: 0 0 0 4px #ef4444; }

.modal-body { margin-top: 1rem; display: flex; flex-direction: column; gap: 1rem; }
.modal-field { font-size: 1.25rem; color: var(--ash); }
.modal-label { font-weight: 700; color: var(--rose); }

.sigil-glyph { width: 4rem; height: 4rem; color: var(--flame); vertical-align: middle; }
"#;
