//! CSS for the marketing page.
//!
//! One constant holds the full stylesheet: pastel theme variables, layout,
//! cards, the blink demo frame, and responsive rules. Entrance keyframes are
//! generated separately by [`crate::motion::entrance_css`] so the animation
//! values live next to their descriptors.
//!
//! To extend or override styles:
//!
//! ```rust
//! use blinkbook_page::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete stylesheet - soft pastel theme, rounded cards, short shadows.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-top: #FFF8F6;
    --bg-bottom: #F6FBFF;
    --ink: #1f2937;
    --ink-soft: #4b5563;
    --ink-dim: #6b7280;
    --ink-faint: #9ca3af;
    --pink: #FFD1DC;
    --cream: #FFF3E8;
    --sky: #DDEBFF;
    --mint: #E9F9F1;
    --sun: #FFE9A8;
    --card-radius: 16px;
    --font-body: Inter, system-ui, -apple-system, sans-serif;
    --container-max: 1100px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-body);
    color: var(--ink);
    background: linear-gradient(180deg, var(--bg-top), var(--bg-bottom));
    line-height: 1.6;
    min-height: 100vh;
    -webkit-font-smoothing: antialiased;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Header */

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 24px 0;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.brand-mark {
    width: 48px;
    height: 48px;
    border-radius: 16px;
    background: linear-gradient(135deg, var(--pink), var(--sun));
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    font-size: 18px;
    letter-spacing: -0.02em;
    box-shadow: 0 10px 20px rgba(255, 209, 220, 0.5);
}

.brand-name {
    margin: 0;
    font-size: 20px;
    font-weight: 600;
}

.brand-tagline {
    margin: 0;
    font-size: 12px;
    color: var(--ink-dim);
}

.site-nav {
    display: flex;
    align-items: center;
    gap: 16px;
}

.nav-link {
    font-size: 14px;
    color: var(--ink);
    text-decoration: none;
}

.nav-link:hover {
    text-decoration: underline;
}

.nav-cta {
    margin-left: 8px;
    padding: 8px 16px;
    border: none;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.8);
    font-size: 14px;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(31, 41, 55, 0.08);
    transition: transform 180ms ease;
}

.nav-cta:hover {
    transform: scale(1.02);
}

/* Hero */

.hero {
    padding: 48px 0;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-title {
    margin: 0;
    font-size: 44px;
    font-weight: 800;
    line-height: 1.15;
    letter-spacing: -0.01em;
}

.hero-lede {
    margin: 16px 0 0;
    max-width: 32rem;
    color: var(--ink-soft);
}

.hero-actions {
    margin-top: 24px;
    display: flex;
    gap: 16px;
}

.btn {
    padding: 12px 20px;
    border-radius: 16px;
    border: none;
    font-size: 15px;
    font-weight: 600;
    cursor: pointer;
    transition: transform 180ms ease;
}

.btn:hover {
    transform: scale(1.02);
}

.btn-primary {
    background: linear-gradient(90deg, #FF9FB6, var(--sun));
    box-shadow: 0 10px 24px rgba(255, 159, 182, 0.4);
}

.btn-secondary {
    background: rgba(255, 255, 255, 0.6);
    border: 1px solid rgba(31, 41, 55, 0.12);
    font-weight: 500;
}

.btn-ghost {
    padding: 8px 12px;
    border-radius: 12px;
    border: 1px solid rgba(31, 41, 55, 0.12);
    background: transparent;
    font-size: 13px;
    cursor: pointer;
}

.hero-highlights {
    margin: 32px 0 0;
    padding: 0;
    max-width: 24rem;
    list-style: none;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 12px;
    font-size: 14px;
    color: var(--ink-soft);
}

/* Blink demo */

.demo-slot {
    display: flex;
    justify-content: center;
}

.demo-frame {
    width: 340px;
    min-height: 560px;
    background: #ffffff;
    border-radius: 24px;
    box-shadow: 0 25px 50px rgba(31, 41, 55, 0.2);
    padding: 24px;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.demo-stage {
    position: relative;
    width: 100%;
    height: 256px;
    border-radius: 8px;
    background: linear-gradient(135deg, #f3f4f6, #ffffff);
    overflow: hidden;
}

.demo-photo {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.demo-shade {
    position: absolute;
    inset: 0;
    background: #000000;
    pointer-events: none;
}

.memory-card {
    margin-top: 24px;
    width: 100%;
    border-radius: 16px;
    background: #ffffff;
    padding: 16px;
    box-shadow: 0 2px 8px rgba(31, 41, 55, 0.08);
}

.memory-card-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.memory-card-title {
    font-size: 14px;
    font-weight: 500;
}

.memory-card-sub {
    font-size: 12px;
    color: var(--ink-dim);
}

.memory-card-mood {
    font-size: 12px;
    color: var(--ink-faint);
}

.memory-card-body {
    margin: 12px 0 0;
    font-size: 14px;
    color: var(--ink-soft);
}

.memory-card-actions {
    margin-top: 16px;
    display: flex;
    gap: 8px;
}

/* Shared section chrome */

.section {
    padding: 32px 0;
}

.section-title {
    margin: 0;
    font-size: 24px;
    font-weight: 600;
}

.section-lede {
    margin: 12px 0 0;
    color: var(--ink-soft);
}

.section-panel {
    background: rgba(255, 255, 255, 0.5);
    border-radius: 16px;
    padding: 24px;
    box-shadow: inset 0 2px 6px rgba(31, 41, 55, 0.06);
}

/* How it works */

.step-grid {
    margin-top: 16px;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
}

.step-card {
    padding: 16px;
    background: #ffffff;
    border-radius: 12px;
    box-shadow: 0 2px 8px rgba(31, 41, 55, 0.08);
}

.step-title {
    font-size: 14px;
    font-weight: 600;
}

.step-description {
    margin-top: 8px;
    font-size: 14px;
    color: var(--ink-soft);
}

/* Deck preview */

.deck-grid {
    margin-top: 16px;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
}

.deck-card {
    padding: 16px;
    border-radius: 16px;
    box-shadow: 0 6px 16px rgba(31, 41, 55, 0.12);
}

.deck-title {
    font-size: 14px;
    font-weight: 600;
}

.deck-subtitle {
    font-size: 12px;
    color: var(--ink-soft);
}

.deck-count {
    margin-top: 16px;
    font-size: 32px;
    font-weight: 700;
}

/* Design details */

.detail-grid {
    margin-top: 24px;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
}

.detail-card {
    padding: 16px;
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 2px 8px rgba(31, 41, 55, 0.08);
}

.detail-title {
    font-weight: 600;
}

.detail-body {
    margin-top: 8px;
    font-size: 14px;
    color: var(--ink-soft);
}

.swatch-row {
    display: flex;
    align-items: center;
    gap: 8px;
}

.type-face {
    font-weight: 600;
}

.type-note {
    margin-top: 8px;
    font-size: 14px;
    color: var(--ink-dim);
}

.swatch {
    width: 32px;
    height: 32px;
    border-radius: 8px;
}

/* Roadmap */

.roadmap-list {
    margin: 16px 0 0;
    padding-left: 24px;
    color: var(--ink-soft);
}

.roadmap-item {
    margin-bottom: 8px;
}

/* Footer */

.site-footer {
    margin-top: 48px;
    padding: 32px 0;
    border-top: 1px solid rgba(31, 41, 55, 0.1);
}

.footer-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.footer-note {
    margin: 0;
    font-size: 14px;
    color: var(--ink-dim);
}

.footer-links {
    display: flex;
    gap: 12px;
    font-size: 14px;
}

.footer-link {
    color: var(--ink-dim);
    text-decoration: none;
}

.footer-link:hover {
    text-decoration: underline;
}

/* Small screens */

@media (max-width: 820px) {
    .hero-grid {
        grid-template-columns: 1fr;
    }

    .step-grid, .deck-grid, .detail-grid {
        grid-template-columns: 1fr;
    }

    .hero-title {
        font-size: 34px;
    }

    .site-nav .nav-link {
        display: none;
    }

    .footer-inner {
        flex-direction: column;
        gap: 12px;
    }
}
"#;
