//! CSS for the landing pages.
//!
//! One stylesheet serves both sites; audience colours come from the
//! `accent-blue` / `accent-teal` modifier classes, which set the
//! `--accent*` custom properties used by cards, headings and buttons.
//!
//! # Customization
//!
//! ```rust
//! use landing_pages::styles::LANDING_CSS;
//!
//! let my_css = ".hero { background: #1a365d; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains(".plan-card"));
//! ```

/// Complete CSS for a landing page.
///
/// Responsive breakpoints: single column below 768px, two columns up to
/// 1024px, three columns above.
pub const LANDING_CSS: &str = r#"
:root {
  --brand: #009688;
  --brand-dark: #00766c;
  --gray-50: #f7fafc;
  --gray-100: #edf2f7;
  --gray-200: #e2e8f0;
  --gray-400: #a0aec0;
  --gray-500: #718096;
  --gray-600: #4a5568;
  --gray-700: #2d3748;
  --gray-900: #171923;
  --radius: 8px;
  --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.1);
  --shadow-lg: 0 10px 15px rgba(0, 0, 0, 0.1);
  --shadow-xl: 0 20px 25px rgba(0, 0, 0, 0.1);
}

.accent-blue {
  --accent: #3182ce;
  --accent-strong: #2b6cb0;
  --accent-soft: #ebf8ff;
  --accent-muted: #bee3f8;
}

.accent-teal {
  --accent: #319795;
  --accent-strong: #2c7a7b;
  --accent-soft: #e6fffa;
  --accent-muted: #b2f5ea;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: Inter, system-ui, -apple-system, sans-serif;
  color: var(--gray-700);
  line-height: 1.5;
}

.container {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 24px;
}

.icon { display: inline-block; vertical-align: middle; flex-shrink: 0; }

/* Buttons */
.btn {
  display: inline-block;
  padding: 10px 20px;
  border-radius: var(--radius);
  font-weight: 700;
  text-align: center;
  text-decoration: none;
  border: 2px solid transparent;
  transition: background 0.2s, color 0.2s;
}
.btn-lg { padding: 14px 28px; font-size: 1.125rem; }
.btn-block { display: block; width: 100%; }
.btn-light { background: #fff; color: var(--brand); }
.btn-light:hover { background: var(--gray-100); }
.btn-ghost { color: #fff; border-color: #fff; }
.btn-ghost:hover { background: rgba(255, 255, 255, 0.2); }
.btn-solid { background: var(--accent); color: #fff; }
.btn-solid:hover { background: var(--accent-strong); }
.btn-outline { color: var(--accent); border-color: var(--accent); }
.btn-outline:hover { background: var(--accent-soft); }

/* Hero */
.hero {
  position: relative;
  overflow: hidden;
  background: var(--brand);
  color: #fff;
  padding: 40px 0;
}
.hero-grid {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 32px;
}
.hero-content { display: flex; flex-direction: column; gap: 24px; }
.hero-title { font-size: 1.875rem; font-weight: 700; line-height: 1.25; margin: 0; }
.hero-description { font-size: 1.125rem; opacity: 0.9; margin: 0; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; padding-top: 16px; }
.hero-visual {
  position: relative;
  width: 100%;
  height: 200px;
  border-radius: var(--radius);
  overflow: hidden;
  box-shadow: var(--shadow-xl);
}
.hero-placeholder { position: absolute; inset: 0; background: var(--gray-200); }
.hero-placeholder-gradient {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom right, #38b2ac, #4299e1);
  opacity: 0.8;
}
.hero-placeholder-text {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 24px;
  text-align: center;
}
.hero-placeholder-title { margin: 0 0 8px; font-size: 1.25rem; }
.hero-placeholder-caption { margin: 0; font-size: 0.875rem; }
.hero-image { position: relative; width: 100%; height: 100%; object-fit: cover; }
.hero-circle {
  position: absolute;
  z-index: 0;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.06);
}
.hero-circle-top { top: -10%; right: -5%; width: 300px; height: 300px; }
.hero-circle-bottom { bottom: -15%; left: -10%; width: 400px; height: 400px; }

/* Section headers */
.features, .testimonials, .pricing { padding: 80px 0; }
.features { background: var(--gray-50); }
.testimonials { background: var(--gray-100); }
.section-header { text-align: center; margin-bottom: 64px; }
.section-title { font-size: 1.875rem; margin: 0 0 16px; }
.section-description {
  font-size: 1.125rem;
  color: var(--gray-600);
  max-width: 800px;
  margin: 0 auto;
}
.audience-block { margin-bottom: 64px; }
.audience-block:last-child { margin-bottom: 0; }
.audience-heading {
  font-size: 1.25rem;
  color: var(--accent-strong);
  margin: 0 0 32px;
  text-align: center;
}

/* Feature cards */
.features-grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
.feature-card {
  height: 100%;
  padding: 24px;
  border-radius: var(--radius);
  background: #fff;
  box-shadow: var(--shadow-md);
  transition: transform 0.3s, box-shadow 0.3s;
}
.feature-card:hover { transform: translateY(-5px); box-shadow: var(--shadow-lg); }
.feature-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 60px;
  height: 60px;
  margin-bottom: 16px;
  border-radius: 50%;
  background: var(--accent-soft);
  color: var(--accent);
}
.feature-title { font-size: 1.25rem; margin: 0 0 12px; }
.feature-description { color: var(--gray-600); margin: 0; }

/* Testimonials */
.testimonials-row { display: flex; flex-direction: column; gap: 32px; }
.testimonial-card {
  position: relative;
  flex: 1;
  padding: 32px;
  border-radius: var(--radius);
  border-top: 4px solid var(--accent);
  background: #fff;
  box-shadow: var(--shadow-md);
}
.testimonial-quote-icon { position: absolute; top: 16px; left: 16px; color: var(--accent-muted); }
.testimonial-quote { margin: 32px 0 24px; color: var(--gray-600); font-style: italic; }
.testimonial-author { display: flex; align-items: center; gap: 16px; }
.testimonial-avatar { width: 50px; height: 50px; border-radius: 50%; object-fit: cover; }
.testimonial-name { margin: 0; font-weight: 700; }
.testimonial-role { margin: 0; font-size: 0.875rem; color: var(--gray-500); }

/* Pricing */
.plans-row { display: flex; flex-direction: column; gap: 32px; justify-content: center; }
.plan-card {
  position: relative;
  flex: 1;
  padding: 32px;
  border: 1px solid var(--gray-200);
  border-radius: var(--radius);
  background: #fff;
  box-shadow: var(--shadow-md);
}
.plan-card.popular { z-index: 1; border-color: var(--accent); box-shadow: var(--shadow-xl); }
.plan-badge {
  position: absolute;
  top: -16px;
  right: 50%;
  transform: translateX(50%);
  padding: 4px 16px;
  border-radius: 9999px;
  background: var(--accent);
  color: #fff;
  font-size: 0.875rem;
  font-weight: 700;
  white-space: nowrap;
}
.plan-title { font-size: 1.25rem; margin: 0 0 8px; text-align: center; }
.plan-description { font-size: 0.875rem; color: var(--gray-500); margin: 0 0 24px; text-align: center; }
.plan-price { display: flex; justify-content: center; align-items: flex-end; gap: 4px; margin-bottom: 24px; }
.plan-amount { font-size: 1.875rem; font-weight: 700; }
.plan-period { color: var(--gray-500); margin-bottom: 4px; }
.plan-features { list-style: none; padding: 0; margin: 0 0 32px; display: flex; flex-direction: column; gap: 12px; }
.plan-feature { display: flex; align-items: center; gap: 8px; font-size: 0.875rem; }
.plan-feature.included { color: var(--gray-700); }
.plan-feature.included .icon { color: var(--accent); }
.plan-feature.excluded { color: var(--gray-400); }

/* Footer */
.footer { background: var(--gray-900); color: #fff; padding: 64px 0; }
.footer-grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
.footer-heading { font-size: 1.25rem; margin: 0 0 16px; }
.footer-text { color: var(--gray-400); margin: 0 0 16px; font-style: normal; }
.footer-socials { display: flex; gap: 16px; }
.footer-social { color: #fff; }
.footer-social:hover { color: #63b3ed; }
.footer-links { display: flex; flex-direction: column; gap: 8px; }
.footer-link { color: var(--gray-400); text-decoration: none; }
.footer-link:hover { color: #fff; }
.contact-row { display: flex; align-items: center; gap: 8px; margin-bottom: 16px; }
.contact-icon { color: var(--brand); }
.address-line { display: block; }
.footer-divider { margin: 32px 0; border: 0; border-top: 1px solid var(--gray-700); }
.footer-bottom { display: flex; flex-direction: column; align-items: center; gap: 16px; }
.footer-copyright { color: var(--gray-500); margin: 0; text-align: center; }
.footer-legal { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; }
.footer-legal .footer-link { color: var(--gray-500); }

/* Not-found view (client-side router) */
.not-found { padding: 120px 24px; text-align: center; }

@media (min-width: 768px) {
  .hero { padding: 80px 0; }
  .hero-title { font-size: 2.25rem; }
  .hero-description { font-size: 1.25rem; }
  .hero-visual { height: 400px; }
  .section-title { font-size: 2.25rem; }
  .section-description { font-size: 1.25rem; }
  .audience-heading { font-size: 1.5rem; text-align: left; }
  .features-grid { grid-template-columns: repeat(2, 1fr); }
  .plans-row { flex-direction: row; }
  .plan-card.popular { transform: scale(1.05); }
  .footer-grid { grid-template-columns: repeat(2, 1fr); }
  .footer-bottom { flex-direction: row; justify-content: space-between; align-items: flex-start; }
}

@media (min-width: 1024px) {
  .hero-grid { flex-direction: row; justify-content: space-between; gap: 48px; }
  .hero-content, .hero-visual { max-width: 50%; }
  .hero-title { font-size: 3rem; }
  .hero-visual { height: 500px; }
  .features-grid { grid-template-columns: repeat(3, 1fr); }
  .testimonials-row { flex-direction: row; justify-content: center; }
  .testimonial-card { max-width: 33%; }
  .footer-grid { grid-template-columns: repeat(4, 1fr); }
}
"#;
