//! # landing-pages
//!
//! Leptos components and literal content for two static marketing landing
//! pages: **PropertyPro** (property management) and **DietitianLab**
//! (dietitian consultation training).
//!
//! Each page stacks the same sections in a fixed order:
//!
//! ```text
//! Hero → Features → Testimonials → Pricing → Footer
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use landing_pages::{render_site, RenderOptions, Site};
//!
//! let html = render_site(Site::PropertyPro, &RenderOptions { year: 2025 });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("PropertyPro"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Display records (features, plans, testimonials, ...)
//! - [`content`] - The literal content of each site and [`Site`]
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Features
//!
//! - `ssr` (default) - [`render_site`] produces a static HTML document with
//!   `RenderHtml::to_html`. No reactive runtime or hydration is needed.
//! - `csr` - components mount in the browser (used by the `landing-web` crate).

pub mod components;
pub mod content;
pub mod styles;
pub mod types;

pub use content::{Site, UnknownSite};

#[cfg(feature = "ssr")]
use components::SiteDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Values that are not part of the literal content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year shown in the footer copyright line
    pub year: i32,
}

/// Render a complete HTML document for one site.
///
/// # Example
///
/// ```rust
/// use landing_pages::{render_site, RenderOptions, Site};
///
/// let html = render_site(Site::DietitianLab, &RenderOptions { year: 2030 });
/// assert!(html.contains("2030 DietitianLab. All rights reserved."));
/// ```
#[cfg(feature = "ssr")]
pub fn render_site(site: Site, options: &RenderOptions) -> String {
    let doc = view! { <SiteDocument site=site year=options.year /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
