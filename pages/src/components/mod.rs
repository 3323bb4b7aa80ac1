//! Leptos UI components for the landing pages.
//!
//! Every component is a pure function of `'static` literal content, so the
//! same tree renders to a static HTML string (`ssr`) or mounts in the
//! browser (`csr`).
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (ssr only)
//! └── LandingPage
//!     ├── HeroSection
//!     │   └── HeroVisual
//!     ├── FeaturesSection
//!     │   └── FeatureCard (per feature, grouped by audience)
//!     ├── TestimonialsSection
//!     │   └── TestimonialCard
//!     ├── PricingSection
//!     │   └── PlanCard
//!     │       └── PlanFeatureRow
//!     └── FooterSection
//!         ├── FooterLinks
//!         └── FooterContact
//! ```

#[cfg(feature = "ssr")]
mod document;
mod features;
mod footer;
mod heading;
mod hero;
mod icons;
mod landing;
mod pricing;
mod testimonials;

#[cfg(feature = "ssr")]
pub use document::SiteDocument;
pub use features::FeaturesSection;
pub use footer::FooterSection;
pub use heading::{AudienceHeading, SectionHeading};
pub use hero::HeroSection;
pub use icons::{Icon, icon_path};
pub use landing::LandingPage;
pub use pricing::PricingSection;
pub use testimonials::TestimonialsSection;
