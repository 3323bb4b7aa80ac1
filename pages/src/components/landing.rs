//! The landing page body: every section in its fixed order.

use super::{FeaturesSection, FooterSection, HeroSection, PricingSection, TestimonialsSection};
use crate::types::SiteContent;
use leptos::prelude::*;

/// Hero, Features, Testimonials, Pricing, then Footer, all inside `<main>`.
#[component]
pub fn LandingPage(content: &'static SiteContent, year: i32) -> impl IntoView {
    view! {
        <main class="landing">
            <HeroSection hero=&content.hero />
            <FeaturesSection header=content.features_header groups=content.feature_groups />
            <TestimonialsSection
                header=content.testimonials_header
                testimonials=content.testimonials
            />
            <PricingSection header=content.pricing_header groups=content.plan_groups />
            <FooterSection content=content year=year />
        </main>
    }
}
