//! Section and audience headings shared by the card sections

use crate::types::{Audience, SectionHeader};
use leptos::prelude::*;

/// Centered section title with a lead paragraph.
#[component]
pub fn SectionHeading(header: SectionHeader) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{header.title}</h2>
            <p class="section-description">{header.description}</p>
        </div>
    }
}

/// "For <audience>" heading tinted with the audience accent.
#[component]
pub fn AudienceHeading(audience: Audience) -> impl IntoView {
    view! {
        <h3 class=format!("audience-heading {}", audience.accent.css_class())>
            {format!("For {}", audience.label)}
        </h3>
    }
}
