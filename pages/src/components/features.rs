use super::{AudienceHeading, Icon, SectionHeading};
use crate::types::{Accent, Feature, FeatureGroup, SectionHeader};
use leptos::prelude::*;

#[component]
pub fn FeaturesSection(header: SectionHeader, groups: &'static [FeatureGroup]) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionHeading header=header />
                {groups
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="audience-block">
                                <AudienceHeading audience=group.audience />
                                <div class="features-grid">
                                    {group
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <FeatureCard
                                                    feature=*feature
                                                    accent=group.audience.accent
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, accent: Accent) -> impl IntoView {
    view! {
        <article class=format!("feature-card {}", accent.css_class())>
            <div class="feature-icon">
                <Icon kind=feature.icon />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
