use super::{AudienceHeading, Icon, SectionHeading};
use crate::types::{IconKind, PlanFeature, PlanGroup, PricingPlan, SectionHeader};
use leptos::prelude::*;

#[component]
pub fn PricingSection(header: SectionHeader, groups: &'static [PlanGroup]) -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <SectionHeading header=header />
                {groups
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="audience-block">
                                <AudienceHeading audience=group.audience />
                                <div class="plans-row">
                                    {group
                                        .plans
                                        .iter()
                                        .map(|plan| view! { <PlanCard plan=*plan /> })
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
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let accent = plan.audience.accent.css_class();
    let (card_class, cta_class) = if plan.popular {
        (format!("plan-card popular {accent}"), "btn btn-solid btn-block")
    } else {
        (format!("plan-card {accent}"), "btn btn-outline btn-block")
    };

    view! {
        <article class=card_class>
            {plan.popular.then(|| view! { <span class="plan-badge">"Most Popular"</span> })}
            <h3 class="plan-title">{plan.title}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="plan-amount">{plan.price}</span>
                {(!plan.is_free()).then(|| view! { <span class="plan-period">"/month"</span> })}
            </div>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! { <PlanFeatureRow feature=*feature /> })
                    .collect::<Vec<_>>()}
            </ul>
            <a href=plan.signup_href() class=cta_class>
                "Get Started"
            </a>
        </article>
    }
}

#[component]
fn PlanFeatureRow(feature: PlanFeature) -> impl IntoView {
    let (class, icon) = if feature.included {
        ("plan-feature included", IconKind::Check)
    } else {
        ("plan-feature excluded", IconKind::Cross)
    };

    view! {
        <li class=class>
            <Icon kind=icon size="16" />
            <span>{feature.text}</span>
        </li>
    }
}
