use super::{Icon, SectionHeading};
use crate::types::{IconKind, SectionHeader, Testimonial};
use leptos::prelude::*;

#[component]
pub fn TestimonialsSection(
    header: SectionHeader,
    testimonials: &'static [Testimonial],
) -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <SectionHeading header=header />
                <div class="testimonials-row">
                    {testimonials
                        .iter()
                        .map(|t| view! { <TestimonialCard testimonial=*t /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let accent = testimonial.audience.accent.css_class();

    view! {
        <article class=format!("testimonial-card {accent}")>
            <Icon kind=IconKind::Quote size="32" class="testimonial-quote-icon" />
            <blockquote class="testimonial-quote">
                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
            </blockquote>
            <div class="testimonial-author">
                <img
                    class="testimonial-avatar"
                    src=testimonial.avatar_url
                    alt=testimonial.name
                    width="50"
                    height="50"
                />
                <div>
                    <p class="testimonial-name">{testimonial.name}</p>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </div>
        </article>
    }
}
