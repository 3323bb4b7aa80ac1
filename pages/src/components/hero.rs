use crate::types::Hero;
use leptos::prelude::*;

#[component]
pub fn HeroSection(hero: &'static Hero) -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">{hero.title}</h1>
                        <p class="hero-description">{hero.subtitle}</p>
                        <div class="hero-actions">
                            <a href=hero.primary.href class="btn btn-light btn-lg">
                                {hero.primary.label}
                            </a>
                            <a href=hero.secondary.href class="btn btn-ghost btn-lg">
                                {hero.secondary.label}
                            </a>
                        </div>
                    </div>
                    <HeroVisual hero=hero />
                </div>
            </div>
            // Background decoration
            <div class="hero-circle hero-circle-top"></div>
            <div class="hero-circle hero-circle-bottom"></div>
        </section>
    }
}

/// Hero image stacked over a gradient panel that shows while it loads
/// (or when the asset is missing).
#[component]
fn HeroVisual(hero: &'static Hero) -> impl IntoView {
    view! {
        <div class="hero-visual">
            <div class="hero-placeholder">
                <div class="hero-placeholder-gradient"></div>
                <div class="hero-placeholder-text">
                    <h3 class="hero-placeholder-title">{hero.placeholder_title}</h3>
                    <p class="hero-placeholder-caption">{hero.placeholder_caption}</p>
                </div>
            </div>
            <img class="hero-image" src=hero.image_src alt=hero.image_alt />
        </div>
    }
}
