use super::Icon;
use crate::types::{ContactInfo, FooterColumn, IconKind, SiteContent};
use leptos::prelude::*;

/// Brand, link columns, contact details and the legal bar.
///
/// `year` is passed in rather than read from the clock so rendered pages
/// are reproducible.
#[component]
pub fn FooterSection(content: &'static SiteContent, year: i32) -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-column">
                        <h4 class="footer-heading">{content.brand}</h4>
                        <p class="footer-text">{content.tagline}</p>
                        <div class="footer-socials">
                            {content
                                .socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            class="footer-social"
                                            aria-label=social.label
                                            target="_blank"
                                            rel="noopener"
                                        >
                                            <Icon kind=social.icon size="20" />
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    {content
                        .footer_columns
                        .iter()
                        .map(|column| view! { <FooterLinks column=*column /> })
                        .collect::<Vec<_>>()}
                    <FooterContact contact=&content.contact />
                </div>

                <hr class="footer-divider" />

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("\u{a9} {year} {}. All rights reserved.", content.brand)}
                    </p>
                    <div class="footer-legal">
                        {content
                            .legal_links
                            .iter()
                            .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{column.heading}</h4>
            <nav class="footer-links">
                {column
                    .links
                    .iter()
                    .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}

#[component]
fn FooterContact(contact: &'static ContactInfo) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">"Contact Us"</h4>
            <div class="contact-row">
                <Icon kind=IconKind::MapPin size="18" class="contact-icon" />
                <address class="footer-text">
                    {contact
                        .address_lines
                        .iter()
                        .map(|line| view! { <span class="address-line">{*line}</span> })
                        .collect::<Vec<_>>()}
                </address>
            </div>
            <div class="contact-row">
                <Icon kind=IconKind::Phone size="18" class="contact-icon" />
                <a href=contact.phone_href class="footer-link">{contact.phone_label}</a>
            </div>
            <div class="contact-row">
                <Icon kind=IconKind::Envelope size="18" class="contact-icon" />
                <a href=contact.email_href() class="footer-link">{contact.email}</a>
            </div>
        </div>
    }
}
