use leptos::prelude::*;

use super::PageLink;
use crate::content::{BrandIdentity, FooterContent};

/// Calendar year in the visitor's local time zone.
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer(brand: BrandIdentity, content: FooterContent) -> impl IntoView {
    let copyright = content.copyright_line(current_year());
    let profiles = content.social.profiles();
    let contact = content.contact;

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-brand-row">
                        <div class="footer-mark">{brand.mark}</div>
                        <span class="footer-title">{brand.name}</span>
                    </div>
                    <p class="footer-tagline">{brand.tagline}</p>
                </div>

                <div class="footer-column">
                    <h3 class="footer-heading">{content.links_title}</h3>
                    <ul class="footer-list">
                        {content
                            .links
                            .into_iter()
                            .map(|link| view! { <li><PageLink link=link class="footer-link" /></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h3 class="footer-heading">{content.contact_title}</h3>
                    <ul class="footer-list">
                        <li>
                            <a href=format!("mailto:{}", contact.email) class="footer-link">
                                {contact.email.clone()}
                            </a>
                        </li>
                        {contact.phone.map(|phone| view! { <li>{phone}</li> })}
                        <li>
                            {contact
                                .region
                                .into_iter()
                                .map(|line| view! { <span class="footer-region">{line}</span> })
                                .collect::<Vec<_>>()}
                        </li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h3 class="footer-heading">{content.social_title}</h3>
                    <div class="footer-social">
                        {profiles
                            .into_iter()
                            .map(|(network, url)| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link"
                                    >
                                        <span class="sr-only">{network}</span>
                                        <div class="social-icon"></div>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-legal">
                    {content
                        .legal
                        .into_iter()
                        .map(|link| view! { <PageLink link=link class="footer-legal-link" /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
