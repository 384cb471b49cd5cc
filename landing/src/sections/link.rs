use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::LinkItem;

/// Internal routes go through the router, absolute URLs open in a new tab.
#[component]
pub fn PageLink(link: LinkItem, #[prop(optional)] class: &'static str) -> impl IntoView {
    if link.is_external() {
        view! {
            <a href=link.href target="_blank" rel="noopener noreferrer" class=class>
                {link.label}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=link.href attr:class=class>
                {link.label}
            </A>
        }
        .into_any()
    }
}
