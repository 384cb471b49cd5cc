use leptos::prelude::*;

use super::PageLink;
use crate::content::CallToAction;
use crate::motion::{call_to_action, reveal_style, CTA_OFFSET_PX};
use crate::reveal::{RevealState, Section};

#[component]
pub fn CallToActionBand(content: CallToAction, reveal: Memo<RevealState>) -> impl IntoView {
    view! {
        <section id=Section::CallToAction.id() class="cta">
            <div
                class=move || format!("cta-inner {}", reveal.get().class())
                style=move || reveal_style(reveal.get(), call_to_action(), CTA_OFFSET_PX)
            >
                <h2 class="cta-title">{content.title}</h2>
                <p class="cta-description">{content.description}</p>
                <PageLink link=content.button class="btn btn-light" />
            </div>
        </section>
    }
}
