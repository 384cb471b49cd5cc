use leptos::prelude::*;

use super::staggered;
use crate::content::SectionHeader;
use crate::reveal::RevealState;

/// Eyebrow pill, title and description; first child of a group container.
#[component]
pub fn SectionHeading(header: SectionHeader, reveal: Memo<RevealState>) -> impl IntoView {
    view! {
        <div class="section-header" style=move || staggered(reveal.get(), 0)>
            <span class="section-eyebrow">{header.eyebrow}</span>
            <h2 class="section-title">{header.title}</h2>
            <p class="section-description">{header.description}</p>
        </div>
    }
}
