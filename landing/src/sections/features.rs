use leptos::prelude::*;

use super::{staggered, SectionHeading};
use crate::content::{indexed, FeatureItem, SectionHeader};
use crate::motion::group_style;
use crate::reveal::{RevealState, Section};

#[component]
pub fn Features(
    header: SectionHeader,
    items: Vec<FeatureItem>,
    reveal: Memo<RevealState>,
) -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="features">
            <div
                class=move || format!("container features-group {}", reveal.get().class())
                style=move || group_style(reveal.get())
            >
                <SectionHeading header=header reveal=reveal />
                <div class="features-grid">
                    {indexed(&items)
                        .map(|(index, item)| {
                            view! {
                                <FeatureCard
                                    index=index
                                    item=item.clone()
                                    reveal=reveal
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(index: usize, item: FeatureItem, reveal: Memo<RevealState>) -> impl IntoView {
    // header is ordinal 0
    let ordinal = index + 1;
    view! {
        <article
            class="feature-card"
            data-index=index.to_string()
            style=move || staggered(reveal.get(), ordinal)
        >
            <div class="feature-icon">{item.icon}</div>
            <h3 class="feature-title">{item.title}</h3>
            <p class="feature-description">{item.description}</p>
        </article>
    }
}
