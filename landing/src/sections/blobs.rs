use leptos::prelude::*;

use crate::motion::BLOBS;

/// Decorative blurred circles drifting behind the hero.
#[component]
pub fn Blobs() -> impl IntoView {
    view! {
        <div class="blobs" aria-hidden="true">
            {BLOBS
                .iter()
                .enumerate()
                .map(|(i, drift)| {
                    view! { <div class=format!("blob blob-{}", i + 1) style=drift.style()></div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
