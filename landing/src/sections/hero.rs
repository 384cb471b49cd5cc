use leptos::prelude::*;

use super::{Blobs, PageLink};
use crate::content::HeroContent;
use crate::motion::{entrance_style, fade_in};
use crate::reveal::{RevealState, Section};

/// Entrance style for hero child `ordinal`, or fully transparent while the
/// hero is not revealed yet.
fn hero_style(state: RevealState, ordinal: usize) -> String {
    if state.is_visible() {
        entrance_style(fade_in(ordinal))
    } else {
        "opacity: 0;".to_string()
    }
}

#[component]
pub fn Hero(content: HeroContent, reveal: Memo<RevealState>) -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="hero">
            <Blobs />
            <h1 class="hero-title" style=move || hero_style(reveal.get(), 0)>
                {content.title}
                <br class="hero-break" />
                <span class="hero-title-accent" style=move || hero_style(reveal.get(), 1)>
                    {content.highlight}
                </span>
            </h1>
            <p class="hero-lead" style=move || hero_style(reveal.get(), 2)>
                {content.lead}
            </p>
            <div class="hero-actions" style=move || hero_style(reveal.get(), 3)>
                <PageLink link=content.primary class="btn btn-primary" />
                <PageLink link=content.secondary class="btn btn-secondary" />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_hero_is_transparent() {
        assert_eq!(hero_style(RevealState::Hidden, 3), "opacity: 0;");
    }

    #[test]
    fn hero_children_stagger_by_ordinal() {
        assert!(hero_style(RevealState::Visible, 0).contains("ease-out 0ms"));
        assert!(hero_style(RevealState::Visible, 3).contains("ease-out 600ms"));
    }
}
