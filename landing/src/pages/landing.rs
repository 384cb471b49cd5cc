// Landing page - brand resolution, scroll tracking, mount gate, sections
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config::LandingConfig;
use crate::content::SiteContent;
use crate::head;
use crate::motion::page_style;
use crate::reveal::{RevealState, RevealTable, Section};
use crate::scroll::use_scroll_offset;
use crate::sections::{CallToActionBand, Features, Footer, Hero, Testimonials};
use crate::state::{MountedFlag, PageState};

#[component]
pub fn LandingPage() -> impl IntoView {
    let query = use_query_map();
    let brand_param = query.with_untracked(|q| q.get("brand"));
    let config = LandingConfig::resolve(brand_param.as_deref());

    match SiteContent::load(config.brand) {
        Ok(content) => {
            tracing::info!(brand = %config.brand, "landing content loaded");
            view! { <LandingView content=content table=config.reveal /> }.into_any()
        }
        Err(err) => {
            tracing::error!(%err, "landing content unavailable");
            view! { <ContentUnavailable message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
fn LandingView(content: SiteContent, table: RevealTable) -> impl IntoView {
    let offset = use_scroll_offset();
    let mounted = RwSignal::new(MountedFlag::new());

    // Runs once, after the first render pass
    let meta = content.meta.clone();
    Effect::new(move || {
        mounted.update(|flag| {
            if flag.mark() {
                tracing::debug!("landing view mounted");
            }
        });
        head::apply(&meta);
    });

    let reveal = move |section: Section| {
        Memo::new(move |_| {
            PageState {
                offset: offset.get(),
                mounted: mounted.get(),
                table,
            }
            .reveal(section)
        })
    };
    let hero = reveal(Section::Hero);
    let features = reveal(Section::Features);
    let cta = reveal(Section::CallToAction);
    let testimonials = reveal(Section::Testimonials);

    Effect::new(move || {
        let states: Vec<(&str, RevealState)> = [
            (Section::Features, features.get()),
            (Section::CallToAction, cta.get()),
            (Section::Testimonials, testimonials.get()),
        ]
        .into_iter()
        .map(|(s, r)| (s.id(), r))
        .collect();
        tracing::trace!(?states, "reveal states");
    });

    view! {
        <Show when=move || mounted.get().is_mounted()>
            <main class="landing" style=page_style()>
                <Hero content=content.hero.clone() reveal=hero />
                <Features
                    header=content.features_header.clone()
                    items=content.features.clone()
                    reveal=features
                />
                <CallToActionBand content=content.call_to_action.clone() reveal=cta />
                <Testimonials
                    header=content.testimonials_header.clone()
                    items=content.testimonials.clone()
                    reveal=testimonials
                />
                <Footer brand=content.brand.clone() content=content.footer.clone() />
            </main>
        </Show>
    }
}

#[component]
fn ContentUnavailable(message: String) -> impl IntoView {
    view! {
        <main class="landing landing-error">
            <h1>"Conteúdo indisponível"</h1>
            <p class="landing-error-detail">{message}</p>
        </main>
    }
}
