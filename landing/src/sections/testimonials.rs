use leptos::prelude::*;

use super::{staggered, SectionHeading};
use crate::content::{indexed, SectionHeader, TestimonialItem};
use crate::motion::group_style;
use crate::reveal::{RevealState, Section};

/// Every testimonial shows a full five-star rating.
pub const STAR_COUNT: usize = 5;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// Wraps a quote in quotation marks for display.
pub fn quoted(quote: &str) -> String {
    format!("\"{}\"", quote)
}

#[component]
pub fn Testimonials(
    header: SectionHeader,
    items: Vec<TestimonialItem>,
    reveal: Memo<RevealState>,
) -> impl IntoView {
    view! {
        <section id=Section::Testimonials.id() class="testimonials">
            <div
                class=move || format!("container testimonials-group {}", reveal.get().class())
                style=move || group_style(reveal.get())
            >
                <SectionHeading header=header reveal=reveal />
                <div class="testimonials-grid">
                    {indexed(&items)
                        .map(|(index, item)| {
                            view! {
                                <TestimonialCard
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
fn TestimonialCard(
    index: usize,
    item: TestimonialItem,
    reveal: Memo<RevealState>,
) -> impl IntoView {
    let ordinal = index + 1;
    view! {
        <article
            class="testimonial-card"
            data-index=index.to_string()
            style=move || staggered(reveal.get(), ordinal)
        >
            <Stars />
            <p class="testimonial-quote">{quoted(&item.quote)}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">
                    <img src=item.avatar alt=item.author.clone() width="48" height="48" />
                </div>
                <p class="testimonial-name">{item.author}</p>
            </div>
        </article>
    }
}

#[component]
fn Stars() -> impl IntoView {
    view! {
        <div class="stars">
            {(0..STAR_COUNT)
                .map(|_| {
                    view! {
                        <svg class="star" fill="currentColor" viewBox="0 0 20 20">
                            <path d=STAR_PATH />
                        </svg>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_wrapped_once() {
        assert_eq!(quoted("Experiência única!"), "\"Experiência única!\"");
    }
}
