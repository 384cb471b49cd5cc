//! # imed-landing
//!
//! Scroll-animated marketing landing page for the IMED and Autinosis brands,
//! rendered client-side with [Leptos](https://leptos.dev/) 0.8.
//!
//! The page is a single view. It tracks the viewport scroll offset and a
//! "mounted" flag, and derives each section's reveal state from them:
//!
//! | Section        | Trigger                  |
//! |----------------|--------------------------|
//! | hero           | on mount, staggered 0.2 s |
//! | features       | scroll offset > 1        |
//! | call to action | scroll offset > 600      |
//! | testimonials   | scroll offset > 900      |
//!
//! ## Architecture
//!
//! - [`reveal`] - section → trigger table and the pure reveal predicate
//! - [`motion`] - transition timing and its CSS rendition
//! - [`state`] - scroll offset, mounted flag, page state
//! - [`scroll`] - scoped scroll subscription (RAII) and the Leptos hook
//! - [`content`] - per-brand datasets (embedded JSON)
//! - [`config`] - brand selection and log level
//! - [`telemetry`] - `tracing` to the browser console
//! - [`sections`], [`pages`] - Leptos components
//!
//! Everything outside `sections`, `pages`, `head` and the window half of
//! `scroll` is plain Rust and is tested natively.

pub mod config;
pub mod content;
pub mod error;
pub mod head;
pub mod motion;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod telemetry;

pub use content::{Brand, FeatureItem, SiteContent, TestimonialItem};
pub use error::{ContentError, ScrollError};
pub use reveal::{reveal_state, RevealState, RevealTable, Section};
pub use state::{MountedFlag, PageState, ScrollOffset};
