// Landing page sections

mod blobs;
mod call_to_action;
mod features;
mod footer;
mod heading;
mod hero;
mod link;
mod testimonials;

pub use blobs::Blobs;
pub use call_to_action::CallToActionBand;
pub use features::Features;
pub use footer::Footer;
pub use heading::SectionHeading;
pub use hero::Hero;
pub use link::PageLink;
pub use testimonials::{quoted, Testimonials, STAR_COUNT};

use crate::motion::{group_child, reveal_style, FADE_IN_OFFSET_PX};
use crate::reveal::RevealState;

/// Style of the child with `ordinal` inside a group container. The ordinal
/// doubles as the child's position in the group, so it picks up both the
/// fade-in delay and the group stagger.
pub(crate) fn staggered(state: RevealState, ordinal: usize) -> String {
    reveal_style(state, group_child(ordinal, ordinal), FADE_IN_OFFSET_PX)
}
