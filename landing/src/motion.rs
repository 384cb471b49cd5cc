//! Animation timing and its CSS rendition.
//!
//! Timings are kept in seconds and rendered as whole milliseconds, so that
//! `0.2 * 3` shows up as `600ms` and not as a float artefact.

use crate::reveal::RevealState;

/// Delay between successive hero children (seconds per ordinal).
pub const FADE_IN_STEP: f64 = 0.2;
/// Duration of a single fade-in.
pub const FADE_IN_DURATION: f64 = 0.8;
/// Extra delay between successive children of a group container.
pub const STAGGER_CHILDREN: f64 = 0.1;
/// Vertical offset of a hidden fade-in child.
pub const FADE_IN_OFFSET_PX: f64 = 20.0;
/// Vertical offset of the hidden call-to-action band.
pub const CTA_OFFSET_PX: f64 = 30.0;
/// Duration of the call-to-action slide.
pub const CTA_DURATION: f64 = 0.8;
/// Duration of the whole-page fade and of a group container's own fade.
pub const PAGE_FADE_DURATION: f64 = 0.3;

/// Keyframes defined in `style.css`.
pub const REVEAL_KEYFRAMES: &str = "reveal-up";
pub const PAGE_KEYFRAMES: &str = "page-fade-in";
pub const DRIFT_KEYFRAMES: &str = "blob-drift";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// One timed transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self {
            delay: 0.0,
            duration,
            easing,
        }
    }

    pub fn delayed(self, extra: f64) -> Self {
        Self {
            delay: self.delay + extra,
            ..self
        }
    }

    /// `transition:` shorthand covering each listed property.
    pub fn css_transition(&self, properties: &[&str]) -> String {
        let parts: Vec<String> = properties
            .iter()
            .map(|prop| {
                format!(
                    "{} {} {} {}",
                    prop,
                    ms(self.duration),
                    self.easing.css(),
                    ms(self.delay)
                )
            })
            .collect();
        format!("transition: {};", parts.join(", "))
    }

    /// `animation:` shorthand playing `keyframes` once and holding both ends.
    pub fn css_animation(&self, keyframes: &str) -> String {
        format!(
            "animation: {} {} {} {} both;",
            keyframes,
            ms(self.duration),
            self.easing.css(),
            ms(self.delay)
        )
    }
}

fn ms(seconds: f64) -> String {
    format!("{}ms", (seconds * 1000.0).round() as i64)
}

/// Fade-in of the child with the given ordinal: 0.2 s × ordinal delay,
/// 0.8 s, ease-out.
pub fn fade_in(ordinal: usize) -> Transition {
    Transition::new(FADE_IN_DURATION, Easing::EaseOut).delayed(FADE_IN_STEP * ordinal as f64)
}

/// Stagger offset of the child at `position` inside a group container.
pub fn stagger(position: usize) -> f64 {
    STAGGER_CHILDREN * position as f64
}

/// Fade-in of a group container child: own ordinal delay plus the group's
/// stagger for its position.
pub fn group_child(ordinal: usize, position: usize) -> Transition {
    fade_in(ordinal).delayed(stagger(position))
}

/// The call-to-action slide (no delay).
pub fn call_to_action() -> Transition {
    Transition::new(CTA_DURATION, Easing::EaseOut)
}

/// Inline style for an element switching between hidden and visible.
///
/// Hiding never waits: only the way in is delayed.
pub fn reveal_style(state: RevealState, transition: Transition, offset_px: f64) -> String {
    match state {
        RevealState::Visible => format!(
            "opacity: 1; transform: translateY(0px); {}",
            transition.css_transition(&["opacity", "transform"])
        ),
        RevealState::Hidden => format!(
            "opacity: 0; transform: translateY({}px); {}",
            offset_px,
            Transition {
                delay: 0.0,
                ..transition
            }
            .css_transition(&["opacity", "transform"])
        ),
    }
}

/// Inline style for a group container (opacity only).
pub fn group_style(state: RevealState) -> String {
    let transition = Transition::new(PAGE_FADE_DURATION, Easing::EaseOut);
    let opacity = if state.is_visible() { 1 } else { 0 };
    format!(
        "opacity: {}; {}",
        opacity,
        transition.css_transition(&["opacity"])
    )
}

/// Inline style for a mount-gated element that plays its entrance once.
pub fn entrance_style(transition: Transition) -> String {
    transition.css_animation(REVEAL_KEYFRAMES)
}

/// Inline style for the whole-page fade-in.
pub fn page_style() -> String {
    Transition::new(PAGE_FADE_DURATION, Easing::Linear).css_animation(PAGE_KEYFRAMES)
}

/// Endless back-and-forth drift of a decorative blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub dx: f64,
    pub dy: f64,
    pub duration: f64,
}

impl Drift {
    pub fn style(&self) -> String {
        format!(
            "--blob-dx: {}px; --blob-dy: {}px; animation: {} {} {} infinite;",
            self.dx,
            self.dy,
            DRIFT_KEYFRAMES,
            ms(self.duration),
            Easing::EaseInOut.css()
        )
    }
}

/// The two hero blobs: 0 → peak → 0 on each axis.
pub const BLOBS: [Drift; 2] = [
    Drift {
        dx: 30.0,
        dy: 50.0,
        duration: 8.0,
    },
    Drift {
        dx: -40.0,
        dy: 30.0,
        duration: 10.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fade_in_delay_scales_with_ordinal() {
        for i in 0..5 {
            let t = fade_in(i);
            assert!((t.delay - 0.2 * i as f64).abs() < 1e-9);
            assert_eq!(t.duration, 0.8);
            assert_eq!(t.easing, Easing::EaseOut);
        }
    }

    #[test]
    fn group_child_adds_stagger() {
        let t = group_child(2, 2);
        assert!((t.delay - 0.6).abs() < 1e-9);
    }

    #[test]
    fn transition_renders_whole_milliseconds() {
        assert_eq!(
            fade_in(3).css_transition(&["opacity"]),
            "transition: opacity 800ms ease-out 600ms;"
        );
    }

    #[test]
    fn hidden_style_drops_delay() {
        let style = reveal_style(RevealState::Hidden, fade_in(4), FADE_IN_OFFSET_PX);
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(style.contains("ease-out 0ms"));
    }

    #[test]
    fn visible_style_keeps_delay() {
        let style = reveal_style(RevealState::Visible, fade_in(1), FADE_IN_OFFSET_PX);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("ease-out 200ms"));
    }

    #[test]
    fn entrance_holds_both_ends() {
        assert_eq!(
            entrance_style(fade_in(2)),
            "animation: reveal-up 800ms ease-out 400ms both;"
        );
    }

    #[test]
    fn blob_drift_style() {
        assert_eq!(
            BLOBS[1].style(),
            "--blob-dx: -40px; --blob-dy: 30px; animation: blob-drift 10000ms ease-in-out infinite;"
        );
    }
}
