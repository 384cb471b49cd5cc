//! Scroll-triggered reveal logic.
//!
//! Every section of the page is either revealed immediately on mount (the
//! hero) or gated on the viewport scroll offset passing a fixed threshold.
//! The mapping lives in one table and is evaluated by one pure predicate,
//! so the same rule drives every section and can be tested without a DOM.

/// Page sections that take part in reveal animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    CallToAction,
    Testimonials,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Features,
        Section::CallToAction,
        Section::Testimonials,
    ];

    /// Stable identifier, used as the DOM id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::CallToAction => "cta",
            Section::Testimonials => "testimonials",
        }
    }
}

/// Two-valued reveal tag. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        matches!(self, RevealState::Visible)
    }

    /// CSS modifier class, e.g. `reveal-hidden`.
    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Visible => "reveal-visible",
        }
    }
}

/// What makes a section appear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Animates in as soon as the view is mounted, regardless of scroll.
    OnMount,
    /// Visible while the scroll offset is strictly greater than the value.
    ScrollPast(f64),
}

/// The pure predicate shared by every scroll-gated section.
///
/// Strict inequality, no hysteresis: the same offset always yields the same
/// state, whichever direction the user was scrolling.
pub fn reveal_state(offset: f64, threshold: f64) -> RevealState {
    if offset > threshold {
        RevealState::Visible
    } else {
        RevealState::Hidden
    }
}

/// Section → trigger table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTable {
    entries: [(Section, Trigger); 4],
}

impl RevealTable {
    pub const DEFAULT: RevealTable = RevealTable {
        entries: [
            (Section::Hero, Trigger::OnMount),
            (Section::Features, Trigger::ScrollPast(1.0)),
            (Section::CallToAction, Trigger::ScrollPast(600.0)),
            (Section::Testimonials, Trigger::ScrollPast(900.0)),
        ],
    };

    pub fn trigger(&self, section: Section) -> Trigger {
        self.entries
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, t)| *t)
            .unwrap_or(Trigger::OnMount)
    }

    /// Scroll threshold for a section, `None` for mount-gated ones.
    pub fn threshold(&self, section: Section) -> Option<f64> {
        match self.trigger(section) {
            Trigger::ScrollPast(threshold) => Some(threshold),
            Trigger::OnMount => None,
        }
    }

    /// Reveal state of `section` at the given offset.
    ///
    /// `mounted` only matters for mount-gated sections.
    pub fn state(&self, section: Section, offset: f64, mounted: bool) -> RevealState {
        match self.trigger(section) {
            Trigger::ScrollPast(threshold) => reveal_state(offset, threshold),
            Trigger::OnMount if mounted => RevealState::Visible,
            Trigger::OnMount => RevealState::Hidden,
        }
    }
}

impl Default for RevealTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_is_strict() {
        assert_eq!(reveal_state(600.0, 600.0), RevealState::Hidden);
        assert_eq!(reveal_state(600.5, 600.0), RevealState::Visible);
    }

    #[test]
    fn hero_follows_mount_not_scroll() {
        let table = RevealTable::DEFAULT;
        assert_eq!(table.state(Section::Hero, 5000.0, false), RevealState::Hidden);
        assert_eq!(table.state(Section::Hero, 0.0, true), RevealState::Visible);
        assert_eq!(table.threshold(Section::Hero), None);
    }

    #[test]
    fn scroll_sections_ignore_mount() {
        let table = RevealTable::DEFAULT;
        assert_eq!(table.state(Section::Features, 0.0, true), RevealState::Hidden);
        assert_eq!(table.state(Section::Features, 2.0, false), RevealState::Visible);
    }

    #[test]
    fn thresholds_match_table() {
        let table = RevealTable::default();
        assert_eq!(table.threshold(Section::Features), Some(1.0));
        assert_eq!(table.threshold(Section::CallToAction), Some(600.0));
        assert_eq!(table.threshold(Section::Testimonials), Some(900.0));
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
