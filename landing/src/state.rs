//! State owned by one landing page view instance.

use crate::reveal::{RevealState, RevealTable, Section};

/// Vertical scroll position of the viewport, in CSS pixels. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset(0.0);

    /// Clamps overscroll (negative) and NaN readings to the top.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() || raw < 0.0 {
            Self::TOP
        } else {
            Self(raw)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ScrollOffset {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

/// False until the first render pass has completed, then true for good.
///
/// Nothing clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountedFlag(bool);

impl MountedFlag {
    pub fn new() -> Self {
        Self(false)
    }

    /// Marks the view as mounted. Returns true only on the first call.
    pub fn mark(&mut self) -> bool {
        let first = !self.0;
        self.0 = true;
        first
    }

    pub fn is_mounted(self) -> bool {
        self.0
    }
}

/// Snapshot of everything the reveal logic reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageState {
    pub offset: ScrollOffset,
    pub mounted: MountedFlag,
    pub table: RevealTable,
}

impl PageState {
    pub fn new(table: RevealTable) -> Self {
        Self {
            offset: ScrollOffset::TOP,
            mounted: MountedFlag::new(),
            table,
        }
    }

    pub fn scroll_to(&mut self, raw: f64) {
        self.offset = ScrollOffset::new(raw);
    }

    pub fn reveal(&self, section: Section) -> RevealState {
        self.table
            .state(section, self.offset.get(), self.mounted.is_mounted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_negative_and_nan() {
        assert_eq!(ScrollOffset::new(-12.5), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::new(f64::NAN), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::new(42.0).get(), 42.0);
    }

    #[test]
    fn mounted_flag_flips_once() {
        let mut flag = MountedFlag::new();
        assert!(!flag.is_mounted());
        assert!(flag.mark());
        assert!(!flag.mark());
        assert!(flag.is_mounted());
    }

    #[test]
    fn page_state_starts_at_top_and_unmounted() {
        let state = PageState::new(RevealTable::DEFAULT);
        assert_eq!(state.offset, ScrollOffset::TOP);
        assert!(!state.mounted.is_mounted());
        for section in Section::ALL {
            assert_eq!(state.reveal(section), RevealState::Hidden);
        }
    }
}
