//! Scroll position to active section mapping.
//!
//! A probe point sits [`PROBE_OFFSET`] pixels below the top of the viewport.
//! The active section is the first one (in document order) whose vertical
//! extent `[top, top + height)` contains the probe.

use crate::types::SectionId;

/// Distance of the probe below the current scroll offset, in CSS pixels.
pub const PROBE_OFFSET: f64 = 100.0;

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Probe position for a scroll offset.
pub fn probe_position(scroll_y: f64) -> f64 {
    scroll_y + PROBE_OFFSET
}

/// Find the section under the probe for `scroll_y`.
///
/// `sections` is expected in document order; sections missing from the page
/// are simply left out by the caller. Returns `None` when the probe lies
/// outside every section.
pub fn locate_section<I>(scroll_y: f64, sections: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, SectionBounds)>,
{
    let probe = probe_position(scroll_y);
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.contains(probe))
        .map(|(id, _)| id)
}
