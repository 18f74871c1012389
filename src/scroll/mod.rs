//! Scroll position of the month list
//!
//! `ScrollView` owns the offset into the stacked month sections, the month
//! layout table, the centering tracker and an optional jump animation.
//! Offsets are always clamped to `[0, content_height - viewport_height]`.

pub mod animation;
pub mod centering;
pub mod layout;
pub mod tracker;

pub use animation::ScrollAnimation;
pub use centering::centered_month;
pub use layout::{MonthExtent, MonthLayout};
pub use tracker::{ScrollGate, ScrollTracker, SettleToken};

use std::time::{Duration, Instant};

use crate::window::MonthWindow;

#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    offset: u16,
    viewport_height: u16,
    layout: MonthLayout,
    tracker: ScrollTracker,
    animation: Option<ScrollAnimation>,
}

impl ScrollView {
    pub fn new(tracker: ScrollTracker) -> Self {
        Self {
            tracker,
            ..Default::default()
        }
    }

    /// True once month extents are known
    pub fn is_mounted(&self) -> bool {
        !self.layout.is_empty()
    }

    /// Measure every month of `window` and attach a viewport
    pub fn mount(&mut self, window: &MonthWindow, viewport_height: u16) {
        self.layout = MonthLayout::for_window(window);
        self.set_viewport_height(viewport_height);
    }

    /// Forget the layout and any in-flight motion
    pub fn unmount(&mut self) {
        self.layout.clear();
        self.animation = None;
        self.tracker.cancel();
        self.offset = 0;
    }

    pub fn set_viewport_height(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn layout(&self) -> &MonthLayout {
        &self.layout
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut ScrollTracker {
        &mut self.tracker
    }

    pub fn max_offset(&self) -> u16 {
        self.layout.max_offset(self.viewport_height)
    }

    /// Move the viewport by `delta` rows, stopping any animation
    ///
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.animation = None;
        let target = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32) as u16;
        self.set_offset(target)
    }

    fn set_offset(&mut self, offset: u16) -> bool {
        let offset = offset.min(self.max_offset());
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }

    /// Center month `index` immediately
    ///
    /// Returns true if the offset changed; false also when the month is not
    /// mounted.
    pub fn center_on(&mut self, index: usize) -> bool {
        self.animation = None;
        match self.layout.centered_offset(index, self.viewport_height) {
            Some(offset) => self.set_offset(offset),
            None => false,
        }
    }

    /// Start a smooth scroll that ends with month `index` centered
    ///
    /// Returns false when the month is not mounted or already centered.
    pub fn animate_to(&mut self, index: usize, now: Instant, duration: Duration) -> bool {
        let Some(target) = self.layout.centered_offset(index, self.viewport_height) else {
            return false;
        };
        if target == self.offset {
            self.animation = None;
            return false;
        }
        self.animation = Some(ScrollAnimation::new(self.offset, target, now, duration));
        true
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the animation to `now`
    ///
    /// Returns true if the offset moved.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let changed = self.set_offset(animation.offset_at(now));
        if animation.is_finished(now) {
            self.animation = None;
        }
        changed
    }

    /// Month nearest the viewport center
    pub fn centered_month(&self) -> Option<usize> {
        centered_month(&self.layout, self.offset, self.viewport_height)
    }

    /// Months intersecting the viewport
    pub fn visible_months(&self) -> impl Iterator<Item = (usize, MonthExtent)> + '_ {
        self.layout.visible(self.offset, self.viewport_height)
    }

    /// Month under viewport row `row`, with the row index inside its section
    pub fn month_at_viewport_row(&self, row: u16) -> Option<(usize, MonthExtent, u16)> {
        if row >= self.viewport_height {
            return None;
        }
        let content_row = self.offset.saturating_add(row);
        self.layout
            .month_at_row(content_row)
            .map(|(index, extent)| (index, extent, content_row - extent.top))
    }
}
