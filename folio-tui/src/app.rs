//! Application state — single-owner, main-thread only.
//!
//! Each of the three state machines owns its state exclusively; the app
//! composes them and feeds them viewport geometry once per frame.

use folio_core::{Catalog, DecisionSelector, NavDisclosure, ScrollProgressTracker, Section};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Below this many page rows the layout degenerates (the nav overlay alone
/// needs nine); a warning is shown until the terminal grows back.
const MIN_VIEWPORT_ROWS: usize = 9;

/// Top-level application state.
pub struct AppState {
    pub catalog: Catalog,

    // The three state machines.
    pub scroll: ScrollProgressTracker,
    pub nav: NavDisclosure,
    pub decisions: DecisionSelector,

    // Page geometry, refreshed every frame from the rendered line count.
    pub scroll_offset: usize,
    pub viewport_height: usize,
    pub page_height: usize,
    pub section_offsets: Vec<(Section, usize)>,

    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let decisions = DecisionSelector::new(catalog.decisions.len());
        Self {
            catalog,
            scroll: ScrollProgressTracker::new(),
            nav: NavDisclosure::new(),
            decisions,
            scroll_offset: 0,
            viewport_height: 0,
            page_height: 0,
            section_offsets: Vec::new(),
            status_message: None,
            running: true,
        }
    }

    /// Total scrollable height in lines; 0 when the page fits the viewport.
    pub fn max_scroll(&self) -> usize {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Refresh page geometry. Called before every tick so a resize is
    /// accounted for before the next progress sample.
    pub fn set_layout(
        &mut self,
        page_height: usize,
        viewport_height: usize,
        section_offsets: Vec<(Section, usize)>,
    ) {
        self.page_height = page_height;
        self.viewport_height = viewport_height;
        self.section_offsets = section_offsets;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.scroll.set_max_scroll(self.max_scroll() as f64);
        self.scroll.set_offset(self.scroll_offset as f64);

        if viewport_height < MIN_VIEWPORT_ROWS {
            self.set_warning("terminal too small — enlarge to see the page");
        } else if matches!(self.status_message, Some((_, StatusLevel::Warning))) {
            self.status_message = None;
        }
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_scroll());
        self.scroll.set_offset(self.scroll_offset as f64);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_to(next);
    }

    pub fn half_page(&self) -> isize {
        (self.viewport_height / 2).max(1) as isize
    }

    /// Anchor jump: an instant offset change to the section's start line,
    /// the platform-native equivalent of following an in-page anchor.
    pub fn jump_to(&mut self, section: Section) {
        if let Some(&(_, offset)) = self
            .section_offsets
            .iter()
            .find(|(s, _)| *s == section)
        {
            self.scroll_to(offset);
        }
    }

    /// Section whose start line is nearest above the scroll offset. At the
    /// very bottom the last section is active even when its start line sits
    /// below the maximum scroll offset.
    pub fn active_section(&self) -> Section {
        if self.max_scroll() > 0 && self.scroll_offset >= self.max_scroll() {
            if let Some((section, _)) = self.section_offsets.last() {
                return *section;
            }
        }
        self.section_offsets
            .iter()
            .rev()
            .find(|(_, offset)| *offset <= self.scroll_offset)
            .map(|(section, _)| *section)
            .unwrap_or(Section::Profile)
    }

    /// Whether the Decisions section overlaps the current viewport.
    pub fn decisions_in_view(&self) -> bool {
        let Some(idx) = self
            .section_offsets
            .iter()
            .position(|(s, _)| *s == Section::Decisions)
        else {
            return false;
        };
        let start = self.section_offsets[idx].1;
        let end = self
            .section_offsets
            .get(idx + 1)
            .map(|(_, offset)| *offset)
            .unwrap_or(self.page_height);
        let view_start = self.scroll_offset;
        let view_end = self.scroll_offset + self.viewport_height;
        start < view_end && end > view_start
    }

    /// Advance all three machines one frame.
    pub fn tick(&mut self, dt: f64) {
        self.scroll.tick(dt);
        self.nav.tick(dt);
        self.decisions.set_in_view(self.decisions_in_view());
        self.decisions.tick(dt);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
