//! Single-selection decision panel — swap transitions with cancellation.
//!
//! The selection always refers to exactly one record in the supplied
//! sequence, initialized to the first. A selection change runs a fixed-length
//! swap: the outgoing panel fades out, then the incoming panel fades in, with
//! at most one panel exiting and one entering at any instant. A `select`
//! arriving mid-swap replaces the transition outright — the most recent
//! request wins, nothing is queued.

/// Total swap length in seconds; the first half is the exit fade, the second
/// half the enter fade.
const SWAP_SECS: f64 = 0.30;

/// Seconds for metric bars to fill from empty once the panel is settled and
/// within the viewport.
const BAR_FILL_SECS: f64 = 0.90;

/// Current transition, replaced wholesale on every selection change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Idle,
    Swapping { from: usize, to: usize, elapsed: f64 },
}

#[derive(Debug, Clone)]
pub struct DecisionSelector {
    count: usize,
    selected: usize,
    transition: Transition,
    bar_fill: f64,
    in_view: bool,
}

impl DecisionSelector {
    /// `count` is the length of the record sequence; must be non-zero.
    pub fn new(count: usize) -> Self {
        debug_assert!(count > 0, "decision sequence must be non-empty");
        Self {
            count: count.max(1),
            selected: 0,
            transition: Transition::Idle,
            bar_fill: 0.0,
            in_view: false,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index of the selected record. Never out of range.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a record by index. Re-selecting the active record is a no-op;
    /// otherwise the current transition (in-flight or not) is cancelled and a
    /// new exit/enter pair begins from whatever is on screen this frame.
    /// Out-of-range indices are rejected by construction upstream; only
    /// indices drawn from the record sequence reach this method.
    pub fn select(&mut self, idx: usize) {
        debug_assert!(idx < self.count, "selection outside record sequence");
        if idx >= self.count || idx == self.selected {
            return;
        }
        let from = self.visible();
        self.selected = idx;
        self.transition = Transition::Swapping {
            from,
            to: idx,
            elapsed: 0.0,
        };
        self.bar_fill = 0.0;
    }

    pub fn select_next(&mut self) {
        self.select((self.selected + 1) % self.count);
    }

    pub fn select_prev(&mut self) {
        self.select((self.selected + self.count - 1) % self.count);
    }

    /// Whether the decisions slot is currently within the viewport; metric
    /// bars only fill while it is.
    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    /// Advance the swap and, once settled and in view, the metric bar fill.
    pub fn tick(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        if let Transition::Swapping { elapsed, .. } = &mut self.transition {
            *elapsed += dt;
            if *elapsed >= SWAP_SECS {
                self.transition = Transition::Idle;
            }
        }
        if self.transition == Transition::Idle && self.in_view {
            self.bar_fill = (self.bar_fill + dt / BAR_FILL_SECS).min(1.0);
        }
    }

    /// Record index shown this frame: the outgoing record during the exit
    /// phase, the incoming one from the enter phase onward.
    pub fn visible(&self) -> usize {
        match self.transition {
            Transition::Idle => self.selected,
            Transition::Swapping { from, to, elapsed } => {
                if elapsed < SWAP_SECS / 2.0 {
                    from
                } else {
                    to
                }
            }
        }
    }

    /// Fade factor for the visible panel: 1.0 when steady, falling to 0
    /// through the exit phase, rising back to 1 through the enter phase.
    pub fn panel_alpha(&self) -> f64 {
        match self.transition {
            Transition::Idle => 1.0,
            Transition::Swapping { elapsed, .. } => {
                let half = SWAP_SECS / 2.0;
                if elapsed < half {
                    1.0 - elapsed / half
                } else {
                    ((elapsed - half) / half).min(1.0)
                }
            }
        }
    }

    pub fn is_swapping(&self) -> bool {
        self.transition != Transition::Idle
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Animated fill fraction for a metric bar targeting `pct` percent.
    pub fn bar_fraction(&self, pct: u8) -> f64 {
        self.bar_fill * f64::from(pct.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settle(sel: &mut DecisionSelector) {
        for _ in 0..20 {
            sel.tick(0.05);
        }
    }

    #[test]
    fn initial_selection_is_first_record() {
        let sel = DecisionSelector::new(3);
        assert_eq!(sel.selected(), 0);
        assert_eq!(sel.visible(), 0);
        assert_eq!(sel.transition(), Transition::Idle);
    }

    #[test]
    fn reselecting_active_record_is_a_noop() {
        let mut sel = DecisionSelector::new(3);
        sel.select(0);
        assert_eq!(sel.transition(), Transition::Idle);
        assert_eq!(sel.panel_alpha(), 1.0);
    }

    #[test]
    fn swap_runs_exit_then_enter() {
        let mut sel = DecisionSelector::new(3);
        sel.select(1);
        // Exit phase: outgoing record still visible, fading out.
        sel.tick(0.05);
        assert_eq!(sel.visible(), 0);
        assert!(sel.panel_alpha() < 1.0);
        // Enter phase: incoming record visible, fading in.
        sel.tick(0.15);
        assert_eq!(sel.visible(), 1);
        assert!(sel.panel_alpha() < 1.0);
        // Settled.
        settle(&mut sel);
        assert_eq!(sel.transition(), Transition::Idle);
        assert_eq!(sel.visible(), 1);
        assert_eq!(sel.panel_alpha(), 1.0);
    }

    #[test]
    fn select_midflight_cancels_and_latest_wins() {
        let mut sel = DecisionSelector::new(3);
        sel.select(1);
        sel.tick(0.05); // still in the exit phase, record 0 on screen
        sel.select(2);
        match sel.transition() {
            Transition::Swapping { from, to, elapsed } => {
                assert_eq!(from, 0); // new pair starts from what is on screen
                assert_eq!(to, 2);
                assert_eq!(elapsed, 0.0);
            }
            Transition::Idle => panic!("expected a fresh swap"),
        }
        settle(&mut sel);
        assert_eq!(sel.visible(), 2);
        assert_eq!(sel.selected(), 2);
        assert!(!sel.is_swapping()); // no residual animation for 1
    }

    #[test]
    fn select_during_enter_phase_exits_from_new_record() {
        let mut sel = DecisionSelector::new(3);
        sel.select(1);
        sel.tick(0.20); // enter phase, record 1 on screen
        sel.select(2);
        match sel.transition() {
            Transition::Swapping { from, to, .. } => {
                assert_eq!(from, 1);
                assert_eq!(to, 2);
            }
            Transition::Idle => panic!("expected a fresh swap"),
        }
    }

    #[test]
    fn bars_fill_only_when_settled_and_in_view() {
        let mut sel = DecisionSelector::new(3);
        assert_eq!(sel.bar_fraction(100), 0.0);

        // Out of view: no fill.
        settle(&mut sel);
        assert_eq!(sel.bar_fraction(100), 0.0);

        // In view but mid-swap: still no fill.
        sel.set_in_view(true);
        sel.select(1);
        sel.tick(0.05);
        assert_eq!(sel.bar_fraction(100), 0.0);

        // Settled and in view: fills to the record's percentages.
        settle(&mut sel);
        for _ in 0..40 {
            sel.tick(0.05);
        }
        assert!((sel.bar_fraction(100) - 1.0).abs() < 1e-9);
        assert!((sel.bar_fraction(45) - 0.45).abs() < 1e-9);
    }

    #[test]
    fn selecting_resets_bar_fill() {
        let mut sel = DecisionSelector::new(3);
        sel.set_in_view(true);
        for _ in 0..40 {
            sel.tick(0.05);
        }
        assert!(sel.bar_fraction(100) > 0.9);
        sel.select(1);
        assert_eq!(sel.bar_fraction(100), 0.0);
    }

    proptest! {
        #[test]
        fn arbitrary_select_sequences_keep_invariants(
            picks in proptest::collection::vec(0usize..3, 1..20),
            dts in proptest::collection::vec(0.0..0.2f64, 1..20),
        ) {
            let mut sel = DecisionSelector::new(3);
            for (pick, dt) in picks.iter().zip(dts.iter().cycle()) {
                sel.select(*pick);
                sel.tick(*dt);
                // Single-selection invariant: always one valid record.
                prop_assert!(sel.selected() < 3);
                prop_assert!(sel.visible() < 3);
                prop_assert!((0.0..=1.0).contains(&sel.panel_alpha()));
            }
            // Most recent request wins.
            prop_assert_eq!(sel.selected(), *picks.last().unwrap());
            for _ in 0..20 {
                sel.tick(0.05);
            }
            prop_assert_eq!(sel.visible(), *picks.last().unwrap());
            prop_assert!(!sel.is_swapping());
        }
    }
}
