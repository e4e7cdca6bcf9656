//! # Section Controller
//!
//! Single source of truth for which section is active, and the only component
//! that issues scroll requests. Every move into [`Section::Result`] passes the
//! gate: a prediction result must be present or a run must be in flight.
//! Backward moves are never gated.

use std::sync::Arc;
use tracing::{debug, warn};

use super::{Notice, Notifier, ScrollSurface, SectionLayout};
use crate::domain::{PredictionResult, Section};

/// What a scroll observation did to the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Unchanged,
    Settled(Section),
    /// The viewport drifted onto a gated result section and was sent back to
    /// the simulator.
    Corrected,
}

pub struct SectionController {
    current: Section,
    loading: bool,
    result: Option<PredictionResult>,
    layout: SectionLayout,
    surface: Arc<dyn ScrollSurface>,
    notifier: Arc<dyn Notifier>,
}

impl SectionController {
    pub fn new(
        layout: SectionLayout,
        surface: Arc<dyn ScrollSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            current: Section::Intro,
            loading: false,
            result: None,
            layout,
            surface,
            notifier,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.layout = layout;
    }

    /// Keeps a viewport-tracking layout in step with the viewport height.
    pub fn resize_viewport(&mut self, viewport_height: f64) {
        self.layout.fit_viewport(viewport_height);
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_result(&mut self, result: Option<PredictionResult>) {
        self.result = result;
    }

    pub fn can_enter_result(&self) -> bool {
        self.result.is_some() || self.loading
    }

    /// Moves to `index` (clamped to the valid range) and scrolls there.
    /// Returns `false` without side effects if the gate refuses entry to the
    /// result section.
    pub fn go_to(&mut self, index: i64) -> bool {
        let target = Section::from_index_clamped(index);
        if target == Section::Result && self.current != Section::Result && !self.can_enter_result()
        {
            warn!(from = %self.current, "navigation into result refused");
            return false;
        }
        debug!(from = %self.current, to = %target, "navigating");
        self.surface.smooth_scroll_to(self.layout.offset_of(target));
        self.current = target;
        true
    }

    /// Forward one section. A gated refusal raises [`Notice::EnterSimulationInfo`].
    pub fn advance(&mut self) -> bool {
        if self.current.is_last() {
            return false;
        }
        let accepted = self.go_to(self.current.index() as i64 + 1);
        if !accepted {
            self.notifier.notify(Notice::EnterSimulationInfo);
        }
        accepted
    }

    pub fn retreat(&mut self) -> bool {
        if self.current.is_first() {
            return false;
        }
        self.go_to(self.current.index() as i64 - 1)
    }

    /// Reconciles the active section with the scroll position.
    pub fn observe_scroll(&mut self, scroll_offset: f64, viewport_height: f64) -> ScrollOutcome {
        self.layout.fit_viewport(viewport_height);
        let visible = self.layout.most_visible(scroll_offset, viewport_height);

        if visible == Section::Result && !self.can_enter_result() {
            debug!(scroll_offset, "scroll drifted onto gated result section");
            self.surface
                .smooth_scroll_to(self.layout.offset_of(Section::Simulator));
            self.current = Section::Simulator;
            return ScrollOutcome::Corrected;
        }

        if visible == self.current {
            return ScrollOutcome::Unchanged;
        }
        debug!(from = %self.current, to = %visible, "scroll settled on section");
        self.current = visible;
        ScrollOutcome::Settled(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{MockNotifier, MockScrollSurface};
    use mockall::predicate::eq;
    use proptest::prelude::*;
    use rstest::rstest;

    const VH: f64 = 1000.0;

    fn controller(surface: MockScrollSurface, notifier: MockNotifier) -> SectionController {
        SectionController::new(
            SectionLayout::full_viewport(VH),
            Arc::new(surface),
            Arc::new(notifier),
        )
    }

    fn permissive() -> SectionController {
        let mut surface = MockScrollSurface::new();
        surface.expect_smooth_scroll_to().return_const(());
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().return_const(());
        controller(surface, notifier)
    }

    fn sample_result() -> PredictionResult {
        PredictionResult {
            energy_without_system: 100.0,
            energy_with_system: 80.0,
            savings_percent: 20.0,
            daily_series: vec![],
            monthly_series: vec![],
        }
    }

    #[test]
    fn test_initial_state() {
        let c = permissive();
        assert_eq!(c.current(), Section::Intro);
        assert!(!c.loading());
        assert!(c.result().is_none());
        assert!(!c.can_enter_result());
    }

    #[rstest]
    #[case(-5, Section::Intro)]
    #[case(1, Section::BuildingInfo)]
    #[case(2, Section::Simulator)]
    fn test_go_to_clamps_low_and_in_range(#[case] index: i64, #[case] expected: Section) {
        let mut c = permissive();
        assert!(c.go_to(index));
        assert_eq!(c.current(), expected);
    }

    #[test]
    fn test_go_to_clamps_high_once_gate_open() {
        let mut c = permissive();
        c.set_result(Some(sample_result()));
        assert!(c.go_to(99));
        assert_eq!(c.current(), Section::Result);
    }

    #[test]
    fn test_go_to_scrolls_to_target_offset() {
        let mut surface = MockScrollSurface::new();
        surface
            .expect_smooth_scroll_to()
            .with(eq(2000.0))
            .times(1)
            .return_const(());
        let mut c = controller(surface, MockNotifier::new());
        assert!(c.go_to(2));
    }

    #[test]
    fn test_advance_from_simulator_refused_with_notice() {
        let mut surface = MockScrollSurface::new();
        surface
            .expect_smooth_scroll_to()
            .with(eq(2000.0))
            .times(1)
            .return_const(());
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notice::EnterSimulationInfo))
            .times(1)
            .return_const(());
        let mut c = controller(surface, notifier);
        c.go_to(2);

        assert!(!c.advance());
        assert_eq!(c.current(), Section::Simulator);
    }

    #[test]
    fn test_advance_from_simulator_allowed_while_loading() {
        let mut c = permissive();
        c.go_to(2);
        c.set_loading(true);
        assert!(c.advance());
        assert_eq!(c.current(), Section::Result);
    }

    #[test]
    fn test_advance_at_result_is_noop() {
        let mut c = permissive();
        c.set_result(Some(sample_result()));
        c.go_to(3);
        assert!(!c.advance());
        assert_eq!(c.current(), Section::Result);
    }

    #[test]
    fn test_retreat_is_never_gated() {
        let mut c = permissive();
        c.set_loading(true);
        c.go_to(3);
        c.set_loading(false);
        assert!(!c.can_enter_result());
        assert!(c.retreat());
        assert_eq!(c.current(), Section::Simulator);
        assert!(c.retreat());
        assert!(c.retreat());
        assert_eq!(c.current(), Section::Intro);
        assert!(!c.retreat());
    }

    #[test]
    fn test_observe_scroll_settles_on_most_visible() {
        let mut c = permissive();
        assert_eq!(c.observe_scroll(1100.0, VH), ScrollOutcome::Settled(Section::BuildingInfo));
        assert_eq!(c.observe_scroll(1200.0, VH), ScrollOutcome::Unchanged);
        assert_eq!(c.current(), Section::BuildingInfo);
    }

    #[test]
    fn test_observe_scroll_corrects_gated_drift() {
        let mut surface = MockScrollSurface::new();
        surface
            .expect_smooth_scroll_to()
            .with(eq(2000.0))
            .times(2)
            .return_const(());
        let mut c = controller(surface, MockNotifier::new());
        c.go_to(2);

        assert_eq!(c.observe_scroll(2900.0, VH), ScrollOutcome::Corrected);
        assert_eq!(c.current(), Section::Simulator);
    }

    #[test]
    fn test_observe_scroll_allows_result_while_loading() {
        let mut c = permissive();
        c.go_to(2);
        c.set_loading(true);
        assert_eq!(c.observe_scroll(3000.0, VH), ScrollOutcome::Settled(Section::Result));
    }

    #[test]
    fn test_observe_scroll_refits_layout_on_new_viewport() {
        let mut c = permissive();
        c.observe_scroll(0.0, 800.0);
        assert_eq!(c.layout().offset_of(Section::Simulator), 1600.0);
    }

    proptest! {
        #[test]
        fn prop_go_to_always_lands_in_range(index in any::<i64>()) {
            let mut c = permissive();
            c.set_loading(true);
            prop_assert!(c.go_to(index));
            let expected = if index < 0 { 0 } else { index.min(3) as usize };
            prop_assert_eq!(c.current().index(), expected);
        }

        #[test]
        fn prop_refused_moves_never_change_section(start in 0i64..3, offset in 0.0f64..4000.0) {
            let mut c = permissive();
            c.go_to(start);
            let before = c.current();
            if !c.go_to(3) {
                prop_assert_eq!(c.current(), before);
            }
            c.observe_scroll(offset, VH);
            prop_assert_ne!(c.current(), Section::Result);
        }
    }
}
