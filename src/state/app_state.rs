//! Main application state and the single-active-timer state machine

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
    config::{BREAK_MINUTES, FOCUS_MINUTES, TICK_INTERVAL},
    tray::{IconState, MenuSlot, TrayPresenter},
    utils::{format_remaining, format_uptime},
};

use super::{ActiveSession, SessionCounters, SessionKind, StatusSnapshot, TimerSession};

/// Result of a scheduler tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session was running; nothing changed
    Idle,
    /// Countdown moved on and is still above zero
    Running { remaining_ms: u64 },
    /// Countdown hit zero and the session was recorded
    Completed(SessionKind),
}

/// Owns the active session, the counters and the tray it keeps in sync
#[derive(Debug)]
pub struct AppState<T: TrayPresenter> {
    session: Option<TimerSession>,
    counters: SessionCounters,
    tray: T,
    start_time: Instant,
}

impl<T: TrayPresenter> AppState<T> {
    /// Create idle state and push the initial presentation to the tray
    pub fn new(tray: T) -> Self {
        let mut state = Self {
            session: None,
            counters: SessionCounters::new(),
            tray,
            start_time: Instant::now(),
        };
        state.reset_display();
        state.refresh_label(MenuSlot::Finished);
        state.refresh_label(MenuSlot::Cancelled);
        state.refresh_label(MenuSlot::Breaks);
        state
    }

    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    pub fn session(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Remaining countdown, zero when idle
    pub fn remaining_ms(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.remaining_ms)
    }

    pub fn tray(&self) -> &T {
        &self.tray
    }

    pub fn tray_mut(&mut self) -> &mut T {
        &mut self.tray
    }

    /// Begin a countdown, cancelling whatever was running first
    pub fn start(&mut self, minutes: u64, kind: SessionKind) {
        self.cancel();

        let session = TimerSession::new(minutes, kind);
        info!("Starting {} session for {} minutes", kind, minutes);
        self.session = Some(session);

        self.show_icon(IconState::InProgress);
    }

    pub fn start_focus(&mut self) {
        self.start(FOCUS_MINUTES, SessionKind::Focus);
    }

    pub fn start_break(&mut self) {
        self.start(BREAK_MINUTES, SessionKind::Break);
    }

    /// Advance the active countdown by one tick interval
    pub fn tick(&mut self) -> TickOutcome {
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Idle;
        };

        let kind = session.kind;
        let remaining_ms = session.advance(TICK_INTERVAL.as_millis() as u64);
        let title = format_remaining(remaining_ms);
        debug!("Tick: {} remaining", title);
        self.show_title(&title);

        if remaining_ms == 0 {
            self.complete(kind);
            TickOutcome::Completed(kind)
        } else {
            TickOutcome::Running { remaining_ms }
        }
    }

    /// Drop the active session. Interrupted focus sessions count as
    /// cancelled; interrupted breaks are discarded silently.
    pub fn cancel(&mut self) -> Option<SessionKind> {
        let session = self.session.take()?;

        if session.is_break() {
            info!(
                "Break interrupted with {} remaining",
                format_remaining(session.remaining_ms)
            );
        } else {
            let total = self.counters.record_cancelled();
            info!(
                "Focus session cancelled with {} remaining ({} cancelled so far)",
                format_remaining(session.remaining_ms),
                total
            );
            self.refresh_label(MenuSlot::Cancelled);
        }

        self.reset_display();
        Some(session.kind)
    }

    /// Point-in-time view for status output
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            counters: self.counters,
            active: self.session.as_ref().map(|s| ActiveSession {
                kind: s.kind,
                remaining: format_remaining(s.remaining_ms),
                remaining_ms: s.remaining_ms,
                total_seconds: s.total_seconds,
                started_at: s.started_at,
            }),
            uptime: format_uptime(self.start_time.elapsed()),
            timestamp: Utc::now(),
        }
    }

    fn complete(&mut self, kind: SessionKind) {
        self.session = None;

        match kind {
            SessionKind::Break => {
                let total = self.counters.record_break();
                info!("Break finished ({} breaks so far)", total);
                self.refresh_label(MenuSlot::Breaks);
            }
            SessionKind::Focus => {
                let total = self.counters.record_finished();
                info!("Focus session finished ({} finished so far)", total);
                self.refresh_label(MenuSlot::Finished);
            }
        }

        self.reset_display();
    }

    fn reset_display(&mut self) {
        self.show_icon(IconState::Default);
        self.show_title(&format_remaining(0));
    }

    fn refresh_label(&mut self, slot: MenuSlot) {
        let text = match slot {
            MenuSlot::Finished => self.counters.finished_label(),
            MenuSlot::Cancelled => self.counters.cancelled_label(),
            MenuSlot::Breaks => self.counters.breaks_label(),
        };
        if let Err(e) = self.tray.set_menu_label(slot, &text) {
            warn!("Failed to update menu label: {}", e);
        }
    }

    fn show_icon(&mut self, icon: IconState) {
        if let Err(e) = self.tray.set_icon(icon) {
            warn!("Failed to set tray icon: {}", e);
        }
    }

    fn show_title(&mut self, text: &str) {
        if let Err(e) = self.tray.set_title(text) {
            warn!("Failed to set tray title: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tray::{RecordingTray, TrayCall};

    fn fresh() -> AppState<RecordingTray> {
        let mut state = AppState::new(RecordingTray::new());
        state.tray_mut().clear();
        state
    }

    #[test]
    fn new_state_renders_defaults() {
        let state = AppState::new(RecordingTray::new());
        let tray = state.tray();
        assert_eq!(tray.last_icon(), Some(IconState::Default));
        assert_eq!(tray.last_title(), Some("00:00"));
        assert_eq!(tray.last_label(MenuSlot::Finished), Some("Finished: 0"));
        assert_eq!(tray.last_label(MenuSlot::Cancelled), Some("Cancelled: 0"));
        assert_eq!(tray.last_label(MenuSlot::Breaks), Some("Breaks: 0"));
        assert!(!state.is_running());
    }

    #[test]
    fn start_sets_in_progress_icon_and_full_countdown() {
        let mut state = fresh();
        state.start(5, SessionKind::Focus);
        assert_eq!(state.remaining_ms(), 300_000);
        assert_eq!(state.tray().calls, vec![TrayCall::Icon(IconState::InProgress)]);
    }

    #[test]
    fn cancel_focus_counts_once() {
        for minutes in [1, 7, 30, 120] {
            let mut state = fresh();
            state.start(minutes, SessionKind::Focus);
            assert_eq!(state.cancel(), Some(SessionKind::Focus));
            let counters = state.counters();
            assert_eq!((counters.finished, counters.cancelled, counters.breaks), (0, 1, 0));
            assert_eq!(state.tray().last_label(MenuSlot::Cancelled), Some("Cancelled: 1"));
            assert_eq!(state.tray().last_title(), Some("00:00"));
            assert_eq!(state.tray().last_icon(), Some(IconState::Default));
        }
    }

    #[test]
    fn cancel_break_is_not_counted() {
        for minutes in [1, 10, 45] {
            let mut state = fresh();
            state.start(minutes, SessionKind::Break);
            state.tick();
            assert_eq!(state.cancel(), Some(SessionKind::Break));
            assert_eq!(state.counters(), SessionCounters::default());
            assert_eq!(state.tray().last_label(MenuSlot::Cancelled), None);
            assert_eq!(state.tray().last_title(), Some("00:00"));
        }
    }

    #[test]
    fn cancel_when_idle_is_noop() {
        let mut state = fresh();
        assert_eq!(state.cancel(), None);
        assert_eq!(state.counters(), SessionCounters::default());
        assert!(state.tray().calls.is_empty());
    }

    #[test]
    fn tick_when_idle_does_nothing() {
        let mut state = fresh();
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert!(state.tray().calls.is_empty());
    }

    #[test]
    fn tick_updates_title() {
        let mut state = fresh();
        state.start(1, SessionKind::Focus);
        assert_eq!(state.tick(), TickOutcome::Running { remaining_ms: 59_000 });
        assert_eq!(state.tray().last_title(), Some("00:59"));
    }

    #[test]
    fn focus_completes_after_full_countdown() {
        for minutes in [1, 2, 5] {
            let mut state = fresh();
            state.start(minutes, SessionKind::Focus);
            let ticks = minutes * 60;
            for _ in 1..ticks {
                assert!(matches!(state.tick(), TickOutcome::Running { .. }));
            }
            assert_eq!(state.tick(), TickOutcome::Completed(SessionKind::Focus));
            assert!(!state.is_running());
            assert_eq!(state.remaining_ms(), 0);
            let counters = state.counters();
            assert_eq!((counters.finished, counters.cancelled, counters.breaks), (1, 0, 0));
            assert_eq!(state.tray().last_label(MenuSlot::Finished), Some("Finished: 1"));
        }
    }

    #[test]
    fn break_completion_counts_as_break() {
        let mut state = fresh();
        state.start(1, SessionKind::Break);
        for _ in 0..60 {
            state.tick();
        }
        let counters = state.counters();
        assert_eq!((counters.finished, counters.cancelled, counters.breaks), (0, 0, 1));
        assert_eq!(state.tray().last_label(MenuSlot::Breaks), Some("Breaks: 1"));
        assert_eq!(state.tray().last_icon(), Some(IconState::Default));
    }

    #[test]
    fn restart_cancels_running_focus() {
        let mut state = fresh();
        state.start_focus();
        state.tick();
        state.start_break();
        let counters = state.counters();
        assert_eq!(counters.cancelled, 1);
        assert_eq!(state.session().map(|s| s.kind), Some(SessionKind::Break));
        assert_eq!(state.remaining_ms(), 600_000);
    }

    #[test]
    fn restart_over_break_is_silent() {
        let mut state = fresh();
        state.start_break();
        state.start_focus();
        assert_eq!(state.counters(), SessionCounters::default());
        assert_eq!(state.session().map(|s| s.kind), Some(SessionKind::Focus));
        assert_eq!(state.tray().last_icon(), Some(IconState::InProgress));
    }

    #[test]
    fn presenter_failures_do_not_affect_state() {
        let mut state = AppState::new(RecordingTray::failing());
        state.start(1, SessionKind::Focus);
        for _ in 0..60 {
            state.tick();
        }
        assert_eq!(state.counters().finished, 1);
        assert!(!state.is_running());
    }

    #[test]
    fn snapshot_reports_active_session() {
        let mut state = fresh();
        state.start(2, SessionKind::Break);
        state.tick();
        let snapshot = state.snapshot();
        let active = snapshot.active.unwrap();
        assert_eq!(active.kind, SessionKind::Break);
        assert_eq!(active.remaining, "01:59");
        assert_eq!(active.total_seconds, 120);
        assert_eq!(snapshot.counters, SessionCounters::default());
    }
}
