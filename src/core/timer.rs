//! Timer state machine.
//!
//! Pure state: no clocks, no I/O. The event loop feeds it ticks, key
//! events, and (for clock mode) fresh wall-clock readings, and reads
//! back the fields to display. `Stopped` is final; events applied
//! afterwards do nothing.

/// How the displayed seconds move per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    /// Fixed duration, runs to zero.
    Countdown,
    /// Open ended, counts up from zero.
    CountUp,
    /// Mirrors the wall clock; resynchronized every tick rather than
    /// incremented, so it self-corrects after a slow redraw.
    Clock,
}

/// Whether the timer is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Working,
    Paused,
    Stopped,
}

/// Events the state machine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed.
    Tick,
    /// The space key.
    TogglePause,
    /// The quit key or a termination signal.
    Quit,
}

/// Displayed seconds, phase, and worked-time accounting.
#[derive(Debug, Clone)]
pub struct TimerState {
    mode: TimerMode,
    phase: Phase,
    /// Remaining (countdown), elapsed (count-up), or seconds of day
    /// (clock).
    seconds: u64,
    /// Ticks accepted while working, in any mode.
    worked_seconds: u64,
}

impl TimerState {
    /// Countdown over a fixed number of minutes.
    pub fn countdown(minutes: u64) -> Self {
        Self {
            mode: TimerMode::Countdown,
            phase: Phase::Working,
            seconds: minutes * 60,
            worked_seconds: 0,
        }
    }

    /// Open-ended count-up from zero.
    pub fn count_up() -> Self {
        Self {
            mode: TimerMode::CountUp,
            phase: Phase::Working,
            seconds: 0,
            worked_seconds: 0,
        }
    }

    /// Wall-clock mirror, seeded with the current seconds of day.
    pub fn clock(seconds_of_day: u64) -> Self {
        Self {
            mode: TimerMode::Clock,
            phase: Phase::Working,
            seconds: seconds_of_day,
            worked_seconds: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    pub fn worked_seconds(&self) -> u64 {
        self.worked_seconds
    }

    /// Replace the displayed value with a fresh wall-clock reading.
    /// Clock mode only; paused and stopped timers keep their frozen
    /// value.
    pub fn sync_to(&mut self, seconds_of_day: u64) {
        if self.mode == TimerMode::Clock && self.phase == Phase::Working {
            self.seconds = seconds_of_day;
        }
    }

    /// Apply one event, exhaustively over phase x event.
    pub fn apply(&mut self, event: TimerEvent) {
        match (self.phase, event) {
            (Phase::Stopped, _) => {}
            (Phase::Working, TimerEvent::Tick) => {
                self.worked_seconds += 1;
                match self.mode {
                    TimerMode::Countdown => {
                        self.seconds = self.seconds.saturating_sub(1);
                        if self.seconds == 0 {
                            self.phase = Phase::Stopped;
                        }
                    }
                    TimerMode::CountUp => self.seconds += 1,
                    // value arrives via sync_to
                    TimerMode::Clock => {}
                }
            }
            (Phase::Paused, TimerEvent::Tick) => {}
            (Phase::Working, TimerEvent::TogglePause) => self.phase = Phase::Paused,
            (Phase::Paused, TimerEvent::TogglePause) => self.phase = Phase::Working,
            (_, TimerEvent::Quit) => self.phase = Phase::Stopped,
        }
    }

    /// (hours, minutes, seconds) for display. Hours saturate at 99 to
    /// fit the two-digit field.
    pub fn display_fields(&self) -> (u8, u8, u8) {
        let h = (self.seconds / 3600).min(99) as u8;
        let m = ((self.seconds % 3600) / 60) as u8;
        let s = (self.seconds % 60) as u8;
        (h, m, s)
    }

    /// Text for the mode-label line.
    pub fn label(&self) -> &'static str {
        match (self.phase, self.mode) {
            (Phase::Paused, _) => "[ paused ]",
            (_, TimerMode::Countdown) => "[ countdown ]",
            (_, TimerMode::CountUp) => "[ count-up ]",
            (_, TimerMode::Clock) => "[ clock ]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_takes_exactly_a_tick_per_second() {
        let mut state = TimerState::countdown(1);
        let mut ticks = 0;
        while !state.is_stopped() {
            state.apply(TimerEvent::Tick);
            ticks += 1;
            assert!(ticks <= 60, "countdown overran");
        }
        assert_eq!(ticks, 60);
        assert_eq!(state.worked_seconds(), 60);
        assert_eq!(state.display_fields(), (0, 0, 0));
        assert_eq!(state.phase(), Phase::Stopped);
    }

    #[test]
    fn test_double_pause_toggle_changes_nothing() {
        let mut state = TimerState::countdown(30);
        let before = state.display_fields();
        state.apply(TimerEvent::TogglePause);
        state.apply(TimerEvent::TogglePause);
        assert_eq!(state.display_fields(), before);
        assert_eq!(state.phase(), Phase::Working);
    }

    #[test]
    fn test_paused_ticks_advance_nothing() {
        let mut state = TimerState::countdown(30);
        state.apply(TimerEvent::Tick);
        let fields = state.display_fields();
        let worked = state.worked_seconds();

        state.apply(TimerEvent::TogglePause);
        for _ in 0..5 {
            state.apply(TimerEvent::Tick);
        }
        assert_eq!(state.display_fields(), fields);
        assert_eq!(state.worked_seconds(), worked);
        assert_eq!(state.phase(), Phase::Paused);
    }

    #[test]
    fn test_pause_shifts_the_countdown_by_the_paused_ticks() {
        // same number of tick events, 5 of them spent paused
        let mut straight = TimerState::countdown(30);
        for _ in 0..10 {
            straight.apply(TimerEvent::Tick);
        }

        let mut interrupted = TimerState::countdown(30);
        for _ in 0..2 {
            interrupted.apply(TimerEvent::Tick);
        }
        interrupted.apply(TimerEvent::TogglePause);
        for _ in 0..5 {
            interrupted.apply(TimerEvent::Tick);
        }
        interrupted.apply(TimerEvent::TogglePause);
        for _ in 0..3 {
            interrupted.apply(TimerEvent::Tick);
        }

        let (_, _, s_straight) = straight.display_fields();
        let (_, _, s_interrupted) = interrupted.display_fields();
        assert_eq!(u16::from(s_interrupted), u16::from(s_straight) + 5);
        assert_eq!(interrupted.worked_seconds(), straight.worked_seconds() - 5);
    }

    #[test]
    fn test_quit_stops_from_either_phase() {
        let mut working = TimerState::countdown(30);
        working.apply(TimerEvent::Quit);
        assert!(working.is_stopped());

        let mut paused = TimerState::countdown(30);
        paused.apply(TimerEvent::TogglePause);
        paused.apply(TimerEvent::Quit);
        assert!(paused.is_stopped());
    }

    #[test]
    fn test_stopped_is_final() {
        let mut state = TimerState::countdown(30);
        state.apply(TimerEvent::Quit);
        let fields = state.display_fields();
        let worked = state.worked_seconds();

        state.apply(TimerEvent::Tick);
        state.apply(TimerEvent::TogglePause);
        state.apply(TimerEvent::Quit);
        assert_eq!(state.display_fields(), fields);
        assert_eq!(state.worked_seconds(), worked);
        assert!(state.is_stopped());
    }

    #[test]
    fn test_count_up_increments_and_never_stops_by_itself() {
        let mut state = TimerState::count_up();
        for _ in 0..3_700 {
            state.apply(TimerEvent::Tick);
        }
        assert_eq!(state.display_fields(), (1, 1, 40));
        assert_eq!(state.worked_seconds(), 3_700);
        assert_eq!(state.phase(), Phase::Working);
    }

    #[test]
    fn test_clock_follows_sync_not_ticks() {
        // 08:15:30
        let mut state = TimerState::clock(8 * 3600 + 15 * 60 + 30);
        assert_eq!(state.display_fields(), (8, 15, 30));

        // a tick alone moves nothing but the worked counter
        state.apply(TimerEvent::Tick);
        assert_eq!(state.display_fields(), (8, 15, 30));
        assert_eq!(state.worked_seconds(), 1);

        state.sync_to(8 * 3600 + 15 * 60 + 32);
        assert_eq!(state.display_fields(), (8, 15, 32));
    }

    #[test]
    fn test_clock_sync_is_ignored_while_paused() {
        let mut state = TimerState::clock(1_000);
        state.apply(TimerEvent::TogglePause);
        state.sync_to(2_000);
        assert_eq!(state.display_fields(), (0, 16, 40));
    }

    #[test]
    fn test_display_field_mapping() {
        let state = TimerState::clock(3_661);
        assert_eq!(state.display_fields(), (1, 1, 1));

        // hours saturate at the two-digit field
        let state = TimerState::clock(100 * 3600);
        assert_eq!(state.display_fields(), (99, 0, 0));
    }

    #[test]
    fn test_labels_track_phase_and_mode() {
        let mut state = TimerState::countdown(30);
        assert_eq!(state.label(), "[ countdown ]");
        state.apply(TimerEvent::TogglePause);
        assert_eq!(state.label(), "[ paused ]");
        state.apply(TimerEvent::TogglePause);
        assert_eq!(state.label(), "[ countdown ]");

        assert_eq!(TimerState::count_up().label(), "[ count-up ]");
        assert_eq!(TimerState::clock(0).label(), "[ clock ]");
    }
}
