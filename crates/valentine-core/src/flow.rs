//! Flow controller
//!
//! A tagged state plus a pure transition function. The transition returns
//! the next flow together with the side effects the runtime must perform
//! (timers to start or stop, cosmetic bursts), so the whole card can be
//! exercised without a window.
//!
//! ```text
//! Intro ──Continue──▶ Question ──Accept──▶ Countdown ──Tick×N──▶ Accepted
//!   ▲                   │  ▲                                       │
//!   │                   └──┘ Decline                               │
//!   └──────────────────────────── Restart ◀────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use crate::escalation::{accept_scale, decline_scale, nudge_for, DeclineLines, Nudge};

/// Seconds shown on the countdown screen before the card is accepted
pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 5;

/// Which screen the card is on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlowState {
    #[default]
    Intro,
    Question,
    Countdown,
    Accepted,
}

impl FlowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Intro => "intro",
            FlowState::Question => "question",
            FlowState::Countdown => "countdown",
            FlowState::Accepted => "accepted",
        }
    }

    /// Screens that float ambient hearts in the background
    pub fn has_ambient_hearts(&self) -> bool {
        matches!(self, FlowState::Countdown | FlowState::Accepted)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the flow: user actions and timer callbacks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// "Continue" on the intro screen
    Continue,
    /// "Yes" on the question screen
    Accept,
    /// "No" on the question screen
    Decline,
    /// One countdown interval elapsed
    Tick,
    /// "Restart", or an external reset from any screen
    Restart,
    /// The debounced nudge reset fired
    NudgeSettled,
    /// The wiggle animation finished
    JiggleSettled,
}

/// Side effects requested by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Start the once-per-interval countdown timer
    StartCountdown,
    /// Cancel the countdown timer (idempotent)
    StopCountdown,
    /// (Re)schedule the nudge reset, replacing any pending one
    ScheduleNudgeReset,
    /// Drop any pending nudge reset
    CancelNudgeReset,
    /// (Re)schedule the wiggle reset, replacing any pending one
    ScheduleJiggleReset,
    /// Drop any pending wiggle reset
    CancelJiggleReset,
    /// One-shot confetti burst
    Burst,
    /// Vibrate for the given milliseconds, if the device can
    Haptic(u64),
}

/// Complete flow state for one card session.
#[derive(Clone, Debug, PartialEq)]
pub struct Flow {
    state: FlowState,
    seconds_left: u32,
    countdown_from: u32,
    no_count: u32,
    nudge: Nudge,
    jiggle: bool,
    lines: Arc<DeclineLines>,
}

impl Flow {
    pub fn new(lines: DeclineLines, countdown_from: u32) -> Self {
        Self {
            state: FlowState::Intro,
            seconds_left: countdown_from,
            countdown_from,
            no_count: 0,
            nudge: Nudge::ZERO,
            jiggle: false,
            lines: Arc::new(lines),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn no_count(&self) -> u32 {
        self.no_count
    }

    pub fn nudge(&self) -> Nudge {
        self.nudge
    }

    pub fn is_jiggling(&self) -> bool {
        self.jiggle
    }

    pub fn decline_label(&self) -> &str {
        self.lines.label(self.no_count)
    }

    pub fn accept_scale(&self) -> f32 {
        accept_scale(self.no_count)
    }

    pub fn decline_scale(&self) -> f32 {
        decline_scale(self.no_count)
    }

    /// Apply an event in place and return the effects to run.
    pub fn apply(&mut self, event: FlowEvent) -> Vec<Effect> {
        let (next, effects) = transition(self, event);
        *self = next;
        effects
    }

    fn reset(&mut self) {
        self.state = FlowState::Intro;
        self.no_count = 0;
        self.nudge = Nudge::ZERO;
        self.jiggle = false;
        self.seconds_left = self.countdown_from;
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::new(DeclineLines::default(), DEFAULT_COUNTDOWN_SECONDS)
    }
}

/// Pure transition: `(flow, event) -> (flow, effects)`.
///
/// Events that make no sense in the current state leave the flow untouched
/// and produce no effects. In particular a late `Tick` after the countdown
/// was left is ignored.
pub fn transition(flow: &Flow, event: FlowEvent) -> (Flow, Vec<Effect>) {
    let mut next = flow.clone();
    let mut effects = Vec::new();

    match (flow.state, event) {
        (FlowState::Intro, FlowEvent::Continue) => {
            next.state = FlowState::Question;
        }

        (FlowState::Question, FlowEvent::Accept) => {
            next.seconds_left = flow.countdown_from;
            next.state = FlowState::Countdown;
            effects.push(Effect::Haptic(25));
            effects.push(Effect::Burst);
            effects.push(Effect::StartCountdown);
        }

        (FlowState::Question, FlowEvent::Decline) => {
            next.no_count = flow.no_count.saturating_add(1);
            next.nudge = nudge_for(next.no_count);
            next.jiggle = true;
            effects.push(Effect::Haptic(10));
            effects.push(Effect::ScheduleJiggleReset);
            effects.push(Effect::ScheduleNudgeReset);
        }

        (FlowState::Countdown, FlowEvent::Tick) => {
            if flow.seconds_left <= 1 {
                next.seconds_left = 0;
                next.state = FlowState::Accepted;
                effects.push(Effect::StopCountdown);
            } else {
                next.seconds_left = flow.seconds_left - 1;
            }
        }

        (FlowState::Intro, FlowEvent::Restart) => {}

        (from, FlowEvent::Restart) => {
            next.reset();
            if from == FlowState::Countdown {
                effects.push(Effect::StopCountdown);
            }
            effects.push(Effect::CancelNudgeReset);
            effects.push(Effect::CancelJiggleReset);
        }

        (_, FlowEvent::NudgeSettled) => {
            next.nudge = Nudge::ZERO;
        }

        (_, FlowEvent::JiggleSettled) => {
            next.jiggle = false;
        }

        _ => {}
    }

    (next, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_question() -> Flow {
        let mut flow = Flow::default();
        flow.apply(FlowEvent::Continue);
        flow
    }

    #[test]
    fn starts_at_intro() {
        let flow = Flow::default();
        assert_eq!(flow.state(), FlowState::Intro);
        assert_eq!(flow.seconds_left(), 5);
        assert_eq!(flow.no_count(), 0);
        assert_eq!(flow.decline_label(), "No 🙄");
    }

    #[test]
    fn continue_moves_to_question_without_effects() {
        let mut flow = Flow::default();
        let effects = flow.apply(FlowEvent::Continue);
        assert_eq!(flow.state(), FlowState::Question);
        assert!(effects.is_empty());
    }

    #[test]
    fn accept_starts_countdown() {
        let mut flow = at_question();
        let effects = flow.apply(FlowEvent::Accept);
        assert_eq!(flow.state(), FlowState::Countdown);
        assert_eq!(flow.seconds_left(), 5);
        assert!(effects.contains(&Effect::StartCountdown));
        assert!(effects.contains(&Effect::Burst));
    }

    #[test]
    fn decline_never_changes_state() {
        let mut flow = at_question();
        for _ in 0..30 {
            flow.apply(FlowEvent::Decline);
            assert_eq!(flow.state(), FlowState::Question);
        }
        assert_eq!(flow.no_count(), 30);
    }

    #[test]
    fn decline_escalates_label_and_nudges() {
        let mut flow = at_question();
        let effects = flow.apply(FlowEvent::Decline);

        assert_eq!(flow.decline_label(), "Bro 🤨");
        assert_eq!(flow.nudge(), Nudge { x: -14, y: 2 });
        assert!(flow.is_jiggling());
        assert!(effects.contains(&Effect::ScheduleNudgeReset));
        assert!(effects.contains(&Effect::ScheduleJiggleReset));
    }

    #[test]
    fn twelve_declines_show_final_label() {
        let mut flow = at_question();
        for _ in 0..12 {
            flow.apply(FlowEvent::Decline);
        }
        assert_eq!(flow.decline_label(), "Minor your clapped anyways");
        assert_eq!(flow.accept_scale(), 1.18);
        assert_eq!(flow.decline_scale(), 0.55);
    }

    #[test]
    fn five_ticks_accept() {
        let mut flow = at_question();
        flow.apply(FlowEvent::Accept);

        for expected in [4, 3, 2, 1] {
            let effects = flow.apply(FlowEvent::Tick);
            assert_eq!(flow.state(), FlowState::Countdown);
            assert_eq!(flow.seconds_left(), expected);
            assert!(effects.is_empty());
        }

        let effects = flow.apply(FlowEvent::Tick);
        assert_eq!(flow.state(), FlowState::Accepted);
        assert_eq!(flow.seconds_left(), 0);
        assert_eq!(effects, vec![Effect::StopCountdown]);
    }

    #[test]
    fn tick_outside_countdown_is_ignored() {
        let mut flow = at_question();
        let before = flow.clone();
        assert!(flow.apply(FlowEvent::Tick).is_empty());
        assert_eq!(flow, before);
    }

    #[test]
    fn restart_from_accepted_resets_everything() {
        let mut flow = at_question();
        flow.apply(FlowEvent::Decline);
        flow.apply(FlowEvent::Decline);
        flow.apply(FlowEvent::Accept);
        for _ in 0..5 {
            flow.apply(FlowEvent::Tick);
        }
        assert_eq!(flow.state(), FlowState::Accepted);

        let effects = flow.apply(FlowEvent::Restart);
        assert_eq!(flow.state(), FlowState::Intro);
        assert_eq!(flow.no_count(), 0);
        assert_eq!(flow.seconds_left(), 5);
        assert_eq!(flow.nudge(), Nudge::ZERO);
        assert_eq!(flow.decline_label(), "No 🙄");
        assert!(!effects.contains(&Effect::StopCountdown));
    }

    #[test]
    fn restart_mid_countdown_stops_timer() {
        let mut flow = at_question();
        flow.apply(FlowEvent::Accept);
        flow.apply(FlowEvent::Tick);

        let effects = flow.apply(FlowEvent::Restart);
        assert_eq!(flow.state(), FlowState::Intro);
        assert!(effects.contains(&Effect::StopCountdown));

        flow.apply(FlowEvent::Tick);
        assert_eq!(flow.seconds_left(), 5);
    }

    #[test]
    fn settle_events_clear_cosmetics() {
        let mut flow = at_question();
        flow.apply(FlowEvent::Decline);
        flow.apply(FlowEvent::NudgeSettled);
        assert!(flow.nudge().is_zero());
        assert!(flow.is_jiggling());
        flow.apply(FlowEvent::JiggleSettled);
        assert!(!flow.is_jiggling());
        assert_eq!(flow.no_count(), 1);
    }

    #[test]
    fn transition_is_pure() {
        let flow = at_question();
        let (next, _) = transition(&flow, FlowEvent::Accept);
        assert_eq!(flow.state(), FlowState::Question);
        assert_eq!(next.state(), FlowState::Countdown);
    }

    #[test]
    fn custom_countdown_length() {
        let mut flow = Flow::new(DeclineLines::default(), 2);
        flow.apply(FlowEvent::Continue);
        flow.apply(FlowEvent::Accept);
        flow.apply(FlowEvent::Tick);
        assert_eq!(flow.state(), FlowState::Countdown);
        flow.apply(FlowEvent::Tick);
        assert_eq!(flow.state(), FlowState::Accepted);
    }
}
