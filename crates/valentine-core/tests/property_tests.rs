//! Property-based tests for the clock and the decline escalation
//!
//! Uses proptest to verify the invariants the screens rely on.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use valentine_core::flow::{Flow, FlowEvent, FlowState};
use valentine_core::{accept_scale, compute_remaining, decline_scale, is_unlocked, DeclineLines};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Instants within a few years of 2026
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (1_700_000_000i64..1_900_000_000i64, 0u32..1_000)
        .prop_map(|(secs, ms)| Utc.timestamp_opt(secs, ms * 1_000_000).unwrap())
}

/// Non-empty label lists
fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{1,12}", 1..15)
}

/// User actions on the question screen and beyond
fn event_strategy() -> impl Strategy<Value = FlowEvent> {
    prop_oneof![
        1 => Just(FlowEvent::Continue),
        1 => Just(FlowEvent::Accept),
        3 => Just(FlowEvent::Decline),
        2 => Just(FlowEvent::Tick),
        1 => Just(FlowEvent::Restart),
        1 => Just(FlowEvent::NudgeSettled),
        1 => Just(FlowEvent::JiggleSettled),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The decomposition reconstructs the whole seconds exactly
    #[test]
    fn remaining_decomposition_reconstructs(now in instant_strategy(), ahead_ms in 0i64..10_000_000_000) {
        let target = now + Duration::milliseconds(ahead_ms);
        let r = compute_remaining(now, target);

        prop_assert_eq!(r.total_ms as i64, ahead_ms);
        prop_assert_eq!(
            r.days * 86_400 + r.hours * 3_600 + r.minutes * 60 + r.seconds,
            r.total_ms / 1000
        );
        prop_assert!(r.hours < 24);
        prop_assert!(r.minutes < 60);
        prop_assert!(r.seconds < 60);
    }

    /// Past targets always give all-zero fields
    #[test]
    fn remaining_zero_after_target(target in instant_strategy(), behind_ms in 0i64..10_000_000_000) {
        let now = target + Duration::milliseconds(behind_ms);
        let r = compute_remaining(now, target);
        prop_assert_eq!((r.days, r.hours, r.minutes, r.seconds, r.total_ms), (0, 0, 0, 0, 0));
    }

    /// Once unlocked, every later instant is unlocked too
    #[test]
    fn unlock_is_monotonic(target in instant_strategy(), a in instant_strategy(), later_ms in 0i64..1_000_000_000) {
        let b = a + Duration::milliseconds(later_ms);
        if is_unlocked(a, target) {
            prop_assert!(is_unlocked(b, target));
        }
    }

    /// Label after N presses is lines[min(N, L-1)]
    #[test]
    fn decline_label_clamps(lines in lines_strategy(), presses in 0u32..40) {
        let expected = lines[(presses as usize).min(lines.len() - 1)].clone();
        let mut flow = Flow::new(DeclineLines::new(lines).unwrap(), 5);
        flow.apply(FlowEvent::Continue);
        for _ in 0..presses {
            flow.apply(FlowEvent::Decline);
        }
        prop_assert_eq!(flow.decline_label(), expected.as_str());
        prop_assert_eq!(flow.no_count(), presses);
    }

    /// Scale factors stay inside their bounds for any count
    #[test]
    fn scales_are_bounded(count in any::<u32>()) {
        prop_assert!(accept_scale(count) <= 1.18);
        prop_assert!(accept_scale(count) >= 1.0);
        prop_assert!(decline_scale(count) >= 0.55);
        prop_assert!(decline_scale(count) <= 1.0);
    }

    /// Only Accept leaves the question screen forward; Decline never moves it
    #[test]
    fn question_only_advances_on_accept(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut flow = Flow::default();
        for event in events {
            let before = flow.state();
            flow.apply(event);
            let after = flow.state();

            if before == FlowState::Question && after == FlowState::Countdown {
                prop_assert_eq!(event, FlowEvent::Accept);
            }
            if event == FlowEvent::Decline {
                prop_assert_eq!(before, after);
            }
            if after == FlowState::Accepted {
                prop_assert_eq!(flow.seconds_left(), 0);
            }
            if event == FlowEvent::Restart {
                prop_assert_eq!(after, FlowState::Intro);
                prop_assert_eq!(flow.no_count(), 0);
                prop_assert_eq!(flow.seconds_left(), 5);
            }
        }
    }
}
