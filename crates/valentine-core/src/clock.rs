//! Time-remaining clock and unlock detection.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TargetInstant: fixed for the session                       │
//! │  ├── RemainingTicker: recompute every 1s while on screen    │
//! │  └── UnlockMonitor:   re-check every 3s for the session     │
//! │        └── UnlockEdge fires once per false → true flip      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::error::{CardError, CardResult};
use crate::timer::{every, TimerGuard};

/// How often the flip clock re-renders
pub const REMAINING_REFRESH: Duration = Duration::from_secs(1);
/// How often the unlock flag is re-evaluated
pub const UNLOCK_POLL: Duration = Duration::from_secs(3);
/// How long a flip-clock digit slides when it changes
pub const DIGIT_SLIDE: Duration = Duration::from_millis(320);

const SECS_PER_DAY: u64 = 60 * 60 * 24;
const SECS_PER_HOUR: u64 = 60 * 60;

/// Source of "now". Injected so tests can pin the wall clock.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for tests and previews.
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// The fixed moment the card counts down to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetInstant(DateTime<Utc>);

impl TargetInstant {
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Build from a calendar date and wall time in the local timezone.
    ///
    /// An ambiguous local time (DST fall-back) resolves to the earlier
    /// instant; a skipped one (DST spring-forward) is an error.
    pub fn from_local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> CardResult<Self> {
        Self::from_local_in(&Local, year, month, day, hour, minute)
    }

    /// Same as [`TargetInstant::from_local`] for an explicit timezone.
    pub fn from_local_in<Tz: TimeZone>(
        tz: &Tz,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> CardResult<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .ok_or_else(|| {
                CardError::InvalidTarget(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
                ))
            })?;
        let local = tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
            CardError::InvalidTarget(format!("{naive} does not exist in local time"))
        })?;
        Ok(Self(local.with_timezone(&Utc)))
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Short calendar label, e.g. "Feb 14".
    pub fn day_label(&self) -> String {
        self.0.with_timezone(&Local).format("%b %-d").to_string()
    }

    /// Hint shown on the locked location card, e.g. "Unlocks Feb 14 @ 12:00am".
    pub fn unlock_hint(&self) -> String {
        self.0
            .with_timezone(&Local)
            .format("Unlocks %b %-d @ %-I:%M%P")
            .to_string()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> TimeRemaining {
        compute_remaining(now, self.0)
    }

    pub fn is_unlocked(&self, now: DateTime<Utc>) -> bool {
        is_unlocked(now, self.0)
    }
}

impl fmt::Display for TargetInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Time left until the target, never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_ms: u64,
}

impl TimeRemaining {
    pub fn total_seconds(&self) -> u64 {
        self.total_ms / 1000
    }

    pub fn is_zero(&self) -> bool {
        self.total_ms == 0
    }
}

/// Decompose `max(0, target - now)` into days, hours, minutes and seconds.
pub fn compute_remaining(now: DateTime<Utc>, target: DateTime<Utc>) -> TimeRemaining {
    let total_ms = (target - now).num_milliseconds().max(0) as u64;
    let total_seconds = total_ms / 1000;

    TimeRemaining {
        days: total_seconds / SECS_PER_DAY,
        hours: (total_seconds % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (total_seconds % SECS_PER_HOUR) / 60,
        seconds: total_seconds % 60,
        total_ms,
    }
}

/// True once `now` has reached the target.
pub fn is_unlocked(now: DateTime<Utc>, target: DateTime<Utc>) -> bool {
    now >= target
}

/// One labelled unit of the flip clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockUnit {
    pub label: &'static str,
    pub value: String,
}

/// The four rendered units of the flip clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFace {
    pub units: [ClockUnit; 4],
}

impl From<TimeRemaining> for ClockFace {
    fn from(t: TimeRemaining) -> Self {
        Self {
            units: [
                ClockUnit {
                    label: "DAYS",
                    value: t.days.to_string(),
                },
                ClockUnit {
                    label: "HOURS",
                    value: format!("{:02}", t.hours),
                },
                ClockUnit {
                    label: "MINUTES",
                    value: format!("{:02}", t.minutes),
                },
                ClockUnit {
                    label: "SECONDS",
                    value: format!("{:02}", t.seconds),
                },
            ],
        }
    }
}

/// Slide transition state for one flip-clock unit.
///
/// While sliding, the old value slides out and the new one slides in. A value
/// that arrives mid-slide restarts the slide from the last settled value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitSlide {
    settled: String,
    current: String,
    sliding: bool,
}

impl DigitSlide {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            settled: value.clone(),
            current: value,
            sliding: false,
        }
    }

    /// Show a new value. Returns true when a slide (re)started and a settle
    /// should be scheduled after [`DIGIT_SLIDE`].
    pub fn update(&mut self, value: &str) -> bool {
        if value == self.current {
            return false;
        }
        self.current = value.to_string();
        self.sliding = self.current != self.settled;
        self.sliding
    }

    /// The slide finished.
    pub fn settle(&mut self) {
        self.settled = self.current.clone();
        self.sliding = false;
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// The outgoing value, only while a slide is running.
    pub fn outgoing(&self) -> Option<&str> {
        self.sliding.then_some(self.settled.as_str())
    }

    pub fn is_sliding(&self) -> bool {
        self.sliding
    }
}

/// Edge detector for the unlocked flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockEdge {
    previous: bool,
}

impl UnlockEdge {
    pub fn new(initial: bool) -> Self {
        Self { previous: initial }
    }

    /// Record the latest value; true only on a false → true flip.
    pub fn update(&mut self, unlocked: bool) -> bool {
        let fired = !self.previous && unlocked;
        self.previous = unlocked;
        fired
    }

    pub fn value(&self) -> bool {
        self.previous
    }
}

/// Keeps a [`TimeRemaining`] fresh for as long as it is alive.
#[derive(Debug)]
pub struct RemainingTicker {
    rx: watch::Receiver<TimeRemaining>,
    _timer: TimerGuard,
}

impl RemainingTicker {
    /// Compute now, then every `period` until dropped.
    pub fn start(clock: Arc<dyn Clock>, target: TargetInstant, period: Duration) -> Self {
        let (tx, rx) = watch::channel(target.remaining(clock.now()));
        let timer = every(period, move || {
            let _ = tx.send(target.remaining(clock.now()));
        });
        Self { rx, _timer: timer }
    }

    pub fn current(&self) -> TimeRemaining {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimeRemaining> {
        self.rx.clone()
    }
}

/// Re-evaluates the unlocked flag on a fixed interval.
///
/// The starting value comes from the clock alone. A forced unlock (preview
/// override) is read once here and applied from the first poll on, so a
/// preview before the target still plays the reveal. `on_unlock` runs exactly
/// once per false → true flip, never for the starting value.
#[derive(Debug)]
pub struct UnlockMonitor {
    rx: watch::Receiver<bool>,
    _timer: TimerGuard,
}

impl UnlockMonitor {
    pub fn start<F>(
        clock: Arc<dyn Clock>,
        target: TargetInstant,
        forced: bool,
        period: Duration,
        mut on_unlock: F,
    ) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let evaluate = move |clock: &dyn Clock| forced || target.is_unlocked(clock.now());

        let initial = target.is_unlocked(clock.now());
        let (tx, rx) = watch::channel(initial);
        let mut edge = UnlockEdge::new(initial);

        let timer = every(period, move || {
            let unlocked = evaluate(clock.as_ref());
            if edge.update(unlocked) {
                tracing::info!(%target, "target reached, location unlocked");
                on_unlock();
            }
            tx.send_if_modified(|current| {
                let changed = *current != unlocked;
                *current = unlocked;
                changed
            });
        });

        Self { rx, _timer: timer }
    }

    pub fn is_unlocked(&self) -> bool {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }
}
