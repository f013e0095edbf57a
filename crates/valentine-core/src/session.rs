//! Session runtime.
//!
//! A [`Session`] owns the [`Flow`] for one card and runs the effects each
//! transition asks for: it starts and cancels the countdown interval, the
//! debounced nudge and wiggle resets, and the unlock monitor. State changes
//! are published as [`SessionSnapshot`]s on a watch channel; one-shot
//! cosmetic effects go out on a broadcast channel.
//!
//! ## Timer discipline
//!
//! Every timer is a [`TimerGuard`] stored in the session, and every callback
//! holds only a weak reference back to it. Leaving the countdown cancels its
//! interval and bumps a generation counter, so even a tick already in flight
//! when the countdown was left is dropped instead of applied. The nudge and
//! wiggle resets carry their own generations the same way: a reset that woke
//! up before a newer press rescheduled it cannot clear that press's state.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

use crate::clock::{Clock, RemainingTicker, TargetInstant, UnlockMonitor, REMAINING_REFRESH};
use crate::config::CardConfig;
use crate::error::CardResult;
use crate::escalation::{Nudge, JIGGLE_RESET, NUDGE_RESET};
use crate::flow::{Effect, Flow, FlowEvent, FlowState};
use crate::particles::Capabilities;
use crate::preview::UnlockOverride;
use crate::timer::{after, every, DeferredSlot, TimerGuard};

/// Interval between countdown decrements
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);
/// How long the location card pulses after unlocking
pub const UNLOCK_PULSE: Duration = Duration::from_millis(900);
/// Haptic length when the location unlocks
const UNLOCK_HAPTIC_MS: u64 = 40;

const EFFECT_CHANNEL_CAPACITY: usize = 64;

/// One-shot cosmetic effects for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    /// Confetti explosion
    Burst,
    /// Vibrate for the given milliseconds
    Haptic(u64),
    /// The location just unlocked
    Unlocked,
}

/// Everything the screens need to render.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub state: FlowState,
    pub seconds_left: u32,
    pub no_count: u32,
    pub decline_label: String,
    pub accept_scale: f32,
    pub decline_scale: f32,
    pub nudge: Nudge,
    pub jiggling: bool,
    pub unlocked: bool,
    pub unlock_pulse: bool,
    /// Unlock was forced by the preview override
    pub preview: bool,
}

/// Options fixed at session start
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOptions {
    pub preview: UnlockOverride,
    pub capabilities: Capabilities,
}

/// Which timer slot a deferred dispatch came from, and that slot's
/// generation when the timer was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stamp {
    Countdown(u64),
    Nudge(u64),
    Jiggle(u64),
}

#[derive(Debug, Clone, Copy, Default)]
struct Generations {
    countdown: u64,
    nudge: u64,
    jiggle: u64,
}

impl Generations {
    fn is_current(&self, stamp: Stamp) -> bool {
        match stamp {
            Stamp::Countdown(g) => g == self.countdown,
            Stamp::Nudge(g) => g == self.nudge,
            Stamp::Jiggle(g) => g == self.jiggle,
        }
    }

    fn supersede_all(&mut self) {
        self.countdown += 1;
        self.nudge += 1;
        self.jiggle += 1;
    }

    fn advance(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::StartCountdown | Effect::StopCountdown => self.countdown += 1,
                Effect::ScheduleNudgeReset | Effect::CancelNudgeReset => self.nudge += 1,
                Effect::ScheduleJiggleReset | Effect::CancelJiggleReset => self.jiggle += 1,
                Effect::Burst | Effect::Haptic(_) => {}
            }
        }
    }
}

struct Core {
    flow: Flow,
    generations: Generations,
    unlocked: bool,
    unlock_pulse: bool,
}

impl Core {
    fn snapshot(&self, preview: bool) -> SessionSnapshot {
        SessionSnapshot {
            state: self.flow.state(),
            seconds_left: self.flow.seconds_left(),
            no_count: self.flow.no_count(),
            decline_label: self.flow.decline_label().to_string(),
            accept_scale: self.flow.accept_scale(),
            decline_scale: self.flow.decline_scale(),
            nudge: self.flow.nudge(),
            jiggling: self.flow.is_jiggling(),
            unlocked: self.unlocked,
            unlock_pulse: self.unlock_pulse,
            preview,
        }
    }
}

#[derive(Default)]
struct Timers {
    countdown: Option<TimerGuard>,
    nudge: DeferredSlot<TimerGuard>,
    jiggle: DeferredSlot<TimerGuard>,
    pulse: DeferredSlot<TimerGuard>,
    unlock: Option<UnlockMonitor>,
}

impl Timers {
    fn cancel_all(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.abort();
        }
        self.nudge.cancel();
        self.jiggle.cancel();
        self.pulse.cancel();
        self.unlock = None;
    }
}

struct Inner {
    core: Mutex<Core>,
    timers: Mutex<Timers>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    effect_tx: broadcast::Sender<CardEffect>,
    clock: Arc<dyn Clock>,
    target: TargetInstant,
    options: SessionOptions,
}

/// One running card. Cheap to clone; all clones drive the same flow.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    /// Create a session and start its unlock monitor.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &CardConfig, clock: impl Clock, options: SessionOptions) -> CardResult<Self> {
        config.validate()?;
        let target = config.target_instant()?;
        let clock: Arc<dyn Clock> = Arc::new(clock);
        let preview = options.preview.is_active();

        let core = Core {
            flow: Flow::new(config.decline_lines.clone(), config.countdown_seconds),
            generations: Generations::default(),
            // A preview override is applied by the monitor's first poll so the
            // reveal still plays once.
            unlocked: target.is_unlocked(clock.now()),
            unlock_pulse: false,
        };
        let (snapshot_tx, _) = watch::channel(core.snapshot(preview));
        let (effect_tx, _) = broadcast::channel(EFFECT_CHANNEL_CAPACITY);

        let inner = Arc::new(Inner {
            core: Mutex::new(core),
            timers: Mutex::new(Timers::default()),
            snapshot_tx,
            effect_tx,
            clock: clock.clone(),
            target,
            options,
        });

        let weak = Arc::downgrade(&inner);
        let monitor = UnlockMonitor::start(clock, target, preview, config.unlock_poll(), move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_unlocked();
            }
        });
        inner.timers.lock().unlock = Some(monitor);

        info!(%target, preview, "card session started");
        Ok(Self { inner })
    }

    /// Feed a user action into the flow.
    pub fn dispatch(&self, event: FlowEvent) {
        self.inner.dispatch(event, None);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.snapshot_tx.borrow().clone()
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Receive one-shot cosmetic effects.
    pub fn effects(&self) -> broadcast::Receiver<CardEffect> {
        self.inner.effect_tx.subscribe()
    }

    pub fn target(&self) -> TargetInstant {
        self.inner.target
    }

    /// Start a 1s time-remaining ticker; it stops when dropped.
    pub fn remaining_ticker(&self) -> RemainingTicker {
        RemainingTicker::start(self.inner.clock.clone(), self.inner.target, REMAINING_REFRESH)
    }

    /// True while the countdown interval is registered.
    pub fn countdown_running(&self) -> bool {
        self.inner.timers.lock().countdown.is_some()
    }

    /// Cancel every timer. The flow keeps its state but nothing moves it
    /// except further dispatches.
    pub fn shutdown(&self) {
        {
            let mut core = self.inner.core.lock();
            core.generations.supersede_all();
        }
        self.inner.timers.lock().cancel_all();
        info!("card session stopped");
    }
}

impl Inner {
    fn dispatch(self: &Arc<Self>, event: FlowEvent, stamp: Option<Stamp>) {
        let (effects, generations, snapshot) = {
            let mut core = self.core.lock();
            if let Some(stamp) = stamp {
                if !core.generations.is_current(stamp) {
                    debug!(?event, ?stamp, "dropping event from a superseded timer");
                    return;
                }
            }

            let from = core.flow.state();
            let effects = core.flow.apply(event);
            let to = core.flow.state();

            core.generations.advance(&effects);
            if from != to {
                info!(%from, %to, ?event, "flow transition");
            } else if event == FlowEvent::Tick {
                debug!(seconds_left = core.flow.seconds_left(), "countdown tick");
            }

            let preview = self.options.preview.is_active();
            (effects, core.generations, core.snapshot(preview))
        };

        self.snapshot_tx.send_replace(snapshot);
        self.run(effects, generations);
    }

    fn run(self: &Arc<Self>, effects: Vec<Effect>, generations: Generations) {
        for effect in effects {
            match effect {
                Effect::StartCountdown => {
                    let weak = Arc::downgrade(self);
                    let guard = every(COUNTDOWN_TICK, move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.dispatch(
                                FlowEvent::Tick,
                                Some(Stamp::Countdown(generations.countdown)),
                            );
                        }
                    });
                    let previous = self.timers.lock().countdown.replace(guard);
                    if let Some(previous) = previous {
                        previous.abort();
                    }
                }
                Effect::StopCountdown => {
                    let previous = self.timers.lock().countdown.take();
                    if let Some(previous) = previous {
                        previous.abort();
                    }
                }
                Effect::ScheduleNudgeReset => {
                    let stamp = Stamp::Nudge(generations.nudge);
                    let guard = self.deferred(NUDGE_RESET, FlowEvent::NudgeSettled, stamp);
                    self.timers.lock().nudge.schedule(guard);
                }
                Effect::CancelNudgeReset => self.timers.lock().nudge.cancel(),
                Effect::ScheduleJiggleReset => {
                    let stamp = Stamp::Jiggle(generations.jiggle);
                    let guard = self.deferred(JIGGLE_RESET, FlowEvent::JiggleSettled, stamp);
                    self.timers.lock().jiggle.schedule(guard);
                }
                Effect::CancelJiggleReset => self.timers.lock().jiggle.cancel(),
                Effect::Burst => self.emit(CardEffect::Burst),
                Effect::Haptic(ms) => self.emit(CardEffect::Haptic(ms)),
            }
        }
    }

    fn deferred(self: &Arc<Self>, delay: Duration, event: FlowEvent, stamp: Stamp) -> TimerGuard {
        let weak: Weak<Self> = Arc::downgrade(self);
        after(delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.dispatch(event, Some(stamp));
            }
        })
    }

    fn on_unlocked(self: &Arc<Self>) {
        let snapshot = {
            let mut core = self.core.lock();
            core.unlocked = true;
            core.unlock_pulse = true;
            core.snapshot(self.options.preview.is_active())
        };
        self.snapshot_tx.send_replace(snapshot);

        self.emit(CardEffect::Haptic(UNLOCK_HAPTIC_MS));
        self.emit(CardEffect::Burst);
        self.emit(CardEffect::Unlocked);

        let weak = Arc::downgrade(self);
        let guard = after(UNLOCK_PULSE, move || {
            if let Some(inner) = weak.upgrade() {
                let snapshot = {
                    let mut core = inner.core.lock();
                    core.unlock_pulse = false;
                    core.snapshot(inner.options.preview.is_active())
                };
                inner.snapshot_tx.send_replace(snapshot);
            }
        });
        self.timers.lock().pulse.schedule(guard);
    }

    fn emit(&self, effect: CardEffect) {
        let caps = self.options.capabilities;
        let allowed = match effect {
            CardEffect::Haptic(_) => caps.allows_haptics(),
            CardEffect::Burst => caps.allows_particles(),
            CardEffect::Unlocked => true,
        };
        if allowed {
            // No subscribers is fine: nothing is on screen to animate.
            let _ = self.effect_tx.send(effect);
        } else {
            debug!(?effect, "effect skipped, capability unavailable");
        }
    }
}
