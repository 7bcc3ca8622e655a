//! Cooperative frame scheduler.
//!
//! One ordered set of subscriber callbacks, invoked once per tick with the
//! elapsed wall-clock delta since the previous tick. Everything runs on the
//! caller's thread; the only suspension point is between ticks. Deltas are
//! sanitized through the shared clamp policy
//! ([`clamp_frame_delta`](crate::animation::spring::clamp_frame_delta)), the
//! same one the spring channels sub-step under.

use rustc_hash::FxHashSet;
use web_time::Instant;

use crate::animation::spring::clamp_frame_delta;

/// Identifier for a scheduler subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Handed to each callback during a tick; the only way to unsubscribe from
/// inside a callback.
#[derive(Debug)]
pub struct TickContext<'a> {
    cancelled: &'a mut FxHashSet<SubscriptionId>,
}

impl TickContext<'_> {
    /// Cancel a subscription from within a tick. The cancelled callback is
    /// never invoked again, not even later in the current tick. Idempotent.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        let _ = self.cancelled.insert(id);
    }
}

type TickFn = Box<dyn FnMut(f32, &mut TickContext<'_>)>;

/// Drives one update tick per display refresh.
///
/// The scheduler computes the elapsed delta, applies the shared clamp
/// policy, and fans the delta out to subscribers in subscription order. It
/// performs no other work.
pub struct FrameScheduler {
    subscribers: Vec<(SubscriptionId, TickFn)>,
    cancelled: FxHashSet<SubscriptionId>,
    next_id: u64,
    last_tick: Option<Instant>,
    /// Smoothed FPS via exponential moving average.
    smoothed_fps: f32,
    smoothing: f32,
}

impl FrameScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            cancelled: FxHashSet::default(),
            next_id: 0,
            last_tick: None,
            smoothed_fps: 60.0,
            smoothing: 0.05, // 5% new value, 95% old for smooth display
        }
    }

    /// Register a callback, invoked once per tick with the clamped elapsed
    /// delta in seconds. Returns the id used to unsubscribe.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(f32, &mut TickContext<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Cancel a subscription. Idempotent; unknown ids are ignored. Once
    /// this returns, the callback is guaranteed never to run again.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        let _ = self.cancelled.insert(id);
    }

    /// Cancel every subscription. Used at session teardown.
    pub fn clear(&mut self) {
        self.subscribers.clear();
        self.cancelled.clear();
    }

    /// Run one tick "now": computes the delta since the previous tick and
    /// fans it out. The first tick after construction (or after a
    /// [`reset`](Self::reset)) reports a zero delta.
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last_tick = Some(now);
        self.tick_delta(dt);
    }

    /// Run one tick with an explicit raw delta (headless drivers, tests).
    pub fn tick_delta(&mut self, raw_dt: f32) {
        let dt = clamp_frame_delta(raw_dt);
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        // Drop callbacks cancelled since the last tick before running
        // anything, then deliver — checking the cancel set again before
        // each callback so a cancellation from an earlier callback in this
        // very tick still suppresses the later one.
        self.sweep_cancelled();
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for (id, callback) in &mut subscribers {
            if self.cancelled.contains(id) {
                continue;
            }
            let mut ctx = TickContext {
                cancelled: &mut self.cancelled,
            };
            callback(dt, &mut ctx);
        }
        // Callbacks cannot subscribe re-entrantly (they only see the
        // TickContext), so nothing was pushed meanwhile.
        self.subscribers = subscribers;
        self.sweep_cancelled();
    }

    /// Forget the previous tick instant so the next [`tick`](Self::tick)
    /// reports a zero delta (e.g. after resuming a suspended session).
    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|(id, _)| !self.cancelled.contains(id))
            .count()
    }

    /// Smoothed ticks-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    fn sweep_cancelled(&mut self) {
        if self.cancelled.is_empty() {
            return;
        }
        let cancelled = &self.cancelled;
        self.subscribers.retain(|(id, _)| !cancelled.contains(id));
        self.cancelled.clear();
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn delivers_delta_to_every_subscriber() {
        let mut scheduler = FrameScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in 0..3 {
            let seen = Rc::clone(&seen);
            let _ = scheduler
                .subscribe(move |dt, _| seen.borrow_mut().push((tag, dt)));
        }

        scheduler.tick_delta(0.016);
        assert_eq!(
            *seen.borrow(),
            vec![(0, 0.016), (1, 0.016), (2, 0.016)],
            "subscription order preserved"
        );
    }

    #[test]
    fn unsubscribed_callback_never_runs_again() {
        let mut scheduler = FrameScheduler::new();
        let count = Rc::new(RefCell::new(0));

        let id = {
            let count = Rc::clone(&count);
            scheduler.subscribe(move |_, _| *count.borrow_mut() += 1)
        };

        scheduler.tick_delta(0.016);
        scheduler.unsubscribe(id);
        scheduler.tick_delta(0.016);
        scheduler.tick_delta(0.016);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(scheduler.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut scheduler = FrameScheduler::new();
        let id = scheduler.subscribe(|_, _| {});
        scheduler.unsubscribe(id);
        scheduler.unsubscribe(id);
        scheduler.tick_delta(0.016);
        assert_eq!(scheduler.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_from_within_a_callback_suppresses_same_tick() {
        let mut scheduler = FrameScheduler::new();
        let victim_runs = Rc::new(RefCell::new(0));

        // Subscriber A cancels subscriber B before B ever runs. Ids are
        // assigned sequentially, so B's id is known up front.
        let victim_id = SubscriptionId(1);
        let _ = scheduler.subscribe(move |_, ctx| {
            ctx.unsubscribe(victim_id);
        });
        let actual_victim_id = {
            let victim_runs = Rc::clone(&victim_runs);
            scheduler.subscribe(move |_, _| *victim_runs.borrow_mut() += 1)
        };
        assert_eq!(actual_victim_id, victim_id);

        scheduler.tick_delta(0.016);
        scheduler.tick_delta(0.016);
        assert_eq!(
            *victim_runs.borrow(),
            0,
            "cancelled callback must not run, even in the same tick"
        );
    }

    #[test]
    fn self_unsubscribe_from_callback() {
        let mut scheduler = FrameScheduler::new();
        let count = Rc::new(RefCell::new(0));

        let id = SubscriptionId(0);
        let _ = {
            let count = Rc::clone(&count);
            scheduler.subscribe(move |_, ctx| {
                *count.borrow_mut() += 1;
                ctx.unsubscribe(id);
            })
        };

        scheduler.tick_delta(0.016);
        scheduler.tick_delta(0.016);
        assert_eq!(*count.borrow(), 1, "ran exactly once");
    }

    #[test]
    fn raw_deltas_are_clamped() {
        use crate::animation::spring::MAX_FRAME_DELTA;

        let mut scheduler = FrameScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _ = {
            let seen = Rc::clone(&seen);
            scheduler.subscribe(move |dt, _| seen.borrow_mut().push(dt))
        };

        scheduler.tick_delta(100.0);
        scheduler.tick_delta(-5.0);
        scheduler.tick_delta(f32::NAN);
        assert_eq!(*seen.borrow(), vec![MAX_FRAME_DELTA, 0.0, 0.0]);
    }

    #[test]
    fn first_instant_tick_reports_zero_delta() {
        let mut scheduler = FrameScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _ = {
            let seen = Rc::clone(&seen);
            scheduler.subscribe(move |dt, _| seen.borrow_mut().push(dt))
        };

        scheduler.tick(Instant::now());
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn clear_cancels_everything() {
        let mut scheduler = FrameScheduler::new();
        let count = Rc::new(RefCell::new(0));
        for _ in 0..4 {
            let count = Rc::clone(&count);
            let _ = scheduler.subscribe(move |_, _| *count.borrow_mut() += 1);
        }

        scheduler.clear();
        scheduler.tick_delta(0.016);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(scheduler.subscriber_count(), 0);
    }
}
