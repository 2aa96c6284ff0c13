//! Timer system.
//!
//! Provides one-shot and repeating timers. The host event loop owns the
//! pump: it asks [`SharedTimerManager::time_until_next`] how long it may
//! sleep, then calls [`SharedTimerManager::process_expired`] and dispatches
//! the returned timer IDs to their owners (widgets receive them as timer
//! events). Animation ticks in the widget layer ride on repeating timers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::TimerError;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for the process.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.insert_timer(duration, TimerKind::OneShot)
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval` has elapsed.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.insert_timer(interval, TimerKind::Repeating)
    }

    fn insert_timer(&mut self, interval: Duration, kind: TimerKind) -> TimerId {
        let next_fire = Instant::now() + interval;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: "emberglow_core::timer", ?id, ?interval, ?kind, "timer started");
        id
    }

    /// Stop and remove a timer.
    pub fn stop(&mut self, id: TimerId) -> Result<(), TimerError> {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            tracing::trace!(target: "emberglow_core::timer", ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId)
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Drop stale queue entries for timers stopped in the meantime.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            let now = Instant::now();
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers that should have fired by now.
    ///
    /// Returns the IDs of timers that fired, in fire order.
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        self.process_expired_at(Instant::now())
    }

    /// Process all timers whose fire time is at or before `now`.
    ///
    /// Split out from [`process_expired`](Self::process_expired) so hosts
    /// and tests can drive the queue with an explicit clock.
    #[tracing::instrument(skip(self), target = "emberglow_core::timer", level = "trace")]
    pub fn process_expired_at(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }

            let entry = match self.queue.pop() {
                Some(entry) => entry,
                None => break,
            };
            let id = entry.id;

            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };

            if !timer.active {
                continue;
            }

            tracing::trace!(target: "emberglow_core::timer", ?id, "timer fired");
            fired.push(id);

            match timer.kind {
                TimerKind::OneShot => {
                    timer.active = false;
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`TimerManager`].
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a new shared timer manager.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// Start a one-shot timer.
    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    /// Start a repeating timer.
    pub fn start_repeating(&self, interval: Duration) -> TimerId {
        self.inner.lock().start_repeating(interval)
    }

    /// Stop and remove a timer.
    pub fn stop(&self, id: TimerId) -> Result<(), TimerError> {
        self.inner.lock().stop(id)
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    /// Process all timers that should have fired by now.
    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    /// Process all timers whose fire time is at or before `now`.
    pub fn process_expired_at(&self, now: Instant) -> Vec<TimerId> {
        self.inner.lock().process_expired_at(now)
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

impl Default for SharedTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global timer manager (initialized once per process).
static GLOBAL_TIMERS: OnceLock<SharedTimerManager> = OnceLock::new();

/// Initialize the global timer manager.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_global_timers() {
    let _ = GLOBAL_TIMERS.set(SharedTimerManager::new());
}

/// Get a reference to the global timer manager.
///
/// Returns an error if the manager has not been initialized.
pub fn global_timers() -> Result<&'static SharedTimerManager, TimerError> {
    GLOBAL_TIMERS.get().ok_or(TimerError::ManagerNotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut manager = TimerManager::new();
        let start = Instant::now();
        let id = manager.start_one_shot(Duration::from_millis(10));

        assert!(manager.process_expired_at(start).is_empty());

        let fired = manager.process_expired_at(start + Duration::from_millis(20));
        assert_eq!(fired, vec![id]);
        assert!(!manager.is_active(id));

        // Fired timers never come back.
        assert!(
            manager
                .process_expired_at(start + Duration::from_millis(40))
                .is_empty()
        );
    }

    #[test]
    fn repeating_reschedules() {
        let mut manager = TimerManager::new();
        let start = Instant::now();
        let id = manager.start_repeating(Duration::from_millis(10));

        let fired = manager.process_expired_at(start + Duration::from_millis(15));
        assert_eq!(fired, vec![id]);
        assert!(manager.is_active(id));

        let fired = manager.process_expired_at(start + Duration::from_millis(30));
        assert_eq!(fired, vec![id]);
    }

    #[test]
    fn stop_cancels() {
        let mut manager = TimerManager::new();
        let start = Instant::now();
        let id = manager.start_one_shot(Duration::from_millis(5));

        manager.stop(id).unwrap();
        assert!(!manager.is_active(id));
        assert!(
            manager
                .process_expired_at(start + Duration::from_millis(10))
                .is_empty()
        );
        assert!(matches!(manager.stop(id), Err(TimerError::InvalidTimerId)));
    }

    #[test]
    fn fire_order_follows_deadlines() {
        let mut manager = TimerManager::new();
        let start = Instant::now();
        let late = manager.start_one_shot(Duration::from_millis(30));
        let early = manager.start_one_shot(Duration::from_millis(10));

        let fired = manager.process_expired_at(start + Duration::from_millis(60));
        assert_eq!(fired, vec![early, late]);
    }

    #[test]
    fn time_until_next_skips_stopped() {
        let mut manager = TimerManager::new();
        assert!(manager.time_until_next().is_none());

        let id = manager.start_one_shot(Duration::from_secs(60));
        assert!(manager.time_until_next().is_some());

        manager.stop(id).unwrap();
        assert!(manager.time_until_next().is_none());
    }

    #[test]
    fn active_count_tracks_timers() {
        let mut manager = TimerManager::new();
        assert_eq!(manager.active_count(), 0);
        let a = manager.start_repeating(Duration::from_millis(16));
        let _b = manager.start_one_shot(Duration::from_millis(100));
        assert_eq!(manager.active_count(), 2);
        manager.stop(a).unwrap();
        assert_eq!(manager.active_count(), 1);
    }
}
