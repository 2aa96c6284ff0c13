//! Widget timer system.
//!
//! Bridges the core timer manager with widget-level event dispatch: a
//! widget starts a timer here, and when the host pumps
//! [`global_timers`](emberglow_core::global_timers) it looks up the owner
//! with [`timer_owner`] and delivers a `WidgetEvent::Timer` to that widget.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use emberglow_core::{ObjectId, TimerId, global_timers};
use parking_lot::Mutex;

/// Global mapping from timer IDs to the widgets that own them.
static WIDGET_TIMERS: OnceLock<Mutex<WidgetTimerRegistry>> = OnceLock::new();

/// Registry that tracks which widget owns each timer.
#[derive(Default)]
struct WidgetTimerRegistry {
    timer_to_widget: HashMap<TimerId, ObjectId>,
}

fn registry() -> &'static Mutex<WidgetTimerRegistry> {
    WIDGET_TIMERS.get_or_init(|| Mutex::new(WidgetTimerRegistry::default()))
}

/// Start a one-shot timer owned by a widget.
///
/// When the timer fires, the host delivers a `WidgetEvent::Timer` to the
/// owning widget.
///
/// # Panics
///
/// Panics if the global timer manager is not initialized.
pub fn start_widget_timer(widget_id: ObjectId, duration: Duration) -> TimerId {
    let timers = global_timers().expect("Timer manager not initialized");
    let timer_id = timers.start_one_shot(duration);
    registry().lock().timer_to_widget.insert(timer_id, widget_id);
    timer_id
}

/// Start a repeating timer owned by a widget.
///
/// The timer keeps firing at `interval` until stopped.
///
/// # Panics
///
/// Panics if the global timer manager is not initialized.
pub fn start_widget_repeating_timer(widget_id: ObjectId, interval: Duration) -> TimerId {
    let timers = global_timers().expect("Timer manager not initialized");
    let timer_id = timers.start_repeating(interval);
    registry().lock().timer_to_widget.insert(timer_id, widget_id);
    timer_id
}

/// Stop a widget-owned timer.
///
/// Returns `true` if the timer was found and stopped.
pub fn stop_widget_timer(timer_id: TimerId) -> bool {
    registry().lock().timer_to_widget.remove(&timer_id);
    global_timers().is_ok_and(|timers| timers.stop(timer_id).is_ok())
}

/// Check if a widget-owned timer is still active.
pub fn is_widget_timer_active(timer_id: TimerId) -> bool {
    global_timers().is_ok_and(|timers| timers.is_active(timer_id))
}

/// Look up which widget owns a timer.
///
/// Used by the host's dispatch loop to route fired timers to widgets.
pub fn timer_owner(timer_id: TimerId) -> Option<ObjectId> {
    registry().lock().timer_to_widget.get(&timer_id).copied()
}

/// Remove all timers owned by a widget.
///
/// Called when a widget is destroyed, so no stale timers keep firing.
pub fn remove_timers_for_widget(widget_id: ObjectId) {
    let timer_ids: Vec<TimerId> = {
        let registry = registry().lock();
        registry
            .timer_to_widget
            .iter()
            .filter(|(_, owner)| **owner == widget_id)
            .map(|(id, _)| *id)
            .collect()
    };

    let mut reg = registry().lock();
    for timer_id in timer_ids {
        reg.timer_to_widget.remove(&timer_id);
        if let Ok(timers) = global_timers() {
            let _ = timers.stop(timer_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emberglow_core::{
        Object, ObjectBase, init_global_registry, init_global_timers,
    };

    struct Owner {
        base: ObjectBase,
    }

    impl Object for Owner {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn setup() -> Owner {
        init_global_registry();
        init_global_timers();
        Owner {
            base: ObjectBase::new::<Owner>(),
        }
    }

    #[test]
    fn start_and_lookup_owner() {
        let owner = setup();
        let id = start_widget_repeating_timer(owner.object_id(), Duration::from_millis(16));
        assert_eq!(timer_owner(id), Some(owner.object_id()));
        assert!(is_widget_timer_active(id));

        assert!(stop_widget_timer(id));
        assert_eq!(timer_owner(id), None);
        assert!(!is_widget_timer_active(id));
        assert!(!stop_widget_timer(id));
    }

    #[test]
    fn remove_all_for_widget() {
        let owner = setup();
        let a = start_widget_timer(owner.object_id(), Duration::from_secs(60));
        let b = start_widget_repeating_timer(owner.object_id(), Duration::from_secs(60));

        remove_timers_for_widget(owner.object_id());
        assert_eq!(timer_owner(a), None);
        assert_eq!(timer_owner(b), None);
        assert!(!is_widget_timer_active(a));
        assert!(!is_widget_timer_active(b));
    }
}
