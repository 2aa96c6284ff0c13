//! Core systems for Emberglow.
//!
//! This crate provides the foundational components of the Emberglow widget
//! kit:
//!
//! - **Object Model**: Parent-child ownership, naming, registry lookup
//! - **Signal/Slot System**: Type-safe inter-object communication
//! - **Timers**: One-shot and repeating timers driven by the host loop
//!
//! # Signal/Slot Example
//!
//! ```
//! use emberglow_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::time::Duration;
//! use emberglow_core::{init_global_timers, global_timers};
//!
//! init_global_timers();
//! let timers = global_timers().unwrap();
//! let id = timers.start_repeating(Duration::from_millis(16));
//!
//! // The host event loop pumps expired timers and routes them to owners:
//! for fired in timers.process_expired() {
//!     println!("timer {:?} fired", fired);
//! }
//! # timers.stop(id).unwrap();
//! ```

pub mod error;
pub mod logging;
pub mod object;
pub mod signal;
pub mod timer;

pub use error::{GlowError, Result, TimerError};
pub use object::{
    Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult,
    SharedObjectRegistry, global_registry, init_global_registry, object_cast, object_cast_mut,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{
    SharedTimerManager, TimerId, TimerKind, TimerManager, global_timers, init_global_timers,
};
