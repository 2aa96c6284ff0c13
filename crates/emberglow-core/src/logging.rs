//! Logging and debugging facilities.
//!
//! Emberglow uses the `tracing` crate for instrumentation. Install a
//! subscriber in your application to see logs:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // ...
//! }
//! ```
//!
//! The [`targets`] constants can be used with `tracing` filter directives to
//! narrow logs to a subsystem, e.g. `RUST_LOG=emberglow_core::timer=trace`.

use std::fmt::Write as _;

use crate::object::{ObjectId, ObjectResult, global_registry};

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "emberglow_core";
    /// Timer system target.
    pub const TIMER: &str = "emberglow_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "emberglow_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "emberglow_core::object";
    /// Widget layer target.
    pub const WIDGET: &str = "emberglow::widget";
    /// Animation target.
    pub const ANIMATION: &str = "emberglow::animation";
}

/// Format the object subtree rooted at `id` as an indented tree.
///
/// Each line shows the object's type name and, when set, its object name.
/// Intended for debug logging of widget hierarchies.
pub fn dump_object_tree(id: ObjectId) -> ObjectResult<String> {
    let registry = global_registry()?;
    let mut out = String::new();
    registry.with_read(|reg| {
        let mut stack = vec![(id, 0usize)];
        while let Some((current, depth)) = stack.pop() {
            let type_name = reg.type_name(current)?;
            let name = reg.object_name(current)?;
            for _ in 0..depth {
                out.push_str("  ");
            }
            if name.is_empty() {
                let _ = writeln!(out, "{type_name}");
            } else {
                let _ = writeln!(out, "{type_name} \"{name}\"");
            }
            // Push in reverse so the first child prints first.
            for &child in reg.children(current)?.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Object, ObjectBase, init_global_registry};

    struct Node {
        base: ObjectBase,
    }

    impl Object for Node {
        fn object_id(&self) -> crate::object::ObjectId {
            self.base.id()
        }
    }

    #[test]
    fn dump_shows_names_and_nesting() {
        init_global_registry();
        let root = Node {
            base: ObjectBase::new::<Node>(),
        };
        root.base.set_name("root");
        let child = Node {
            base: ObjectBase::new::<Node>(),
        };
        child.base.set_name("child");
        child.base.set_parent(Some(root.object_id())).unwrap();

        let dump = dump_object_tree(root.object_id()).unwrap();
        assert!(dump.contains("\"root\""));
        assert!(dump.contains("  ") && dump.contains("\"child\""));
    }
}
