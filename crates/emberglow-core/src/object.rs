//! Object model with parent/child ownership.
//!
//! Every widget (and any other long-lived toolkit entity) is an *object*:
//! it has a unique [`ObjectId`], an optional parent, an ordered list of
//! children, and a name for lookup. Ownership follows the usual toolkit
//! convention: destroying an object destroys its children.
//!
//! The registry is process-global and must be initialized once, before the
//! first object is created:
//!
//! ```
//! use emberglow_core::{init_global_registry, Object, ObjectBase, ObjectId};
//!
//! init_global_registry();
//!
//! struct Knob {
//!     base: ObjectBase,
//! }
//!
//! impl Object for Knob {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let knob = Knob { base: ObjectBase::new::<Knob>() };
//! knob.base.set_name("volume");
//! assert_eq!(knob.base.name(), "volume");
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a registered object.
    pub struct ObjectId;
}

/// Object-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID does not refer to a live object.
    NotFound,
    /// The requested parent ID does not refer to a live object.
    ParentNotFound,
    /// Reparenting would make an object its own ancestor.
    WouldCreateCycle,
    /// The global registry has not been initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Object not found in registry"),
            Self::ParentNotFound => write!(f, "Parent object not found in registry"),
            Self::WouldCreateCycle => write!(f, "Reparenting would create a cycle"),
            Self::RegistryNotInitialized => {
                write!(f, "Object registry not initialized. Call init_global_registry() first")
            }
        }
    }
}

impl std::error::Error for ObjectError {}

/// A specialized Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Per-object bookkeeping stored in the registry.
struct ObjectData {
    name: String,
    type_id: TypeId,
    type_name: &'static str,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

/// The object tree: registration, naming, and parent/child links.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
}

impl ObjectRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object of type `T` and return its ID.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        let id = self.objects.insert(ObjectData {
            name: String::new(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            parent: None,
            children: Vec::new(),
        });
        tracing::trace!(target: "emberglow_core::object", ?id, ty = %std::any::type_name::<T>(), "object registered");
        id
    }

    /// Destroy an object and, recursively, all of its children.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let parent = self.objects.get(id).ok_or(ObjectError::NotFound)?.parent;

        // Detach from the parent's child list first.
        if let Some(parent) = parent
            && let Some(parent_data) = self.objects.get_mut(parent)
        {
            parent_data.children.retain(|&child| child != id);
        }

        // Children are destroyed depth-first; ownership cascades downward.
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(data) = self.objects.remove(current) {
                pending.extend(data.children);
            }
        }

        tracing::trace!(target: "emberglow_core::object", ?id, "object destroyed");
        Ok(())
    }

    /// Check whether an object is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set (or clear) an object's parent.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::NotFound);
        }

        if let Some(parent) = new_parent {
            if !self.objects.contains_key(parent) {
                return Err(ObjectError::ParentNotFound);
            }
            // Walk up from the prospective parent; hitting `id` means a cycle.
            let mut current = Some(parent);
            while let Some(ancestor) = current {
                if ancestor == id {
                    return Err(ObjectError::WouldCreateCycle);
                }
                current = self.objects.get(ancestor).and_then(|d| d.parent);
            }
        }

        let old_parent = self.objects[id].parent;
        if old_parent == new_parent {
            return Ok(());
        }

        if let Some(old) = old_parent
            && let Some(old_data) = self.objects.get_mut(old)
        {
            old_data.children.retain(|&child| child != id);
        }

        if let Some(parent) = new_parent
            && let Some(parent_data) = self.objects.get_mut(parent)
        {
            parent_data.children.push(id);
        }

        self.objects[id].parent = new_parent;
        Ok(())
    }

    /// Get an object's parent ID.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::NotFound)
    }

    /// Get an object's children, in z-order (back to front).
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::NotFound)
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::NotFound)
    }

    /// Set an object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.objects
            .get_mut(id)
            .map(|d| d.name = name)
            .ok_or(ObjectError::NotFound)
    }

    /// Get the Rust type name the object was registered with.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::NotFound)
    }

    /// Get the `TypeId` the object was registered with.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        self.objects
            .get(id)
            .map(|d| d.type_id)
            .ok_or(ObjectError::NotFound)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let data = self.objects.get(id).ok_or(ObjectError::NotFound)?;
        Ok(data
            .children
            .iter()
            .copied()
            .find(|&child| self.objects.get(child).is_some_and(|d| d.name == name)))
    }

    /// Get all ancestors of an object, from immediate parent to root.
    pub fn ancestors(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::NotFound);
        }
        let mut result = Vec::new();
        let mut current = self.objects[id].parent;
        while let Some(ancestor) = current {
            result.push(ancestor);
            current = self.objects.get(ancestor).and_then(|d| d.parent);
        }
        Ok(result)
    }

    /// Total number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all objects that have no parent.
    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, d)| d.parent.is_none())
            .map(|(id, _)| id)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`ObjectRegistry`].
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object of type `T`.
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Destroy an object and its children.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check whether an object is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set (or clear) an object's parent.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get an object's parent ID.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get an object's children.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(<[_]>::to_vec)
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(str::to_owned)
    }

    /// Set an object's name.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get the Rust type name the object was registered with.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// Get all ancestors, from immediate parent to root.
    pub fn ancestors(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().ancestors(id)
    }

    /// Total number of live objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }

    /// IDs of all objects without a parent.
    pub fn root_objects(&self) -> Vec<ObjectId> {
        self.inner.read().root_objects().collect()
    }

    /// Access the registry with a read lock for compound queries.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ObjectRegistry) -> R,
    {
        f(&self.inner.read())
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global object registry (initialized once per process).
static GLOBAL_REGISTRY: OnceLock<SharedObjectRegistry> = OnceLock::new();

/// Initialize the global object registry.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_global_registry() {
    let _ = GLOBAL_REGISTRY.set(SharedObjectRegistry::new());
}

/// Get a reference to the global object registry.
///
/// Returns an error if the registry has not been initialized.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// The base trait all toolkit objects implement.
///
/// Types implementing `Object` participate in the object tree and can be
/// targeted by timer and event routing. Implementations normally embed an
/// [`ObjectBase`] and delegate to it.
pub trait Object: Any + Send + Sync {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

/// Helper for implementing the [`Object`] trait.
///
/// Registers the object on construction and unregisters it (cascading to
/// children) on drop.
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new `ObjectBase`, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("Object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get the object's ID.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object ID.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get child object IDs.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.find_child_by_name(self.id, name))
            .ok()
            .flatten()
    }

    /// Get all ancestors, from immediate parent to root.
    pub fn ancestors(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.ancestors(self.id))
            .unwrap_or_default()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        // Unregister from the global registry; children go with us.
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

/// Safe downcast for [`Object`] trait objects.
pub fn object_cast<T: Object + 'static>(obj: &dyn Object) -> Option<&T> {
    (obj as &dyn Any).downcast_ref::<T>()
}

/// Safe mutable downcast for [`Object`] trait objects.
pub fn object_cast_mut<T: Object + 'static>(obj: &mut dyn Object) -> Option<&mut T> {
    (obj as &mut dyn Any).downcast_mut::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        base: ObjectBase,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                base: ObjectBase::new::<Self>(),
            }
        }
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn register_and_name() {
        setup();
        let probe = Probe::new();
        assert!(probe.base.name().is_empty());
        probe.base.set_name("probe");
        assert_eq!(probe.base.name(), "probe");
    }

    #[test]
    fn parent_child_links() {
        setup();
        let parent = Probe::new();
        let child = Probe::new();

        child.base.set_parent(Some(parent.object_id())).unwrap();
        assert_eq!(child.base.parent(), Some(parent.object_id()));
        assert_eq!(parent.base.children(), vec![child.object_id()]);

        child.base.set_parent(None).unwrap();
        assert!(parent.base.children().is_empty());
    }

    #[test]
    fn find_child_by_name() {
        setup();
        let parent = Probe::new();
        let child = Probe::new();
        child.base.set_name("target");
        child.base.set_parent(Some(parent.object_id())).unwrap();

        assert_eq!(
            parent.base.find_child_by_name("target"),
            Some(child.object_id())
        );
        assert_eq!(parent.base.find_child_by_name("missing"), None);
    }

    #[test]
    fn cycle_rejected() {
        setup();
        let a = Probe::new();
        let b = Probe::new();
        b.base.set_parent(Some(a.object_id())).unwrap();

        let err = a.base.set_parent(Some(b.object_id())).unwrap_err();
        assert_eq!(err, ObjectError::WouldCreateCycle);

        let err = a.base.set_parent(Some(a.object_id())).unwrap_err();
        assert_eq!(err, ObjectError::WouldCreateCycle);
    }

    #[test]
    fn drop_unregisters_and_cascades() {
        setup();
        let registry = global_registry().unwrap();
        let parent = Probe::new();
        let parent_id = parent.object_id();
        let child = Probe::new();
        let child_id = child.object_id();
        child.base.set_parent(Some(parent_id)).unwrap();

        drop(parent);
        assert!(!registry.contains(parent_id));
        // The child's registry entry went down with the parent; dropping the
        // child value afterwards must not panic.
        assert!(!registry.contains(child_id));
        drop(child);
    }

    #[test]
    fn downcast() {
        setup();
        let probe = Probe::new();
        let as_object: &dyn Object = &probe;
        assert!(object_cast::<Probe>(as_object).is_some());
    }
}
