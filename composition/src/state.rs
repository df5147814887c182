//! Composed state
//!
//! [`ComposedState`] pairs a feature's own (child) state with a read-only
//! view of its parent's state. The derives in
//! `composable-composition-macros` generate read/write accessors for child
//! fields and read-only accessors for parent fields, so writing a parent
//! field does not compile.
//!
//! Child accessors are implemented on the composed state itself (through
//! [`ChildAccess`]). Parent accessors are implemented on the parent type and
//! reached through `Deref`, one autoderef step later. A name declared by both
//! halves therefore resolves to the child.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A child state that can be read and written, plus a parent state that can only be read
///
/// # Example
///
/// ```
/// use composable_composition::ComposedState;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Child {
///     child_value: i32,
/// }
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Parent {
///     parent_value: i32,
/// }
///
/// let mut state = ComposedState::new(Child { child_value: 10 }, Parent { parent_value: 20 });
/// state.child.child_value = 15;
///
/// assert_eq!(state.read_child(|c| c.child_value), 15);
/// assert_eq!(state.read_parent(|p| p.parent_value), 20);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ComposedState<Child, Parent> {
    /// The state that can be read from and written to
    pub child: Child,

    parent: Parent,
}

impl<Child, Parent> ComposedState<Child, Parent> {
    /// Compose a child state with a parent state
    #[must_use]
    pub const fn new(child: Child, parent: Parent) -> Self {
        Self { child, parent }
    }

    /// The child state
    #[must_use]
    pub const fn child(&self) -> &Child {
        &self.child
    }

    /// The child state, mutably
    #[must_use]
    pub const fn child_mut(&mut self) -> &mut Child {
        &mut self.child
    }

    /// The parent state
    #[must_use]
    pub const fn parent(&self) -> &Parent {
        &self.parent
    }

    /// Read a value from the child state
    pub fn read_child<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&Child) -> T,
    {
        f(&self.child)
    }

    /// Read a value from the parent state
    pub fn read_parent<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&Parent) -> T,
    {
        f(&self.parent)
    }

    /// Modify the child state
    pub fn update<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut Child) -> T,
    {
        f(&mut self.child)
    }

    /// The same child composed with a newer parent state
    #[must_use]
    pub fn with_parent(self, parent: Parent) -> Self {
        Self {
            child: self.child,
            parent,
        }
    }

    /// Transform the child state, keeping the parent
    #[must_use]
    pub fn map_child<T, F>(self, f: F) -> ComposedState<T, Parent>
    where
        F: FnOnce(Child) -> T,
    {
        ComposedState {
            child: f(self.child),
            parent: self.parent,
        }
    }

    /// Split into child and parent
    #[must_use]
    pub fn into_parts(self) -> (Child, Parent) {
        (self.child, self.parent)
    }

    /// Drop the parent, keeping the child
    #[must_use]
    pub fn into_child(self) -> Child {
        self.child
    }
}

/// Read/write access to a child state
///
/// Accessor traits generated by `#[derive(ChildFields)]` are implemented
/// for every `ChildAccess` type whose `Child` is the derived struct.
pub trait ChildAccess {
    /// The child state type
    type Child;

    /// The child state
    fn child_state(&self) -> &Self::Child;

    /// The child state, mutably
    fn child_state_mut(&mut self) -> &mut Self::Child;
}

/// Read-only access to a parent state
///
/// Generic code that only needs to read the parent half can bound on this
/// trait instead of naming `ComposedState`.
pub trait ParentAccess {
    /// The parent state type
    type Parent;

    /// The parent state
    fn parent_state(&self) -> &Self::Parent;
}

impl<Child, Parent> ChildAccess for ComposedState<Child, Parent> {
    type Child = Child;

    fn child_state(&self) -> &Child {
        &self.child
    }

    fn child_state_mut(&mut self) -> &mut Child {
        &mut self.child
    }
}

impl<Child, Parent> ParentAccess for ComposedState<Child, Parent> {
    type Parent = Parent;

    fn parent_state(&self) -> &Parent {
        &self.parent
    }
}

/// Read-only forwarding to the parent
///
/// There is no `DerefMut`: `state.parent_field` reads, assigning to it does
/// not compile.
impl<Child, Parent> Deref for ComposedState<Child, Parent> {
    type Target = Parent;

    fn deref(&self) -> &Parent {
        &self.parent
    }
}
