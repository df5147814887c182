//! Binding actions
//!
//! A binding action says "the UI changed the value at this key path".
//! Reducers apply it to their state like any other action, which keeps
//! two-way data binding inside the action → reducer pipeline.
//!
//! # Example
//!
//! ```
//! use composable_composition_core::binding::{BindableAction, BindingAction};
//!
//! #[derive(Debug, Default)]
//! struct FormState {
//!     name: String,
//! }
//!
//! #[derive(Debug)]
//! enum FormAction {
//!     Binding(BindingAction<FormState>),
//!     Submit,
//! }
//!
//! impl BindableAction for FormAction {
//!     type State = FormState;
//!
//!     fn binding(action: BindingAction<FormState>) -> Self {
//!         Self::Binding(action)
//!     }
//! }
//!
//! fn name(state: &mut FormState) -> &mut String {
//!     &mut state.name
//! }
//!
//! let action = FormAction::binding(BindingAction::set("name", name, "Ada".to_string()));
//! let mut state = FormState::default();
//! if let FormAction::Binding(binding) = action {
//!     binding.apply(&mut state);
//! }
//! assert_eq!(state.name, "Ada");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Type alias for the setter stored in a binding action
type Setter<S> = Arc<dyn Fn(&mut S) + Send + Sync>;

/// A change of one bound value of state `S`
///
/// Two binding actions are equal when they target the same key path with
/// the same rendered (`Debug`) value.
pub struct BindingAction<S> {
    key_path: &'static str,
    value: String,
    setter: Setter<S>,
}

impl<S: 'static> BindingAction<S> {
    /// Create a binding action that writes `value` through `field`
    ///
    /// # Arguments
    ///
    /// - `key_path`: Name of the bound field, used for equality and logging
    /// - `field`: Projection from the state to the bound field
    /// - `value`: The new value
    #[must_use]
    pub fn set<V>(key_path: &'static str, field: fn(&mut S) -> &mut V, value: V) -> Self
    where
        V: Clone + fmt::Debug + Send + Sync + 'static,
    {
        let rendered = format!("{value:?}");
        Self {
            key_path,
            value: rendered,
            setter: Arc::new(move |state| *field(state) = value.clone()),
        }
    }
}

impl<S> BindingAction<S> {
    /// Name of the bound field
    #[must_use]
    pub const fn key_path(&self) -> &'static str {
        self.key_path
    }

    /// The new value, rendered with `Debug`
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Write the new value into `state`
    pub fn apply(&self, state: &mut S) {
        (self.setter)(state);
    }
}

impl<S> Clone for BindingAction<S> {
    fn clone(&self) -> Self {
        Self {
            key_path: self.key_path,
            value: self.value.clone(),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<S> fmt::Debug for BindingAction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingAction")
            .field("key_path", &self.key_path)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<S> PartialEq for BindingAction<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key_path == other.key_path && self.value == other.value
    }
}

impl<S> Eq for BindingAction<S> {}

impl<S> Hash for BindingAction<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_path.hash(state);
        self.value.hash(state);
    }
}

/// Actions that can carry a [`BindingAction`]
///
/// `State` is the state type the binding writes into.
pub trait BindableAction: Sized {
    /// The state the binding actions target
    type State;

    /// Embed a binding action into this action type
    fn binding(action: BindingAction<Self::State>) -> Self;
}
