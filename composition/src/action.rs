//! Composed actions
//!
//! A [`ComposedAction`] tags an action as belonging either to the feature
//! itself (`Local`) or to whatever embeds it (`Parent`).

use composable_composition_core::binding::{BindableAction, BindingAction};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// An action that is either local to a feature or addressed to its parent
///
/// Equality, ordering, hashing, cloning and serialization are available
/// whenever both payload types provide them.
///
/// # Example
///
/// ```
/// use composable_composition::ComposedAction;
///
/// #[derive(Debug, PartialEq)]
/// enum CounterAction {
///     Increment,
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum AppAction {
///     Logout,
/// }
///
/// let action: ComposedAction<CounterAction, AppAction> = ComposedAction::local(CounterAction::Increment);
/// match action {
///     ComposedAction::Local(local) => assert_eq!(local, CounterAction::Increment),
///     ComposedAction::Parent(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComposedAction<Local, Parent> {
    /// An action for the local reducer
    Local(Local),

    /// An action for the parent reducer
    Parent(Parent),
}

impl<Local, Parent> ComposedAction<Local, Parent> {
    /// Wrap a local action
    #[must_use]
    pub const fn local(action: Local) -> Self {
        Self::Local(action)
    }

    /// Wrap a parent action
    #[must_use]
    pub const fn parent(action: Parent) -> Self {
        Self::Parent(action)
    }

    /// Returns true if this is a local action
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// Returns true if this is a parent action
    #[must_use]
    pub const fn is_parent(&self) -> bool {
        matches!(self, Self::Parent(_))
    }

    /// The local payload, if any
    #[must_use]
    pub const fn as_local(&self) -> Option<&Local> {
        match self {
            Self::Local(action) => Some(action),
            Self::Parent(_) => None,
        }
    }

    /// The parent payload, if any
    #[must_use]
    pub const fn as_parent(&self) -> Option<&Parent> {
        match self {
            Self::Local(_) => None,
            Self::Parent(action) => Some(action),
        }
    }

    /// Unwrap the local payload, if any
    #[must_use]
    pub fn into_local(self) -> Option<Local> {
        match self {
            Self::Local(action) => Some(action),
            Self::Parent(_) => None,
        }
    }

    /// Unwrap the parent payload, if any
    #[must_use]
    pub fn into_parent(self) -> Option<Parent> {
        match self {
            Self::Local(_) => None,
            Self::Parent(action) => Some(action),
        }
    }

    /// Transform the local payload, leaving parent actions untouched
    #[must_use]
    pub fn map_local<T, F>(self, f: F) -> ComposedAction<T, Parent>
    where
        F: FnOnce(Local) -> T,
    {
        match self {
            Self::Local(action) => ComposedAction::Local(f(action)),
            Self::Parent(action) => ComposedAction::Parent(action),
        }
    }

    /// Transform the parent payload, leaving local actions untouched
    #[must_use]
    pub fn map_parent<T, F>(self, f: F) -> ComposedAction<Local, T>
    where
        F: FnOnce(Parent) -> T,
    {
        match self {
            Self::Local(action) => ComposedAction::Local(action),
            Self::Parent(action) => ComposedAction::Parent(f(action)),
        }
    }
}

/// Types whose values can be listed exhaustively
///
/// Fieldless enums get an implementation from
/// `#[derive(AllCases)]` in `composable-composition-macros`.
pub trait AllCases: Sized {
    /// Every value, in declaration order
    fn all_cases() -> Vec<Self>;
}

/// All local cases (in `Local`'s order) followed by all parent cases (in `Parent`'s order)
impl<Local, Parent> AllCases for ComposedAction<Local, Parent>
where
    Local: AllCases,
    Parent: AllCases,
{
    fn all_cases() -> Vec<Self> {
        Local::all_cases()
            .into_iter()
            .map(Self::Local)
            .chain(Parent::all_cases().into_iter().map(Self::Parent))
            .collect()
    }
}

impl AllCases for bool {
    fn all_cases() -> Vec<Self> {
        vec![false, true]
    }
}

impl AllCases for () {
    fn all_cases() -> Vec<Self> {
        vec![()]
    }
}

/// A feature with no parent actions can use `Infallible` as `Parent`
impl AllCases for Infallible {
    fn all_cases() -> Vec<Self> {
        Vec::new()
    }
}

/// Binding actions always land in the `Local` variant
///
/// The binding's state is the local action's own state, not the composed one.
impl<Local, Parent> BindableAction for ComposedAction<Local, Parent>
where
    Local: BindableAction,
{
    type State = Local::State;

    fn binding(action: BindingAction<Self::State>) -> Self {
        Self::Local(Local::binding(action))
    }
}
