//! # Composable Composition
//!
//! Primitives for embedding a reducer feature inside a parent feature.
//!
//! A feature's actions are split into two namespaces with
//! [`ComposedAction`]: actions the feature owns (`Local`) and actions it
//! forwards to the parent that embeds it (`Parent`). Its state is split the
//! same way with [`ComposedState`]: the child state is read/write, while the
//! parent state is a read-only view.
//!
//! ## Building blocks
//!
//! - [`ComposedAction`] / [`AllCases`]: the two-namespace action type
//! - [`ComposedActionReducer`]: implement `reduce_local`, get `core` for free
//! - [`CoreReducer`] / [`composed_reducer!`]: run `core` as a [`Reducer`](composable_composition_core::reducer::Reducer)
//! - [`LocalEffectExt`], [`send_local`], [`send_parent`]: effect tagging
//! - [`LocalViewStoreExt`]: `send_local` and local bindings on a view store
//! - [`ComposedState`], [`ChildAccess`], [`ParentAccess`]: composed state
//! - [`ScopedComposedReducer`]: run a composed feature on a slice of parent state
//!
//! ## Example
//!
//! ```
//! use composable_composition::{ComposedAction, ComposedActionReducer, ComposedEffects, ComposedState, CoreReducer};
//! use composable_composition_core::{effect::Effect, reducer::Reducer, smallvec};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! #[derive(Debug, Clone)]
//! struct Settings {
//!     step: i32,
//! }
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! #[derive(Debug)]
//! enum SettingsAction {
//!     Open,
//! }
//!
//! struct CounterReducer;
//!
//! impl ComposedActionReducer for CounterReducer {
//!     type State = ComposedState<Counter, Settings>;
//!     type LocalAction = CounterAction;
//!     type ParentAction = SettingsAction;
//!     type Environment = ();
//!
//!     fn reduce_local(
//!         &self,
//!         state: &mut Self::State,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> ComposedEffects<CounterAction, SettingsAction> {
//!         match action {
//!             CounterAction::Increment => state.child.count += state.parent().step,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let reducer = CoreReducer::new(CounterReducer);
//! let mut state = ComposedState::new(Counter::default(), Settings { step: 2 });
//!
//! let _ = reducer.reduce(&mut state, ComposedAction::Local(CounterAction::Increment), &());
//! let _ = reducer.reduce(&mut state, ComposedAction::Parent(SettingsAction::Open), &());
//!
//! assert_eq!(state.child.count, 2);
//! ```

pub mod action;
pub mod effect;
pub mod reducer;
pub mod scope;
pub mod state;
pub mod view;

pub use action::{AllCases, ComposedAction};
pub use effect::{LocalEffectExt, send_local, send_parent};
pub use reducer::{ComposedActionReducer, ComposedEffects, CoreReducer};
pub use scope::ScopedComposedReducer;
pub use state::{ChildAccess, ComposedState, ParentAccess};
pub use view::LocalViewStoreExt;

/// Re-exports used by [`composed_reducer!`]
#[doc(hidden)]
pub mod __private {
    pub use composable_composition_core::{SmallVec, effect::Effect, reducer::Reducer};
}
