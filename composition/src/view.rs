//! View store helpers for composed actions
//!
//! Views of a composed feature send local actions; these helpers do the
//! `Local(..)` wrapping and otherwise behave exactly like the underlying
//! [`ViewStore`] calls.

use crate::action::ComposedAction;
use composable_composition_runtime::view::{Animation, Binding, Transaction, ViewStore, ViewStoreTask};

/// Local-action conveniences for `ViewStore<S, ComposedAction<L, P>>`
///
/// # Example
///
/// ```ignore
/// use composable_composition::LocalViewStoreExt;
///
/// view.send_local(CounterAction::Increment).finish().await?;
///
/// let step = view.binding_local(|s| s.child.step, CounterAction::SetStep);
/// step.set(5).finish().await?;
/// ```
pub trait LocalViewStoreExt<S, L, P> {
    /// Send `Local(action)`
    fn send_local(&self, action: L) -> ViewStoreTask;

    /// Send `Local(action)` with an animation
    fn send_local_with_animation(&self, action: L, animation: Option<Animation>) -> ViewStoreTask;

    /// Send `Local(action)` with a transaction
    fn send_local_with_transaction(&self, action: L, transaction: Transaction) -> ViewStoreTask;

    /// A binding that reads with `get` and writes by sending `Local(to_local(value))`
    fn binding_local<V, G, F>(&self, get: G, to_local: F) -> Binding<V>
    where
        G: Fn(&S) -> V + Send + Sync + 'static,
        F: Fn(V) -> L + Send + Sync + 'static;

    /// A binding that reads with `get` and sends `Local(action)` on every write
    fn binding_local_action<V, G>(&self, get: G, action: L) -> Binding<V>
    where
        G: Fn(&S) -> V + Send + Sync + 'static,
        L: Clone + Sync;
}

impl<S, L, P> LocalViewStoreExt<S, L, P> for ViewStore<S, ComposedAction<L, P>>
where
    S: Clone + Send + Sync + 'static,
    L: Send + 'static,
    P: Send + 'static,
{
    fn send_local(&self, action: L) -> ViewStoreTask {
        self.send(ComposedAction::Local(action))
    }

    fn send_local_with_animation(&self, action: L, animation: Option<Animation>) -> ViewStoreTask {
        self.send_with_animation(ComposedAction::Local(action), animation)
    }

    fn send_local_with_transaction(&self, action: L, transaction: Transaction) -> ViewStoreTask {
        self.send_with_transaction(ComposedAction::Local(action), transaction)
    }

    fn binding_local<V, G, F>(&self, get: G, to_local: F) -> Binding<V>
    where
        G: Fn(&S) -> V + Send + Sync + 'static,
        F: Fn(V) -> L + Send + Sync + 'static,
    {
        self.binding(get, move |value| ComposedAction::Local(to_local(value)))
    }

    fn binding_local_action<V, G>(&self, get: G, action: L) -> Binding<V>
    where
        G: Fn(&S) -> V + Send + Sync + 'static,
        L: Clone + Sync,
    {
        self.binding(get, move |_| ComposedAction::Local(action.clone()))
    }
}
