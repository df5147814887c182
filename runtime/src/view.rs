//! View stores and two-way bindings
//!
//! A [`ViewStore`] is the UI-facing side of a store: it reads state
//! snapshots synchronously and dispatches actions without awaiting the
//! reducer. Rendering metadata ([`Animation`], [`Transaction`]) travels
//! alongside a send so the UI layer can decide how to present the change.

use crate::{EffectHandle, StoreError};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

/// Timing curve of an [`Animation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Constant speed
    Linear,
    /// Starts slow
    EaseIn,
    /// Ends slow
    EaseOut,
    /// Starts and ends slow
    EaseInOut,
}

/// How a UI layer should animate the change caused by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Animation {
    /// Length of the animation
    pub duration: Duration,
    /// Timing curve
    pub curve: Curve,
}

impl Animation {
    /// A linear animation
    #[must_use]
    pub const fn linear(duration: Duration) -> Self {
        Self {
            duration,
            curve: Curve::Linear,
        }
    }

    /// An ease-in-out animation
    #[must_use]
    pub const fn ease_in_out(duration: Duration) -> Self {
        Self {
            duration,
            curve: Curve::EaseInOut,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::ease_in_out(Duration::from_millis(350))
    }
}

/// Rendering context attached to a send
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Transaction {
    /// Animation to apply, if any
    pub animation: Option<Animation>,
    /// Suppress animations for this change
    pub disables_animations: bool,
}

impl Transaction {
    /// A transaction carrying `animation`
    #[must_use]
    pub const fn new(animation: Option<Animation>) -> Self {
        Self {
            animation,
            disables_animations: false,
        }
    }

    /// Suppress animations for this change
    #[must_use]
    pub const fn disabling_animations(mut self) -> Self {
        self.disables_animations = true;
        self
    }
}

/// Something that accepts actions on behalf of a view store
///
/// Implemented by [`crate::Store`]; test doubles can implement it to
/// record what a view sent.
pub trait Dispatch<A>: Send + Sync {
    /// Start dispatching `action`
    fn dispatch(&self, action: A) -> ViewStoreTask;
}

/// Handle of an in-flight dispatch started by a view store
///
/// Dropping the task does not cancel the dispatch.
pub struct ViewStoreTask {
    inner: JoinHandle<EffectHandle>,
}

impl ViewStoreTask {
    /// Spawn `dispatch` on the current tokio runtime
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F>(dispatch: F) -> Self
    where
        F: Future<Output = EffectHandle> + Send + 'static,
    {
        Self {
            inner: tokio::spawn(dispatch),
        }
    }

    /// Wait for the reducer to run and for the effects it started
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskJoinError`] if the dispatch task panicked or was cancelled.
    pub async fn finish(self) -> Result<(), StoreError> {
        let mut effects = self.inner.await?;
        effects.wait().await;
        Ok(())
    }

    /// Whether the reducer has already run
    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        self.inner.is_finished()
    }

    /// Cancel the dispatch if the reducer has not run yet
    pub fn cancel(&self) {
        self.inner.abort();
    }
}

impl fmt::Debug for ViewStoreTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStoreTask")
            .field("dispatched", &self.is_dispatched())
            .finish()
    }
}

/// Type alias for a binding's read side
type Getter<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// Type alias for a binding's write side
type Setter<V> = Arc<dyn Fn(V) -> ViewStoreTask + Send + Sync>;

/// A two-way binding to one value derived from view state
pub struct Binding<V> {
    getter: Getter<V>,
    setter: Setter<V>,
}

impl<V> Binding<V> {
    /// Create a binding from a read side and a write side
    pub fn new<G, F>(get: G, set: F) -> Self
    where
        G: Fn() -> V + Send + Sync + 'static,
        F: Fn(V) -> ViewStoreTask + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(get),
            setter: Arc::new(set),
        }
    }

    /// Read the current value
    #[must_use]
    pub fn get(&self) -> V {
        (self.getter)()
    }

    /// Write a new value
    pub fn set(&self, value: V) -> ViewStoreTask {
        (self.setter)(value)
    }
}

impl<V> Clone for Binding<V> {
    fn clone(&self) -> Self {
        Self {
            getter: Arc::clone(&self.getter),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<V> fmt::Debug for Binding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

/// UI-facing handle on a store
///
/// # Example
///
/// ```ignore
/// let view = store.view_store();
/// view.send(CounterAction::Increment).finish().await?;
/// assert_eq!(view.with_state(|s| s.count), 1);
///
/// let count = view.binding(|s| s.count, CounterAction::Set);
/// count.set(10).finish().await?;
/// assert_eq!(count.get(), 10);
/// ```
pub struct ViewStore<S, A> {
    dispatcher: Arc<dyn Dispatch<A>>,
    state: watch::Receiver<S>,
    transactions: broadcast::Sender<Transaction>,
}

impl<S, A> ViewStore<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    /// Create a view store over `dispatcher` and its state snapshots
    #[must_use]
    pub fn new(
        dispatcher: Arc<dyn Dispatch<A>>,
        state: watch::Receiver<S>,
        transaction_capacity: usize,
    ) -> Self {
        let (transactions, _) = broadcast::channel(transaction_capacity.max(1));
        Self {
            dispatcher,
            state,
            transactions,
        }
    }

    /// The latest state snapshot
    #[must_use]
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Read the latest state snapshot via a closure
    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        f(&self.state.borrow())
    }

    /// Wait for the next state snapshot
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ChannelClosed`] once the store is gone.
    pub async fn changed(&mut self) -> Result<(), StoreError> {
        self.state.changed().await.map_err(|_| StoreError::ChannelClosed)
    }

    /// Send an action
    pub fn send(&self, action: A) -> ViewStoreTask {
        tracing::trace!("View store sending action");
        self.dispatcher.dispatch(action)
    }

    /// Send an action with an animation
    pub fn send_with_animation(&self, action: A, animation: Option<Animation>) -> ViewStoreTask {
        self.send_with_transaction(action, Transaction::new(animation))
    }

    /// Send an action with a transaction
    ///
    /// Transaction subscribers see the transaction before the action is
    /// dispatched.
    pub fn send_with_transaction(&self, action: A, transaction: Transaction) -> ViewStoreTask {
        tracing::trace!(?transaction, "View store sending action with transaction");
        // No subscribers is fine, nobody is rendering
        let _ = self.transactions.send(transaction);
        self.send(action)
    }

    /// Subscribe to the transactions attached to sends
    #[must_use]
    pub fn subscribe_transactions(&self) -> broadcast::Receiver<Transaction> {
        self.transactions.subscribe()
    }

    /// A binding that reads with `get` and writes by sending `to_action(value)`
    pub fn binding<V, G, F>(&self, get: G, to_action: F) -> Binding<V>
    where
        G: Fn(&S) -> V + Send + Sync + 'static,
        F: Fn(V) -> A + Send + Sync + 'static,
    {
        let state = self.state.clone();
        let dispatcher = Arc::clone(&self.dispatcher);
        Binding::new(
            move || get(&state.borrow()),
            move |value| dispatcher.dispatch(to_action(value)),
        )
    }

    /// A binding that reads with `get` and sends `action` on every write
    ///
    /// The written value itself is discarded.
    pub fn binding_action<V, G>(&self, get: G, action: A) -> Binding<V>
    where
        G: Fn(&S) -> V + Send + Sync + 'static,
        A: Clone + Sync,
    {
        self.binding(get, move |_| action.clone())
    }
}

impl<S, A> Clone for ViewStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            state: self.state.clone(),
            transactions: self.transactions.clone(),
        }
    }
}

impl<S, A> fmt::Debug for ViewStore<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStore")
            .field("transaction_observers", &self.transactions.receiver_count())
            .finish_non_exhaustive()
    }
}
