//! # Composable Composition Runtime
//!
//! Host runtime that drives reducers: the Store executes the
//! action → reducer → effects → action feedback loop, and the
//! [`view::ViewStore`] exposes it to a UI layer.
//!
//! ## Example
//!
//! ```ignore
//! use composable_composition_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use composable_composition_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};

/// View stores, bindings and UI transaction metadata
pub mod view;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// A dispatch task failed to complete
        ///
        /// This typically means the spawned task panicked or was cancelled.
        #[error("Dispatch task failed: {0}")]
        TaskJoinError(#[from] tokio::task::JoinError),

        /// Timeout waiting for effects or a terminal action
        #[error("Timeout waiting for action")]
        Timeout,

        /// A broadcast or state channel closed
        ///
        /// Happens once every store handle has been dropped.
        #[error("Store channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Configuration for a [`Store`]
///
/// # Example
///
/// ```
/// use composable_composition_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(64)
///     .with_transaction_capacity(8);
/// assert_eq!(config.broadcast_capacity(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    broadcast_capacity: usize,
    transaction_capacity: usize,
}

impl StoreConfig {
    /// Capacity of the channel that broadcasts effect-produced actions
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Capacity of each view store's transaction channel
    #[must_use]
    pub const fn with_transaction_capacity(mut self, capacity: usize) -> Self {
        self.transaction_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Action broadcast capacity
    #[must_use]
    pub const fn broadcast_capacity(&self) -> usize {
        self.broadcast_capacity
    }

    /// Transaction channel capacity
    #[must_use]
    pub const fn transaction_capacity(&self) -> usize {
        self.transaction_capacity
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 16,
            transaction_capacity: 16,
        }
    }
}

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] to allow waiting for the effects started
/// by that action, including the effects of every action they feed back.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Start).await;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };
        let tracking = EffectTracking {
            counter,
            notifier: Arc::new(tx),
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    #[must_use]
    pub fn completed() -> Self {
        let (handle, _tracking) = Self::new();
        handle
    }

    /// Number of effects still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.effects.load(Ordering::SeqCst)
    }

    /// Wait for all effects to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                // Every tracker is gone, nothing can still be running
                break;
            }
        }
    }

    /// Wait for all effects to complete with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending())
            .finish_non_exhaustive()
    }
}

/// Internal: Effect tracking context passed through effect execution
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop
///
/// Keeps the counter accurate even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{
        Arc, DecrementGuard, Duration, Effect, EffectHandle, EffectTracking, Reducer, RwLock,
        StoreConfig, StoreError, watch,
    };
    use crate::view::{Dispatch, ViewStore, ViewStoreTask};
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, with snapshots published to view stores)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        snapshots: Arc<watch::Sender<S>>,
        reducer: R,
        environment: E,
        config: StoreConfig,
        /// Every action produced by an effect is broadcast here before it
        /// is fed back into the reducer.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Clone + Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity());
            let (snapshots, _) = watch::channel(initial_state.clone());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                snapshots: Arc::new(snapshots),
                reducer,
                environment,
                config,
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer under the state write lock, publishes the new
        /// snapshot, then starts the returned effects. The returned handle
        /// tracks those effects and every action they feed back.
        ///
        /// # Example
        ///
        /// ```ignore
        /// let mut handle = store.send(CounterAction::Increment).await;
        /// handle.wait().await;
        /// ```
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> EffectHandle {
            let (handle, tracking) = EffectHandle::new();
            self.dispatch_tracked(action, &tracking).await;
            handle
        }

        async fn dispatch_tracked(&self, action: A, tracking: &EffectTracking) {
            tracing::debug!("Processing action");
            metrics::counter!("store.commands.total").increment(1);

            let effects = {
                let mut state = self.state.write().await;

                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                self.snapshots.send_replace(state.clone());
                effects
            };

            for effect in effects {
                self.execute_effect(effect, tracking.clone());
            }
        }

        /// Send an action and wait for an effect-produced action matching `predicate`
        ///
        /// Subscribes before sending, so a fast effect cannot be missed.
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: no matching action within `timeout`
        /// - [`StoreError::ChannelClosed`]: the action broadcast closed
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            F: Fn(&A) -> bool,
        {
            let mut rx = self.action_broadcast.subscribe();
            let _ = self.send(action).await;

            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {},
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Action observer lagged");
                        },
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        },
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Read current state via a closure
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to actions produced by effects
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// A view store that dispatches into this store
        #[must_use]
        pub fn view_store(&self) -> ViewStore<S, A> {
            ViewStore::new(
                Arc::new(self.clone()),
                self.snapshots.subscribe(),
                self.config.transaction_capacity(),
            )
        }

        /// Feed an effect-produced action back into the store
        ///
        /// The action's own effects join the tracking of the effect that
        /// produced it.
        async fn feed_back(&self, action: A, tracking: &EffectTracking) {
            let _ = self.action_broadcast.send(action.clone());
            self.dispatch_tracked(action, tracking).await;
        }

        /// Execute an effect with tracking
        ///
        /// - `None`: No-op
        /// - `Future`: Spawns the computation, sends the resulting action if `Some`
        /// - `Delay`: Waits for duration, then sends action
        /// - `Parallel`: Executes effects concurrently
        /// - `Sequential`: Executes effects in order, waiting for each to complete
        ///
        /// Effect failures (panics in spawned tasks) are contained in their
        /// task; [`DecrementGuard`] keeps the tracking counter accurate.
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned into spawned tasks
        fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    tracking.increment();

                    let guard = DecrementGuard(tracking.clone());
                    let store = self.clone();

                    tokio::spawn(async move {
                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");
                            store.feed_back(action, &guard.0).await;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    });
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    tracking.increment();

                    let guard = DecrementGuard(tracking.clone());
                    let store = self.clone();

                    tokio::spawn(async move {
                        tokio::time::sleep(duration).await;
                        tracing::trace!("Effect::Delay completed, sending action");
                        store.feed_back(*action, &guard.0).await;
                    });
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                    for effect in effects {
                        self.execute_effect(effect, tracking.clone());
                    }
                },
                Effect::Sequential(effects) => {
                    let effect_count = effects.len();
                    tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                    metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);
                    tracking.increment();

                    let guard = DecrementGuard(tracking.clone());
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = guard;

                        for (idx, effect) in effects.into_iter().enumerate() {
                            tracing::trace!(
                                "Executing sequential effect {} of {}",
                                idx + 1,
                                effect_count
                            );

                            let (mut step, step_tracking) = EffectHandle::new();
                            store.execute_effect(effect, step_tracking);
                            step.wait().await;
                        }
                        tracing::trace!("Effect::Sequential completed");
                    });
                },
            }
        }
    }

    impl<S, A, E, R> Dispatch<A> for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Clone + Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        fn dispatch(&self, action: A) -> ViewStoreTask {
            let store = self.clone();
            ViewStoreTask::spawn(async move { store.send(action).await })
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                snapshots: Arc::clone(&self.snapshots),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                config: self.config,
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("config", &self.config)
                .field("observers", &self.action_broadcast.receiver_count())
                .finish_non_exhaustive()
        }
    }
}

// Re-export for convenience
pub use store::Store;
