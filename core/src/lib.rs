//! # Composable Composition Core
//!
//! Host abstractions that the composition primitives plug into.
//!
//! This crate provides the minimal unidirectional-data-flow vocabulary:
//!
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions whose results are fed back as actions
//! - **Binding**: "A UI-bound value changed" actions for two-way data binding
//!
//! ## Example
//!
//! ```
//! use composable_composition_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let _ = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Binding actions for two-way data binding
pub mod binding;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The effects to be executed by the runtime. `[Effect::None]` means
        /// "nothing to do".
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe work to be performed by the runtime.
/// They are values (not execution); whatever action they eventually
/// produce is redelivered into the same dispatch loop.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts, debouncing)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Returns true for the no-op effect
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }

    impl<Action> Effect<Action>
    where
        Action: Send + 'static,
    {
        /// An effect that immediately feeds `action` back into the store
        ///
        /// # Example
        ///
        /// ```
        /// use composable_composition_core::effect::Effect;
        ///
        /// let effect = Effect::send(42);
        /// assert!(matches!(effect, Effect::Future(_)));
        /// ```
        #[must_use]
        pub fn send(action: Action) -> Effect<Action> {
            Effect::Future(Box::pin(std::future::ready(Some(action))))
        }

        /// Transform every action this effect produces
        ///
        /// Only payloads change: parallel and sequential groupings, delays
        /// and futures keep their shape.
        ///
        /// # Example
        ///
        /// ```
        /// use composable_composition_core::effect::Effect;
        /// use std::time::Duration;
        ///
        /// let effect = Effect::Delay {
        ///     duration: Duration::from_millis(5),
        ///     action: Box::new(1),
        /// };
        ///
        /// match effect.map(|n: i32| n.to_string()) {
        ///     Effect::Delay { action, .. } => assert_eq!(*action, "1"),
        ///     other => panic!("unexpected effect: {other:?}"),
        /// }
        /// ```
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            B: Send + 'static,
            F: Fn(Action) -> B + Send + Sync + 'static,
        {
            self.map_shared(&Arc::new(f))
        }

        fn map_shared<B, F>(self, f: &Arc<F>) -> Effect<B>
        where
            B: Send + 'static,
            F: Fn(Action) -> B + Send + Sync + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => Effect::Parallel(
                    effects.into_iter().map(|effect| effect.map_shared(f)).collect(),
                ),
                Effect::Sequential(effects) => Effect::Sequential(
                    effects.into_iter().map(|effect| effect.map_shared(f)).collect(),
                ),
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new((**f)(*action)),
                },
                Effect::Future(fut) => {
                    let f = Arc::clone(f);
                    Effect::Future(Box::pin(async move { fut.await.map(|action| (*f)(action)) }))
                },
            }
        }
    }
}
