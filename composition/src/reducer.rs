//! Reducers over composed actions
//!
//! A feature implements [`ComposedActionReducer::reduce_local`] and gets
//! [`ComposedActionReducer::core`] for free: local actions reach the
//! feature, parent actions are left to the parent.

use crate::action::ComposedAction;
use composable_composition_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Effects returned when reducing a [`ComposedAction`]
pub type ComposedEffects<Local, Parent> = SmallVec<[Effect<ComposedAction<Local, Parent>>; 4]>;

/// A reducer whose action type is `ComposedAction<LocalAction, ParentAction>`
///
/// # Example
///
/// ```
/// use composable_composition::{ComposedAction, ComposedActionReducer, ComposedEffects, composed_reducer};
/// use composable_composition_core::{effect::Effect, reducer::Reducer, smallvec};
///
/// #[derive(Debug, Default)]
/// struct CounterState {
///     count: i64,
/// }
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment,
/// }
///
/// #[derive(Debug)]
/// enum AppAction {
///     Logout,
/// }
///
/// struct CounterReducer;
///
/// impl ComposedActionReducer for CounterReducer {
///     type State = CounterState;
///     type LocalAction = CounterAction;
///     type ParentAction = AppAction;
///     type Environment = ();
///
///     fn reduce_local(
///         &self,
///         state: &mut CounterState,
///         action: CounterAction,
///         _env: &(),
///     ) -> ComposedEffects<CounterAction, AppAction> {
///         match action {
///             CounterAction::Increment => state.count += 1,
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// composed_reducer!(CounterReducer);
///
/// let mut state = CounterState::default();
/// let _ = CounterReducer.reduce(&mut state, ComposedAction::Local(CounterAction::Increment), &());
/// let _ = CounterReducer.reduce(&mut state, ComposedAction::Parent(AppAction::Logout), &());
/// assert_eq!(state.count, 1);
/// ```
pub trait ComposedActionReducer {
    /// The state type this reducer operates on
    type State;

    /// Actions owned by this feature
    type LocalAction;

    /// Actions owned by the embedding parent
    type ParentAction;

    /// The environment type with injected dependencies
    type Environment;

    /// Handle a local action
    ///
    /// May mutate `state` and return follow-up effects; any action those
    /// effects produce is redelivered through the same dispatch loop.
    fn reduce_local(
        &self,
        state: &mut Self::State,
        action: Self::LocalAction,
        env: &Self::Environment,
    ) -> ComposedEffects<Self::LocalAction, Self::ParentAction>;

    /// Dispatch a composed action
    ///
    /// `Local` actions go to [`reduce_local`](Self::reduce_local) untouched.
    /// `Parent` actions leave `state` alone and produce no work; they belong
    /// to the parent's own reducer.
    fn core(
        &self,
        state: &mut Self::State,
        action: ComposedAction<Self::LocalAction, Self::ParentAction>,
        env: &Self::Environment,
    ) -> ComposedEffects<Self::LocalAction, Self::ParentAction> {
        match action {
            ComposedAction::Local(local) => self.reduce_local(state, local, env),
            ComposedAction::Parent(_) => {
                tracing::trace!("Parent action left to the parent reducer");
                smallvec![Effect::None]
            },
        }
    }
}

/// Adapter that runs a [`ComposedActionReducer`] as a plain [`Reducer`]
///
/// The whole reduction is [`ComposedActionReducer::core`], for features
/// that have nothing else to orchestrate. Use [`composed_reducer!`](crate::composed_reducer)
/// to get the same on the type itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreReducer<R>(R);

impl<R> CoreReducer<R> {
    /// Wrap a composed action reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self(reducer)
    }

    /// The wrapped reducer
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.0
    }

    /// Unwrap the reducer
    #[must_use]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Reducer for CoreReducer<R>
where
    R: ComposedActionReducer,
{
    type State = R::State;
    type Action = ComposedAction<R::LocalAction, R::ParentAction>;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.0.core(state, action, env)
    }
}

/// Implement [`Reducer`] for a [`ComposedActionReducer`] by delegating to `core`
///
/// ```ignore
/// composed_reducer!(CounterReducer);
/// ```
#[macro_export]
macro_rules! composed_reducer {
    ($reducer:ty) => {
        impl $crate::__private::Reducer for $reducer {
            type State = <$reducer as $crate::ComposedActionReducer>::State;
            type Action = $crate::ComposedAction<
                <$reducer as $crate::ComposedActionReducer>::LocalAction,
                <$reducer as $crate::ComposedActionReducer>::ParentAction,
            >;
            type Environment = <$reducer as $crate::ComposedActionReducer>::Environment;

            fn reduce(
                &self,
                state: &mut Self::State,
                action: Self::Action,
                env: &Self::Environment,
            ) -> $crate::__private::SmallVec<[$crate::__private::Effect<Self::Action>; 4]> {
                $crate::ComposedActionReducer::core(self, state, action, env)
            }
        }
    };
}
