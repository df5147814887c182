//! Embedding a composed feature in a parent reducer
//!
//! [`ScopedComposedReducer`] runs a child reducer whose state is a
//! [`ComposedState`] against one slice of a parent state. The parent view
//! is rebuilt from the parent state on every dispatch. The child slice is
//! moved out for the dispatch and moved back afterwards, so the child state
//! must implement `Default`. Every effect the
//! child produces is mapped into the parent's action space. A child effect
//! that yields `Parent(..)` therefore comes back to the parent reducer.

use crate::state::ComposedState;
use composable_composition_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use std::marker::PhantomData;

/// A child reducer scoped to a slice of parent state
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `A`: The parent action type
/// - `E`: The parent environment type
/// - `C`: The child's own state (stored in `S`)
/// - `V`: The parent view handed to the child (derived from `S`)
/// - `R`: The child reducer, over `ComposedState<C, V>`
///
/// # Example
///
/// ```ignore
/// fn counter(app: &mut AppState) -> &mut CounterState {
///     &mut app.counter
/// }
///
/// let scoped = ScopedComposedReducer::new(
///     CoreReducer::new(CounterReducer),
///     counter,
///     |app| app.settings.clone(),
///     |action| match action {
///         AppAction::Counter(action) => Some(action),
///         _ => None,
///     },
///     AppAction::Counter,
///     counter_environment,
/// );
/// ```
pub struct ScopedComposedReducer<S, A, E, C, V, R>
where
    R: Reducer<State = ComposedState<C, V>>,
{
    reducer: R,
    child_mut: fn(&mut S) -> &mut C,
    parent_view: fn(&S) -> V,
    extract_action: fn(A) -> Option<R::Action>,
    embed_action: fn(R::Action) -> A,
    get_environment: fn(&E) -> &R::Environment,
    _phantom: PhantomData<fn() -> (S, A, E)>,
}

impl<S, A, E, C, V, R> ScopedComposedReducer<S, A, E, C, V, R>
where
    R: Reducer<State = ComposedState<C, V>>,
{
    /// Scope `reducer` to a slice of the parent state
    ///
    /// # Arguments
    ///
    /// - `child_mut`: The slot holding the child state
    /// - `parent_view`: Build the read-only parent view
    /// - `extract_action`: The child action carried by a parent action, if any
    /// - `embed_action`: Wrap a child action as a parent action
    /// - `get_environment`: The child's environment within the parent's
    #[must_use]
    pub const fn new(
        reducer: R,
        child_mut: fn(&mut S) -> &mut C,
        parent_view: fn(&S) -> V,
        extract_action: fn(A) -> Option<R::Action>,
        embed_action: fn(R::Action) -> A,
        get_environment: fn(&E) -> &R::Environment,
    ) -> Self {
        Self {
            reducer,
            child_mut,
            parent_view,
            extract_action,
            embed_action,
            get_environment,
            _phantom: PhantomData,
        }
    }

    /// The child reducer
    #[must_use]
    pub const fn reducer(&self) -> &R {
        &self.reducer
    }
}

impl<S, A, E, C, V, R> Reducer for ScopedComposedReducer<S, A, E, C, V, R>
where
    R: Reducer<State = ComposedState<C, V>>,
    R::Action: Send + 'static,
    A: Send + 'static,
    C: Default,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract_action)(action) else {
            return smallvec![Effect::None];
        };

        let parent = (self.parent_view)(state);
        let child = std::mem::take((self.child_mut)(state));

        let mut composed = ComposedState::new(child, parent);
        let effects = self
            .reducer
            .reduce(&mut composed, child_action, (self.get_environment)(env));
        *(self.child_mut)(state) = composed.into_child();

        let embed = self.embed_action;
        effects.into_iter().map(|effect| effect.map(embed)).collect()
    }
}

impl<S, A, E, C, V, R> Clone for ScopedComposedReducer<S, A, E, C, V, R>
where
    R: Reducer<State = ComposedState<C, V>> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            child_mut: self.child_mut,
            parent_view: self.parent_view,
            extract_action: self.extract_action,
            embed_action: self.embed_action,
            get_environment: self.get_environment,
            _phantom: PhantomData,
        }
    }
}
