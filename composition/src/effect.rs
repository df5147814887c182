//! Effect helpers that tag produced actions
//!
//! Call sites build local or parent effects without spelling out the
//! [`ComposedAction`] wrapping.

use crate::action::ComposedAction;
use composable_composition_core::effect::Effect;

/// Lift effects into the `Local` variant of a [`ComposedAction`]
pub trait LocalEffectExt<A> {
    /// Transform every produced action with `f` and tag it `Local`
    ///
    /// Timing and structure are unchanged; only payloads are re-tagged.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_composition::{ComposedAction, LocalEffectExt};
    /// use composable_composition_core::effect::Effect;
    ///
    /// #[derive(Debug)]
    /// enum SearchAction {
    ///     ResultsLoaded(Vec<String>),
    /// }
    ///
    /// let fetch: Effect<Vec<String>> = Effect::send(vec!["rust".to_string()]);
    /// let effect: Effect<ComposedAction<SearchAction, ()>> = fetch.map_local(SearchAction::ResultsLoaded);
    /// assert!(matches!(effect, Effect::Future(_)));
    /// ```
    #[must_use]
    fn map_local<L, P, F>(self, f: F) -> Effect<ComposedAction<L, P>>
    where
        L: Send + 'static,
        P: Send + 'static,
        F: Fn(A) -> L + Send + Sync + 'static;

    /// Tag every produced action `Local` without transforming it
    #[must_use]
    fn into_local<P>(self) -> Effect<ComposedAction<A, P>>
    where
        P: Send + 'static;
}

impl<A> LocalEffectExt<A> for Effect<A>
where
    A: Send + 'static,
{
    fn map_local<L, P, F>(self, f: F) -> Effect<ComposedAction<L, P>>
    where
        L: Send + 'static,
        P: Send + 'static,
        F: Fn(A) -> L + Send + Sync + 'static,
    {
        self.map(move |action| ComposedAction::Local(f(action)))
    }

    fn into_local<P>(self) -> Effect<ComposedAction<A, P>>
    where
        P: Send + 'static,
    {
        self.map(ComposedAction::Local)
    }
}

/// An effect that sends `action` back as `Local(action)`
#[must_use]
pub fn send_local<L, P>(action: L) -> Effect<ComposedAction<L, P>>
where
    L: Send + 'static,
    P: Send + 'static,
{
    Effect::send(ComposedAction::Local(action))
}

/// An effect that sends `action` up as `Parent(action)`
///
/// The feature's own reducer ignores it; the embedding parent observes it.
#[must_use]
pub fn send_parent<L, P>(action: P) -> Effect<ComposedAction<L, P>>
where
    L: Send + 'static,
    P: Send + 'static,
{
    Effect::send(ComposedAction::Parent(action))
}
