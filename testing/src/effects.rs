//! Running effects in tests
//!
//! Reducers return effect descriptions. These helpers execute them directly,
//! outside a store, and collect every action they produce so a test can
//! assert on what would have been fed back.
//!
//! Collection order is deterministic: the branches of `Parallel` are
//! reported in declaration order even though they run concurrently.

use composable_composition_core::effect::Effect;
use futures::future::{BoxFuture, FutureExt, join_all};

/// Run `effect` to completion and return the actions it produced
///
/// `Delay` effects really sleep, so pair them with
/// `tokio::time::pause()` when the duration matters.
///
/// # Example
///
/// ```
/// use composable_composition_core::effect::Effect;
/// use composable_composition_testing::effects::collect_actions;
///
/// let effect = Effect::chain(vec![Effect::send(1), Effect::None, Effect::send(2)]);
/// let actions = tokio_test::block_on(collect_actions(effect));
/// assert_eq!(actions, vec![1, 2]);
/// ```
pub fn collect_actions<A>(effect: Effect<A>) -> BoxFuture<'static, Vec<A>>
where
    A: Send + 'static,
{
    async move {
        match effect {
            Effect::None => Vec::new(),
            Effect::Future(fut) => fut.await.into_iter().collect(),
            Effect::Delay { duration, action } => {
                tokio::time::sleep(duration).await;
                vec![*action]
            },
            Effect::Parallel(effects) => join_all(effects.into_iter().map(collect_actions))
                .await
                .into_iter()
                .flatten()
                .collect(),
            Effect::Sequential(effects) => {
                let mut actions = Vec::new();
                for effect in effects {
                    actions.extend(collect_actions(effect).await);
                }
                actions
            },
        }
    }
    .boxed()
}

/// Run every effect a reducer returned, in order, and return all produced actions
pub async fn collect_all_actions<A, I>(effects: I) -> Vec<A>
where
    A: Send + 'static,
    I: IntoIterator<Item = Effect<A>>,
{
    let mut actions = Vec::new();
    for effect in effects {
        actions.extend(collect_actions(effect).await);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_none_produces_nothing() {
        assert!(collect_actions(Effect::<u8>::None).await.is_empty());
    }

    #[tokio::test]
    async fn test_future_without_action() {
        let effect: Effect<u8> = Effect::Future(Box::pin(async { None }));
        assert!(collect_actions(effect).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_parallel_keeps_declaration_order() {
        let effect = Effect::merge(vec![
            Effect::Delay {
                duration: Duration::from_secs(5),
                action: Box::new("slow"),
            },
            Effect::send("fast"),
        ]);

        assert_eq!(collect_actions(effect).await, vec!["slow", "fast"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nested_structure() {
        let effect = Effect::chain(vec![
            Effect::send(1),
            Effect::merge(vec![Effect::send(2), Effect::send(3)]),
            Effect::Delay {
                duration: Duration::from_millis(10),
                action: Box::new(4),
            },
        ]);

        assert_eq!(collect_actions(effect).await, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_collect_all_actions() {
        let effects = vec![Effect::send('a'), Effect::None, Effect::send('b')];
        assert_eq!(collect_all_actions(effects).await, vec!['a', 'b']);
    }
}
