//! Given-When-Then tests for reducers
//!
//! A [`ReducerTest`] runs one or more actions through a reducer, starting
//! from a known state, and then checks the resulting state and the effects
//! every reduction returned.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use composable_composition_core::{effect::Effect, reducer::Reducer};

type StateAssertion<S> = Box<dyn FnOnce(&S)>;

type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent reducer test
///
/// Actions are reduced in the order they were given. Effects are not
/// executed; the assertions see every effect returned, concatenated in
/// reduction order. Use [`crate::effects`] to run them.
///
/// # Example
///
/// ```ignore
/// use composable_composition_testing::{ReducerTest, assertions};
///
/// ReducerTest::new(CoreReducer::new(CounterReducer))
///     .with_env(())
///     .given_state(CounterState { count: 0 })
///     .when_action(ComposedAction::Local(CounterAction::Increment))
///     .when_action(ComposedAction::Parent(AppAction::Logout))
///     .then_state(|state| assert_eq!(state.count, 1))
///     .then_effects(assertions::assert_all_none)
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    environment: Option<R::Environment>,
    initial_state: Option<R::State>,
    actions: Vec<R::Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
    effect_assertions: Vec<EffectAssertion<R::Action>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// A test for `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment
    #[must_use]
    pub fn with_env(mut self, env: R::Environment) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to reduce (When)
    ///
    /// May be called repeatedly; actions run in call order.
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add several actions to reduce (When)
    #[must_use]
    pub fn when_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = R::Action>,
    {
        self.actions.extend(actions);
        self
    }

    /// Add an assertion about the final state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the returned effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<R::Action>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Reduce every action, run the assertions, and hand back the effects
    ///
    /// # Panics
    ///
    /// Panics if the initial state, environment, or actions are missing,
    /// or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) -> Vec<Effect<R::Action>> {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let mut effects = Vec::new();
        for action in self.actions {
            effects.extend(self.reducer.reduce(&mut state, action, &env));
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }

        effects
    }
}

/// Helper assertions for effects
pub mod assertions {
    use composable_composition_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain at least one Future effect
    ///
    /// # Panics
    ///
    /// Panics if no Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }

    /// Assert that effects contain at least one `Delay` effect
    ///
    /// # Panics
    ///
    /// Panics if no `Delay` effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_delay_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Delay { .. })),
            "Expected at least one Delay effect, but none found"
        );
    }

    /// Assert that no effect does any work
    ///
    /// Unlike [`assert_no_effects`], nested `Parallel`/`Sequential` groups
    /// that only contain `None` are accepted.
    ///
    /// # Panics
    ///
    /// Panics if any effect is a `Future` or `Delay`, at any depth.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_all_none<A>(effects: &[Effect<A>]) {
        fn is_inert<A>(effect: &Effect<A>) -> bool {
            match effect {
                Effect::None => true,
                Effect::Parallel(inner) | Effect::Sequential(inner) => inner.iter().all(is_inert),
                Effect::Future(_) | Effect::Delay { .. } => false,
            }
        }

        assert!(
            effects.iter().all(is_inert),
            "Expected only inert effects, but found work to do"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_composition_core::{SmallVec, smallvec};
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct Timer {
        ticks: u32,
        running: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TimerAction {
        Start,
        Tick,
        Stop,
    }

    struct TimerReducer;

    impl Reducer for TimerReducer {
        type State = Timer;
        type Action = TimerAction;
        type Environment = Duration;

        fn reduce(
            &self,
            state: &mut Timer,
            action: TimerAction,
            interval: &Duration,
        ) -> SmallVec<[Effect<TimerAction>; 4]> {
            match action {
                TimerAction::Start => {
                    state.running = true;
                    smallvec![Effect::Delay {
                        duration: *interval,
                        action: Box::new(TimerAction::Tick),
                    }]
                },
                TimerAction::Tick if state.running => {
                    state.ticks += 1;
                    smallvec![Effect::None]
                },
                TimerAction::Tick | TimerAction::Stop => {
                    state.running = false;
                    smallvec![Effect::merge(vec![Effect::None])]
                },
            }
        }
    }

    fn stopped() -> Timer {
        Timer {
            ticks: 0,
            running: false,
        }
    }

    #[test]
    fn test_single_action() {
        ReducerTest::new(TimerReducer)
            .with_env(Duration::from_secs(1))
            .given_state(stopped())
            .when_action(TimerAction::Start)
            .then_state(|state| assert!(state.running))
            .then_effects(assertions::assert_has_delay_effect)
            .run();
    }

    #[test]
    fn test_actions_run_in_order() {
        let effects = ReducerTest::new(TimerReducer)
            .with_env(Duration::from_secs(1))
            .given_state(stopped())
            .when_actions([TimerAction::Start, TimerAction::Tick, TimerAction::Tick])
            .when_action(TimerAction::Stop)
            .then_state(|state| {
                assert_eq!(state.ticks, 2);
                assert!(!state.running);
            })
            .run();

        assertions::assert_effects_count(&effects, 4);
    }

    #[test]
    fn test_tick_while_stopped() {
        ReducerTest::new(TimerReducer)
            .with_env(Duration::from_secs(1))
            .given_state(stopped())
            .when_action(TimerAction::Tick)
            .then_state(|state| assert_eq!(state, &stopped()))
            .then_effects(assertions::assert_all_none)
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<TimerAction>(&[Effect::None]);
        assertions::assert_no_effects::<TimerAction>(&[]);
    }

    #[test]
    #[should_panic(expected = "Expected only inert effects")]
    fn test_assert_all_none_rejects_work() {
        assertions::assert_all_none(&[Effect::chain(vec![Effect::None, Effect::send(TimerAction::Tick)])]);
    }

    #[test]
    #[should_panic(expected = "At least one action")]
    fn test_missing_action_panics() {
        let _ = ReducerTest::new(TimerReducer)
            .with_env(Duration::from_secs(1))
            .given_state(stopped())
            .run();
    }
}
