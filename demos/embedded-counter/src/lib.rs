//! # Embedded Counter
//!
//! A counter feature written only against its own state and actions, then
//! embedded in an app that owns the settings the counter reads.
//!
//! This demo showcases:
//! - `ComposedState`: the counter mutates its own state and reads the app's settings
//! - `ComposedAction`: the counter reports back to the app with `Parent` actions
//! - Derived accessors: `#[derive(ChildFields)]` / `#[derive(ParentFields)]`
//! - Binding actions flowing through the `Local` variant
//! - `ScopedComposedReducer`: running the counter on a slice of the app state
//!
//! ## Example
//!
//! ```no_run
//! use composable_composition::ComposedAction;
//! use composable_composition_runtime::Store;
//! use embedded_counter::{AppAction, AppEnvironment, AppReducer, AppState, CounterAction};
//!
//! # async fn example() {
//! let store = Store::new(AppState::default(), AppReducer::new(), AppEnvironment::default());
//!
//! let _ = store.send(AppAction::Counter(ComposedAction::Local(CounterAction::Increment))).await;
//! let count = store.state(|s| s.counter.count).await;
//! assert_eq!(count, 1);
//! # }
//! ```

use composable_composition::{
    ComposedAction, ComposedActionReducer, ComposedEffects, ComposedState, ScopedComposedReducer,
    composed_reducer, send_parent,
};
use composable_composition_core::{
    SmallVec,
    binding::{BindableAction, BindingAction},
    effect::Effect,
    reducer::Reducer,
    smallvec,
};
use composable_composition_macros::{AllCases, ChildFields, ParentFields};
use std::time::Duration;

/// Counter state, owned by the counter
#[derive(Debug, Clone, PartialEq, Eq, ChildFields)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
    /// Amount added or removed per step
    pub step: i64,
}

impl Default for CounterState {
    fn default() -> Self {
        Self { count: 0, step: 1 }
    }
}

/// App settings, owned by the app and read by the counter
#[derive(Debug, Clone, PartialEq, Eq, ParentFields)]
pub struct AppSettings {
    /// Upper bound for the counter
    pub max_count: i64,
    /// Signed-in user
    pub username: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            max_count: 10,
            username: "guest".to_string(),
        }
    }
}

/// The state the counter feature runs against
pub type CounterFeatureState = ComposedState<CounterState, AppSettings>;

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add one step, unless that passes the app's limit
    Increment,
    /// Remove one step
    Decrement,
    /// Back to zero
    Reset,
    /// Increment after the environment's delay
    IncrementLater,
    /// A bound field changed
    Binding(BindingAction<CounterState>),
}

impl BindableAction for CounterAction {
    type State = CounterState;

    fn binding(action: BindingAction<CounterState>) -> Self {
        Self::Binding(action)
    }
}

/// What the counter tells the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllCases)]
pub enum CounterDelegate {
    /// An increment was refused at the limit
    LimitReached,
    /// The counter went back to zero
    Cleared,
}

/// Actions of the counter feature
pub type CounterFeatureAction = ComposedAction<CounterAction, CounterDelegate>;

/// Counter environment
#[derive(Debug, Clone)]
pub struct CounterEnvironment {
    /// Delay used by [`CounterAction::IncrementLater`]
    pub delay: Duration,
}

impl Default for CounterEnvironment {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(250),
        }
    }
}

/// The step field, for binding actions
pub fn step_field(state: &mut CounterState) -> &mut i64 {
    &mut state.step
}

/// Counter feature reducer
///
/// Handles local actions only; delegate actions go up to the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFeature;

impl ComposedActionReducer for CounterFeature {
    type State = CounterFeatureState;
    type LocalAction = CounterAction;
    type ParentAction = CounterDelegate;
    type Environment = CounterEnvironment;

    fn reduce_local(
        &self,
        state: &mut Self::State,
        action: CounterAction,
        env: &CounterEnvironment,
    ) -> ComposedEffects<CounterAction, CounterDelegate> {
        match action {
            CounterAction::Increment => {
                let next = state.count() + state.step();
                if next > *state.max_count() {
                    tracing::debug!(next, max = state.max_count(), "Counter limit reached");
                    return smallvec![send_parent(CounterDelegate::LimitReached)];
                }
                state.set_count(next);
            },
            CounterAction::Decrement => {
                let step = *state.step();
                *state.count_mut() -= step;
            },
            CounterAction::Reset => {
                state.set_count(0);
                return smallvec![send_parent(CounterDelegate::Cleared)];
            },
            CounterAction::IncrementLater => {
                return smallvec![Effect::Delay {
                    duration: env.delay,
                    action: Box::new(ComposedAction::Local(CounterAction::Increment)),
                }];
            },
            CounterAction::Binding(binding) => {
                tracing::trace!(key_path = binding.key_path(), value = binding.value(), "Binding");
                binding.apply(&mut state.child);
                if *state.step() < 1 {
                    state.set_step(1);
                }
            },
        }

        smallvec![Effect::None]
    }
}

composed_reducer!(CounterFeature);

/// App state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// The embedded counter's own state
    pub counter: CounterState,
    /// Settings the counter can read but not write
    pub settings: AppSettings,
    /// Messages raised by the counter
    pub alerts: Vec<String>,
}

/// App actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// An action of the embedded counter
    Counter(CounterFeatureAction),
    /// Change the counter's limit
    SetMaxCount(i64),
    /// Sign in as a user
    SignIn(String),
}

/// App environment
#[derive(Debug, Clone, Default)]
pub struct AppEnvironment {
    /// The counter's dependencies
    pub counter: CounterEnvironment,
}

type CounterScope = ScopedComposedReducer<
    AppState,
    AppAction,
    AppEnvironment,
    CounterState,
    AppSettings,
    CounterFeature,
>;

fn counter_state(app: &mut AppState) -> &mut CounterState {
    &mut app.counter
}

fn settings_view(app: &AppState) -> AppSettings {
    app.settings.clone()
}

fn counter_action(action: AppAction) -> Option<CounterFeatureAction> {
    match action {
        AppAction::Counter(action) => Some(action),
        AppAction::SetMaxCount(_) | AppAction::SignIn(_) => None,
    }
}

fn counter_environment(env: &AppEnvironment) -> &CounterEnvironment {
    &env.counter
}

/// App reducer
///
/// Runs the embedded counter first, then reacts to the app's own actions
/// and to what the counter delegated.
#[derive(Clone)]
pub struct AppReducer {
    counter: CounterScope,
}

impl AppReducer {
    /// Create the app reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: ScopedComposedReducer::new(
                CounterFeature,
                counter_state,
                settings_view,
                counter_action,
                AppAction::Counter,
                counter_environment,
            ),
        }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut AppState,
        action: AppAction,
        env: &AppEnvironment,
    ) -> SmallVec<[Effect<AppAction>; 4]> {
        let mut effects = self.counter.reduce(state, action.clone(), env);

        match action {
            AppAction::Counter(ComposedAction::Parent(CounterDelegate::LimitReached)) => {
                tracing::info!(max = state.settings.max_count, "Counter hit its limit");
                state.alerts.push(format!(
                    "{} reached the limit of {}",
                    state.settings.username, state.settings.max_count
                ));
            },
            AppAction::Counter(ComposedAction::Parent(CounterDelegate::Cleared)) => {
                state.alerts.clear();
            },
            AppAction::Counter(ComposedAction::Local(_)) => {},
            AppAction::SetMaxCount(max) => {
                state.settings.max_count = max;
                if state.counter.count > max {
                    effects.push(Effect::send(AppAction::Counter(ComposedAction::Local(
                        CounterAction::Reset,
                    ))));
                }
            },
            AppAction::SignIn(username) => {
                state.settings.username = username;
            },
        }

        effects
    }
}
