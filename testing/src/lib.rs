//! # Composable Composition Testing
//!
//! Testing utilities for reducers built with composed actions.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then tests for a single reduction
//! - [`assertions`]: Assertion helpers for returned effects
//! - [`effects`]: Run effects without a store and collect what they produce
//! - [`helpers`]: Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use composable_composition_testing::{ReducerTest, assertions, effects::collect_all_actions};
//!
//! ReducerTest::new(CoreReducer::new(CounterReducer))
//!     .with_env(())
//!     .given_state(CounterState { count: 0 })
//!     .when_action(ComposedAction::Local(CounterAction::Increment))
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod effects;
mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a test-friendly tracing subscriber
    ///
    /// Honors `RUST_LOG` and falls back to `debug`. Output goes through the
    /// test writer so it is captured per test. Calling it more than once is fine.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_test_writer()
            .try_init();
    }
}
