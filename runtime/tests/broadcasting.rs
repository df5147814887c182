//! Integration tests for Store action broadcasting and view stores
//!
//! Effect-produced actions are broadcast before being fed back, which lets
//! callers wait for a terminal action and lets view stores follow along.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_composition_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use composable_composition_runtime::{Store, StoreError};
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    /// Start a multi-step workflow
    Start { id: u64 },
    /// Workflow step completed
    StepCompleted { id: u64, step: u32 },
    /// Workflow finished (terminal action)
    Completed { id: u64 },
    /// Never produced
    Failed { id: u64 },
}

#[derive(Debug, Clone, Default)]
struct TestState {
    steps: Vec<u32>,
}

#[derive(Clone)]
struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::Start { id } => {
                state.steps.clear();
                smallvec![Effect::Delay {
                    duration: Duration::from_millis(5),
                    action: Box::new(TestAction::StepCompleted { id, step: 1 }),
                }]
            },
            TestAction::StepCompleted { id, step } => {
                state.steps.push(step);
                if step < 3 {
                    smallvec![Effect::send(TestAction::StepCompleted { id, step: step + 1 })]
                } else {
                    smallvec![Effect::send(TestAction::Completed { id })]
                }
            },
            TestAction::Completed { .. } | TestAction::Failed { .. } => smallvec![Effect::None],
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_send_and_wait_for_workflow() {
    init_tracing();
    let store = Store::new(TestState::default(), TestReducer, ());

    let result = store
        .send_and_wait_for(
            TestAction::Start { id: 42 },
            |action| matches!(action, TestAction::Completed { id: 42 }),
            Duration::from_secs(1),
        )
        .await;

    assert_eq!(result.unwrap(), TestAction::Completed { id: 42 });
    assert_eq!(store.state(|s| s.steps.clone()).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_send_and_wait_for_timeout() {
    init_tracing();
    let store = Store::new(TestState::default(), TestReducer, ());

    let result = store
        .send_and_wait_for(
            TestAction::Start { id: 7 },
            |action| matches!(action, TestAction::Failed { id: 7 }),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result.unwrap_err(), StoreError::Timeout));
}

#[tokio::test]
async fn test_subscribers_see_every_produced_action() {
    init_tracing();
    let store = Store::new(TestState::default(), TestReducer, ());
    let mut observer = store.subscribe_actions();

    let _ = store
        .send_and_wait_for(
            TestAction::Start { id: 1 },
            |action| matches!(action, TestAction::Completed { .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    let mut seen = Vec::new();
    while let Ok(action) = observer.try_recv() {
        seen.push(action);
    }
    assert_eq!(
        seen,
        vec![
            TestAction::StepCompleted { id: 1, step: 1 },
            TestAction::StepCompleted { id: 1, step: 2 },
            TestAction::StepCompleted { id: 1, step: 3 },
            TestAction::Completed { id: 1 },
        ]
    );
}

#[tokio::test]
async fn test_view_store_follows_workflow() {
    init_tracing();
    let store = Store::new(TestState::default(), TestReducer, ());
    let view = store.view_store();

    view.send(TestAction::Start { id: 3 }).finish().await.unwrap();

    assert_eq!(view.with_state(|s| s.steps.clone()), vec![1, 2, 3]);
}
