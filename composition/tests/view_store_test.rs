//! Composed features running in a store, driven through a view store

#![allow(clippy::unwrap_used)] // Test code

use composable_composition::{
    ComposedAction, ComposedActionReducer, ComposedEffects, ComposedState, CoreReducer,
    LocalViewStoreExt, send_parent,
};
use composable_composition_core::{effect::Effect, smallvec};
use composable_composition_runtime::Store;
use composable_composition_runtime::view::{Animation, Transaction};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
struct FormState {
    name: String,
    agreed: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Session {
    user: String,
}

#[derive(Debug, Clone, PartialEq)]
enum FormAction {
    SetName(String),
    ToggleAgreed,
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
enum SessionAction {
    Submitted(String),
    SignOut,
}

type State = ComposedState<FormState, Session>;
type Action = ComposedAction<FormAction, SessionAction>;

#[derive(Clone)]
struct FormReducer;

impl ComposedActionReducer for FormReducer {
    type State = State;
    type LocalAction = FormAction;
    type ParentAction = SessionAction;
    type Environment = ();

    fn reduce_local(
        &self,
        state: &mut State,
        action: FormAction,
        _env: &(),
    ) -> ComposedEffects<FormAction, SessionAction> {
        match action {
            FormAction::SetName(name) => {
                state.child.name = name;
                smallvec![Effect::None]
            },
            FormAction::ToggleAgreed => {
                state.child.agreed = !state.child.agreed;
                smallvec![Effect::None]
            },
            FormAction::Submit => {
                let signed = format!("{} by {}", state.child.name, state.parent().user);
                smallvec![send_parent(SessionAction::Submitted(signed))]
            },
        }
    }
}

fn store() -> Store<State, Action, (), CoreReducer<FormReducer>> {
    Store::new(
        ComposedState::new(
            FormState::default(),
            Session {
                user: "blob".to_string(),
            },
        ),
        CoreReducer::new(FormReducer),
        (),
    )
}

#[tokio::test]
async fn test_send_local_updates_child() {
    let store = store();
    let view = store.view_store();

    view.send_local(FormAction::SetName("Ada".to_string()))
        .finish()
        .await
        .unwrap();

    assert_eq!(view.with_state(|s| s.child.name.clone()), "Ada");
    assert_eq!(store.state(|s| s.parent().user.clone()).await, "blob");
}

#[tokio::test]
async fn test_send_local_with_animation_publishes_transaction() {
    let store = store();
    let view = store.view_store();
    let mut transactions = view.subscribe_transactions();
    let animation = Animation::linear(Duration::from_millis(200));

    view.send_local_with_animation(FormAction::ToggleAgreed, Some(animation))
        .finish()
        .await
        .unwrap();

    let transaction = transactions.recv().await.unwrap();
    assert_eq!(transaction.animation, Some(animation));
    assert!(view.with_state(|s| s.child.agreed));
}

#[tokio::test]
async fn test_send_local_with_transaction() {
    let store = store();
    let view = store.view_store();
    let mut transactions = view.subscribe_transactions();

    view.send_local_with_transaction(FormAction::ToggleAgreed, Transaction::default().disabling_animations())
        .finish()
        .await
        .unwrap();

    let transaction = transactions.recv().await.unwrap();
    assert!(transaction.disables_animations);
    assert!(transaction.animation.is_none());
}

#[tokio::test]
async fn test_binding_local_reads_and_writes() {
    let store = store();
    let view = store.view_store();
    let name = view.binding_local(|s: &State| s.child.name.clone(), FormAction::SetName);

    assert_eq!(name.get(), "");
    name.set("Grace".to_string()).finish().await.unwrap();
    assert_eq!(name.get(), "Grace");
}

#[tokio::test]
async fn test_binding_local_action_ignores_written_value() {
    let store = store();
    let view = store.view_store();
    let agreed = view.binding_local_action(|s: &State| s.child.agreed, FormAction::ToggleAgreed);

    agreed.set(false).finish().await.unwrap();
    assert!(agreed.get());
}

#[tokio::test]
async fn test_parent_action_reaches_subscribers_without_touching_state() {
    let store = store();
    let view = store.view_store();
    let mut actions = store.subscribe_actions();

    view.send_local(FormAction::SetName("Ada".to_string()))
        .finish()
        .await
        .unwrap();
    let before = store.state(Clone::clone).await;

    view.send_local(FormAction::Submit).finish().await.unwrap();

    assert_eq!(
        actions.recv().await.unwrap(),
        Action::Parent(SessionAction::Submitted("Ada by blob".to_string()))
    );
    assert_eq!(store.state(Clone::clone).await, before);
}

#[tokio::test]
async fn test_parent_action_sent_directly_is_ignored() {
    let store = store();
    let view = store.view_store();

    view.send(Action::Parent(SessionAction::SignOut))
        .finish()
        .await
        .unwrap();

    assert_eq!(view.state(), store.state(Clone::clone).await);
    assert_eq!(view.with_state(|s| s.child.clone()), FormState::default());
}
