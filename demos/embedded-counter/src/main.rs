//! Embedded counter binary
//!
//! Runs the counter on its own behind a view store, then embedded in the app.

use composable_composition::{ComposedAction, ComposedState, CoreReducer, LocalViewStoreExt};
use composable_composition_core::binding::{BindableAction, BindingAction};
use composable_composition_runtime::Store;
use composable_composition_runtime::view::Animation;
use embedded_counter::{
    AppAction, AppEnvironment, AppReducer, AppSettings, AppState, CounterAction, CounterEnvironment,
    CounterFeature, CounterState, step_field,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "embedded_counter=debug,composable_composition_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Embedded Counter ===\n");

    standalone().await?;
    embedded().await;

    Ok(())
}

/// The counter feature on its own, with fixed settings as its parent
async fn standalone() -> anyhow::Result<()> {
    println!(">>> Standalone counter");

    let settings = AppSettings {
        max_count: 3,
        ..AppSettings::default()
    };
    let store = Store::new(
        ComposedState::new(CounterState::default(), settings),
        CoreReducer::new(CounterFeature),
        CounterEnvironment {
            delay: Duration::from_millis(50),
        },
    );
    let view = store.view_store();

    let count = view.binding_local_action(|s| s.child.count, CounterAction::Increment);
    count.set(0).finish().await?;
    println!("Count after Increment: {}", count.get());

    view.send_local_with_animation(CounterAction::IncrementLater, Some(Animation::default()))
        .finish()
        .await?;
    println!("Count after IncrementLater: {}", count.get());

    view.send(ComposedAction::binding(BindingAction::set("step", step_field, 5)))
        .finish()
        .await?;
    view.send_local(CounterAction::Increment).finish().await?;
    println!(
        "Count after Increment with step 5 (limit {}): {}",
        view.with_state(|s| s.parent().max_count),
        count.get()
    );

    Ok(())
}

/// The counter embedded in the app, reporting back through delegate actions
async fn embedded() {
    println!("\n>>> Embedded counter");

    let store = Store::new(AppState::default(), AppReducer::new(), AppEnvironment::default());

    let _ = store.send(AppAction::SignIn("ada".to_string())).await;
    let _ = store.send(AppAction::SetMaxCount(2)).await;

    for _ in 0..3 {
        let mut handle = store
            .send(AppAction::Counter(ComposedAction::Local(CounterAction::Increment)))
            .await;
        handle.wait().await;
    }

    let (count, alerts) = store.state(|s| (s.counter.count, s.alerts.clone())).await;
    println!("Count: {count}");
    println!("Alerts: {alerts:?}");

    let mut handle = store
        .send(AppAction::Counter(ComposedAction::Local(CounterAction::Reset)))
        .await;
    handle.wait().await;

    let (count, alerts) = store.state(|s| (s.counter.count, s.alerts.len())).await;
    println!("Count after Reset: {count}, alerts left: {alerts}");

    println!("\n=== Done ===");
}
