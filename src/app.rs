use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::{AppState, Registry},
    infra::store::{JsonFileStore, KeyValueStore, MemoryStore},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::PlannerPage,
        shell::Shell,
    },
    util::{
        assets,
        config::runtime_config,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

/// Storage handle shared through context.
pub type StoreSignal = Signal<Box<dyn KeyValueStore>>;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Planner {},
}

#[component]
pub fn App() -> Element {
    let config = runtime_config();

    let store: StoreSignal = use_signal(|| open_store(config.state_dir.as_deref()));
    use_context_provider(|| store);

    let state = use_signal(|| {
        let registry = Registry::with_seed(config.quote_seed);
        info!(settlements = registry.len(), seeded = config.quote_seed.is_some(), "built settlement registry");
        let persisted = store.with(|store| load_persisted_state(store.as_ref(), &registry));
        let mut state = AppState::new(registry);
        state.apply_persisted(persisted);
        state
    });
    use_context_provider(|| state);

    let toasts = use_signal(|| startup_toasts(&**store.peek()));
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

fn open_store(dir: Option<&std::path::Path>) -> Box<dyn KeyValueStore> {
    match JsonFileStore::in_dir(dir) {
        Ok(store) => {
            info!(path = %store.path().display(), "using saved state file");
            Box::new(store)
        }
        Err(err) => {
            warn!("no state directory, selections will not be saved: {err}");
            Box::new(MemoryStore::default())
        }
    }
}

fn startup_toasts(store: &dyn KeyValueStore) -> Vec<ToastMessage> {
    if store.is_durable() {
        Vec::new()
    } else {
        vec![ToastMessage::new(
            ToastKind::Warning,
            "No state directory available; selections will not be saved.",
        )]
    }
}

/// Writes the current selection and cargo; failures are reported but never
/// interrupt the user.
pub fn persist_user_state(
    state: &Signal<AppState>,
    mut store: StoreSignal,
    toasts: Signal<Vec<ToastMessage>>,
) {
    let snapshot = state.with(|st| st.to_persisted());
    let result = store.with_mut(|store| save_persisted_state(store.as_mut(), &snapshot));
    if let Err(err) = result {
        warn!("failed to persist user state: {err}");
        push_toast(toasts, ToastKind::Error, format!("Could not save selection: {err}"));
    }
}

#[component]
pub fn Planner() -> Element {
    rsx! { Shell { PlannerPage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatile_storage_is_announced_at_startup() {
        let toasts = startup_toasts(&MemoryStore::default());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Warning);
    }

    #[test]
    fn durable_storage_starts_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(Some(dir.path())).unwrap();
        assert!(startup_toasts(&store).is_empty());
    }
}
