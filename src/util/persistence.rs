//! Saving and restoring the route selection and cargo load.
//!
//! Everything read back is treated as untrusted: unknown settlements,
//! malformed JSON and negative counts quietly fall back to defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{
    app_state::PersistedState, CargoManifest, CargoRarity, Registry, RouteSelection, Settlement,
};
use crate::infra::store::{KeyValueStore, StoreError};

pub const SOURCE_KEY: &str = "startCity";
pub const DESTINATION_KEY: &str = "endCity";
pub const CARGO_KEY: &str = "cargo";

#[derive(Serialize, Deserialize)]
struct SettlementRef {
    id: String,
}

pub fn load_persisted_state(store: &dyn KeyValueStore, registry: &Registry) -> PersistedState {
    PersistedState {
        selection: load_selection(store, registry),
        cargo: load_manifest(store),
    }
}

pub fn save_persisted_state(
    store: &mut dyn KeyValueStore,
    state: &PersistedState,
) -> Result<(), StoreError> {
    store.apply(&[
        (SOURCE_KEY, settlement_value(state.selection.source())?),
        (DESTINATION_KEY, settlement_value(state.selection.destination())?),
        (CARGO_KEY, Some(manifest_value(&state.cargo)?)),
    ])
}

pub fn load_selection(store: &dyn KeyValueStore, registry: &Registry) -> RouteSelection {
    let source = load_settlement(store, registry, SOURCE_KEY);
    let destination = load_settlement(store, registry, DESTINATION_KEY);
    RouteSelection::from_parts(source, destination)
}

pub fn save_selection(
    store: &mut dyn KeyValueStore,
    selection: &RouteSelection,
) -> Result<(), StoreError> {
    store.apply(&[
        (SOURCE_KEY, settlement_value(selection.source())?),
        (DESTINATION_KEY, settlement_value(selection.destination())?),
    ])
}

pub fn load_manifest(store: &dyn KeyValueStore) -> CargoManifest {
    let Some(raw) = store.get(CARGO_KEY) else {
        return CargoManifest::new();
    };

    let object = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            warn!("saved cargo is not an object, using empty load");
            return CargoManifest::new();
        }
        Err(e) => {
            warn!("failed to parse saved cargo, using empty load: {e}");
            return CargoManifest::new();
        }
    };

    let mut manifest = CargoManifest::new();
    for (key, value) in &object {
        let Some(rarity) = CargoRarity::from_key(key) else {
            continue;
        };
        manifest.set(rarity, count_from_json(value));
    }
    manifest
}

pub fn save_manifest(store: &mut dyn KeyValueStore, manifest: &CargoManifest) -> Result<(), StoreError> {
    store.set(CARGO_KEY, &manifest_value(manifest)?)
}

fn manifest_value(manifest: &CargoManifest) -> Result<String, StoreError> {
    let object: Map<String, Value> = manifest
        .iter()
        .map(|(rarity, count)| (rarity.key().to_string(), Value::from(count)))
        .collect();
    Ok(serde_json::to_string(&object)?)
}

fn count_from_json(value: &Value) -> u32 {
    match value {
        Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                u32::try_from(count).unwrap_or(u32::MAX)
            } else if let Some(float) = number.as_f64().filter(|f| f.is_finite() && *f > 0.0) {
                float.min(u32::MAX as f64) as u32
            } else {
                0
            }
        }
        Value::String(text) => crate::domain::parse_cargo_count(text),
        _ => 0,
    }
}

fn load_settlement(store: &dyn KeyValueStore, registry: &Registry, key: &str) -> Option<Settlement> {
    let raw = store.get(key)?;
    let reference: SettlementRef = match serde_json::from_str(&raw) {
        Ok(reference) => reference,
        Err(e) => {
            warn!(key, "failed to parse saved settlement: {e}");
            return None;
        }
    };
    let found = registry.find(&reference.id).cloned();
    if found.is_none() {
        warn!(key, id = %reference.id, "saved settlement no longer exists");
    }
    found
}

/// Stored form of a selected settlement; `None` clears the key.
fn settlement_value(settlement: Option<&Settlement>) -> Result<Option<String>, StoreError> {
    settlement
        .map(|settlement| {
            serde_json::to_string(&SettlementRef {
                id: settlement.id.clone(),
            })
        })
        .transpose()
        .map_err(StoreError::from)
}
