#![allow(dead_code)]

use super::cargo::CargoManifest;
use super::entities::Settlement;
use super::geometry::MapSize;
use super::registry::Registry;
use super::trade_route::RouteEstimate;

/// How a settlement participates in the current route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerRole {
    Source,
    Destination,
    Idle,
}

impl MarkerRole {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerRole::Source => "#00ff00",
            MarkerRole::Destination => "#ff0000",
            MarkerRole::Idle => "#808080",
        }
    }
}

/// The user's chosen route. A destination only exists alongside a source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteSelection {
    source: Option<Settlement>,
    destination: Option<Settlement>,
}

impl RouteSelection {
    /// Restores a persisted selection, dropping a destination that has no
    /// source.
    pub fn from_parts(source: Option<Settlement>, destination: Option<Settlement>) -> Self {
        match source {
            Some(source) => Self {
                source: Some(source),
                destination,
            },
            None => Self::default(),
        }
    }

    pub fn source(&self) -> Option<&Settlement> {
        self.source.as_ref()
    }

    pub fn destination(&self) -> Option<&Settlement> {
        self.destination.as_ref()
    }

    /// Fills the source, then the destination; a click on a complete route
    /// starts a new one from `settlement`.
    pub fn choose(&mut self, settlement: Settlement) {
        match (&self.source, &self.destination) {
            (None, _) => self.source = Some(settlement),
            (Some(_), None) => self.destination = Some(settlement),
            (Some(_), Some(_)) => {
                self.source = Some(settlement);
                self.destination = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.destination = None;
    }

    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }

    pub fn role_of(&self, id: &str) -> MarkerRole {
        if self.source.as_ref().is_some_and(|s| s.id == id) {
            MarkerRole::Source
        } else if self.destination.as_ref().is_some_and(|s| s.id == id) {
            MarkerRole::Destination
        } else {
            MarkerRole::Idle
        }
    }

    pub fn estimate(&self, manifest: &CargoManifest) -> Option<RouteEstimate> {
        match (&self.source, &self.destination) {
            (Some(source), Some(destination)) => {
                Some(RouteEstimate::evaluate(source, destination, manifest))
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Registry,
    pub selection: RouteSelection,
    pub cargo: CargoManifest,
    pub map_size: MapSize,
    pub cargo_panel_open: bool,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            selection: RouteSelection::default(),
            cargo: CargoManifest::new(),
            map_size: MapSize::default(),
            cargo_panel_open: true,
        }
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.selection = persisted.selection;
        self.cargo = persisted.cargo;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            selection: self.selection.clone(),
            cargo: self.cargo,
        }
    }

    pub fn choose_settlement(&mut self, id: &str) {
        if let Some(settlement) = self.registry.find(id).cloned() {
            self.selection.choose(settlement);
        }
    }

    pub fn route_estimate(&self) -> Option<RouteEstimate> {
        self.selection.estimate(&self.cargo)
    }
}

/// Selection and cargo as restored from durable storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersistedState {
    pub selection: RouteSelection,
    pub cargo: CargoManifest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cargo::CargoRarity;

    fn registry() -> Registry {
        Registry::with_seed(Some(3))
    }

    fn pick(registry: &Registry, id: &str) -> Settlement {
        registry.find(id).cloned().expect("settlement exists")
    }

    #[test]
    fn clicks_fill_source_then_destination() {
        let registry = registry();
        let mut selection = RouteSelection::default();

        selection.choose(pick(&registry, "halcyon"));
        assert_eq!(selection.source().map(|s| s.id.as_str()), Some("halcyon"));
        assert!(selection.destination().is_none());
        assert!(!selection.is_complete());

        selection.choose(pick(&registry, "joeva"));
        assert_eq!(selection.destination().map(|s| s.id.as_str()), Some("joeva"));
        assert!(selection.is_complete());
    }

    #[test]
    fn new_source_resets_destination() {
        let registry = registry();
        let mut selection = RouteSelection::default();
        selection.choose(pick(&registry, "halcyon"));
        selection.choose(pick(&registry, "joeva"));
        selection.choose(pick(&registry, "djinna"));

        assert_eq!(selection.source().map(|s| s.id.as_str()), Some("djinna"));
        assert!(selection.destination().is_none());
    }

    #[test]
    fn destination_requires_source() {
        let registry = registry();
        let selection = RouteSelection::from_parts(None, Some(pick(&registry, "joeva")));
        assert_eq!(selection, RouteSelection::default());
    }

    #[test]
    fn marker_roles_follow_selection() {
        let registry = registry();
        let mut selection = RouteSelection::default();
        selection.choose(pick(&registry, "halcyon"));
        selection.choose(pick(&registry, "new-aela"));

        assert_eq!(selection.role_of("halcyon"), MarkerRole::Source);
        assert_eq!(selection.role_of("new-aela"), MarkerRole::Destination);
        assert_eq!(selection.role_of("korrin"), MarkerRole::Idle);

        selection.clear();
        assert_eq!(selection.role_of("halcyon"), MarkerRole::Idle);
    }

    #[test]
    fn estimate_needs_both_ends() {
        let mut state = AppState::new(registry());
        state.cargo.set(CargoRarity::Epic, 3);
        assert!(state.route_estimate().is_none());

        state.choose_settlement("halcyon");
        assert!(state.route_estimate().is_none());

        state.choose_settlement("new-aela");
        let estimate = state.route_estimate().expect("complete route");
        assert!(estimate.distance_km > 57.0 && estimate.distance_km < 58.0);
        assert!(estimate.profit > 0.0);
    }

    #[test]
    fn unknown_settlement_click_is_ignored() {
        let mut state = AppState::new(registry());
        state.choose_settlement("atlantis");
        assert!(state.selection.source().is_none());
    }

    #[test]
    fn persisted_round_trip_keeps_selection_and_cargo() {
        let mut state = AppState::new(registry());
        state.choose_settlement("winstead");
        state.cargo.set(CargoRarity::Rare, 4);

        let mut restored = AppState::new(registry());
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored.selection, state.selection);
        assert_eq!(restored.cargo.get(CargoRarity::Rare), 4);
    }
}
