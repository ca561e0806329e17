//! The fixed set of settlements shown on the map.

#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::entities::{Settlement, TradeManifest};
use super::geometry::WorldPoint;

struct SettlementSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    point: WorldPoint,
    /// Arrival point when it differs from the departure point.
    dock: Option<WorldPoint>,
}

const fn seed(id: &'static str, name: &'static str, description: &'static str, x: f64, y: f64, z: f64) -> SettlementSeed {
    SettlementSeed {
        id,
        name,
        description,
        point: WorldPoint::new(x, y, z),
        dock: None,
    }
}

const SETTLEMENTS: &[SettlementSeed] = &[
    seed("halcyon", "Halcyon", "A peaceful city in the north", -884_751.499392, -325_649.112187, 11_824.727453),
    seed("new-aela", "New Aela", "A bustling port city", -1_130_812.407337, -843_312.073625, 14_019.459101),
    seed("joeva", "Joeva", "A historic trading hub", -1_087_379.00897, -513_361.741606, 14_094.103319),
    seed("winstead", "Winstead", "A mountain city", -634_673.584447, -372_780.083735, 14_269.987907),
    seed("miraleth", "Miraleth", "An ancient city", -475_615.671719, -574_470.86597, 11_168.553521),
    seed("aithanahr", "Aithanahr", "A desert city", -259_920.177304, -751_638.912231, 6_846.932698),
    seed("azmaran", "Azmaran", "A coastal city", -268_302.455695, -989_209.595577, 9_484.755341),
    seed("sunhaven", "Sunhaven", "A sunny paradise", -623_148.978528, -863_431.096719, 14_331.350239),
    seed("djinna", "Djinna", "A mystical city", 63_377.039789148, -861_186.586615326, 6_767.229375),
    seed("squalls-end", "Squall's End", "A stormy port city", -47_680.406512, -1_134_380.725584, 16_982.221881),
    seed("jundark-trading-post", "Jundark Trading Post", "A remote trading outpost", -1_483_331.434872, -1_180_489.317986, 7_268.386268),
    seed("tropics-trading-post", "Tropics Trading Post", "A tropical trading post", -1_974_887.420323, -36_751.314912, 4_622.15253),
    seed("windansea", "Windansea", "A windy coastal city", -1_100_678.26961327, -246_478.20785111, 7_050.0),
    seed("seahook", "Seahook", "A fishing port", -1_764_306.60134546, -539_249.759503641, 7_252.221811),
    seed("shorefoot", "Shorefoot", "A beachside town", -1_372_667.84650282, -57_352.7280256981, 4_460.0),
    seed("korrin", "Korrin", "A mountain village", -1_764_272.32096299, -114_492.455202844, 7_252.221811),
    seed("brinebarrel", "Brinebarrel", "A coastal fishing village", -1_861_019.66608226, 171_850.471882255, 7_252.221811),
];

/// Ordered, immutable list of settlements with their trade quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    settlements: Vec<Settlement>,
}

impl Registry {
    /// Builds the shipped map. Quotes are drawn from `rng`.
    pub fn build<R: Rng>(rng: &mut R) -> Self {
        let settlements = SETTLEMENTS
            .iter()
            .map(|entry| Settlement {
                id: entry.id.to_string(),
                name: entry.name.to_string(),
                description: Some(entry.description.to_string()),
                source_point: entry.point,
                destination_point: entry.dock.unwrap_or(entry.point),
                trade: TradeManifest::generate(&mut *rng),
            })
            .collect();
        Self { settlements }
    }

    /// Deterministic quotes for a given seed, fresh entropy otherwise.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build(&mut rng)
    }

    pub fn find(&self, id: &str) -> Option<&Settlement> {
        self.settlements.iter().find(|settlement| settlement.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Settlement> {
        self.settlements.iter()
    }

    pub fn len(&self) -> usize {
        self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settlements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::map_transform::WORLD_BOUNDS;

    #[test]
    fn ships_every_settlement_once() {
        let registry = Registry::with_seed(Some(1));
        assert_eq!(registry.len(), 17);
        let ids: HashSet<_> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn lookup_by_id() {
        let registry = Registry::with_seed(Some(1));
        let halcyon = registry.find("halcyon").expect("halcyon present");
        assert_eq!(halcyon.name, "Halcyon");
        assert_eq!(halcyon.source_point.z, 11_824.727453);
        assert!(registry.find("atlantis").is_none());
    }

    #[test]
    fn settlements_lie_inside_world_bounds() {
        let registry = Registry::with_seed(Some(1));
        for settlement in registry.iter() {
            let p = settlement.display_point();
            assert!(p.x >= WORLD_BOUNDS.min_x && p.x <= WORLD_BOUNDS.max_x, "{}", settlement.id);
            assert!(p.y >= WORLD_BOUNDS.min_y && p.y <= WORLD_BOUNDS.max_y, "{}", settlement.id);
        }
    }

    #[test]
    fn seeded_registries_match() {
        assert_eq!(Registry::with_seed(Some(5)), Registry::with_seed(Some(5)));
    }
}
