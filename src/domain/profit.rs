//! Expected trade profit for carrying a cargo load along a route.

use super::cargo::CargoManifest;

/// Routes strictly longer than this (raw world units) earn the bonus.
pub const LONG_HAUL_THRESHOLD: f64 = 1_000_000.0;
pub const LONG_HAUL_BONUS: f64 = 1.2;

pub const CURRENCY_GLYPH: &str = "g";

/// Profit for hauling `manifest` over `raw_distance` world units.
///
/// Each tier earns `distance * multiplier * count`; the sum is scaled by
/// [`LONG_HAUL_BONUS`] once the distance exceeds [`LONG_HAUL_THRESHOLD`].
/// The result is not rounded.
pub fn estimate_profit(raw_distance: f64, manifest: &CargoManifest) -> f64 {
    let total: f64 = manifest
        .iter()
        .map(|(rarity, count)| raw_distance * rarity.value_multiplier() * count as f64)
        .sum();

    if raw_distance > LONG_HAUL_THRESHOLD {
        total * LONG_HAUL_BONUS
    } else {
        total
    }
}

pub fn format_profit(profit: f64) -> String {
    format!("{profit:.4}{CURRENCY_GLYPH}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cargo::CargoRarity;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn empty_manifest_earns_nothing() {
        let manifest = CargoManifest::new();
        assert_eq!(estimate_profit(0.0, &manifest), 0.0);
        assert_eq!(estimate_profit(575_000.0, &manifest), 0.0);
        assert_eq!(estimate_profit(5_000_000.0, &manifest), 0.0);
    }

    #[test]
    fn single_tier_matches_formula() {
        let manifest = CargoManifest::new().with(CargoRarity::Rare, 3);
        let expected = 400_000.0 * CargoRarity::Rare.value_multiplier() * 3.0;
        assert!(close(estimate_profit(400_000.0, &manifest), expected));
    }

    #[test]
    fn tiers_are_summed() {
        let manifest = CargoManifest::new()
            .with(CargoRarity::Common, 10)
            .with(CargoRarity::Epic, 2);
        let distance = 250_000.0;
        let expected = distance * CargoRarity::Common.value_multiplier() * 10.0
            + distance * CargoRarity::Epic.value_multiplier() * 2.0;
        assert!(close(estimate_profit(distance, &manifest), expected));
    }

    #[test]
    fn more_cargo_earns_more() {
        for rarity in CargoRarity::ALL {
            let base = CargoManifest::new()
                .with(CargoRarity::Common, 1)
                .with(rarity, 4);
            let more = base.with(rarity, 5);
            assert!(estimate_profit(300_000.0, &more) > estimate_profit(300_000.0, &base));
        }
    }

    #[test]
    fn rarer_cargo_earns_more() {
        for pair in CargoRarity::ALL.windows(2) {
            let lower = CargoManifest::new().with(pair[0], 7);
            let higher = CargoManifest::new().with(pair[1], 7);
            assert!(estimate_profit(600_000.0, &higher) > estimate_profit(600_000.0, &lower));
        }
    }

    #[test]
    fn no_bonus_at_exact_threshold() {
        let manifest = CargoManifest::new().with(CargoRarity::Heroic, 1);
        let expected = LONG_HAUL_THRESHOLD * CargoRarity::Heroic.value_multiplier();
        assert_eq!(estimate_profit(LONG_HAUL_THRESHOLD, &manifest), expected);
    }

    #[test]
    fn bonus_applies_past_threshold() {
        let manifest = CargoManifest::new()
            .with(CargoRarity::Uncommon, 2)
            .with(CargoRarity::Epic, 1);
        let distance = 1_500_000.0;
        let base: f64 = manifest
            .iter()
            .map(|(rarity, count)| distance * rarity.value_multiplier() * count as f64)
            .sum();
        assert_eq!(estimate_profit(distance, &manifest), base * LONG_HAUL_BONUS);
    }

    #[test]
    fn profit_is_displayed_with_four_places() {
        assert_eq!(format_profit(0.0), "0.0000g");
        assert_eq!(format_profit(12.5), "12.5000g");
    }
}
