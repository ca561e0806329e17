#![allow(dead_code)]

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cargo::CargoRarity;
use super::geometry::WorldPoint;

/// Identifier of a settlement, stable across sessions.
pub type SettlementId = String;

/// A town or trading post on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub id: SettlementId,
    pub name: String,
    pub description: Option<String>,
    /// Where runs starting here depart from.
    pub source_point: WorldPoint,
    /// Where runs ending here arrive.
    pub destination_point: WorldPoint,
    pub trade: TradeManifest,
}

impl Settlement {
    /// Position used for the map marker.
    pub fn display_point(&self) -> WorldPoint {
        self.source_point
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CargoPrice {
    pub buy: f64,
    pub sell: f64,
}

/// Buy/sell quote per rarity at one settlement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeManifest {
    quotes: [CargoPrice; CargoRarity::COUNT],
}

/// Relative spread of a quote around the base price.
pub const QUOTE_VARIANCE: f64 = 0.4;
/// Selling is generally dearer than buying.
pub const SELL_MARKUP: f64 = 1.2;

impl TradeManifest {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let quotes = CargoRarity::ALL.map(|rarity| quote_price(&mut *rng, rarity.base_price()));
        Self { quotes }
    }

    pub fn quote(&self, rarity: CargoRarity) -> CargoPrice {
        self.quotes[rarity as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CargoRarity, CargoPrice)> + '_ {
        CargoRarity::ALL
            .into_iter()
            .map(move |rarity| (rarity, self.quote(rarity)))
    }
}

fn quote_price<R: Rng>(rng: &mut R, base: f64) -> CargoPrice {
    let mut factor = || 1.0 + rng.gen_range(-1.0..1.0) * QUOTE_VARIANCE;
    let buy = (base * factor()).round();
    let sell = (base * factor() * SELL_MARKUP).round();
    CargoPrice { buy, sell }
}
