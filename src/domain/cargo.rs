//! Cargo rarity tiers and the per-tier load a player carries.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Cargo quality class. Declaration order is rarity order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CargoRarity {
    Common,
    Uncommon,
    Rare,
    Heroic,
    Epic,
}

impl CargoRarity {
    pub const COUNT: usize = 5;

    pub const ALL: [CargoRarity; Self::COUNT] = [
        CargoRarity::Common,
        CargoRarity::Uncommon,
        CargoRarity::Rare,
        CargoRarity::Heroic,
        CargoRarity::Epic,
    ];

    /// Profit per raw world unit travelled, per unit of cargo.
    pub const fn value_multiplier(self) -> f64 {
        match self {
            CargoRarity::Common => 0.000_000_549_658_909_712_430_0,
            CargoRarity::Uncommon => 0.000_001_649_317_410_654_700_0,
            CargoRarity::Rare => 0.000_004_398_505_154_694_450_0,
            CargoRarity::Heroic => 0.000_008_250_191_685_547_580_0,
            CargoRarity::Epic => 0.000_013_193_902_795_209_500_0,
        }
    }

    /// Reference price used when quoting buy/sell prices at a settlement.
    pub const fn base_price(self) -> f64 {
        match self {
            CargoRarity::Common => 50.0,
            CargoRarity::Uncommon => 100.0,
            CargoRarity::Rare => 250.0,
            CargoRarity::Heroic => 500.0,
            CargoRarity::Epic => 1000.0,
        }
    }

    /// Storage key, also the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            CargoRarity::Common => "COMMON",
            CargoRarity::Uncommon => "UNCOMMON",
            CargoRarity::Rare => "RARE",
            CargoRarity::Heroic => "HEROIC",
            CargoRarity::Epic => "EPIC",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rarity| rarity.key() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            CargoRarity::Common => "Common",
            CargoRarity::Uncommon => "Uncommon",
            CargoRarity::Rare => "Rare",
            CargoRarity::Heroic => "Heroic",
            CargoRarity::Epic => "Epic",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            CargoRarity::Common => "#808080",
            CargoRarity::Uncommon => "#1eff00",
            CargoRarity::Rare => "#0070dd",
            CargoRarity::Heroic => "#ffd100",
            CargoRarity::Epic => "#a335ee",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Units carried per rarity. Every tier is always present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CargoManifest {
    counts: [u32; CargoRarity::COUNT],
}

impl CargoManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, rarity: CargoRarity) -> u32 {
        self.counts[rarity.index()]
    }

    pub fn set(&mut self, rarity: CargoRarity, count: u32) {
        self.counts[rarity.index()] = count;
    }

    pub fn with(mut self, rarity: CargoRarity, count: u32) -> Self {
        self.set(rarity, count);
        self
    }

    pub fn increment(&mut self, rarity: CargoRarity) {
        let slot = &mut self.counts[rarity.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn decrement(&mut self, rarity: CargoRarity) {
        let slot = &mut self.counts[rarity.index()];
        *slot = slot.saturating_sub(1);
    }

    /// Tiers in rarity order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (CargoRarity, u32)> + '_ {
        CargoRarity::ALL
            .into_iter()
            .map(move |rarity| (rarity, self.get(rarity)))
    }

    pub fn total_units(&self) -> u64 {
        self.counts.iter().map(|&count| count as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

/// Reads a cargo count the way a numeric text box does: the leading integer
/// wins, anything unparseable or negative becomes zero.
pub fn parse_cargo_count(input: &str) -> u32 {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
