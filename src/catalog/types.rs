//! Catalog data structures and lookup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalcError;
use crate::odds::{self, OddsSpec};

/// Rarity tiers shown next to each fish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Unusual,
    Rare,
    Legendary,
    Mythical,
    Exotic,
    Secret,
    Limited,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Unusual => "Unusual",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
            Rarity::Exotic => "Exotic",
            Rarity::Secret => "Secret",
            Rarity::Limited => "Limited",
        }
    }
}

/// A single fish as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishRecord {
    pub name: String,
    pub rarity: Rarity,
    /// Human-readable odds, e.g. "1 in 5,000" or "???".
    pub odds: String,
    pub location: String,
    pub value: String,
}

impl FishRecord {
    pub fn odds_spec(&self) -> OddsSpec {
        odds::parse(&self.odds)
    }
}

/// Read-only list of fish records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    fish: Vec<FishRecord>,
}

impl Catalog {
    pub fn new(fish: Vec<FishRecord>) -> Self {
        Self { fish }
    }

    /// Parses a JSON array of fish records.
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        debug!(entries = catalog.len(), "parsed fish catalog");
        Ok(catalog)
    }

    /// Loads a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CalcError> {
        let json = fs::read_to_string(path).map_err(|e| CalcError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn fish(&self) -> &[FishRecord] {
        &self.fish
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Finds a fish by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&FishRecord> {
        let wanted = name.trim();
        self.fish.iter().find(|f| f.name.eq_ignore_ascii_case(wanted))
    }

    /// Like `find`, but a missing fish is an error.
    pub fn require(&self, name: &str) -> Result<&FishRecord, CalcError> {
        self.find(name)
            .ok_or_else(|| CalcError::UnknownFish(name.trim().to_string()))
    }

    pub fn by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &FishRecord> {
        self.fish.iter().filter(move |f| f.rarity == rarity)
    }
}
