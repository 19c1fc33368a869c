//! Built-in sample catalog.
//!
//! A starter table so the calculator works without a catalog file. Entries
//! with "???" odds have not been measured yet.

use super::types::{Catalog, FishRecord, Rarity};

/// (name, rarity, odds, location, value)
pub const BUILTIN_FISH: [(&str, Rarity, &str, &str, &str); 18] = [
    // Common
    ("Minnow", Rarity::Common, "1 in 3", "Moosewood", "5 C$"),
    ("Carp", Rarity::Common, "1 in 4", "Moosewood", "8 C$"),
    ("Bluegill", Rarity::Common, "1 in 5", "Roslit Bay", "9 C$"),
    // Uncommon
    ("Perch", Rarity::Uncommon, "1 in 12", "Moosewood", "20 C$"),
    ("Trout", Rarity::Uncommon, "1 in 15", "Snowcap Island", "24 C$"),
    // Unusual
    ("Catfish", Rarity::Unusual, "1 in 40", "Mushgrove Swamp", "55 C$"),
    ("Walleye", Rarity::Unusual, "1 in 60", "Terrapin Island", "70 C$"),
    // Rare
    ("Pike", Rarity::Rare, "1 in 150", "Moosewood", "160 C$"),
    ("Sturgeon", Rarity::Rare, "1 in 300", "Roslit Bay", "240 C$"),
    // Legendary
    ("Swordfish", Rarity::Legendary, "1 in 1,000", "Open Ocean", "900 C$"),
    ("Sea Serpent Fry", Rarity::Legendary, "1 in 2,500", "Vertigo", "1,800 C$"),
    // Mythical
    ("Abyssal Eel", Rarity::Mythical, "1 in 10,000", "The Depths", "6,500 C$"),
    ("Phantom Whale", Rarity::Mythical, "1 in 50,000", "Forsaken Shores", "15,000 C$"),
    // Exotic
    ("Kraken Spawn", Rarity::Exotic, "1 in 1,000,000", "Desolate Deep", "80,000 C$"),
    ("Storm Leviathan", Rarity::Exotic, "1 in 10,000,000", "Ancient Isle", "250,000 C$"),
    // Secret
    ("Whispering Koi", Rarity::Secret, "???", "???", "???"),
    ("Moonlit Angler", Rarity::Secret, "1 in ?", "Statue of Sovereignty", "???"),
    // Limited
    ("Frostscale Carp", Rarity::Limited, "1 in 500", "Winter Village", "400 C$"),
];

impl Catalog {
    /// The built-in sample catalog.
    pub fn builtin() -> Self {
        Catalog::new(
            BUILTIN_FISH
                .iter()
                .map(|&(name, rarity, odds, location, value)| FishRecord {
                    name: name.to_string(),
                    rarity,
                    odds: odds.to_string(),
                    location: location.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::OddsSpec;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique() {
        let catalog = Catalog::builtin();
        let names: HashSet<_> = catalog.fish().iter().map(|f| f.name.to_lowercase()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_builtin_odds_parse_unless_secret() {
        for fish in Catalog::builtin().fish() {
            let spec = fish.odds_spec();
            if fish.rarity == Rarity::Secret {
                assert_eq!(spec, OddsSpec::Unknown, "{}", fish.name);
            } else {
                assert!(spec.is_known(), "{} has odds '{}'", fish.name, fish.odds);
            }
        }
    }

    #[test]
    fn test_builtin_rarer_tiers_have_longer_odds() {
        let catalog = Catalog::builtin();
        let worst_common = catalog
            .by_rarity(Rarity::Common)
            .filter_map(|f| f.odds_spec().value())
            .fold(0.0, f64::max);
        let best_exotic = catalog
            .by_rarity(Rarity::Exotic)
            .filter_map(|f| f.odds_spec().value())
            .fold(f64::INFINITY, f64::min);
        assert!(best_exotic > worst_common);
    }
}
