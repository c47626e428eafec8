use super::traits::Trait;
use crate::error::{AppError, EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const SLOTS_PER_CHAMPION: usize = 3;

const BUILTIN_CATALOG: &str = include_str!("../../data/champions.json");

/// One of a champion's three trait assignments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionSlot {
    #[serde(rename = "trait")]
    pub trait_id: Trait,
    pub lore: String,
}

/// A champion and the three traits it can unlock, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionSlotDefinition {
    pub name: String,
    pub slots: [ChampionSlot; SLOTS_PER_CHAMPION],
}

impl ChampionSlotDefinition {
    pub fn traits(&self) -> [Trait; SLOTS_PER_CHAMPION] {
        [
            self.slots[0].trait_id,
            self.slots[1].trait_id,
            self.slots[2].trait_id,
        ]
    }

    pub fn has_trait(&self, trait_id: Trait) -> bool {
        self.slots.iter().any(|slot| slot.trait_id == trait_id)
    }
}

// On-disk shape. Trait names stay strings here so that bad entries surface
// as integrity errors rather than serde errors.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    champions: Vec<RawChampion>,
}

#[derive(Debug, Deserialize)]
struct RawChampion {
    name: String,
    slots: Vec<RawSlot>,
}

#[derive(Debug, Deserialize)]
struct RawSlot {
    #[serde(rename = "trait")]
    trait_name: String,
    lore: String,
}

/// Immutable champion/trait-slot table, keyed and iterated by champion name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionCatalog {
    entries: BTreeMap<String, ChampionSlotDefinition>,
}

impl ChampionCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> EngineResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    pub fn from_json(content: &str) -> EngineResult<Self> {
        let raw: RawCatalog =
            serde_json::from_str(content).map_err(|e| EngineError::CatalogIntegrity {
                champion: "<catalog>".to_string(),
                reason: format!("malformed JSON: {}", e),
            })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> EngineResult<Self> {
        if raw.champions.is_empty() {
            return Err(integrity("<catalog>", "catalog has no champions"));
        }

        let mut entries = BTreeMap::new();
        for champion in raw.champions {
            let definition = validate_entry(champion)?;
            if entries.contains_key(&definition.name) {
                return Err(integrity(&definition.name, "champion listed twice"));
            }
            entries.insert(definition.name.clone(), definition);
        }

        debug!("Loaded champion catalog with {} entries", entries.len());
        Ok(ChampionCatalog { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ChampionSlotDefinition> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChampionSlotDefinition> {
        self.entries.values()
    }

    /// Champions that carry `trait_id` in one of their slots, by name.
    pub fn champions_with(&self, trait_id: Trait) -> Vec<&str> {
        self.iter()
            .filter(|def| def.has_trait(trait_id))
            .map(|def| def.name.as_str())
            .collect()
    }
}

fn integrity(champion: &str, reason: impl Into<String>) -> EngineError {
    EngineError::CatalogIntegrity {
        champion: champion.to_string(),
        reason: reason.into(),
    }
}

fn check_distinct(champion: &str, traits: &[Trait]) -> EngineResult<()> {
    for (i, t) in traits.iter().enumerate() {
        if traits[..i].contains(t) {
            return Err(integrity(champion, format!("trait '{}' assigned twice", t)));
        }
    }
    Ok(())
}

fn validate_entry(raw: RawChampion) -> EngineResult<ChampionSlotDefinition> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(integrity("<unnamed>", "champion name is empty"));
    }
    if raw.slots.len() != SLOTS_PER_CHAMPION {
        return Err(integrity(
            &name,
            format!(
                "expected {} trait slots, found {}",
                SLOTS_PER_CHAMPION,
                raw.slots.len()
            ),
        ));
    }

    let mut slots = Vec::with_capacity(SLOTS_PER_CHAMPION);
    for slot in raw.slots {
        let trait_id: Trait = slot
            .trait_name
            .parse()
            .map_err(|e: String| integrity(&name, e))?;
        if slot.lore.trim().is_empty() {
            return Err(integrity(&name, format!("slot '{}' has no lore", trait_id)));
        }
        slots.push(ChampionSlot {
            trait_id,
            lore: slot.lore,
        });
    }

    let traits: Vec<Trait> = slots.iter().map(|s| s.trait_id).collect();
    check_distinct(&name, &traits)?;

    let slots: [ChampionSlot; SLOTS_PER_CHAMPION] = slots
        .try_into()
        .map_err(|_| integrity(&name, "slot count changed during validation"))?;

    Ok(ChampionSlotDefinition { name, slots })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(name: &str, traits: [&str; 3]) -> String {
        let slots: Vec<String> = traits
            .iter()
            .map(|t| format!(r#"{{"trait": "{}", "lore": "lore for {}"}}"#, t, t))
            .collect();
        format!(r#"{{"name": "{}", "slots": [{}]}}"#, name, slots.join(","))
    }

    fn catalog_json(entries: &[String]) -> String {
        format!(r#"{{"champions": [{}]}}"#, entries.join(","))
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = ChampionCatalog::builtin().unwrap();
        assert!(catalog.len() >= 60);
        for def in catalog.iter() {
            assert_eq!(def.slots.len(), 3);
        }
        let braum = catalog.get("Braum").unwrap();
        assert_eq!(
            braum.traits(),
            [Trait::Protector, Trait::Tactician, Trait::Healer]
        );
    }

    #[test]
    fn every_trait_has_champions() {
        let catalog = ChampionCatalog::builtin().unwrap();
        for t in Trait::ALL {
            assert!(!catalog.champions_with(t).is_empty(), "{} has no champions", t);
        }
    }

    #[test]
    fn iteration_is_name_ordered() {
        let catalog = ChampionCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn accepts_bare_trait_ids() {
        let json = catalog_json(&[entry("Braum", ["protector", "tactician", "HEALER"])]);
        let catalog = ChampionCatalog::from_json(&json).unwrap();
        assert!(catalog.get("Braum").unwrap().has_trait(Trait::Healer));
    }

    #[rstest]
    #[case::unknown_trait(catalog_json(&[entry("Teemo", ["The Protector", "The Scout", "The Healer"])]), "unknown trait")]
    #[case::repeated_trait(catalog_json(&[entry("Teemo", ["The Protector", "protector", "The Healer"])]), "assigned twice")]
    #[case::duplicate_champion(catalog_json(&[entry("Teemo", ["The Protector", "The Tactician", "The Healer"]), entry("Teemo", ["The Fearless", "The Tactician", "The Healer"])]), "listed twice")]
    #[case::empty_catalog(catalog_json(&[]), "no champions")]
    #[case::two_slots(r#"{"champions": [{"name": "Teemo", "slots": [{"trait": "The Protector", "lore": "a"}, {"trait": "The Healer", "lore": "b"}]}]}"#.to_string(), "expected 3 trait slots, found 2")]
    #[case::empty_lore(r#"{"champions": [{"name": "Teemo", "slots": [{"trait": "The Protector", "lore": ""}, {"trait": "The Healer", "lore": "b"}, {"trait": "The Adaptive", "lore": "c"}]}]}"#.to_string(), "has no lore")]
    #[case::bad_json("{ not json".to_string(), "malformed JSON")]
    fn integrity_failures(#[case] json: String, #[case] expected: &str) {
        let err = ChampionCatalog::from_json(&json).unwrap_err();
        match err {
            EngineError::CatalogIntegrity { reason, .. } => {
                assert!(reason.contains(expected), "reason was: {}", reason)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    fn write_catalog(file_name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_reads_a_catalog_file() {
        let json = catalog_json(&[entry("Braum", ["The Protector", "The Tactician", "The Healer"])]);
        let path = write_catalog("runic_resonance_valid_catalog.json", &json);
        let catalog = ChampionCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        fs::remove_file(path).ok();
    }

    #[test]
    fn load_keeps_the_integrity_error() {
        let json = catalog_json(&[entry("Teemo", ["The Protector", "The Scout", "The Healer"])]);
        let path = write_catalog("runic_resonance_bad_catalog.json", &json);
        let err = ChampionCatalog::load(&path).unwrap_err();
        fs::remove_file(path).ok();
        match err {
            AppError::Engine(EngineError::CatalogIntegrity { champion, .. }) => {
                assert_eq!(champion, "Teemo")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn load_reports_missing_files_as_io() {
        let path = std::env::temp_dir().join("runic_resonance_no_such_catalog.json");
        assert!(matches!(ChampionCatalog::load(&path), Err(AppError::Io(_))));
    }
}
