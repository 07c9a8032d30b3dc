//! Data models for the dataset downloader.
//!
//! Two families of types live here: the inbound shapes we deserialize from
//! PokeAPI responses, and the outbound shapes that make up the two JSON
//! documents written at the end of a run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Inbound: PokeAPI response shapes
// ---------------------------------------------------------------------------

/// A `{name, url}` pair, PokeAPI's standard reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One way a pokemon learns a move in one version group.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionGroupDetail {
    /// Level at which the move is learned. 0 for non-level methods
    /// (machines, tutors, breeding).
    pub level_learned_at: u16,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

/// A move on a pokemon's learnset, with every (version group, method)
/// combination it is available through.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// A pokemon's type in one slot.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// Response body of `GET /pokemon/{id}/`, reduced to the fields we use.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub moves: Vec<MoveEntry>,
    pub types: Vec<TypeSlot>,
}

impl PokemonResponse {
    /// Type names in slot order (slot 1 before slot 2).
    pub fn type_names(&self) -> Vec<String> {
        let mut slots = self.types.clone();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.type_ref.name).collect()
    }
}

/// Response body of a move detail URL, reduced to the fields we use.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveResponse {
    pub name: String,
    /// Base power. `null` in the API for status moves.
    pub power: Option<u16>,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

// ---------------------------------------------------------------------------
// Outbound: dataset shapes
// ---------------------------------------------------------------------------

/// A `(level, move name)` pair in a learnset, serialized as a two-element
/// JSON array.
pub type LearnedMove = (u16, String);

/// One pokemon's learnset within one version group.
///
/// The learn-method map is flattened so the output object reads
/// `{"id": 1, "types": ["normal"], "level-up": [[1, "tackle"]], ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub types: Vec<String>,
    #[serde(flatten)]
    pub learn_methods: BTreeMap<String, Vec<LearnedMove>>,
}

impl PokemonRecord {
    /// Creates an empty record for a pokemon. Learn methods are filled in
    /// as move entries are folded in.
    pub fn new(id: u32, types: Vec<String>) -> Self {
        Self {
            id,
            types,
            learn_methods: BTreeMap::new(),
        }
    }
}

/// Attributes of one move, as stored in `all_moves.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Base power, or an explicit `null` for status moves. No
    /// `skip_serializing_if` here: powerless moves must still appear.
    pub power: Option<u16>,
}

impl From<&MoveResponse> for MoveInfo {
    fn from(resp: &MoveResponse) -> Self {
        Self {
            type_name: resp.type_ref.name.clone(),
            power: resp.power,
        }
    }
}

/// The three-level mapping written to `all_pokemon.json`:
/// version-group name → pokemon name → learnset record.
pub type VersionGroups = BTreeMap<String, BTreeMap<String, PokemonRecord>>;

/// The flat mapping written to `all_moves.json`: move name → attributes.
pub type MoveTable = BTreeMap<String, MoveInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pokemon_response() {
        let json = r#"{
            "id": 1,
            "name": "bulbasaur",
            "order": 1,
            "moves": [
                {
                    "move": {"name": "tackle", "url": "https://pokeapi.co/api/v2/move/33/"},
                    "version_group_details": [
                        {
                            "level_learned_at": 1,
                            "move_learn_method": {"name": "level-up", "url": "https://pokeapi.co/api/v2/move-learn-method/1/"},
                            "version_group": {"name": "red-blue", "url": "https://pokeapi.co/api/v2/version-group/1/"}
                        }
                    ]
                }
            ],
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ]
        }"#;

        let pokemon: PokemonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.id, 1);
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.moves.len(), 1);
        assert_eq!(pokemon.moves[0].move_ref.name, "tackle");

        let details = &pokemon.moves[0].version_group_details;
        assert_eq!(details[0].level_learned_at, 1);
        assert_eq!(details[0].move_learn_method.name, "level-up");
        assert_eq!(details[0].version_group.name, "red-blue");
    }

    #[test]
    fn test_type_names_follow_slot_order() {
        let json = r#"{
            "id": 6,
            "name": "charizard",
            "moves": [],
            "types": [
                {"slot": 2, "type": {"name": "flying", "url": ""}},
                {"slot": 1, "type": {"name": "fire", "url": ""}}
            ]
        }"#;

        let pokemon: PokemonResponse = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
    }

    #[test]
    fn test_parse_move_response_with_power() {
        let json = r#"{
            "name": "tackle",
            "power": 40,
            "accuracy": 100,
            "type": {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"}
        }"#;

        let mv: MoveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(mv.power, Some(40));
        assert_eq!(mv.type_ref.name, "normal");
    }

    #[test]
    fn test_parse_move_response_null_power() {
        let json = r#"{
            "name": "growl",
            "power": null,
            "type": {"name": "normal", "url": ""}
        }"#;

        let mv: MoveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(mv.power, None);
    }

    #[test]
    fn test_move_info_serializes_explicit_null_power() {
        let info = MoveInfo {
            type_name: "normal".to_string(),
            power: None,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({"type": "normal", "power": null}));
    }

    #[test]
    fn test_pokemon_record_flattens_learn_methods() {
        let mut record = PokemonRecord::new(1, vec!["normal".to_string()]);
        record
            .learn_methods
            .entry("level-up".to_string())
            .or_default()
            .push((1, "tackle".to_string()));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "types": ["normal"],
                "level-up": [[1, "tackle"]]
            })
        );
    }

    #[test]
    fn test_pokemon_record_round_trip() {
        let mut record = PokemonRecord::new(25, vec!["electric".to_string()]);
        record
            .learn_methods
            .entry("machine".to_string())
            .or_default()
            .push((0, "thunderbolt".to_string()));

        let json = serde_json::to_string(&record).unwrap();
        let parsed: PokemonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
