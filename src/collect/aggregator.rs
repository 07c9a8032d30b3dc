//! Learnset aggregation.
//!
//! `Dataset` accumulates two structures over the course of a run: the
//! three-level version-group → pokemon → learnset mapping, and the flat
//! move table. It also keeps the deduplicated move-name → detail-URL
//! table that drives the second fetch phase, so each distinct move is
//! fetched exactly once no matter how many pokemon learn it.

use crate::models::{
    MoveInfo, MoveResponse, MoveTable, PokemonRecord, PokemonResponse, VersionGroups,
};
use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// In-memory accumulation state for one download run.
///
/// Owned by the orchestrating routine and mutated through `&mut self`;
/// there is no global state.
#[derive(Debug, Default)]
pub struct Dataset {
    version_groups: VersionGroups,
    /// Move name → detail URL. Later pokemon referencing the same move
    /// rewrite the entry with an identical value, since the URL is a pure
    /// function of the move.
    move_endpoints: BTreeMap<String, String>,
    moves: MoveTable,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one pokemon's record into the version-group mapping.
    ///
    /// For every (move, version-group detail) pair the `(level, move name)`
    /// entry is appended under its learn method, preserving source order.
    /// Intermediate maps and the per-pokemon record are created on first
    /// access. If a record already exists for a (version group, name) pair,
    /// its id and types must match the incoming ones; a disagreement means
    /// the API returned inconsistent data and aborts the run.
    pub fn ingest_pokemon(&mut self, pokemon: &PokemonResponse) -> Result<()> {
        let types = pokemon.type_names();

        for entry in &pokemon.moves {
            for detail in &entry.version_group_details {
                let record = self
                    .version_groups
                    .entry(detail.version_group.name.clone())
                    .or_default()
                    .entry(pokemon.name.clone())
                    .or_insert_with(|| PokemonRecord::new(pokemon.id, types.clone()));

                if record.id != pokemon.id || record.types != types {
                    bail!(
                        "Inconsistent API data for '{}' in version group '{}': \
                         id {} / types {:?} vs previously seen id {} / types {:?}",
                        pokemon.name,
                        detail.version_group.name,
                        pokemon.id,
                        types,
                        record.id,
                        record.types,
                    );
                }

                record
                    .learn_methods
                    .entry(detail.move_learn_method.name.clone())
                    .or_default()
                    .push((detail.level_learned_at, entry.move_ref.name.clone()));
            }

            self.move_endpoints
                .insert(entry.move_ref.name.clone(), entry.move_ref.url.clone());
        }

        Ok(())
    }

    /// Store the attributes of one fetched move.
    pub fn insert_move(&mut self, name: &str, response: &MoveResponse) {
        self.moves.insert(name.to_string(), MoveInfo::from(response));
    }

    /// The deduplicated move-name → detail-URL table, in stable name order.
    pub fn move_endpoints(&self) -> &BTreeMap<String, String> {
        &self.move_endpoints
    }

    /// Number of distinct moves encountered so far.
    pub fn unique_move_count(&self) -> usize {
        self.move_endpoints.len()
    }

    /// The version-group → pokemon → learnset mapping.
    pub fn version_groups(&self) -> &VersionGroups {
        &self.version_groups
    }

    /// The move-name → attributes mapping.
    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }
}
