//! JSON file output.
//!
//! Serializes the two aggregated mappings as whole documents. No temp-file
//! swap: a crash mid-write can leave a truncated file, which is acceptable
//! because a rerun rebuilds everything from scratch anyway.

use crate::collect::Dataset;
use crate::config::OutputConfig;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the files produced by a successful write.
#[derive(Debug)]
pub struct WrittenFiles {
    pub pokemon_path: PathBuf,
    pub moves_path: PathBuf,
}

/// Write `all_pokemon.json` and `all_moves.json` into the output directory,
/// creating it if needed.
pub fn write_dataset(config: &OutputConfig, dataset: &Dataset) -> Result<WrittenFiles> {
    let dir = Path::new(&config.dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let pokemon_path = dir.join(&config.pokemon_file);
    write_json(&pokemon_path, dataset.version_groups())?;
    info!("Wrote {}", pokemon_path.display());

    let moves_path = dir.join(&config.moves_file);
    write_json(&moves_path, dataset.moves())?;
    info!("Wrote {}", moves_path.display());

    Ok(WrittenFiles {
        pokemon_path,
        moves_path,
    })
}

/// Serialize a value as pretty-printed JSON to a file.
fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoveResponse, PokemonResponse};

    fn sample_dataset() -> Dataset {
        let pokemon: PokemonResponse = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "samplemon",
            "moves": [
                {
                    "move": {"name": "tackle", "url": "https://pokeapi.co/api/v2/move/33/"},
                    "version_group_details": [
                        {
                            "level_learned_at": 1,
                            "move_learn_method": {"name": "level-up", "url": ""},
                            "version_group": {"name": "red-blue", "url": ""}
                        }
                    ]
                }
            ],
            "types": [{"slot": 1, "type": {"name": "normal", "url": ""}}]
        }))
        .unwrap();

        let tackle: MoveResponse = serde_json::from_value(serde_json::json!({
            "name": "tackle",
            "power": 35,
            "type": {"name": "normal", "url": ""}
        }))
        .unwrap();

        let mut dataset = Dataset::new();
        dataset.ingest_pokemon(&pokemon).unwrap();
        dataset.insert_move("tackle", &tackle);
        dataset
    }

    fn test_output_config(dir: &Path) -> OutputConfig {
        OutputConfig {
            dir: dir.display().to_string(),
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_write_dataset_creates_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_output_config(&tmp.path().join("res"));

        let written = write_dataset(&config, &sample_dataset()).unwrap();

        assert!(written.pokemon_path.exists());
        assert!(written.moves_path.exists());
        assert_eq!(
            written.pokemon_path.file_name().unwrap(),
            "all_pokemon.json"
        );
        assert_eq!(written.moves_path.file_name().unwrap(), "all_moves.json");
    }

    #[test]
    fn test_written_files_parse_back() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_output_config(tmp.path());

        let written = write_dataset(&config, &sample_dataset()).unwrap();

        let pokemon: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written.pokemon_path).unwrap())
                .unwrap();
        assert_eq!(
            pokemon["red-blue"]["samplemon"],
            serde_json::json!({
                "id": 1,
                "types": ["normal"],
                "level-up": [[1, "tackle"]]
            })
        );

        let moves: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written.moves_path).unwrap()).unwrap();
        assert_eq!(
            moves["tackle"],
            serde_json::json!({"type": "normal", "power": 35})
        );
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_output_config(tmp.path());

        let first = write_dataset(&config, &sample_dataset()).unwrap();
        let first_pokemon = std::fs::read(&first.pokemon_path).unwrap();
        let first_moves = std::fs::read(&first.moves_path).unwrap();

        let second = write_dataset(&config, &sample_dataset()).unwrap();
        assert_eq!(std::fs::read(&second.pokemon_path).unwrap(), first_pokemon);
        assert_eq!(std::fs::read(&second.moves_path).unwrap(), first_moves);
    }
}
