use crate::schema::{DeckRule, EnemyRule, GameConfig, HandRule, MultiplierRule, PlayerRule};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PLAYER_FILE: &str = "player.json";
const HAND_FILE: &str = "hand.json";
const DECK_FILE: &str = "deck.json";
const ENEMIES_FILE: &str = "enemies.json";
const MULTIPLIERS_FILE: &str = "multipliers.json";

/// `assets/` at the workspace root.
pub fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

/// Reads every config file under `dir`. Only `multipliers.json` may be absent.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    if !dir.is_dir() {
        bail!("assets directory {} does not exist", dir.display());
    }
    let player: PlayerRule = load_json(dir.join(PLAYER_FILE))?;
    let hand: HandRule = load_json(dir.join(HAND_FILE))?;
    let deck: DeckRule = load_json(dir.join(DECK_FILE))?;
    let enemies: Vec<EnemyRule> = load_json(dir.join(ENEMIES_FILE))?;
    let multipliers_path = dir.join(MULTIPLIERS_FILE);
    let multipliers: Vec<MultiplierRule> = if multipliers_path.exists() {
        load_json(multipliers_path)?
    } else {
        Vec::new()
    };

    let config = GameConfig {
        player,
        hand,
        deck,
        enemies,
        multipliers,
    };
    config
        .validate()
        .with_context(|| format!("validate config in {}", dir.display()))?;
    debug!(
        dir = %dir.display(),
        enemies = config.enemies.len(),
        deck = config.deck.card_count(),
        "game config loaded"
    );
    Ok(config)
}

/// Single-file form: one JSON object holding every section.
pub fn load_game_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    let config: GameConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// A directory is read section by section; anything else as a single file.
pub fn load_config_path(path: &Path) -> anyhow::Result<GameConfig> {
    if path.is_dir() {
        load_game_config(path)
    } else {
        load_game_config_file(path)
    }
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
