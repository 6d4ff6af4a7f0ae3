/// Player sprite loading.  A sprite is plain text art, one row per line.
/// Loading can fail; the game then shows a placeholder and carries on.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AssetError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub name: String,
    pub rows: Vec<String>,
}

impl Sprite {
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// How the player should be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerVisual {
    Sprite(Sprite),
    Placeholder,
}

impl PlayerVisual {
    pub fn sprite(&self) -> Option<&Sprite> {
        match self {
            PlayerVisual::Sprite(sprite) => Some(sprite),
            PlayerVisual::Placeholder => None,
        }
    }
}

pub fn load_sprite(path: &Path) -> Result<Sprite, AssetError> {
    let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Trailing blank lines are padding, not art.
    let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(AssetError::Empty {
            path: PathBuf::from(path),
        });
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string());
    Ok(Sprite { name, rows })
}

/// Resolve the player's visual, falling back to the placeholder on any error.
pub fn player_visual(path: Option<&Path>) -> PlayerVisual {
    let Some(path) = path else {
        return PlayerVisual::Placeholder;
    };
    match load_sprite(path) {
        Ok(sprite) => {
            info!(name = %sprite.name, rows = sprite.height(), "player sprite loaded");
            PlayerVisual::Sprite(sprite)
        }
        Err(err) => {
            warn!(%err, "player sprite unavailable, using placeholder");
            PlayerVisual::Placeholder
        }
    }
}
