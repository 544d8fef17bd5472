use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::Player;
use crate::error::{Error, Result};
use crate::level::Level;

/// Persistence for per-level leaderboards.
///
/// A missing leaderboard is not an error and loads as an empty list.
pub trait LeaderboardStore {
    fn load(&self, level: Level) -> Result<Vec<Player>>;

    /// Replace the stored records for `level` with `players`.
    fn save(&self, level: Level, players: &[Player]) -> Result<()>;
}

/// One JSON file per level (`players_<level>.json`) inside a data directory.
///
/// Saves go through a temporary file in the same directory that is renamed
/// over the destination, so readers see either the old or the new list.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    const FILE_PREFIX: &'static str = "players";

    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, level: Level) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", Self::FILE_PREFIX, level.as_u8()))
    }
}

impl LeaderboardStore for JsonFileStore {
    fn load(&self, level: Level) -> Result<Vec<Player>> {
        let path = self.path_for(level);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No leaderboard at {} yet", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let players: Vec<Player> = serde_json::from_str(&content)?;
        debug!("Loaded {} players from {}", players.len(), path.display());
        Ok(players)
    }

    fn save(&self, level: Level, players: &[Player]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(level);

        let temp = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, players)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&path)?;

        debug!("Saved {} players to {}", players.len(), path.display());
        Ok(())
    }
}
