//! Checksummed save files.
//!
//! The payload is JSON rather than a positional binary encoding so that
//! saves written by older builds still load: `GameState` fills every
//! missing field from its defaults, which gives field-by-field
//! migration for free when new systems are added.

use crate::core::constants::{AUTOSAVE_INTERVAL_SECONDS, SAVE_VERSION_MAGIC};
use crate::core::game_state::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Manages saving and loading game state with checksum verification.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save directory at the platform-appropriate location
    /// using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "deepmine").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!("deepmine-test-{}", test_id));
        fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            save_path: temp_dir.join("save.dat"),
        })
    }

    /// Saves the game state to disk, stamping `last_save_time`.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - JSON game state (variable length)
    /// - SHA256 checksum (32 bytes)
    ///
    /// An active dungeon run is never written; a reloaded game always
    /// starts outside the dungeon.
    pub fn save(&self, state: &mut GameState) -> io::Result<()> {
        state.last_save_time = chrono::Utc::now().timestamp();
        let data = serde_json::to_vec(state)?;
        let data_len = data.len() as u32;

        // Checksum covers version + length + data.
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the game state from disk with checksum verification.
    ///
    /// Returns an error if the file doesn't exist, the version magic is
    /// wrong, the checksum does not match, or the payload is not valid
    /// JSON for `GameState`.
    pub fn load(&self) -> io::Result<GameState> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        let state = serde_json::from_slice(&data)?;
        Ok(state)
    }

    /// Loads the save if a valid one exists, otherwise starts fresh.
    /// A corrupt file is reported to stderr rather than crashing the
    /// game; the player keeps the broken file for manual recovery.
    pub fn load_or_default(&self) -> GameState {
        if !self.save_exists() {
            return GameState::new();
        }
        match self.load() {
            Ok(state) => state,
            Err(err) => {
                eprintln!("warning: could not load save ({err}), starting fresh");
                GameState::new()
            }
        }
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

/// Whether the autosave cadence has elapsed since the last write.
pub fn autosave_due(state: &GameState, now: i64) -> bool {
    now - state.last_save_time >= AUTOSAVE_INTERVAL_SECONDS as i64
}
