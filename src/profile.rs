//! Player profile
//!
//! Best score, coin balance, owned ships, selected ship and the voice flag.
//! Each field is its own LocalStorage key so older saves stay readable; all
//! keys are rewritten whenever anything changes.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StorageError, load_json, save_json};

const KEY_BEST_SCORE: &str = "sd_hs";
const KEY_COINS: &str = "sd_coins";
const KEY_OWNED: &str = "sd_inv";
const KEY_SELECTED: &str = "sd_ship";
const KEY_VOICE: &str = "sd_voice";

/// Persistent player data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Highest score ever reached
    pub best_score: u64,
    /// Coin balance for the garage
    pub coins: u64,
    /// Ship ids the player owns (the starter ship is always owned)
    pub owned_ships: Vec<u32>,
    /// Currently flown ship
    pub selected_ship: u32,
    /// Spoken/sound feedback enabled
    pub voice_enabled: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            best_score: 0,
            coins: 0,
            owned_ships: vec![0],
            selected_ship: 0,
            voice_enabled: true,
        }
    }
}

impl Profile {
    /// Read every key once, defaulting whatever is missing or unreadable
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let defaults = Self::default();
        let profile = Self {
            best_score: load_json(store, KEY_BEST_SCORE).unwrap_or(defaults.best_score),
            coins: load_json(store, KEY_COINS).unwrap_or(defaults.coins),
            owned_ships: load_json(store, KEY_OWNED).unwrap_or(defaults.owned_ships),
            selected_ship: load_json(store, KEY_SELECTED).unwrap_or(defaults.selected_ship),
            // Anything but an explicit "false" keeps voice on
            voice_enabled: store.get(KEY_VOICE).as_deref() != Some("false"),
        };
        log::info!(
            "Loaded profile: best {}, {} coins, {} ships",
            profile.best_score,
            profile.coins,
            profile.owned_ships.len()
        );
        profile
    }

    /// Write all keys
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, KEY_COINS, &self.coins)?;
        save_json(store, KEY_OWNED, &self.owned_ships)?;
        save_json(store, KEY_SELECTED, &self.selected_ship)?;
        save_json(store, KEY_BEST_SCORE, &self.best_score)?;
        save_json(store, KEY_VOICE, &self.voice_enabled)?;
        Ok(())
    }

    /// Fold a finished run into the profile.
    ///
    /// Credits one coin per point and keeps the best score by plain max
    /// comparison. Returns true when the run set a new best.
    pub fn record_run(&mut self, score: u64) -> bool {
        self.coins = self.coins.saturating_add(score);
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }

    pub fn owns(&self, ship_id: u32) -> bool {
        self.owned_ships.contains(&ship_id)
    }

    pub fn toggle_voice(&mut self) -> bool {
        self.voice_enabled = !self.voice_enabled;
        self.voice_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn empty_store_gives_defaults() {
        let store = MemoryStore::default();
        let profile = Profile::load(&store);
        assert_eq!(profile, Profile::default());
        assert!(profile.voice_enabled);
        assert_eq!(profile.owned_ships, vec![0]);
    }

    #[test]
    fn voice_only_disabled_by_explicit_false() {
        let mut store = MemoryStore::default();
        store.set(KEY_VOICE, "false").unwrap();
        assert!(!Profile::load(&store).voice_enabled);

        store.set(KEY_VOICE, "garbage").unwrap();
        assert!(Profile::load(&store).voice_enabled);
    }

    #[test]
    fn reads_legacy_plain_values() {
        let mut store = MemoryStore::default();
        store.set(KEY_BEST_SCORE, "42").unwrap();
        store.set(KEY_COINS, "900").unwrap();
        store.set(KEY_OWNED, "[0,2]").unwrap();
        store.set(KEY_SELECTED, "2").unwrap();

        let profile = Profile::load(&store);
        assert_eq!(profile.best_score, 42);
        assert_eq!(profile.coins, 900);
        assert_eq!(profile.owned_ships, vec![0, 2]);
        assert_eq!(profile.selected_ship, 2);
    }

    #[test]
    fn save_then_load_is_identity() {
        let mut store = MemoryStore::default();
        let profile = Profile {
            best_score: 17,
            coins: 55,
            owned_ships: vec![0, 1, 4],
            selected_ship: 4,
            voice_enabled: false,
        };
        profile.save(&mut store).unwrap();
        assert_eq!(Profile::load(&store), profile);
    }

    #[test]
    fn best_score_is_max_of_runs() {
        let mut profile = Profile::default();
        assert!(profile.record_run(5));
        assert!(!profile.record_run(3));
        assert!(!profile.record_run(5));
        assert!(profile.record_run(8));
        assert_eq!(profile.best_score, 8);
        assert_eq!(profile.coins, 21);
    }

    #[test]
    fn zero_score_run_is_not_a_best() {
        let mut profile = Profile::default();
        assert!(!profile.record_run(0));
        assert_eq!(profile.coins, 0);
    }
}
