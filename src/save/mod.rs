//! Persistence: one JSON document holding the player and the shop.
//!
//! Save writes go through a temp file and an atomic rename. Loads are
//! maximally forgiving: a missing file is "no data" (current state stays
//! untouched), a file that fails to parse is logged and likewise treated
//! as no data, and any missing or malformed field inside a parsed file
//! falls back to its per-field serde default. Nothing in this module can
//! take down the frame loop; failures surface as completion events that
//! get logged and toasted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
use std::path::{Path, PathBuf};

use crate::economy::effects::recompute_upgrade_effects;
use crate::shared::*;

pub const SAVE_FILE_NAME: &str = "save_slot_1.json";

// ═══════════════════════════════════════════════════════════════════════
// SAVE FILE SHAPE
// ═══════════════════════════════════════════════════════════════════════

/// The on-disk document: `{ "player": {...}, "shop": {...} }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub player: PlayerState,
    #[serde(default)]
    pub shop: ShopSave,
}

/// Shop portion of the save. Building map keys are the building ids
/// (serialized as JSON object keys).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopSave {
    #[serde(default)]
    pub buildings: BTreeMap<BuildingId, Building>,
    #[serde(default)]
    pub current_upgrade_index: usize,
    #[serde(default)]
    pub upgrade_list: Vec<Upgrade>,
    #[serde(default)]
    pub balls: Vec<BallBody>,
}

/// Snapshot of the live resources in save-file shape.
pub fn capture_save(player: &PlayerState, shop: &ShopState) -> SaveFile {
    SaveFile {
        player: player.clone(),
        shop: ShopSave {
            buildings: shop.buildings.clone(),
            current_upgrade_index: shop.current_upgrade_index,
            upgrade_list: shop.upgrade_list.clone(),
            balls: shop.balls.clone(),
        },
    }
}

/// Applies a loaded file onto the live resources.
///
/// Counts land on known catalog buildings only (unknown ids are ignored),
/// bought flags apply positionally onto the catalog upgrade track, the
/// index is clamped to the track length, and the ball list is replaced
/// wholesale. Effects are recomputed from the bought flags at the end, so
/// derived click power never depends on what the file claimed it was.
pub fn apply_save(file: SaveFile, player: &mut PlayerState, shop: &mut ShopState) {
    *player = file.player;

    for (id, saved) in file.shop.buildings {
        if let Some(building) = shop.buildings.get_mut(&id) {
            building.count = saved.count;
        } else {
            warn!("[Save] Ignoring unknown building id {} in save file", id);
        }
    }

    shop.current_upgrade_index = file.shop.current_upgrade_index.min(shop.upgrade_list.len());
    for (i, saved) in file.shop.upgrade_list.iter().enumerate() {
        if let Some(upgrade) = shop.upgrade_list.get_mut(i) {
            upgrade.bought = saved.bought;
        }
    }

    shop.balls = file.shop.balls;

    recompute_upgrade_effects(shop, player);
}

// ═══════════════════════════════════════════════════════════════════════
// FILESYSTEM
// ═══════════════════════════════════════════════════════════════════════

/// Where the save document lives. Defaults to `saves/` beside the
/// executable; tests point it at a temp directory.
#[derive(Resource, Debug, Clone)]
pub struct SaveLocation(pub PathBuf);

impl Default for SaveLocation {
    fn default() -> Self {
        Self(default_save_path())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_save_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    exe_dir.join("saves").join(SAVE_FILE_NAME)
}

#[cfg(target_arch = "wasm32")]
fn default_save_path() -> PathBuf {
    PathBuf::from(SAVE_FILE_NAME)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_save(path: &Path, player: &PlayerState, shop: &ShopState) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Could not create saves directory: {}", e))?;
        }
    }

    let file = capture_save(player, shop);
    let json =
        serde_json::to_string_pretty(&file).map_err(|e| format!("Serialization failed: {}", e))?;

    // Write to a temp file first, then rename for atomicity.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn write_save(_path: &Path, _player: &PlayerState, _shop: &ShopState) -> Result<(), String> {
    Ok(())
}

/// Reads the save document. `Ok(None)` means "no data": the file does not
/// exist, and the caller should leave current state untouched.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_save(path: &Path) -> Result<Option<SaveFile>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    let file: SaveFile =
        serde_json::from_str(&json).map_err(|e| format!("Deserialization failed: {}", e))?;
    Ok(Some(file))
}

#[cfg(target_arch = "wasm32")]
pub fn read_save(_path: &Path) -> Result<Option<SaveFile>, String> {
    Ok(None)
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveLocation>()
            // Requests arrive from the menu in MainMenu and from quick
            // keys in Running; handle them wherever they come from.
            .add_systems(Update, (handle_save_request, handle_load_request))
            .add_systems(
                Update,
                quicksave_keybind.run_if(in_state(GameState::Running)),
            )
            // Runs after the frame that queued AppExit, before shutdown.
            .add_systems(Last, save_on_exit);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn handle_save_request(
    mut save_events: EventReader<SaveRequestEvent>,
    location: Res<SaveLocation>,
    player: Res<PlayerState>,
    shop: Res<ShopState>,
    mut unsaved: ResMut<UnsavedChanges>,
    mut complete_writer: EventWriter<SaveCompleteEvent>,
) {
    for _ev in save_events.read() {
        match write_save(&location.0, &player, &shop) {
            Ok(()) => {
                unsaved.0 = false;
                info!("[Save] Saved to {}", location.0.display());
                complete_writer.send(SaveCompleteEvent {
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("[Save] Save FAILED: {}", e);
                complete_writer.send(SaveCompleteEvent {
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

pub fn handle_load_request(
    mut load_events: EventReader<LoadRequestEvent>,
    location: Res<SaveLocation>,
    mut player: ResMut<PlayerState>,
    mut shop: ResMut<ShopState>,
    mut unsaved: ResMut<UnsavedChanges>,
    mut complete_writer: EventWriter<LoadCompleteEvent>,
) {
    for _ev in load_events.read() {
        match read_save(&location.0) {
            Ok(Some(file)) => {
                apply_save(file, &mut player, &mut shop);
                unsaved.0 = false;
                info!("[Save] Loaded from {}", location.0.display());
                complete_writer.send(LoadCompleteEvent {
                    success: true,
                    error_message: None,
                });
            }
            Ok(None) => {
                // No save file yet: not an error, and not a state change.
                info!("[Save] No save file at {}", location.0.display());
            }
            Err(e) => {
                warn!("[Save] Load FAILED: {}", e);
                complete_writer.send(LoadCompleteEvent {
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

/// F5 saves, F9 loads, while running.
pub fn quicksave_keybind(
    input: Res<PlayerInput>,
    mut save_writer: EventWriter<SaveRequestEvent>,
    mut load_writer: EventWriter<LoadRequestEvent>,
) {
    if input.quicksave {
        save_writer.send(SaveRequestEvent);
    }
    if input.quickload {
        load_writer.send(LoadRequestEvent);
    }
}

/// Final save on shutdown when there is unsaved progress. Runs in `Last`
/// on the frame that queued AppExit (Quit button, or the window closing),
/// so the write happens before the process winds down.
pub fn save_on_exit(
    mut exit_events: EventReader<AppExit>,
    location: Res<SaveLocation>,
    player: Res<PlayerState>,
    shop: Res<ShopState>,
    mut unsaved: ResMut<UnsavedChanges>,
) {
    if exit_events.read().next().is_none() {
        return;
    }
    if !unsaved.0 {
        return;
    }
    match write_save(&location.0, &player, &shop) {
        Ok(()) => {
            unsaved.0 = false;
            info!("[Save] Final save written on exit.");
        }
        Err(e) => warn!("[Save] Final save on exit FAILED: {}", e),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    fn catalog_shop() -> ShopState {
        ShopState {
            buildings: catalog::starting_buildings(),
            upgrade_list: catalog::starting_upgrades(),
            ..Default::default()
        }
    }

    fn temp_save_path(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("courtside-save-test-{}-{}", tag, std::process::id()))
            .join(SAVE_FILE_NAME)
    }

    #[test]
    fn test_round_trip_reproduces_shop_state() {
        let mut shop = catalog_shop();
        let mut player = PlayerState {
            points: 1234.5,
            global_multiplier: 2.0,
            ..Default::default()
        };
        if let Some(b) = shop.buildings.get_mut(&1) {
            b.count = 3;
        }
        if let Some(b) = shop.buildings.get_mut(&5) {
            b.count = 1;
        }
        shop.upgrade_list[0].bought = true;
        shop.current_upgrade_index = 1;
        player.purchased_upgrades.push("up1".to_string());
        player.click_power = 2.0;
        shop.balls = vec![
            BallBody {
                x: 321.0,
                y: 432.5,
                vx: -120.0,
                vy: 75.25,
                radius: 14.0,
                value: 0.5,
                type_id: Some(1),
            },
            BallBody {
                x: 640.0,
                y: 100.0,
                vx: 10.0,
                vy: -140.0,
                radius: 22.0,
                value: 400.0,
                type_id: Some(5),
            },
        ];

        let path = temp_save_path("roundtrip");
        write_save(&path, &player, &shop).expect("save should succeed");
        let file = read_save(&path)
            .expect("read should succeed")
            .expect("file should exist");

        let mut loaded_player = PlayerState::default();
        let mut loaded_shop = catalog_shop();
        apply_save(file, &mut loaded_player, &mut loaded_shop);

        assert_eq!(loaded_player.points, 1234.5);
        assert_eq!(loaded_player.global_multiplier, 2.0);
        assert_eq!(loaded_player.purchased_upgrades, vec!["up1".to_string()]);
        assert_eq!(loaded_shop.buildings[&1].count, 3);
        assert_eq!(loaded_shop.buildings[&5].count, 1);
        assert_eq!(loaded_shop.current_upgrade_index, 1);
        assert!(loaded_shop.upgrade_list[0].bought);
        assert!(!loaded_shop.upgrade_list[1].bought);
        assert_eq!(loaded_shop.balls, shop.balls);
        // Derived state recomputed from flags, not trusted from the file.
        assert_eq!(loaded_player.click_power, 2.0);
        assert_eq!(loaded_shop.click_power_multiplier, 2.0);

        let _ = fs::remove_dir_all(path.parent().expect("temp path has a parent"));
    }

    #[test]
    fn test_missing_file_is_no_data() {
        let path = temp_save_path("missing").join("nope.json");
        assert!(matches!(read_save(&path), Ok(None)));
    }

    #[test]
    fn test_garbage_file_is_an_error_not_a_panic() {
        let path = temp_save_path("garbage");
        fs::create_dir_all(path.parent().expect("temp path has a parent"))
            .expect("temp dir should be writable");
        fs::write(&path, "{ not json").expect("temp file should be writable");
        assert!(read_save(&path).is_err());
        let _ = fs::remove_dir_all(path.parent().expect("temp path has a parent"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let file: SaveFile = serde_json::from_str("{}").expect("empty object should parse");
        assert_eq!(file.player.points, 0.0);
        assert_eq!(file.player.click_power, BASE_CLICK_POWER);
        assert_eq!(file.player.global_multiplier, 1.0);
        assert!(file.shop.buildings.is_empty());
        assert!(file.shop.balls.is_empty());

        let partial = r#"{
            "player": { "points": 99.5 },
            "shop": {
                "buildings": { "2": { "id": 2, "count": 4 } },
                "balls": [ { "x": 10.0 } ]
            }
        }"#;
        let file: SaveFile = serde_json::from_str(partial).expect("partial file should parse");
        assert_eq!(file.player.points, 99.5);
        assert_eq!(file.player.click_power, BASE_CLICK_POWER);
        assert_eq!(file.shop.buildings[&2].count, 4);
        assert_eq!(file.shop.balls[0].x, 10.0);
        assert_eq!(file.shop.balls[0].radius, 12.0);
        assert_eq!(file.shop.balls[0].value, 1.0);
        assert_eq!(file.shop.balls[0].type_id, None);
    }

    #[test]
    fn test_apply_ignores_unknown_building_ids() {
        let json = r#"{
            "shop": { "buildings": { "42": { "id": 42, "count": 9 } } }
        }"#;
        let file: SaveFile = serde_json::from_str(json).expect("file should parse");
        let mut player = PlayerState::default();
        let mut shop = catalog_shop();
        apply_save(file, &mut player, &mut shop);
        assert!(shop.buildings.values().all(|b| b.count == 0));
    }

    #[test]
    fn test_apply_clamps_out_of_range_upgrade_index() {
        let json = r#"{ "shop": { "current_upgrade_index": 999 } }"#;
        let file: SaveFile = serde_json::from_str(json).expect("file should parse");
        let mut player = PlayerState::default();
        let mut shop = catalog_shop();
        apply_save(file, &mut player, &mut shop);
        assert_eq!(shop.current_upgrade_index, shop.upgrade_list.len());
    }
}
