//! Shared components, resources, events, and states for Courtside.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly, except for pure
//! helper functions a domain explicitly exports for reuse.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE: top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    MainMenu,
    Running,
    Credits,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Click power of a fresh player, before any upgrade is applied.
pub const BASE_CLICK_POWER: f64 = 1.0;

/// Building prices compound by 15% per unit owned.
pub const PRICE_GROWTH_RATE: f64 = 1.15;

/// Each bought upgrade doubles click power and grows the target by 15%.
pub const UPGRADE_POWER_FACTOR: f64 = 2.0;
pub const UPGRADE_SCALE_FACTOR: f64 = 1.15;

/// Every live ball trickles in 20% of its value per second on top of
/// building production.
pub const BALL_PASSIVE_RATE: f64 = 0.2;

/// Amplitude of the random velocity perturbation applied on wall bounces.
pub const BOUNCE_JITTER: f32 = 15.0;

/// Hit radius of the central click target.
pub const CLICK_TARGET_RADIUS: f32 = 110.0;

/// Hover growth factor and the exponential approach rate of the target's
/// scale animation.
pub const HOVER_SCALE: f32 = 1.12;
pub const SCALE_LERP_SPEED: f32 = 8.0;

// Freshly spawned balls land in the open court area, clear of the shop
// panel on the right.
pub const BALL_SPAWN_X_MIN: f32 = 200.0;
pub const BALL_SPAWN_X_MAX: f32 = 800.0;
pub const BALL_SPAWN_Y_MIN: f32 = 100.0;
pub const BALL_SPAWN_Y_MAX: f32 = 600.0;
pub const BALL_SPAWN_SPEED_X: f32 = 200.0;
pub const BALL_SPAWN_SPEED_Y: f32 = 150.0;

pub const SHOP_PANEL_WIDTH: f32 = 350.0;

/// Converts screen coordinates (origin top-left, y down) into Bevy world
/// coordinates (origin center, y up). The simulation runs in screen space;
/// rendering converts in this one place.
pub fn screen_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x - SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 - p.y)
}

// ═══════════════════════════════════════════════════════════════════════
// BUILDINGS
// ═══════════════════════════════════════════════════════════════════════

pub type BuildingId = u32;

/// A persistent production source purchasable with escalating cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    #[serde(default)]
    pub id: BuildingId,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_base_price")]
    pub base_price: u64,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub production_per_second: f64,
}

fn default_base_price() -> u64 {
    1
}

impl Building {
    pub fn new(id: BuildingId, name: &str, base_price: u64, production_per_second: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            base_price,
            count: 0,
            production_per_second,
        }
    }

    /// Price of the next unit: `floor(base_price * 1.15^count)`.
    /// Pure function of state, monotonically non-decreasing in `count`.
    pub fn price_next(&self) -> u64 {
        (self.base_price as f64 * PRICE_GROWTH_RATE.powi(self.count as i32)).floor() as u64
    }
}

// ═══════════════════════════════════════════════════════════════════════
// UPGRADES
// ═══════════════════════════════════════════════════════════════════════

/// A one-time, sequentially gated purchase. Only the upgrade at the shop's
/// current index is ever purchasable; `bought` flips false to true once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub bought: bool,
}

impl Upgrade {
    pub fn new(id: &str, name: &str, description: &str, price: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            bought: false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// BALLS
// ═══════════════════════════════════════════════════════════════════════

/// A cosmetic, physically simulated tennis ball. Positions are screen
/// coordinates (origin top-left), velocities are units per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallBody {
    #[serde(default = "default_ball_x")]
    pub x: f32,
    #[serde(default = "default_ball_y")]
    pub y: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    #[serde(default = "default_ball_radius")]
    pub radius: f32,
    #[serde(default = "default_ball_value")]
    pub value: f64,
    #[serde(default)]
    pub type_id: Option<BuildingId>,
}

fn default_ball_x() -> f32 {
    400.0
}

fn default_ball_y() -> f32 {
    300.0
}

fn default_ball_radius() -> f32 {
    12.0
}

fn default_ball_value() -> f64 {
    1.0
}

/// The rectangle balls bounce inside. Matches the full window.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: SCREEN_WIDTH,
            bottom: SCREEN_HEIGHT,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

/// The player's balance and scoring parameters. Owned by the world;
/// the shop and the click target read and write it through `ResMut`,
/// and a load overwrites it atomically.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    #[serde(default)]
    pub points: f64,
    #[serde(default = "default_click_power")]
    pub click_power: f64,
    #[serde(default = "default_global_multiplier")]
    pub global_multiplier: f64,
    /// Legacy duplicate of the upgrade bought-flags, kept for save
    /// compatibility. The flags on the shop's upgrade list are
    /// authoritative.
    #[serde(default)]
    pub purchased_upgrades: Vec<String>,
}

fn default_click_power() -> f64 {
    BASE_CLICK_POWER
}

fn default_global_multiplier() -> f64 {
    1.0
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            points: 0.0,
            click_power: BASE_CLICK_POWER,
            global_multiplier: 1.0,
            purchased_upgrades: Vec::new(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SHOP
// ═══════════════════════════════════════════════════════════════════════

/// The shop owns the building catalog, the upgrade track, and every live
/// ball. Derived upgrade multipliers are cached here so the UI and the
/// click target can read them without recomputing.
#[derive(Resource, Debug, Clone)]
pub struct ShopState {
    pub buildings: BTreeMap<BuildingId, Building>,
    pub upgrade_list: Vec<Upgrade>,
    pub current_upgrade_index: usize,
    pub balls: Vec<BallBody>,
    pub click_power_multiplier: f64,
    pub clickable_scale_multiplier: f64,
}

impl Default for ShopState {
    fn default() -> Self {
        Self {
            buildings: BTreeMap::new(),
            upgrade_list: Vec::new(),
            current_upgrade_index: 0,
            balls: Vec::new(),
            click_power_multiplier: 1.0,
            clickable_scale_multiplier: 1.0,
        }
    }
}

impl ShopState {
    /// Building production plus the per-ball passive trickle.
    pub fn total_production_per_second(&self) -> f64 {
        let from_buildings: f64 = self
            .buildings
            .values()
            .map(|b| b.production_per_second * b.count as f64)
            .sum();
        let from_balls: f64 = self.balls.iter().map(|b| b.value * BALL_PASSIVE_RATE).sum();
        from_buildings + from_balls
    }

    /// How many balls the population should hold: one per building owned.
    pub fn owed_ball_count(&self) -> usize {
        self.buildings.values().map(|b| b.count as usize).sum()
    }

    /// The upgrade currently offered, if any remain.
    pub fn current_upgrade(&self) -> Option<&Upgrade> {
        self.upgrade_list.get(self.current_upgrade_index)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CLICK TARGET
// ═══════════════════════════════════════════════════════════════════════

/// The big tennis ball in the middle of the court. Hit testing uses the
/// base radius; `scale` is purely visual.
#[derive(Resource, Debug, Clone)]
pub struct ClickTarget {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub base_scale: f32,
    pub scale: f32,
    pub target_scale: f32,
    pub hovered: bool,
}

impl Default for ClickTarget {
    fn default() -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0,
            y: SCREEN_HEIGHT / 2.0,
            radius: CLICK_TARGET_RADIUS,
            base_scale: 1.0,
            scale: 1.0,
            target_scale: 1.0,
            hovered: false,
        }
    }
}

impl ClickTarget {
    /// Whether a screen-space point lands inside the base hit circle.
    pub fn contains(&self, p: Vec2) -> bool {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CIRCLE VISUAL: the one drawing interface
// ═══════════════════════════════════════════════════════════════════════

/// Everything the renderer needs from a circular entity. Both balls and
/// the click target implement this uniformly, so drawing code never probes
/// for optional capabilities.
pub trait CircleVisual {
    /// Center in screen coordinates.
    fn center(&self) -> Vec2;
    /// Rendered radius, including any visual scale.
    fn visual_radius(&self) -> f32;
    /// Building id whose skin this entity wears, if any.
    fn skin(&self) -> Option<BuildingId>;
    fn hovered(&self) -> bool;
}

impl CircleVisual for BallBody {
    fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn visual_radius(&self) -> f32 {
        self.radius
    }

    fn skin(&self) -> Option<BuildingId> {
        self.type_id
    }

    fn hovered(&self) -> bool {
        false
    }
}

impl CircleVisual for ClickTarget {
    fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn visual_radius(&self) -> f32 {
        self.radius * self.scale
    }

    fn skin(&self) -> Option<BuildingId> {
        None
    }

    fn hovered(&self) -> bool {
        self.hovered
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION FLAGS
// ═══════════════════════════════════════════════════════════════════════

/// Tracks whether a play session has begun, so the menu can offer
/// "Resume" instead of "Start".
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionFlags {
    pub resumable: bool,
}

/// Set every simulated frame; cleared by save and load. Quitting with the
/// flag set triggers a final save.
#[derive(Resource, Debug, Clone, Default)]
pub struct UnsavedChanges(pub bool);

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// The single place hardware input becomes game actions. Gameplay systems
/// read this, never the keyboard or mouse directly.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    /// Cursor position in screen coordinates (origin top-left).
    pub cursor: Option<Vec2>,
    /// Left button went down this frame.
    pub click: bool,
    pub pause: bool,
    pub quicksave: bool,
    pub quickload: bool,
}

/// Which bindings are live, derived from the game state each frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Disabled,
    Menu,
    Gameplay,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS: cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Fired by the shop panel when the player clicks a building card.
#[derive(Event, Debug, Clone)]
pub struct BuyBuildingEvent {
    pub building_id: BuildingId,
}

/// Fired by the shop panel when the player clicks the upgrade card.
/// Only the upgrade at the current index is ever evaluated.
#[derive(Event, Debug, Clone)]
pub struct BuyUpgradeEvent;

/// A purchase went through; for logging and toasts.
#[derive(Event, Debug, Clone)]
pub struct PurchaseEvent {
    pub label: String,
    pub cost: u64,
}

/// A qualifying click on the target scored points.
#[derive(Event, Debug, Clone)]
pub struct ClickScoredEvent {
    pub amount: f64,
}

#[derive(Event, Debug, Clone)]
pub struct SaveRequestEvent;

#[derive(Event, Debug, Clone)]
pub struct LoadRequestEvent;

#[derive(Event, Debug, Clone)]
pub struct SaveCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

#[derive(Event, Debug, Clone)]
pub struct LoadCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

/// Toast notification for player feedback.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_next_at_zero_count_is_base_price() {
        let b = Building::new(1, "Ball Machine", 50, 0.5);
        assert_eq!(b.price_next(), 50);
    }

    #[test]
    fn test_price_next_monotonic() {
        let mut b = Building::new(3, "Ball Factory", 1500, 15.0);
        let mut last = 0;
        for count in 0..64 {
            b.count = count;
            let price = b.price_next();
            assert!(price >= last, "price shrank at count {}", count);
            last = price;
        }
    }

    #[test]
    fn test_price_next_compounds_by_fifteen_percent() {
        let mut b = Building::new(1, "Ball Machine", 100, 0.5);
        b.count = 1;
        assert_eq!(b.price_next(), 114); // floor(100 * 1.15)
        b.count = 2;
        assert_eq!(b.price_next(), 132); // floor(100 * 1.3225)
    }

    #[test]
    fn test_total_production_combines_buildings_and_balls() {
        let mut shop = ShopState::default();
        let mut b = Building::new(2, "Pro Launcher", 300, 4.0);
        b.count = 3;
        shop.buildings.insert(2, b);
        for _ in 0..3 {
            shop.balls.push(BallBody {
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                radius: 16.0,
                value: 4.0,
                type_id: Some(2),
            });
        }
        // 3 * 4.0 from buildings, 3 * 4.0 * 0.2 from balls
        assert!((shop.total_production_per_second() - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_click_target_hit_test_uses_base_radius() {
        let mut target = ClickTarget::default();
        target.scale = 3.0; // visual only
        let inside = Vec2::new(target.x + target.radius - 1.0, target.y);
        let outside = Vec2::new(target.x + target.radius + 1.0, target.y);
        assert!(target.contains(inside));
        assert!(!target.contains(outside));
    }

    #[test]
    fn test_owed_ball_count_sums_building_counts() {
        let mut shop = ShopState::default();
        let mut a = Building::new(1, "Ball Machine", 50, 0.5);
        a.count = 2;
        let mut b = Building::new(2, "Pro Launcher", 300, 4.0);
        b.count = 1;
        shop.buildings.insert(1, a);
        shop.buildings.insert(2, b);
        assert_eq!(shop.owed_ball_count(), 3);
    }
}
