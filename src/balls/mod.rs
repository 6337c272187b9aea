//! Balls domain: cosmetic bouncing tennis balls.
//!
//! The shop owns the ball list (it is part of the save file); this domain
//! advances the physics, keeps the population topped up to the number of
//! buildings owned, and mirrors the list into circle-mesh entities for
//! rendering.

use bevy::prelude::*;

use crate::shared::*;

pub mod physics;
pub mod rendering;
pub mod spawning;

pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<rendering::BallVisualAssets>()
            // Population upkeep, then integration, only while running.
            .add_systems(
                Update,
                (spawning::replenish_balls, physics::advance_balls)
                    .chain()
                    .run_if(in_state(GameState::Running)),
            )
            // Visual sync runs in every state so the court stays visible
            // behind the menu and credits overlays.
            .add_systems(
                Update,
                (
                    rendering::reset_ball_visuals_on_load,
                    rendering::sync_ball_visuals,
                )
                    .chain(),
            );
    }
}
