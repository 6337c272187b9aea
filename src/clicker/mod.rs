//! Clicker domain: the big tennis ball in the middle of the court.
//!
//! Hover detection and hit testing run against the base radius (visual
//! scale never changes the hit box), scoring clicks award
//! `click_power * global_multiplier`, and the scale eases toward a target
//! composed from the upgrade multiplier and the hover factor.

use bevy::prelude::*;

use crate::shared::*;

pub mod interaction;
pub mod rendering;

pub struct ClickerPlugin;

impl Plugin for ClickerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, rendering::spawn_target_visual)
            .add_systems(
                Update,
                (
                    interaction::update_hover,
                    interaction::handle_clicks,
                    interaction::animate_scale,
                )
                    .chain()
                    .run_if(in_state(GameState::Running)),
            )
            // The target stays visible behind menu overlays; score popups
            // keep fading out wherever the player goes.
            .add_systems(
                Update,
                (
                    rendering::sync_target_visual,
                    rendering::spawn_score_popups,
                    rendering::update_score_popups,
                ),
            );
    }
}
