use bevy::prelude::*;

use crate::shared::*;

/// Hover detection against the base radius, so the visual scale never
/// affects the hit test.
pub fn update_hover(input: Res<PlayerInput>, mut target: ResMut<ClickTarget>) {
    target.hovered = input.cursor.is_some_and(|p| target.contains(p));
}

/// Awards `click_power * global_multiplier` for a press inside the hit
/// circle. Presses elsewhere fall through to nothing; the shop panel's
/// buttons live outside the court and read the UI interaction state.
pub fn handle_clicks(
    input: Res<PlayerInput>,
    target: Res<ClickTarget>,
    mut player: ResMut<PlayerState>,
    mut score_writer: EventWriter<ClickScoredEvent>,
) {
    if !input.click {
        return;
    }
    let Some(cursor) = input.cursor else {
        return;
    };
    if !target.contains(cursor) {
        return;
    }

    let amount = player.click_power * player.global_multiplier;
    player.points += amount;
    score_writer.send(ClickScoredEvent { amount });
}

/// Eases the visual scale toward `base * upgrade_multiplier * hover`.
pub fn animate_scale(time: Res<Time>, shop: Res<ShopState>, mut target: ResMut<ClickTarget>) {
    let hover = if target.hovered { HOVER_SCALE } else { 1.0 };
    target.target_scale = target.base_scale * shop.clickable_scale_multiplier as f32 * hover;

    let diff = target.target_scale - target.scale;
    if diff.abs() > 1e-4 {
        let t = (SCALE_LERP_SPEED * time.delta_secs()).min(1.0);
        target.scale += diff * t;
    } else {
        target.scale = target.target_scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_click_awards_click_power_times_multiplier() {
        let target = ClickTarget::default();
        let mut player = PlayerState {
            click_power: 4.0,
            global_multiplier: 2.0,
            ..Default::default()
        };
        // Same arithmetic as handle_clicks once the hit test passes.
        assert!(target.contains(Vec2::new(target.x, target.y)));
        player.points += player.click_power * player.global_multiplier;
        assert_eq!(player.points, 8.0);
    }

    #[test]
    fn test_fresh_player_single_click_scores_exactly_one_point() {
        let target = ClickTarget::default();
        let mut player = PlayerState::default();
        assert!(target.contains(Vec2::new(target.x, target.y)));
        player.points += player.click_power * player.global_multiplier;
        assert_eq!(player.points, 1.0);
    }

    #[test]
    fn test_miss_outside_radius() {
        let target = ClickTarget::default();
        let miss = Vec2::new(target.x + target.radius + 5.0, target.y);
        assert!(!target.contains(miss));
    }
}
