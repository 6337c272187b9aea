//! Mirrors the shop's ball list into circle-mesh entities.
//!
//! No image assets ship with the game, so balls draw as flat-colored
//! circles; the palette is keyed by the skin id exposed through
//! [`CircleVisual`]. Mesh and material handles live in content-addressed
//! caches (radius and skin id respectively), so a thousand balls of six
//! kinds share a handful of GPU resources.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::shared::*;

/// Marks a circle entity mirroring `shop.balls[index]`.
#[derive(Component, Debug)]
pub struct BallVisual {
    pub index: usize,
}

/// Content-addressed visual caches. Meshes are keyed by radius rounded to
/// whole pixels, materials by skin id.
#[derive(Resource, Default)]
pub struct BallVisualAssets {
    pub meshes: HashMap<u32, Handle<Mesh>>,
    pub materials: HashMap<Option<BuildingId>, Handle<ColorMaterial>>,
}

/// Flat color per building skin; the fallback covers balls loaded from a
/// save with no type id.
pub fn ball_color(skin: Option<BuildingId>) -> Color {
    match skin {
        Some(1) => Color::srgb(0.86, 0.93, 0.21), // tennis yellow
        Some(2) => Color::srgb(0.95, 0.55, 0.15),
        Some(3) => Color::srgb(0.35, 0.75, 0.95),
        Some(4) => Color::srgb(0.65, 0.40, 0.90),
        Some(5) => Color::srgb(0.25, 0.90, 0.55),
        Some(6) => Color::srgb(0.95, 0.30, 0.40),
        _ => Color::srgb(0.80, 0.80, 0.75),
    }
}

/// A load replaces the ball list wholesale, so index-to-entity mappings go
/// stale (different radii, different skins). Drop every visual and let the
/// sync system rebuild from scratch.
pub fn reset_ball_visuals_on_load(
    mut commands: Commands,
    mut load_events: EventReader<LoadCompleteEvent>,
    query: Query<Entity, With<BallVisual>>,
) {
    let reloaded = load_events.read().any(|ev| ev.success);
    if !reloaded {
        return;
    }
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Keeps one circle entity per ball: moves existing visuals, spawns
/// missing ones, despawns extras past the end of the list.
pub fn sync_ball_visuals(
    mut commands: Commands,
    shop: Res<ShopState>,
    mut assets: ResMut<BallVisualAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BallVisual, &mut Transform)>,
) {
    let count = shop.balls.len();
    let mut covered = vec![false; count];

    for (entity, visual, mut transform) in query.iter_mut() {
        if visual.index >= count {
            commands.entity(entity).despawn();
            continue;
        }
        let ball = &shop.balls[visual.index];
        transform.translation = screen_to_world(ball.center()).extend(1.0);
        covered[visual.index] = true;
    }

    for (index, ball) in shop.balls.iter().enumerate() {
        if covered[index] {
            continue;
        }

        let radius_key = ball.visual_radius().round().max(1.0) as u32;
        let mesh = assets
            .meshes
            .entry(radius_key)
            .or_insert_with(|| meshes.add(Circle::new(radius_key as f32)))
            .clone();
        let material = assets
            .materials
            .entry(ball.skin())
            .or_insert_with(|| materials.add(ColorMaterial::from(ball_color(ball.skin()))))
            .clone();

        commands.spawn((
            BallVisual { index },
            Mesh2d(mesh),
            MeshMaterial2d(material),
            Transform::from_translation(screen_to_world(ball.center()).extend(1.0)),
        ));
    }
}
