//! Visuals for the click target: a felt-yellow circle with a white rim,
//! plus floating "+N" score popups that drift up and fade out.

use bevy::prelude::*;

use crate::shared::*;

/// The yellow fill circle.
#[derive(Component)]
pub struct TargetVisual;

/// The slightly larger white circle behind it, read as a rim.
#[derive(Component)]
pub struct TargetRim;

/// A floating score text spawned per scoring click.
#[derive(Component)]
pub struct ScorePopup {
    pub lifetime: Timer,
    pub velocity: Vec2,
}

/// Fill materials for the two hover states, created once at startup.
#[derive(Resource)]
pub struct TargetMaterials {
    pub normal: Handle<ColorMaterial>,
    pub hovered: Handle<ColorMaterial>,
}

pub fn spawn_target_visual(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    target: Res<ClickTarget>,
) {
    let world = screen_to_world(target.center());

    let fill_materials = TargetMaterials {
        normal: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.88, 0.1))),
        hovered: materials.add(ColorMaterial::from(Color::srgb(1.0, 0.95, 0.35))),
    };

    commands.spawn((
        TargetRim,
        Mesh2d(meshes.add(Circle::new(target.radius + 4.0))),
        MeshMaterial2d(materials.add(ColorMaterial::from(Color::WHITE))),
        Transform::from_translation(world.extend(2.0)),
    ));
    commands.spawn((
        TargetVisual,
        Mesh2d(meshes.add(Circle::new(target.radius))),
        MeshMaterial2d(fill_materials.normal.clone()),
        Transform::from_translation(world.extend(2.1)),
    ));
    commands.insert_resource(fill_materials);
}

/// Applies the animated scale to both circles and the hover tint to the
/// fill, reading the target through its [`CircleVisual`] interface.
pub fn sync_target_visual(
    target: Res<ClickTarget>,
    fill_materials: Option<Res<TargetMaterials>>,
    mut transforms: Query<&mut Transform, Or<(With<TargetVisual>, With<TargetRim>)>>,
    mut fills: Query<&mut MeshMaterial2d<ColorMaterial>, With<TargetVisual>>,
) {
    for mut transform in transforms.iter_mut() {
        transform.scale = Vec3::splat(target.scale);
    }

    let Some(fill_materials) = fill_materials else {
        return;
    };
    let wanted = if target.hovered() {
        &fill_materials.hovered
    } else {
        &fill_materials.normal
    };
    for mut material in fills.iter_mut() {
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

/// Spawns a "+N" text just above the target for every scoring click.
pub fn spawn_score_popups(
    mut commands: Commands,
    mut events: EventReader<ClickScoredEvent>,
    target: Res<ClickTarget>,
) {
    for ev in events.read() {
        let origin = screen_to_world(target.center()) + Vec2::new(0.0, target.visual_radius());
        commands.spawn((
            ScorePopup {
                lifetime: Timer::from_seconds(0.9, TimerMode::Once),
                velocity: Vec2::new(0.0, 45.0),
            },
            Text2d::new(format!("+{:.0}", ev.amount)),
            TextFont {
                font_size: 26.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_translation(origin.extend(3.0)),
        ));
    }
}

/// Drifts popups upward and fades them out, despawning when done.
pub fn update_score_popups(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut ScorePopup, &mut TextColor)>,
) {
    for (entity, mut transform, mut popup, mut color) in query.iter_mut() {
        popup.lifetime.tick(time.delta());

        let dt = time.delta_secs();
        transform.translation.x += popup.velocity.x * dt;
        transform.translation.y += popup.velocity.y * dt;

        let fraction_remaining =
            1.0 - popup.lifetime.elapsed_secs() / popup.lifetime.duration().as_secs_f32();
        let current = color.0;
        color.0 = current.with_alpha(fraction_remaining.max(0.0));

        if popup.lifetime.just_finished() {
            commands.entity(entity).despawn();
        }
    }
}
