use bevy::prelude::*;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the toast container node (top-center of screen).
#[derive(Component)]
pub struct ToastContainer;

/// Marker for individual toast nodes.
#[derive(Component)]
pub struct ToastItem {
    pub timer: Timer,
    pub fade_timer: Option<Timer>,
}

const MAX_VISIBLE_TOASTS: usize = 3;

// ═══════════════════════════════════════════════════════════════════════
// SPAWN CONTAINER
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_toast_container(mut commands: Commands) {
    commands.spawn((
        ToastContainer,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(90.0),
            left: Val::Percent(50.0),
            width: Val::Px(320.0),
            // Shift left by half of the width to truly center it.
            margin: UiRect {
                left: Val::Px(-160.0),
                ..default()
            },
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            align_items: AlignItems::Center,
            ..default()
        },
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// HANDLE TOAST EVENTS
// ═══════════════════════════════════════════════════════════════════════

pub fn handle_toast_events(
    mut commands: Commands,
    mut events: EventReader<ToastEvent>,
    container_query: Query<Entity, With<ToastContainer>>,
    existing_toasts: Query<Entity, With<ToastItem>>,
) {
    let Ok(container) = container_query.get_single() else {
        return;
    };

    for event in events.read() {
        // Enforce the visible cap: despawn the oldest toast if over limit.
        let toast_entities: Vec<Entity> = existing_toasts.iter().collect();
        if toast_entities.len() >= MAX_VISIBLE_TOASTS {
            if let Some(&oldest) = toast_entities.first() {
                commands.entity(oldest).despawn_recursive();
            }
        }

        let toast_entity = commands
            .spawn((
                ToastItem {
                    timer: Timer::from_seconds(event.duration_secs, TimerMode::Once),
                    fade_timer: None,
                },
                Node {
                    padding: UiRect {
                        left: Val::Px(12.0),
                        right: Val::Px(12.0),
                        top: Val::Px(5.0),
                        bottom: Val::Px(5.0),
                    },
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
                BorderColor(Color::srgba(0.5, 0.5, 0.5, 0.5)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(event.message.clone()),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            })
            .id();

        commands.entity(container).add_child(toast_entity);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE TOASTS: tick timers, fade out, despawn
// ═══════════════════════════════════════════════════════════════════════

pub fn update_toasts(
    mut commands: Commands,
    time: Res<Time>,
    mut toast_query: Query<(Entity, &mut ToastItem, &mut BackgroundColor, &Children)>,
    mut text_color_query: Query<&mut TextColor>,
) {
    for (entity, mut toast, mut bg_color, children) in &mut toast_query {
        if toast.fade_timer.is_none() {
            toast.timer.tick(time.delta());
            if toast.timer.just_finished() {
                toast.fade_timer = Some(Timer::from_seconds(0.5, TimerMode::Once));
            }
            continue;
        }

        let (elapsed, duration, finished) = {
            let Some(ft) = toast.fade_timer.as_mut() else {
                continue;
            };
            ft.tick(time.delta());
            (
                ft.elapsed_secs(),
                ft.duration().as_secs_f32(),
                ft.finished(),
            )
        };

        if finished {
            commands.entity(entity).despawn_recursive();
            continue;
        }

        let alpha = 1.0 - (elapsed / duration).clamp(0.0, 1.0);
        let current = bg_color.0.to_srgba();
        bg_color.0 = Color::srgba(current.red, current.green, current.blue, 0.75 * alpha);
        for &child in children.iter() {
            if let Ok(mut text_color) = text_color_query.get_mut(child) {
                text_color.0 = Color::srgba(1.0, 1.0, 1.0, alpha);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENT-TO-TOAST WIRING
// ═══════════════════════════════════════════════════════════════════════

pub fn wire_purchase_toasts(
    mut purchase_events: EventReader<PurchaseEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for event in purchase_events.read() {
        toast_writer.send(ToastEvent {
            message: format!("Bought {} for {}$", event.label, event.cost),
            duration_secs: 2.0,
        });
    }
}

pub fn wire_save_toasts(
    mut save_events: EventReader<SaveCompleteEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for event in save_events.read() {
        let message = if event.success {
            "Game saved".to_string()
        } else {
            format!(
                "Save failed: {}",
                event.error_message.as_deref().unwrap_or("unknown error")
            )
        };
        toast_writer.send(ToastEvent {
            message,
            duration_secs: 2.5,
        });
    }
}

pub fn wire_load_toasts(
    mut load_events: EventReader<LoadCompleteEvent>,
    mut toast_writer: EventWriter<ToastEvent>,
) {
    for event in load_events.read() {
        let message = if event.success {
            "Game loaded".to_string()
        } else {
            format!(
                "Load failed: {}",
                event.error_message.as_deref().unwrap_or("unknown error")
            )
        };
        toast_writer.send(ToastEvent {
            message,
            duration_secs: 2.5,
        });
    }
}
