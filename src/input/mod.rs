use crate::shared::*;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, (read_player_input, manage_input_context).chain());
    }
}

/// The single point where hardware input becomes game actions.
fn read_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    context: Res<InputContext>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    // Window cursor positions are already top-left-origin logical pixels,
    // the same space the simulation runs in.
    input.cursor = windows.get_single().ok().and_then(|w| w.cursor_position());

    match *context {
        InputContext::Disabled => {}

        InputContext::Menu => {
            // Menu screens are driven by UI buttons; nothing to map here.
        }

        InputContext::Gameplay => {
            input.click = mouse.just_pressed(MouseButton::Left);
            input.pause = keys.just_pressed(KeyCode::Escape);
            input.quicksave = keys.just_pressed(KeyCode::F5);
            input.quickload = keys.just_pressed(KeyCode::F9);
        }
    }
}

/// Derives InputContext from GameState. ONE system, replaces per-domain guards.
fn manage_input_context(game_state: Res<State<GameState>>, mut context: ResMut<InputContext>) {
    *context = match *game_state.get() {
        GameState::Loading => InputContext::Disabled,
        GameState::MainMenu => InputContext::Menu,
        GameState::Credits => InputContext::Menu,
        GameState::Running => InputContext::Gameplay,
    };
}
