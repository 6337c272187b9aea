mod balls;
mod clicker;
mod data;
mod economy;
mod input;
mod save;
mod shared;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Courtside".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Court green behind everything.
        .insert_resource(ClearColor(Color::srgb(0.08, 0.43, 0.08)))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<PlayerState>()
        .init_resource::<ShopState>()
        .init_resource::<ClickTarget>()
        .init_resource::<ArenaBounds>()
        .init_resource::<PlayerInput>()
        .init_resource::<InputContext>()
        .init_resource::<SessionFlags>()
        .init_resource::<UnsavedChanges>()
        // Events
        .add_event::<BuyBuildingEvent>()
        .add_event::<BuyUpgradeEvent>()
        .add_event::<PurchaseEvent>()
        .add_event::<ClickScoredEvent>()
        .add_event::<SaveRequestEvent>()
        .add_event::<LoadRequestEvent>()
        .add_event::<SaveCompleteEvent>()
        .add_event::<LoadCompleteEvent>()
        .add_event::<ToastEvent>()
        // Domain plugins
        .add_plugins(data::DataPlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(balls::BallPlugin)
        .add_plugins(clicker::ClickerPlugin)
        .add_plugins(ui::UiPlugin)
        .add_plugins(save::SavePlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
