mod credits;
mod hud;
mod main_menu;
mod shop_panel;
mod toast;
mod widgets;

use bevy::prelude::*;

use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── TOASTS: always present ───
        app.add_systems(Startup, toast::spawn_toast_container);
        app.add_systems(
            Update,
            (
                toast::wire_purchase_toasts,
                toast::wire_save_toasts,
                toast::wire_load_toasts,
                toast::handle_toast_events,
                toast::update_toasts,
            )
                .chain(),
        );

        // ─── BUTTON TINTING: shared across every screen ───
        app.add_systems(Update, widgets::tint_buttons_on_interaction);

        // ─── MAIN MENU ───
        app.add_systems(OnEnter(GameState::MainMenu), main_menu::spawn_main_menu);
        app.add_systems(OnExit(GameState::MainMenu), main_menu::despawn_main_menu);
        app.add_systems(
            Update,
            main_menu::handle_menu_buttons.run_if(in_state(GameState::MainMenu)),
        );

        // ─── CREDITS ───
        app.add_systems(OnEnter(GameState::Credits), credits::spawn_credits);
        app.add_systems(OnExit(GameState::Credits), credits::despawn_credits);
        app.add_systems(
            Update,
            credits::handle_back_button.run_if(in_state(GameState::Credits)),
        );

        // ─── HUD + SHOP PANEL: visible while running ───
        app.add_systems(
            OnEnter(GameState::Running),
            (hud::spawn_hud, shop_panel::spawn_shop_panel),
        );
        app.add_systems(
            OnExit(GameState::Running),
            (hud::despawn_hud, shop_panel::despawn_shop_panel),
        );
        app.add_systems(
            Update,
            (
                hud::update_points_text,
                hud::update_production_text,
                hud::update_click_power_text,
                hud::handle_pause_button,
                hud::pause_keybind,
                shop_panel::handle_building_card_clicks,
                shop_panel::handle_upgrade_card_clicks,
                shop_panel::refresh_shop_panel,
            )
                .run_if(in_state(GameState::Running)),
        );
    }
}
