use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::layout::room_layout::RoomLayout;
use crate::engine::loading::layout_loader::{LayoutLoader, load_layout_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::floor_overlay::sync_used_area_overlay;
use crate::engine::scene::room::sync_room_scene;
use crate::engine::systems::fps_tracking::fps_text_update_system;

// Crate store and tools modules
use crate::store::apply::{
    apply_control_actions, apply_object_clicks, apply_object_moves, apply_wall_controls_closed,
    handle_keyboard_shortcuts,
};
use crate::store::{RoomObjects, SelectionState};
use crate::tools::control_panel::ControlPanelPlugin;
use crate::tools::control_panel::state::{ControlActionEvent, WallControlsClosedEvent};
use crate::tools::move_controller::{
    MovementController, ObjectMoveEvent, drive_move_mode, spawn_move_indicator,
};
use crate::tools::object_selection::{ObjectClickEvent, handle_object_click, update_hover_cursor};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers RoomLayout as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<RoomLayout>::new(&["json"]));

    // Plugin for the contextual control panel UI
    app.add_plugins(ControlPanelPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<LayoutLoader>()
        .init_resource::<RoomObjects>()
        .init_resource::<SelectionState>()
        .init_resource::<MovementController>()
        .init_resource::<ViewportCamera>()
        .add_event::<ObjectClickEvent>()
        .add_event::<ControlActionEvent>()
        .add_event::<ObjectMoveEvent>()
        .add_event::<WallControlsClosedEvent>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(Startup, spawn_move_indicator)
        .add_systems(
            Update,
            (load_layout_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base runtime systems - only run once the layout is in
    let runtime_systems = (
        camera_controller,
        // Input systems - a click that settles a move must not reach
        // selection, so picking runs before the move controller
        (
            handle_object_click,
            handle_keyboard_shortcuts,
            drive_move_mode,
        )
            .chain(),
        update_hover_cursor,
        // Store systems - apply the events raised this frame in order
        (
            apply_object_clicks,
            apply_control_actions,
            apply_object_moves,
            apply_wall_controls_closed,
        )
            .chain(),
        // Scene rebuild systems
        sync_room_scene,
        sync_used_area_overlay,
    );

    app.add_systems(Update, fps_text_update_system);
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("=== Room Planner ===");
    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands);
    spawn_overlays(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn spawn_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-2.5, 4.5, 9.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
