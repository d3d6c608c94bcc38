use bevy::prelude::*;

use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::layout::room_layout::RoomLayout;
use crate::engine::loading::progress::LoadingProgress;
use crate::store::RoomObjects;

/// Layout file loaded at startup, relative to the asset root.
pub const DEFAULT_LAYOUT_PATH: &str = "layouts/showroom.json";

#[derive(Resource, Default)]
pub struct LayoutLoader {
    handle: Option<Handle<RoomLayout>>,
}

// Start the loading process
pub fn start_loading(mut layout_loader: ResMut<LayoutLoader>, asset_server: Res<AssetServer>) {
    println!("→ Loading room layout from {}", DEFAULT_LAYOUT_PATH);
    layout_loader.handle = Some(asset_server.load(DEFAULT_LAYOUT_PATH));
}

/// Polls the layout asset and, once parsed, seeds the room store and
/// frames the camera on the room volume.
pub fn load_layout_system(
    mut loading_progress: ResMut<LoadingProgress>,
    layout_loader: Res<LayoutLoader>,
    layouts: Res<Assets<RoomLayout>>,
    mut commands: Commands,
) {
    if loading_progress.layout_loaded {
        return;
    }

    if let Some(ref handle) = layout_loader.handle {
        if let Some(layout) = layouts.get(handle) {
            println!(
                "✓ Room layout '{}' loaded ({} walls, {} shelves, {} columns)",
                layout.name,
                layout.walls.len(),
                layout.shelves.len(),
                layout.columns.len()
            );

            let vp_camera = ViewportCamera::framed_on(
                layout.room_center(),
                layout.room_size(),
                layout.ground_height(),
            );
            commands.insert_resource(vp_camera);
            commands.insert_resource(RoomObjects::from(layout));

            loading_progress.layout_loaded = true;
        }
    }
}
