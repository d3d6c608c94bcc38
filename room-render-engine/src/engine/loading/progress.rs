use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub layout_loaded: bool,
}
