use bevy::prelude::*;

/// Window and layout settings for the board view.
///
/// Insert your own before adding [`crate::BoardUiPlugin`] to override the defaults.
#[derive(Resource, Debug, Clone)]
pub struct BoardUiConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub square_size: f32,
}

impl Default for BoardUiConfig {
    fn default() -> Self {
        Self {
            title: "Notation Board".into(),
            window_width: 600.0,
            window_height: 700.0,
            square_size: 90.0,
        }
    }
}
