use bevy::prelude::*;
use board_ui::{BoardUiPlugin, SnackbarPlugin};

fn main() {
    App::new()
        .add_plugins(BoardUiPlugin)
        .add_plugins(SnackbarPlugin::default())
        .run();
}
