use bevy::{
    log::{debug, info},
    prelude::*,
    window::{PresentMode, WindowResolution},
};
use board_core::Position;

pub mod config;
pub mod geometry;
pub mod snackbar;

pub use config::BoardUiConfig;
pub use geometry::{position_to_world, world_to_position};
pub use snackbar::{SnackbarKind, SnackbarPlugin, Snackbars};

const BOARD_BORDER: f32 = 20.0;
const LIGHT_SQUARE: Color = Color::rgb(0.9, 0.9, 0.9);
const DARK_SQUARE: Color = Color::rgb(0.3, 0.3, 0.3);
const SELECTED_SQUARE: Color = Color::rgb(0.95, 0.75, 0.3);

/// Opens the window and draws the labelled board. Pair with [`SnackbarPlugin`] to see selections.
pub struct BoardUiPlugin;

/// Sent when the player clicks a cell.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSelected(pub Position);

#[derive(Component)]
struct BoardBackdrop;

#[derive(Component, Copy, Clone)]
struct Cell {
    position: Position,
}

#[derive(Component)]
struct CellLabel;

#[derive(Resource, Default)]
struct Selection(Option<Position>);

impl Plugin for BoardUiPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world
            .get_resource::<BoardUiConfig>()
            .cloned()
            .unwrap_or_default();

        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.clone(),
                resolution: WindowResolution::new(config.window_width, config.window_height),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .init_resource::<Selection>()
        .add_event::<CellSelected>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (handle_input, (record_selection, notify_selection, highlight_selection)).chain(),
        );
    }
}

fn setup(mut commands: Commands, config: Res<BoardUiConfig>) {
    commands.spawn(Camera2dBundle::default());

    let extent = geometry::board_extent(config.square_size);
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: Color::rgb(0.1, 0.1, 0.1),
                custom_size: Some(extent + Vec2::splat(BOARD_BORDER)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        },
        BoardBackdrop,
    ));

    for position in Position::all() {
        let centre = position_to_world(position, config.square_size);
        let base = square_color(position);

        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: base,
                    custom_size: Some(Vec2::splat(config.square_size)),
                    ..default()
                },
                transform: Transform::from_translation(centre.extend(1.0)),
                ..default()
            },
            Cell { position },
        ));

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    position.to_notation().to_string(),
                    TextStyle {
                        font_size: config.square_size * 0.3,
                        color: label_color(base),
                        ..default()
                    },
                ),
                transform: Transform::from_translation(centre.extend(2.0)),
                ..default()
            },
            CellLabel,
        ));
    }

    info!("board ready with {} cells", Position::all().count());
}

fn square_color(position: Position) -> Color {
    if (position.row() + position.col()) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

fn label_color(square: Color) -> Color {
    if square == LIGHT_SQUARE {
        Color::rgb(0.2, 0.2, 0.2)
    } else {
        Color::rgb(0.95, 0.95, 0.95)
    }
}

fn handle_input(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mouse_button: Res<Input<MouseButton>>,
    config: Res<BoardUiConfig>,
    mut selected: EventWriter<CellSelected>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let (Ok(window), Ok((camera, camera_transform))) = (windows.get_single(), camera_q.get_single())
    else {
        return;
    };

    let Some(world_position) = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor))
        .map(|ray| ray.origin.truncate())
    else {
        return;
    };

    if let Some(event) = cell_at(world_position, &config) {
        selected.send(event);
    }
}

fn cell_at(world_position: Vec2, config: &BoardUiConfig) -> Option<CellSelected> {
    let position = world_to_position(world_position, config.square_size);
    if position.is_none() {
        debug!("click at {world_position} is off the board");
    }
    position.map(CellSelected)
}

fn record_selection(mut events: EventReader<CellSelected>, mut selection: ResMut<Selection>) {
    for CellSelected(position) in events.read() {
        info!("selected {position}");
        selection.0 = Some(*position);
    }
}

fn notify_selection(
    mut events: EventReader<CellSelected>,
    snackbars: Option<ResMut<Snackbars>>,
) {
    let Some(mut snackbars) = snackbars else {
        events.clear();
        return;
    };
    for CellSelected(position) in events.read() {
        snackbars.push(format!("Selected {}", position.to_notation()), SnackbarKind::Info);
    }
}

fn highlight_selection(selection: Res<Selection>, mut cells: Query<(&Cell, &mut Sprite)>) {
    if !selection.is_changed() {
        return;
    }
    for (cell, mut sprite) in cells.iter_mut() {
        sprite.color = if selection.0 == Some(cell.position) {
            SELECTED_SQUARE
        } else {
            square_color(cell.position)
        };
    }
}
