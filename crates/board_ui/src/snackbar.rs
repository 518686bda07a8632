use bevy::{log::debug, prelude::*};
use std::{collections::VecDeque, time::Duration};

const SNACKBAR_FONT_SIZE: f32 = 22.0;

/// Registers the [`Snackbars`] queue and the systems that draw and expire it.
pub struct SnackbarPlugin {
    pub max_visible: usize,
    pub duration: Duration,
}

impl Default for SnackbarPlugin {
    fn default() -> Self {
        Self {
            max_visible: 3,
            duration: Duration::from_secs(3),
        }
    }
}

impl Plugin for SnackbarPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Snackbars::new(self.max_visible, self.duration))
            .add_systems(Startup, spawn_snackbar_root)
            .add_systems(Update, (expire_snackbars, render_snackbars).chain());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarKind {
    Info,
    Success,
    Error,
}

impl SnackbarKind {
    fn background(self) -> Color {
        match self {
            SnackbarKind::Info => Color::rgb(0.2, 0.25, 0.35),
            SnackbarKind::Success => Color::rgb(0.15, 0.45, 0.25),
            SnackbarKind::Error => Color::rgb(0.6, 0.15, 0.15),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snackbar {
    pub message: String,
    pub kind: SnackbarKind,
    timer: Timer,
}

/// Pending notifications, oldest first.
#[derive(Resource, Debug, Clone)]
pub struct Snackbars {
    queue: VecDeque<Snackbar>,
    max_visible: usize,
    duration: Duration,
}

impl Snackbars {
    pub fn new(max_visible: usize, duration: Duration) -> Self {
        Self {
            queue: VecDeque::with_capacity(max_visible),
            max_visible: max_visible.max(1),
            duration,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: SnackbarKind) {
        let message = message.into();
        debug!("snackbar: {message}");
        self.queue.push_back(Snackbar {
            message,
            kind,
            timer: Timer::new(self.duration, TimerMode::Once),
        });
        while self.queue.len() > self.max_visible {
            self.queue.pop_front();
        }
    }

    /// Advances every timer by `delta` and drops finished messages. Returns how many were dropped.
    pub fn tick(&mut self, delta: Duration) -> usize {
        let before = self.queue.len();
        for snackbar in self.queue.iter_mut() {
            snackbar.timer.tick(delta);
        }
        self.queue.retain(|snackbar| !snackbar.timer.finished());
        before - self.queue.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snackbar> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[derive(Component)]
struct SnackbarRoot;

fn spawn_snackbar_root(mut commands: Commands) {
    commands.spawn((
        NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                left: Val::Px(16.0),
                right: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            ..default()
        },
        SnackbarRoot,
    ));
}

fn expire_snackbars(time: Res<Time>, mut snackbars: ResMut<Snackbars>) {
    // Ticking alone must not trigger a redraw.
    if snackbars.bypass_change_detection().tick(time.delta()) > 0 {
        snackbars.set_changed();
    }
}

fn render_snackbars(
    mut commands: Commands,
    snackbars: Res<Snackbars>,
    root: Query<Entity, With<SnackbarRoot>>,
) {
    if !snackbars.is_changed() {
        return;
    }
    let Ok(root) = root.get_single() else {
        return;
    };

    commands.entity(root).despawn_descendants();
    commands.entity(root).with_children(|parent| {
        for snackbar in snackbars.iter() {
            parent
                .spawn(NodeBundle {
                    style: Style {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    background_color: snackbar.kind.background().into(),
                    ..default()
                })
                .with_children(|bar| {
                    bar.spawn(TextBundle::from_section(
                        snackbar.message.clone(),
                        TextStyle {
                            font_size: SNACKBAR_FONT_SIZE,
                            color: Color::WHITE,
                            ..default()
                        },
                    ));
                });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_newest_when_full() {
        let mut snackbars = Snackbars::new(2, Duration::from_secs(1));
        snackbars.push("first", SnackbarKind::Info);
        snackbars.push("second", SnackbarKind::Info);
        snackbars.push("third", SnackbarKind::Error);

        let messages: Vec<&str> = snackbars.iter().map(|s| s.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn tick_expires_finished_messages() {
        let mut snackbars = Snackbars::new(3, Duration::from_millis(500));
        snackbars.push("a6", SnackbarKind::Info);
        assert_eq!(snackbars.tick(Duration::from_millis(200)), 0);
        snackbars.push("e1", SnackbarKind::Success);

        assert_eq!(snackbars.tick(Duration::from_millis(300)), 1);
        assert_eq!(snackbars.len(), 1);
        assert_eq!(snackbars.iter().next().unwrap().message, "e1");

        assert_eq!(snackbars.tick(Duration::from_millis(300)), 1);
        assert!(snackbars.is_empty());
    }

    #[test]
    fn zero_capacity_still_shows_one() {
        let mut snackbars = Snackbars::new(0, Duration::from_secs(1));
        snackbars.push("only", SnackbarKind::Info);
        assert_eq!(snackbars.len(), 1);
    }

    #[test]
    fn render_rebuilds_one_bar_per_message() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, SnackbarPlugin::default()));
        {
            let mut snackbars = app.world.resource_mut::<Snackbars>();
            snackbars.push("Selected a6", SnackbarKind::Info);
            snackbars.push("Selected e1", SnackbarKind::Success);
        }
        app.update();
        assert_eq!(bar_count(&mut app), 2);

        app.world
            .resource_mut::<Snackbars>()
            .push("Selected c4", SnackbarKind::Info);
        app.update();
        assert_eq!(bar_count(&mut app), 3);
    }

    fn bar_count(app: &mut App) -> usize {
        let mut roots = app.world.query_filtered::<&Children, With<SnackbarRoot>>();
        roots.single(&app.world).len()
    }

    #[test]
    fn plugin_inserts_queue() {
        let mut app = App::new();
        app.add_plugins(SnackbarPlugin {
            max_visible: 4,
            duration: Duration::from_secs(2),
        });
        let snackbars = app.world.resource::<Snackbars>();
        assert!(snackbars.is_empty());
        assert_eq!(snackbars.max_visible, 4);
    }
}
