use bevy::prelude::*;

use crate::globe::Orientation;
use crate::interaction::Hover;
use crate::interaction::PointerState;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewState>()
            .add_systems(Update, toggle_view)
            .add_systems(OnExit(ViewState::Mounted), (despawn_view, reset_session));
    }
}

/// Lifecycle of the globe view.
///
/// `Mounted` is the default so the scene is built on startup. Dismissing the
/// view must leave nothing behind: no frame systems running, no scene
/// entities, no stale pointer or hover state. Re-entering `Mounted` rebuilds
/// the scene from the same static inputs, so repeated mount/unmount cycles
/// cannot leak.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum ViewState {
    #[default]
    Mounted,
    Dismissed,
}

/// Anything spawned for the lifetime of one mounted view.
///
/// Tagging every scene root with this keeps teardown a single query instead
/// of a list that drifts out of date.
#[derive(Component)]
pub struct ViewScoped;

fn toggle_view(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<ViewState>>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let next = match state.get() {
            ViewState::Mounted => ViewState::Dismissed,
            ViewState::Dismissed => ViewState::Mounted,
        };
        debug!("view toggled to {next:?}");
        next_state.set(next);
    }
}

fn despawn_view(mut commands: Commands, query: Query<Entity, With<ViewScoped>>) {
    debug!("despawning view");
    for entity in query.iter() {
        // try_despawn: children of a despawned root may already be gone
        commands.entity(entity).try_despawn();
    }
}

fn reset_session(
    mut pointer: ResMut<PointerState>,
    mut orientation: ResMut<Orientation>,
    mut hover: ResMut<Hover>,
) {
    *pointer = PointerState::default();
    *orientation = Orientation::default();
    *hover = Hover::default();
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::interaction::HoveredRegion;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .add_plugins(StatePlugin)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<PointerState>()
            .init_resource::<Orientation>()
            .init_resource::<Hover>();
        app
    }

    #[test]
    fn dismissing_the_view_resets_session_resources() {
        let mut app = test_app();
        app.update();

        app.world_mut().resource_mut::<Orientation>().yaw = 1.5;
        app.world_mut().resource_mut::<PointerState>().begin_drag();
        app.world_mut().resource_mut::<Hover>().0 = Some(HoveredRegion {
            region: 0,
            screen: Vec2::new(10.0, 20.0),
        });

        app.world_mut()
            .resource_mut::<NextState<ViewState>>()
            .set(ViewState::Dismissed);
        app.update();

        assert_eq!(
            *app.world().resource::<Orientation>(),
            Orientation::default()
        );
        assert_eq!(
            *app.world().resource::<PointerState>(),
            PointerState::default()
        );
        assert_eq!(*app.world().resource::<Hover>(), Hover::default());
    }

    #[test]
    fn dismissing_the_view_despawns_scoped_entities() {
        let mut app = test_app();
        app.update();

        let scoped = app.world_mut().spawn(ViewScoped).id();
        app.world_mut()
            .resource_mut::<NextState<ViewState>>()
            .set(ViewState::Dismissed);
        app.update();

        assert!(app.world().get_entity(scoped).is_err());
    }

    #[test]
    fn remounting_starts_from_a_clean_mounted_state() {
        let mut app = test_app();
        app.update();

        app.world_mut()
            .resource_mut::<NextState<ViewState>>()
            .set(ViewState::Dismissed);
        app.update();
        app.world_mut()
            .resource_mut::<NextState<ViewState>>()
            .set(ViewState::Mounted);
        app.update();

        assert_eq!(
            *app.world().resource::<State<ViewState>>().get(),
            ViewState::Mounted
        );
        assert_eq!(
            *app.world().resource::<PointerState>(),
            PointerState::default()
        );
    }
}
