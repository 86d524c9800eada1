//! wireglobe - an interactive wireframe globe built with Bevy
//!
//! A rotating sphere decorated with a lat/lng graticule and a
//! Fibonacci-lattice point cloud, overlaid with named regions that respond
//! to hover with a tooltip and to drag with manual rotation.

mod coords;
mod globe;
mod interaction;
mod regions;
mod schedule;
mod state;
mod tooltip;
mod viewport;

use bevy::prelude::*;

use crate::globe::GlobePlugin;
use crate::interaction::InteractionPlugin;
use crate::regions::RegionsPlugin;
use crate::schedule::SchedulePlugin;
use crate::state::StatePlugin;
use crate::tooltip::TooltipPlugin;
use crate::viewport::ViewportPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "wireglobe".to_string(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((
            GlobePlugin,
            InteractionPlugin,
            RegionsPlugin,
            SchedulePlugin,
            StatePlugin,
            TooltipPlugin,
            ViewportPlugin,
        ))
        .run();
}
