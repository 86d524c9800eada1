use bevy::prelude::*;

use crate::interaction::Hover;
use crate::regions::RegionRegistry;
use crate::schedule::FrameSet;
use crate::state::ViewScoped;
use crate::state::ViewState;

pub struct TooltipPlugin;

impl Plugin for TooltipPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewState::Mounted), spawn_tooltip)
            .add_systems(
                Update,
                // after the hit-test so a fresh hover moves the tooltip in
                // the same frame, not the next one
                update_tooltip
                    .run_if(resource_changed::<Hover>)
                    .after(FrameSet::HitTest),
            );
    }
}

#[derive(Component)]
struct Tooltip;

#[derive(Component)]
struct TooltipTitle;

#[derive(Component)]
struct TooltipSubtitle;

#[derive(Component)]
struct TooltipPhone;

fn spawn_tooltip(mut commands: Commands) {
    commands
        .spawn((
            Tooltip,
            ViewScoped,
            Node {
                position_type: PositionType::Absolute,
                display: Display::None,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(2.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
        ))
        .with_children(|tooltip| {
            tooltip.spawn((
                TooltipTitle,
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            tooltip.spawn((
                TooltipSubtitle,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
            tooltip.spawn((
                TooltipPhone,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}

/// Repositions and refills the tooltip whenever the hover result changes.
/// Runs only on change: the hit-test publishes through `set_if_neq`, so
/// hover-free frames cost nothing here.
fn update_tooltip(
    hover: Res<Hover>,
    registry: Res<RegionRegistry>,
    mut tooltip: Query<&mut Node, With<Tooltip>>,
    mut title: Query<&mut Text, (With<TooltipTitle>, Without<TooltipSubtitle>, Without<TooltipPhone>)>,
    mut subtitle: Query<
        (&mut Text, &mut Node),
        (With<TooltipSubtitle>, Without<Tooltip>, Without<TooltipTitle>, Without<TooltipPhone>),
    >,
    mut phone: Query<
        (&mut Text, &mut Node),
        (With<TooltipPhone>, Without<Tooltip>, Without<TooltipTitle>, Without<TooltipSubtitle>),
    >,
) {
    let Ok(mut node) = tooltip.single_mut() else {
        return;
    };

    let hovered = hover.0.as_ref().and_then(|h| registry.get(h.region).map(|r| (h, r)));
    let Some((hovered, region)) = hovered else {
        node.display = Display::None;
        return;
    };

    node.display = Display::Flex;
    node.left = Val::Px(hovered.screen.x);
    node.top = Val::Px(hovered.screen.y);

    if let Ok(mut text) = title.single_mut() {
        text.0 = region.title.to_string();
    }
    if let Ok((mut text, mut line)) = subtitle.single_mut() {
        match region.subtitle {
            Some(subtitle) => {
                text.0 = subtitle.to_string();
                line.display = Display::Flex;
            },
            None => line.display = Display::None,
        }
    }
    if let Ok((mut text, mut line)) = phone.single_mut() {
        match region.phone {
            Some(number) => {
                text.0 = number.to_string();
                line.display = Display::Flex;
            },
            None => line.display = Display::None,
        }
    }
}
