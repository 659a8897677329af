mod anim;
mod arena;
mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod spells;
mod vfx;

use std::time::Duration;

use avian3d::prelude::*;
use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
    )
    .add_plugins((
        LogPlugin::default(),
        bevy::state::app::StatesPlugin,
        bevy::input::InputPlugin,
        TransformPlugin,
    ))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        vfx::VfxPlugin,
        anim::AnimPlugin,
        audio::AudioPlugin,
        arena::ArenaPlugin,
        movement::MovementPlugin,
        spells::SpellsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
