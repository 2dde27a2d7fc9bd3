//! Demo driver
//!
//! Walks the two script families through their canonical scenarios with
//! logging enabled: a zone toggle startup with the actor outside, a walk
//! through the zone, and a persisted slider surviving a session restart.

use glam::Vec3;

use world_scripts::consts::TICK_DT;
use world_scripts::{
    ActorStore, Behavior, Host, Scene, SliderPersistence, Ui, ZoneBounds, ZoneToggle,
};

fn zone_toggle_demo() {
    log::info!("--- zone toggle demo ---");

    let mut scene = Scene::new();
    let light = scene.spawn_object("room_light", false);
    let ambience = scene.spawn_object("room_ambience", false);
    let actor = scene.add_actor(Vec3::new(50.0, 0.0, 0.0));
    scene.set_local_actor(actor);

    let mut toggle = ZoneToggle::new(Some(ZoneBounds::from_center_size(
        Vec3::ZERO,
        Vec3::splat(10.0),
    )));
    toggle.primary = vec![Some(light)];
    toggle.secondary = vec![Some(ambience)];

    let mut host = Host::new(scene, Ui::new(), ActorStore::new());
    host.add(Behavior::ZoneToggle(toggle));

    host.activate();
    log::info!(
        "t={:.1}: light={} ambience={} (fail-open start)",
        host.now(),
        host.scene.is_active(light),
        host.scene.is_active(ambience)
    );

    // Initial check at t=5 finds the actor outside; secondary follows at t=6
    host.run_for(6.5, TICK_DT);
    log::info!(
        "t={:.1}: light={} ambience={} (settled, actor outside)",
        host.now(),
        host.scene.is_active(light),
        host.scene.is_active(ambience)
    );

    host.move_local_actor(Vec3::ZERO);
    host.run_for(1.5, TICK_DT);
    log::info!(
        "t={:.1}: light={} ambience={} (actor walked in)",
        host.now(),
        host.scene.is_active(light),
        host.scene.is_active(ambience)
    );
}

fn persistence_demo() {
    let store_path = std::env::temp_dir().join("world_scripts_demo_store.json");
    log::info!("--- persistence demo ({}) ---", store_path.display());

    // Session one: move the slider, snapshot the store
    let mut scene = Scene::new();
    let actor = scene.add_actor(Vec3::ZERO);
    scene.set_local_actor(actor);
    let mut ui = Ui::new();
    let slider = ui.add_slider(0.5);

    let mut host = Host::new(scene, ui, ActorStore::new());
    host.add(Behavior::Slider(SliderPersistence::new(
        "music_volume",
        Some(slider),
    )));
    host.activate();

    host.ui.set_slider(slider, 0.85);
    host.tick(TICK_DT);
    host.store.save_to(&store_path);

    // Session two: fresh scene and UI, restored store
    let mut scene = Scene::new();
    let actor = scene.add_actor(Vec3::ZERO);
    scene.set_local_actor(actor);
    let mut ui = Ui::new();
    let slider = ui.add_slider(0.5);

    let mut host = Host::new(scene, ui, ActorStore::load_from(&store_path));
    host.add(Behavior::Slider(SliderPersistence::new(
        "music_volume",
        Some(slider),
    )));
    host.activate();
    host.player_restored();
    log::info!(
        "restored music_volume = {:?}",
        host.ui.slider_value(slider)
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    zone_toggle_demo();
    persistence_demo();
}
