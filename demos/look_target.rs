//! Demo: resolve what a player is looking at in a small scene.
//!
//! Run with `cargo run --example look_target`. Builds a sparse world with a
//! wall and a pillar, drops a few entities in, then resolves look rays from
//! several vantage points and prints the results as JSON.

use anyhow::Result;
use cgmath::{Point3, Vector3};
use sightcast::{
    entities_in_cone, entities_in_radius, line_of_sight, math, resolve_from_observer,
    EntityKind, EntitySnapshot, Observer, SparseWorld, VoxelPos,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut world = SparseWorld::new();
    // Ground slab, a wall across +Z, and a lone pillar.
    world.fill_box(VoxelPos::new(-16, -1, -16), VoxelPos::new(16, -1, 16), "core:grass");
    world.fill_box(VoxelPos::new(-6, 0, 10), VoxelPos::new(6, 3, 10), "core:stone");
    world.fill_box(VoxelPos::new(4, 0, 4), VoxelPos::new(4, 4, 4), "core:stone");
    log::info!("[look_target] scene has {} blocks", world.len());

    let entities = vec![
        EntitySnapshot::new(1, Point3::new(0.5, 0.0, 0.5), EntityKind::Player, "Ada"),
        EntitySnapshot::new(2, Point3::new(0.5, 0.0, 6.5), EntityKind::Npc, "Gatekeeper"),
        EntitySnapshot::new(3, Point3::new(0.5, 0.0, 14.5), EntityKind::Npc, "Smuggler"),
        EntitySnapshot::new(4, Point3::new(-3.5, 0.0, 2.5), EntityKind::Other, ""),
    ];

    // Ada looks straight down +Z: the gatekeeper stands in front of the
    // wall, the smuggler hides behind it.
    let ada = Observer::new(1, Point3::new(0.5, 0.0, 0.5), Vector3::new(0.0, 0.0, 1.0));
    let ahead = resolve_from_observer(&world, &entities, &ada, 30.0);
    println!("looking ahead: {}", serde_json::to_string_pretty(&ahead)?);

    // Same spot, looking along a yaw sweep.
    for yaw_degrees in [-45.0_f64, 0.0, 45.0] {
        let look = math::euler_to_direction(yaw_degrees.to_radians(), 0.0);
        let observer = Observer::new(1, ada.position, look);
        let result = resolve_from_observer(&world, &entities, &observer, 30.0);
        println!(
            "yaw {:>5}: {}",
            yaw_degrees,
            serde_json::to_string(&result)?
        );
    }

    let eye = ada.eye_position();
    println!(
        "can see smuggler: {}",
        line_of_sight(&world, eye, Point3::new(0.5, 1.6, 14.5))
    );

    let nearby = entities_in_radius(&entities, ada.position, 8.0);
    let in_view = entities_in_cone(
        &entities,
        eye,
        ada.look,
        30.0,
        60.0,
        Some(ada.id),
    );
    println!("within 8 units: {:?}", nearby);
    println!("inside 60 degree view cone: {:?}", in_view);

    Ok(())
}
