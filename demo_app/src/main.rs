//! Cylinder collider demo application
//!
//! Builds a local scene graph, generates a compound cylinder collider,
//! shows the staleness/regeneration cycle, and dumps the wireframe
//! preview shapes that a renderer would consume.

use cylinder_collider::foundation::logging;
use cylinder_collider::prelude::*;

fn main() {
    logging::init();

    // Optionally load authoring parameters from a RON or TOML file
    let config = match std::env::args().nth(1) {
        Some(path) => match ColliderConfig::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded collider config from {path}");
                config
            }
            Err(err) => {
                log::error!("Failed to load {path}: {err}");
                return;
            }
        },
        None => ColliderConfig::default()
            .with_sides(12)
            .with_radius(0.5)
            .with_height(2.0),
    };

    let mut graph = LocalSceneGraph::new();
    let mut collider = CylinderCollider::new(config);

    log::info!(
        "Generating {} box primitives, angular step {:.2}°",
        collider.primitive_count(),
        collider.config().angle_step_deg()
    );
    collider.regenerate(&mut graph, Mode::Authoring);
    report(&collider, &graph);

    // Edit a parameter: the generated set goes stale until regenerated
    collider.update_config(|config| config.set_sides(8));
    log::info!(
        "After sides edit: consistent = {}",
        collider.is_consistent(&graph, Mode::Authoring)
    );
    collider.regenerate(&mut graph, Mode::Authoring);
    report(&collider, &graph);

    // Runtime mode: regeneration requests are silently ignored
    collider.update_config(|config| config.set_radius(3.0));
    collider.regenerate(&mut graph, Mode::Runtime);
    log::info!(
        "Runtime regenerate ignored; scene still holds {} holders",
        collider.holders().len()
    );

    // Wireframe preview consumes core outputs only
    let mut preview = ColliderPreview::new();
    preview.draw(&collider);
    for shape in preview.shapes() {
        if let DebugShape::Box { center, size, .. } = shape {
            log::info!(
                "preview box: center ({:.2}, {:.2}, {:.2}), size ({:.3}, {:.3}, {:.3})",
                center.x, center.y, center.z, size.x, size.y, size.z
            );
        }
    }
}

fn report(collider: &CylinderCollider, graph: &LocalSceneGraph) {
    let bounds = collider.bounds();
    log::info!(
        "{} holders live, bounds size ({:.2}, {:.2}, {:.2}), consistent = {}",
        collider.holders().len(),
        bounds.size().x,
        bounds.size().y,
        bounds.size().z,
        collider.is_consistent(graph, Mode::Authoring)
    );
}
