use bevy::prelude::*;
use constants::layout::{PHOTO_BASE_RADIUS, PHOTO_SPIRAL_BOTTOM, PHOTO_SPIRAL_TOP};
use memory_tree_engine::engine::input::MorphInputs;
use memory_tree_engine::engine::layout::LayoutKind;
use memory_tree_engine::engine::morph::MorphMode;
use memory_tree_engine::engine::morph::polar_blend::cylindrical;
use memory_tree_engine::engine::population::{PhotoId, PopulationCounts, TreePopulations};

const STEP: f32 = 1.0 / 60.0;

fn tree_with_photos(count: u32) -> TreePopulations {
    let counts = PopulationCounts {
        foliage: 400,
        lights: 60,
        ornaments: 20,
    };
    let photos = (0..count).map(|i| (PhotoId(100 + i), format!("photos/{i}.jpg")));
    TreePopulations::new(counts, photos, 2024)
}

fn run(tree: &mut TreePopulations, inputs: &MorphInputs, seconds: f32) {
    let steps = (seconds / STEP).round() as usize;
    for _ in 0..steps {
        tree.tick(inputs, STEP);
    }
}

#[test]
fn formed_photos_settle_on_the_spiral() {
    let mut tree = tree_with_photos(10);
    let inputs = MorphInputs {
        mode: MorphMode::Formed,
        ..default()
    };

    run(&mut tree, &inputs, 5.0);

    for population in tree.iter() {
        assert!(
            population.clock().progress() > 0.99,
            "{} progress {}",
            population.kind().name(),
            population.clock().progress()
        );
    }

    let tolerance = 0.1;
    let slots = tree.population(LayoutKind::Photos).layout().tree();
    let root = tree.rig().root_translation();
    for panel in tree.photos() {
        let position = tree
            .photo_world_transform(panel)
            .map(|transform| transform.translation)
            .unwrap();
        let (radius, _) = cylindrical(position - root);
        let (slot_radius, _) = cylindrical(slots[panel.index]);
        let id = panel.id;

        assert!((radius - slot_radius).abs() < 1e-2, "{id} radius {radius} vs {slot_radius}");
        assert!(
            (position.y - root.y - slots[panel.index].y).abs() < 1e-2,
            "{id} y {} vs {}",
            position.y,
            slots[panel.index].y
        );
        assert!(radius <= PHOTO_BASE_RADIUS + tolerance, "{id} radius {radius}");
        assert!(position.y >= PHOTO_SPIRAL_BOTTOM - tolerance, "{id} y {}", position.y);
        assert!(position.y <= PHOTO_SPIRAL_TOP + tolerance, "{id} y {}", position.y);
    }

    // Slots are distinct, so a panel on the wrong slot cannot pass.
    for pair in slots.windows(2) {
        assert!((pair[0].y - pair[1].y).abs() > 0.1);
    }
}

#[test]
fn dispersing_returns_towards_chaos() {
    let mut tree = tree_with_photos(4);
    let formed = MorphInputs {
        mode: MorphMode::Formed,
        ..default()
    };
    run(&mut tree, &formed, 4.0);

    let dispersed = MorphInputs::default();
    run(&mut tree, &dispersed, 6.0);

    let progress = tree.population(LayoutKind::Foliage).clock().progress();
    assert!(progress < 0.01, "progress {progress}");
}

#[test]
fn mid_morph_reversal_is_continuous() {
    let mut tree = tree_with_photos(3);
    let formed = MorphInputs {
        mode: MorphMode::Formed,
        ..default()
    };
    run(&mut tree, &formed, 0.5);
    let before = tree.population(LayoutKind::Foliage).clock().progress();

    tree.tick(&MorphInputs::default(), STEP);
    let after = tree.population(LayoutKind::Foliage).clock().progress();

    assert!(after < before);
    assert!(before - after < 0.05, "jump {}", before - after);
}

#[test]
fn long_sessions_keep_positions_finite() {
    let mut tree = tree_with_photos(5);
    let inputs = MorphInputs {
        mode: MorphMode::Formed,
        rotation_boost: 3.0,
        ..default()
    };
    // Ten simulated minutes at a coarse step.
    for _ in 0..(600 * 10) {
        tree.tick(&inputs, 0.1);
    }
    for population in tree.iter() {
        assert!(population.point_buffer().iter().flatten().all(|v| v.is_finite()));
        assert!(population.transforms().iter().all(|t| t.translation.is_finite()));
    }
    assert!(tree.population(LayoutKind::Foliage).clock().rotation_angle().is_finite());
}
