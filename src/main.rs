use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use std::f32::consts::TAU;
use std::time::Instant;

use light_culler::cli::{Cli, RigKind};
use light_culler::core::benchmark::{run_selection_benchmark, BenchmarkConfig, RigType};
use light_culler::loaders::load_light_rig;
use light_culler::types::PackedLightList;
use light_culler::{
    create_corridor_rig, create_ring_rig, create_scattered_rig, LightBank, NearbyLights,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.benchmark {
        let config = BenchmarkConfig {
            num_lights: cli.lights,
            num_objects: cli.objects,
            rig_type: match cli.rig {
                RigKind::Ring => RigType::Ring,
                RigKind::Corridor => RigType::Corridor,
                RigKind::Scattered => RigType::Scattered,
            },
            ..Default::default()
        };
        run_selection_benchmark(&config);
        return Ok(());
    }

    let mut bank = match &cli.rig_file {
        Some(path) => load_light_rig(path)?,
        None => match cli.rig {
            RigKind::Ring => create_ring_rig(cli.lights.min(64), 40.0),
            RigKind::Corridor => create_corridor_rig(cli.lights.div_ceil(2)),
            RigKind::Scattered => create_scattered_rig(cli.lights, 300.0),
        },
    };

    println!("Rig: {} lights, {} objects, {} frames", bank.len(), cli.objects, cli.frames);

    let metric = cli.metric.to_metric();
    let mut selection = NearbyLights::new();
    let flicker_ids: Vec<_> = bank.iter().map(|(id, _)| id).collect();

    let mut total_selected = 0usize;
    let mut max_selected = 0usize;
    let mut passes = 0usize;
    let start = Instant::now();

    for frame in 0..cli.frames {
        flicker(&mut bank, &flicker_ids, frame);

        for object in 0..cli.objects {
            let subject = object_position(object, frame, cli.frames);
            bank.select_nearby(subject, metric, &mut selection);

            let packed = PackedLightList::from_selection(&selection, &bank);
            debug_assert_eq!(packed.count as usize, selection.len().min(32));

            total_selected += selection.len();
            max_selected = max_selected.max(selection.len());
            passes += 1;
        }
    }

    let elapsed = start.elapsed();
    println!("Ran {} selection passes in {:?}", passes, elapsed);
    println!(
        "Selected lights per object: avg {:.2}, max {}",
        total_selected as f32 / passes.max(1) as f32,
        max_selected
    );

    Ok(())
}

/// Objects orbit the rig so the selection churns over the run
fn object_position(object: usize, frame: usize, frames: usize) -> Vec3 {
    let lap = frame as f32 / frames.max(1) as f32;
    let angle = (object as f32 * 0.37 + lap) * TAU;
    let radius = 10.0 + (object % 7) as f32 * 4.0;
    Vec3::new(angle.cos() * radius, 1.0, angle.sin() * radius)
}

/// Cheap torch flicker; selection itself stays stateless across frames
fn flicker(bank: &mut LightBank, ids: &[light_culler::LightId], frame: usize) {
    for (i, &id) in ids.iter().enumerate() {
        if let Some(light) = bank.get_mut(id) {
            let phase = (frame as f32 * 0.3 + i as f32).sin();
            light.intensity = 1.0 + phase * 0.1;
        }
    }
}
