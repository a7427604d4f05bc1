use glam::Vec3;
use std::time::{Duration, Instant};

use crate::core::pass::DistanceMetric;
use crate::core::selector::NearbyLights;
use crate::scene::LightBank;
use crate::scenes::{create_corridor_rig, create_ring_rig, create_scattered_rig};

/// Configuration for selection-pass benchmarks
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub num_lights: usize,
    pub num_objects: usize,
    pub warmup_iterations: usize,
    pub test_iterations: usize,
    pub rig_type: RigType,
}

#[derive(Clone, Debug)]
pub enum RigType {
    Ring,
    Corridor,
    Scattered,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            num_lights: 256,
            num_objects: 64,
            warmup_iterations: 5,
            test_iterations: 50,
            rig_type: RigType::Scattered,
        }
    }
}

/// Build the rig under test at roughly the requested light count
pub fn generate_test_rig(config: &BenchmarkConfig) -> LightBank {
    match config.rig_type {
        RigType::Ring => create_ring_rig(config.num_lights.max(1), 40.0),
        RigType::Corridor => create_corridor_rig(config.num_lights.div_ceil(2).max(1)),
        RigType::Scattered => create_scattered_rig(config.num_lights, 300.0),
    }
}

/// Deterministic subject positions spread through the rig volume
pub fn generate_test_positions(count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let x = ((i * 7919) % 10_000) as f32 / 10_000.0 - 0.5;
            let y = ((i * 6547) % 10_000) as f32 / 10_000.0;
            let z = ((i * 4231) % 10_000) as f32 / 10_000.0 - 0.5;
            Vec3::new(x * extent, y * 4.0, z * extent)
        })
        .collect()
}

/// Timing result for one measured selection workload
#[derive(Debug, Clone)]
pub struct PerfResult {
    pub name: String,
    pub iterations: usize,
    pub total_duration: Duration,
    pub avg_duration: Duration,
    pub min_duration: Duration,
    pub max_duration: Duration,
}

impl PerfResult {
    pub fn throughput(&self, passes_per_iter: usize) -> f64 {
        passes_per_iter as f64 / self.avg_duration.as_secs_f64()
    }

    pub fn print_summary(&self) {
        println!("\n=== {} ===", self.name);
        println!("Iterations: {}", self.iterations);
        println!("Total:      {:?}", self.total_duration);
        println!("Average:    {:?}", self.avg_duration);
        println!("Min:        {:?}", self.min_duration);
        println!("Max:        {:?}", self.max_duration);
    }
}

/// Run a named workload with warmup, collecting simple timing stats
pub fn run_timed<F>(name: &str, warmup: usize, iterations: usize, mut workload: F) -> PerfResult
where
    F: FnMut(),
{
    for _ in 0..warmup {
        workload();
    }

    let mut durations = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        workload();
        durations.push(start.elapsed());
    }

    let total: Duration = durations.iter().sum();
    PerfResult {
        name: name.to_string(),
        iterations: durations.len(),
        total_duration: total,
        avg_duration: total / durations.len().max(1) as u32,
        min_duration: durations.iter().min().copied().unwrap_or_default(),
        max_duration: durations.iter().max().copied().unwrap_or_default(),
    }
}

/// Full selection-pass benchmark: every metric over every subject position
pub fn run_selection_benchmark(config: &BenchmarkConfig) -> Vec<PerfResult> {
    let bank = generate_test_rig(config);
    let positions = generate_test_positions(config.num_objects, 300.0);
    let mut selection = NearbyLights::new();

    println!(
        "Benchmarking {} lights x {} objects  [{}]",
        bank.len(),
        positions.len(),
        chrono::Local::now().format("%H:%M:%S")
    );

    [DistanceMetric::Euclidean, DistanceMetric::FalloffAdjusted]
        .iter()
        .map(|&metric| {
            let name = format!("select_nearby ({:?})", metric);
            let result = run_timed(
                &name,
                config.warmup_iterations,
                config.test_iterations,
                || {
                    for &pos in &positions {
                        bank.select_nearby(pos, metric, &mut selection);
                        std::hint::black_box(selection.len());
                    }
                },
            );
            result.print_summary();
            println!(
                "Throughput: {:.0} passes/sec",
                result.throughput(positions.len())
            );
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_test_positions_deterministic() {
        let a = generate_test_positions(16, 100.0);
        let b = generate_test_positions(16, 100.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_generate_test_rig_scattered_count() {
        let config = BenchmarkConfig {
            num_lights: 64,
            ..Default::default()
        };
        let bank = generate_test_rig(&config);
        assert_eq!(bank.len(), 64);
    }

    #[test]
    fn test_run_timed_counts_iterations() {
        let mut calls = 0usize;
        let result = run_timed("noop", 2, 5, || calls += 1);
        assert_eq!(result.iterations, 5);
        assert_eq!(calls, 7, "warmup plus measured iterations");
    }
}
