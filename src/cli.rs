// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::pass::DistanceMetric;

#[derive(Parser, Debug, Clone)]
#[command(name = "light-culler")]
#[command(about = "Nearby-light selection demo", long_about = None)]
pub struct Cli {
    /// Built-in light rig to run against
    #[arg(long, value_enum, default_value_t = RigKind::Ring)]
    pub rig: RigKind,

    /// Load lights from a JSON rig file instead of a built-in rig
    #[arg(long)]
    pub rig_file: Option<PathBuf>,

    /// Lit objects simulated per frame
    #[arg(long, default_value_t = 64)]
    pub objects: usize,

    /// Frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: usize,

    /// Light count for generated rigs
    #[arg(long, default_value_t = 256)]
    pub lights: usize,

    /// Ranking metric for the selection pass
    #[arg(long, value_enum, default_value_t = MetricArg::Falloff)]
    pub metric: MetricArg,

    /// Run the selection micro-benchmark instead of the demo loop
    #[arg(long, default_value_t = false)]
    pub benchmark: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigKind {
    Ring,
    Corridor,
    Scattered,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricArg {
    Euclidean,
    Falloff,
}

impl MetricArg {
    pub fn to_metric(self) -> DistanceMetric {
        match self {
            MetricArg::Euclidean => DistanceMetric::Euclidean,
            MetricArg::Falloff => DistanceMetric::FalloffAdjusted,
        }
    }
}
