use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "blob-native",
    version,
    about = "Drives the blob-wave indicator with a synthetic level and writes SVG frames"
)]
pub struct Config {
    #[arg(long, value_enum, default_value_t = SignalKind::Speech)]
    pub signal: SignalKind,

    #[arg(long, default_value_t = 180)]
    pub frames: u32,

    /// Simulated time between frames in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// How often a new raw level arrives, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub level_ms: u64,

    /// Square canvas edge in pixels.
    #[arg(long, default_value_t = 400)]
    pub size: u32,

    /// Pixels per density-independent unit.
    #[arg(long, default_value_t = 1.0)]
    pub density: f32,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Reproduce the signed-modulo jitter distribution.
    #[arg(long, default_value_t = false)]
    pub legacy_jitter: bool,

    #[arg(long, default_value = "blob-frames")]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SignalKind {
    Speech,
    Sine,
    Silence,
}
