use anyhow::Context;
use blob_core::JitterSource;
use clap::Parser;
use glam::Vec2;
use std::fs;
use std::time::{Duration, Instant};

mod config;
mod scene;
mod signal;
mod svg;

use config::Config;
use scene::WavesScene;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cfg = Config::parse();
    if let Err(e) = run(&cfg) {
        log::error!("blob-native failed: {e:#}");
        return Err(e);
    }
    Ok(())
}

fn run(cfg: &Config) -> anyhow::Result<()> {
    anyhow::ensure!(cfg.frame_ms > 0, "--frame-ms must be positive");
    anyhow::ensure!(cfg.density > 0.0, "--density must be positive");

    fs::create_dir_all(&cfg.out)
        .with_context(|| format!("creating output directory {}", cfg.out.display()))?;

    let jitter = if cfg.legacy_jitter {
        JitterSource::Legacy
    } else {
        JitterSource::Uniform
    };
    let mut scene = WavesScene::new(cfg.density, cfg.seed, jitter)?;
    let center = Vec2::splat(cfg.size as f32 / 2.0);
    let frame_dt = Duration::from_millis(cfg.frame_ms);
    let level_every = Duration::from_millis(cfg.level_ms.max(1));

    log::info!(
        "[driver] frames={} dt={}ms signal={:?} out={}",
        cfg.frames,
        cfg.frame_ms,
        cfg.signal,
        cfg.out.display()
    );

    let started = Instant::now();
    let mut sim_time = Duration::ZERO;
    let mut since_level = level_every;
    for index in 0..cfg.frames {
        if since_level >= level_every {
            since_level = Duration::ZERO;
            let raw = signal::level_at(cfg.signal, sim_time.as_secs_f32());
            scene.set_level(raw);
            log::debug!("[driver] t={:.2}s level={raw:.0}", sim_time.as_secs_f32());
        }

        scene.tick(frame_dt);
        let frame = scene.frame(center);
        svg::write_frame(&cfg.out, index, &svg::render(&frame, cfg.size))?;

        sim_time += frame_dt;
        since_level += frame_dt;
        if index % 60 == 0 {
            let (large, small) = scene.amplitudes();
            log::info!("[driver] frame {index} amplitude large={large:.3} small={small:.3}");
        }
    }

    log::info!(
        "[driver] wrote {} frames in {:.1?}",
        cfg.frames,
        started.elapsed()
    );
    Ok(())
}
