use std::collections::HashMap;
use std::io::{self, Read};
use std::time::Instant;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use implicit_render::config::{validate_config, IncomingConfig, RuntimeOptions};
use implicit_render::render::validate_scene;
use implicit_render::{render_frame_with, Camera, RenderSettings, Scene};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = RuntimeOptions::from_env();
    if let Some(threads) = options.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure render thread pool")?;
        tracing::debug!(threads, "render thread pool configured");
    }

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read frame configuration from stdin")?;

    let incoming: IncomingConfig =
        serde_json::from_str(&raw).context("invalid frame configuration")?;
    let frames = incoming.into_frames()?;

    let total = frames.len();
    let mut prepared_frames = Vec::with_capacity(total);
    for (index, frame) in frames.iter().enumerate() {
        validate_config(frame).with_context(|| format!("frame {} is invalid", index + 1))?;
        prepared_frames.push((
            RenderSettings::from_frame(frame),
            Camera::from_frame(frame),
            frame,
        ));
    }

    let mut scene_cache: HashMap<String, Scene> = HashMap::new();
    for (index, (settings, camera, frame)) in prepared_frames.iter().enumerate() {
        let inline_scene;
        let scene = match frame.scene.cache_key() {
            Some(key) => {
                if !scene_cache.contains_key(&key) {
                    let scene = prepare_scene(frame)?;
                    scene_cache.insert(key.clone(), scene);
                }
                scene_cache
                    .get(&key)
                    .ok_or_else(|| anyhow!("scene cache miss for '{key}'"))?
            }
            None => {
                inline_scene = prepare_scene(frame)?;
                &inline_scene
            }
        };

        let started = Instant::now();
        let image = render_frame_with(scene, camera, settings).to_rgb_image();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        image
            .save(&frame.output_path)
            .with_context(|| format!("failed to write {}", frame.output_path))?;

        tracing::info!(
            frame = index + 1,
            total,
            scene = %scene.id,
            elapsed_ms,
            output = %frame.output_path,
            "rendered frame"
        );
    }

    Ok(())
}

fn prepare_scene(frame: &implicit_render::config::RenderFrameConfig) -> anyhow::Result<Scene> {
    let scene = frame.scene.build().context("failed to build scene")?;
    validate_scene(&scene).with_context(|| format!("scene '{}' is invalid", scene.id))?;
    Ok(scene)
}
