//! Axial - projection demo
//!
//! Loads the camera and scene from config, builds the transform chain and
//! logs where each configured point lands on screen.

use axial::config::AppConfig;
use axial::scene::Scene;

fn main() {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Axial ({} backend)", axial_math::BACKEND);

    let scene = Scene::from_config(&config);
    log::debug!("world: {:?}", scene.world.to_cols_array_2d());
    log::debug!("view: {:?}", scene.view.to_cols_array_2d());
    log::debug!("projection: {:?}", scene.projection.to_cols_array_2d());
    log::debug!("ortho: {:?}", scene.ortho.to_cols_array_2d());
    log::debug!("screen: {:?}", scene.screen_projection().to_cols_array_2d());

    let perspective = scene.project();
    let orthographic = scene.project_ortho();
    for ((point, ndc), flat) in scene.points().iter().zip(&perspective).zip(&orthographic) {
        log::info!(
            "({:.3}, {:.3}, {:.3}) -> perspective ({:.4}, {:.4}, {:.4}), ortho ({:.4}, {:.4}, {:.4})",
            point.x(), point.y(), point.z(),
            ndc.x(), ndc.y(), ndc.z(),
            flat.x(), flat.y(), flat.z(),
        );
    }
}
