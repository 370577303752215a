//! Camera commands - apply a single pan or pinch gesture and print the result.

use waymark::camera::{
    pinch_scale_to_zoom_delta, CameraConfig, CameraState, CameraTransform, Gesture,
};
use waymark::geo::GeoPoint;

use crate::error::CliError;

/// Arguments for the pan command.
pub struct PanArgs {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Arguments for the pinch command.
pub struct PinchArgs {
    pub lat: f64,
    pub lon: f64,
    pub zoom: f64,
    pub scale: f64,
}

/// Run the pan command.
pub fn run_pan(args: PanArgs, config: &CameraConfig) -> Result<(), CliError> {
    let camera = CameraState::new(GeoPoint::new(args.lat, args.lon)?, args.zoom);
    let moved = apply(config, camera, Gesture::Pan { dx: args.dx, dy: args.dy })?;

    print_camera("Before", &camera);
    print_camera("After", &moved);
    Ok(())
}

/// Run the pinch command.
pub fn run_pinch(args: PinchArgs, config: &CameraConfig) -> Result<(), CliError> {
    let camera = CameraState::new(GeoPoint::new(args.lat, args.lon)?, args.zoom);
    let zoomed = apply(config, camera, Gesture::Pinch { scale: args.scale })?;
    let delta = pinch_scale_to_zoom_delta(args.scale, config.pinch_sensitivity)?;

    print_camera("Before", &camera);
    println!("Delta:  {:+.3} levels", delta);
    print_camera("After", &zoomed);
    if !config.zoom_range.contains(camera.zoom + delta) {
        println!(
            "(zoom clamped to [{}, {}])",
            config.zoom_range.min(),
            config.zoom_range.max()
        );
    }
    Ok(())
}

fn apply(
    config: &CameraConfig,
    camera: CameraState,
    gesture: Gesture,
) -> Result<CameraState, CliError> {
    let transform = CameraTransform::new(*config)?;
    Ok(transform.apply(camera, gesture)?)
}

fn print_camera(label: &str, camera: &CameraState) {
    println!("{:<7} center {}  zoom {:.3}", format!("{}:", label), camera.center, camera.zoom);
}
