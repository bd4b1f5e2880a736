//! Background constants
//!
//! Colours are CSS strings handed straight to the canvas context.

// Sky gradients (top, bottom)
pub const CLEAR_GRADIENT: (&str, &str) = ("#4A90E2", "#87CEEB");
pub const CLOUDS_GRADIENT: (&str, &str) = ("#7B8C9D", "#A9B7C6");
pub const RAIN_GRADIENT: (&str, &str) = ("#2C3E50", "#5D6D7E");
pub const SNOW_GRADIENT: (&str, &str) = ("#BDC3C7", "#ECF0F1");
pub const THUNDERSTORM_GRADIENT: (&str, &str) = ("#1C2833", "#34495E");

// Rain
pub const RAIN_PARTICLE_COUNT: usize = 200;
pub const RAIN_SIZE: (f64, f64) = (1.0, 3.0);
pub const RAIN_SPEED_Y: (f64, f64) = (5.0, 12.0);
pub const RAIN_STREAK_LENGTH: f64 = 3.0;
pub const RAIN_COLOR: &str = "rgba(255, 255, 255, 0.7)";

// Snow
pub const SNOW_PARTICLE_COUNT: usize = 100;
pub const SNOW_SIZE: (f64, f64) = (1.0, 6.0);
pub const SNOW_SPEED_Y: (f64, f64) = (0.5, 1.5);
pub const SNOW_COLOR: &str = "rgba(255, 255, 255, 0.8)";

/// Where a particle re-enters after falling off the bottom edge.
pub const PARTICLE_RESPAWN_Y: f64 = -10.0;

// Clouds
pub const CLOUD_COUNT: usize = 5;
pub const CLOUD_WIDTH: (f64, f64) = (100.0, 300.0);
pub const CLOUD_HEIGHT: (f64, f64) = (40.0, 100.0);
pub const CLOUD_SPEED: (f64, f64) = (0.1, 0.6);
pub const CLOUD_COLOR: &str = "rgba(255, 255, 255, 0.3)";

// Mounting
pub const DEFAULT_CANVAS_ID: &str = "weather-background";
