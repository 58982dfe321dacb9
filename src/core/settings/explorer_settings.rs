use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

pub const MAX_ITERATIONS_RANGE: RangeInclusive<u32> = 10..=1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Lower end used when clamping; the accepted range is open at zero.
pub const MIN_STEP_OR_SPEED: f64 = 0.01;
pub const MAX_STEP_OR_SPEED: f64 = 0.5;

pub const DEFAULT_ZOOM_STEP_SIZE: f64 = 0.1;
pub const DEFAULT_ZOOM_ANIMATION_SPEED: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    OutOfRange {
        setting: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                setting,
                value,
                min,
                max,
            } => {
                write!(f, "{} must be within [{}, {}], got {}", setting, min, max, value)
            }
        }
    }
}

impl Error for SettingsError {}

/// User-adjustable render and navigation settings.
///
/// Strict setters reject out-of-range values and leave the setting as it
/// was; the `_clamped` variants pull the value into range instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerSettings {
    max_iterations: u32,
    zoom_step_size: f64,
    zoom_animation_speed: f64,
    colour_scheme: ColourSchemeKind,
}

impl ExplorerSettings {
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn zoom_step_size(&self) -> f64 {
        self.zoom_step_size
    }

    #[must_use]
    pub fn zoom_animation_speed(&self) -> f64 {
        self.zoom_animation_speed
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourSchemeKind {
        self.colour_scheme
    }

    pub fn set_max_iterations(&mut self, value: u32) -> Result<(), SettingsError> {
        if !MAX_ITERATIONS_RANGE.contains(&value) {
            return Err(SettingsError::OutOfRange {
                setting: "max_iterations",
                value: f64::from(value),
                min: f64::from(*MAX_ITERATIONS_RANGE.start()),
                max: f64::from(*MAX_ITERATIONS_RANGE.end()),
            });
        }

        self.max_iterations = value;
        Ok(())
    }

    pub fn set_max_iterations_clamped(&mut self, value: u32) {
        self.max_iterations = value.clamp(*MAX_ITERATIONS_RANGE.start(), *MAX_ITERATIONS_RANGE.end());
    }

    pub fn set_zoom_step_size(&mut self, value: f64) -> Result<(), SettingsError> {
        self.zoom_step_size = check_step_or_speed("zoom_step_size", value)?;
        Ok(())
    }

    pub fn set_zoom_step_size_clamped(&mut self, value: f64) {
        self.zoom_step_size = clamp_step_or_speed(value, DEFAULT_ZOOM_STEP_SIZE);
    }

    pub fn set_zoom_animation_speed(&mut self, value: f64) -> Result<(), SettingsError> {
        self.zoom_animation_speed = check_step_or_speed("zoom_animation_speed", value)?;
        Ok(())
    }

    pub fn set_zoom_animation_speed_clamped(&mut self, value: f64) {
        self.zoom_animation_speed = clamp_step_or_speed(value, DEFAULT_ZOOM_ANIMATION_SPEED);
    }

    pub fn set_colour_scheme(&mut self, colour_scheme: ColourSchemeKind) {
        self.colour_scheme = colour_scheme;
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_step_size: DEFAULT_ZOOM_STEP_SIZE,
            zoom_animation_speed: DEFAULT_ZOOM_ANIMATION_SPEED,
            colour_scheme: ColourSchemeKind::default(),
        }
    }
}

fn check_step_or_speed(setting: &'static str, value: f64) -> Result<f64, SettingsError> {
    if value > 0.0 && value <= MAX_STEP_OR_SPEED {
        Ok(value)
    } else {
        Err(SettingsError::OutOfRange {
            setting,
            value,
            min: 0.0,
            max: MAX_STEP_OR_SPEED,
        })
    }
}

fn clamp_step_or_speed(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(MIN_STEP_OR_SPEED, MAX_STEP_OR_SPEED)
    }
}
