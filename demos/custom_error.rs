//! Demonstrates an application error type built on top of `factum::Error`.
//!
//! This example shows:
//! 1. Declaring application tags with `tag!`
//! 2. Deriving an error from a base error and adding a fact to the copy
//! 3. Registering a render handle so the new fact shows up when rendered
//! 4. Mixing the derived error with foreign errors in one chain

use core::fmt;

use factum::{config, prelude::*};

tag! {
    /// A measurement that was out of range.
    pub Additional: f64 = "additional";
}

// ============================================================================
// A derived error type
// ============================================================================

/// An error raised by the sensor layer.
///
/// It wraps a base error and adds the offending reading, which it renders
/// itself through a render handle.
#[derive(Clone, Debug)]
pub struct SensorError(Error);

impl SensorError {
    pub fn new(base: &Error, reading: f64) -> Self {
        Self(
            base.clone()
                .with(Additional::info(reading))
                .with_renderer(render_reading),
        )
    }
}

fn render_reading(error: &Error, sink: &mut dyn fmt::Write, depth: usize) -> fmt::Result {
    match error.lookup::<Additional>() {
        Some(reading) => render::field(sink, depth, "additional", reading),
        None => Ok(()),
    }
}

impl From<SensorError> for Error {
    fn from(error: SensorError) -> Self {
        error.0
    }
}

// ============================================================================
// A foreign error in the middle of the chain
// ============================================================================

#[derive(Debug)]
struct CalibrationError {
    source: Error,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("calibration failed")
    }
}

impl core::error::Error for CalibrationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn read_sensor() -> Result<f64, Error> {
    let base = error!(code = 0x3, "reading out of range");
    Err(SensorError::new(&base, 12.345).into())
}

fn calibrate() -> Result<f64, CalibrationError> {
    read_sensor().map_err(|source| CalibrationError { source })
}

fn start() -> Result<(), Error> {
    calibrate().nest(Error::with_code(0x10, "startup failed", ()))?;
    Ok(())
}

fn main() {
    let error = start().unwrap_err();

    println!("Rendered with the build default ({:?}):", config::site_metadata());
    println!("{error:?}");

    config::set_site_metadata(config::SiteMetadata::Omit);
    println!("Rendered without site metadata:");
    println!("{}", error.render());

    for (depth, level) in error.chain().enumerate() {
        let reading = factum::lookup::<Additional>(level);
        println!("level {depth}: {level} (additional: {reading:?})");
    }
}
