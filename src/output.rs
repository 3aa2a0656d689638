//! # Output Module
//!
//! Serializes a finished simulation in the plain-text result format:
//!
//! ```text
//! 0                exhausted: the ray is still confined
//! px py pz         position of the last reflection
//! ```
//!
//! or
//!
//! ```text
//! 1                exited: the ray left the cube
//! energy           reflections left
//! px py pz         exit point
//! vx vy vz         direction at exit
//! ```
//!
//! Note that the flag reads "0" for the confined case; consumers depend on it.
//!
//! Coordinates use Rust's shortest round-trip float formatting, so `5` prints
//! as `5.0` and no precision is lost.

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::simulation::Outcome;
use crate::vector::Vector;

/// Render an outcome in the result format, newline-terminated.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Exhausted(beam) => format!("0\n{}\n", coordinates(beam.position)),
        Outcome::Exited(beam) => format!(
            "1\n{}\n{}\n{}\n",
            beam.energy,
            coordinates(beam.position),
            coordinates(beam.direction)
        ),
    }
}

/// Write an outcome to any byte sink.
pub fn write_outcome<W: io::Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    out.write_all(format_outcome(outcome).as_bytes())
}

/// Save an outcome to a result file
///
/// The whole text is rendered before the file is touched and written with a
/// single call, so a failed simulation never leaves a half-written file
/// behind (the caller simply does not call this).
///
/// # Arguments
///
/// * `path` - Destination file; created or truncated
/// * `outcome` - Finished simulation to record
///
/// # Errors
///
/// Returns the underlying I/O error, e.g. for a missing directory or
/// insufficient permissions.
pub fn save_outcome(path: impl AsRef<Path>, outcome: &Outcome) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, format_outcome(outcome))?;
    info!("Result saved as {}", path.display());
    Ok(())
}

fn coordinates(v: Vector) -> String {
    format!("{:?} {:?} {:?}", v.x, v.y, v.z)
}
