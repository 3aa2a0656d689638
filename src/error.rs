//! Error types for scene loading and simulation.

#![allow(missing_docs)]

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::vector::Vector;

/// Failure to read or parse a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("cannot read scene {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input ended before a required record.
    #[error("line {line}: expected {expected}, found end of input")]
    UnexpectedEnd { line: usize, expected: &'static str },

    /// A coordinate failed to parse as a float.
    #[error("line {line}: {token:?} is not a number")]
    InvalidNumber { line: usize, token: String },

    /// A vector record did not hold exactly three numbers.
    #[error("line {line}: expected 3 coordinates for {expected}, found {found}")]
    WrongArity {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    /// Energy or mirror count was not a non-negative integer.
    #[error("line {line}: expected a non-negative integer for {expected}, found {token:?}")]
    InvalidInteger {
        line: usize,
        expected: &'static str,
        token: String,
    },

    /// The ray would never move.
    #[error("initial direction must not be the zero vector")]
    ZeroDirection,
}

/// Unrecoverable geometric failure during the bounce simulation.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// No cube face lies ahead of the ray.
    #[error(
        "ray from {position} along {direction} never reaches a cube face; \
         the cube does not enclose it"
    )]
    NoExit { position: Vector, direction: Vector },
}
