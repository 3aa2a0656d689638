//! Scene description input.
//!
//! The text format is line oriented; each line holds one record:
//!
//! ```text
//! ax ay az        cube vertex A
//! bx by bz        cube vertex B
//! cx cy cz        cube vertex C
//! dx dy dz        cube vertex D
//! vx vy vz        initial direction
//! px py pz        initial position
//! energy          reflection budget
//! n               mirror count
//! x1 y1 z1        \
//! x2 y2 z2         } three corners per mirror, n times
//! x3 y3 z3        /
//! ```
//!
//! Blank lines are skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use crate::cube::Cube;
use crate::error::SceneError;
use crate::mirror::Mirror;
use crate::vector::Vector;

/// Everything the bounce simulation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Enclosure the ray escapes from.
    pub cube: Cube,
    /// Mirror panels inside the cube, in input order.
    pub mirrors: Vec<Mirror>,
    /// Starting point of the ray.
    pub position: Vector,
    /// Starting direction of the ray.
    pub direction: Vector,
    /// Number of reflections allowed.
    pub energy: u32,
}

impl Scene {
    /// Parse a scene from its text form.
    pub fn parse(text: &str) -> Result<Self, SceneError> {
        let mut records = Records::new(text);

        let a = records.vector("cube vertex A")?;
        let b = records.vector("cube vertex B")?;
        let c = records.vector("cube vertex C")?;
        let d = records.vector("cube vertex D")?;
        let direction = records.vector("initial direction")?;
        let position = records.vector("initial position")?;
        let energy = records.integer("energy")?;
        let count: usize = records.integer("mirror count")?;

        let mut mirrors = Vec::with_capacity(count);
        for _ in 0..count {
            let p1 = records.vector("mirror corner")?;
            let p2 = records.vector("mirror corner")?;
            let p3 = records.vector("mirror corner")?;
            mirrors.push(Mirror::new(p1, p2, p3));
        }

        if let Some((line, _)) = records.next_record() {
            warn!("Ignoring trailing input from line {}", line);
        }

        if direction == Vector::ZERO {
            return Err(SceneError::ZeroDirection);
        }

        Ok(Self {
            cube: Cube::new(a, b, c, d),
            mirrors,
            position,
            direction,
            energy,
        })
    }

    /// Read and parse a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::parse(&text)?;
        info!(
            "Loaded scene from {}: {} mirror(s), energy {}",
            path.display(),
            scene.mirrors.len(),
            scene.energy
        );
        Ok(scene)
    }
}

impl FromStr for Scene {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Non-blank lines with their 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    /// Line number of the last record taken, for end-of-input errors.
    last_line: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_record(&mut self) -> Option<(usize, &'a str)> {
        let (index, line) = self.lines.find(|(_, line)| !line.trim().is_empty())?;
        self.last_line = index + 1;
        Some((self.last_line, line.trim()))
    }

    fn expect_record(&mut self, expected: &'static str) -> Result<(usize, &'a str), SceneError> {
        self.next_record().ok_or(SceneError::UnexpectedEnd {
            line: self.last_line + 1,
            expected,
        })
    }

    fn vector(&mut self, expected: &'static str) -> Result<Vector, SceneError> {
        let (line, record) = self.expect_record(expected)?;
        let coordinates = record
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| SceneError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match coordinates[..] {
            [x, y, z] => Ok(Vector::new(x, y, z)),
            _ => Err(SceneError::WrongArity {
                line,
                expected,
                found: coordinates.len(),
            }),
        }
    }

    fn integer<T: FromStr>(&mut self, expected: &'static str) -> Result<T, SceneError> {
        let (line, record) = self.expect_record(expected)?;
        record.parse().map_err(|_| SceneError::InvalidInteger {
            line,
            expected,
            token: record.to_string(),
        })
    }
}
