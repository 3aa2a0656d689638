//! Bounce simulation.
//!
//! The ray travels in a straight line until it meets the nearest mirror or
//! cube face. A mirror reflects it and costs one unit of energy; a face ends
//! the run. Running out of energy while still bouncing ends it as well.
//!
//! Every step either terminates or strictly decrements the energy, so a run
//! takes at most `energy + 1` steps.

use log::{debug, info, trace};

use crate::error::SimulationError;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::surface::{Collision, nearest_collision};
use crate::vector::{Vector, VectorExt};

/// Position, heading and remaining reflection budget of the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    /// Current point; the origin or the last reflection or the exit point
    pub position: Vector,
    /// Current heading, not normalized
    pub direction: Vector,
    /// Reflections still allowed
    pub energy: u32,
}

/// How a simulation ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The ray reached a cube face at `position` with `energy` left.
    Exited(Beam),
    /// The ray used up its energy on the mirror at `position`.
    Exhausted(Beam),
}

impl Outcome {
    /// Final beam regardless of how the run ended.
    pub fn beam(&self) -> &Beam {
        match self {
            Outcome::Exited(beam) | Outcome::Exhausted(beam) => beam,
        }
    }
}

/// State of the simulation between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayState {
    /// Still travelling between mirrors.
    Bouncing(Beam),
    /// Finished; further steps are no-ops.
    Done(Outcome),
}

/// Stepping engine over a borrowed scene.
#[derive(Debug)]
pub struct Simulation<'a> {
    scene: &'a Scene,
    state: RayState,
}

impl<'a> Simulation<'a> {
    /// Start with the scene's initial position, direction and energy.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            state: RayState::Bouncing(Beam {
                position: scene.position,
                direction: scene.direction,
                energy: scene.energy,
            }),
        }
    }

    /// Current state.
    pub fn state(&self) -> &RayState {
        &self.state
    }

    /// Advance by one bounce step. Does nothing once finished.
    pub fn step(&mut self) -> Result<&RayState, SimulationError> {
        if let RayState::Bouncing(beam) = self.state {
            self.state = self.advance(beam)?;
        }
        Ok(&self.state)
    }

    /// Step until the ray exits or runs out of energy.
    pub fn run(mut self) -> Result<Outcome, SimulationError> {
        loop {
            if let RayState::Done(outcome) = *self.step()? {
                return Ok(outcome);
            }
        }
    }

    fn advance(&self, beam: Beam) -> Result<RayState, SimulationError> {
        if beam.energy == 0 {
            return Ok(RayState::Done(Outcome::Exhausted(beam)));
        }

        let ray = Ray::new(beam.position, beam.direction);
        let mirror_hit = nearest_collision(&self.scene.mirrors, &ray);
        let face_hit = nearest_collision(self.scene.cube.faces(), &ray);
        trace!(
            "From {} along {}: mirror hit {:?}, face hit {:?}",
            beam.position, beam.direction, mirror_hit, face_hit
        );

        match (mirror_hit, face_hit) {
            (Some(mirror), Some(face)) if face.distance > mirror.distance => {
                Ok(RayState::Bouncing(reflect(beam, &mirror)))
            }
            (_, Some(face)) => Ok(RayState::Done(Outcome::Exited(Beam {
                position: face.point,
                ..beam
            }))),
            (_, None) => Err(SimulationError::NoExit {
                position: beam.position,
                direction: beam.direction,
            }),
        }
    }
}

fn reflect(beam: Beam, mirror: &Collision) -> Beam {
    let direction = beam.direction.reflect_across(&mirror.plane);
    let bounced = Beam {
        position: mirror.point,
        direction,
        energy: beam.energy - 1,
    };
    debug!(
        "Reflected at {} (incidence {:.3} rad), new direction {}, energy left {}",
        bounced.position,
        beam.direction.angle_with(mirror.plane.normal),
        bounced.direction,
        bounced.energy
    );
    bounced
}

/// Run the scene to completion.
pub fn simulate(scene: &Scene) -> Result<Outcome, SimulationError> {
    let outcome = Simulation::new(scene).run()?;
    match &outcome {
        Outcome::Exited(beam) => {
            info!("Ray exited at {} with energy {}", beam.position, beam.energy)
        }
        Outcome::Exhausted(beam) => info!("Ray exhausted its energy at {}", beam.position),
    }
    Ok(outcome)
}
