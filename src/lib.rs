//! Mirrorbox ray bouncer
//!
//! Traces a single ray from inside a parallelepiped through a set of planar
//! mirrors until it leaves through a face or runs out of reflections.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod interval;
pub mod plane;
pub mod ray;
pub mod surface;
pub mod mirror;
pub mod cube;
pub mod scene;
pub mod simulation;
pub mod error;
pub mod output;

pub use error::{SceneError, SimulationError};
pub use scene::Scene;
pub use simulation::{Beam, Outcome, RayState, Simulation, simulate};
