pub mod aperture;
pub mod beampipe;
pub mod config;
pub mod error;
pub mod math;
pub mod pointfile;
pub mod solid;

pub use beampipe::{BeamPipe, BeamPipeFactory, MakeBeamPipe};
pub use config::BeamPipeConfig;
pub use error::{BeamPipeError, Result};
