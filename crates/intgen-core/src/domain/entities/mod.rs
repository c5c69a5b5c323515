//! Domain entities: the build model and the things it contains.

pub mod common;
pub mod model;
pub mod resource;
pub mod source;
