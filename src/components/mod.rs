//! Page components.

pub mod particle_field;
pub mod publications;
pub mod site;
