//! Seams between the overlay core and its external collaborators.

pub mod input;
pub mod render;
