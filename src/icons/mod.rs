/// Icon generation module
///
/// This module handles:
/// - The fixed list of square icon sizes (sizes.rs)
/// - Resizing the master image and writing PNG icons (generator.rs)
/// - The error type shared by both (error.rs)

pub mod error;
pub mod generator;
pub mod sizes;
