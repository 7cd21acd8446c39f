pub mod hues;
pub mod ids;
