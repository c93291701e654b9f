//! starlight: frame encoder and color math for STARLIGHT ARGB LED controllers.

pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod protocol;
pub mod transport;

pub use error::StarlightError;
