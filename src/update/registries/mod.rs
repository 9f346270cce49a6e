//! Concrete registry clients

pub mod modrinth;

pub use modrinth::ModrinthRegistry;
