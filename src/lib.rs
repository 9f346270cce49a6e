//! modwarden: update checker for server-side Minecraft mod installations
//!
//! Tracks a catalog of installed mods, asks the remote distribution
//! platform (Modrinth) for their published versions, and reports which
//! mods have a compatible newer version for the server's configured game
//! version and mod loader.
//!
//! The interesting parts live in [`version`] (total order over messy mod
//! version strings) and [`update`] (compatibility matching plus the
//! batched, retrying check cycle). [`catalog`] is the storage seam the
//! engine reads through.

pub mod catalog;
pub mod config;
pub mod update;
pub mod version;
