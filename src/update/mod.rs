//! Update-check engine: remote lookups, resolution, and orchestration
//!
//! ```text
//! ┌───────────┐    ┌──────────────┐    ┌────────────┐
//! │ Scheduler │───▶│   Fetcher    │───▶│  Registry  │
//! │ (batches) │    │ (retry/delay)│    │ (Modrinth) │
//! └───────────┘    └──────────────┘    └────────────┘
//!       │
//!       ▼
//! ┌───────────┐    ┌──────────────┐
//! │ Resolver  │───▶│   Summary    │
//! │ (+compat) │    │ (aggregate)  │
//! └───────────┘    └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: async trait for per-mod remote version lookups
//! - [`registries`]: concrete registry clients (Modrinth)
//! - [`fetcher`]: bounded retry with linear backoff around a registry
//! - [`compat`]: game-version/loader eligibility and side classification
//! - [`resolver`]: per-mod smallest-viable-upgrade resolution
//! - [`scheduler`]: batched, paced check cycle over the whole catalog
//! - [`summary`]: aggregate counts and the redacted report
//! - [`types`]: remote records and per-mod results
//! - [`error`]: error types for registry and catalog operations

pub mod compat;
pub mod error;
pub mod fetcher;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod scheduler;
pub mod summary;
pub mod types;

pub use scheduler::UpdateChecker;
pub use summary::UpdateReport;
