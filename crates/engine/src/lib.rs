//! # Crossline Engine Crate
//!
//! This crate contains the core decision logic of the system: a single
//! moving-average crossover strategy engine that replaces the four
//! near-identical per-family studies (SMA, EMA, Hull, ZLEMA) it grew out
//! of. The moving-average family is a configuration value; everything
//! else is shared.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   charting, order routing, or fills. It depends only on `core-types`,
//!   `configuration`, and the `host` boundary traits.
//! - **Host-Driven:** The engine owns no scheduler and no thread. The host
//!   invokes `CrossoverEngine::on_bar_update` once per data update on a
//!   single thread, and each invocation recomputes its decision from
//!   current inputs.
//! - **One Decision Per Closed Bar:** An invocation that arrives while the
//!   current bar is still forming updates the moving averages and stops.
//!   Only the invocation that observes the bar close may submit an order.
//!
//! ## Public API
//!
//! - `CrossoverEngine`: the per-bar strategy cycle.
//! - `CycleReport`: what a single invocation decided and did.
//! - `detector`, `gate`, `issuer`: the individual decision components.
//! - `EngineError`: the specific error types that can be returned from this crate.

// Declare all the modules that constitute this crate.
pub mod cycle;
pub mod detector;
pub mod error;
pub mod gate;
pub mod issuer;

// Re-export the key components to create a clean, public-facing API.
pub use cycle::{CrossoverEngine, CycleReport};
pub use detector::Crossover;
pub use error::EngineError;
pub use issuer::OrderIssuer;
