//! # Crossline Host Crate
//!
//! This crate defines the boundary between the strategy engine and the
//! platform that owns market data, positions, and order routing. It
//! provides the traits the engine is written against and a `SimulatedHost`
//! used by the replay harness and the test suite.
//!
//! ## Architectural Principles
//!
//! - **Injected Seams:** The engine never talks to a platform directly. It
//!   receives a `PositionReader` (read side), an `OrderGateway` (command
//!   side), and a `MovingAverageProvider` (computation side) per cycle, so
//!   every collaborator can be substituted with a test double.
//! - **Fire-and-Forget Commands:** Cancel and flatten outcomes are not
//!   observed by the engine, and order submissions come back as an opaque
//!   `ResultCode`. This mirrors the platform contract the strategies were
//!   built for, where a stale view self-corrects on the next cycle's fresh
//!   position read.
//!
//! ## Public API
//!
//! - `PositionReader`, `OrderGateway`, `TradingHost`: the engine-facing traits.
//! - `MovingAverageProvider`: the pluggable moving-average computation.
//! - `BuiltinMaProvider`: reference implementation of all four MA families.
//! - `SimulatedHost`: the in-memory host for replays and tests.

// Declare the modules that constitute this crate.
pub mod indicators;
pub mod interface;
pub mod sim;

// Re-export the key components to provide a clean, public-facing API.
pub use indicators::BuiltinMaProvider;
pub use interface::{MovingAverageProvider, OrderGateway, PositionReader, TradingHost};
pub use sim::{HostCall, SimulatedHost};
