pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{MaFamily, OrderSide, OrderType, PriceField, TimeInForce};
pub use structs::{Bar, OrderRequest, Position, ResultCode};
