//! rh-core: shared foundation for rodheat.
//!
//! Contains:
//! - ids (1-based ids for nodes and elements, with their 0-based index)
//! - numeric (Real + tolerances + float guards)
//! - units (uom SI types + constructors)
//! - error (shared error type)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
