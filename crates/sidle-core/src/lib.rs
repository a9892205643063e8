//! Pure math/data and host contracts for Sidle
//!
//! This crate carries no behavior of its own: units, geometry, pointer
//! events, and the surface/host traits the drawer is driven through. The
//! host UI layer implements [`Surface`] and [`WindowHost`]; everything else
//! in the workspace consumes them.

mod error;
mod geometry;
mod host;
mod pointer;
mod surface;
mod unit;

pub use error::*;
pub use geometry::*;
pub use host::*;
pub use pointer::*;
pub use surface::*;
pub use unit::*;
