//! # nbody
//!
//! Safe, ergonomic bindings to the utility entry points of the nbody
//! simulation library.
//!
//! The simulation itself lives in the native library and is not wrapped here;
//! this crate only marshals values across the FFI boundary for the two
//! helpers the higher layers need: particle-key hashing and angle reduction.
//!
//! ## Example
//!
//! ```rust,ignore
//! use nbody::{hash, mod2pi, HashKey};
//!
//! let by_name = hash(HashKey::Name("planetesimal"))?;
//! let by_id = hash(42u32)?;
//! let anomaly = mod2pi(7.5);
//! assert!((0.0..std::f64::consts::TAU).contains(&anomaly));
//! ```

mod error;
mod tools;

pub use error::{Error, Result};
pub use tools::{hash, mod2pi, HashKey};
