//! Hash and angle-reduction helpers backed by the native library.

use crate::error::{Error, Result};
use nbody_sys as ffi;
use std::ffi::CString;

/// A particle key accepted by [`hash`].
///
/// The native library identifies particles either by an integer id or by a
/// short ASCII name. The enum makes the two accepted shapes explicit at the
/// call boundary; anything else is rejected by the compiler rather than at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKey<'a> {
    /// Numeric identifier; hashes to the id truncated to 32 bits.
    Id(u64),
    /// ASCII name; hashed by the native `nb_hash` routine.
    Name(&'a str),
}

impl From<u32> for HashKey<'static> {
    fn from(id: u32) -> Self {
        HashKey::Id(u64::from(id))
    }
}

impl From<u64> for HashKey<'static> {
    fn from(id: u64) -> Self {
        HashKey::Id(id)
    }
}

impl<'a> From<&'a str> for HashKey<'a> {
    fn from(name: &'a str) -> Self {
        HashKey::Name(name)
    }
}

/// Hash a particle key into a 32-bit unsigned value.
///
/// Integer ids are reduced modulo 2^32 without crossing the FFI boundary, so
/// a `u32` id is returned unchanged. Names must be ASCII without interior
/// NUL bytes (the native API takes a NUL-terminated ASCII string) and are
/// hashed by the library.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] for non-ASCII names or names containing
/// NUL bytes.
pub fn hash<'a>(key: impl Into<HashKey<'a>>) -> Result<u32> {
    match key.into() {
        HashKey::Id(id) => Ok(id as u32),
        HashKey::Name(name) => {
            if !name.is_ascii() {
                return Err(Error::InvalidKey("name must be ASCII".into()));
            }
            let c_name = CString::new(name)
                .map_err(|_| Error::InvalidKey("name contains NUL bytes".into()))?;
            Ok(unsafe { ffi::nb_hash(c_name.as_ptr()) })
        }
    }
}

/// Reduce an angle in radians to the interval `[0, 2*pi)`.
///
/// Delegates to the native `nb_tools_mod2pi` routine. Finite inputs,
/// including negative angles, land in `[0, 2*pi)`.
pub fn mod2pi(x: f64) -> f64 {
    unsafe { ffi::nb_tools_mod2pi(x) }
}
