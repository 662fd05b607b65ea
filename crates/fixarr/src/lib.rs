//! fixarr: fixed-capacity arrays that never grow.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fixarr sub-crates. For most users, adding `fixarr` as a single
//! dependency is sufficient. C callers link `fixarr-ffi` instead.
//!
//! # Quick start
//!
//! ```rust
//! use fixarr::prelude::*;
//!
//! // A strict array tracks how many of its slots are live.
//! let mut handle = None;
//! let msg = unwrap_into(IntStrictArray::new(Some(&[1, 2, 3][..]), 3, 4), &mut handle);
//! assert_eq!(msg, None);
//!
//! let arr = handle.as_mut().unwrap();
//! assert_eq!(arr.append(4), Status::Ok);
//! assert_eq!(arr.append(5), Status::CapacityExhausted);
//! assert_eq!(arr.get(3), Some(&4));
//!
//! // Failed construction leaves the slot empty and yields a diagnostic.
//! let mut raw: Option<RawPlainArray> = None;
//! let msg = unwrap_into(RawPlainArray::with_capacity(8, 0), &mut raw);
//! assert_eq!(msg, Some("SizeError: Type cannot have less than 1 byte\n"));
//! assert!(raw.is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fixarr-core` | `Status`, `ArrayError`, `ElementLayout`, `unwrap_into` |
//! | [`array`] | `fixarr-array` | The four container families and handle operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Containers and handle-style operations (`fixarr-array`).
///
/// [`array::handle`] holds the `Option`-based operations that treat an
/// absent container as a null reference.
pub use fixarr_array as array;

/// Status codes, errors, and element layout (`fixarr-core`).
pub use fixarr_core as types;

/// Common imports for typical fixarr usage.
///
/// ```rust
/// use fixarr::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use fixarr_array::{
        IntPlainArray, IntStrictArray, PlainArray, RawPlainArray, RawStrictArray, StrictArray,
    };

    // Container traits
    pub use fixarr_array::{FixedArray, StrictOps};

    // Status and results
    pub use fixarr_core::{unwrap_into, ArrayError, ArrayResult, Status};
}
