//! Fixed-capacity array containers.
//!
//! Two families, each with a typed and a type-erased variant:
//!
//! ```text
//!                 typed (compile-time T)      type-erased (runtime type_size)
//! plain           PlainArray<T>               RawPlainArray
//! strict          StrictArray<T>              RawStrictArray
//! ```
//!
//! [`IntPlainArray`] and [`IntStrictArray`] are the `i32` specializations.
//!
//! # Families
//!
//! - **Plain:** capacity only. Every slot below capacity is readable;
//!   there is no append or remove.
//! - **Strict:** capacity plus a logical size. Reads are bounded by the
//!   size; the size changes only through append, remove-last, and clear.
//!
//! # Allocation
//!
//! Every container makes exactly one payload allocation at construction
//! and never reallocates. Construction and cloning return
//! [`ArrayResult`](fixarr_core::ArrayResult); allocator refusal is
//! reported as [`ArrayError::AllocationFailed`](fixarr_core::ArrayError)
//! rather than aborting.
//!
//! # Handles
//!
//! The [`handle`] module gives `Option`-wrapped containers uniform
//! absent-handle behaviour for clone, destroy, get, and the strict
//! mutations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod alloc;
pub mod handle;
pub mod plain;
pub mod raw_plain;
pub mod raw_strict;
pub mod strict;

// Public re-exports for the primary API surface.
pub use handle::{FixedArray, StrictOps};
pub use plain::{IntPlainArray, PlainArray};
pub use raw_plain::RawPlainArray;
pub use raw_strict::RawStrictArray;
pub use strict::{IntStrictArray, StrictArray};
