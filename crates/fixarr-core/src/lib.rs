//! Core types for the fixarr container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces every container variant shares: the [`Status`] taxonomy,
//! the [`ArrayError`] type carried by failed constructions, the
//! [`unwrap_into`] helper, and the validated [`ElementLayout`] used to
//! size allocations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod outcome;
pub mod status;

pub use error::ArrayError;
pub use layout::ElementLayout;
pub use outcome::{unwrap_into, ArrayResult};
pub use status::Status;
