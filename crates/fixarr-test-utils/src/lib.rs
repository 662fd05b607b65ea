//! Test utilities and reference models for fixarr development.
//!
//! Provides a [`StrictModel`] that mirrors strict-array semantics on a
//! plain `Vec`, so property tests can drive a container and the model
//! side by side, plus the data builders in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fixarr_core::Status;

/// One mutation applied to a strict container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrictOp<V> {
    Append(V),
    RemoveLast,
    Clear,
}

/// `Vec`-backed model of a strict array.
///
/// Holds at most `capacity` values. [`apply`](StrictModel::apply) returns
/// the status the real container is expected to return for the same op.
#[derive(Clone, Debug)]
pub struct StrictModel<V> {
    values: Vec<V>,
    capacity: usize,
}

impl<V: Clone> StrictModel<V> {
    pub fn new(initial: &[V], capacity: usize) -> Self {
        Self {
            values: initial.to_vec(),
            capacity,
        }
    }

    /// Apply `op` and return the expected status (`Ok` for remove/clear).
    pub fn apply(&mut self, op: &StrictOp<V>) -> Status {
        match op {
            StrictOp::Append(v) => {
                if self.values.len() == self.capacity {
                    return Status::CapacityExhausted;
                }
                self.values.push(v.clone());
                Status::Ok
            }
            StrictOp::RemoveLast => {
                self.values.pop();
                Status::Ok
            }
            StrictOp::Clear => {
                self.values.clear();
                Status::Ok
            }
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The value the container should return for `get(index)`.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }
}
