//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the records loaded from the static JSON data files.
//! - Keep wire-shape tolerance inside deserialization, not in renderers.
//!
//! # Invariants
//! - Records are immutable after load and live for one page session.

pub mod background;
pub mod business;
pub mod item;
