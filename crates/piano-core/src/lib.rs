//! # piano-core
//!
//! Core types shared by every piano teacher client crate:
//! - Entity records for students, schedule entries, lessons, and homework
//! - Opaque entity identifiers
//! - Status and difficulty enums
//! - Required-field validation performed before a save is attempted
//! - Cross-cutting error types
//! - Aggregated response types (dashboard counters)

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod validation;
