//! # nvc-core
//!
//! Core types and error types for nvcell.
//!
//! This crate provides the foundational types shared across all nvcell crates:
//! - Source file naming rules and the extension allow-set
//! - The pipeline stage state machine
//! - Cell flags as delivered by the host session
//! - Run results, timing reports, and the displayable cell outcome
//! - Cross-cutting error types

pub mod cell;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod source;
pub mod timing;
