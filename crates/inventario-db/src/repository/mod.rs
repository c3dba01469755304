//! # Repository Implementations
//!
//! One repository per aggregate. Each is a thin struct over the shared
//! `SqlitePool`; every SQL statement in the service lives in one of these
//! four files.

pub mod product;
pub mod purchase_order;
pub mod sale;
pub mod supplier;
