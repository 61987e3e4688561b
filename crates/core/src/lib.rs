//! Core domain logic for nestcal, the shared-calendar engine of a
//! parenting-support backend.
//!
//! This crate is framework-free: it defines the calendar/event data model,
//! the access-control tier resolution, recurrence expansion, validation, and
//! the repository traits the service layer persists through. All decision
//! logic is pure functions over immutable snapshots; persistence is the
//! caller's responsibility.

pub mod calendar;
pub mod storage;
