//! Storage backends.
//!
//! The engine talks to storage only through the repository traits in
//! `nestcal_core::storage`; this module provides the in-memory backend the
//! service runs on by default.

mod inmemory;

pub use inmemory::InMemoryRepository;
