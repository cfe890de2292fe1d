//! # catwatch-core
//!
//! The alarm engine and the stock adapters for its ports.
//!
//! * **[`rules`]**: pure transition functions. No IO, no locking.
//! * **[`security`]**: [`security::SecurityService`], the engine that applies the
//!   rules against a repository and broadcasts to listeners.
//! * **[`listeners`]**: the observer registry and the events it fans out.
//! * **[`repository`]** / **[`classifier`]**: concrete adapters for the ports
//!   declared in `catwatch_common::ports`.

pub mod classifier;
pub mod listeners;
pub mod repository;
pub mod rules;
pub mod security;
