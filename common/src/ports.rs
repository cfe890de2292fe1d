//! # Ports (Boundaries)
//!
//! Traits isolating the alarm engine from its collaborators.
//!
//! * **[`repository`]** (driven): storage for sensors and the two status values.
//! * **[`classifier`]** (driven): decides whether an image shows a cat.
//! * **[`listener`]** (driven): observers notified of every state change.
//!
//! ## Rules
//! 1. All items here are traits.
//! 2. No concrete implementations; those live in `catwatch-core` or with the caller.
//! 3. Failures are reported as `anyhow::Result` and the engine passes them on untouched.

pub mod classifier;
pub mod listener;
pub mod repository;
