//! # catwatch-common
//!
//! Shared vocabulary of the security monitor: the domain models, the typed
//! errors and the **ports** (traits) the alarm engine talks through.
//!
//! * **[`sensor`]**, **[`status`]**, **[`image`]**: plain domain values.
//! * **[`ports`]**: contracts for the repository, the image classifier and the
//!   status listeners. Implementations live in `catwatch-core` or in the caller.
//! * **[`config`]** / **[`error`]**: ambient configuration and error types.

pub mod config;
pub mod error;
pub mod image;
pub mod ports;
pub mod sensor;
pub mod status;
