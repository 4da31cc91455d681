#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Build reporting operations for buildsnag
//!
//! Validation, payload construction and the single call to the build API.
//! The CLI drives these through [`report_build`].

mod context;
mod params;
mod payload;
mod report;
mod types;
mod validate;

pub use context::{OpsContextBuilder, OpsCtx};
pub use params::{names, BuildParams, ValidatedParams};
pub use payload::build_payload;
pub use report::report_build;
pub use types::{ReleaseOutcome, ReleaseResult};
pub use validate::validate;
