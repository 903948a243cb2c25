//! Reconciliation engine for structured configuration files
//!
//! A run reads an existing JSON or YAML file, applies `present`, `absent`
//! or `empty` semantics to its mapping, renders the result canonically and
//! writes it back only when the bytes differ.
//!
//! # Phases
//!
//! - [`detect`]: read the target and infer its format
//! - [`reconcile`]: merge, remove or clear keys
//! - [`evaluate`]: render and compare checksums
//! - [`persist`]: back up and write atomically
//! - [`outcome`]: the report handed back to the caller
//!
//! [`engine::run`] drives one request through all of them.

pub mod detect;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod outcome;
pub mod persist;
pub mod reconcile;
pub mod request;
pub mod state;

pub use engine::run;
pub use error::{Error, ErrorKind, Result};
pub use outcome::{FailureReport, Outcome};
pub use recon_content::{Format, Mapping, Value};
pub use recon_fs::NormalizedPath;
pub use request::{ReconcileOptions, ReconcileRequest};
pub use state::State;
