//! Command-line front end for sweep expansion
//!
//! Loads a property-file template, expands every range it declares and
//! writes one `<template>-<identifier>.ini` file per configuration. The
//! expansion itself lives in `sweepgen_core`; this crate owns everything that
//! touches the filesystem, the terminal or the environment.

pub mod io;
pub mod logging;
pub mod run;
pub mod settings;
pub mod writer;

pub use logging::{LogRotation, init_logging};
pub use run::{Mode, RunOptions, RunSummary, load_template, run};
pub use settings::{Settings, SettingsError};
pub use writer::{ConfigWriter, Manifest, ManifestEntry, WriteError};
