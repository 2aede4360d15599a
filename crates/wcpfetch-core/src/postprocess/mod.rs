//! Normalization of extracted portal sources.
//!
//! The portal names exported files after the application's generated suffix
//! and ships embedded JSON in compact form; both steps here rewrite the tree
//! into the layout the project keeps under version control. Every step is
//! per-file non-fatal: a bad file is logged and skipped, the batch continues.

mod metadata;
mod orchestration;

pub use metadata::rename_metadata_files;
pub use orchestration::{pretty_print_file, pretty_print_orchestrations};
