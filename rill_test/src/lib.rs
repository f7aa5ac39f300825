//! Contains the shared utilities used by the property-based test suites of the Rill crates.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]

pub mod input;
