//! `BirthdayBuddy` - A birthday tracking core with mock gifting services
//!
//! This crate provides the core of a birthday-tracking application: a
//! persistent store of birthday records, pure recurrence arithmetic for
//! annual month/day patterns, templated e-card messages, daily reminder
//! summaries, contact import, and a mock gift catalog with a simulated
//! checkout flow. There is no real backend or payment integration; the
//! service modules are hard-coded data behind artificial delays.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    // Documentation - missing docs should be added gradually
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Application configuration loaded from config.toml
pub mod config;
/// Contact import - candidate records from an external contact source
pub mod contacts;
/// Core business logic - recurrence arithmetic and the birthday store
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Mock gift catalog and simulated checkout flow
pub mod gifts;
/// E-card styles and birthday message templating
pub mod messaging;
/// Birthday record and section data models
pub mod models;
/// Daily reminder summaries for today's birthdays
pub mod notifications;
/// Keyed blob persistence backing the birthday store
pub mod storage;

#[cfg(test)]
pub mod test_utils;
