//! Core library for gentools
//!
//! This crate implements the **Functional Core** of the gentools application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The gentools project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`gentools_core`** (this crate): Pure transformation functions with zero I/O
//! - **`gentools`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate covers the generation-response materialization pipeline:
//!
//! - [`language`]: File-name to language classification
//! - [`response`]: Extraction of named files from raw model responses
//! - [`project`]: The in-memory project file state and its write modes
//! - [`preview`]: Assembly of a single sandbox-renderable preview document
//! - [`prompt`]: Construction of the generation prompts sent by the shell
//!
//! Data flows through the modules in that order: a raw response is parsed
//! into ordered file records, merged into the project state, and the state
//! is assembled into one preview document for a sandboxed renderer.
//!
//! # Degradation Policy
//!
//! None of these functions error on malformed input. A response with no
//! recognizable file segments parses to an empty sequence, a project with
//! nothing renderable assembles to a placeholder document, and a preview
//! whose entry script misbehaves renders inline diagnostics. Downstream
//! surfaces always receive something well-defined.

pub mod language;
pub mod preview;
pub mod project;
pub mod prompt;
pub mod response;
