//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - unit: Single-component tests (decoders, payload serialization)
//! - integration: Multi-component pipeline and session workflows

mod helpers;
mod integration;
mod unit;
