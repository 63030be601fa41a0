//! goviz-napi: Node.js bindings for the goviz syntax tree projector.
//!
//! Exports `parseGoCode(source?)` plus runtime setup. All domain logic lives
//! in `goviz-analysis`; this crate only marshals values across the boundary.

pub mod bindings;
pub mod conversions;
pub mod runtime;
