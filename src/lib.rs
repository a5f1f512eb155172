// Library target exists for the integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `wordveil::puzzle::*` / `wordveil::rng::*`.
// Some code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by tests and benchmarks
pub mod error;
pub mod level;
pub mod puzzle;
pub mod rng;
pub mod text;
pub mod words;

// Private: only the binary needs it, but the tree must stay whole
mod config;
