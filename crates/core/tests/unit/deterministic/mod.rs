//! Unit tests for the deterministic PDM algebra.



/// Sigma-delta modulator convergence and boundedness.
pub mod sdm;
