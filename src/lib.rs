//! Marksman - Trade prediction and execution scoring engine
//!
//! Converts raw trade-prediction and trade-execution facts into
//! normalized, comparable grades across four nested levels: individual
//! price predictions (aims), trade executions (shots), investment theses
//! (targets), and trader careers. Idea quality and execution quality are
//! graded separately, adjusted for prediction difficulty and risk
//! discipline.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (score scale, ids, timestamps, errors)
//! - `grading` - Score to letter-grade and risk-grade mapping
//! - `curves` - Piecewise-linear metric curves
//! - `risk` - Plan quality, execution discipline, risk assessment
//! - `scoring` - The four scorers: aim, shot, target, career
//!
//! Every function is synchronous, side-effect-free, and deterministic
//! apart from the informational `calculated_at` stamp on score objects.
//! The engine persists nothing; callers own storage.

pub mod curves;
pub mod foundation;
pub mod grading;
pub mod risk;
pub mod scoring;
