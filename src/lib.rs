//! AHP Engine - Analytic Hierarchy Process calculations
//!
//! This crate turns pairwise comparison judgments into priority weights,
//! checks their consistency, and synthesizes a final score for every
//! alternative. Analyses and their results are persisted through the
//! `AnalysisRepository` port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
