//! Integration tests for Layer 1: Storage
//!
//! Tests for entity stores, the friendship graph, the like index, and
//! popularity ranking.

mod likes;
