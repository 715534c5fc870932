//! Integration tests for Layer 0: Foundation
//!
//! Tests for typed identifiers, identity allocation, and the error taxonomy.

mod errors;
mod ids;
