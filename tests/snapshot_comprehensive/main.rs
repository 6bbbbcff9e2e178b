//! Snapshot Comprehensive Test Suite
//!
//! Cross-crate tests for freezing records into flat maps and reading them
//! back as read-only snapshots.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Codec Invariants**
//!   Key and value round trips, null propagation, type and version gating.
//!
//! - **Tier 2: End to End**
//!   Encoding real records and rebuilding them through the factory.
//!
//! - **Tier 3: Immutability**
//!   Noisy and silent proxies, forwarding, thread sharing.
//!
//! - **Tier 4: Associations**
//!   Owner-side slots: caching, overwriting, wrong-type assignment.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test snapshot_comprehensive
//!
//! # Only the property-based codec tests
//! cargo test --test snapshot_comprehensive codec_invariants
//! ```


// Tier 1: Codec Invariants
mod codec_invariants;


// Tier 3: Immutability
mod immutability_invariants;

// Tier 4: Associations
mod association_tests;
