//! Store module tests
//!
//! Organized by functional area:
//! - `core_functionality`: add, snapshot, poll and remove operations
//! - `ordering`: FIFO and priority ordering guarantees
//! - `lifecycle`: group removal, idle expiry and statistics
//! - `concurrent`: cross-thread access through shared store handles
//! - `edge_cases`: unknown groups and boundary conditions

mod lifecycle;
