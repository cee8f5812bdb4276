//! Dispatch module tests
//!
//! Organized by functional area:
//! - `core_functionality`: hand-off, failure accounting, relaying
//! - `lifecycle`: start/stop behaviour and delivery statistics
