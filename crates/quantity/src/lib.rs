//! Quantity stepper state machine for cart and product pages
//!
//! This crate provides the logic behind the `- [ 3 ] +` quantity control:
//! - Single authoritative value with an explicit "adopt external" transition
//! - Saturating bounds enforcement (floor 1, optional ceiling)
//! - Lenient parsing of typed input (malformed text degrades to the floor)
//! - Optional per-transition callbacks for the owning page

pub mod stepper;

pub use stepper::{clamp_quantity, parse_quantity, QuantityStepper};
