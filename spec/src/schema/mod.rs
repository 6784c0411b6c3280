//! HQDM schema modules.
//!
//! Each sub-module encodes one group of HQDM classes as Rust static data:
//! the class, its direct superclasses, and the ordered rule table its builder
//! checks. See [`crate::Schema::hqdm`] for the assembly order.

pub mod activity;
pub mod class;
pub mod extent;
pub mod representation;
