//! Domain layer containing booking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Treatments, practitioners and the daily slot template
//! - `appointment` - Booked appointments and their lifecycle
//! - `treatment_program` - Multi-session treatment programs and progress
//! - `booking` - The step-by-step booking wizard

pub mod appointment;
pub mod booking;
pub mod catalog;
pub mod foundation;
pub mod treatment_program;
