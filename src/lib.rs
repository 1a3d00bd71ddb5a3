//! AyurSutra Booking - appointment booking for an Ayurvedic therapy clinic
//!
//! This crate implements the patient-facing booking wizard (treatment,
//! practitioner, date/time, confirm) and the small REST service that lists,
//! creates and retrieves appointments and treatment programs.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
