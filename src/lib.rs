//! Facturapid web front end for the invoicing API.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
