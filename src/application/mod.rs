//! Application layer
//!
//! Use cases that drive the invoicing API client on behalf of the web front
//! end: parsing identifiers, validating input, and shaping results for views.

pub mod invoice;
