//! Response header inspection.

pub mod header;

pub use header::{inspect_headers, HstsDirectives, HstsObservation, ResponseHeader, HSTS_HEADER};
