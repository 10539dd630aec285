//! Client for the external stats service.
//!
//! The service is an opaque HTTP collaborator: attempts are pushed to it and
//! per-account summaries are read back. It is never consulted for
//! authentication or authorization decisions.

pub mod client;
pub mod model;
