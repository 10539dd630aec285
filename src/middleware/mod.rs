//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor validates the JWT and builds the
//!    per-request identity context
//! 3. A role gate from [`role`] checks the identity against the route policy
//! 4. The handler executes if all checks pass
//!
//! Gates always run after authentication and never re-derive identity; they
//! only read the claims the extractor attached.

pub mod auth;
pub mod role;
