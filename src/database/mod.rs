//! Connection manager for the pooled document-store client.
//!
//! One pool is created at process startup and torn down once at process
//! shutdown; request handlers borrow the shared namespace handle and never
//! open or close connections themselves.

mod pool;

pub use pool::{DatabaseError, DatabasePool};
