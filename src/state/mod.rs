//! Client-side state containers.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `tutorials`). Each container owns a plain
//! value type, an action enum, and a pure `reduce` function; containers never
//! reference each other. Composition happens in [`crate::store`].

pub mod auth;
pub mod tutorials;
