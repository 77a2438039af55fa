//! # tutorial-client
//!
//! Client-side state store for the academic tutorial platform.
//!
//! This crate holds the auth session and the tutorial collection as plain
//! values, transforms them through pure reducers, and routes tagged actions
//! through a single [`store::Store`]. Fetching data and rendering it are the
//! embedding application's job; the store only records what it is told.

pub mod action;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;

pub use action::{Action, Slice};
pub use config::StoreConfig;
pub use error::ErrorCode;
pub use state::auth::{AuthState, User, UserType};
pub use state::tutorials::{Tutorial, TutorialsState};
pub use storage::{MemoryStorage, StorageError, TokenStorage};
pub use store::{RootState, Store};
