//! Record storage subsystem
//!
//! The query pipeline never touches storage directly; it is handed the
//! records a [`RecordStore`] loaded. Which store backs a process is chosen
//! once at startup from configuration:
//!
//! - [`MemoryStore`]: ephemeral, insertion-ordered, used for mock mode
//! - [`RemoteStore`]: thin client over the hosted REST backend

mod backend;
mod errors;
mod memory;
mod remote;

pub use backend::RecordStore;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use remote::RemoteStore;
