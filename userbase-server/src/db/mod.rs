//! Database layer - connection pool, store seam, and implementations
//!
//! - One process-wide pool shared by every request; no extra locking on top
//! - No retries or transactions; driver errors propagate unchanged

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryUserStore;
pub use pool::create_pool;
pub use repos::PgUserRepo;
pub use store::{StoreError, UserStore};
