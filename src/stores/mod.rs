//! Storage layer for the payment dashboard. Provides storage for:
//! - Staff accounts keyed by email ([`UsersStore`])
//! - The payment ledger keyed by payment id ([`PaymentsStore`])
//!
//! Both tables sit behind one reader/writer lock in [`MemoryStore`], which is
//! the type the rest of the crate shares. Nothing is persisted; the demo
//! data set is built in [`seed`].

mod memory;
mod payments;
pub mod seed;
mod users;

pub use memory::MemoryStore;
pub use payments::PaymentsStore;
pub use users::UsersStore;
