//! coffee-repo: outbound storage adapters for the order ledger

pub mod memory;

pub use memory::InMemoryRepo;

/// Builds the ledger used by the running service. Orders live in process
/// memory only and start empty on every boot.
pub async fn build_repo() -> anyhow::Result<InMemoryRepo> {
    Ok(InMemoryRepo::new())
}
