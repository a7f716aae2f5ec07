//! Address-bar persistence adapters.

mod file_location;
mod memory_location;

pub use file_location::FileLocationStore;
pub use memory_location::InMemoryLocation;
