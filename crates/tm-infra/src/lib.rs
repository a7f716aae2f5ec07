//! Infrastructure adapters: the snapshot backend over HTTP, the fog
//! container codec and address-bar persistence.

pub mod codec;
pub mod http;
pub mod location;

pub use codec::{encode_fog_container, FogContainerDecoder};
pub use http::TimeMachineHttpApi;
pub use location::{FileLocationStore, InMemoryLocation};
