mod fog_container;

pub use fog_container::{
    encode_fog_container, FogContainerDecoder, FOG_CONTAINER_MAGIC, FOG_CONTAINER_VERSION,
};
