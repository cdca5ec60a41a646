pub mod config;
pub mod error;
pub mod grpc;
pub mod handshake;
pub mod hash;
pub mod job;
pub mod plugin;
pub mod registry;
pub mod shutdown;
pub mod tls;

// Re-export generated protobuf types
pub mod proto {
    tonic::include_proto!("plugin");

    /// Compiled descriptor set, served by the reflection service.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("plugin_descriptor");
}
