pub mod plugin_service;
pub mod server;

pub use plugin_service::PluginService;
pub use server::GrpcServer;
