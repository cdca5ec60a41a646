use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("duplicate job: at least two jobs share the title {0:?}")]
    DuplicateJob(String),

    #[error("TLS error: {0}")]
    Tls(#[from] crate::tls::TlsError),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Reflection error: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PluginError>;
