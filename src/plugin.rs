//! Top-level plugin entry point tying registry, TLS, and server together.

use std::sync::Arc;

use crate::config::PluginConfig;
use crate::error::Result;
use crate::grpc::GrpcServer;
use crate::job::JobDefinition;
use crate::registry::JobRegistry;
use crate::shutdown::install_shutdown_handler;
use crate::tls::TlsIdentity;

/// A plugin ready to serve: validated job registry plus listener
/// configuration.
pub struct Plugin {
    config: PluginConfig,
    registry: Arc<JobRegistry>,
}

impl Plugin {
    /// Build the job registry and read configuration from the environment.
    ///
    /// Duplicate job titles fail here, before any listener exists. An
    /// ambiguous registry could dispatch to the wrong handler, so there is
    /// no recovery path.
    pub fn new(jobs: Vec<JobDefinition>) -> Result<Self> {
        let registry = JobRegistry::build(jobs)?;
        tracing::info!(jobs = registry.len(), "Job registry built");

        Ok(Self {
            config: PluginConfig::from_env(),
            registry: Arc::new(registry),
        })
    }

    /// Replace the environment-derived configuration.
    pub fn with_config(mut self, config: PluginConfig) -> Self {
        self.config = config;
        self
    }

    /// Serve the plugin until SIGTERM or SIGINT.
    ///
    /// Loads the TLS identity, binds the listener, emits the stdout
    /// handshake, and blocks serving RPC traffic. This should be the last
    /// call in a plugin's main.
    pub async fn serve(self) -> Result<()> {
        let tls_identity = if self.config.tls.is_complete() {
            Some(TlsIdentity::load(&self.config.tls).await?)
        } else if self.config.tls.is_empty() {
            tracing::warn!("No TLS certificate paths configured, serving without mTLS");
            None
        } else {
            // Partial TLS configuration is a mistake, not a choice; surface
            // the missing piece instead of silently downgrading.
            Some(TlsIdentity::load(&self.config.tls).await?)
        };

        let shutdown = install_shutdown_handler();
        let bound = GrpcServer::new(self.config, self.registry, tls_identity)
            .bind()
            .await?;
        bound.serve(shutdown).await
    }
}

/// Build a plugin from job definitions and serve it until shutdown.
pub async fn serve(jobs: Vec<JobDefinition>) -> Result<()> {
    Plugin::new(jobs)?.serve().await
}
