use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::server::Router;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tonic_health::ServingStatus;

use crate::config::PluginConfig;
use crate::error::Result;
use crate::grpc::plugin_service::PluginService;
use crate::handshake;
use crate::proto::plugin_server::PluginServer;
use crate::registry::JobRegistry;
use crate::tls::TlsIdentity;

/// Service name the host probes on the standard health service.
const HEALTH_SERVICE: &str = "plugin";

pub struct GrpcServer {
    config: PluginConfig,
    registry: Arc<JobRegistry>,
    tls_identity: Option<TlsIdentity>,
}

impl GrpcServer {
    pub fn new(
        config: PluginConfig,
        registry: Arc<JobRegistry>,
        tls_identity: Option<TlsIdentity>,
    ) -> Self {
        Self {
            config,
            registry,
            tls_identity,
        }
    }

    /// Bind the listener and assemble the service stack.
    ///
    /// Registers the health service (already SERVING, since the registry is
    /// validated before this point), the reflection service, and the job
    /// dispatch service. The handshake is not emitted yet; the caller decides
    /// when to announce via [`BoundServer::serve`].
    pub async fn bind(self) -> Result<BoundServer> {
        let listener = TcpListener::bind(self.config.listen_addr).await?;
        let local_addr = listener.local_addr()?;

        let (mut reporter, health_service) = health_reporter();
        reporter
            .set_service_status(HEALTH_SERVICE, ServingStatus::Serving)
            .await;

        let reflection_service = tonic_reflection::server::Builder::configure()
            .register_encoded_file_descriptor_set(crate::proto::FILE_DESCRIPTOR_SET)
            .build_v1()?;

        let mut builder = Server::builder();
        if let Some(ref tls_identity) = self.tls_identity {
            builder = builder.tls_config(tls_identity.server_tls_config())?;
        }

        let router = builder
            .add_service(health_service)
            .add_service(reflection_service)
            .add_service(PluginServer::new(PluginService::new(self.registry)));

        tracing::info!(
            addr = %local_addr,
            tls = self.tls_identity.is_some(),
            "Plugin listener bound"
        );

        Ok(BoundServer {
            listener,
            router,
            local_addr,
        })
    }
}

/// A bound, not yet announced plugin server.
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
    local_addr: SocketAddr,
}

impl BoundServer {
    /// The actual bound address, with the dynamically assigned port resolved.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Announce the bound address on stdout and serve until the shutdown
    /// token is cancelled. In-flight calls drain before the listener is
    /// released.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<()> {
        // The host blocks on stdout until it sees this line, so it must come
        // after the listener is bound and before anything else is printed.
        handshake::emit(&self.local_addr)?;

        self.router
            .serve_with_incoming_shutdown(
                TcpListenerStream::new(self.listener),
                shutdown.cancelled_owned(),
            )
            .await?;

        tracing::info!("Plugin server stopped");
        Ok(())
    }
}
