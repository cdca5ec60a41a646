use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the certificate chain presented to the host.
pub const CERT_ENV: &str = "GAIA_PLUGIN_CERT";

/// Environment variable naming the private key matching the certificate.
pub const KEY_ENV: &str = "GAIA_PLUGIN_KEY";

/// Environment variable naming the CA certificate host certificates are
/// verified against.
pub const CA_CERT_ENV: &str = "GAIA_PLUGIN_CA_CERT";

/// TLS configuration for the plugin listener.
///
/// When all paths are set, the listener uses mutual TLS (mTLS): the plugin
/// presents its certificate and requires the host to present one signed by
/// the shared CA.
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Path to the plugin certificate (PEM format).
    pub cert_path: Option<PathBuf>,

    /// Path to the plugin's private key (PEM format). Must match the
    /// certificate.
    pub key_path: Option<PathBuf>,

    /// Path to the CA certificate (PEM format). Used to verify the host.
    pub ca_cert_path: Option<PathBuf>,
}

impl TlsConfig {
    /// Read certificate paths from the environment. Done once at startup;
    /// the serving core never touches the environment afterwards.
    pub fn from_env() -> Self {
        Self {
            cert_path: std::env::var_os(CERT_ENV).map(PathBuf::from),
            key_path: std::env::var_os(KEY_ENV).map(PathBuf::from),
            ca_cert_path: std::env::var_os(CA_CERT_ENV).map(PathBuf::from),
        }
    }

    /// Check if TLS is fully configured with all required paths.
    pub fn is_complete(&self) -> bool {
        self.cert_path.is_some() && self.key_path.is_some() && self.ca_cert_path.is_some()
    }

    /// True when no TLS path is configured at all.
    pub fn is_empty(&self) -> bool {
        self.cert_path.is_none() && self.key_path.is_none() && self.ca_cert_path.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Address the gRPC listener binds. Port 0 requests a dynamic port; the
    /// actual bound address is announced in the handshake line.
    pub listen_addr: SocketAddr,
    pub tls: TlsConfig,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            // SAFETY: This is a hardcoded valid address that will always parse
            listen_addr: "127.0.0.1:0"
                .parse()
                .expect("default listen address is valid"),
            tls: TlsConfig::default(),
        }
    }
}

impl PluginConfig {
    /// Default listen address plus TLS paths from the environment.
    pub fn from_env() -> Self {
        Self {
            tls: TlsConfig::from_env(),
            ..Default::default()
        }
    }

    pub fn with_listen_addr(mut self, addr: SocketAddr) -> Self {
        self.listen_addr = addr;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_config_default() {
        let cfg = TlsConfig::default();
        assert!(cfg.cert_path.is_none());
        assert!(cfg.key_path.is_none());
        assert!(cfg.ca_cert_path.is_none());
        assert!(cfg.is_empty());
        assert!(!cfg.is_complete());
    }

    #[test]
    fn tls_config_is_complete_when_all_paths_set() {
        let cfg = TlsConfig {
            cert_path: Some(PathBuf::from("/cert.pem")),
            key_path: Some(PathBuf::from("/key.pem")),
            ca_cert_path: Some(PathBuf::from("/ca.pem")),
        };
        assert!(cfg.is_complete());
        assert!(!cfg.is_empty());
    }

    #[test]
    fn tls_config_is_not_complete_when_path_missing() {
        let base = TlsConfig {
            cert_path: Some(PathBuf::from("/cert.pem")),
            key_path: Some(PathBuf::from("/key.pem")),
            ca_cert_path: Some(PathBuf::from("/ca.pem")),
        };

        let mut cfg = base.clone();
        cfg.cert_path = None;
        assert!(!cfg.is_complete());
        assert!(!cfg.is_empty());

        let mut cfg = base.clone();
        cfg.key_path = None;
        assert!(!cfg.is_complete());

        let mut cfg = base;
        cfg.ca_cert_path = None;
        assert!(!cfg.is_complete());
    }

    #[test]
    fn plugin_config_default() {
        let cfg = PluginConfig::default();
        assert_eq!(cfg.listen_addr.to_string(), "127.0.0.1:0");
        assert!(cfg.tls.is_empty());
    }

    #[test]
    fn plugin_config_with_listen_addr() {
        let addr: SocketAddr = "0.0.0.0:9000".parse().unwrap();
        let cfg = PluginConfig::default().with_listen_addr(addr);
        assert_eq!(cfg.listen_addr, addr);
    }
}
