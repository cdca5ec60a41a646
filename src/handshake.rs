//! Connection handshake emitted on stdout.
//!
//! The host blocks reading the plugin's stdout until it sees a single
//! pipe-delimited line announcing where to connect. That line is the entire
//! discovery contract: it must be written exactly once, only after the
//! listener is bound, and nothing else may be written to stdout before it.
//! All diagnostics go to stderr.

use std::io::Write;
use std::net::SocketAddr;

/// Core protocol version. Do not change unless you know what you do.
pub const CORE_PROTOCOL_VERSION: u32 = 1;

/// Protocol version. Do not change unless you know what you do.
pub const PROTOCOL_VERSION: u32 = 2;

/// Transport the host connects over.
pub const PROTOCOL_NAME: &str = "tcp";

/// RPC flavor served on the announced address.
pub const PROTOCOL_TYPE: &str = "grpc";

/// Format the handshake line for an already-bound listener address.
pub fn connect_line(addr: &SocketAddr) -> String {
    format!(
        "{}|{}|{}|{}|{}\n",
        CORE_PROTOCOL_VERSION, PROTOCOL_VERSION, PROTOCOL_NAME, addr, PROTOCOL_TYPE
    )
}

/// Write the handshake line to stdout in a single write and flush it.
pub fn emit(addr: &SocketAddr) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(connect_line(addr).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_line_is_exact() {
        let addr: SocketAddr = "127.0.0.1:54321".parse().unwrap();
        assert_eq!(connect_line(&addr), "1|2|tcp|127.0.0.1:54321|grpc\n");
    }

    #[test]
    fn connect_line_varies_only_by_address() {
        let a: SocketAddr = "127.0.0.1:1".parse().unwrap();
        let b: SocketAddr = "127.0.0.1:2".parse().unwrap();
        assert_eq!(connect_line(&a), "1|2|tcp|127.0.0.1:1|grpc\n");
        assert_eq!(connect_line(&b), "1|2|tcp|127.0.0.1:2|grpc\n");
    }
}
