//! Server configuration.
//!
//! Every option can come from the command line or from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Command line and environment configuration of the server
#[derive(Debug, Clone, Parser)]
#[command(name = "lodging-server", version, about = "Hotel listing server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "LODGING_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "LODGING_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LODGING_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        // テスト項目: 引数なしではデフォルト値が使われる
        // when (操作):
        let config = ServerConfig::try_parse_from(["lodging-server"]).unwrap();

        // then (期待する結果):
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_arguments() {
        // テスト項目: コマンドライン引数で上書きできる
        let config = ServerConfig::try_parse_from([
            "lodging-server",
            "--host",
            "0.0.0.0",
            "-p",
            "3000",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_rejects_invalid_port() {
        // テスト項目: 不正なポート番号はエラー
        let result = ServerConfig::try_parse_from(["lodging-server", "--port", "70000"]);

        assert!(result.is_err());
    }
}
