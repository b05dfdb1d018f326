use std::net::SocketAddrV4;
use std::path::PathBuf;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// Directory holding `responses.json` and `drinks.json`.
    pub data_dir: PathBuf,
    /// Fixed pre-payment subtracted from each adult's balance.
    pub deposit: f64,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, data_dir: PathBuf, deposit: f64) -> Self {
        Self {
            addr,
            data_dir,
            deposit,
        }
    }
}
