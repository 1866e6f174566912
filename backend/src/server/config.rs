//! HTTP server configuration object.

use std::net::SocketAddr;

use zeroize::Zeroizing;

use crate::outbound::persistence::DbPool;

/// Everything the server needs to start: where to listen, the token signing
/// secret, and the database pool the persistence adapters draw from.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token_secret: Zeroizing<Vec<u8>>,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token_secret: Vec<u8>, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            token_secret: Zeroizing::new(token_secret),
            db_pool,
        }
    }
}
