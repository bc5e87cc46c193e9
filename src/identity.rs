use std::io;
use std::net::SocketAddr;

use tokio::net::lookup_host;
use tracing::{debug, warn};

use crate::models::HostIdentity;

/// Resolve the local hostname and its primary IP address.
///
/// The OS hostname is looked up first, then resolved through the system
/// resolver the way `gethostbyname` would. Any failure along the way —
/// missing hostname, non-UTF-8 hostname, resolver error, empty answer —
/// degrades to hostname `"Unknown"` with the failure text in the IP field.
/// This call never returns an error: the endpoints consuming it answer 200
/// with best-effort data even through DNS hiccups.
pub async fn resolve() -> HostIdentity {
    match try_resolve().await {
        Ok(identity) => {
            debug!(
                hostname = %identity.hostname,
                ip_address = %identity.ip_address,
                "Resolved host identity"
            );
            identity
        }
        Err(err) => {
            warn!("Host identity resolution failed: {}", err);
            HostIdentity::degraded(err.to_string())
        }
    }
}

async fn try_resolve() -> io::Result<HostIdentity> {
    let hostname = hostname::get()?.into_string().map_err(|raw| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("hostname is not valid UTF-8: {:?}", raw),
        )
    })?;

    let ip_address = primary_ip(&hostname).await?;

    Ok(HostIdentity {
        hostname,
        ip_address,
    })
}

/// Resolve a hostname to its primary address, preferring IPv4 — the
/// original service resolved A records only, and Kubernetes pod DNS still
/// leads with IPv4 in dual-stack clusters.
async fn primary_ip(hostname: &str) -> io::Result<String> {
    let addrs: Vec<SocketAddr> = lookup_host((hostname, 0)).await?.collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(|addr| addr.ip().to_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no address found for {hostname}"),
            )
        })
}
