use ferrous_dyndns_infrastructure::dns::DnsMessageHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

const MAX_DATAGRAM: usize = 65_535;

/// Serve UDP until `shutdown` resolves. Every datagram is handled on its own
/// task.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsMessageHandler,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let socket = Arc::new(create_udp_socket(bind_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %bind_addr, "DNS server ready");

    tokio::pin!(shutdown);
    let mut recv_buf = vec![0u8; MAX_DATAGRAM];

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested, DNS server stopping");
                return Ok(());
            }
            received = socket.recv_from(&mut recv_buf) => {
                let (n, from) = match received {
                    Ok(r) => r,
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                        continue;
                    }
                };

                let datagram: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                let handler = handler.clone();
                let socket = socket.clone();
                tokio::spawn(async move {
                    if let Some(reply) = handler.handle(&datagram, from).await {
                        if let Err(e) = socket.send_to(&reply, from).await {
                            debug!(client = %from, error = %e, "Failed to send reply");
                        }
                    }
                });
            }
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
