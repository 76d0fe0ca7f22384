use clap::Parser;
use ferrous_dyndns_application::ports::RecordStore;
use ferrous_dyndns_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "ferrous-dyndns")]
#[command(version)]
#[command(about = "Ferrous DynDNS - authoritative DNS server with RFC 2136 dynamic updates")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP port to listen on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Record database path
    #[arg(long, value_name = "FILE")]
    db_path: Option<String>,

    /// TSIG key as keyname:base64secret
    #[arg(long, value_name = "NAME:SECRET")]
    tsig: Option<String>,

    /// Log file (stderr when unset)
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the process id to this file
    #[arg(long, value_name = "FILE")]
    pid_file: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind_address: self.bind.clone(),
            pid_file: self.pid_file.clone(),
            database_path: self.db_path.clone(),
            tsig_key: self.tsig.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config)?;

    info!("Starting Ferrous DynDNS v{}", env!("CARGO_PKG_VERSION"));

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.port);

    let repos = di::Repositories::new(&config.database).await?;
    let use_cases = di::UseCases::new(&repos);
    let dns_services = di::DnsServices::new(&config, &use_cases)?;

    let pid_file = bootstrap::PidFile::create(config.server.pid_file.as_deref())?;

    let result =
        server::start_dns_server(dns_addr, dns_services.handler, bootstrap::shutdown_signal())
            .await;

    if let Err(e) = &result {
        error!(error = %e, "DNS server error");
    }

    repos.record_store.close().await;
    if let Some(pid_file) = pid_file {
        pid_file.remove();
    }

    info!("Server shutdown complete");
    result
}
