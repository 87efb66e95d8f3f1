use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Certificate file path, overrides `ssl_cert`.
    #[arg(long)]
    pub cert: Option<String>,
    /// Key file path, overrides `ssl_key`.
    #[arg(long)]
    pub key: Option<String>,
    /// Certificate reload interval in seconds (default 60), overrides `reload_interval`.
    #[arg(long)]
    pub renew: Option<u64>,
    /// Log every reload decision.
    #[arg(short, long)]
    pub verbose: bool,
    /// Listen address, overrides `bind_address`.
    #[arg(long)]
    pub address: Option<String>,

    /// Generate a self-signed key and certificate file, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String,
}
