use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use certreloader::common::common::setup_logging;
use certreloader::config::structs::configuration::Configuration;
use certreloader::http::http::https_service;
use certreloader::ssl::ssl::{create_certificate_reloader, generate_self_signed};
use certreloader::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = if args.create_selfsigned {
        Configuration::init()
    } else {
        match Configuration::load_from_file(args.create_config, &args.config) {
            Ok(config) => config,
            Err(_) => exit(101)
        }
    };
    config.apply_cli(&args);

    println!("[VALIDATE] Validating configuration...");
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE] {error}");
        exit(101);
    }
    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }
    let config = Arc::new(config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        match generate_self_signed(&args.selfsigned_domain, &args.selfsigned_certfile, &args.selfsigned_keyfile) {
            Ok(_) => {
                info!("[CERTGEN] The files {} and {} has been generated, use them only for development reasons", args.selfsigned_keyfile, args.selfsigned_certfile);
                exit(0);
            }
            Err(error) => {
                error!("[CERTGEN] {error}");
                exit(1);
            }
        }
    }

    let reloader = match create_certificate_reloader(&config.ssl_cert, &config.ssl_key) {
        Ok(reloader) => reloader,
        Err(error) => {
            error!("[CERTRELOADER] Could not load keypair: {error}");
            exit(1);
        }
    };
    reloader
        .with_reload_interval(config.reload_interval_duration())
        .set_verbose(config.verbose);
    info!("[CERTRELOADER] Loaded {} (reload interval {:?})", config.ssl_cert, reloader.reload_interval());

    let address: SocketAddr = match config.bind_address.parse() {
        Ok(address) => address,
        Err(error) => {
            error!("[BOOT] Invalid bind address {}: {error}", config.bind_address);
            exit(1);
        }
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (handle, server) = match https_service(address, reloader, config.clone()) {
                Ok(service) => service,
                Err(error) => {
                    error!("[HTTPS] {error}");
                    exit(1);
                }
            };
            let shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let server_task = tokio::spawn(server);
            let shutdown_task = tokio::spawn(async move {
                shutdown.handle().await;
                info!("[BOOT] Shutting down HTTPS server...");
                handle.stop(true).await;
            });

            match server_task.await {
                Ok(Ok(_)) => info!("[HTTPS] Server stopped"),
                Ok(Err(error)) => error!("[HTTPS] Server stopped with an error: {error}"),
                Err(error) => error!("[HTTPS] Server task failed: {error}")
            }
            shutdown_task.abort();

            info!("[BOOT] Server shutting down completed");
            Ok(())
        })
}
