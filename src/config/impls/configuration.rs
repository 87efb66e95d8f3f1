use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use std::time::Duration;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::structs::Cli;

/// Reload interval of the HTTPS server binary, shorter than the one-day library default.
pub const DEFAULT_RENEW_SECONDS: u64 = 60;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            bind_address: String::from("0.0.0.0:443"),
            threads: Some(available_parallelism().map(|n| n.get() as u64).unwrap_or(1)),
            keep_alive: Some(60),
            request_timeout: Some(15),
            disconnect_timeout: Some(15),
            ssl_cert: String::from("./cert.pem"),
            ssl_key: String::from("./key.pem"),
            reload_interval: Some(DEFAULT_RENEW_SECONDS),
            verbose: false
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Reads `path`; when it is missing or corrupt and `create` is set, writes the defaults
    /// there and still returns an error so the caller stops and lets the operator edit it.
    pub fn load_from_file(create: bool, path: &str) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };
        Ok(config)
    }

    /// Command line flags win over the file.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(cert) = &args.cert {
            self.ssl_cert = cert.clone();
        }
        if let Some(key) = &args.key {
            self.ssl_key = key.clone();
        }
        if let Some(renew) = args.renew {
            self.reload_interval = Some(renew);
        }
        if let Some(address) = &args.address {
            self.bind_address = address.clone();
        }
        if args.verbose {
            self.verbose = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !matches!(self.log_level.as_str(), "off" | "trace" | "debug" | "info" | "warn" | "error") {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("bind_address '{}' is not a socket address", self.bind_address)));
        }
        if self.ssl_cert.is_empty() || self.ssl_key.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("ssl_cert and ssl_key must both be set")));
        }
        if self.threads == Some(0) {
            return Err(ConfigurationError::ValidationError(String::from("threads must be greater than 0")));
        }
        Ok(())
    }

    pub fn reload_interval_duration(&self) -> Duration {
        Duration::from_secs(self.reload_interval.unwrap_or(DEFAULT_RENEW_SECONDS))
    }
}
