use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub bind_address: String,
    pub threads: Option<u64>,
    pub keep_alive: Option<u64>,
    pub request_timeout: Option<u64>,
    pub disconnect_timeout: Option<u64>,
    pub ssl_cert: String,
    pub ssl_key: String,
    pub reload_interval: Option<u64>,
    pub verbose: bool
}
