//! Read-only configuration lookup from the ambient environment.
//!
//! The manager injects these variables into the agent's environment when
//! it provisions the host; the agent only ever reads them.

use crate::error::{Error, Result};

/// Address of the manager inside the management network
pub const MANAGER_HOST_KEY: &str = "MANAGER_HOST";
/// Port the manager REST service listens on
pub const MANAGER_REST_PORT_KEY: &str = "MANAGER_REST_PORT";
/// Base url of the manager file server
pub const MANAGER_FILE_SERVER_URL_KEY: &str = "MANAGER_FILE_SERVER_URL";
/// Name of the agent running the operation
pub const AGENT_NAME_KEY: &str = "AGENT_NAME";
/// Process-management flavor supervising the agent
pub const AGENT_PROCESS_MANAGEMENT_KEY: &str = "AGENT_PROCESS_MANAGEMENT";

/// Address of the manager inside the management network
pub fn manager_host() -> Result<String> {
    lookup(MANAGER_HOST_KEY)
}

/// Port the manager REST service listens on
pub fn manager_rest_port() -> Result<u16> {
    parse_port(MANAGER_REST_PORT_KEY, lookup(MANAGER_REST_PORT_KEY)?)
}

/// Base url of the manager file server
pub fn manager_file_server_url() -> Result<String> {
    lookup(MANAGER_FILE_SERVER_URL_KEY)
}

/// Name of the agent running the operation
pub fn agent_name() -> Result<String> {
    lookup(AGENT_NAME_KEY)
}

/// Process-management flavor supervising the agent
pub fn agent_process_management() -> Result<String> {
    lookup(AGENT_PROCESS_MANAGEMENT_KEY)
}

fn lookup(key: &'static str) -> Result<String> {
    std::env::var(key).map_err(|_| Error::MissingEnv { key })
}

fn parse_port(key: &'static str, value: String) -> Result<u16> {
    value
        .parse()
        .map_err(|_| Error::InvalidEnv { key, value })
}
