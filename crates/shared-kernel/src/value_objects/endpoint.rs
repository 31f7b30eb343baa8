// crates/shared-kernel/src/value_objects/endpoint.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Login used for the remote transfer server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self { user: user.into(), password: password.into() }
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("user", &self.user).field("password", &"***").finish()
    }
}

/// Remote transfer endpoint: address, login and optional base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
    /// Directory on the server that uploads are placed under.
    pub remote_dir: Option<String>,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16, credentials: Credentials) -> Self {
        Self { host: host.into(), port, credentials, remote_dir: None }
    }

    #[must_use]
    pub fn with_remote_dir(mut self, dir: impl Into<String>) -> Self {
        let dir = dir.into();
        let trimmed = dir.trim_matches('/');
        self.remote_dir = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
        self
    }

    pub fn address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Remote name for a `/`-separated relative path.
    pub fn remote_name(&self, relative: &str) -> String {
        match &self.remote_dir {
            Some(dir) => format!("{dir}/{relative}"),
            None => relative.to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
