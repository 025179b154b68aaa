//! Error types, one per stage of a run.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while loading credentials or preparing the HTTP client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failure while opening a ZVM session.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("login rejected: {status} - {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("session token not found in response headers")]
    MissingToken,
}

/// Failure while fetching or decoding the VPG list.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("no session token, login first")]
    NotAuthenticated,

    #[error("VPG request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("VPG request returned {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("error decoding VPG list: {0}")]
    Decode(#[source] reqwest::Error),
}
