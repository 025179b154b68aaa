// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses flags and uses these modules to compute the average
// RPO reported by a Zerto Virtual Manager.
//
// Module responsibilities:
// - `config`: Loads the ZVM credentials file.
// - `api`: Encapsulates HTTP interactions with the ZVM (session login and
//   VPG listing) and holds the session token.
// - `rpo`: VPG record shape and the averaging reduction.
// - `ui`: Terminal flow (spinner, login -> query -> average).
// - `error`: Typed errors for each stage.
pub mod api;
pub mod config;
pub mod error;
pub mod rpo;
pub mod ui;
