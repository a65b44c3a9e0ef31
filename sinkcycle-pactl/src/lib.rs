//! Sinkcycle pactl layer
//!
//! Thin wrapper around the `pactl` command-line interface of the audio
//! server (PipeWire via pipewire-pulse, or PulseAudio proper). Provides
//! sink enumeration, default-sink lookup and default-sink switching as
//! blocking subprocess calls.
//!
//! ## Architecture
//!
//! ```text
//! PactlClient
//!   │
//!   ├─> CommandRunner (injectable subprocess seam)
//!   │     └─> SystemRunner -> std::process::Command
//!   │
//!   └─> sinks::decode_sink_list -> Vec<Sink>
//! ```
//!
//! All invocations and their results are traced; no state is kept between
//! calls.

pub mod client;
pub mod error;
pub mod runner;
pub mod sinks;

pub use client::PactlClient;
pub use error::{PactlError, Result};
pub use runner::{CommandRunner, SystemRunner};
pub use sinks::Sink;

/// Default binary name used to reach the audio server.
pub const DEFAULT_PACTL_BIN: &str = "pactl";
