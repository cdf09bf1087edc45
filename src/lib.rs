//! Service plumbing around the [`ecloud_search`] answer engine: the
//! HTTP API, and shared logging initialisation for the binaries.

pub mod logging;
pub mod server;
