pub mod http_probe;

pub use http_probe::{probe_url, transport_error_kind, ProbeOutcome};
