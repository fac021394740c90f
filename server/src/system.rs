use serde::Serialize;
use sysinfo::System;

/// Version of the compiler this binary was built with, captured by `build.rs`.
pub const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

#[derive(Debug, Clone, Serialize)]
pub struct SystemFacts {
    pub hostname: String,
    pub platform: &'static str,
    pub architecture: &'static str,
    pub cpu_count: usize,

    // field name kept for wire compatibility with existing consumers
    #[serde(rename = "go_version")]
    pub runtime_version: &'static str,

    pub operating_system: String,
}

impl SystemFacts {
    /// Read fresh on every call. Lookup failures degrade to empty or
    /// default values, never to an error.
    pub fn collect() -> Self {
        let platform = std::env::consts::OS;

        Self {
            hostname: System::host_name().unwrap_or_else(|| {
                tracing::warn!("unable to resolve host name");
                String::new()
            }),
            platform,
            architecture: std::env::consts::ARCH,
            cpu_count: num_cpus::get(),
            runtime_version: RUNTIME_VERSION,
            operating_system: System::name().unwrap_or_else(|| platform.to_string()),
        }
    }
}
