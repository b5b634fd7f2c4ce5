//! # msglog-app
//!
//! Message composition: gate, resolve, assemble, render, write.
//! This crate depends on `ports`, `domain`, and `shared`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod assemble;
pub mod gate;
pub mod leveled;
pub mod logger;
pub mod stamps;

pub use assemble::{RecordParts, assemble_record};
pub use gate::LevelGate;
pub use leveled::LeveledLogger;
pub use logger::{
    Composed, LoggedError, LoggerStrategies, MessageLogger, MessageLoggerDeps, SINK_CALL_DEPTH,
};
pub use stamps::{RecordStamps, format_date, format_location, format_time};

/// Returns the app crate version.
#[must_use]
pub const fn app_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use msglog_domain::domain_crate_version;
    use msglog_ports::ports_crate_version;
    use msglog_shared::shared_crate_version;

    fn workspace_deps() -> Vec<String> {
        let cargo_toml = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let mut deps = Vec::new();
        let mut in_deps = false;

        for raw_line in cargo_toml.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                in_deps = line == "[dependencies]";
                continue;
            }
            if in_deps && line.starts_with("msglog-") {
                let key = line.split('=').next().unwrap_or("").trim();
                let name = key.split('.').next().unwrap_or("").trim();
                deps.push(name.to_string());
            }
        }

        deps
    }

    #[test]
    fn app_depends_only_on_inner_layers() {
        let deps = workspace_deps();
        let forbidden = ["msglog-adapters", "msglog-config", "msglog-facade"];

        for dep in &deps {
            assert!(
                !forbidden.contains(&dep.as_str()),
                "forbidden dependency found: {dep}"
            );
        }
    }

    #[test]
    fn app_crate_compiles() {
        let version = app_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn app_can_use_ports_domain_shared() {
        let ports_version = ports_crate_version();
        let domain_version = domain_crate_version();
        let shared_version = shared_crate_version();

        assert!(!ports_version.is_empty());
        assert!(!domain_version.is_empty());
        assert!(!shared_version.is_empty());
    }
}
