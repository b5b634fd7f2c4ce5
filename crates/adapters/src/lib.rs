//! # msglog-adapters
//!
//! Implementations of the resolver, renderer, sink, and clock ports.
//! This crate depends on `ports`, `domain`, and `shared`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod clock;
/// Duration, details, and errors resolvers.
pub mod fields;
pub mod level;
pub mod log_sink;
/// Record renderers.
pub mod render;
pub mod status;
/// Text and id resolvers.
pub mod text;

pub use clock::SystemClock;
pub use fields::{JsonErrorsResolver, KeyedDetailsResolver, MicrosDurationResolver, embedded_json};
pub use level::{RangeLevelResolver, StaticLevelResolver, StatusLevelResolver};
pub use log_sink::{StderrLogSink, StdoutLogSink, terminate_process};
pub use render::{JsonRenderer, TerseRenderer};
pub use status::{
    DomainCodeStatusResolver, IdStatusResolver, IdStatusTable, NullStatusResolver,
    RangeStatusResolver,
};
pub use text::{DefaultIdResolver, NullTextResolver, TemplatedIdResolver, TemplatedTextResolver};

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use msglog_ports::ports_crate_version;
    use msglog_shared::shared_crate_version;

    fn workspace_deps() -> Vec<String> {
        let cargo_toml = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let mut deps = Vec::new();
        let mut in_deps = false;
        let mut in_dev_deps = false;

        for raw_line in cargo_toml.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                in_deps = line == "[dependencies]";
                in_dev_deps = line == "[dev-dependencies]";
                continue;
            }
            if !(in_deps || in_dev_deps) {
                continue;
            }
            if line.starts_with("msglog-") {
                let key = line.split('=').next().unwrap_or("").trim();
                let name = key.split('.').next().unwrap_or("").trim();
                deps.push(name.to_string());
            }
        }

        deps
    }

    #[test]
    fn adapters_do_not_depend_on_app_config_or_facade() {
        let deps = workspace_deps();
        let forbidden = ["msglog-app", "msglog-config", "msglog-facade"];

        for dep in &deps {
            assert!(
                !forbidden.contains(&dep.as_str()),
                "forbidden dependency found: {dep}"
            );
        }
    }

    #[test]
    fn adapters_crate_compiles() {
        let version = adapters_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn adapters_can_use_ports_and_shared() {
        assert!(!ports_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
