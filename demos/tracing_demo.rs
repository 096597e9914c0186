//! Logging Example
//!
//! Routes the crate's log channels through a `tracing` subscriber and shows
//! how channel switches and decoration affect the output.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use flagwater::flags::query;
use flagwater::log::{self, Channel, Level};

const ONLINE: u8 = 0b0001;
const DEGRADED: u8 = 0b0010;
const FAILED: u8 = 0b0100;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    log::configure(|state| {
        state.warning = Channel::new().with_prefix("[health] ");
        state.error = Channel::new().with_prefix("[health] ").with_suffix(" (paging)");
    });

    for (name, status) in [("db", ONLINE), ("cache", ONLINE | DEGRADED), ("queue", FAILED)] {
        report(name, status);
    }

    log::info("silencing warnings");
    log::configure(|state| state.channel_mut(Level::Warning).enabled = false);
    report("cache", ONLINE | DEGRADED);
}

fn report(name: &str, status: u8) {
    log::debug_fmt("checking % (status %)", &[&name, &status]);

    if !query(status).has(ONLINE) {
        log::error_fmt("% is down", &[&name]);
    } else if query(status).has(DEGRADED).is_good() {
        log::warning_fmt("% is degraded", &[&name]);
    } else {
        log::info_fmt("% is healthy", &[&name]);
    }
}
