// Simulated network and library-synthesis subsystem.

/// Fixed payload returned by every simulated fetch.
pub const FETCH_PAYLOAD: &str = "<html>eMo Unified System (Native Mode)</html>";

/// Fixed token returned by every simulated absorption.
pub const ABSORB_TOKEN: &str = "binary_absorbed_data";

/// Network-facing operations consumed by generated programs.
///
/// The shipped implementation is [`SimulatedNetwork`]; a real client can be
/// substituted behind the same contract without touching the rest of the
/// runtime.
pub trait Network {
    /// Retrieve the resource at `url`. Always succeeds.
    fn fetch(&mut self, url: &str) -> String;

    /// Pull remote knowledge from `url` into an opaque token. Always
    /// succeeds.
    fn absorb(&mut self, url: &str) -> String;

    /// Announce synthesis of a native library named `name` from `source`.
    /// Always succeeds.
    fn synthesize_library(&mut self, name: &str, source: &str);
}

/// Network simulation: no I/O is performed, responses are fixed.
#[derive(Debug, Default)]
pub struct SimulatedNetwork;

impl Network for SimulatedNetwork {
    fn fetch(&mut self, url: &str) -> String {
        println!("[NET] Fetching {}...", url);
        FETCH_PAYLOAD.to_string()
    }

    fn absorb(&mut self, url: &str) -> String {
        println!("[VOID] Native absorption from {}...", url);
        ABSORB_TOKEN.to_string()
    }

    fn synthesize_library(&mut self, name: &str, _source: &str) {
        println!("[VOID] Native synthesis of library: {}", name);
    }
}

/// Fetch `url` through the default simulation.
pub fn fetch(url: &str) -> String {
    SimulatedNetwork.fetch(url)
}

/// Absorb from `url` through the default simulation.
pub fn absorb(url: &str) -> String {
    SimulatedNetwork.absorb(url)
}

/// Synthesize a library through the default simulation.
pub fn synthesize_library(name: &str, source: &str) {
    SimulatedNetwork.synthesize_library(name, source)
}
