// Adapters layer: concrete implementations of the ports for the outside
// world (the Noroff HTTP API, the on-disk session file).

pub mod api;
pub mod session;
