// healthsplit CLI
//
// Reports arrive as one file with every host's output concatenated:
// metadata lines (`--- Host:`, `--- Date:`, `--- UUID`), section headers
// (`Filesystem`, `--- FAILED SERVICES ---`, ...) and content. The engine
// crate segments that stream; this crate only resolves settings, writes one
// table file per category and reports what happened.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod output;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
