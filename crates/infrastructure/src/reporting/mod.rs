//! Reporter adapters: human-readable console output and a JSON summary.

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
