//! Load `KEY=VALUE` files into the environment and read typed values back.
//!
//! [`EnvParser`] owns both halves: [`EnvParser::load`] publishes a file's
//! entries, and the `get_*` methods resolve a key to a typed value, falling
//! back to a caller-supplied default when the key is unset, empty, or does
//! not parse. The free functions in this crate wrap a shared default parser.

pub mod env;
mod global;
pub mod notify;

pub use env::{
    EnvParser, EnvParserBuilder, EnvProvider, FromEnvStr, LoadError, LoadReport, MalformedKind,
    MemoryEnv, ProcessEnv, SplitPolicy, WriteError,
};
pub use global::{
    default_parser, get_bool, get_float32, get_float64, get_int, get_int32, get_int64, get_string,
    load,
};
pub use notify::{Level, NoopNotifier, Notifier, TracingNotifier};
