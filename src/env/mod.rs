//! Loading env files and reading typed values.

mod builder;
mod coerce;
mod error;
mod line;
mod parser;
mod provider;

pub use builder::EnvParserBuilder;
pub use coerce::{parse_bool, FromEnvStr};
pub use error::{LoadError, MalformedKind, WriteError};
pub use line::{parse_line, SplitPolicy};
pub use parser::{EnvParser, LoadReport};
pub use provider::{EnvProvider, MemoryEnv, ProcessEnv};
