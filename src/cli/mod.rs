mod args;
mod parsers;
mod value_enum;

pub use args::{Args, Command, LumiColumns};
pub use parsers::{MomentumArg, SettingArg};
pub use value_enum::{CliMalformedLine, CliOutputFormat, CliUnknownCategory, CliUnmatchedRun};
