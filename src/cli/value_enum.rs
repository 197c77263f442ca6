use clap::ValueEnum;
use cut_check_domain::{MalformedLinePolicy, UnknownCategoryPolicy, UnmatchedRunPolicy};

use crate::presentation::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    Yaml,
}

/// 範囲外のラン番号の扱い
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliUnmatchedRun {
    /// 参照をそのまま残す（debug ログのみ）
    Pass,
    /// 参照をそのまま残し警告を出す
    Warn,
    /// エラーとして中断
    Fail,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliMalformedLine {
    Skip,
    Fail,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliUnknownCategory {
    Ignore,
    Fail,
}

// CLI -> domain enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CliOutputFormat, OutputFormat, Text, Json, Yaml);
map_enum!(CliUnmatchedRun, UnmatchedRunPolicy, Pass, Warn, Fail);
map_enum!(CliMalformedLine, MalformedLinePolicy, Skip, Fail);
map_enum!(CliUnknownCategory, UnknownCategoryPolicy, Ignore, Fail);
