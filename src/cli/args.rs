// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use cut_check_shared_kernel::RunNumber;
use cut_check_usecase::YieldColumns;
use log::LevelFilter;

use super::{
    parsers::{MomentumArg, SettingArg},
    value_enum::{CliMalformedLine, CliOutputFormat, CliUnknownCategory, CliUnmatchedRun},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "cut_check",
    version = crate::VERSION,
    about = "解析カット定義の展開とラン番号別パラメータ置換ツール",
    long_about = "ランタイプのカット定義を一般カットファイルから展開し、\
                  --run 指定時はパラメータ表 (Run_Start/Run_End) の値で置換します。\
                  サブコマンド省略時は対話モードで起動します。"
)]
pub struct Args {
    /// テーブル定義ファイル (YAML/JSON)。--util-path より優先
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help_heading = "テーブル")]
    pub tables: Option<PathBuf>,

    /// 解析ツリーのルート（DB/CUTS, DB/PARAM を含むディレクトリ）
    #[arg(long, global = true, env = "UTILPATH", value_hint = ValueHint::DirPath, help_heading = "テーブル")]
    pub util_path: Option<PathBuf>,

    /// どの区間にも含まれないラン番号の扱い
    #[arg(long, global = true, value_enum, default_value = "warn", help_heading = "ポリシー")]
    pub on_unmatched_run: CliUnmatchedRun,

    /// `name = expression` 形式でない行の扱い
    #[arg(long, global = true, value_enum, default_value = "skip", help_heading = "ポリシー")]
    pub on_malformed: CliMalformedLine,

    /// 未登録カテゴリ参照の扱い
    #[arg(long, global = true, value_enum, default_value = "ignore", help_heading = "ポリシー")]
    pub on_unknown_category: CliUnknownCategory,

    /// ログを詳細にする（複数指定可: -v info, -vv debug, -vvv trace）
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 登録済みのランタイプ・一般カット・パラメータ表を表示
    List,

    /// ランタイプのカット行（コメント除外）を表示
    Show {
        /// ランタイプ名 (例: coin_prod)
        run_type: String,
    },

    /// カットを展開（--run 指定時はパラメータも置換）
    Grab {
        /// ランタイプ名
        run_type: String,

        /// カット名（省略時はランタイプの全カット）
        cuts: Vec<String>,

        /// パラメータ置換に使うラン番号
        #[arg(long)]
        run: Option<RunNumber>,

        /// 出力フォーマット
        #[arg(long, value_enum, default_value = "text")]
        format: CliOutputFormat,
    },

    /// 対話モード（既定）
    Interactive,

    /// ビーム電流に対する相対収量の直線フィット
    Lumi {
        /// 設定名と表ファイル (NAME=PATH, 複数可)
        #[arg(long = "setting", value_name = "NAME=PATH", required = true)]
        settings: Vec<SettingArg>,

        /// 設定ごとのスペクトロメータ運動量 GeV (NAME=P, 複数可)
        #[arg(long = "momentum", value_name = "NAME=P")]
        momenta: Vec<MomentumArg>,

        #[command(flatten)]
        columns: LumiColumns,

        /// 出力フォーマット
        #[arg(long, value_enum, default_value = "text")]
        format: CliOutputFormat,
    },
}

/// Column names of the luminosity tables.
#[derive(clap::Args, Debug)]
pub struct LumiColumns {
    /// 電流の列名
    #[arg(long, default_value = "current", help_heading = "列")]
    pub current_column: String,

    /// 相対収量の列名
    #[arg(long, default_value = "yieldRel_HMS_track", help_heading = "列")]
    pub yield_column: String,

    /// 収量の列名
    #[arg(long, default_value = "yield_HMS_track", help_heading = "列")]
    pub abs_yield_column: String,

    /// 相対収量の不確かさの列名
    #[arg(long, default_value = "uncern_yieldRel_HMS_track", help_heading = "列")]
    pub error_column: String,
}

impl From<&LumiColumns> for YieldColumns {
    fn from(c: &LumiColumns) -> Self {
        Self {
            current: c.current_column.clone(),
            rel_yield: c.yield_column.clone(),
            yield_abs: c.abs_yield_column.clone(),
            rel_yield_error: c.error_column.clone(),
        }
    }
}
