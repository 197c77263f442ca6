#![allow(dead_code)]

//! テストフィクスチャ管理

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const COIN_PROD: &str = "\
# coin production cuts
sample = pid.p1+track.t1
coin = track.tdc+accept.delta
";

pub const PID: &str = "p1 = 5\n# p1 = 6\n";
pub const TRACK: &str = "t1 = 10\n# t1 = 999\ntdc = H.dc.x<track.t1\n";
pub const ACCEPT: &str = "delta = abs(H.gtr.dp)<accept.dp_max\n";
pub const TRACK_PARAMS: &str = "Run_Start,Run_End,t1\n100,200,42\n201,300,99\n";
pub const ACCEPT_PARAMS: &str = "Run_Start,Run_End,dp_max\n1,1000,8.0\n";

/// 標準レイアウト (`DB/CUTS`, `DB/PARAM`) の一時解析ツリー
#[allow(dead_code)]
pub struct AnalysisTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl AnalysisTree {
    /// 空のツリー
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// `coin_prod` ランタイプと pid/track/accept カテゴリを持つツリー
    pub fn standard() -> Self {
        let tree = Self::empty();
        tree.write("DB/CUTS/run_type/coin_prod.cuts", COIN_PROD);
        tree.write("DB/CUTS/general/pid.cuts", PID);
        tree.write("DB/CUTS/general/track.cuts", TRACK);
        tree.write("DB/CUTS/general/accept.cuts", ACCEPT);
        tree.write("DB/PARAM/Tracking_Parameters.csv", TRACK_PARAMS);
        tree.write("DB/PARAM/Acceptance_Parameters.csv", ACCEPT_PARAMS);
        tree
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// ファイルを作成（親ディレクトリも作成）
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
