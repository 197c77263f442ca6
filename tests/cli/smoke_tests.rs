use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::AnalysisTree;

fn cut_check() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cut_check"));
    cmd.env_remove("UTILPATH").env_remove("RUST_LOG");
    cmd
}

fn in_tree(tree: &AnalysisTree) -> Command {
    let mut cmd = cut_check();
    cmd.arg("--util-path").arg(tree.path());
    cmd
}

#[test]
fn shows_help() {
    cut_check()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cut_check"))
        .stdout(predicate::str::contains("grab"));
}

#[test]
fn lists_standard_tables() {
    let tree = AnalysisTree::standard();
    in_tree(&tree)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("coin_prod -> "))
        .stdout(predicate::str::contains("Tracking_Parameters.csv"));
}

#[test]
fn utilpath_env_selects_the_tree() {
    let tree = AnalysisTree::standard();
    cut_check()
        .env("UTILPATH", tree.path())
        .args(["show", "coin_prod"])
        .assert()
        .success()
        .stdout("sample = pid.p1+track.t1\ncoin = track.tdc+accept.delta\n");
}

#[test]
fn grabs_cuts_without_run() {
    let tree = AnalysisTree::standard();
    in_tree(&tree)
        .args(["grab", "coin_prod", "sample"])
        .assert()
        .success()
        .stdout("sample = 5,10\n");
}

#[test]
fn grabs_all_cuts_with_substitution() {
    let tree = AnalysisTree::standard();
    in_tree(&tree)
        .args(["grab", "coin_prod", "--run", "250"])
        .assert()
        .success()
        .stdout("sample = 5,10\ncoin = H.dc.x<99,abs(H.gtr.dp)<8.0\n");
}

#[test]
fn unmatched_run_warns_by_default_and_fails_on_request() {
    let tree = AnalysisTree::standard();
    in_tree(&tree)
        .args(["grab", "coin_prod", "coin", "--run", "50"])
        .assert()
        .success()
        .stdout("coin = H.dc.x<track.t1,abs(H.gtr.dp)<8.0\n")
        .stderr(predicate::str::contains("unresolved-reference"));

    in_tree(&tree)
        .args(["--on-unmatched-run", "fail", "grab", "coin_prod", "coin", "--run", "50"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("track.t1"));
}

#[test]
fn grab_json_output() {
    let tree = AnalysisTree::standard();
    let output = in_tree(&tree)
        .args(["grab", "coin_prod", "coin", "--run", "150", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["run"], 150);
    assert_eq!(json["cuts"][0]["cut"]["name"], "coin");
    assert_eq!(json["cuts"][0]["cut"]["values"][0], "H.dc.x<42");
}

#[test]
fn unknown_run_type_exits_with_failure() {
    let tree = AnalysisTree::standard();
    in_tree(&tree)
        .args(["show", "lumi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("lumi"));
}

#[test]
fn missing_table_source_is_reported() {
    cut_check()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--util-path"));
}

#[test]
fn interactive_session_reads_stdin() {
    let tree = AnalysisTree::standard();
    in_tree(&tree)
        .write_stdin("coin_prod\nsample\nyes\n150\nno\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a run type cut..."))
        .stdout(predicate::str::contains("sample = 5,10"));
}

#[test]
fn luminosity_fit_from_csv() {
    let tree = AnalysisTree::empty();
    let header = "current,yieldRel_HMS_track,yield_HMS_track,uncern_yieldRel_HMS_track";
    let l1 = tree.write("l1.csv", &format!("{header}\n10,1.00,1,0.01\n20,0.99,1,0.01\n30,0.98,1,0.01\n"));
    let l2 = tree.write("l2.csv", &format!("{header}\n15,0.995,1,0.01\n45,0.965,1,0.01\n"));

    let output = cut_check()
        .arg("lumi")
        .arg("--setting")
        .arg(format!("l1={}", l1.display()))
        .arg("--setting")
        .arg(format!("l2={}", l2.display()))
        .args(["--momentum", "l1=3.3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["settings"].as_array().unwrap().len(), 2);
    assert_eq!(json["settings"][0]["momentum"], 3.3);
    assert_eq!(json["combined"]["points"], 5);
}
