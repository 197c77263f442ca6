//! Resolution over real files with the filesystem and CSV adapters.

use cut_check_domain::{DiagnosticKind, ResolverOptions, TableRegistry};
use cut_check_infra::{DelimitedTableReader, FsTextSource};
use cut_check_shared_kernel::RunNumber;
use cut_check_usecase::CutResolver;
use proptest::prelude::*;

use crate::common::AnalysisTree;

fn resolve(tree: &AnalysisTree, cut: &str, run: Option<u32>) -> Vec<String> {
    let registry = TableRegistry::standard_layout(tree.path());
    let resolver =
        CutResolver::new(&FsTextSource, &DelimitedTableReader, &registry, ResolverOptions::default());
    resolver
        .resolve("coin_prod", cut, run.map(RunNumber::new))
        .unwrap()
        .into_iter()
        .map(|r| r.cut.to_string())
        .collect()
}

#[test]
fn references_expand_in_order() {
    let tree = AnalysisTree::standard();
    assert_eq!(resolve(&tree, "sample", None), ["sample = 5,10"]);
}

#[test]
fn duplicate_definitions_append() {
    let tree = AnalysisTree::standard();
    tree.write("DB/CUTS/general/pid.cuts", "p1 = 5\np1 = 7\n");
    assert_eq!(resolve(&tree, "sample", None), ["sample = 5,7,10"]);
}

#[test]
fn commented_definitions_are_ignored() {
    let tree = AnalysisTree::standard();
    let resolved = resolve(&tree, "sample", None).join("\n");
    assert!(!resolved.contains("999"));
    assert!(!resolved.contains('6'));
}

#[test]
fn parameters_follow_run_intervals() {
    let tree = AnalysisTree::standard();
    assert_eq!(resolve(&tree, "coin", Some(250)), ["coin = H.dc.x<99,abs(H.gtr.dp)<8.0"]);
    assert_eq!(resolve(&tree, "coin", Some(150)), ["coin = H.dc.x<42,abs(H.gtr.dp)<8.0"]);
    assert_eq!(resolve(&tree, "coin", Some(50)), ["coin = H.dc.x<track.t1,abs(H.gtr.dp)<8.0"]);
}

#[test]
fn tab_separated_parameter_tables() {
    let tree = AnalysisTree::standard();
    let tsv = tree.write("tables/track.tsv", "Run_Start\tRun_End\tt1\n1\t500\t7\n");
    let mut registry = TableRegistry::standard_layout(tree.path());
    registry.parameters.insert("track".into(), tsv);

    let resolver =
        CutResolver::new(&FsTextSource, &DelimitedTableReader, &registry, ResolverOptions::default());
    let resolved = resolver.resolve("coin_prod", "coin", Some(RunNumber::new(250))).unwrap();
    assert_eq!(resolved[0].cut.values[0], "H.dc.x<7");
}

#[test]
fn broken_parameter_table_is_a_diagnostic() {
    let tree = AnalysisTree::standard();
    tree.write("DB/PARAM/Tracking_Parameters.csv", "Run_Start,t1\n1,2\n");
    let registry = TableRegistry::standard_layout(tree.path());
    let resolver =
        CutResolver::new(&FsTextSource, &DelimitedTableReader, &registry, ResolverOptions::default());

    let resolved = resolver.resolve("coin_prod", "coin", Some(RunNumber::new(250))).unwrap();
    assert_eq!(resolved[0].cut.values[0], "H.dc.x<track.t1");
    assert_eq!(resolved[0].diagnostics[0].kind, DiagnosticKind::InvalidTable);
}

#[test]
fn reversed_parameter_row_is_skipped() {
    let tree = AnalysisTree::standard();
    tree.write(
        "DB/PARAM/Tracking_Parameters.csv",
        "Run_Start,Run_End,t1\n100,200,42\n300,250,0\n201,,note\n",
    );
    assert_eq!(resolve(&tree, "coin", Some(150)), ["coin = H.dc.x<42,abs(H.gtr.dp)<8.0"]);
}

proptest! {
    #[test]
    fn resolution_is_deterministic(run in 0u32..400) {
        let tree = AnalysisTree::standard();
        let first = resolve(&tree, "coin", Some(run));
        let second = resolve(&tree, "coin", Some(run));
        prop_assert_eq!(&first, &second);

        let expected = match run {
            100..=200 => "H.dc.x<42",
            201..=300 => "H.dc.x<99",
            _ => "H.dc.x<track.t1",
        };
        let prefix = format!("coin = {expected},");
        prop_assert!(first[0].starts_with(&prefix), "{} does not start with {}", first[0], prefix);
    }
}
