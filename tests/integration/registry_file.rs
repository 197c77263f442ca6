//! Registry files written next to the cut files they describe.

use cut_check_domain::{ResolverOptions, TableRegistry};
use cut_check_infra::{DelimitedTableReader, FsTextSource, load_registry};
use cut_check_usecase::CutResolver;

use crate::common::{AnalysisTree, fixtures};

fn custom_tree() -> AnalysisTree {
    let tree = AnalysisTree::empty();
    tree.write("cuts/prod.cuts", "sample = pid.p1+track.t1\n");
    tree.write("cuts/pid.cuts", fixtures::PID);
    tree.write("cuts/track.cuts", fixtures::TRACK);
    tree.write("params/track.csv", fixtures::TRACK_PARAMS);
    tree
}

fn grab(registry: &TableRegistry) -> String {
    let resolver =
        CutResolver::new(&FsTextSource, &DelimitedTableReader, registry, ResolverOptions::default());
    let report = resolver.grab("prod", &[], None).unwrap();
    report.cuts[0].cut.to_string()
}

#[test]
fn json_registry_with_relative_paths() {
    let tree = custom_tree();
    let path = tree.write(
        "tables.json",
        r#"{
            "run_types": {"prod": "cuts/prod.cuts"},
            "general": {"pid": "cuts/pid.cuts", "track": "cuts/track.cuts"},
            "parameters": {"track": "params/track.csv"}
        }"#,
    );
    let registry = load_registry(&path).unwrap();
    assert_eq!(grab(&registry), "sample = 5,10");
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_registry_with_relative_paths() {
    let tree = custom_tree();
    let path = tree.write(
        "tables.yaml",
        "run_types:\n  prod: cuts/prod.cuts\ngeneral:\n  pid: cuts/pid.cuts\n  track: cuts/track.cuts\n",
    );
    let registry = load_registry(&path).unwrap();
    assert!(registry.parameters.is_empty());
    assert_eq!(grab(&registry), "sample = 5,10");
}
