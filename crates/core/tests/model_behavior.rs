use cxscope_core::CxscopeError;
use cxscope_core::model::{
    GlobalVariableRecord, Namespace, NamespaceSummary, merge_globals_strict,
};

fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn record(ty: &str, name: &str) -> GlobalVariableRecord {
    GlobalVariableRecord {
        ty: ty.to_string(),
        name: name.to_string(),
        is_extern: false,
        init_value: None,
    }
}

#[test]
fn merge_unions_nested_namespaces_by_name() {
    let mut left = Namespace::root();
    left.ensure_path(&segments(&["Calculator", "App"]));

    let mut right = Namespace::root();
    right.ensure_path(&segments(&["Calculator", "Settings"]));
    right.ensure_path(&segments(&["Telemetry"]));

    left.merge_from(right);

    assert_eq!(
        left.nested.keys().collect::<Vec<_>>(),
        vec!["Calculator", "Telemetry"]
    );
    let calculator = left.find_path(&["Calculator"]).unwrap();
    assert_eq!(
        calculator.nested.keys().collect::<Vec<_>>(),
        vec!["App", "Settings"]
    );
}

#[test]
fn merge_keeps_first_seen_order_for_new_names() {
    let mut left = Namespace::root();
    left.ensure_path(&segments(&["Zeta"]));

    let mut right = Namespace::root();
    right.ensure_path(&segments(&["Alpha"]));
    right.ensure_path(&segments(&["Zeta"]));

    left.merge_from(right);
    assert_eq!(left.nested.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
}

#[test]
fn equal_paths_build_equal_trees() {
    let mut first = Namespace::root();
    first.ensure_path(&segments(&["Calculator", "App"]));
    let mut second = Namespace::root();
    second.ensure_path(&segments(&["Calculator", "App"]));
    assert_eq!(first, second);

    second.ensure_path(&segments(&["Calculator", "Settings"]));
    assert_ne!(first, second);
}

#[test]
fn strict_merge_rejects_type_name_collisions() {
    let err = merge_globals_strict([
        vec![record("int", "a"), record("int", "b")],
        vec![record("long", "a"), record("int", "a")],
    ])
    .unwrap_err();

    match err {
        CxscopeError::DuplicateGlobal { first, second } => {
            assert_eq!(first.ty, "int");
            assert_eq!(first.name, "a");
            assert_eq!(second.ty, "int");
            assert_eq!(second.name, "a");
        }
        other => panic!("expected a duplicate-global error, got {other}"),
    }
}

#[test]
fn strict_merge_keeps_distinct_records() {
    let merged = merge_globals_strict([
        vec![record("int", "a"), record("int", "b")],
        vec![record("long", "a")],
    ])
    .unwrap();
    assert_eq!(merged.len(), 3);
}

#[test]
fn records_render_like_declarations() {
    let mut extern_record = record("Platform::StringReference", "AppMinWindowHeight");
    extern_record.is_extern = true;
    assert_eq!(
        extern_record.to_string(),
        "extern Platform::StringReference AppMinWindowHeight"
    );

    let mut initialized = record("int", "b");
    initialized.init_value = Some("3".to_string());
    assert_eq!(initialized.to_string(), "int b = 3");
}

#[test]
fn summary_display_is_parseable_json() {
    let summary = NamespaceSummary {
        name: "CalculatorApp".to_string(),
        global_variables: vec![record("int", "AppVersion")],
        ..NamespaceSummary::default()
    };

    let value: serde_json::Value = serde_json::from_str(&summary.to_string()).unwrap();
    assert_eq!(value["name"], "CalculatorApp");
    assert_eq!(value["global_variables"][0]["type"], "int");
}
