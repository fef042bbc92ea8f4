mod common;

use common::parse;
use cxscope_cppcx::analyzers::namespace::{build_namespace_tree, collect_namespace_tree};

#[test]
fn qualified_and_nested_openings_merge_on_one_path() {
    let unit = parse(
        "namespace Calculator::App { int x = 1; }
         namespace Calculator { namespace App { int y = 2; } }",
    );
    let tree = build_namespace_tree(&unit);

    let calculator = tree.find_path(&["Calculator"]).unwrap();
    // the qualified opening passed through Calculator without opening it
    assert_eq!(calculator.reopenings(), 1);

    let app = tree.find_path(&["Calculator", "App"]).unwrap();
    assert_eq!(app.reopenings(), 2);
    assert!(app.nested.is_empty());
}

#[test]
fn both_traversal_styles_build_the_same_tree() {
    let unit = parse(
        "namespace Calculator::App { int x = 1; }
         namespace Calculator {
             namespace App { int y = 2; }
             namespace Settings { }
         }
         namespace Telemetry { namespace Events { } }",
    );
    let stateful = build_namespace_tree(&unit);
    let stateless = collect_namespace_tree(&unit);
    assert_eq!(stateful, stateless);
}

#[test]
fn reopening_accumulates_contexts_on_one_node() {
    let unit = parse(
        "namespace App { int x = 1; }
         namespace App { int y = 2; }",
    );
    let tree = build_namespace_tree(&unit);

    assert_eq!(tree.nested.len(), 1);
    let app = tree.find_path(&["App"]).unwrap();
    assert_eq!(app.reopenings(), 2);
    assert_eq!(tree.name, "");
    assert!(tree.contexts.is_empty());
}

#[test]
fn anonymous_namespaces_are_transparent() {
    let unit = parse("namespace { namespace Hidden { int x = 1; } }");
    let stateful = build_namespace_tree(&unit);
    let stateless = collect_namespace_tree(&unit);

    assert_eq!(stateful, stateless);
    assert_eq!(stateful.nested.keys().collect::<Vec<_>>(), vec!["Hidden"]);
    assert_eq!(stateful.find_path(&["Hidden"]).unwrap().reopenings(), 1);
}

#[test]
fn sibling_order_is_first_seen() {
    let unit = parse("namespace Zeta { } namespace Alpha { } namespace Zeta { }");
    let tree = build_namespace_tree(&unit);
    let names: Vec<_> = tree.nested.keys().cloned().collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
    assert_eq!(tree.find_path(&["Zeta"]).unwrap().reopenings(), 2);
}
