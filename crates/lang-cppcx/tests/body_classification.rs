mod common;

use common::{namespace_body, parse};
use cxscope_cppcx::analyzers::body::classify_namespace_body;

#[test]
fn each_declaration_kind_lands_in_its_own_category() {
    let unit = parse(
        "namespace Calc {
            int counter = 0;
            class Engine { };
            int add(int a, int b);
            int sub(int a, int b) { return a - b; }
        }",
    );
    let body = classify_namespace_body(namespace_body(&unit, 0));

    assert_eq!(body.global_variables.len(), 1);
    assert_eq!(body.classes.len(), 1);
    assert_eq!(body.function_prototypes.len(), 1);
    assert_eq!(body.function_definitions.len(), 1);
}

#[test]
fn nested_namespaces_are_excluded_from_the_scope() {
    let unit = parse(
        "namespace Outer {
            int x = 1;
            namespace Inner { int y = 2; }
        }",
    );
    let body = classify_namespace_body(namespace_body(&unit, 0));

    assert_eq!(body.global_variables.len(), 1);
    assert!(body.classes.is_empty());
    assert!(body.function_prototypes.is_empty());
    assert!(body.function_definitions.is_empty());
}

#[test]
fn unmodeled_constructs_contribute_nothing_and_block_nothing() {
    let unit = parse(
        "namespace Outer {
            using namespace Windows;
            typedef int Length;
            int x = 1;
        }",
    );
    let body = classify_namespace_body(namespace_body(&unit, 0));

    assert_eq!(body.global_variables.len(), 1);
    assert!(body.classes.is_empty());
    assert!(body.function_prototypes.is_empty());
    assert!(body.function_definitions.is_empty());
}

#[test]
fn header_scope_counts_match_per_category() {
    let unit = parse(
        "namespace Calculator { namespace App {
            extern Platform::StringReference AppMinWindowHeight;
            extern Platform::StringReference AppMinWindowWidth;
            int a, b = 3;
            void f();
            void g(int a);
        } }",
    );
    // index 1: the App namespace nested inside Calculator
    let body = classify_namespace_body(namespace_body(&unit, 1));

    // `int a, b = 3;` is one declaration statement here; it expands to two
    // variables only at extraction time
    assert_eq!(body.global_variables.len(), 3);
    assert_eq!(body.function_prototypes.len(), 2);
    assert!(body.classes.is_empty());
    assert!(body.function_definitions.is_empty());
}

#[test]
fn classification_is_stable_across_repeat_walks() {
    let unit = parse("namespace Calc { int counter = 0; void f(); }");
    let scope = namespace_body(&unit, 0);
    assert_eq!(classify_namespace_body(scope), classify_namespace_body(scope));
}
