// ABOUTME: End-to-end tests for synchronous template rendering
// ABOUTME: Covers compilation, scope lookup, resolver overrides and stringification policy

use std::sync::Arc;

use serde_json::json;

use tessera::path::{get_keys, to_path};
use tessera::{
    compile, render, CompileOptions, Renderer, RendererOptions, Scope, StringifyOptions, Template,
    Value,
};

#[test]
fn test_hello_world() {
    let output = render(
        "Hello {{name}}!",
        &json!({"name": "World"}),
        CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(output, "Hello World!");
}

#[test]
fn test_template_without_placeholders_is_identity() {
    for scope in [json!({}), json!({"name": "ignored"}), json!(null)] {
        let output = render("no placeholders here", &scope, CompileOptions::default()).unwrap();
        assert_eq!(output, "no placeholders here");
    }
}

#[test]
fn test_nested_and_indexed_paths() {
    let scope = json!({
        "user": {"name": "Ada", "langs": ["rust", "lisp"]},
        "empty": {}
    });
    let output = render(
        "{{user.name}} writes {{user.langs[0]}} (missing: '{{empty.nope}}')",
        &scope,
        CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(output, "Ada writes rust (missing: '')");
}

#[test]
fn test_value_stringification_through_templates() {
    let scope = json!({
        "t": "text",
        "yes": true,
        "no": false,
        "n": 1.5,
        "z": null,
        "obj": {"a": 1},
        "arr": [1, 2]
    });
    let output = render(
        "{{t}}|{{yes}}|{{no}}|{{n}}|{{z}}|{{missing}}|{{obj}}|{{arr}}",
        &scope,
        CompileOptions::default(),
    )
    .unwrap();
    assert_eq!(output, r#"text|true|false|1.5|||{"a":1}|[1,2]"#);
}

#[test]
fn test_infinity_renders_as_symbol() {
    let options = RendererOptions {
        resolve_fn: Some(Arc::new(|_: &str, _: &Scope, _: &Scope| {
            Value::Number(f64::INFINITY)
        })),
        ..Default::default()
    };
    let mut renderer = Renderer::new(
        Template::new(vec!["x = ".into(), "".into()], vec!["v".into()]),
        options,
    )
    .unwrap();
    assert_eq!(renderer.render(&json!({})), "x = ∞");
}

#[test]
fn test_negative_infinity_and_nan() {
    let mut renderer = Renderer::new(
        Template::new(vec!["".into(), " ".into(), "".into()], vec!["a".into(), "b".into()]),
        RendererOptions::default(),
    )
    .unwrap();
    let resolver = |raw: &str, _: &Scope, _: &Scope| match raw {
        "a" => Value::Number(f64::NEG_INFINITY),
        _ => Value::Number(f64::NAN),
    };
    assert_eq!(renderer.render_with(&json!({}), Some(&resolver), None), "-∞ NaN");
}

#[test]
fn test_resolver_doubles_resolved_numbers() {
    let scope = json!({"a": 1, "b": 2});
    let resolver = |raw: &str, scope: &Scope, _: &Scope| match get_keys(scope, &to_path(raw)) {
        Value::Number(n) => Value::Number(n * 2.0),
        other => other,
    };

    let mut renderer = compile("{{a}} {{b}}", CompileOptions::default()).unwrap();
    let output = renderer.render_with(&scope, Some(&resolver), None);
    assert_eq!(output, "2 4");
}

#[test]
fn test_configured_fallback_strings() {
    let options = CompileOptions {
        renderer: RendererOptions {
            resolve_fn: Some(Arc::new(|_: &str, _: &Scope, _: &Scope| Value::Unsupported)),
            stringify: StringifyOptions {
                invalid_type: "<unsupported>".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        ..Default::default()
    };
    let mut renderer = compile("value: {{v}}", options).unwrap();
    assert_eq!(renderer.render(&json!({})), "value: <unsupported>");
}

#[test]
fn test_custom_tags() {
    let options = CompileOptions {
        tags: ("<%".to_string(), "%>".to_string()),
        ..Default::default()
    };
    let output = render("sum: <% total %>", &json!({"total": 10}), options).unwrap();
    assert_eq!(output, "sum: 10");
}

#[test]
fn test_renderer_reuse_across_many_scopes() {
    let mut renderer = compile("{{greeting}}, {{name}}!", CompileOptions::default()).unwrap();
    assert_eq!(
        renderer.render(&json!({"greeting": "Hello", "name": "World"})),
        "Hello, World!"
    );
    assert_eq!(
        renderer.render(&json!({"greeting": "Hola", "name": "Mundo"})),
        "Hola, Mundo!"
    );
    assert_eq!(renderer.render(&json!({})), ", !");
}

#[test]
fn test_structured_values_from_resolver() {
    #[derive(serde::Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let resolver =
        |_: &str, _: &Scope, _: &Scope| Value::structured(Point { x: 1, y: 2 });
    let mut renderer = compile("p = {{point}}", CompileOptions::default()).unwrap();
    assert_eq!(
        renderer.render_with(&json!({}), Some(&resolver), None),
        r#"p = {"x":1,"y":2}"#
    );
}

#[test]
fn test_unclosed_tag_fails_to_compile() {
    assert!(render("broken {{tag", &json!({}), CompileOptions::default()).is_err());
}
