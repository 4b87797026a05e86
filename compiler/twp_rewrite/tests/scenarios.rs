#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code, panics give clear failure messages"
)]

//! End-to-end transforms over whole sources.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use twp_class::FnClassifier;
use twp_parse::SourceKind;
use twp_rewrite::{transform, TransformConfig, TransformError, TransformOutput};

fn run(source: &str, kind: SourceKind) -> String {
    run_with(source, kind, &TransformConfig::new("tw-"))
}

fn run_with(source: &str, kind: SourceKind, config: &TransformConfig) -> String {
    transform(source, kind, config)
        .unwrap()
        .code(source)
        .to_owned()
}

#[test]
fn jsx_class_name_literal() {
    assert_eq!(
        run(
            r#"<div className="bg-red-500 text-white">hi</div>"#,
            SourceKind::Jsx
        ),
        r#"<div className="tw-bg-red-500 tw-text-white">hi</div>"#
    );
}

#[test]
fn html_class_literal() {
    assert_eq!(
        run(
            r#"<div class="flex items-center"></div>"#,
            SourceKind::Html
        ),
        r#"<div class="tw-flex tw-items-center"></div>"#
    );
}

#[test]
fn already_prefixed_is_unchanged() {
    let source = r#"<div className="tw-bg-blue-500 tw-bg-red-500" />"#;
    assert_eq!(
        transform(source, SourceKind::Jsx, &TransformConfig::new("tw-")),
        Ok(TransformOutput::Unchanged)
    );
}

#[test]
fn static_template_becomes_string() {
    assert_eq!(
        run(
            "<div className={`bg-red-500 text-white`} />",
            SourceKind::Jsx
        ),
        r#"<div className="tw-bg-red-500 tw-text-white" />"#
    );
}

#[test]
fn helper_call_arguments() {
    assert_eq!(
        run(
            r#"<div className={clsx("bg-red-500", cond && "text-white")} />"#,
            SourceKind::Jsx
        ),
        r#"<div className={clsx("tw-bg-red-500", cond && "tw-text-white")} />"#
    );
}

#[test]
fn dynamic_template_is_untouched() {
    let source = "<div className={`bg-red-500 ${active}`} />";
    assert_eq!(run(source, SourceKind::Jsx), source);
}

#[test]
fn uppercase_tokens_are_untouched() {
    assert_eq!(
        run(r#"<div className="Card flex" />"#, SourceKind::Jsx),
        r#"<div className="Card tw-flex" />"#
    );
}

#[test]
fn variants_and_important() {
    assert_eq!(
        run(
            r#"<div className="hover:bg-red-500 !p-4 [&>p]:mt-2" />"#,
            SourceKind::Jsx
        ),
        r#"<div className="hover:tw-bg-red-500 !tw-p-4 [&>p]:tw-mt-2" />"#
    );
}

#[test]
fn nested_helper_in_conditional() {
    assert_eq!(
        run(
            r#"<div className={ok ? cn("p-4", { x: y }) : "m-2"} />"#,
            SourceKind::Jsx
        ),
        r#"<div className={ok ? cn("tw-p-4", { x: y }) : "m-2"} />"#
    );
}

#[test]
fn parentheses_stay_around_rewritten_literals() {
    assert_eq!(
        run(
            r#"<a className={clsx(("p-4"), (ok && "m-2"), ok && ("flex"))} />"#,
            SourceKind::Jsx
        ),
        r#"<a className={clsx(("tw-p-4"), (ok && "tw-m-2"), ok && ("tw-flex"))} />"#
    );
    assert_eq!(
        run(r#"<a className={("p-4")} />"#, SourceKind::Jsx),
        r#"<a className={("tw-p-4")} />"#
    );
    assert_eq!(
        run("<a className={(`p-4`)} />", SourceKind::Jsx),
        r#"<a className="tw-p-4" />"#
    );
}

#[test]
fn code_outside_markup_is_preserved() {
    let source = r#"// "p-4" in a comment
const cls = "p-4";
export function Card({ title }) {
  return (
    <section className="p-4  shadow">
      <h2 class="text-lg">{title}</h2>
      {items.map((i) => <li key={i} className={cx("m-2")}>{i}</li>)}
    </section>
  );
}
"#;
    let expected = r#"// "p-4" in a comment
const cls = "p-4";
export function Card({ title }) {
  return (
    <section className="tw-p-4 tw-shadow">
      <h2 class="tw-text-lg">{title}</h2>
      {items.map((i) => <li key={i} className={cx("tw-m-2")}>{i}</li>)}
    </section>
  );
}
"#;
    assert_eq!(run(source, SourceKind::Jsx), expected);
}

#[test]
fn vue_single_file_component() {
    let source = r#"<template>
  <div class="flex">{{ msg }}</div>
</template>
<script>
export default { data: () => ({ msg: "<b class='p-4'>" }) }
</script>
<style>
.a { color: red }
</style>
"#;
    let expected = source.replace(r#"class="flex""#, r#"class="tw-flex""#);
    assert_eq!(run(source, SourceKind::Vue), expected);
}

#[test]
fn svelte_and_astro() {
    assert_eq!(
        run(
            "{#if ok}<p class=\"p-4\">{name}</p>{/if}",
            SourceKind::Svelte
        ),
        "{#if ok}<p class=\"tw-p-4\">{name}</p>{/if}"
    );
    assert_eq!(
        run(
            "---\nconst a = '<p class=\"m-2\">';\n---\n<p class:list={[\"x\"]} class=\"m-2\" />",
            SourceKind::Astro
        ),
        "---\nconst a = '<p class=\"m-2\">';\n---\n<p class:list={[\"x\"]} class=\"tw-m-2\" />"
    );
}

#[test]
fn classifier_override() {
    let config = TransformConfig::new("ui-")
        .with_classifier(FnClassifier::new(|token: &str| token.starts_with("btn")));
    assert_eq!(
        run_with(
            r#"<a className="btn btn-primary p-4" />"#,
            SourceKind::Jsx,
            &config
        ),
        r#"<a className="ui-btn ui-btn-primary p-4" />"#
    );
}

#[test]
fn parse_errors_propagate() {
    let err = transform(
        "<div className={clsx(\"p-4\"} />",
        SourceKind::Jsx,
        &TransformConfig::new("tw-"),
    )
    .unwrap_err();
    assert!(matches!(err, TransformError::Parse(_)));
}

const TOKENS: &[&str] = &[
    "p-4",
    "tw-m-2",
    "hover:bg-red-500",
    "!text-white",
    "Card",
    "[&>p]:mt-2",
    "flex",
    "custom",
];

fn class_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TOKENS), 0..6).prop_map(|t| t.join(" "))
}

proptest! {
    #[test]
    fn second_pass_is_a_noop(a in class_text(), b in class_text(), c in class_text()) {
        let source = format!(
            "<div className=\"{a}\"><p className={{`{b}`}} /><i className={{cn('{c}', ok && \"{a}\")}} /></div>"
        );
        let config = TransformConfig::new("tw-");
        let once = run_with(&source, SourceKind::Jsx, &config);
        let twice = transform(&once, SourceKind::Jsx, &config).unwrap();
        prop_assert_eq!(twice, TransformOutput::Unchanged);
    }
}
