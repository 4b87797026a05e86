use pretty_assertions::assert_eq;
use twp_parse::{parse, SourceKind};

use super::*;

fn select_in(source: &str, kind: SourceKind) -> Vec<(TargetKind, String, String)> {
    let unit = parse(source, kind).unwrap();
    select(&unit, &TransformConfig::new("tw-"))
        .into_iter()
        .map(|r| (r.kind, source[r.span.to_range()].to_owned(), r.text))
        .collect()
}

fn select_jsx(source: &str) -> Vec<(TargetKind, String, String)> {
    select_in(source, SourceKind::Jsx)
}

fn entry(kind: TargetKind, from: &str, to: &str) -> (TargetKind, String, String) {
    (kind, from.to_owned(), to.to_owned())
}

#[test]
fn attribute_string_keeps_its_quote() {
    assert_eq!(
        select_in(r#"<div class='flex p-4'></div>"#, SourceKind::Html),
        vec![entry(
            TargetKind::AttributeLiteral,
            "'flex p-4'",
            "'tw-flex tw-p-4'"
        )]
    );
}

#[test]
fn unquoted_markup_value() {
    assert_eq!(
        select_in("<div class=flex></div>", SourceKind::Html),
        vec![entry(TargetKind::AttributeLiteral, "flex", "tw-flex")]
    );
}

#[test]
fn other_attributes_are_ignored() {
    assert_eq!(
        select_jsx(r#"<a id="flex" title={clsx("p-4")} className="p-4" />"#),
        vec![entry(TargetKind::AttributeLiteral, r#""p-4""#, r#""tw-p-4""#)]
    );
}

#[test]
fn string_in_container() {
    assert_eq!(
        select_jsx(r#"<a className={'p-4 m-2'} />"#),
        vec![entry(
            TargetKind::AttributeLiteral,
            "'p-4 m-2'",
            "'tw-p-4 tw-m-2'"
        )]
    );
}

#[test]
fn static_template_replaces_container() {
    assert_eq!(
        select_jsx("<a className={`p-4 m-2`} />"),
        vec![entry(
            TargetKind::StaticTemplateLiteral,
            "{`p-4 m-2`}",
            r#""tw-p-4 tw-m-2""#
        )]
    );
}

#[test]
fn unchanged_static_template_stays() {
    assert_eq!(select_jsx("<a className={`tw-p-4 Card`} />"), vec![]);
}

#[test]
fn dynamic_template_is_skipped() {
    assert_eq!(select_jsx("<a className={`p-4 ${size}`} />"), vec![]);
}

#[test]
fn helper_arguments() {
    assert_eq!(
        select_jsx(r#"<a className={clsx("p-4", `m-2`, ok && 'flex', ok || "grid", x)} />"#),
        vec![
            entry(TargetKind::CallArgumentLiteral, r#""p-4""#, r#""tw-p-4""#),
            entry(TargetKind::CallArgumentTemplate, "`m-2`", r#""tw-m-2""#),
            entry(TargetKind::CallArgumentLogicalRight, "'flex'", "'tw-flex'"),
        ]
    );
}

#[test]
fn logical_right_template() {
    assert_eq!(
        select_jsx("<a className={cn(ok && `flex`)} />"),
        vec![entry(
            TargetKind::CallArgumentLogicalRight,
            "`flex`",
            r#""tw-flex""#
        )]
    );
}

#[test]
fn parenthesized_helper_arguments() {
    assert_eq!(
        select_jsx(r#"<a className={clsx(("p-4"), (ok && "m-2"), ok && ("flex"))} />"#),
        vec![
            entry(TargetKind::CallArgumentLiteral, r#""p-4""#, r#""tw-p-4""#),
            entry(TargetKind::CallArgumentLogicalRight, r#""m-2""#, r#""tw-m-2""#),
            entry(TargetKind::CallArgumentLogicalRight, r#""flex""#, r#""tw-flex""#),
        ]
    );
}

#[test]
fn parenthesized_string_in_container() {
    assert_eq!(
        select_jsx(r#"<a className={(("p-4"))} />"#),
        vec![entry(TargetKind::AttributeLiteral, r#""p-4""#, r#""tw-p-4""#)]
    );
}

#[test]
fn parenthesized_static_template_replaces_container() {
    assert_eq!(
        select_jsx("<a className={(`p-4`)} />"),
        vec![entry(
            TargetKind::StaticTemplateLiteral,
            "{(`p-4`)}",
            r#""tw-p-4""#
        )]
    );
}

#[test]
fn helper_calls_found_anywhere_in_the_attribute() {
    assert_eq!(
        select_jsx(r#"<a className={ok ? cn("p-4") : [cx(clsx("m-2"))]} />"#),
        vec![
            entry(TargetKind::CallArgumentLiteral, r#""p-4""#, r#""tw-p-4""#),
            entry(TargetKind::CallArgumentLiteral, r#""m-2""#, r#""tw-m-2""#),
        ]
    );
}

#[test]
fn strings_outside_helpers_are_left_alone() {
    assert_eq!(select_jsx(r#"<a className={ok ? "p-4" : "m-2"} />"#), vec![]);
}

#[test]
fn member_callee_is_not_a_helper() {
    assert_eq!(select_jsx(r#"<a className={utils.cn("p-4")} />"#), vec![]);
}

#[test]
fn escapes_are_reemitted() {
    assert_eq!(
        select_jsx(r#"<a className={clsx("p-4\tm-2")} />"#),
        vec![entry(
            TargetKind::CallArgumentLiteral,
            r#""p-4\tm-2""#,
            r#""tw-p-4 tw-m-2""#
        )]
    );
}

#[test]
fn empty_attribute_set_selects_nothing() {
    let unit = parse(r#"<a className="p-4" />"#, SourceKind::Jsx).unwrap();
    let config = TransformConfig::new("tw-").with_attributes(Vec::<String>::new());
    assert_eq!(select(&unit, &config), vec![]);
}

#[test]
fn custom_attribute() {
    let source = r#"<a ui="p-4" className="m-2" />"#;
    let unit = parse(source, SourceKind::Jsx).unwrap();
    let config = TransformConfig::new("tw-").with_attributes(["ui"]);
    let replacements = select(&unit, &config);
    assert_eq!(replacements.len(), 1);
    assert_eq!(&source[replacements[0].span.to_range()], r#""p-4""#);
}

#[test]
fn kind_names() {
    assert_eq!(
        TargetKind::CallArgumentLogicalRight.to_string(),
        "call-argument-logical-right"
    );
    assert_eq!(TargetKind::AttributeLiteral.name(), "attribute-literal");
}
