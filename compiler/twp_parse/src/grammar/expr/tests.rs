use pretty_assertions::assert_eq;
use twp_ir::{AttrValue, ExprArena, ExprId, ExprKind, SourceUnit, Span};

use crate::{parse, ParseErrorKind, SourceKind};

/// Compact rendering: strings debug-quoted, templates with `${}` holes,
/// `?` for opaque nodes.
fn render(arena: &ExprArena, id: ExprId) -> String {
    let list = |ids: &[ExprId]| {
        ids.iter()
            .map(|id| render(arena, *id))
            .collect::<Vec<_>>()
            .join(", ")
    };
    match &arena.get(id).kind {
        ExprKind::Str { value, .. } => format!("{value:?}"),
        ExprKind::Template(template) => format!("`{}`", template.quasis.join("${}")),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Member { object, property } => format!("{}.{property}", render(arena, *object)),
        ExprKind::Call { callee, args } => format!("{}({})", render(arena, *callee), list(args)),
        ExprKind::Logical { op, left, right } => {
            format!("({} {op} {})", render(arena, *left), render(arena, *right))
        }
        ExprKind::Conditional {
            test,
            consequent,
            alternate,
        } => format!(
            "({} ? {} : {})",
            render(arena, *test),
            render(arena, *consequent),
            render(arena, *alternate)
        ),
        ExprKind::Array(items) => format!("[{}]", list(items)),
        ExprKind::Spread(argument) => format!("...{}", render(arena, *argument)),
        ExprKind::Paren(inner) => format!("paren({})", render(arena, *inner)),
        ExprKind::Opaque => "?".to_owned(),
    }
}

/// Parse `<div className={expr} />` and return the unit and `expr`.
fn class_expr(expr: &str) -> (SourceUnit, ExprId) {
    let source = format!("<div className={{{expr}}} />");
    let unit = parse(&source, SourceKind::Jsx).unwrap();
    let id = match &unit.elements[0].attributes[0].value {
        Some(AttrValue::Expression { expr, .. }) => *expr,
        other => panic!("expected an expression value, got {other:?}"),
    };
    (unit, id)
}

fn rendered(expr: &str) -> String {
    let (unit, id) = class_expr(expr);
    render(&unit.arena, id)
}

#[test]
fn helper_call_with_logical_argument() {
    assert_eq!(
        rendered(r#"clsx("p-4", cond && "flex")"#),
        r#"clsx("p-4", (cond && "flex"))"#
    );
}

#[test]
fn string_span_covers_quotes() {
    let source = r#"<div className={cn('p-4')} />"#;
    let unit = parse(source, SourceKind::Jsx).unwrap();
    let Some(AttrValue::Expression { span, expr }) = &unit.elements[0].attributes[0].value else {
        panic!("expected an expression value");
    };
    assert_eq!(&source[span.to_range()], "{cn('p-4')}");
    let ExprKind::Call { args, .. } = &unit.arena.get(*expr).kind else {
        panic!("expected a call");
    };
    let arg = unit.arena.get(args[0]);
    assert_eq!(&source[arg.span.to_range()], "'p-4'");
    assert_eq!(arg.span, Span::new(19, 24));
}

#[test]
fn unsupported_arguments_fall_back_one_by_one() {
    assert_eq!(
        rendered(r#"clsx("a", () => x, { b: c }, "d")"#),
        r#"clsx("a", ?, ?, "d")"#
    );
}

#[test]
fn unsupported_container_falls_back_whole() {
    assert_eq!(rendered(r#"a + "b""#), "?");
    assert_eq!(rendered(r#"/"/.test(s) && "a""#), "?");
    assert_eq!(rendered(r#"new Set(["a"])"#), "?");
}

#[test]
fn conditional_and_templates() {
    assert_eq!(rendered(r#"open ? "a" : `b`"#), r#"(open ? "a" : `b`)"#);
    assert_eq!(rendered("`p-4 ${x} m-2`"), "`p-4 ${} m-2`");
}

#[test]
fn member_optional_chain_and_nullish() {
    assert_eq!(
        rendered(r#"styles?.root ?? props.className"#),
        "(styles.root ?? props.className)"
    );
}

#[test]
fn spread_array_and_paren() {
    assert_eq!(
        rendered(r#"cn(...base, ["a", , "b"], (c || "d"))"#),
        r#"cn(...base, ["a", "b"], paren((c || "d")))"#
    );
}

#[test]
fn prefix_operators_and_non_null() {
    assert_eq!(rendered(r#"!open && "hidden""#), r#"(? && "hidden")"#);
    assert_eq!(rendered("cls!"), "?");
}

#[test]
fn comments_are_trivia() {
    assert_eq!(rendered(r#"/* c */ cn( // x
        "p-4")"#), r#"cn("p-4")"#);
}

#[test]
fn escapes_are_cooked() {
    assert_eq!(rendered(r#""a\"bc""#), r#""a\"bc""#);
}

#[test]
fn assignment_operators_are_not_logical() {
    assert_eq!(rendered("a ||= b"), "?");
}

#[test]
fn abandoned_attempt_does_not_duplicate_elements() {
    let source = r#"<A x={<B className="x" /> + y} y={cond && <C />} z={() => <D />} />"#;
    let unit = parse(source, SourceKind::Jsx).unwrap();
    let names: Vec<_> = unit.elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
}

#[test]
fn unterminated_container() {
    let err = parse(r#"<div className={clsx("a""#, SourceKind::Jsx).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedExpression);
    assert_eq!(err.span, Span::new(15, 24));
}

#[test]
fn missing_attribute_value() {
    let err = parse("<div className= />", SourceKind::Jsx).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedAttributeValue {
            name: "className".into()
        }
    );
    assert_eq!(err.span, Span::new(16, 16));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let expr = format!("{}\"a\"{}", "(".repeat(depth), ")".repeat(depth));
    let (unit, id) = class_expr(&expr);
    assert!(matches!(unit.arena.get(id).kind, ExprKind::Paren(_)));
}
