use std::path::Path;

use pretty_assertions::assert_eq;
use twp_ir::{AttrValue, Element, Quote, Span};

use super::*;

fn names(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(|e| e.name.as_str()).collect()
}

fn literal(element: &Element, attribute: &str) -> (Quote, String) {
    let attr = element
        .attributes
        .iter()
        .find(|a| a.name == attribute)
        .unwrap_or_else(|| panic!("no attribute {attribute}"));
    match &attr.value {
        Some(AttrValue::Literal(lit)) => (lit.quote, lit.value.clone()),
        other => panic!("expected a literal, got {other:?}"),
    }
}

#[test]
fn kind_from_path() {
    assert_eq!(SourceKind::from_path(Path::new("a/b.tsx")), Some(SourceKind::Jsx));
    assert_eq!(SourceKind::from_path(Path::new("b.ts")), Some(SourceKind::Script));
    assert_eq!(SourceKind::from_path(Path::new("App.vue")), Some(SourceKind::Vue));
    assert_eq!(SourceKind::from_path(Path::new("index.htm")), Some(SourceKind::Html));
    assert_eq!(SourceKind::from_path(Path::new("README.md")), None);
    assert_eq!(SourceKind::from_path(Path::new("Makefile")), None);
}

#[test]
fn every_extension_has_a_kind() {
    for ext in SourceKind::EXTENSIONS {
        assert!(SourceKind::from_extension(ext).is_some(), "{ext}");
    }
}

#[test]
fn html_document() {
    let source = concat!(
        "<!DOCTYPE html>\n",
        "<div class=\"p-4\" id=main hidden>\n",
        "  <!-- <span class=\"x\"> -->\n",
        "  <img src=a.png alt='x'/>\n",
        "  a < b\n",
        "</div>",
    );
    let unit = parse(source, SourceKind::Html).unwrap();
    assert_eq!(names(&unit.elements), vec!["div", "img"]);

    let div = &unit.elements[0];
    assert_eq!(literal(div, "class"), (Quote::Double, "p-4".into()));
    assert_eq!(literal(div, "id"), (Quote::None, "main".into()));
    assert!(div.attributes[2].value.is_none());
    assert_eq!(&source[div.span.to_range()], "<div class=\"p-4\" id=main hidden>");

    let img = &unit.elements[1];
    assert_eq!(literal(img, "src"), (Quote::None, "a.png".into()));
    assert_eq!(literal(img, "alt"), (Quote::Single, "x".into()));
}

#[test]
fn attribute_spans() {
    let source = "<p class='m-2'>";
    let unit = parse(source, SourceKind::Html).unwrap();
    let attr = &unit.elements[0].attributes[0];
    assert_eq!(attr.name_span, Span::new(3, 8));
    assert_eq!(attr.span, Span::new(3, 14));
    let Some(AttrValue::Literal(lit)) = &attr.value else {
        panic!("expected a literal");
    };
    assert_eq!(&source[lit.span.to_range()], "'m-2'");
}

#[test]
fn raw_text_elements_are_skipped() {
    let source = concat!(
        "<script>if (a<b) x = \"<div class='y'>\"</script>",
        "<STYLE>.a > .b { color: red }</style>",
        "<p class=\"m-2\"></p>",
    );
    let unit = parse(source, SourceKind::Html).unwrap();
    assert_eq!(names(&unit.elements), vec!["script", "STYLE", "p"]);
}

#[test]
fn html_braces_are_text() {
    let unit = parse("<p>{</p><b class={x}>", SourceKind::Html).unwrap();
    assert_eq!(names(&unit.elements), vec!["p", "b"]);
    assert_eq!(literal(&unit.elements[1], "class"), (Quote::None, "{x}".into()));
}

#[test]
fn vue_interpolation_is_skipped() {
    let source = "<template><p :class=\"{ a: b }\">{{ a < b ? '<i>' : c }}</p></template>";
    let unit = parse(source, SourceKind::Vue).unwrap();
    assert_eq!(names(&unit.elements), vec!["template", "p"]);
    assert_eq!(
        literal(&unit.elements[1], ":class"),
        (Quote::Double, "{ a: b }".into())
    );
}

#[test]
fn svelte_blocks_and_expression_values() {
    let source = concat!(
        "<script>let a = 1;</script>\n",
        "{#if a < 2}<p class={a ? \"x\" : \"y\"} {...rest} {hidden}>{a}</p>{/if}",
    );
    let unit = parse(source, SourceKind::Svelte).unwrap();
    assert_eq!(names(&unit.elements), vec!["script", "p"]);
    let p = &unit.elements[1];
    assert_eq!(p.attributes.len(), 1);
    assert!(matches!(
        p.attributes[0].value,
        Some(AttrValue::Expression { .. })
    ));
}

#[test]
fn astro_frontmatter_and_expressions() {
    let source = concat!(
        "---\n",
        "const x = \"<div>\";\n",
        "---\n",
        "<ul class=\"list\">{items.map((i) => <li class=\"item\">{i}</li>)}</ul>",
    );
    let unit = parse(source, SourceKind::Astro).unwrap();
    assert_eq!(names(&unit.elements), vec!["ul", "li"]);
}

#[test]
fn unterminated_markup() {
    let err = parse("<div class=\"x\"", SourceKind::Html).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedTag { name: "div".into() });
    assert_eq!(err.span, Span::new(0, 14));

    let err = parse("<div class=\"x>", SourceKind::Html).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnterminatedAttributeValue {
            name: "class".into()
        }
    );

    let err = parse("<p><!-- open", SourceKind::Vue).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedComment);
}

#[test]
fn jsx_attribute_forms() {
    let source = r#"<Button.Primary data-x="1" className='a b' disabled {...props} /* c */ onClick={() => go()} />"#;
    let unit = parse(source, SourceKind::Jsx).unwrap();
    let button = &unit.elements[0];
    assert_eq!(button.name, "Button.Primary");
    let attrs: Vec<_> = button.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(attrs, vec!["data-x", "className", "disabled", "onClick"]);
    assert_eq!(literal(button, "className"), (Quote::Single, "a b".into()));
}

#[test]
fn jsx_string_attributes_have_no_escapes() {
    let unit = parse(r#"<a title="C:\path" />"#, SourceKind::Jsx).unwrap();
    assert_eq!(
        literal(&unit.elements[0], "title"),
        (Quote::Double, r"C:\path".into())
    );
}

#[test]
fn empty_source() {
    for kind in [SourceKind::Html, SourceKind::Jsx] {
        let unit = parse("", kind).unwrap();
        assert!(unit.elements.is_empty());
        assert!(unit.arena.is_empty());
    }
}
