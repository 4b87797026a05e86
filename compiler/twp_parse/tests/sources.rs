#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code, panics give clear failure messages"
)]

//! Whole-file parsing of realistic sources, plus robustness properties.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use twp_ir::{AttrValue, ExprKind, SourceUnit};
use twp_parse::{parse, SourceKind};

const COMPONENT: &str = r#"import { clsx } from "clsx";
import type { ReactNode } from "react";

// Renders a <Card> with an optional title.
export function Card<T,>({ title, children, active }: Props<T>): ReactNode {
  const re = /<div class="(.*)">/;
  const ratio = width / height;
  if (ratio < 1 && title) {
    return null;
  }
  return (
    <section className="p-4 rounded-lg" data-ratio={ratio}>
      {title ? <h2 className={`text-xl ${active ? "font-bold" : ""}`}>{title}</h2> : null}
      <div className={clsx("mt-2", active && "ring-2", { hidden: !children })}>
        {children}
      </div>
      <p>Don't forget: a < b & c > d</p>
    </section>
  );
}
"#;

const SINGLE_FILE_COMPONENT: &str = r#"<template>
  <button class="btn px-4" :class="{ active }" @click="go">{{ label }}</button>
</template>

<script setup lang="ts">
const label = "<b>";
</script>

<style scoped>
.btn > span { color: red; }
</style>
"#;

fn names(unit: &SourceUnit) -> Vec<&str> {
    unit.elements.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn react_component() {
    let unit = parse(COMPONENT, SourceKind::Jsx).unwrap();
    assert_eq!(names(&unit), vec!["section", "h2", "div", "p"]);

    let div = &unit.elements[2];
    let Some(AttrValue::Expression { expr, .. }) = &div.attributes[0].value else {
        panic!("expected an expression");
    };
    let ExprKind::Call { args, .. } = &unit.arena.get(*expr).kind else {
        panic!("expected a call");
    };
    assert_eq!(args.len(), 3);
    assert!(matches!(unit.arena.get(args[2]).kind, ExprKind::Opaque));
}

#[test]
fn vue_single_file_component() {
    let unit = parse(SINGLE_FILE_COMPONENT, SourceKind::Vue).unwrap();
    assert_eq!(names(&unit), vec!["template", "button", "script", "style"]);
    let button = &unit.elements[1];
    let attrs: Vec<_> = button.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(attrs, vec!["class", ":class", "@click"]);
}

fn all_kinds() -> impl Strategy<Value = SourceKind> {
    prop_oneof![
        Just(SourceKind::Html),
        Just(SourceKind::Vue),
        Just(SourceKind::Svelte),
        Just(SourceKind::Astro),
        Just(SourceKind::Jsx),
        Just(SourceKind::Script),
    ]
}

fn check_unit(source: &str, unit: &SourceUnit) {
    let mut last = 0;
    for element in &unit.elements {
        assert!(element.span.start >= last, "elements out of order");
        last = element.span.start;
        assert!(source.get(element.span.to_range()).is_some());
        for attr in &element.attributes {
            assert!(element.span.contains_span(attr.span));
        }
    }
}

proptest! {
    #[test]
    fn punctuation_soup_never_panics(
        source in "[<>{}()\\[\\]\"'`/\\\\$a-zA-Z0-9 =!?:.,&|\n*#-]{0,80}",
        kind in all_kinds(),
    ) {
        if let Ok(unit) = parse(&source, kind) {
            check_unit(&source, &unit);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,64}", kind in all_kinds()) {
        if let Ok(unit) = parse(&source, kind) {
            check_unit(&source, &unit);
        }
    }

    #[test]
    fn class_attribute_round_trips(value in "[a-z0-9:\\[\\]\\- ]{0,30}") {
        let source = format!("<div className=\"{value}\" />");
        let unit = parse(&source, SourceKind::Jsx).unwrap();
        let Some(AttrValue::Literal(lit)) = &unit.elements[0].attributes[0].value else {
            panic!("expected a literal");
        };
        prop_assert_eq!(&lit.value, &value);
    }
}
