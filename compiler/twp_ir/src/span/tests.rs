use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_contains_span() {
    let outer = Span::new(0, 10);
    assert!(outer.contains_span(Span::new(2, 5)));
    assert!(outer.contains_span(outer));
    assert!(!outer.contains_span(Span::new(5, 11)));
}

#[test]
fn test_span_ordering_follows_start() {
    let mut spans = vec![Span::new(8, 9), Span::new(0, 4), Span::new(4, 8)];
    spans.sort();
    assert_eq!(spans, vec![Span::new(0, 4), Span::new(4, 8), Span::new(8, 9)]);
}
