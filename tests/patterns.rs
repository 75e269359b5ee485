use jpat::{
    parse_pattern,
    syntax::{SyntaxKind, SyntaxNode},
    Parse, SyntaxErrorKind,
};

fn parse_ok(input: &str) -> SyntaxNode {
    let parse = parse_pattern(input);
    assert!(
        parse.errors().is_empty(),
        "errors in {input:?}: {:?}",
        parse.errors()
    );
    assert_eq!(parse.syntax().text().to_string(), input);
    parse.syntax().first_child().expect("pattern node")
}

fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|child| child.kind()).collect()
}

fn errors(parse: &Parse) -> Vec<(SyntaxErrorKind, u32)> {
    parse
        .errors()
        .iter()
        .map(|error| (error.kind.clone(), error.range.start().into()))
        .collect()
}

#[test]
fn test_type_test_pattern() {
    let pattern = parse_ok("String s");
    assert_eq!(pattern.kind(), SyntaxKind::TypeTestPattern);
    let variable = pattern.first_child().unwrap();
    assert_eq!(variable.kind(), SyntaxKind::PatternVariable);
    assert_eq!(
        child_kinds(&variable),
        vec![SyntaxKind::ModifierList, SyntaxKind::Type]
    );
    let name = variable.last_token().unwrap();
    assert_eq!(name.kind(), SyntaxKind::Ident);
    assert_eq!(name.text(), "s");
}

#[test]
fn test_record_pattern() {
    let pattern = parse_ok("Point(int x, int y) p");
    assert_eq!(pattern.kind(), SyntaxKind::RecordPattern);
    assert_eq!(
        child_kinds(&pattern),
        vec![
            SyntaxKind::ModifierList,
            SyntaxKind::Type,
            SyntaxKind::RecordStructurePattern,
            SyntaxKind::RecordPatternVariable
        ]
    );
    let structure = pattern
        .children()
        .find(|node| node.kind() == SyntaxKind::RecordStructurePattern)
        .unwrap();
    assert_eq!(
        child_kinds(&structure),
        vec![SyntaxKind::TypeTestPattern, SyntaxKind::TypeTestPattern]
    );
    let texts: Vec<_> = structure.children().map(|n| n.text().to_string()).collect();
    assert_eq!(texts, vec!["int x", "int y"]);
    assert_eq!(pattern.last_child().unwrap().text().to_string(), "p");
}

#[test]
fn test_guarded_pattern() {
    let pattern = parse_ok("String s && s.length() > 0");
    assert_eq!(pattern.kind(), SyntaxKind::GuardedPattern);
    assert_eq!(
        child_kinds(&pattern),
        vec![SyntaxKind::TypeTestPattern, SyntaxKind::BinaryExpression]
    );
    assert_eq!(
        pattern.first_child().unwrap().text().to_string(),
        "String s"
    );
    assert_eq!(
        pattern.last_child().unwrap().text().to_string(),
        "s.length() > 0"
    );
}

#[test]
fn test_guard_stops_at_or() {
    let parse = parse_pattern("String s && a || b");
    assert_eq!(parse.errors().len(), 1);
    assert!(matches!(
        parse.errors()[0].kind,
        SyntaxErrorKind::UnexpectedToken { .. }
    ));
    assert_eq!(parse.syntax().text().to_string(), "String s && a || b");
}

#[test]
fn test_parenthesized_pattern() {
    let pattern = parse_ok("(String s)");
    assert_eq!(pattern.kind(), SyntaxKind::ParenthesizedPattern);
    let inner = pattern.first_child().unwrap();
    assert_eq!(inner.kind(), SyntaxKind::TypeTestPattern);
    assert_eq!(inner.text().to_string(), "String s");
    assert_eq!(u32::from(inner.text_range().start()), 1);
}

#[test]
fn test_nested_record_patterns() {
    let pattern = parse_ok("Line(Point(var x1, var y1), final Point p2) l");
    assert_eq!(pattern.kind(), SyntaxKind::RecordPattern);
    let kinds: Vec<_> = pattern
        .descendants()
        .filter(|node| node.kind().is_pattern())
        .map(|node| node.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::RecordPattern,
            SyntaxKind::RecordStructurePattern,
            SyntaxKind::RecordPattern,
            SyntaxKind::RecordStructurePattern,
            SyntaxKind::TypeTestPattern,
            SyntaxKind::PatternVariable,
            SyntaxKind::TypeTestPattern,
            SyntaxKind::PatternVariable,
            SyntaxKind::TypeTestPattern,
            SyntaxKind::PatternVariable,
            SyntaxKind::RecordPatternVariable,
        ]
    );
}

#[test]
fn test_record_pattern_without_name_and_generics() {
    let pattern = parse_ok("Box<String>(var s)");
    assert_eq!(pattern.kind(), SyntaxKind::RecordPattern);
    assert!(pattern
        .children()
        .all(|node| node.kind() != SyntaxKind::RecordPatternVariable));
    parse_ok("Pair<?, ? extends Number>()");
    parse_ok("@NonNull final java.lang.String s");
}

#[test]
fn test_missing_comma() {
    let input = "Point(int x int y) p";
    let parse = parse_pattern(input);
    assert_eq!(errors(&parse), vec![(SyntaxErrorKind::ExpectedComma, 12)]);
    let pattern = parse.syntax().first_child().unwrap();
    assert_eq!(pattern.kind(), SyntaxKind::RecordPattern);
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn test_truncated_record_pattern() {
    let parse = parse_pattern("Point(int x,");
    assert_eq!(errors(&parse), vec![(SyntaxErrorKind::ExpectedRParen, 12)]);
    assert_eq!(
        parse.syntax().first_child().unwrap().kind(),
        SyntaxKind::RecordPattern
    );

    let parse = parse_pattern("Point(");
    assert_eq!(errors(&parse), vec![(SyntaxErrorKind::ExpectedRParen, 6)]);
}

#[test]
fn test_non_pattern_component() {
    let input = "Point(1, int y)";
    let parse = parse_pattern(input);
    // the comma after a rejected component is rejected too
    assert_eq!(
        errors(&parse),
        vec![
            (SyntaxErrorKind::ExpectedPattern, 6),
            (SyntaxErrorKind::ExpectedPattern, 7)
        ]
    );
    assert_eq!(parse.syntax().text().to_string(), input);
    let structure = parse
        .syntax()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::RecordStructurePattern)
        .unwrap();
    assert_eq!(
        structure
            .children()
            .filter(|node| node.kind() == SyntaxKind::TypeTestPattern)
            .count(),
        1
    );
}

#[test]
fn test_missing_guard() {
    let parse = parse_pattern("String s &&");
    assert_eq!(
        errors(&parse),
        vec![(SyntaxErrorKind::ExpectedExpression, 11)]
    );
    assert_eq!(
        parse.syntax().first_child().unwrap().kind(),
        SyntaxKind::GuardedPattern
    );
}

#[test]
fn test_trailing_dot_in_type() {
    let parse = parse_pattern("Foo.(int x)");
    assert_eq!(
        errors(&parse),
        vec![(SyntaxErrorKind::ExpectedIdentifier, 4)]
    );
    assert_eq!(
        parse.syntax().first_child().unwrap().kind(),
        SyntaxKind::RecordPattern
    );
}

#[test]
fn test_lossless_with_trivia() {
    let input = "  Point( /* x */ int x ,\n\tint y ) // p\n p  ";
    let parse = parse_pattern(input);
    assert!(parse.errors().is_empty(), "{:?}", parse.errors());
    assert_eq!(parse.syntax().text().to_string(), input);
}
