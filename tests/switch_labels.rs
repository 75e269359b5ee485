use jpat::{parse_switch_label, syntax::SyntaxKind, SyntaxErrorKind};

#[test]
fn test_mixed_elements() {
    let input = "case null, String s when, Point(var x, var y) p && x > y ->";
    let parse = parse_switch_label(input);
    assert_eq!(parse.syntax().text().to_string(), input);
    // `when` is an identifier here, so `String s when` has a stray name
    assert_eq!(parse.errors().len(), 1);
}

#[test]
fn test_case_with_guarded_record_pattern() {
    let input = "case Point(var x, var y) p && x > y ->";
    let parse = parse_switch_label(input);
    assert!(parse.errors().is_empty(), "{:?}", parse.errors());
    let list = parse
        .syntax()
        .descendants()
        .find(|node| node.kind() == SyntaxKind::CaseLabelElementList)
        .unwrap();
    let guarded = list.first_child().unwrap();
    assert_eq!(guarded.kind(), SyntaxKind::GuardedPattern);
    assert_eq!(guarded.last_child().unwrap().text().to_string(), "x > y");
}

#[test]
fn test_enum_constants_and_default() {
    let input = "case RED, GREEN, default:";
    let parse = parse_switch_label(input);
    assert!(parse.errors().is_empty(), "{:?}", parse.errors());
    let kinds: Vec<_> = parse
        .syntax()
        .descendants()
        .filter(|node| node.parent().map(|p| p.kind()) == Some(SyntaxKind::CaseLabelElementList))
        .map(|node| node.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ReferenceExpression,
            SyntaxKind::ReferenceExpression,
            SyntaxKind::DefaultCaseLabelElement
        ]
    );
}

#[test]
fn test_missing_colon_or_arrow() {
    let parse = parse_switch_label("case 1");
    assert_eq!(parse.errors().len(), 1);
    assert_eq!(
        parse.errors()[0].kind,
        SyntaxErrorKind::ExpectedColonOrArrow
    );
}

#[test]
fn test_missing_element() {
    let parse = parse_switch_label("case 1, ->");
    assert_eq!(parse.errors().len(), 1);
    assert_eq!(parse.errors()[0].kind, SyntaxErrorKind::ExpectedExpression);
    assert_eq!(u32::from(parse.errors()[0].range.start()), 8);
}
