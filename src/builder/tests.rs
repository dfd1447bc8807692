use super::*;
use crate::config::Strictness;
use crate::error::{Error, ParseErrorKind};
use crate::xml::Attribute;

fn parse(xml: &str) -> Document {
    parse_body(xml, &ParseConfig::new()).expect("body should parse")
}

fn parse_err(xml: &str) -> ParseError {
    match parse_body(xml, &ParseConfig::new()) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a markup error, got {other:?}"),
    }
}

fn feed_all(tokens: Vec<Token>) -> std::result::Result<Document, ParseError> {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        if builder.feed(token)? == Flow::Done {
            break;
        }
    }
    builder.finish()
}

fn p(children: Vec<Node>) -> Node {
    Node::Paragraph { children }
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_single_paragraph() {
    let doc = parse("<p>  Permission is hereby\n   granted  </p>");
    assert_eq!(doc.nodes(), &[p(vec![Node::text("Permission is hereby granted")])]);
}

#[test]
fn test_whitespace_between_tags_is_dropped() {
    let doc = parse("\n  <p>a</p>\n\n  <p>b</p>\n");
    assert_eq!(doc.len(), 2);
    assert_eq!(doc.nodes()[0], p(vec![Node::text("a")]));
    assert_eq!(doc.nodes()[1], p(vec![Node::text("b")]));
}

#[test]
fn test_no_break_space_survives_normalization() {
    let doc = parse("<p>a&#160;b&#xA0;</p><p>&#160;</p>");
    assert_eq!(
        doc.nodes(),
        &[
            p(vec![Node::text("a\u{a0}b\u{a0}")]),
            p(vec![Node::text("\u{a0}")]),
        ]
    );
}

#[test]
fn test_top_level_text_and_line_breaks() {
    let doc = parse("Copyright <br/> reserved");
    assert_eq!(
        doc.nodes(),
        &[Node::text("Copyright"), Node::LineBreak, Node::text("reserved")]
    );
}

#[test]
fn test_block_variants() {
    let doc = parse(
        "<titleText><p>MIT License</p></titleText>\
         <copyrightText><p>Copyright (c) <alt name=\"year\" match=\".+\">year</alt></p></copyrightText>\
         <standardLicenseHeader>SPDX header</standardLicenseHeader>",
    );
    let kinds: Vec<_> = doc.iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            crate::model::NodeKind::TitleBlock,
            crate::model::NodeKind::CopyrightBlock,
            crate::model::NodeKind::StandardHeaderBlock,
        ]
    );
    assert_eq!(doc.nodes()[2].children(), &[Node::text("SPDX header")]);
}

#[test]
fn test_optional_keeps_spacing_and_children() {
    let doc = parse(r#"<optional spacing="before">The <p>above</p> notice</optional>"#);
    assert_eq!(
        doc.nodes(),
        &[Node::Optional {
            spacing: Spacing::Before,
            children: vec![Node::text("The"), p(vec![Node::text("above")]), Node::text("notice")],
        }]
    );
}

#[test]
fn test_spacing_classification_on_optional() {
    let spacing_of = |xml: &str| match &parse(xml).nodes()[0] {
        Node::Optional { spacing, .. } => *spacing,
        other => panic!("expected optional, got {other:?}"),
    };
    assert_eq!(spacing_of(r#"<optional spacing="">x</optional>"#), Spacing::Unspecified);
    assert_eq!(spacing_of("<optional>x</optional>"), Spacing::Unspecified);
    assert_eq!(spacing_of(r#"<optional spacing="both">x</optional>"#), Spacing::Both);
    assert_eq!(
        spacing_of(r#"<optional spacing="sideways">x</optional>"#),
        Spacing::InvalidValue
    );
}

#[test]
fn test_nested_optional_inside_paragraph() {
    let doc = parse("<p>a <optional>b <optional>c</optional></optional> d</p>");
    assert_eq!(
        doc.nodes(),
        &[p(vec![
            Node::text("a"),
            Node::Optional {
                spacing: Spacing::Unspecified,
                children: vec![
                    Node::text("b"),
                    Node::Optional {
                        spacing: Spacing::Unspecified,
                        children: vec![Node::text("c")],
                    },
                ],
            },
            Node::text("d"),
        ])]
    );
}

// ============================================================================
// Alternatives and bullets
// ============================================================================

#[test]
fn test_alternative_attributes_and_text() {
    let doc = parse(r#"<alt name="x" match="y">text</alt>"#);
    assert_eq!(
        doc.nodes(),
        &[Node::Alternative {
            text: "text".into(),
            name: "x".into(),
            pattern: "y".into(),
            spacing: Spacing::Unspecified,
        }]
    );
}

#[test]
fn test_alternative_accepts_spacing() {
    let doc = parse(r#"<alt name="n" match=".*" spacing="after"> a  b </alt>"#);
    match &doc.nodes()[0] {
        Node::Alternative { text, spacing, .. } => {
            assert_eq!(text, "a b");
            assert_eq!(*spacing, Spacing::After);
        }
        other => panic!("expected alternative, got {other:?}"),
    }
}

#[test]
fn test_alternative_without_text_or_attributes() {
    let doc = parse("<alt></alt>");
    assert_eq!(
        doc.nodes(),
        &[Node::Alternative {
            text: String::new(),
            name: String::new(),
            pattern: String::new(),
            spacing: Spacing::Unspecified,
        }]
    );
}

#[test]
fn test_alternative_rejects_nested_elements() {
    let err = parse_err(r#"<alt name="x" match="y"><p>text</p></alt>"#);
    assert_eq!(err.kind(), ParseErrorKind::InvalidChildPlacement);
    assert_eq!(
        err,
        ParseError::InvalidChildPlacement {
            parent: "alt".into(),
            child: "p".into(),
        }
    );
}

#[test]
fn test_alternative_text_split_by_comment() {
    let doc = parse("<alt name=\"a\" match=\"b\">one<!-- note -->two</alt>");
    match &doc.nodes()[0] {
        Node::Alternative { text, .. } => assert_eq!(text, "one two"),
        other => panic!("expected alternative, got {other:?}"),
    }
}

#[test]
fn test_bullet_marker_and_spacing() {
    let doc = parse(r#"<bullet spacing="after"> (a) </bullet>"#);
    assert_eq!(
        doc.nodes(),
        &[Node::Bullet {
            marker: "(a)".into(),
            spacing: Spacing::After,
        }]
    );
}

#[test]
fn test_bullet_rejects_unknown_attribute() {
    let err = parse_err(r#"<bullet value="1.">1.</bullet>"#);
    assert_eq!(
        err,
        ParseError::UnknownAttribute {
            tag: "bullet".into(),
            attribute: "value".into(),
        }
    );
}

#[test]
fn test_bullet_rejects_children() {
    let err = parse_err("<bullet><br/></bullet>");
    assert_eq!(err.kind(), ParseErrorKind::InvalidChildPlacement);
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_list_items_are_frames() {
    let doc = parse(
        "<list>\n\
           <item><bullet>1.</bullet> First</item>\n\
           <item><bullet>2.</bullet> Second <list><item>nested</item></list></item>\n\
         </list>",
    );
    let items = doc.nodes()[0].items();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].children,
        vec![
            Node::Bullet {
                marker: "1.".into(),
                spacing: Spacing::Unspecified,
            },
            Node::text("First"),
        ]
    );
    let nested = &items[1].children[2];
    assert_eq!(nested.items().len(), 1);
    assert_eq!(nested.items()[0].children, vec![Node::text("nested")]);
}

#[test]
fn test_empty_list_and_item() {
    let doc = parse("<list><item/></list><list/>");
    assert_eq!(doc.nodes()[0].items(), &[ListItem::default()]);
    assert!(doc.nodes()[1].items().is_empty());
}

#[test]
fn test_text_directly_in_list_is_rejected() {
    let err = parse_err("<list>stray<item>a</item></list>");
    assert_eq!(
        err,
        ParseError::InvalidChildPlacement {
            parent: "list".into(),
            child: "#text".into(),
        }
    );
}

#[test]
fn test_item_outside_list_is_rejected() {
    assert_eq!(
        parse_err("<item>a</item>"),
        ParseError::InvalidChildPlacement {
            parent: "text".into(),
            child: "item".into(),
        }
    );
    assert_eq!(
        parse_err("<p><item>a</item></p>"),
        ParseError::InvalidChildPlacement {
            parent: "p".into(),
            child: "item".into(),
        }
    );
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn test_mismatched_close() {
    let err = parse_err("<optional>a</alt>");
    assert_eq!(
        err,
        ParseError::StructuralMismatch {
            expected: "optional".into(),
            found: "alt".into(),
        }
    );
}

#[test]
fn test_unbalanced_close() {
    let err = feed_all(vec![Token::close("p")]).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnbalancedClose);
    assert_eq!(parse_err("<p>a</p></p>").kind(), ParseErrorKind::UnbalancedClose);
}

#[test]
fn test_unterminated_at_end_of_input() {
    let err = parse_err("<p>a <optional>b");
    assert_eq!(
        err,
        ParseError::UnterminatedBody {
            body: "text".into(),
            open: "optional".into(),
        }
    );
}

#[test]
fn test_unterminated_at_body_close() {
    let err = feed_all(vec![
        Token::open("optional"),
        Token::text("x"),
        Token::close("text"),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnterminatedBody);
}

#[test]
fn test_body_close_ends_document() {
    let doc = feed_all(vec![
        Token::open("p"),
        Token::text("a"),
        Token::close("p"),
        Token::close("text"),
        Token::open("never-read"),
    ])
    .expect("body should end at </text>");
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_content_after_body_close_is_rejected() {
    let err = parse_err("<p>a</p></text><p>lost</p>");
    assert_eq!(
        err,
        ParseError::UnsupportedConstruct {
            construct: "<p> after </text>".into(),
        }
    );
    assert_eq!(
        parse_err("<p>a</p></text>trailing words").kind(),
        ParseErrorKind::UnsupportedConstruct
    );
    assert_eq!(
        parse_err("<p>a</p></text></text>"),
        ParseError::UnbalancedClose { tag: "text".into() }
    );
}

#[test]
fn test_filler_after_body_close_is_accepted() {
    let doc = parse("<p>a</p></text>\n  <!-- end -->\n");
    assert_eq!(doc.nodes(), &[p(vec![Node::text("a")])]);
}

#[test]
fn test_body_with_its_own_container() {
    let doc = parse("<?xml version=\"1.0\"?>\n<text>\n  <p>a</p>\n</text>\n");
    assert_eq!(doc.nodes(), &[p(vec![Node::text("a")])]);
    assert_eq!(parse("<text></text>"), Document::default());
}

#[test]
fn test_container_open_without_close() {
    assert_eq!(
        parse_err("<text><p>a</p>"),
        ParseError::UnterminatedBody {
            body: "text".into(),
            open: "text".into(),
        }
    );
    assert_eq!(
        parse_err("<text><p>a</p></text><text>"),
        ParseError::UnsupportedConstruct {
            construct: "<text> after </text>".into(),
        }
    );
}

#[test]
fn test_processing_instruction_is_fatal() {
    let err = parse_err("<p>a<?render fast?></p>");
    assert_eq!(err.kind(), ParseErrorKind::UnsupportedConstruct);
}

#[test]
fn test_comments_and_directives_are_ignored() {
    let doc = feed_all(vec![
        Token::Directive("xml".into()),
        Token::Comment("c".into()),
        Token::open("p"),
        Token::Comment("inner".into()),
        Token::text("a"),
        Token::close("p"),
    ])
    .unwrap();
    assert_eq!(doc.nodes(), &[p(vec![Node::text("a")])]);
}

#[test]
fn test_no_partial_tree_on_error() {
    let mut builder = TreeBuilder::new();
    builder.feed(Token::open("p")).unwrap();
    builder.feed(Token::text("kept?")).unwrap();
    assert!(builder.feed(Token::close("list")).is_err());
    assert_eq!(builder.depth(), 1);
    assert!(builder.finish().is_err());
}

// ============================================================================
// Strictness
// ============================================================================

#[test]
fn test_strict_rejects_unknown_element() {
    assert_eq!(
        parse_err("<p><b>bold</b></p>"),
        ParseError::UnknownElement { tag: "b".into() }
    );
}

#[test]
fn test_strict_rejects_attribute_on_plain_element() {
    assert_eq!(
        parse_err(r#"<p class="x">a</p>"#),
        ParseError::UnknownAttribute {
            tag: "p".into(),
            attribute: "class".into(),
        }
    );
}

#[test]
fn test_lenient_keeps_unrecognized_leaf() {
    let config = ParseConfig::new().with_strictness(Strictness::Lenient);
    let doc = parse_body(r#"<p class="x">a <hr/> b</p>"#, &config).unwrap();
    assert_eq!(
        doc.nodes(),
        &[p(vec![
            Node::text("a"),
            Node::Unrecognized { tag: "hr".into() },
            Node::text("b"),
        ])]
    );
}

#[test]
fn test_lenient_still_rejects_children_of_unrecognized() {
    let err = parse_body("<b>bold</b>", &ParseConfig::lenient()).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::InvalidChildPlacement {
            parent: "b".into(),
            child: "#text".into(),
        })
    );
}

#[test]
fn test_lenient_still_rejects_unknown_attribute_on_optional() {
    let err = parse_body(r#"<optional kind="x">a</optional>"#, &ParseConfig::lenient()).unwrap_err();
    assert_eq!(
        err.parse_error().map(ParseError::kind),
        Some(ParseErrorKind::UnknownAttribute)
    );
}

#[test]
fn test_open_token_with_attributes_directly() {
    let doc = feed_all(vec![
        Token::open_with(
            "alt",
            vec![Attribute::new("name", "holder"), Attribute::new("match", ".+")],
        ),
        Token::text("  The   Authors "),
        Token::close("alt"),
    ])
    .unwrap();
    assert_eq!(
        doc.nodes(),
        &[Node::Alternative {
            text: "The Authors".into(),
            name: "holder".into(),
            pattern: ".+".into(),
            spacing: Spacing::Unspecified,
        }]
    );
}

#[test]
fn test_custom_container() {
    let mut tokens = crate::xml::Tokenizer::new("<p>note</p></notes><p>after</p>");
    let doc = build_document(&mut tokens, "notes", &ParseConfig::new()).unwrap();
    assert_eq!(doc.nodes(), &[p(vec![Node::text("note")])]);
    assert_eq!(tokens.next().unwrap().unwrap(), Token::open("p"));
}
