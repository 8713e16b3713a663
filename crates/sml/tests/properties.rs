use facet_testhelpers::test;
use sml::{
    ClosingPolicy, Document, Error, Node, ReadError, ReaderConfig, StructuralError, SyntaxErrorKind,
    Value, ValueError,
};

fn text_doc(text: &str) -> Document {
    Document::from_nodes([Node::text(text)])
}

fn syntax_kind(result: sml::Result<Document>) -> SyntaxErrorKind {
    match result {
        Err(Error::Read(ReadError::Syntax(err))) => err.kind,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn plain_text_is_one_run() {
    assert_eq!(sml::read("content").unwrap(), text_doc("content"));
}

#[test]
fn comments_vanish_and_text_coalesces() {
    let doc = sml::read("con<!--comment-->tent").unwrap();
    assert_eq!(doc, text_doc("content"));
    assert_eq!(doc.len(), 1);
}

#[test]
fn nested_tags() {
    let doc = sml::read("<tag><tag>content</tag></tag>").unwrap();
    let outer = doc.get(doc.root()).children().next().unwrap();
    let inner = outer.children().next().unwrap();
    assert_eq!(outer.name(), Some("tag"));
    assert_eq!(inner.name(), Some("tag"));
    assert_eq!(inner.text(), Some("content"));
    assert_eq!(inner.parent().map(|p| p.id()), Some(outer.id()));
}

#[test]
fn html_entities() {
    assert_eq!(sml::read("1&lt;2").unwrap(), text_doc("1<2"));
    assert_eq!(sml::read("&euro;5").unwrap(), text_doc("€5"));
}

#[test]
fn strict_closing_raises_on_mismatch() {
    let config = ReaderConfig::default().with_closing(ClosingPolicy::Strict);
    let err = sml::read_with("<a>x</b>", config).unwrap_err();
    assert!(matches!(
        err,
        Error::Read(ReadError::Structural(StructuralError::UnmatchedClose { ref name, .. })) if name == "b"
    ));
}

#[test]
fn ignoring_closing_is_a_no_op() {
    let config = ReaderConfig::default().with_closing(ClosingPolicy::Ignoring);
    assert_eq!(
        sml::read_with("<a>x</b>y</a>", config).unwrap(),
        Document::from_nodes([Node::element("a", [Node::text("xy")])])
    );
}

#[test]
fn forcing_closing_ignores_the_name() {
    let config = ReaderConfig::default().with_closing(ClosingPolicy::Forcing);
    assert_eq!(
        sml::read_with("<a>x</b>y", config).unwrap(),
        Document::from_nodes([Node::element("a", [Node::text("x")]), Node::text("y")])
    );
}

#[test]
fn out_of_range_code_point() {
    assert_eq!(sml::read_ignore("a&#110000;b").unwrap(), text_doc("ab"));
    assert_eq!(
        syntax_kind(sml::read_strict("a&#110000;b")),
        SyntaxErrorKind::InvalidCodePoint("110000".into())
    );
}

#[test]
fn strict_reading_rejects_stray_markup() {
    assert_eq!(syntax_kind(sml::read_strict("a < b")), SyntaxErrorKind::InvalidTag);
    assert_eq!(sml::read("a < b").unwrap(), text_doc("a < b"));
}

#[test]
fn syntax_errors_render() {
    let source = "<a>\n  &bogus;\n</a>";
    let Err(Error::Read(ReadError::Syntax(err))) = sml::read(source) else {
        panic!("expected a syntax error");
    };
    assert_eq!(err.to_string(), "unknown entity `&bogus;` at 2:9");
    let report = err.render("input.sml", source);
    let report = String::from_utf8(strip_ansi_escapes::strip(&report)).unwrap();
    assert!(report.contains("input.sml"), "{report}");
}

#[test]
fn scalars_survive_reencoding() {
    let values = [
        Value::Nil,
        Value::Bool(true),
        Value::Bool(false),
        Value::Number(-12.5),
        Value::Text("a < b & c".into()),
        Value::List(vec![Value::Nil, Value::Number(3.0), Value::Text(String::new())]),
    ];
    for value in values {
        let markup = sml::write_value(&value).unwrap();
        let reread = sml::read_value(&markup).unwrap();
        assert_eq!(sml::write_value(&reread).unwrap(), markup);
        assert_eq!(reread, value);
    }
}

#[test]
fn dictionary_payloads_decode_on_demand() {
    let value = Value::dictionary([("n", Value::Number(1.0)), ("t", Value::Text("x".into()))]);
    let markup = sml::write_value(&value).unwrap();
    insta::assert_snapshot!(
        markup,
        @"<dictionairy><entry><text>n</text><value><number>1</number></value></entry><entry><text>t</text><value><text>x</text></value></entry></dictionairy>"
    );

    let back = sml::read_value(&markup).unwrap();
    let raw = back.get("n").and_then(Value::as_raw).unwrap();
    assert_eq!(sml::decode_node(raw), Ok(Value::Number(1.0)));
}

#[test]
fn malformed_entries_raise() {
    let one_child = "<map><entry><text>k</text></entry></map>";
    let no_wrapper = "<map><entry><text>k</text><other>v</other></entry></map>";
    for source in [one_child, no_wrapper] {
        assert!(
            matches!(sml::read_value(source), Err(Error::Value(ValueError::InvalidEntry))),
            "{source}"
        );
    }
}

#[test]
fn beautified_values_decode_with_whitespace_skipping() {
    let value = Value::List(vec![Value::Bool(true), Value::Number(2.0)]);
    let markup = sml::write_beautified(&sml::encode(&value).unwrap());
    assert_eq!(
        markup,
        "\n<list>\n  <true>\n</true>\n  <number>\n    2\n</number>\n</list>\n"
    );
    let doc = sml::read(&markup).unwrap();
    let options = sml::DecodeOptions::default().skip_whitespace(true);
    assert_eq!(sml::decode_with(&doc, options), Ok(value));
}

#[test]
fn write_to_any_sink() {
    let doc = sml::read("<p>hi</p>").unwrap();
    let out = sml::write_to(&doc, String::from("> "), sml::WriterOptions::compress()).unwrap();
    assert_eq!(out, "> <p>hi</>");
}
