use pinparse_html::document::Document;
use pinparse_html::dom_builder::Context;
use pinparse_html::node::{Node, SVG_NAMESPACE};
use pinparse_html::{
    find_error, parse_html, parse_with, replace_entity_refs, DocumentWriter, ParseError, ParseOutput, ParserOptions,
    CSS_PROPERTY_NAMES, HTML_ELEMENT_NAMES,
};
use pinparse_shared::node::NodeId;
use pinparse_shared::stream::SourceInterval;
use serde_json::json;
use test_case::test_case;

fn parse(source: &str) -> ParseOutput {
    parse_html(source, &ParserOptions::default())
}

fn parse_without_errors(source: &str) -> Document {
    let output = parse(source);
    assert!(output.error.is_none(), "{source}: {:?}", output.error);
    output.document
}

fn error_json(source: &str) -> serde_json::Value {
    let error = find_error(source).expect("source should not parse");
    serde_json::to_value(error).unwrap()
}

fn first_child(doc: &Document) -> &Node {
    let id = doc.children(doc.root_id())[0];
    doc.node_by_id(id).unwrap()
}

fn child(doc: &Document, parent: NodeId, index: usize) -> &Node {
    doc.node_by_id(doc.children(parent)[index]).unwrap()
}

#[test]
fn valid_doctype() {
    let html = "<!DOCTYPE html><p>hi</p>";
    let doc = parse_without_errors(html);
    let doctype = doc.doctype().unwrap();
    assert_eq!(doctype.slice(html), "<!DOCTYPE html>");
}

#[test]
fn misplaced_doctype() {
    assert_eq!(
        error_json("<p>hi</p><!DOCTYPE html>"),
        json!({
            "type": "INVALID_TAG_NAME",
            "openTag": {"name": "", "start": 9, "end": 10},
            "cursor": 9
        })
    );
}

#[test]
fn comments() {
    let html = "hi<!--testing-->there";
    let doc = parse_without_errors(html);
    let comment = child(&doc, doc.root_id(), 1).comment_data().unwrap();
    assert_eq!(comment.value, "testing");
    assert_eq!(comment.parse_info.slice(html), "<!--testing-->");

    let html = "<!-- allow\n--\nin comments plz -->";
    let doc = parse_without_errors(html);
    assert_eq!(DocumentWriter::write(&doc), html);
}

#[test]
fn boolean_attributes() {
    let html = r#"<a href class="foo"></a>"#;
    let doc = parse_without_errors(html);
    let a = first_child(&doc).element_data().unwrap();

    let href = a.attribute("href").unwrap();
    assert_eq!(href.value, "");
    assert_eq!(href.parse_info.name.slice(html), "href");
    assert_eq!(href.parse_info.value, None);

    let class = a.attribute("class").unwrap();
    assert_eq!(class.value, "foo");
    assert_eq!(class.parse_info.name.slice(html), "class");
    assert_eq!(class.parse_info.value.unwrap().slice(html), r#""foo""#);
}

#[test]
fn script_contents() {
    let html = "<script>x < 3;</script>";
    let doc = parse_without_errors(html);
    assert_eq!(doc.children(doc.root_id()).len(), 1);

    let script = first_child(&doc);
    assert_eq!(script.name(), Some("script"));
    assert_eq!(script.children.len(), 1);

    let text = child(&doc, script.id, 0).text_data().unwrap();
    assert_eq!(text.value, "x < 3;");
    assert_eq!(text.parse_info.interval().slice(html), "x < 3;");

    let info = script.element_data().unwrap().parse_info;
    assert_eq!(info.open_tag.interval().unwrap().slice(html), "<script>");
    assert_eq!(info.close_tag.unwrap().slice(html), "</script>");
}

#[test]
fn textarea_contents_are_not_markup() {
    let text = "\nThis is CDATA with <p>, <i> and <script> in it.\nThis should not trigger errors.";
    let html = format!("<textarea>{text}</textarea>");
    let doc = parse_without_errors(&html);
    let textarea = first_child(&doc);
    assert_eq!(textarea.name(), Some("textarea"));
    assert_eq!(textarea.children.len(), 1);
    assert_eq!(doc.text_content(textarea.id), text);
}

#[test_case(r#"<P CLASS="FOO">hi</P>"#)]
#[test_case(r#"<P class="FOO">hi</P>"#)]
#[test_case(r#"<p class="FOO">hi</P>"#)]
#[test_case(r#"<P class="FOO">hi</p>"#)]
fn case_insensitive(html: &str) {
    let doc = parse_without_errors(html);
    let p = first_child(&doc).element_data().unwrap();
    assert_eq!(p.name, "p");
    assert_eq!(p.attribute("class").unwrap().value, "FOO");
}

#[test]
fn svg_elements() {
    let d = "M 0 0 L 100 0 L 100 100 L 0 100 Z";
    let html = format!("<svg width='100' height='100' viewbox='0 0 100 100'><path d='{d}'/></svg>");
    let doc = parse_without_errors(&html);

    let svg = first_child(&doc);
    assert_eq!(svg.element_data().unwrap().namespace.as_deref(), Some(SVG_NAMESPACE));
    let path = child(&doc, svg.id, 0).element_data().unwrap();
    assert_eq!(path.name, "path");
    assert_eq!(path.namespace.as_deref(), Some(SVG_NAMESPACE));
    assert_eq!(path.attribute("d").unwrap().value, d);
}

#[test]
fn html_outside_svg_is_html_again() {
    let doc = parse_without_errors("<svg><rect/></svg><p>x</p>");
    let p = doc.element_by_tag_name("p").and_then(Node::element_data).unwrap();
    assert_eq!(p.namespace, None);
}

#[test_case("<p class = \"foo\">hello there</p><p>u</p>")]
#[test_case("<p class=\"foo\"  >hello there</p><p>u</p>")]
#[test_case("<p \nclass=\"foo\">hello there</p><p>u</p>")]
#[test_case("<p class=\"foo\">hello there</p ><p>u</p>")]
fn whitespace_in_tags(html: &str) {
    let doc = parse_without_errors(html);
    let p = first_child(&doc);

    let text = child(&doc, p.id, 0).text_data().unwrap();
    assert_eq!(text.parse_info.interval().slice(html), "hello there");

    let class = &p.element_data().unwrap().attributes[0];
    assert_eq!(class.parse_info.name.slice(html), "class");
    assert_eq!(class.parse_info.value.unwrap().slice(html), r#""foo""#);

    assert_eq!(DocumentWriter::write(&doc), r#"<p class="foo">hello there</p><p>u</p>"#);
}

#[test_case("hello<br/>", "<br/>" ; "self closing")]
#[test_case("hello<br />", "<br />" ; "self closing with space")]
fn self_closing_void_elements(html: &str, open_tag: &str) {
    let doc = parse_without_errors(html);
    let br = child(&doc, doc.root_id(), 1).element_data().unwrap();
    assert_eq!(br.parse_info.open_tag.interval().unwrap().slice(html), open_tag);
    assert_eq!(br.parse_info.close_tag, None);
}

#[test]
fn entities_in_text_and_attributes() {
    let html = "<p>&lt;p&gt;</p>";
    let doc = parse_without_errors(html);
    let text = child(&doc, first_child(&doc).id, 0).text_data().unwrap();
    assert_eq!(text.value, "<p>");
    assert_eq!(text.parse_info.interval().slice(html), "&lt;p&gt;");

    let html = r#"<p class="1 &lt; 2 &LT; 3"></p>"#;
    let doc = parse_without_errors(html);
    let class = first_child(&doc).element_data().unwrap().attribute("class").unwrap();
    assert_eq!(class.value, "1 < 2 < 3");
    assert_eq!(class.parse_info.value.unwrap().slice(html), r#""1 &lt; 2 &LT; 3""#);
}

#[test_case("&lt;", "<")]
#[test_case("&gt;", ">")]
#[test_case("&amp;", "&")]
#[test_case("&quot;", "\"")]
#[test_case("&QUOT;", "\"" ; "case insensitive")]
#[test_case("&lt;p&gt; tag", "<p> tag" ; "several references")]
#[test_case("hello &garbage;", "hello &garbage;" ; "unknown reference")]
fn entity_references(text: &str, expected: &str) {
    assert_eq!(replace_entity_refs(text), expected);
}

#[test_case("<", "INVALID_TAG_NAME" ; "lone angle bracket")]
#[test_case("<h2><span start=</h2>", "UNQUOTED_ATTR_VALUE" ; "unquoted before close tag")]
#[test_case("<style>/* hello */ {</style>", "MISSING_CSS_SELECTOR" ; "selector after comment")]
#[test_case("<a href=\"http://www.foo.com/\">Foo</a href>", "ATTRIBUTE_IN_CLOSING_TAG" ; "attribute in close tag")]
#[test_case("<div><span></div>", "MISMATCHED_CLOSE_TAG" ; "mismatched")]
#[test_case("<div>", "UNCLOSED_TAG" ; "unclosed")]
#[test_case("<blah></blah>", "INVALID_TAG_NAME" ; "unknown element")]
#[test_case("<p>hi</p></p>", "UNEXPECTED_CLOSE_TAG" ; "unexpected close tag")]
#[test_case("<img></img>", "CLOSE_TAG_FOR_VOID_ELEMENT" ; "void close tag")]
#[test_case("<p>x<!-- y", "UNTERMINATED_COMMENT" ; "unterminated comment")]
#[test_case("<p/>", "SELF_CLOSING_NON_VOID_ELEMENT" ; "self closing p")]
#[test_case("<p <b>", "UNTERMINATED_OPEN_TAG" ; "unterminated open tag")]
fn error_kinds(html: &str, kind: &str) {
    let error = find_error(html).unwrap();
    assert_eq!(error.kind(), kind);
    assert!(!error.is_warning());
}

#[test]
fn error_positions_at_end_of_stream() {
    let html = "<a href=\"";
    assert_eq!(
        error_json(html),
        json!({
            "type": "UNTERMINATED_ATTR_VALUE",
            "openTag": {"name": "a", "start": 0},
            "attribute": {
                "name": {"value": "href", "start": 3, "end": 7},
                "value": {"start": 8}
            },
            "cursor": 8
        })
    );

    assert_eq!(error_json("<a href="), json!({"type": "UNQUOTED_ATTR_VALUE", "start": 8, "cursor": 8}));

    assert_eq!(
        error_json("<span>test</span"),
        json!({
            "type": "UNTERMINATED_CLOSE_TAG",
            "closeTag": {"name": "span", "start": 10, "end": 16},
            "cursor": 10
        })
    );
}

#[test]
fn space_at_end_of_close_tag() {
    assert_eq!(find_error("<a href=\"http://www.foo.com/\">Foo</a  >"), None);
}

#[test]
fn exported_vocabularies() {
    assert!(HTML_ELEMENT_NAMES.contains(&"p"));
    assert!(CSS_PROPERTY_NAMES.contains(&"color"));
}

#[test_case("<div><p>text\n<p>more text</div>" ; "paragraph closed by paragraph")]
#[test_case("<ul><li><p></li></ul>" ; "empty paragraph in list item")]
#[test_case("<ul><li><p>x</li></ul>" ; "paragraph in list item")]
#[test_case("<ul><li><p>x</p></li></ul>" ; "closed paragraph in list item")]
#[test_case("<ul><li><p>x</p>m</li></ul>" ; "closed paragraph followed by text")]
#[test_case("<ul><li><p>x<p>y</li></ul>" ; "two paragraphs in list item")]
fn optional_close_tags(html: &str) {
    parse_without_errors(html);
}

#[test]
fn optional_close_tag_misuse() {
    assert_eq!(
        error_json("<div><p>text\n<a>more text</a></div>"),
        json!({
            "type": "MISMATCHED_CLOSE_TAG",
            "openTag": {"name": "p", "start": 5, "end": 8},
            "closeTag": {"name": "div", "start": 29, "end": 34},
            "cursor": 29
        })
    );
}

#[test_case("<style>div:before { content: '&lt;' attr(test) 'test'; content: \"&lt;\"; }</style>" ; "content with semicolons")]
#[test_case("<style>div:before { content: 'let\\'s try \";\", eh?'; }</style>" ; "content with nested quotes")]
#[test_case("<style>@keyframes { 0% { opacity: 0; } 100% { opacity: 1.0; } } .test { opacity: 0; }</style>" ; "keyframes")]
#[test_case("<style>@keyframes animation1 { 0% { left: 260px; top: -10%; } 100% { left: 260px; top: 100%; } }</style>" ; "named keyframes")]
#[test_case("<style>@-moz-keyframes { 0% { opacity: 0; } 100% { opacity: 1.0; } } .test { opacity: 0; }</style>" ; "moz keyframes")]
#[test_case("<style>@-webkit-keyframes { 0% { opacity: 0; } 100% { opacity: 1.0; } } .test { opacity: 0; }</style>" ; "webkit keyframes")]
#[test_case("<style>/*\n  keyframe test\n*/\n@keyframes { 0% { opacity: 0; } 100% { opacity: 1.0; } } .test { opacity: 0; }</style>" ; "keyframes after comment")]
#[test_case("<style>\n@keyframes { 0% { opacity: 0; } 100% { opacity: 1.0; } } .test { opacity: 0; }\n/*\n  keyframe test\n*/\n</style>" ; "keyframes before comment")]
#[test_case("<style>@media (max-width: 100px) { .class { background: white; } }</style>" ; "media")]
#[test_case("<style>@media (min-width: 700px), handheld and (orientation: landscape) { .class { background: white; } }</style>" ; "complex media")]
#[test_case("<style>@font-face { font-family: 'snickerdoodle'; } .test { opacity: 0; }</style>" ; "font face")]
fn style_sheets(html: &str) {
    parse_without_errors(html);
}

#[test_case("<style>@keyfarmes { 0% { opacity: 0; } 100% { opacity: 1.0; } } .test { opacity: 0; }</style>", "@keyfarmes" ; "keyframes typo")]
#[test_case("<style>@font-faec { font-family: 'snickerdoodle'; } .test { opacity: 0; }</style>", "@font-faec" ; "font face typo")]
fn unknown_at_rules(html: &str, keyword: &str) {
    assert_eq!(
        error_json(html),
        json!({
            "type": "UNKOWN_CSS_KEYWORD",
            "cssKeyword": {"start": 7, "end": 18, "value": keyword},
            "cursor": 7
        })
    );
}

#[test]
fn style_sheet_structure() {
    let html = "<style>/** comment 1 **/ bo/* comment 2 */dy /*comment 3*/{ /* c4 */ co/*c5*/lor/*c6*/: /*c7*/pi/*c8*/nk/*c9****** c9 *****/}</style>";
    let doc = parse_without_errors(html);
    let style = first_child(&doc);
    let text = child(&doc, style.id, 0).text_data().unwrap();
    let css = text.parse_info.css().unwrap();

    assert_eq!(css.rules.len(), 1);
    let rule = &css.rules[0];
    assert_eq!(rule.selector.value, "body");
    assert_eq!(rule.selector.interval().slice(html), "bo/* comment 2 */dy");

    let declarations = &rule.declarations;
    let block = SourceInterval::new(declarations.start.unwrap(), declarations.end.unwrap());
    assert_eq!(
        block.slice(html),
        "{ /* c4 */ co/*c5*/lor/*c6*/: /*c7*/pi/*c8*/nk/*c9****** c9 *****/}"
    );
    assert_eq!(declarations.properties.len(), 1);
    assert_eq!(declarations.properties[0].name.value, "color");
    assert_eq!(declarations.properties[0].name.interval().slice(html), "co/*c5*/lor");
    assert_eq!(declarations.properties[0].value.value, "pink");
    assert_eq!(declarations.properties[0].value.interval().slice(html), "pi/*c8*/nk");

    let comments: Vec<String> = css.comments.iter().map(|c| c.slice(html)).collect();
    assert_eq!(
        comments,
        vec![
            "/** comment 1 **/",
            "/* comment 2 */",
            "/*comment 3*/",
            "/* c4 */",
            "/*c5*/",
            "/*c6*/",
            "/*c7*/",
            "/*c8*/",
            "/*c9****** c9 *****/",
        ]
    );
}

#[test]
fn vendor_prefixes() {
    let html = "<style>.vendors { -o-border-radius: 5px; -moz-border-radius: 5px; -webkit-border-radius: 5px; -ms-border-radius: 5px; border-radius: 5px; }</style>";
    let doc = parse_without_errors(html);
    let style = doc.elements_by_tag_name("style")[0];
    let text = doc.node_by_id(doc.children(style)[0]).and_then(Node::text_data).unwrap();
    let properties = &text.parse_info.css().unwrap().rules[0].declarations.properties;

    let names: Vec<&str> = properties.iter().map(|p| p.name.value.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "-o-border-radius",
            "-moz-border-radius",
            "-webkit-border-radius",
            "-ms-border-radius",
            "border-radius"
        ]
    );
    assert!(properties.iter().all(|p| p.value.value == "5px"));
}

#[test_case("<p-q style=\"color: green;\">hello</p-q>" ; "custom element")]
#[test_case("<svg><use xlink:href='#triangle' transform='scale(-1,1)'/></svg>" ; "xlink attributes")]
#[test_case("<p xml:spaces='2'>test</p>" ; "xml attributes")]
fn accepted_markup(html: &str) {
    parse_without_errors(html);
}

#[test]
fn custom_element_names() {
    assert_eq!(
        error_json("<-></->"),
        json!({"type": "INVALID_TAG_NAME", "openTag": {"name": "-", "start": 0, "end": 2}, "cursor": 0})
    );
}

#[test]
fn attribute_namespaces() {
    assert_eq!(
        error_json("<p nonsense:attribute='triangle'>test</p>"),
        json!({
            "type": "UNSUPPORTED_ATTR_NAMESPACE",
            "start": 3,
            "end": 21,
            "attribute": {"name": {"value": "nonsense:attribute"}},
            "cursor": 3
        })
    );
    assert_eq!(
        error_json("<svg><rect xml:xlink:href='#triangle' /></svg>"),
        json!({
            "type": "MULTIPLE_ATTR_NAMESPACES",
            "start": 11,
            "end": 25,
            "attribute": {"name": {"value": "xml:xlink:href"}},
            "cursor": 11
        })
    );
}

#[test]
fn rogue_attribute_value() {
    assert_eq!(
        error_json(r#"<body><img src="https://example.org/test.png" alt="test image" width "207"></body>"#),
        json!({
            "type": "UNBOUND_ATTRIBUTE_VALUE",
            "value": "\"207\"",
            "interval": {"start": 69, "end": 74},
            "cursor": 69
        })
    );
}

#[test]
fn active_attributes() {
    let html = "<img src='bogus' onerror='prompt(document.domain)'>";

    let doc = parse_without_errors(html);
    let img = first_child(&doc).element_data().unwrap();
    assert_eq!(img.attribute("onerror").unwrap().value, "prompt(document.domain)");

    let options = ParserOptions {
        disallow_active_attributes: true,
        ..ParserOptions::default()
    };
    let output = parse_html(html, &options);
    assert!(output.error.is_none());
    let img = first_child(&output.document).element_data().unwrap();
    assert_eq!(img.attribute("onerror").unwrap().value, "");
    assert_eq!(img.attribute("src").unwrap().value, "bogus");
}

#[test]
fn output_json_shape() {
    let output = parse("<p>hi</p>");
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "contexts": [{"context": "html", "position": 0}],
            "warnings": false,
            "error": null
        })
    );
}

#[test]
fn contexts_follow_the_parser() {
    let output = parse("<style>p { color: red; }</style><script>x</script><!-- c --><textarea>t</textarea>");
    let contexts: Vec<(Context, usize)> = output.contexts.iter().map(|c| (c.context, c.position)).collect();
    assert_eq!(
        contexts,
        vec![
            (Context::Html, 0),
            (Context::Css, 7),
            (Context::Html, 24),
            (Context::Javascript, 40),
            (Context::Html, 50),
            (Context::Text, 54),
            (Context::Html, 60),
            (Context::Text, 70),
            (Context::Html, 82),
        ]
    );
}

#[test]
fn mixed_content_warnings() {
    let options = ParserOptions {
        https_context: true,
        ..ParserOptions::default()
    };
    let html = concat!(
        r#"<link href="http://example.org/a.css">"#,
        r#"<style>body { background: url("http://example.org/a.png"); }</style>"#
    );
    let output = parse_html(html, &options);
    assert!(output.error.is_none(), "{:?}", output.error);

    let warnings = output.warnings.unwrap();
    let kinds: Vec<&str> = warnings.iter().map(ParseError::kind).collect();
    assert_eq!(kinds, vec!["HTTP_LINK_FROM_HTTPS_PAGE", "CSS_MIXED_ACTIVECONTENT"]);
    assert!(warnings.iter().all(ParseError::is_warning));

    let json = serde_json::to_value(&warnings[0]).unwrap();
    assert_eq!(
        json,
        json!({
            "type": "HTTP_LINK_FROM_HTTPS_PAGE",
            "openTag": {"name": "link", "start": 0},
            "attribute": {
                "name": {"value": "href", "start": 6, "end": 10},
                "value": {"start": 12, "end": 36}
            },
            "cursor": 12
        })
    );

    assert!(parse(html).warnings.is_none());
}

#[test]
fn warnings_are_dropped_when_the_parse_fails() {
    let options = ParserOptions {
        https_context: true,
        ..ParserOptions::default()
    };
    let output = parse_html(r#"<script src="http://example.org/a.js"></script><div>"#, &options);
    assert_eq!(output.error.as_ref().map(ParseError::kind), Some("UNCLOSED_TAG"));
    assert!(output.warnings.is_none());
}

#[test]
fn error_detectors() {
    let options: ParserOptions = ParserOptions {
        error_detectors: vec![
            Box::new(|_: &str, _: &Document| -> Option<ParseError> { None }),
            Box::new(|source: &str, doc: &Document| -> Option<ParseError> {
                doc.elements_by_tag_name("blink")
                    .first()
                    .map(|_| ParseError::unterminated_comment(source.len()))
            }),
            Box::new(|_: &str, _: &Document| -> Option<ParseError> { Some(ParseError::unterminated_comment(0)) }),
        ],
        ..ParserOptions::default()
    };

    let output = parse_html("<blink>hi</blink>", &options);
    assert_eq!(output.error, Some(ParseError::unterminated_comment(17)));

    // A parse error wins over every detector
    let output = parse_html("<blink>", &options);
    assert_eq!(output.error.map(|e| e.kind()), Some("UNCLOSED_TAG"));
}

#[test]
fn custom_sink() {
    let options = ParserOptions::default();
    let output = parse_with(Document::new(), "<p>a</p>", &options);
    assert!(output.error.is_none());
    assert_eq!(output.document.elements_by_tag_name("p").len(), 1);
}

#[test]
fn partial_document_on_error() {
    let output = parse("<div><p>one</p><span>two</div>");
    assert!(output.error.is_some());
    let doc = output.document;
    assert_eq!(doc.elements_by_tag_name("p").len(), 1);
    assert_eq!(doc.text_content(doc.root_id()), "onetwo");
}
