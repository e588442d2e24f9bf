//! Element vocabularies
//!
//! Tag names are validated against fixed lists. Inside an `<svg>` element only SVG element names
//! are accepted, everywhere else the HTML lists apply, extended with custom element names such as
//! `<my-widget>`.
use lazy_static::lazy_static;
use regex::Regex;

/// Elements that never have content and must not be closed
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

pub const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "bgsound", "blink", "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code",
    "col", "colgroup", "command", "datalist", "dd", "del", "details", "dfn", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "frame", "frameset", "h1",
    "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img",
    "input", "ins", "kbd", "keygen", "label", "legend", "li", "link", "main", "map", "mark",
    "marquee", "menu", "meta", "meter", "nav", "nobr", "noscript", "object", "ol", "optgroup",
    "option", "output", "p", "param", "pre", "progress", "q", "rp", "rt", "ruby", "samp", "script",
    "section", "select", "small", "source", "spacer", "span", "strong", "style", "sub", "summary",
    "sup", "svg", "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "time", "title",
    "tr", "track", "u", "ul", "var", "video", "wbr",
];

pub const SVG_ELEMENTS: &[&str] = &[
    "a", "altglyph", "altglyphdef", "altglyphitem", "animate", "animatecolor", "animatemotion",
    "animatetransform", "circle", "clippath", "color-profile", "cursor", "defs", "desc", "ellipse",
    "feblend", "fecolormatrix", "fecomponenttransfer", "fecomposite", "feconvolvematrix",
    "fediffuselighting", "fedisplacementmap", "fedistantlight", "feflood", "fefunca", "fefuncb",
    "fefuncg", "fefuncr", "fegaussianblur", "feimage", "femerge", "femergenode", "femorphology",
    "feoffset", "fepointlight", "fespecularlighting", "fespotlight", "fetile", "feturbulence",
    "filter", "font", "font-face", "font-face-format", "font-face-name", "font-face-src",
    "font-face-uri", "foreignobject", "g", "glyph", "glyphref", "hkern", "image", "line",
    "lineargradient", "marker", "mask", "metadata", "missing-glyph", "mpath", "path", "pattern",
    "polygon", "polyline", "radialgradient", "rect", "script", "set", "stop", "style", "svg",
    "switch", "symbol", "text", "textpath", "title", "tref", "tspan", "use", "view", "vkern",
];

/// Elements that are no longer part of HTML but are still common in the wild
pub const OBSOLETE_ELEMENTS: &[&str] = &[
    "acronym", "applet", "basefont", "big", "center", "dir", "font", "isindex", "listing",
    "noframes", "plaintext", "s", "strike", "tt", "xmp",
];

pub const WEB_COMPONENT_ELEMENTS: &[&str] = &["template", "shadow", "content"];

/// Namespaces an attribute name may be prefixed with
pub const ATTRIBUTE_NAMESPACES: &[&str] = &["xlink", "xml"];

/// Elements whose closing tag may be left out
pub const OMITTABLE_CLOSE_TAG_ELEMENTS: &[&str] = &["p", "li", "td", "th"];

const P_CLOSED_BY: &[&str] = &[
    "address", "article", "aside", "blockquote", "dir", "div", "dl", "fieldset", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "main", "nav", "ol", "p", "pre",
    "section", "table", "ul",
];
const CELL_CLOSED_BY: &[&str] = &["th", "td"];
const LI_CLOSED_BY: &[&str] = &["li"];

lazy_static! {
    /// Every recognised HTML element name: the void, regular and obsolete lists in that order
    pub static ref HTML_ELEMENT_NAMES: Vec<&'static str> = VOID_ELEMENTS
        .iter()
        .chain(HTML_ELEMENTS)
        .chain(OBSOLETE_ELEMENTS)
        .copied()
        .collect();

    static ref CUSTOM_ELEMENT: Regex = Regex::new(r"^[A-Za-z0-9_]+-[A-Za-z0-9_]+$").expect("valid regex");
}

/// Returns true for names of the form `word-word`
pub fn is_custom_element(name: &str) -> bool {
    CUSTOM_ELEMENT.is_match(name)
}

/// Returns true when the name is a void, regular, obsolete or web component element
pub fn is_known_html_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
        || HTML_ELEMENTS.contains(&name)
        || OBSOLETE_ELEMENTS.contains(&name)
        || WEB_COMPONENT_ELEMENTS.contains(&name)
}

pub fn is_known_svg_element(name: &str) -> bool {
    SVG_ELEMENTS.contains(&name)
}

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

pub fn has_omittable_close_tag(name: &str) -> bool {
    OMITTABLE_CLOSE_TAG_ELEMENTS.contains(&name)
}

/// Returns true when an open `<active>` element is implicitly closed by an opening `<found>` tag
pub fn is_closed_by(active: &str, found: &str) -> bool {
    let closers = match active {
        "p" => P_CLOSED_BY,
        "th" | "td" => CELL_CLOSED_BY,
        "li" => LI_CLOSED_BY,
        _ => return false,
    };
    closers.contains(&found)
}

pub fn is_supported_attribute_namespace(namespace: &str) -> bool {
    ATTRIBUTE_NAMESPACES.contains(&namespace)
}

/// Returns true for the attributes that load active content: `<link href>`, `<script src>`,
/// `<iframe src>` and `<object data>`
pub fn is_active_content(tag: &str, attribute: &str) -> bool {
    matches!(
        (attribute, tag),
        ("href", "link") | ("src", "script" | "iframe") | ("data", "object")
    )
}
