use pinparse_css::stylesheet::CssParseInfo;
use pinparse_shared::node::NodeId;
use pinparse_shared::stream::{SourceInterval, TagInterval};
use serde::Serialize;

pub mod arena;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Where an element was found in the source. The close tag is only known once the element has
/// been closed explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementParseInfo {
    pub open_tag: TagInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_tag: Option<SourceInterval>,
}

impl ElementParseInfo {
    #[must_use]
    pub fn opened_at(start: usize) -> Self {
        Self {
            open_tag: TagInterval::open(start),
            close_tag: None,
        }
    }
}

/// Where an attribute was found. Boolean attributes have no value interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AttributeParseInfo {
    pub name: SourceInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SourceInterval>,
}

/// Where a text run was found. The text inside a `<style>` element also carries the structure
/// of the CSS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextParseInfo {
    Text(SourceInterval),
    Css(CssParseInfo),
}

impl TextParseInfo {
    #[must_use]
    pub fn interval(&self) -> SourceInterval {
        match self {
            Self::Text(interval) => *interval,
            Self::Css(info) => SourceInterval::new(info.start, info.end),
        }
    }

    #[must_use]
    pub fn css(&self) -> Option<&CssParseInfo> {
        match self {
            Self::Css(info) => Some(info),
            Self::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub parse_info: AttributeParseInfo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    /// Lower-cased tag name
    pub name: String,
    pub namespace: Option<String>,
    /// Attributes in the order they were first set
    pub attributes: Vec<Attribute>,
    pub parse_info: ElementParseInfo,
}

impl ElementData {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Sets an attribute. An attribute that is set twice keeps its position but takes the
    /// latest value.
    pub fn set_attribute(&mut self, attribute: Attribute) {
        match self.attributes.iter_mut().find(|attr| attr.name == attribute.name) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextData {
    pub value: String,
    pub parse_info: TextParseInfo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentData {
    pub value: String,
    pub parse_info: SourceInterval,
}

/// The fragment every parsed node hangs off
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentData {
    /// Interval of a leading `<!DOCTYPE html>`
    pub doctype: Option<SourceInterval>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    Fragment(FragmentData),
    Element(ElementData),
    Text(TextData),
    Comment(CommentData),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// ID of the node, 0 is always the fragment root
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

impl Node {
    #[must_use]
    pub fn new(data: NodeData) -> Self {
        Self {
            id: NodeId::default(),
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[must_use]
    pub fn element_data(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn element_data_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn text_data(&self) -> Option<&TextData> {
        match &self.data {
            NodeData::Text(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn comment_data(&self) -> Option<&CommentData> {
        match &self.data {
            NodeData::Comment(data) => Some(data),
            _ => None,
        }
    }

    /// Tag name for elements
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.element_data().map(|data| data.name.as_str())
    }
}
