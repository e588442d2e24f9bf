use crate::node::{AttributeParseInfo, ElementParseInfo, TextParseInfo};
use crate::tree_sink::TreeSink;
use pinparse_shared::node::NodeId;
use pinparse_shared::stream::SourceInterval;
use serde::Serialize;

/// The language the parser is reading at a given position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Html,
    Css,
    Javascript,
    Text,
}

/// A context switch and the position it happened at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContextRecord {
    pub context: Context,
    pub position: usize,
}

/// Sits between the parser and a tree sink. It keeps track of the node new content is appended
/// to, and of every context switch along the way.
pub struct DomBuilder<S: TreeSink> {
    sink: S,
    current: NodeId,
    contexts: Vec<ContextRecord>,
    /// Blank the value of every `on*` attribute
    disallow_active_attributes: bool,
}

impl<S: TreeSink> DomBuilder<S> {
    pub fn new(sink: S, disallow_active_attributes: bool) -> Self {
        let current = sink.root();
        let mut builder = Self {
            sink,
            current,
            contexts: Vec::new(),
            disallow_active_attributes,
        };
        builder.push_context(Context::Html, 0);
        builder
    }

    /// Appends a new element to the current node and makes it the current node
    pub fn push_element(&mut self, name: &str, parse_info: ElementParseInfo, namespace: Option<&str>) -> NodeId {
        let node = self.sink.create_element(self.current, name, namespace, parse_info);
        self.current = node;
        node
    }

    /// Makes the parent of the current node the current node. Popping the root is a no-op.
    pub fn pop_element(&mut self) {
        match self.sink.parent_of(self.current) {
            Some(parent) => {
                log::debug!("closing <{}>", self.current_tag_name().unwrap_or_default());
                self.current = parent;
            }
            None => log::debug!("pop_element() called on the root"),
        }
    }

    pub fn push_context(&mut self, context: Context, position: usize) {
        log::debug!("switching to {context:?} at {position}");
        self.contexts.push(ContextRecord { context, position });
    }

    pub fn comment(&mut self, text: &str, parse_info: SourceInterval) {
        self.sink.create_comment(self.current, text, parse_info);
    }

    /// Sets an attribute on the current element
    pub fn attribute(&mut self, name: &str, value: &str, parse_info: AttributeParseInfo) {
        let value = if self.disallow_active_attributes && is_event_handler(name) {
            ""
        } else {
            value
        };
        self.sink.insert_attribute(self.current, name, value, parse_info);
    }

    pub fn text(&mut self, text: &str, parse_info: TextParseInfo) {
        self.sink.create_text(self.current, text, parse_info);
    }

    #[must_use]
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.current == self.sink.root()
    }

    #[must_use]
    pub fn fragment(&self) -> NodeId {
        self.sink.root()
    }

    #[must_use]
    pub fn current_tag_name(&self) -> Option<&str> {
        self.sink.tag_name(self.current)
    }

    #[must_use]
    pub fn tag_name_of(&self, node: NodeId) -> Option<&str> {
        self.sink.tag_name(node)
    }

    #[must_use]
    pub fn current_parse_info(&self) -> Option<&ElementParseInfo> {
        self.sink.element_parse_info(self.current)
    }

    pub fn current_parse_info_mut(&mut self) -> Option<&mut ElementParseInfo> {
        self.sink.element_parse_info_mut(self.current)
    }

    pub fn set_doctype(&mut self, interval: SourceInterval) {
        self.sink.set_doctype(interval);
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn contexts(&self) -> &[ContextRecord] {
        &self.contexts
    }

    /// Hands back the sink and the recorded context switches
    pub fn into_parts(self) -> (S, Vec<ContextRecord>) {
        (self.sink, self.contexts)
    }
}

fn is_event_handler(name: &str) -> bool {
    name.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}
