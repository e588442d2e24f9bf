use crate::node::arena::NodeArena;
use crate::node::{
    Attribute, AttributeParseInfo, CommentData, ElementData, ElementParseInfo, FragmentData, Node, NodeData,
    TextData, TextParseInfo,
};
use crate::tree_sink::TreeSink;
use pinparse_shared::node::NodeId;
use pinparse_shared::stream::SourceInterval;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// In-memory tree of a parsed document fragment. Every node keeps the source intervals it was
/// parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    arena: NodeArena,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.register_node(Node::new(NodeData::Fragment(FragmentData::default())));
        Self { arena, root }
    }

    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Fetches a node by id or returns None when no node with this ID is found
    #[must_use]
    pub fn node_by_id(&self, node_id: NodeId) -> Option<&Node> {
        self.arena.node_ref(node_id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Children of a node, in document order
    #[must_use]
    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.arena.node_ref(node_id).map(|node| node.children.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn parent(&self, node_id: NodeId) -> Option<&Node> {
        self.arena
            .node_ref(node_id)
            .and_then(|node| node.parent)
            .and_then(|parent| self.arena.node_ref(parent))
    }

    /// Interval of a leading `<!DOCTYPE html>`
    #[must_use]
    pub fn doctype(&self) -> Option<SourceInterval> {
        match self.arena.node_ref(self.root).map(|node| &node.data) {
            Some(NodeData::Fragment(data)) => data.doctype,
            _ => None,
        }
    }

    /// All elements with the given tag name, in document order
    #[must_use]
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_elements(self.root, name, &mut found);
        found
    }

    fn collect_elements(&self, node_id: NodeId, name: &str, found: &mut Vec<NodeId>) {
        let mut stack: Vec<NodeId> = self.children(node_id).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.arena.node_ref(id).and_then(Node::name) == Some(name) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev());
        }
    }

    /// First element with the given tag name
    #[must_use]
    pub fn element_by_tag_name(&self, name: &str) -> Option<&Node> {
        self.elements_by_tag_name(name)
            .first()
            .and_then(|id| self.arena.node_ref(*id))
    }

    /// Concatenated text of all text nodes below the given node
    #[must_use]
    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(node_id, &mut text);
        text
    }

    fn collect_text(&self, node_id: NodeId, text: &mut String) {
        let mut stack: Vec<NodeId> = self.children(node_id).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(data) = self.arena.node_ref(id).and_then(Node::text_data) {
                text.push_str(&data.value);
            }
            stack.extend(self.children(id).iter().rev());
        }
    }

    fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        let id = self.arena.register_node(node);
        if let Some(parent) = self.arena.node_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    fn print_tree(&self, f: &mut Formatter) -> fmt::Result {
        // Entries are (node, prefix of its line, last child of its parent)
        let mut stack = vec![(self.root, String::new(), true)];

        while let Some((node_id, prefix, last)) = stack.pop() {
            let Some(node) = self.arena.node_ref(node_id) else {
                continue;
            };
            self.print_node(node, &prefix, last, f)?;

            let mut child_prefix = prefix;
            child_prefix.push_str(if last { "   " } else { "│  " });

            let count = node.children.len();
            for (i, child) in node.children.iter().enumerate().rev() {
                stack.push((*child, child_prefix.clone(), i == count - 1));
            }
        }
        Ok(())
    }

    fn print_node(&self, node: &Node, prefix: &str, last: bool, f: &mut Formatter) -> fmt::Result {
        let mut buffer = prefix.to_string();
        buffer.push_str(if last { "└─ " } else { "├─ " });

        match &node.data {
            NodeData::Fragment(data) => match data.doctype {
                Some(doctype) => writeln!(f, "{buffer}Fragment (doctype {doctype})"),
                None => writeln!(f, "{buffer}Fragment"),
            },
            NodeData::Text(TextData { value, parse_info }) => {
                writeln!(f, r#"{buffer}"{}" [{}]"#, value.escape_debug(), parse_info.interval())
            }
            NodeData::Comment(CommentData { value, parse_info }) => {
                writeln!(f, "{buffer}<!--{value}--> [{parse_info}]")
            }
            NodeData::Element(element) => {
                write!(f, "{}<{}", buffer, element.name)?;
                for attr in &element.attributes {
                    write!(f, r#" {}="{}""#, attr.name, attr.value)?;
                }
                let open = element.parse_info.open_tag;
                write!(f, "> [{}..{}", open.start, open.end.map_or(String::new(), |e| e.to_string()))?;
                if let Some(close) = element.parse_info.close_tag {
                    write!(f, ", close {close}")?;
                }
                writeln!(f, "]")
            }
        }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.print_tree(f)
    }
}

impl TreeSink for Document {
    fn root(&self) -> NodeId {
        self.root
    }

    fn create_element(
        &mut self,
        parent: NodeId,
        name: &str,
        namespace: Option<&str>,
        parse_info: ElementParseInfo,
    ) -> NodeId {
        let data = ElementData {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            attributes: Vec::new(),
            parse_info,
        };
        self.append(parent, Node::new(NodeData::Element(data)))
    }

    fn insert_attribute(&mut self, element: NodeId, name: &str, value: &str, parse_info: AttributeParseInfo) {
        let Some(data) = self.arena.node_mut(element).and_then(Node::element_data_mut) else {
            log::warn!("attribute {name} set on node {element}, which is not an element");
            return;
        };
        data.set_attribute(Attribute {
            name: name.to_string(),
            value: value.to_string(),
            parse_info,
        });
    }

    fn create_text(&mut self, parent: NodeId, text: &str, parse_info: TextParseInfo) -> NodeId {
        let data = TextData {
            value: text.to_string(),
            parse_info,
        };
        self.append(parent, Node::new(NodeData::Text(data)))
    }

    fn create_comment(&mut self, parent: NodeId, text: &str, parse_info: SourceInterval) -> NodeId {
        let data = CommentData {
            value: text.to_string(),
            parse_info,
        };
        self.append(parent, Node::new(NodeData::Comment(data)))
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.arena.node_ref(node).and_then(|node| node.parent)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.arena.node_ref(node).and_then(Node::name)
    }

    fn element_parse_info(&self, node: NodeId) -> Option<&ElementParseInfo> {
        self.arena
            .node_ref(node)
            .and_then(Node::element_data)
            .map(|data| &data.parse_info)
    }

    fn element_parse_info_mut(&mut self, node: NodeId) -> Option<&mut ElementParseInfo> {
        self.arena
            .node_mut(node)
            .and_then(Node::element_data_mut)
            .map(|data| &mut data.parse_info)
    }

    fn set_doctype(&mut self, interval: SourceInterval) {
        if let Some(NodeData::Fragment(data)) = self.arena.node_mut(self.root).map(|node| &mut node.data) {
            data.doctype = Some(interval);
        }
    }
}

/// Writes a short outline of the tree, one line per element, used in log output
pub fn outline(document: &Document) -> String {
    let mut out = String::new();
    let mut stack: Vec<(NodeId, usize)> = document
        .children(document.root_id())
        .iter()
        .rev()
        .map(|id| (*id, 0))
        .collect();

    while let Some((node_id, depth)) = stack.pop() {
        // Text and comments end their branch of the outline
        let Some(name) = document.node_by_id(node_id).and_then(Node::name) else {
            continue;
        };
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), name);
        stack.extend(document.children(node_id).iter().rev().map(|id| (*id, depth + 1)));
    }
    out
}
