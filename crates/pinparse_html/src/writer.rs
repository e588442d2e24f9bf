use crate::document::Document;
use crate::elements::is_void_element;
use crate::node::{CommentData, ElementData, Node, NodeData, TextData};
use pinparse_shared::node::NodeId;

/// Tags whose text is written back without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

pub trait Visitor {
    fn fragment_enter(&mut self, node: &Node);
    fn fragment_leave(&mut self, node: &Node);

    fn text_enter(&mut self, node: &Node, data: &TextData);
    fn text_leave(&mut self, node: &Node, data: &TextData);

    fn comment_enter(&mut self, node: &Node, data: &CommentData);
    fn comment_leave(&mut self, node: &Node, data: &CommentData);

    fn element_enter(&mut self, node: &Node, data: &ElementData);
    fn element_leave(&mut self, node: &Node, data: &ElementData);
}

/// Writer to convert a document back to markup
pub struct DocumentWriter {
    /// The buffer to write to
    buffer: String,
    /// Whether to include comments in the output
    comments: bool,
    /// Number of open raw text elements
    raw_text: usize,
}

impl DocumentWriter {
    /// Writes the whole document, comments included
    pub fn write(document: &Document) -> String {
        Self::write_from_node(document.root_id(), document, true)
    }

    pub fn write_from_node(node: NodeId, document: &Document, comments: bool) -> String {
        let mut w = Self {
            buffer: String::new(),
            comments,
            raw_text: 0,
        };

        w.visit_node(node, document);
        w.buffer
    }

    fn visit_node(&mut self, id: NodeId, document: &Document) {
        let mut stack = vec![Step::Enter(id)];

        while let Some(step) = stack.pop() {
            let (Step::Enter(id) | Step::Leave(id)) = step;
            let Some(node) = document.node_by_id(id) else {
                continue;
            };

            match (&node.data, step) {
                (NodeData::Fragment(_), Step::Enter(_)) => {
                    self.fragment_enter(node);
                    push_children(&mut stack, node);
                }
                (NodeData::Fragment(_), Step::Leave(_)) => self.fragment_leave(node),
                (NodeData::Text(data), _) => {
                    self.text_enter(node, data);
                    self.text_leave(node, data);
                }
                (NodeData::Comment(data), _) => {
                    self.comment_enter(node, data);
                    self.comment_leave(node, data);
                }
                (NodeData::Element(data), Step::Enter(_)) => {
                    self.element_enter(node, data);
                    push_children(&mut stack, node);
                }
                (NodeData::Element(data), Step::Leave(_)) => self.element_leave(node, data),
            }
        }
    }
}

/// Pending work of the tree walk. A node is entered, its children are visited and then it is
/// left again.
#[derive(Clone, Copy)]
enum Step {
    Enter(NodeId),
    Leave(NodeId),
}

fn push_children(stack: &mut Vec<Step>, node: &Node) {
    stack.push(Step::Leave(node.id));
    stack.extend(node.children.iter().rev().map(|child| Step::Enter(*child)));
}

impl Visitor for DocumentWriter {
    fn fragment_enter(&mut self, _node: &Node) {}

    fn fragment_leave(&mut self, _node: &Node) {}

    fn text_enter(&mut self, _node: &Node, data: &TextData) {
        if self.raw_text > 0 {
            self.buffer.push_str(&data.value);
            return;
        }
        for c in data.value.chars() {
            match c {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                _ => self.buffer.push(c),
            }
        }
    }

    fn text_leave(&mut self, _node: &Node, _data: &TextData) {}

    fn comment_enter(&mut self, _node: &Node, data: &CommentData) {
        if self.comments {
            self.buffer.push_str("<!--");
            self.buffer.push_str(&data.value);
            self.buffer.push_str("-->");
        }
    }

    fn comment_leave(&mut self, _node: &Node, _data: &CommentData) {}

    fn element_enter(&mut self, _node: &Node, data: &ElementData) {
        self.buffer.push('<');
        self.buffer.push_str(&data.name);

        for attr in &data.attributes {
            self.buffer.push(' ');
            self.buffer.push_str(&attr.name);
            if attr.parse_info.value.is_none() && attr.value.is_empty() {
                continue;
            }
            self.buffer.push_str("=\"");
            self.buffer.push_str(&attr.value.replace('&', "&amp;").replace('"', "&quot;"));
            self.buffer.push('"');
        }

        self.buffer.push('>');

        if RAW_TEXT_ELEMENTS.contains(&data.name.as_str()) {
            self.raw_text += 1;
        }
    }

    fn element_leave(&mut self, _node: &Node, data: &ElementData) {
        if RAW_TEXT_ELEMENTS.contains(&data.name.as_str()) {
            self.raw_text = self.raw_text.saturating_sub(1);
        }
        if is_void_element(&data.name) {
            return;
        }
        self.buffer.push_str("</");
        self.buffer.push_str(&data.name);
        self.buffer.push('>');
    }
}
