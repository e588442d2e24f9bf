use crate::node::{AttributeParseInfo, ElementParseInfo, TextParseInfo};
use pinparse_shared::node::NodeId;
use pinparse_shared::stream::SourceInterval;

/// TreeSink is the interface the parser uses to build a tree. Nodes are only ever appended to
/// the end of their parent, so any structure that can grow that way can be a sink.
///
/// [`crate::document::Document`] is the implementation used by default.
pub trait TreeSink {
    /// ID of the fragment all parsed content hangs off
    fn root(&self) -> NodeId;

    /// Create a new element node with the given tag name and append it to a parent
    fn create_element(
        &mut self,
        parent: NodeId,
        name: &str,
        namespace: Option<&str>,
        parse_info: ElementParseInfo,
    ) -> NodeId;

    /// Insert or update an attribute of an element node
    fn insert_attribute(&mut self, element: NodeId, name: &str, value: &str, parse_info: AttributeParseInfo);

    /// Create a new text node with the given content and append it to a parent
    fn create_text(&mut self, parent: NodeId, text: &str, parse_info: TextParseInfo) -> NodeId;

    /// Create a new comment node with the given content and append it to a parent
    fn create_comment(&mut self, parent: NodeId, text: &str, parse_info: SourceInterval) -> NodeId;

    /// Parent of a node, `None` for the root
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// Lower-cased tag name of an element node
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    fn element_parse_info(&self, node: NodeId) -> Option<&ElementParseInfo>;

    fn element_parse_info_mut(&mut self, node: NodeId) -> Option<&mut ElementParseInfo>;

    /// Records the interval of a leading `<!DOCTYPE html>` on the root
    fn set_doctype(&mut self, interval: SourceInterval);
}
