use crate::elements::{has_omittable_close_tag, is_closed_by};
use crate::parser::HtmlParser;
use crate::tree_sink::TreeSink;
use lazy_static::lazy_static;
use pinparse_shared::node::NodeId;
use regex::Regex;

lazy_static! {
    static ref NEXT_CLOSE_TAG: Regex = Regex::new(r"</([\w\-]+)\s*>").expect("valid regex");
}

/// State of the optional close tag inference. It lives for a single parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TagOmission {
    /// Last opened element whose close tag may be left out, as long as nothing else has been
    /// closed since
    pub active: Option<NodeId>,
    /// Element that was current when the last element was opened
    pub parent: Option<NodeId>,
}

impl<S: TreeSink> HtmlParser<'_, S> {
    /// Closes the pending `<p>`, `<li>`, `<td>` or `<th>` when the tag that is about to be opened
    /// ends it implicitly
    pub(crate) fn close_active_element(&mut self, tag_name: &str) {
        let Some(active) = self.omission.active else {
            return;
        };
        if self.omission.parent == Some(self.dom.fragment()) {
            return;
        }

        let active_name = self.dom.tag_name_of(active).unwrap_or_default();
        if is_closed_by(active_name, tag_name) {
            log::debug!("<{tag_name}> implicitly closes <{active_name}>");
            self.dom.pop_element();
        }
    }

    /// Remembers the element that was just opened when its close tag may be left out
    pub(crate) fn track_active_element(&mut self, tag_name: &str) {
        self.omission.active = has_omittable_close_tag(tag_name).then(|| self.dom.current_node());
    }

    /// Looks ahead at the next tag. When it closes the parent, an element with an optional close
    /// tag that was just opened is closed right away.
    pub(crate) fn close_before_parent(&mut self, tag_name: &str) {
        let Some(parent) = self.omission.parent else {
            return;
        };
        if parent == self.dom.fragment() {
            return;
        }

        let parent_name = self.dom.tag_name_of(parent).unwrap_or_default().to_string();
        let next_close_tag = self.stream.find_next(&NEXT_CLOSE_TAG, 1);
        let next_is_parent = next_close_tag.as_deref() == Some(parent_name.as_str());
        // A <p> directly inside an <a> may stay open up to the </a>
        let needs_end_tag = !(tag_name == "p" && parent_name == "a");
        let optional_end_tag = has_omittable_close_tag(&parent_name);

        if next_is_parent
            && (needs_end_tag || (optional_end_tag && next_close_tag.is_some()))
            && has_omittable_close_tag(tag_name)
        {
            log::debug!("</{parent_name}> implicitly closes <{tag_name}>");
            self.dom.pop_element();
        }
    }
}
