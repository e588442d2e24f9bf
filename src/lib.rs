//! Pinparse
//!
//! A strict HTML and CSS parser for people learning to write markup. Instead of recovering from
//! mistakes the way a browser does, it stops at the first one and reports exactly where it is.
//!
//! The work is split over three crates which are re-exported here:
//!
//! * [`shared`]: the character stream and the error taxonomy
//! * [`css`]: the parser for the contents of `<style>` elements
//! * [`html`]: the document parser, the tree it builds and a writer to turn it back into markup
pub use pinparse_css as css;
pub use pinparse_html as html;
pub use pinparse_shared as shared;
