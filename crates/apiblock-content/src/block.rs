//! Parsed API block model.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::attrs::AttributeSet;
use crate::render;

/// One parsed API block: attributes, request content, optional response
/// content.
///
/// Blocks are transient. They are produced by a single scan pass and
/// immediately rendered or reported; nothing persists across scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBlock {
    /// Attributes from the start marker.
    pub attrs: AttributeSet,
    /// Trimmed content between the start marker and the response marker, or
    /// the end marker when there is no response section.
    pub request: String,
    /// Trimmed content between the response and end markers. Present only
    /// when a response marker occurs strictly before the end marker.
    pub response: Option<String>,
    /// Byte range in the source, start marker through end marker inclusive.
    pub span: Range<usize>,
}

impl ApiBlock {
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// Widget markup for this block.
    pub fn render(&self) -> String {
        render::render_block(&self.attrs, &self.request, self.response.as_deref())
    }
}
