//! Marker scanning: locate API block marker triples and rewrite them.
//!
//! Markers are HTML comments so they survive the markdown transformation
//! upstream. Marker names are case-insensitive:
//!
//! ```text
//! <!-- api:start method="GET" path="/users" -->
//! request content
//! <!-- api:response -->
//! response content
//! <!-- api:end -->
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::attrs::AttributeSet;
use crate::block::ApiBlock;

/// Start marker; everything between `api:start` and `-->` is attribute text.
static START_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*api:start([^>]*)-->").expect("Invalid start marker regex")
});

static RESPONSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--\s*api:response\s*-->").expect("Invalid response marker regex")
});

static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*api:end\s*-->").expect("Invalid end marker regex"));

/// One piece of a scanned document, in source order.
enum Segment<'a> {
    /// Text outside any well-formed block, copied to output unchanged.
    Text(&'a str),
    /// A well-formed block, start marker through end marker.
    Block(ApiBlock),
}

/// Single forward pass over `source`, splitting it into passthrough text and
/// parsed blocks.
///
/// The scan is flat: the end search pairs a start marker with the *first* end
/// marker after it, with no nesting counter. A start marker that never
/// closes degrades to passthrough text and its intended body is re-scanned.
/// The cursor strictly advances on every iteration, so the pass terminates
/// on any input.
fn segments(source: &str) -> Vec<Segment<'_>> {
    let mut cursor = 0;
    let mut out = Vec::new();

    while let Some(caps) = START_PATTERN.captures_at(source, cursor) {
        let start = caps.get(0).expect("capture 0 always present");
        out.push(Segment::Text(&source[cursor..start.start()]));

        let body_start = start.end();
        let Some(end) = END_PATTERN.find_at(source, body_start) else {
            // The block cannot close. Emit the start marker verbatim and
            // resume just past it, so its intended body is kept as text.
            trace!(position = start.start(), "api:start marker without api:end, passing through");
            out.push(Segment::Text(start.as_str()));
            cursor = body_start;
            continue;
        };

        // A response marker only counts when it falls strictly before the
        // end marker; one at or after it belongs to some later region.
        let response_marker = RESPONSE_PATTERN
            .find_at(source, body_start)
            .filter(|m| m.start() < end.start());

        let (request, response) = match response_marker {
            Some(m) => (
                source[body_start..m.start()].trim(),
                Some(source[m.end()..end.start()].trim()),
            ),
            None => (source[body_start..end.start()].trim(), None),
        };

        let attrs = AttributeSet::parse(caps.get(1).map_or("", |m| m.as_str()));
        debug!(
            method = %attrs.method(),
            path = attrs.path(),
            has_response = response.is_some(),
            "found api block"
        );

        out.push(Segment::Block(ApiBlock {
            attrs,
            request: request.to_string(),
            response: response.map(str::to_string),
            span: start.start()..end.end(),
        }));
        cursor = end.end();
    }

    out.push(Segment::Text(&source[cursor..]));
    out
}

/// Rewrite `source`, replacing every well-formed marker triple with its
/// rendered widget markup.
///
/// This is the whole text-to-text hook the host pipeline calls once per page
/// render. It never fails: every byte of input reaches the output, either
/// verbatim (passthrough spans, unterminated markers) or consumed into
/// exactly one widget with surrounding whitespace trimmed from each content
/// segment.
pub fn rewrite(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for segment in segments(source) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Block(block) => out.push_str(&block.render()),
        }
    }
    out
}

/// Collect the well-formed blocks in `source`, in order, without rewriting
/// anything.
pub fn find_blocks(source: &str) -> Vec<ApiBlock> {
    segments(source)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            Segment::Text(_) => None,
        })
        .collect()
}
