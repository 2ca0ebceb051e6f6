//! API block annotation for rendered documentation pages.
//!
//! Authors mark regions of a page with paired HTML-comment markers; `rewrite`
//! replaces each well-formed marker triple with a collapsible widget carrying
//! a method badge, a path, the request body and an optional response body.
//! Text outside the markers passes through untouched.
//!
//! ```text
//! <!-- api:start method="POST" path="/users" -->
//! [request markup]
//! <!-- api:response -->
//! [response markup]
//! <!-- api:end -->
//! ```

pub mod attrs;
pub mod block;
pub mod render;
pub mod scan;

pub use attrs::AttributeSet;
pub use block::ApiBlock;
pub use render::render_block;
pub use scan::{find_blocks, rewrite};
