//! Basic usage example for apiblock-content

use apiblock_content::{find_blocks, rewrite};

fn main() {
    let page = r#"<h1>Users</h1>
<p>Create a user:</p>
<!-- api:start method="POST" path="/api/users" expanded="true" -->
<pre>{"name": "Ada"}</pre>
<!-- api:response -->
<pre>{"id": 1, "name": "Ada"}</pre>
<!-- api:end -->
<p>That is all.</p>
"#;

    // Inspect the blocks without touching the page
    println!("Blocks found:");
    for block in find_blocks(page) {
        println!(
            "  - {} {} ({} bytes{})",
            block.attrs.method(),
            block.attrs.path(),
            block.span.len(),
            if block.has_response() {
                ", with response"
            } else {
                ""
            }
        );
    }

    // The hook the documentation pipeline would call
    println!("\nRewritten page:\n{}", rewrite(page));
}
