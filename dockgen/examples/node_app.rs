//! Generate and build an image for a static Node.js app.
//!
//! Prints the generated manifest, then hands it to `docker`:
//!
//! ```text
//! cargo run --example node_app
//! ```

use dockgen::{Dockerfile, Instructions, Step};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let mut serve = Step::new("serve", "Serve the static bundle");
    serve.expose(8080).cmd("npx --yes serve -s -l 8080");

    let mut image = Dockerfile::with_banner();
    image
        .from("node:18-alpine")
        .run("apk update")
        .with_step(&serve);

    println!("{image}");
    println!();

    if let Err(e) = image.build(".", "node-app-example").await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
