use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    // Trunk exports the staging directory to post-build hooks.
    let Ok(staging_dir) = env::var("TRUNK_STAGING_DIR") else {
        eprintln!("TRUNK_STAGING_DIR is not set; run this as a Trunk post_build hook");
        process::exit(1);
    };

    let staged_html_path = PathBuf::from(staging_dir).join("index.html");

    let html = match fs::read_to_string(&staged_html_path) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Failed to read {}: {}", staged_html_path.display(), e);
            process::exit(1);
        }
    };

    // Relative paths let the page be served from any sub-path.
    let html = html
        .replace("/portfolio-world.js", "./portfolio-world.js")
        .replace("/portfolio-world_bg.wasm", "./portfolio-world_bg.wasm");

    if let Err(e) = fs::write(&staged_html_path, html) {
        eprintln!("Failed to write {}: {}", staged_html_path.display(), e);
        process::exit(1);
    }
}
