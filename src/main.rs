use std::path::Path;

use anyhow::Context;

use crest_renderer::{IconRenderer, OUTPUT_FILE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let renderer = IconRenderer::new();
    renderer
        .write_png(Path::new(OUTPUT_FILE))
        .with_context(|| format!("failed to produce {OUTPUT_FILE}"))?;

    println!("✓ icon.png created successfully (1024x1024)");
    println!("  Design: Golden cross on deep blue background");
    println!("  Elements: Notebook lines + bookmark accent");

    Ok(())
}
