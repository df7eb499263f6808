pub mod config;
pub mod decode;
pub mod encode;

use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole input from `file` or stdin, enforcing `--max-size`.
fn read_input(file: Option<&Path>, global: &GlobalArgs) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)
                .map_err(|e| format!("cannot read '{}': {}", file_path.display(), e))?
                .len() as usize;

            if file_size > global.max_size {
                if global.force {
                    tracing::warn!(
                        size = file_size,
                        limit = global.max_size,
                        "processing large file"
                    );
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        return Ok(fs::read(file_path)
            .map_err(|e| format!("cannot read '{}': {}", file_path.display(), e))?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}
