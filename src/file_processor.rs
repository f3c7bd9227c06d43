//! Input reading and rendering for the CLI

use core::error::Error;
use inkmd_lib::renderer::{MarkdownRenderer, RenderOptions};
use memmap2::Mmap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Threshold for using memory-mapped I/O (1MB)
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Argument naming standard input
pub const STDIN_MARKER: &str = "-";

/// Efficiently read file content using memory mapping for large files
pub fn read_file_efficiently(path: &Path) -> Result<String, Box<dyn Error>> {
    let metadata = fs::metadata(path).map_err(|e| format!("Failed to read file {}: {}", path.display(), e))?;
    let file_size = metadata.len();

    if file_size > MMAP_THRESHOLD {
        let file = fs::File::open(path)?;
        // SAFETY: the map is only read while `file` is open and is copied out immediately.
        let mmap = unsafe { Mmap::map(&file)? };

        String::from_utf8(mmap.to_vec()).map_err(|e| format!("Invalid UTF-8 in file {}: {}", path.display(), e).into())
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read file {}: {}", path.display(), e).into())
    }
}

pub fn read_stdin() -> Result<String, Box<dyn Error>> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| format!("Failed to read stdin: {e}"))?;
    Ok(content)
}

/// Render every input in order. An empty list or `-` reads standard input.
///
/// Fragments are separated by a newline; inputs that render to nothing are skipped.
pub fn render_inputs(inputs: &[String], options: RenderOptions) -> Result<String, Box<dyn Error>> {
    let renderer = MarkdownRenderer::new(options);
    let stdin_only = [STDIN_MARKER.to_string()];
    let inputs = if inputs.is_empty() { &stdin_only[..] } else { inputs };

    let mut fragments = Vec::with_capacity(inputs.len());
    for input in inputs {
        let content = if input == STDIN_MARKER {
            read_stdin()?
        } else {
            read_file_efficiently(Path::new(input))?
        };

        log::debug!("Rendering {input} ({} bytes)", content.len());
        let html = renderer.render(&content);
        if html.is_empty() {
            log::info!("{input} rendered to an empty fragment");
            continue;
        }
        fragments.push(html);
    }

    Ok(fragments.join("\n"))
}

/// Write rendered HTML to `output`, or to stdout when no path is given
pub fn write_output(html: &str, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let mut content = html.to_string();
    if !content.is_empty() {
        content.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
