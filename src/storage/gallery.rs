use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::core::fractals::fractal_kinds::FractalKind;
use crate::storage::file_manager::{FractalFileManager, file_stem};
use crate::storage::metadata::read_metadata;

/// One card of the HTML gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    /// Image location relative to the gallery page.
    pub href: String,
    pub file_name: String,
    pub kind: Option<FractalKind>,
    pub zoom: Option<f64>,
    pub max_iterations: Option<u32>,
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const STYLE: &str = r#"
body { font-family: sans-serif; background: #111; color: #eee; margin: 0; padding: 24px; }
h1 { font-weight: 300; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; }
.card { background: #1d1d1d; border-radius: 8px; overflow: hidden; cursor: pointer; }
.card img { width: 100%; display: block; }
.card .info { padding: 8px 12px; font-size: 13px; }
.card .name { color: #999; word-break: break-all; }
#modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.9); align-items: center; justify-content: center; }
#modal img { max-width: 95vw; max-height: 95vh; }
"#;

const SCRIPT: &str = r#"
function openModal(src) {
  document.getElementById('modal-image').src = src;
  document.getElementById('modal').style.display = 'flex';
}
function closeModal() {
  document.getElementById('modal').style.display = 'none';
}
document.addEventListener('keydown', function (e) { if (e.key === 'Escape') closeModal(); });
"#;

pub fn render_gallery_html(title: &str, entries: &[GalleryEntry]) -> Result<String, fmt::Error> {
    let mut html = String::new();
    write_gallery_html(&mut html, title, entries)?;
    Ok(html)
}

/// Streams the gallery page into `out`, stopping at the first failed write.
pub fn write_gallery_html<W: fmt::Write>(
    out: &mut W,
    title: &str,
    entries: &[GalleryEntry],
) -> fmt::Result {
    let title = escape_html(title);

    write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n<p>{} images</p>\n<div class=\"grid\">\n",
        entries.len()
    )?;

    for entry in entries {
        let href = escape_html(&entry.href);
        let kind = entry.kind.map_or("Unknown", FractalKind::display_name);
        let zoom = entry.zoom.map_or_else(|| "?".to_string(), |z| format!("{z}"));
        let iterations = entry
            .max_iterations
            .map_or_else(|| "?".to_string(), |n| n.to_string());

        write!(
            out,
            "<div class=\"card\" onclick=\"openModal('{href}')\">\n\
             <img src=\"{href}\" alt=\"{name}\" loading=\"lazy\">\n\
             <div class=\"info\"><strong>{kind}</strong> zoom {zoom}, {iterations} iterations\
             <div class=\"name\">{name}</div></div>\n</div>\n",
            name = escape_html(&entry.file_name),
        )?;
    }

    write!(
        out,
        "</div>\n<div id=\"modal\" onclick=\"closeModal()\"><img id=\"modal-image\" alt=\"\"></div>\n\
         <script>{SCRIPT}</script>\n</body>\n</html>\n"
    )
}

/// Collects gallery entries for stored images, reading parameters back from
/// their metadata sidecars when present.
pub fn collect_entries(
    files: &FractalFileManager,
    kind: Option<FractalKind>,
) -> anyhow::Result<Vec<GalleryEntry>> {
    files
        .list_images(kind)?
        .into_iter()
        .map(|image| entry_for(files, &image))
        .collect()
}

pub fn entry_for(files: &FractalFileManager, image: &Path) -> anyhow::Result<GalleryEntry> {
    let metadata_path = files.metadata_path(image);
    let metadata = if metadata_path.is_file() {
        Some(read_metadata(&metadata_path)?)
    } else {
        None
    };

    let relative = image.strip_prefix(files.base_dir()).unwrap_or(image);
    let href = std::iter::once("..".to_string())
        .chain(
            relative
                .components()
                .map(|part| part.as_os_str().to_string_lossy().into_owned()),
        )
        .collect::<Vec<_>>()
        .join("/");

    let file_name = image
        .file_name()
        .map_or_else(|| file_stem(image), |name| name.to_string_lossy().into_owned());

    Ok(GalleryEntry {
        href,
        file_name,
        kind: metadata
            .as_ref()
            .map(|m| m.fractal_parameters.kind)
            .or_else(|| files.kind_of(image)),
        zoom: metadata.as_ref().map(|m| m.fractal_parameters.zoom),
        max_iterations: metadata.as_ref().map(|m| m.fractal_parameters.max_iterations),
    })
}

pub fn write_gallery(
    files: &FractalFileManager,
    name: &str,
    title: &str,
    entries: &[GalleryEntry],
) -> anyhow::Result<PathBuf> {
    let path = files.gallery_path(name);
    let html = render_gallery_html(title, entries).context("rendering gallery html")?;

    fs::write(&path, html).with_context(|| format!("writing gallery {}", path.display()))?;
    debug!(entries = entries.len(), "gallery rendered");
    info!(path = %path.display(), "gallery written");

    Ok(path)
}
