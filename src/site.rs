use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{Config, TemplateConfig};
use crate::parser::{ConvertError, TitleError, extract_title, markdown_to_html_node};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to convert {path}: {source}")]
    Convert { path: PathBuf, source: ConvertError },

    #[error("no title in {path}: {source}")]
    Title { path: PathBuf, source: TitleError },
}

/// Counts from a full site build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteReport {
    pub copied: usize,
    pub generated: usize,
}

/// Substitute title and content into the template.
pub fn render_page(template: &str, title: &str, content: &str, config: &TemplateConfig) -> String {
    template
        .replace(&config.title_placeholder, title)
        .replace(&config.content_placeholder, content)
}

fn read(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir_all(path: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(path).map_err(|source| SiteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert one markdown file into an HTML page.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    config: &TemplateConfig,
) -> Result<(), SiteError> {
    info!(
        from = %from.display(),
        to = %dest.display(),
        template = %template_path.display(),
        "Generating page"
    );

    let markdown = read(from)?;
    let template = read(template_path)?;

    let content = markdown_to_html_node(&markdown)
        .map_err(|source| SiteError::Convert {
            path: from.to_path_buf(),
            source,
        })?
        .to_html();
    let title = extract_title(&markdown).map_err(|source| SiteError::Title {
        path: from.to_path_buf(),
        source,
    })?;

    let page = render_page(&template, &title, &content, config);

    if let Some(parent) = dest.parent() {
        create_dir_all(parent)?;
    }
    fs::write(dest, page).map_err(|source| SiteError::Write {
        path: dest.to_path_buf(),
        source,
    })
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout into `dest_dir`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    config: &TemplateConfig,
) -> Result<usize, SiteError> {
    let mut generated = 0;
    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            debug!(path = %path.display(), "Skipping non-markdown file");
            continue;
        }
        let relative = path.strip_prefix(content_dir).unwrap_or(path);
        let dest = dest_dir.join(relative).with_extension("html");
        generate_page(path, template_path, &dest, config)?;
        generated += 1;
    }
    Ok(generated)
}

/// Replace `public_dir` with a copy of `static_dir`. Returns the number of
/// files copied.
pub fn copy_static(static_dir: &Path, public_dir: &Path) -> Result<usize, SiteError> {
    if public_dir.exists() {
        fs::remove_dir_all(public_dir).map_err(|source| SiteError::Remove {
            path: public_dir.to_path_buf(),
            source,
        })?;
    }
    create_dir_all(public_dir)?;

    let mut copied = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(static_dir).unwrap_or(entry.path());
        let target = public_dir.join(relative);
        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            debug!(from = %entry.path().display(), to = %target.display(), "Copying");
            fs::copy(entry.path(), &target).map_err(|source| SiteError::Copy {
                from: entry.path().to_path_buf(),
                to: target.clone(),
                source,
            })?;
            copied += 1;
        }
    }

    info!(
        from = %static_dir.display(),
        to = %public_dir.display(),
        files = copied,
        "Copied static files"
    );
    Ok(copied)
}

/// Copy static assets, then generate every page.
pub fn build_site(config: &Config) -> Result<SiteReport, SiteError> {
    let paths = &config.paths;
    let copied = copy_static(&paths.static_dir, &paths.public)?;
    let generated =
        generate_pages_recursive(&paths.content, &paths.template, &paths.public, &config.template)?;
    Ok(SiteReport { copied, generated })
}
