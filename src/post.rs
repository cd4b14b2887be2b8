//! Hugo post writing: slugs, front matter, retention cleanup.

use crate::Error;
use chrono::{DateTime, Utc};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use tracing::info;

const SLUG_MAX_CHARS: usize = 50;

/// Stable digest of a topic, shared by the slug fallback and the
/// placeholder drawing.
pub(crate) fn topic_digest(topic: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    topic.hash(&mut hasher);
    hasher.finish()
}

/// Build a SEO-friendly slug from a topic.
///
/// Lowercases, maps spaces to dashes, drops everything outside `[a-z0-9-]`,
/// and collapses dash runs. A topic with no Latin letters or digits at all
/// would slugify to nothing, so that case falls back to a digest of the
/// topic instead of producing an empty filename.
pub fn slugify(topic: &str) -> String {
    let lowered = topic.to_lowercase().replace(' ', "-");

    let mut slug = String::new();
    let mut last_dash = false;
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            last_dash = false;
        } else if ch == '-' && !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
    }

    let slug: String = slug.chars().take(SLUG_MAX_CHARS).collect();
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        return format!("post-{:016x}", topic_digest(topic));
    }
    slug.to_string()
}

/// Front matter of a generated Hugo post.
#[derive(Debug, Clone)]
pub struct FrontMatter {
    pub title: String,
    pub date: DateTime<Utc>,
    pub image: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub summary: String,
    pub draft: bool,
}

impl FrontMatter {
    /// Front matter for an auto-generated trend article.
    pub fn for_topic(topic: &str, image: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            // Double quotes would break the quoted YAML scalar.
            title: topic.replace('"', "'"),
            date,
            image: image.into(),
            tags: vec![
                "ai".to_string(),
                "технологии".to_string(),
                "2025".to_string(),
            ],
            categories: vec!["Искусственный интеллект".to_string()],
            summary: "Автоматически сгенерированная статья о тенденциях AI в 2025 году"
                .to_string(),
            draft: false,
        }
    }

    /// Render the YAML front matter block.
    pub fn render(&self) -> String {
        let quoted = |items: &[String]| {
            items
                .iter()
                .map(|item| format!("\"{item}\""))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "---\n\
             title: \"{}\"\n\
             date: {}\n\
             image: \"{}\"\n\
             draft: {}\n\
             tags: [{}]\n\
             categories: [{}]\n\
             summary: \"{}\"\n\
             ---\n",
            self.title,
            self.date.format("%Y-%m-%dT%H:%M:%SZ"),
            self.image,
            self.draft,
            quoted(&self.tags),
            quoted(&self.categories),
            self.summary,
        )
    }
}

/// Write a post as `<slug>.md` under the content directory.
pub fn write_post(
    content_dir: &Path,
    slug: &str,
    front: &FrontMatter,
    body: &str,
) -> Result<PathBuf, Error> {
    fs::create_dir_all(content_dir)?;
    let path = content_dir.join(format!("{slug}.md"));
    fs::write(&path, format!("{}\n{}\n", front.render(), body))?;
    Ok(path)
}

/// Delete generated posts beyond the retention count.
///
/// Posts are ordered by filename descending; everything past `keep` is
/// removed. Returns the number of deleted files. A missing content
/// directory removes nothing.
pub fn clean_old_posts(content_dir: &Path, keep: usize) -> Result<usize, Error> {
    if !content_dir.exists() {
        return Ok(0);
    }

    let mut posts: Vec<PathBuf> = fs::read_dir(content_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    posts.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

    let mut removed = 0;
    for path in posts.into_iter().skip(keep) {
        fs::remove_file(&path)?;
        info!(post = %path.display(), "removed old post");
        removed += 1;
    }
    Ok(removed)
}
