use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::matcher;
use crate::pattern::Pattern;
use crate::tags::{self, Cover, SongTags};

/// What happened to one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<SongTags>,
}

impl FileReport {
    pub fn ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// The whole per-file pipeline: match the file's name, merge defaults,
/// write the result into the file's tag container. With `dry_run` the write
/// is skipped and the report carries what would have been written.
pub fn apply_pattern(
    path: &Path,
    pattern: &Pattern,
    defaults: &SongTags,
    cover: Option<&Cover>,
    dry_run: bool,
) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        outcome: tag_one(path, pattern, defaults, cover, dry_run),
    }
}

fn tag_one(
    path: &Path,
    pattern: &Pattern,
    defaults: &SongTags,
    cover: Option<&Cover>,
    dry_run: bool,
) -> Result<SongTags> {
    // only the final path component is matched, never the directory part
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::NoFileName {
            path: path.to_path_buf(),
        })?;

    let extraction = matcher::extract(pattern, filename)?;
    let fields = SongTags::from_extraction(&extraction).or_defaults(defaults);

    if !dry_run {
        tags::write_tags(path, &fields, cover)?;
    }

    Ok(fields)
}
