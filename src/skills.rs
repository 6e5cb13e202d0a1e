//! Finding skills in the source directory and in target directories.

use crate::sync::copy_directory;
use anyhow::Result;
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SKILL_FILE: &str = "SKILL.md";

/// A skill under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSkill {
    /// Path relative to the source, `/`-separated.
    pub name: String,
    pub path: PathBuf,
}

/// A real (not symlinked) skill directory inside a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSkill {
    pub target: String,
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    Copied,
    /// The source already has a skill with this name.
    Skipped,
}

/// Lists every directory under `source` that holds a `SKILL.md`. Hidden and
/// git-ignored paths are left out, and a skill's own subdirectories are not
/// reported as separate skills.
pub fn discover_skills(source: &Path) -> Result<Vec<SourceSkill>> {
    if !source.is_dir() {
        return Ok(Vec::new());
    }

    let walker = WalkBuilder::new(source)
        .hidden(true)
        .follow_links(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .build();

    let mut skill_dirs = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.file_name().is_none_or(|name| name != SKILL_FILE) {
            continue;
        }
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }
        if let Some(skill_dir) = path.parent()
            && skill_dir != source
        {
            skill_dirs.push(skill_dir.to_path_buf());
        }
    }
    skill_dirs.sort();

    let mut skills: Vec<SourceSkill> = Vec::new();
    for dir in skill_dirs {
        if skills.last().is_some_and(|outer| dir.starts_with(&outer.path)) {
            continue;
        }
        let Ok(relative) = dir.strip_prefix(source) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        skills.push(SourceSkill { name, path: dir });
    }
    Ok(skills)
}

/// Real skill directories sitting directly inside `target_dir`. A target that
/// is missing or is itself a symlink has none.
pub fn find_local_skills(target: &str, target_dir: &Path) -> Result<Vec<LocalSkill>> {
    let meta = match fs::symlink_metadata(target_dir) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if meta.file_type().is_symlink() || !meta.is_dir() {
        return Ok(Vec::new());
    }

    let mut skills = Vec::new();
    for entry in fs::read_dir(target_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        if entry.file_type()?.is_dir() {
            skills.push(LocalSkill {
                target: target.to_string(),
                name,
                path: entry.path(),
            });
        }
    }
    skills.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(skills)
}

/// Copies a local skill into `source/<name>` unless something already lives
/// there. The copy in the target is left alone.
pub fn pull_skill(skill: &LocalSkill, source: &Path) -> Result<PullOutcome> {
    let dest = source.join(&skill.name);
    if fs::symlink_metadata(&dest).is_ok() {
        debug!(skill = %skill.name, "skill already in source");
        return Ok(PullOutcome::Skipped);
    }
    copy_directory(&skill.path, &dest)?;
    debug!(skill = %skill.name, from = %skill.path.display(), "copied skill to source");
    Ok(PullOutcome::Copied)
}
