use crate::config::Config;
use crate::skills::{SourceSkill, discover_skills};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also print where each skill lives
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(config_dir: &Path, args: &ListArgs) -> Result<()> {
    let config = Config::load(config_dir)?;
    let source = config.source_path()?;
    let skills = discover_skills(&source)?;

    if skills.is_empty() {
        println!("{}", t!("list.no_skills"));
        println!("{}", t!("list.hint", path = source.display()));
        return Ok(());
    }

    println!("{}", t!("list.header", count = skills.len()));
    for line in render(&skills, args.verbose) {
        println!("{line}");
    }
    Ok(())
}

/// One indented line per skill; verbose adds the path on the next line.
fn render(skills: &[SourceSkill], verbose: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for skill in skills {
        lines.push(format!("  {}", skill.name));
        if verbose {
            lines.push(format!("    {}", skill.path.display()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_uses_one_style_for_both_modes() {
        let skills = vec![
            SourceSkill {
                name: "pdf".to_string(),
                path: PathBuf::from("/s/pdf"),
            },
            SourceSkill {
                name: "team/review".to_string(),
                path: PathBuf::from("/s/team/review"),
            },
        ];

        assert_eq!(render(&skills, false), vec!["  pdf", "  team/review"]);

        let verbose = render(&skills, true);
        assert_eq!(verbose[0], "  pdf");
        assert_eq!(verbose[2], "  team/review");
        assert!(verbose[1].starts_with("    ") && verbose[1].ends_with("pdf"));
        assert_eq!(verbose.len(), 4);
    }
}
