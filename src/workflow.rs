use crate::agents::{FileUpdate, UpdateOptions, UpdateReport, VersionUpdater};
use crate::error::Result;
use crate::version::{ReleaseVersion, VersionComparator};
use colored::Colorize;
use std::path::Path;

/// Options for a bump run that don't change which files are touched.
#[derive(Debug, Clone)]
pub struct BumpOptions {
    pub dry_run: bool,
    pub strict: bool,
    pub branch: String,
    pub show_hints: bool,
}

/// Execute the bump workflow
pub fn execute_bump<P: AsRef<Path>>(
    project_path: P,
    raw_version: Option<&str>,
    options: &BumpOptions,
) -> Result<()> {
    // Validation happens before any file is opened.
    let version = ReleaseVersion::parse(raw_version)?;

    if options.dry_run {
        println!(
            "{}",
            format!("🔍 Checking a bump to {} (dry run)...", version)
                .cyan()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("🚀 Bumping version to {}...", version).cyan().bold()
        );
    }

    println!("\n{}", "1. Validating project root...".yellow());
    let updater = VersionUpdater::new(
        project_path,
        UpdateOptions {
            dry_run: options.dry_run,
            strict: options.strict,
        },
    )?;
    println!(
        "{}",
        format!("✓ Project root: {}", updater.root().display()).green()
    );

    println!("\n{}", "2. Updating version files...".yellow());
    let report = updater.apply(&version, print_file_update)?;

    if options.dry_run {
        print_dry_run_summary(&report, &version);
        return Ok(());
    }

    println!(
        "\n{}",
        format!("✨ Successfully bumped version to {}!", version)
            .green()
            .bold()
    );

    if version.is_prerelease() {
        println!("{}", "   (pre-release)".dimmed());
    }

    if options.show_hints {
        print_next_steps(&version, &options.branch);
    }

    Ok(())
}

fn print_file_update(update: &FileUpdate) {
    let transition = match &update.previous {
        Some(previous) if previous != &update.version => {
            format!(" ({} → {})", previous.red(), update.version.green())
        }
        _ => String::new(),
    };

    if !update.changed {
        let reason = match &update.previous {
            Some(_) => format!("already at {}", update.version),
            None => "no version line found, left unchanged".to_string(),
        };
        println!("   {} {} {}", "✓".green(), update.path, reason.dimmed());
    } else if update.written {
        println!(
            "   {}{}",
            format!("✓ Updated {}", update.path).green(),
            transition
        );
    } else {
        println!(
            "   {}{}",
            format!("• Would update {}", update.path).cyan(),
            transition
        );
    }

    if let Some(previous) = &update.previous {
        if VersionComparator::is_newer(&update.version, previous) == Some(false)
            && previous != &update.version
        {
            println!(
                "     {}",
                format!(
                    "⚠ {} is not newer than the current {}",
                    update.version, previous
                )
                .yellow()
            );
        }
    }
}

fn print_dry_run_summary(report: &UpdateReport, version: &ReleaseVersion) {
    let changed = report.changed_count();
    if changed == 0 {
        println!(
            "\n{}",
            format!("✨ All files are already at {}", version).green().bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "{} of {} file(s) would change. Nothing was written.",
                changed,
                report.files.len()
            )
            .yellow()
        );
    }
}

fn print_next_steps(version: &ReleaseVersion, branch: &str) {
    let steps = next_steps(version, branch);

    println!("\n{}", "Next steps:".cyan().bold());
    for (index, step) in steps.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }
}

fn next_steps(version: &ReleaseVersion, branch: &str) -> Vec<String> {
    vec![
        "Review the changes (git diff)".to_string(),
        "git add .".to_string(),
        format!("git commit -m \"chore: bump version to {version}\""),
        format!("git tag v{version}"),
        format!("git push origin {branch}"),
        format!("git push origin v{version}"),
    ]
}
