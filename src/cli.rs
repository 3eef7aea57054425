use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tauri-bump",
    about = "Bump the version of a Tauri app in package.json, tauri.conf.json and Cargo.toml",
    version
)]
pub struct Cli {
    /// New version, X.Y.Z or X.Y.Z-beta.1
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub new_version: Option<String>,

    /// Path to the project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Show what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Fail when src-tauri/Cargo.toml has no `version = "..."` line
    #[arg(long)]
    pub strict: bool,

    /// Branch used in the suggested `git push` command
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Don't print the suggested git commands after a successful bump
    #[arg(long)]
    pub no_hints: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
