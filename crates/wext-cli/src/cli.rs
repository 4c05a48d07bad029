//! Command-line interface definition.
//!
//! `wext dev <vendor>` synthesizes a development build plan (watch-friendly,
//! readable module names, no minification); `wext build <vendor>` a
//! production plan. Both print the plan as JSON for the bundling engine.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// wext - build configuration synthesizer for browser extensions
#[derive(Parser, Debug)]
#[command(
    name = "wext",
    version,
    about = "Synthesize vendor-specific build plans for browser extensions",
    long_about = "wext expands a small set of declarative options into a complete,\n\
                  ordered build plan for packaging a browser extension: entry points,\n\
                  output layout, transform rules, lifecycle steps and a\n\
                  vendor-conditioned manifest compile context."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize a development build plan
    Dev(SynthArgs),

    /// Synthesize a production build plan
    Build(BuildArgs),
}

/// Options shared by both commands.
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Target vendor (chrome, firefox, opera, edge)
    #[arg(default_value = "chrome")]
    pub vendor: String,

    /// Source directory of the extension
    #[arg(short, long, default_value = "app")]
    pub src: String,

    /// Output directory template ([vendor] expands to the vendor name)
    #[arg(short, long, default_value = "build/[vendor]")]
    pub target: String,

    /// Minimum vendor runtime version for the downlevel transform
    #[arg(long)]
    pub vendor_version: Option<String>,

    /// Source-map setting forwarded to the bundling engine
    #[arg(long)]
    pub devtool: Option<String>,

    /// Glob patterns excluded from the raw-copy step
    #[arg(long = "copy-ignore")]
    pub copy_ignore: Vec<String>,

    /// Inject the auto-reload shim entry (capable vendors only)
    #[arg(long)]
    pub auto_reload: bool,

    /// Write the plan to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub synth: SynthArgs,

    /// Package the build output into a compressed artifact
    #[arg(long)]
    pub pack: bool,

    /// Package directory template ([vendor] expands to the vendor name)
    #[arg(long, default_value = "packages")]
    pub package_target: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dev_defaults_to_chrome() {
        let cli = Cli::try_parse_from(["wext", "dev"]).unwrap();
        let Command::Dev(args) = cli.command else {
            panic!("expected dev command");
        };
        assert_eq!(args.vendor, "chrome");
        assert_eq!(args.src, "app");
        assert_eq!(args.target, "build/[vendor]");
    }

    #[test]
    fn build_accepts_pack_and_vendor() {
        let cli = Cli::try_parse_from(["wext", "build", "firefox", "--pack"]).unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.synth.vendor, "firefox");
        assert!(args.pack);
        assert_eq!(args.package_target, "packages");
    }

    #[test]
    fn copy_ignore_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "wext",
            "build",
            "chrome",
            "--copy-ignore",
            "**/*.ts",
            "--copy-ignore",
            "**/*.md",
        ])
        .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.synth.copy_ignore, vec!["**/*.ts", "**/*.md"]);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["wext", "-v", "-q", "dev"]).is_err());
    }
}
