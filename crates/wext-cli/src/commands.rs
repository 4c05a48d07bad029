//! Command execution: flags -> BuildRequest -> synthesis -> emitted plan.

use std::fs;
use std::io::Write;

use wext_config::{BuildConfiguration, BuildRequest, synthesize};

use crate::cli::{BuildArgs, SynthArgs};
use crate::error::{CliError, Result};

/// `wext dev <vendor>`: development plan, never packaged.
pub fn dev_execute(args: SynthArgs) -> Result<()> {
    let request = to_request(&args, true, false, "packages");
    let config = synthesize(&request)?;
    emit(&config, args.out.as_deref())
}

/// `wext build <vendor>`: production plan, optionally packaged.
pub fn build_execute(args: BuildArgs) -> Result<()> {
    let request = to_request(&args.synth, false, args.pack, &args.package_target);
    let config = synthesize(&request)?;
    emit(&config, args.synth.out.as_deref())
}

fn to_request(args: &SynthArgs, dev: bool, pack: bool, package_target: &str) -> BuildRequest {
    let mut request = BuildRequest::default();
    request.src = args.src.clone();
    request.target = args.target.clone();
    request.package_target = package_target.to_string();
    request.dev = dev;
    request.auto_reload = args.auto_reload;
    request.devtool = args.devtool.clone();
    request.pack = pack;
    request.vendor = args.vendor.clone();
    request.vendor_version = args.vendor_version.clone();
    if !args.copy_ignore.is_empty() {
        request.copy_ignore = args.copy_ignore.clone();
    }
    request
}

fn emit(config: &BuildConfiguration, out: Option<&std::path::Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    match out {
        Some(path) => {
            fs::write(path, &json).map_err(|source| CliError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "plan written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|source| CliError::WriteFailed {
                path: "<stdout>".into(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synth_args(vendor: &str) -> SynthArgs {
        SynthArgs {
            vendor: vendor.to_string(),
            src: "app".to_string(),
            target: "build/[vendor]".to_string(),
            vendor_version: None,
            devtool: None,
            copy_ignore: Vec::new(),
            auto_reload: false,
            out: None,
        }
    }

    #[test]
    fn dev_request_sets_dev_mode_and_never_packs() {
        let request = to_request(&synth_args("firefox"), true, false, "packages");
        assert!(request.dev);
        assert!(!request.pack);
        assert_eq!(request.vendor, "firefox");
    }

    #[test]
    fn empty_copy_ignore_keeps_the_defaults() {
        let request = to_request(&synth_args("chrome"), false, true, "packages");
        assert_eq!(request.copy_ignore, vec!["**/*.js", "**/*.json"]);
    }

    #[test]
    fn explicit_copy_ignore_replaces_the_defaults() {
        let mut args = synth_args("chrome");
        args.copy_ignore = vec!["**/*.ts".to_string()];
        let request = to_request(&args, false, false, "packages");
        assert_eq!(request.copy_ignore, vec!["**/*.ts"]);
    }

    #[test]
    fn emit_writes_to_a_file() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("manifest.json"),
            r#"{"name": "x", "version": "1.0.0"}"#,
        )
        .unwrap();

        let mut request = BuildRequest::default();
        request.src = dir.path().to_str().unwrap().to_string();
        let config = synthesize(&request).unwrap();

        let out = dir.path().join("plan.json");
        emit(&config, Some(&out)).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["mode"], "production");
    }

    #[test]
    fn emit_reports_unwritable_destinations() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("manifest.json"),
            r#"{"name": "x", "version": "1.0.0"}"#,
        )
        .unwrap();

        let mut request = BuildRequest::default();
        request.src = dir.path().to_str().unwrap().to_string();
        let config = synthesize(&request).unwrap();

        let missing_parent = dir.path().join("no-such-dir").join("plan.json");
        let err = emit(&config, Some(&missing_parent)).unwrap_err();
        assert!(matches!(err, CliError::WriteFailed { .. }));
    }
}
