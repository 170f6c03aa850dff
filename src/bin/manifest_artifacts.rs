//! Writes `manifest.json` binding the scoring artifacts to their SHA-256.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin manifest_artifacts -- <artifact_dir> [--check]
//! ```
//!
//! With `--check` the existing manifest is verified instead of rewritten.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use wellbeing::adapters::artifacts::{
    build_manifest, verify_manifest, ARTIFACT_FILES, MANIFEST_FILE,
};

fn usage() -> anyhow::Error {
    anyhow!("Usage: manifest_artifacts <artifact_dir> [--check]")
}

fn parse_args() -> Result<(PathBuf, bool)> {
    let mut dir: Option<PathBuf> = None;
    let mut check = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            "-h" | "--help" => return Err(usage()),
            _ if dir.is_none() => dir = Some(PathBuf::from(arg)),
            _ => return Err(usage()),
        }
    }

    Ok((dir.ok_or_else(usage)?, check))
}

fn main() -> Result<()> {
    let (dir, check) = parse_args()?;

    if check {
        return match verify_manifest(&dir)? {
            Some(manifest) => {
                println!("OK: {} file(s) verified in {}", manifest.files.len(), dir.display());
                Ok(())
            }
            None => Err(anyhow!("No {MANIFEST_FILE} in {}", dir.display())),
        };
    }

    let present: Vec<&str> = ARTIFACT_FILES
        .iter()
        .copied()
        .filter(|name| dir.join(name).is_file())
        .collect();
    if present.is_empty() {
        return Err(anyhow!(
            "No artifacts found in {} (expected {})",
            dir.display(),
            ARTIFACT_FILES.join(", ")
        ));
    }

    let manifest = build_manifest(&dir, &present)?;
    let out = dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&out, format!("{json}\n")).with_context(|| format!("writing {}", out.display()))?;

    for (name, digest) in &manifest.files {
        println!("{digest}  {name}");
    }
    println!("Wrote {}", out.display());
    Ok(())
}
