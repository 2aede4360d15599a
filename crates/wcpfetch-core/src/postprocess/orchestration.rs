//! Pretty-printing of orchestration files.
//!
//! Orchestration sources are JSON but the portal exports them compacted.
//! Rewriting them pretty keeps version-control diffs readable. The rewrite is
//! idempotent: running it twice yields byte-identical files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const ORCHESTRATION_EXTENSIONS: [&str; 2] = ["orchestration", "suborchestration"];

/// Pretty-print every `*.orchestration` / `*.suborchestration` under
/// `<src>/orchestration`. Files that are not valid JSON are left untouched
/// with a warning; per-file I/O failures are logged and skipped. Missing
/// `orchestration/` is fine (nothing to do).
pub fn pretty_print_orchestrations(src_dir: &Path) -> Result<()> {
    let orchestration = src_dir.join("orchestration");
    if !orchestration.is_dir() {
        tracing::debug!("no orchestration directory under {}", src_dir.display());
        return Ok(());
    }

    for entry in fs::read_dir(&orchestration)
        .with_context(|| format!("read dir {}", orchestration.display()))?
    {
        let path = entry?.path();
        let is_orchestration = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| ORCHESTRATION_EXTENSIONS.contains(&ext));
        if !path.is_file() || !is_orchestration {
            continue;
        }
        if let Err(e) = pretty_print_file(&path) {
            tracing::error!("failed to pretty-print {}: {e:#}", path.display());
        }
    }
    Ok(())
}

/// Pretty-print a single JSON file in place. Invalid JSON is not an error:
/// the file is left byte-identical and a warning is logged.
pub fn pretty_print_file(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(
                "{} is not valid JSON, skipping pretty-print: {e}",
                path.display()
            );
            return Ok(());
        }
    };

    let pretty = serde_json::to_string_pretty(&value)?;
    if pretty == content {
        return Ok(());
    }
    fs::write(path, &pretty)
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!("pretty-printed {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let orchestration = dir.path().join("orchestration");
        fs::create_dir_all(&orchestration).unwrap();
        for (name, content) in files {
            fs::write(orchestration.join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn expands_compact_json() {
        let dir = setup(&[("flow_ab.orchestration", r#"{"steps":[{"id":1}]}"#)]);
        pretty_print_orchestrations(dir.path()).unwrap();
        let out =
            fs::read_to_string(dir.path().join("orchestration/flow_ab.orchestration")).unwrap();
        assert!(out.contains("\n"));
        let reparsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(reparsed["steps"][0]["id"], 1);
    }

    #[test]
    fn second_run_is_byte_identical() {
        let dir = setup(&[("flow_ab.suborchestration", r#"{"a":1,"b":[true,null]}"#)]);
        pretty_print_orchestrations(dir.path()).unwrap();
        let path = dir.path().join("orchestration/flow_ab.suborchestration");
        let first = fs::read(&path).unwrap();
        pretty_print_orchestrations(dir.path()).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_json_left_untouched() {
        let broken = "{ definitely not json";
        let dir = setup(&[("bad_ab.orchestration", broken)]);
        pretty_print_orchestrations(dir.path()).unwrap();
        let out =
            fs::read_to_string(dir.path().join("orchestration/bad_ab.orchestration")).unwrap();
        assert_eq!(out, broken);
    }

    #[test]
    fn non_ascii_preserved() {
        let dir = setup(&[("i18n_ab.orchestration", r#"{"label":"prénom"}"#)]);
        pretty_print_orchestrations(dir.path()).unwrap();
        let out =
            fs::read_to_string(dir.path().join("orchestration/i18n_ab.orchestration")).unwrap();
        assert!(out.contains("prénom"));
    }

    #[test]
    fn other_extensions_untouched() {
        let dir = setup(&[("readme.txt", "plain text")]);
        pretty_print_orchestrations(dir.path()).unwrap();
        let out = fs::read_to_string(dir.path().join("orchestration/readme.txt")).unwrap();
        assert_eq!(out, "plain text");
    }

    #[test]
    fn missing_orchestration_dir_ok() {
        let dir = tempfile::tempdir().unwrap();
        pretty_print_orchestrations(dir.path()).unwrap();
    }
}
