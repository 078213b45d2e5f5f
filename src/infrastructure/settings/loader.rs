//! 설정 파일 탐색/병합 로더.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::LoadedSettings;

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_settings() -> Result<LoadedSettings> {
    load_from_paths(settings_paths())
}

/// 주어진 경로 목록을 낮은 우선순위 -> 높은 우선순위 순서로 병합한다.
/// 없는 파일은 건너뛰고, 읽기/파싱 실패는 에러로 올린다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedSettings> {
    let mut data = BTreeMap::new();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings at {}", path.display()))?;
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;

        // 키 단위로 후순위 파일이 덮어쓴다.
        data.extend(parsed);
        loaded_paths.push(path.to_path_buf());
        tracing::debug!("merged settings from {}", path.display());
    }

    Ok(LoadedSettings {
        data,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn settings_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/lintpilot/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("lintpilot").join("config.json"));
    }

    paths.push(PathBuf::from(".lintpilot/config.json"));

    if let Ok(path) = env::var("LINTPILOT_CONFIG") {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_settings(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("nope.json");

        let loaded = load_from_paths(vec![absent.clone()]).unwrap();
        assert!(loaded.data.is_empty());
        assert_eq!(loaded.searched_paths, vec![absent]);
        assert!(loaded.loaded_paths.is_empty());
    }

    #[test]
    fn later_paths_override_earlier_keys() {
        let dir = tempfile::tempdir().unwrap();
        let low = write_settings(dir.path(), "low.json", r#"{"report_width": "120", "other": "x"}"#);
        let high = write_settings(dir.path(), "high.json", r#"{"report_width": "180"}"#);

        let loaded = load_from_paths(vec![low.clone(), high.clone()]).unwrap();
        assert_eq!(loaded.data.get("report_width"), Some(&"180".to_string()));
        assert_eq!(loaded.data.get("other"), Some(&"x".to_string()));
        assert_eq!(loaded.loaded_paths, vec![low, high]);
    }

    #[test]
    fn malformed_json_is_an_error_with_path_context() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_settings(dir.path(), "broken.json", "not json");

        let err = load_from_paths(vec![broken]).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn search_paths_are_deduplicated() {
        let paths = dedup_paths(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }
}
