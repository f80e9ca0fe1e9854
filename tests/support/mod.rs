use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for cinerec
pub fn cinerec() -> Command {
    cargo_bin_cmd!("cinerec")
}

/// Write a small JSON catalog into `dir` and return its path
#[allow(dead_code)]
pub fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"[
  {"id": "The Matrix", "tags": "Action Sci-Fi"},
  {"id": "The Godfather", "tags": "Drama Crime"},
  {"id": "Goodfellas", "tags": "Crime Drama"}
]"#,
    )
    .unwrap();
    path
}

/// Write a TOML ratings file where `Alice` and `Bob` agree and `Bob`
/// has also rated Goodfellas
#[allow(dead_code)]
pub fn write_ratings(dir: &Path) -> PathBuf {
    let path = dir.join("ratings.toml");
    fs::write(
        &path,
        r#"items = ["The Matrix", "The Godfather", "Goodfellas"]

[[users]]
name = "Alice"
ratings = [5, 3, 0]

[[users]]
name = "Bob"
ratings = [5, 3, 4]
"#,
    )
    .unwrap();
    path
}
