//! Source-tree scans backing the architecture contract tests.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One source line that matched a scan.
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

impl fmt::Debug for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.text.trim())
    }
}

struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    fn relative(&self) -> String {
        relative(&self.path)
    }

    fn is_mod_rs(&self) -> bool {
        self.path.file_name().and_then(|s| s.to_str()) == Some("mod.rs")
    }

    fn hits(&self, keep: impl Fn(&str) -> bool) -> Vec<Hit> {
        self.text
            .lines()
            .enumerate()
            .filter(|(_, line)| keep(line))
            .map(|(idx, line)| Hit {
                file: self.relative(),
                line: idx + 1,
                text: line.to_string(),
            })
            .collect()
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative(path: &Path) -> String {
    path.strip_prefix(manifest_dir())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

fn sources(dir: &str) -> Vec<SourceFile> {
    let mut paths = Vec::new();
    walk(&manifest_dir().join(dir), &mut paths);
    paths.sort();
    paths
        .into_iter()
        .map(|path| {
            let text = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
            SourceFile { path, text }
        })
        .collect()
}

/// Lines under `dir` containing any of `needles`.
pub fn lines_mentioning(dir: &str, needles: &[&str]) -> Vec<Hit> {
    sources(dir)
        .iter()
        .flat_map(|file| file.hits(|line| needles.iter().any(|n| line.contains(n))))
        .collect()
}

/// Lines of `mod.rs` files under `dir` that are not comments or module
/// declarations.
pub fn mod_rs_logic(dir: &str) -> Vec<Hit> {
    sources(dir)
        .iter()
        .filter(|file| file.is_mod_rs())
        .flat_map(|file| {
            file.hits(|line| {
                let line = line.trim();
                !(line.is_empty()
                    || line.starts_with("//")
                    || line.starts_with("#[cfg")
                    || is_mod_declaration(line))
            })
        })
        .collect()
}

/// Source files under `src` that no parent module declares.
pub fn undeclared_modules() -> Vec<String> {
    let root = manifest_dir().join("src");
    sources("src")
        .iter()
        .filter_map(|file| {
            let (name, parent) = declaring_parent(&root, &file.path)?;
            let declared = fs::read_to_string(&parent)
                .map(|text| {
                    text.lines().any(|line| {
                        let line = line.trim();
                        is_mod_declaration(line) && line.ends_with(&format!("mod {name};"))
                    })
                })
                .unwrap_or(false);
            (!declared).then(|| file.relative())
        })
        .collect()
}

fn is_mod_declaration(line: &str) -> bool {
    ["pub mod ", "mod ", "pub(crate) mod "]
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Module name of `path` and the file that must declare it.
fn declaring_parent(root: &Path, path: &Path) -> Option<(String, PathBuf)> {
    let stem = path.file_stem()?.to_str()?;
    let dir = path.parent()?;
    match stem {
        "lib" | "main" if dir == root => None,
        "mod" => {
            let name = dir.file_name()?.to_str()?.to_string();
            Some((name, parent_file(root, dir.parent()?)))
        }
        _ => Some((stem.to_string(), parent_file(root, dir))),
    }
}

fn parent_file(root: &Path, dir: &Path) -> PathBuf {
    if dir == root {
        root.join("lib.rs")
    } else {
        dir.join("mod.rs")
    }
}

pub fn exists(path: &str) -> bool {
    manifest_dir().join(path).exists()
}

pub fn read(path: &str) -> String {
    fs::read_to_string(manifest_dir().join(path))
        .unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
}
