//! Varredura da árvore de projetos no sistema de arquivos.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::types::config::ScannerConfig;
use crate::types::project::{Project, ProjectCollection};
use crate::{PlutoError, PlutoResult};

use super::ProjectSource;

/// Varre diretórios `<root>/<project_prefix>N/<version_prefix>M`.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
    project_prefix: String,
    version_prefix: String,
}

impl DirectoryScanner {
    /// Cria o scanner com prefixos explícitos.
    pub fn new(
        root: impl Into<PathBuf>,
        project_prefix: impl Into<String>,
        version_prefix: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            project_prefix: project_prefix.into(),
            version_prefix: version_prefix.into(),
        }
    }

    /// Cria o scanner a partir da configuração.
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(
            config.root.clone(),
            config.project_prefix.clone(),
            config.version_prefix.clone(),
        )
    }

    /// Nomes dos diretórios de versão logo abaixo do diretório do projeto.
    ///
    /// Falha na listagem é registrada e resulta em nenhuma versão.
    fn versions(&self, project_dir: &Path) -> Vec<String> {
        let listed: Result<Vec<DirEntry>, walkdir::Error> = child_dirs(project_dir).collect();

        match listed {
            Ok(entries) => entries
                .iter()
                .filter_map(entry_name)
                .filter(|name| name.starts_with(&self.version_prefix))
                .map(str::to_string)
                .collect(),
            Err(e) => {
                tracing::warn!(
                    project = %project_dir.display(),
                    error = %e,
                    "Failed to list versions, treating project as empty"
                );
                Vec::new()
            }
        }
    }
}

impl ProjectSource for DirectoryScanner {
    fn scan(&self) -> PlutoResult<Option<ProjectCollection>> {
        match std::fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(PlutoError::Scan(format!(
                    "{} is not a directory",
                    self.root.display()
                )))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(root = %self.root.display(), "Projects root missing");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }

        let mut projects = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(name) = entry_name(&entry) else {
                continue;
            };
            let Some(number) = name.strip_prefix(&self.project_prefix) else {
                continue;
            };

            let versions = self.versions(entry.path());
            projects.push(Project::new(number, versions, &self.version_prefix));
        }

        let collection = ProjectCollection::sorted(projects);
        tracing::debug!(
            root = %self.root.display(),
            projects = collection.len(),
            "Projects scanned"
        );

        Ok(Some(collection))
    }
}

/// Filhos diretos de `dir` que são diretórios, em ordem de nome.
fn child_dirs(dir: &Path) -> impl Iterator<Item = Result<DirEntry, walkdir::Error>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter(|entry| match entry {
            Ok(e) => e.file_type().is_dir(),
            Err(_) => true,
        })
}

fn entry_name(entry: &DirEntry) -> Option<&str> {
    let name = entry.file_name().to_str();
    if name.is_none() {
        tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 directory name");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    fn scanner(root: &Path) -> DirectoryScanner {
        DirectoryScanner::new(root, "project", "v")
    }

    fn numbers(collection: &ProjectCollection) -> Vec<&str> {
        collection.iter().map(|p| p.number.as_str()).collect()
    }

    #[test]
    fn test_missing_root_is_reported_as_absent() {
        let dir = TempDir::new().unwrap();
        let scanned = scanner(&dir.path().join("nope")).scan().unwrap();
        assert!(scanned.is_none());
    }

    #[test]
    fn test_root_without_projects_is_empty() {
        let dir = TempDir::new().unwrap();
        mkdirs(dir.path(), &["archive/v1"]);

        let collection = scanner(dir.path()).scan().unwrap().unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("projects");
        fs::write(&file, "").unwrap();

        assert!(matches!(scanner(&file).scan(), Err(PlutoError::Scan(_))));
    }

    #[test]
    fn test_scan_orders_projects_and_versions() {
        let dir = TempDir::new().unwrap();
        mkdirs(
            dir.path(),
            &[
                "project7/v1",
                "project12/v10",
                "project12/v2",
                "project12/v1",
                "project9",
            ],
        );

        let collection = scanner(dir.path()).scan().unwrap().unwrap();

        assert_eq!(numbers(&collection), vec!["12", "9", "7"]);
        assert_eq!(collection.projects()[0].versions, vec!["v1", "v2", "v10"]);
        assert!(collection.projects()[1].versions.is_empty());
        assert_eq!(collection.projects()[2].versions, vec!["v1"]);
    }

    #[test]
    fn test_scan_filters_by_prefix_and_kind() {
        let dir = TempDir::new().unwrap();
        mkdirs(
            dir.path(),
            &["project3/v1", "project3/draft", "archive/v1", "notes"],
        );
        fs::write(dir.path().join("project5"), "not a directory").unwrap();
        fs::write(dir.path().join("project3/v9"), "not a directory").unwrap();

        let collection = scanner(dir.path()).scan().unwrap().unwrap();

        assert_eq!(numbers(&collection), vec!["3"]);
        assert_eq!(collection.projects()[0].versions, vec!["v1"]);
    }

    #[test]
    fn test_malformed_names_sort_as_zero() {
        let dir = TempDir::new().unwrap();
        mkdirs(
            dir.path(),
            &["project2/v1", "projectbeta/vnext", "projectbeta/v4", "project1"],
        );

        let collection = scanner(dir.path()).scan().unwrap().unwrap();

        assert_eq!(numbers(&collection), vec!["2", "1", "beta"]);
        assert_eq!(collection.projects()[2].versions, vec!["vnext", "v4"]);
    }

    #[test]
    fn test_custom_prefixes() {
        let dir = TempDir::new().unwrap();
        mkdirs(dir.path(), &["site-4/rel-2", "site-4/rel-11", "project9/v1"]);

        let collection = DirectoryScanner::new(dir.path(), "site-", "rel-")
            .scan()
            .unwrap()
            .unwrap();

        assert_eq!(numbers(&collection), vec!["4"]);
        assert_eq!(collection.projects()[0].versions, vec!["rel-2", "rel-11"]);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let dir = TempDir::new().unwrap();
        mkdirs(dir.path(), &["projectx/v1", "projecty/v1", "project0/v1"]);

        let first = scanner(dir.path()).scan().unwrap().unwrap();
        let second = scanner(dir.path()).scan().unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(numbers(&first), vec!["0", "x", "y"]);
    }

    #[cfg(unix)]
    fn set_mode(path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    // Com privilégios de root o chmod não bloqueia a leitura.
    #[cfg(unix)]
    fn still_readable(path: &Path) -> bool {
        fs::read_dir(path).is_ok()
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_project_has_no_versions() {
        let dir = TempDir::new().unwrap();
        mkdirs(dir.path(), &["project3/v1", "project3/v2", "project4/v1"]);

        let locked = dir.path().join("project3");
        set_mode(&locked, 0o000);
        if still_readable(&locked) {
            set_mode(&locked, 0o755);
            return;
        }

        let scanned = scanner(dir.path()).scan();
        set_mode(&locked, 0o755);

        let collection = scanned.unwrap().unwrap();
        assert_eq!(numbers(&collection), vec!["4", "3"]);
        assert_eq!(collection.projects()[0].versions, vec!["v1"]);
        assert!(collection.projects()[1].versions.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("projects");
        mkdirs(&root, &["project1/v1"]);

        set_mode(&root, 0o000);
        if still_readable(&root) {
            set_mode(&root, 0o755);
            return;
        }

        let scanned = scanner(&root).scan();
        set_mode(&root, 0o755);

        assert!(matches!(scanned, Err(PlutoError::Walk(_))));
    }
}
