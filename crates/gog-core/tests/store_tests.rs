//! Tests for the repository store

use std::fs;

use gog_core::{Error, RepositoryStore};
use gog_fs::create_symlink;
use gog_git::{GitCli, VersionControl};
use gog_test_utils::git::real_git_repo_with_commit;
use gog_test_utils::sandbox::REPO_NAME;
use gog_test_utils::{RecordingVcs, Sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_add_initialises_repository() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    let path = store.add("work", None).unwrap();

    assert_eq!(path, sandbox.base_dir().join("work"));
    assert!(git.is_repository(&path));
    assert_eq!(names(&store.list().unwrap()), vec!["dotfiles", "work"]);
}

#[test]
fn test_add_clones_url() {
    let sandbox = Sandbox::new();
    let upstream = sandbox.root().join("upstream");
    fs::create_dir(&upstream).unwrap();
    real_git_repo_with_commit(&upstream);
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    let path = store
        .add("cloned", Some(upstream.to_str().unwrap()))
        .unwrap();

    assert!(git.is_repository(&path));
    assert!(path.join("$HOME/.profile").is_file());
}

#[test]
fn test_add_rejects_existing_repository() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    let result = store.add(REPO_NAME, None);

    assert!(matches!(result, Err(Error::RepoExists { .. })));
}

#[test]
fn test_add_records_clone_command() {
    let sandbox = Sandbox::new();
    let vcs = RecordingVcs::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &vcs);

    store.add("remote", Some("https://example.com/dots.git")).unwrap();

    assert_eq!(
        vcs.commands(),
        vec![format!(
            "clone https://example.com/dots.git {}",
            sandbox.base_dir().join("remote").display()
        )]
    );
}

#[rstest]
#[case("../escape")]
#[case("a/b")]
#[case("")]
#[case("has space")]
fn test_add_rejects_invalid_names(#[case] name: &str) {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    assert!(matches!(
        store.add(name, None),
        Err(Error::InvalidRepoName { .. })
    ));
}

#[test]
fn test_remove_deletes_repository() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    sandbox.write_internal(".bashrc", "X");

    store.remove(REPO_NAME).unwrap();

    assert!(!sandbox.repo().exists());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_remove_refuses_plain_directory() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    let plain = sandbox.base_dir().join("plain");
    fs::create_dir(&plain).unwrap();

    let result = store.remove("plain");

    assert!(matches!(result, Err(Error::RepoNotInitialized { .. })));
    assert!(plain.is_dir());
}

#[test]
fn test_list_is_sorted_and_skips_files() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    store.add("zeta", None).unwrap();
    store.add("alpha", None).unwrap();
    fs::write(sandbox.base_dir().join("notes.txt"), "").unwrap();

    assert_eq!(
        names(&store.list().unwrap()),
        vec!["alpha", "dotfiles", "zeta"]
    );
}

#[test]
fn test_list_of_missing_base_dir_is_empty() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.root().join("absent"), None, &git);

    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_root_path_prefers_exact_name() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    store.add("dotfiles-work", None).unwrap();

    assert_eq!(store.root_path(Some(REPO_NAME)).unwrap(), sandbox.repo());
}

#[test]
fn test_root_path_accepts_unique_prefix() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    assert_eq!(store.root_path(Some("dot")).unwrap(), sandbox.repo());
}

#[test]
fn test_root_path_rejects_ambiguous_prefix() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    store.add("dotwork", None).unwrap();

    let result = store.root_path(Some("dot"));

    match result {
        Err(Error::AmbiguousRepoName { name, matches }) => {
            assert_eq!(name, "dot");
            assert_eq!(matches, "dotfiles, dotwork");
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn test_root_path_reports_unknown_name() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    assert!(matches!(
        store.root_path(Some("missing")),
        Err(Error::RepoNotFound { .. })
    ));
}

#[test]
fn test_root_path_rejects_traversal() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    assert!(matches!(
        store.root_path(Some("../home")),
        Err(Error::InvalidRepoName { .. })
    ));
}

#[test]
fn test_root_path_rejects_symlink_out_of_base_dir() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    let outside = sandbox.root().join("outside");
    fs::create_dir(&outside).unwrap();
    git.init(&outside).unwrap();
    create_symlink(&outside, &sandbox.base_dir().join("sneaky")).unwrap();

    assert!(matches!(
        store.root_path(Some("sneaky")),
        Err(Error::OutsideBaseDir { .. })
    ));
}

#[test]
fn test_empty_name_selects_default() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);

    assert_eq!(store.root_path(None).unwrap(), sandbox.repo());
    assert_eq!(store.root_path(Some("")).unwrap(), sandbox.repo());
}

#[test]
fn test_default_uses_configured_name() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    RepositoryStore::new(sandbox.base_dir(), None, &git)
        .add("work", None)
        .unwrap();
    let store = RepositoryStore::new(sandbox.base_dir(), Some("work".into()), &git);

    assert_eq!(
        store.default_repository().unwrap(),
        sandbox.base_dir().join("work")
    );
}

#[test]
fn test_default_skips_directories_that_are_not_repositories() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.base_dir(), None, &git);
    fs::create_dir(sandbox.base_dir().join("aaa")).unwrap();

    assert_eq!(store.default_repository().unwrap(), sandbox.repo());
}

#[test]
fn test_default_without_repositories_asks_to_add_one() {
    let sandbox = Sandbox::new();
    let git = GitCli::new();
    let store = RepositoryStore::new(sandbox.root().join("empty"), None, &git);

    let err = store.default_repository().unwrap_err();

    assert!(matches!(err, Error::NoRepositories));
    assert_eq!(err.to_string(), "Run `gog repository add` to add a repository");
}
