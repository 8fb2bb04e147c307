//! Tests for copying paths into a repository and removing them again

use std::fs;

use gog_core::ingest::{add_path, add_paths, remove_path};
use gog_core::{Config, Engine, Error};
use gog_fs::{PathMapper, create_symlink};
use gog_test_utils::{RecordingVcs, Sandbox};
use pretty_assertions::assert_eq;

fn mapper(sandbox: &Sandbox) -> PathMapper {
    PathMapper::new(sandbox.repo(), sandbox.home())
}

#[test]
fn test_add_path_copies_file_into_home_mirror() {
    let sandbox = Sandbox::new();
    let external = sandbox.write_external(".config/app.toml", "a = 1");

    add_path(&mapper(&sandbox), &sandbox.base_dir(), &external).unwrap();

    sandbox.assert_plain_file(&sandbox.internal(".config/app.toml"), "a = 1");
    sandbox.assert_plain_file(&external, "a = 1");
}

#[test]
fn test_add_path_mirrors_paths_outside_home_from_root() {
    let sandbox = Sandbox::new();
    let external = sandbox.root().join("etc/hosts");
    fs::create_dir_all(external.parent().unwrap()).unwrap();
    fs::write(&external, "127.0.0.1 localhost").unwrap();

    add_path(&mapper(&sandbox), &sandbox.base_dir(), &external).unwrap();

    let relative = external.strip_prefix("/").unwrap();
    sandbox.assert_plain_file(&sandbox.repo().join(relative), "127.0.0.1 localhost");
}

#[test]
fn test_add_path_copies_directory_without_backups() {
    let sandbox = Sandbox::new();
    sandbox.write_external(".vim/vimrc", "set nu");
    sandbox.write_external(".vim/colors/dark.vim", "hi");
    sandbox.write_external(".vim/.old.gog", "backup");

    add_path(&mapper(&sandbox), &sandbox.base_dir(), &sandbox.external(".vim")).unwrap();

    sandbox.assert_plain_file(&sandbox.internal(".vim/vimrc"), "set nu");
    sandbox.assert_plain_file(&sandbox.internal(".vim/colors/dark.vim"), "hi");
    sandbox.assert_absent(&sandbox.internal(".vim/.old.gog"));
}

#[test]
fn test_add_path_skips_entries_already_in_repository() {
    // A directory that already holds links must not copy repository files
    // onto themselves
    let sandbox = Sandbox::new();
    let config = Config::new(sandbox.home(), sandbox.base_dir());
    let vcs = RecordingVcs::new();
    let engine = Engine::new(sandbox.repo(), &config, &vcs);
    let linked = sandbox.write_internal(".vim/vimrc", "set nu");
    fs::create_dir_all(sandbox.external(".vim")).unwrap();
    engine.link_file(&linked, &mut Vec::new());
    sandbox.write_external(".vim/new.vim", "new");

    add_path(&mapper(&sandbox), &sandbox.base_dir(), &sandbox.external(".vim")).unwrap();

    sandbox.assert_plain_file(&linked, "set nu");
    sandbox.assert_plain_file(&sandbox.internal(".vim/new.vim"), "new");
}

#[test]
fn test_add_path_of_linked_file_is_noop() {
    let sandbox = Sandbox::new();
    let internal = sandbox.write_internal(".bashrc", "X");
    let external = sandbox.external(".bashrc");
    create_symlink(&internal, &external).unwrap();

    add_path(&mapper(&sandbox), &sandbox.base_dir(), &external).unwrap();

    sandbox.assert_plain_file(&internal, "X");
    sandbox.assert_links_to(&external, &internal);
}

#[test]
fn test_add_path_rejects_backup_files() {
    let sandbox = Sandbox::new();
    let backup = sandbox.write_external(".bashrc.gog", "X");

    let result = add_path(&mapper(&sandbox), &sandbox.base_dir(), &backup);

    assert!(matches!(result, Err(Error::InvalidTargetPath { .. })));
}

#[test]
fn test_add_path_rejects_repository_contents() {
    let sandbox = Sandbox::new();
    let internal = sandbox.write_internal(".bashrc", "X");

    let result = add_path(&mapper(&sandbox), &sandbox.base_dir(), &internal);

    assert!(matches!(result, Err(Error::InvalidTargetPath { .. })));
}

#[test]
fn test_add_path_of_missing_file_fails() {
    let sandbox = Sandbox::new();

    let result = add_path(
        &mapper(&sandbox),
        &sandbox.base_dir(),
        &sandbox.external("absent"),
    );

    assert!(matches!(result, Err(Error::Fs(_))));
}

#[test]
fn test_add_paths_stops_at_first_failure() {
    let sandbox = Sandbox::new();
    let first = sandbox.write_external(".a", "a");
    let third = sandbox.write_external(".c", "c");

    let result = add_paths(
        &mapper(&sandbox),
        &sandbox.base_dir(),
        &[first, sandbox.external(".b"), third],
    );

    assert!(result.is_err());
    sandbox.assert_plain_file(&sandbox.internal(".a"), "a");
    sandbox.assert_absent(&sandbox.internal(".c"));
}

#[test]
fn test_remove_path_deletes_file_and_directory() {
    let sandbox = Sandbox::new();
    sandbox.write_internal(".bashrc", "X");
    sandbox.write_internal(".vim/vimrc", "set nu");
    let paths = mapper(&sandbox);

    remove_path(&paths, &sandbox.base_dir(), &sandbox.external(".bashrc")).unwrap();
    remove_path(&paths, &sandbox.base_dir(), &sandbox.external(".vim")).unwrap();

    sandbox.assert_absent(&sandbox.internal(".bashrc"));
    sandbox.assert_absent(&sandbox.internal(".vim"));
}

#[test]
fn test_remove_path_of_missing_entry_is_ok() {
    let sandbox = Sandbox::new();

    let result = remove_path(
        &mapper(&sandbox),
        &sandbox.base_dir(),
        &sandbox.external("never-added"),
    );

    assert!(result.is_ok());
    assert_eq!(fs::read_dir(sandbox.repo()).unwrap().count(), 1);
}
