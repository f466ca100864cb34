//! End-to-end index generation over fixture trees.

use std::fs;
use std::path::Path;

use booksmith_index::{generate_index, IndexConfig};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

/// Build a `docs/` fixture from `(relative path, contents)` pairs.
fn fixture(files: &[(&str, &str)]) -> (TempDir, IndexConfig) {
    let temp = tempdir().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();

    for (path, contents) in files {
        let path = docs.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    let config = IndexConfig::new(docs);
    (temp, config)
}

fn summary(config: &IndexConfig) -> String {
    generate_index(config).unwrap();
    fs::read_to_string(config.summary_path()).unwrap()
}

/// Link targets of every summary list item, empty links skipped.
fn links(summary: &str) -> Vec<String> {
    summary
        .lines()
        .filter_map(|line| line.rsplit_once("]("))
        .map(|(_, rest)| rest.trim_end_matches(')').to_string())
        .filter(|link| !link.is_empty())
        .collect()
}

fn assert_links_mirrored(config: &IndexConfig, summary: &str) {
    for link in links(summary) {
        let mirrored = config.dest_dir().join(&link);
        assert!(mirrored.is_file(), "{} was not mirrored", mirrored.display());
        let source = config.source_dir().join(&link);
        assert_eq!(fs::read(&source).unwrap(), fs::read(&mirrored).unwrap());
    }
}

#[test]
fn empty_tree_has_only_header() {
    let (_temp, config) = fixture(&[]);

    assert_eq!(summary(&config), "# Summary\n");
}

#[test]
fn first_chapter_only() {
    let (_temp, config) = fixture(&[("introduction/README.md", "# Welcome\n\nHello.\n")]);

    let summary = summary(&config);

    assert_eq!(summary, "# Summary\n- [Introduction](introduction/README.md)\n\n");
    assert_eq!(
        fs::read(config.dest_dir().join("introduction/README.md")).unwrap(),
        b"# Welcome\n\nHello.\n"
    );
}

#[test]
fn first_chapter_precedes_sorted_sections() {
    let (_temp, config) = fixture(&[
        ("zeta/README.md", "z"),
        ("alpha/README.md", "a"),
        ("introduction/README.md", "i"),
    ]);

    assert_eq!(
        summary(&config),
        "# Summary\n\
         - [Introduction](introduction/README.md)\n\
         \n\
         - [Alpha](alpha/README.md)\n\
         \n\
         - [Zeta](zeta/README.md)\n\
         \n"
    );
}

#[test]
fn directory_without_readme_gets_empty_link() {
    let (_temp, config) = fixture(&[("guide/setup_steps.md", "steps")]);

    let summary = summary(&config);

    assert_eq!(
        summary,
        "# Summary\n- [Guide]()\n  - [Setup Steps](guide/setup_steps.md)\n\n"
    );
    assert!(config.dest_dir().join("guide/setup_steps.md").is_file());
}

#[test]
fn ignored_directory_is_skipped() {
    let (_temp, config) = fixture(&[("node_modules/anything.md", "dep")]);

    let summary = summary(&config);

    assert!(!summary.contains("node_modules"));
    assert!(!config.dest_dir().join("node_modules").exists());
}

#[test]
fn nested_hierarchy() {
    let (_temp, config) = fixture(&[
        ("api/README.md", "api"),
        ("api/v1/README.md", "v1"),
        ("api/v1/methods.md", "methods"),
    ]);

    let summary = summary(&config);

    assert_eq!(
        summary,
        "# Summary\n\
         - [Api](api/README.md)\n\
         \n  - [V1](api/v1/README.md)\n\
         \x20   - [Methods](api/v1/methods.md)\n\
         \n"
    );
    assert_links_mirrored(&config, &summary);
}

#[test]
fn every_link_is_mirrored_in_a_mixed_tree() {
    let (_temp, config) = fixture(&[
        ("introduction/README.md", "intro"),
        ("introduction/quick-start.md", "quick"),
        ("guide/advanced/tuning_tips.md", "tips"),
        ("guide/basics.md", "basics"),
        ("reference/README.md", "ref"),
        ("reference/cli/commands.md", "cmds"),
        (".git/HEAD.md", "git"),
        ("scripts/notes.md", "scripts"),
        ("assets/logo.svg", "<svg/>"),
    ]);

    let summary = summary(&config);

    assert_eq!(
        summary,
        "# Summary\n\
         - [Introduction](introduction/README.md)\n\
         \x20 - [Quick Start](introduction/quick-start.md)\n\
         \n\
         - [Guide]()\n\
         \x20 - [Basics](guide/basics.md)\n\
         \n\
         \x20 - [Advanced]()\n\
         \x20   - [Tuning Tips](guide/advanced/tuning_tips.md)\n\
         \n\
         - [Reference](reference/README.md)\n\
         \n\
         \x20 - [Cli]()\n\
         \x20   - [Commands](reference/cli/commands.md)\n\
         \n"
    );
    assert_links_mirrored(&config, &summary);
    assert!(!config.dest_dir().join(".git").exists());
    assert!(!config.dest_dir().join("scripts").exists());
    assert!(!config.dest_dir().join("assets").exists());
}

#[test]
fn sibling_files_are_sorted_by_basename() {
    let (_temp, config) = fixture(&[
        ("guide/c.md", "c"),
        ("guide/a.md", "a"),
        ("guide/B.md", "b"),
        ("guide/a-b.md", "ab"),
    ]);

    let summary = summary(&config);
    let listed: Vec<&str> = summary
        .lines()
        .filter(|line| line.starts_with("  - "))
        .collect();

    // Byte order: uppercase before lowercase, '-' before '.'
    assert_eq!(
        listed,
        vec![
            "  - [B](guide/B.md)",
            "  - [A B](guide/a-b.md)",
            "  - [A](guide/a.md)",
            "  - [C](guide/c.md)",
        ]
    );
}

#[test]
fn stale_mirrors_are_overwritten() {
    let (_temp, config) = fixture(&[("guide/README.md", "fresh")]);
    let stale = config.dest_dir().join("guide/README.md");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "stale and much longer content").unwrap();

    summary(&config);

    assert_eq!(fs::read_to_string(&stale).unwrap(), "fresh");
}

#[test]
fn report_counts_entries_and_mirrors() {
    let (_temp, config) = fixture(&[
        ("api/README.md", "api"),
        ("api/v1/README.md", "v1"),
        ("api/v1/methods.md", "methods"),
        ("guide/setup.md", "setup"),
    ]);

    let report = generate_index(&config).unwrap();

    assert_eq!(report.entries, 5);
    assert_eq!(report.mirrored, 4);
    assert_eq!(report.mirror_failures, 0);
    assert_eq!(report.summary_path, config.summary_path());
    assert!(Path::new(&report.summary_path).is_file());
}
