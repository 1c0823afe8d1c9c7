// tests/store.rs
use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use ucl_ledger::model::{Elimination, Team, Title};
use ucl_ledger::store::{self, StoreError};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ucl_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[rstest]
#[case::blank("blank", "")]
#[case::whitespace("whitespace", "  \n\t ")]
#[case::null("null", "null")]
#[case::empty_array("empty_array", "[]")]
fn degenerate_files_read_as_empty(#[case] name: &str, #[case] content: &str) {
    let path = tmp_dir(name).join("teams.json");
    fs::write(&path, content).unwrap();
    let teams = store::load_teams(&path).unwrap();
    assert!(teams.is_empty());
}

#[test]
fn malformed_json_reports_path() {
    let path = tmp_dir("malformed").join("teams.json");
    fs::write(&path, "[{\"name\": ").unwrap();
    let err = store::load_teams(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().starts_with("json error"));
}

#[test]
fn wrong_shape_is_a_json_error() {
    let path = tmp_dir("wrong_shape").join("teams.json");
    fs::write(&path, r#"{"name": "Ajax"}"#).unwrap();
    assert!(matches!(store::load_teams(&path), Err(StoreError::Json { .. })));
}

#[test]
fn directory_in_place_of_file_is_an_io_error() {
    let dir = tmp_dir("dir_as_file");
    let err = store::load_teams(&dir).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn save_creates_parent_dirs_and_writes_camel_case() {
    let path = tmp_dir("save_nested").join("a").join("b").join("teams.json");
    let teams = vec![Team::with_titles("Porto", vec![Title::new(2004, 7)])];
    store::save_teams(&teams, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"topScorerGoals\": 7"));
    let back = store::load_teams(&path).unwrap();
    assert_eq!(back, teams);
}

#[test]
fn eliminations_without_optional_fields_load() {
    let path = tmp_dir("elim_optional").join("eliminations.json");
    fs::write(
        &path,
        r#"[{ "season": "2008-2009", "phase": "Round of 16", "opponent": "Liverpool",
              "resultHome": "0-1", "resultAway": "4-0" }]"#,
    )
    .unwrap();
    let rows = store::load_eliminations(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].result_away, "4-0");
    assert!(rows[0].description.is_empty());
    assert!(rows[0].image_path.is_empty());
}

#[test]
fn seeding_overwrites_and_round_trips() {
    let path = tmp_dir("seed").join("eliminations.json");
    store::save_eliminations(&[Elimination::new("1999-2000", "Final", "Valencia", "3-0", "")], &path).unwrap();
    store::seed_eliminations(&path).unwrap();

    let rows = store::load_eliminations(&path).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|e| !e.description.is_empty() && !e.image_path.is_empty()));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"imagePath\""));
}
