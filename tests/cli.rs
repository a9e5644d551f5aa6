use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn thaidict(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("thaidict").unwrap();
    cmd.env("THAIDICT_HOME", home.path())
        .env_remove("THAIDICT_DICTIONARY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn add_list_and_get() {
    let home = TempDir::new().unwrap();

    thaidict(&home)
        .args(["add", "Hello World", "สวัสดีชาวโลก", "-c", "greetings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("เพิ่มคำว่า 'Hello World' เรียบร้อยแล้ว"));

    thaidict(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"))
        .stdout(predicate::str::contains("สวัสดีชาวโลก"))
        .stdout(predicate::str::contains("greetings"));

    thaidict(&home)
        .args(["get", "  HELLO   world "])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));

    assert!(home.path().join("dictionary.json").exists());
}

#[test]
fn duplicate_add_fails() {
    let home = TempDir::new().unwrap();
    thaidict(&home).args(["add", "cat", "แมว"]).assert().success();

    thaidict(&home)
        .args(["add", "CAT", "แมว"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Word already exists: cat"));
}

#[test]
fn invalid_characters_are_rejected() {
    let home = TempDir::new().unwrap();
    thaidict(&home)
        .args(["add", "cat!", "แมว"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '!'"));
}

#[test]
fn check_translation_messages() {
    let home = TempDir::new().unwrap();
    thaidict(&home).args(["add", "dog", "สุนัข"]).assert().success();

    thaidict(&home)
        .args(["check", "dog", "สุนัข"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ถูกต้อง! 🎉"));

    thaidict(&home)
        .args(["check", "dog", "แมว"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ไม่ถูกต้อง คำแปลที่ถูกต้องคือ: สุนัข"));

    thaidict(&home)
        .args(["check", "elephant", "ช้าง"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ไม่พบคำศัพท์นี้ในระบบ"));
}

#[test]
fn sort_rewrites_the_file() {
    let home = TempDir::new().unwrap();
    for (en, th) in [("zebra", "ม้าลาย"), ("apple", "แอปเปิล"), ("mango", "มะม่วง")] {
        thaidict(&home).args(["add", en, th]).assert().success();
    }

    thaidict(&home).args(["sort", "english"]).assert().success();

    let raw = fs::read_to_string(home.path().join("dictionary.json")).unwrap();
    let apple = raw.find("apple").unwrap();
    let mango = raw.find("mango").unwrap();
    let zebra = raw.find("zebra").unwrap();
    assert!(apple < mango && mango < zebra);

    thaidict(&home)
        .args(["sort", "date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort field 'date'"));
}

#[test]
fn search_and_category_filter() {
    let home = TempDir::new().unwrap();
    thaidict(&home)
        .args(["add", "dog", "สุนัข", "-c", "animals"])
        .assert()
        .success();
    thaidict(&home)
        .args(["add", "rice", "ข้าว", "-c", "food"])
        .assert()
        .success();

    thaidict(&home)
        .args(["search", "ANIM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dog"))
        .stdout(predicate::str::contains("rice").not());

    thaidict(&home)
        .args(["list", "-c", "anim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No words found."));
}

#[test]
fn update_and_delete() {
    let home = TempDir::new().unwrap();
    thaidict(&home).args(["add", "dog", "หมา"]).assert().success();

    thaidict(&home)
        .args(["update", "Dog", "สุนัข"])
        .assert()
        .success()
        .stdout(predicate::str::contains("อัพเดทคำว่า 'Dog' เรียบร้อยแล้ว"));

    thaidict(&home)
        .args(["get", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("สุนัข"));

    thaidict(&home).args(["delete", "dog"]).assert().success();
    thaidict(&home)
        .args(["get", "dog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ไม่พบคำศัพท์นี้: dog"));
}

#[test]
fn clear_requires_confirmation() {
    let home = TempDir::new().unwrap();
    thaidict(&home).args(["add", "dog", "สุนัข"]).assert().success();

    thaidict(&home)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    thaidict(&home)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("dog"));

    thaidict(&home).args(["clear", "--yes"]).assert().success();
    let raw = fs::read_to_string(home.path().join("dictionary.json")).unwrap();
    assert_eq!(raw, "{}");
}

#[test]
fn import_csv_skips_duplicates() {
    let home = TempDir::new().unwrap();
    thaidict(&home).args(["add", "cat", "แมว"]).assert().success();

    let csv = home.path().join("words.csv");
    fs::write(&csv, "dog,สุนัข,animals\ncat,แมว\nbird,นก\n").unwrap();

    thaidict(&home)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("นำเข้าคำศัพท์ 2 คำ (ข้ามคำที่ซ้ำ 1 คำ)"));
}

#[test]
fn dictionary_path_follows_flag_and_config() {
    let home = TempDir::new().unwrap();

    thaidict(&home)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("dictionary.json"));

    thaidict(&home)
        .args(["config", "dictionary-path", "words/thai.json"])
        .assert()
        .success();
    thaidict(&home).args(["add", "dog", "สุนัข"]).assert().success();
    assert!(home.path().join("words").join("thai.json").exists());

    let other = home.path().join("other.json");
    thaidict(&home)
        .arg("--dict")
        .arg(&other)
        .args(["add", "cat", "แมว"])
        .assert()
        .success();
    assert!(other.exists());
}

#[test]
fn corrupt_dictionary_warns_on_stderr() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("dictionary.json"), "not json").unwrap();

    thaidict(&home)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be read"))
        .stdout(predicate::str::contains("No words found."));
}

#[test]
fn missing_word_error_is_in_thai() {
    let home = TempDir::new().unwrap();
    thaidict(&home).args(["add", "dog", "สุนัข"]).assert().success();

    thaidict(&home)
        .args(["get", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ไม่พบคำศัพท์นี้: cat"));
}

#[test]
fn unusable_entries_are_reported_on_stderr() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("dictionary.json"),
        r#"{"dog": {"thai": "   "}, "cat": {"thai": "แมว"}}"#,
    )
    .unwrap();

    thaidict(&home)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("unusable entries ('dog')"))
        .stdout(predicate::str::contains("cat"));
}

#[test]
fn import_of_file_without_valid_rows_fails() {
    let home = TempDir::new().unwrap();
    let csv = home.path().join("empty.csv");
    fs::write(&csv, "just-one-column\n,แมว\n").unwrap();

    thaidict(&home)
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ไม่พบข้อมูลที่ถูกต้องในไฟล์"));
}
