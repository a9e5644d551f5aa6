use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use thaidict::model::{Entry, SortField};
use thaidict::store::fs::FileDictionary;
use thaidict::store::LoadStatus;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("dictionary.json");
    (dir, path)
}

#[test]
fn missing_file_is_created_immediately() {
    let (_dir, path) = setup();
    let store = FileDictionary::open_path(&path).unwrap();

    assert_eq!(store.load_status(), &LoadStatus::Created);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn added_words_survive_a_reload() {
    let (_dir, path) = setup();
    {
        let store = FileDictionary::open_path(&path).unwrap();
        store
            .add(&Entry::new("Hello  World", " สวัสดี ชาวโลก ").with_category("greetings"))
            .unwrap();
        store.add(&Entry::new("dog", "สุนัข")).unwrap();
    }

    let reopened = FileDictionary::open_path(&path).unwrap();
    assert_eq!(reopened.load_status(), &LoadStatus::Loaded);
    assert_eq!(
        reopened.get_all(),
        vec![
            Entry::new("hello world", "สวัสดี ชาวโลก").with_category("greetings"),
            Entry::new("dog", "สุนัข"),
        ]
    );
}

#[test]
fn sorted_order_is_written_to_disk() {
    let (_dir, path) = setup();
    let store = FileDictionary::open_path(&path).unwrap();
    store.add(&Entry::new("b", "1")).unwrap();
    store.add(&Entry::new("a", "2")).unwrap();
    store.add(&Entry::new("a b", "3")).unwrap();

    let sorted = store.sort(SortField::English).unwrap();
    drop(store);

    let reopened = FileDictionary::open_path(&path).unwrap();
    assert_eq!(reopened.get_all(), sorted);

    let raw = fs::read_to_string(&path).unwrap();
    let a = raw.find("\"a\"").unwrap();
    let ab = raw.find("\"a b\"").unwrap();
    let b = raw.find("\"b\"").unwrap();
    assert!(a < ab && ab < b);
}

#[test]
fn delete_all_leaves_an_empty_mapping_on_disk() {
    let (_dir, path) = setup();
    let store = FileDictionary::open_path(&path).unwrap();
    store.add(&Entry::new("cat", "แมว")).unwrap();
    store.delete_all().unwrap();

    assert!(store.get_all().is_empty());
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, serde_json::json!({}));
}

#[test]
fn reads_and_extends_files_from_the_previous_service() {
    let (_dir, path) = setup();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "{\n    \"dog\": {\n        \"thai\": \"สุนัข\",\n        \"category\": null\n    }\n}",
    )
    .unwrap();

    let store = FileDictionary::open_path(&path).unwrap();
    store
        .add(&Entry::new("cat", "แมว").with_category("animals"))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n    \"dog\": {\n        \"thai\": \"สุนัข\",\n        \"category\": null\n    },\n    \"cat\": {\n        \"thai\": \"แมว\",\n        \"category\": \"animals\"\n    }\n}"
    );
}

#[test]
fn corrupt_file_is_reported_and_replaced_on_next_change() {
    let (_dir, path) = setup();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{\"dog\": ").unwrap();

    let store = FileDictionary::open_path(&path).unwrap();
    assert!(matches!(store.load_status(), LoadStatus::Recovered { .. }));
    assert!(store.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"dog\": ");

    store.add(&Entry::new("cat", "แมว")).unwrap();
    let reopened = FileDictionary::open_path(&path).unwrap();
    assert_eq!(reopened.load_status(), &LoadStatus::Loaded);
    assert_eq!(reopened.len(), 1);
}

#[test]
fn wrong_shape_counts_as_corrupt() {
    let (_dir, path) = setup();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[1, 2, 3]").unwrap();

    let store = FileDictionary::open_path(&path).unwrap();
    assert!(matches!(store.load_status(), LoadStatus::Recovered { .. }));
}

#[test]
fn no_temporary_files_are_left_behind() {
    let (_dir, path) = setup();
    let store = FileDictionary::open_path(&path).unwrap();
    for word in ["one", "two", "three"] {
        store.add(&Entry::new(word, "คำ")).unwrap();
    }
    store.delete("two").unwrap();

    let names: Vec<String> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["dictionary.json".to_string()]);
}

#[test]
fn blank_entries_are_left_out_and_not_written_back() {
    let (_dir, path) = setup();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        r#"{"dog": {"thai": "   "}, "   ": {"thai": "ว่าง"}}"#,
    )
    .unwrap();

    let store = FileDictionary::open_path(&path).unwrap();
    assert_eq!(
        store.load_status(),
        &LoadStatus::Repaired {
            dropped: vec!["dog".to_string(), "   ".to_string()]
        }
    );
    assert!(store.is_empty());

    store.add(&Entry::new("cat", "แมว")).unwrap();
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!({"cat": {"thai": "แมว", "category": null}})
    );
}
