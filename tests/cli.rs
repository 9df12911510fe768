use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookdex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookdex").unwrap();
    cmd.env("JSON_STORAGE_PATH", dir.path().join("books.json"));
    cmd
}

const JOHN_DOE: &[&str] = &[
    "add",
    "--book",
    "Personal",
    "--first-name",
    "John",
    "--last-name",
    "Doe",
    "--address",
    "123 Main St",
    "--city",
    "New York",
    "--state",
    "NEW YORK",
    "--zip",
    "10001",
    "--phone",
    "9876543210",
    "--email",
    "john.doe@example.com",
];

#[test]
fn create_add_count_search_scenario() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 'Personal' created successfully"));

    bookdex(&dir)
        .args(JOHN_DOE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));

    bookdex(&dir)
        .args(["count", "--book", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 contact(s) in 'Personal'"));

    // Case-insensitive match on the state field
    bookdex(&dir)
        .args(["search", "--term", "new york"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John").and(predicate::str::contains("Doe")));
}

#[test]
fn creating_the_same_book_twice_is_a_reported_no_op() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success();

    bookdex(&dir)
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Book 'Personal' already exists, nothing to do",
        ));
}

#[test]
fn invalid_inputs() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success();

    // INVALID ZIP
    let mut bad_zip: Vec<&str> = JOHN_DOE.to_vec();
    bad_zip[14] = "1234";
    bookdex(&dir)
        .args(&bad_zip)
        .assert()
        .failure()
        .stderr(predicate::str::contains("field: \"zip\""));

    // INVALID PHONE
    let mut bad_phone: Vec<&str> = JOHN_DOE.to_vec();
    bad_phone[16] = "1234567890";
    bookdex(&dir)
        .args(&bad_phone)
        .assert()
        .failure()
        .stderr(predicate::str::contains("field: \"phone\""));

    // Neither record was stored
    bookdex(&dir)
        .args(["count", "--book", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 contact(s) in 'Personal'"));
}

#[test]
fn adding_to_a_missing_book_fails() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(JOHN_DOE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("BookNotFound"));
}

#[test]
fn duplicate_contact_is_rejected() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success();

    bookdex(&dir).args(JOHN_DOE).assert().success();

    bookdex(&dir)
        .args(JOHN_DOE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DuplicateContact"));

    bookdex(&dir)
        .args(["count", "--book", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 contact(s) in 'Personal'"));
}

#[test]
fn edit_and_delete_round_trip() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success();

    bookdex(&dir).args(JOHN_DOE).assert().success();

    bookdex(&dir)
        .args([
            "edit",
            "--book",
            "Personal",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--new-phone",
            "9123456780",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully"));

    bookdex(&dir)
        .args(["list", "--book", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9123456780"));

    bookdex(&dir)
        .args([
            "delete",
            "--book",
            "Personal",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 contact(s)"));

    bookdex(&dir)
        .args(["count", "--book", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 contact(s) in 'Personal'"));
}

#[test]
fn dot_env_file_backs_the_storage_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "JSON_STORAGE_PATH=books.json\n").unwrap();

    // No env var passed in; the path comes from the .env file in the
    // working directory
    Command::cargo_bin("bookdex")
        .unwrap()
        .current_dir(dir.path())
        .args(["create-book", "--name", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 'Personal' created successfully"));

    assert!(dir.path().join("books.json").exists());

    Command::cargo_bin("bookdex")
        .unwrap()
        .current_dir(dir.path())
        .args(["count", "--book", "Personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 contact(s) in 'Personal'"));
}

#[test]
fn state_survives_separate_invocations() {
    let dir = TempDir::new().unwrap();

    bookdex(&dir)
        .args(["create-book", "--name", "Work"])
        .assert()
        .success();

    bookdex(&dir)
        .args([
            "add",
            "--book",
            "Work",
            "--first-name",
            "Jane",
            "--last-name",
            "Roe",
            "--address",
            "45 Oak Avenue",
            "--city",
            "Austin",
            "--state",
            "Texas",
            "--zip",
            "73301",
            "--phone",
            "7012345678",
            "--email",
            "jane.roe@example.org",
        ])
        .assert()
        .success();

    bookdex(&dir)
        .args(["list", "--book", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane").and(predicate::str::contains("Austin")));
}
