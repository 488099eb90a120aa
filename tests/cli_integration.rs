use assert_cmd::Command;

fn pillbox(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pillbox").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn test_add_remove_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");

    pillbox(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized"));

    // Add 100 x Aspirin (2 each) to drawer 1: load becomes 200.
    pillbox(&data_dir)
        .args(["add", "Aspirin", "-w", "2", "-q", "100", "-c", "5", "-d", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added 100 x Aspirin"));

    pillbox(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Aspirin"))
        .stdout(predicates::str::contains("Drawer 1: 200/1000"));

    // Remove 40: quantity 60, load 120.
    pillbox(&data_dir)
        .args(["remove", "Aspirin", "40"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed 40 x Aspirin"));

    pillbox(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("60"))
        .stdout(predicates::str::contains("Drawer 1: 120/1000"));

    // Removing more than held fails and leaves state alone.
    pillbox(&data_dir)
        .args(["remove", "Aspirin", "100"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("only 60 in stock"));

    pillbox(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Drawer 1: 120/1000"));
}

#[test]
fn test_capacity_rejection_leaves_state_unchanged() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");

    pillbox(&data_dir)
        .args(["add", "Lead", "-w", "600", "-q", "2", "-c", "1", "-d", "1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No space available"));

    pillbox(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No medicines found."))
        .stdout(predicates::str::contains("Drawer 1: 0/1000"));
}

#[test]
fn test_unknown_drawer_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");

    pillbox(&data_dir)
        .args(["add", "Aspirin", "-w", "2", "-q", "10", "-c", "5", "-d", "9"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Drawer not found: 9"));
}

#[test]
fn test_search() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");

    pillbox(&data_dir)
        .args(["add", "Aspirin", "-w", "2", "-q", "100", "-c", "5", "-d", "1"])
        .assert()
        .success();

    pillbox(&data_dir)
        .args(["search", "asp"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Aspirin"));

    pillbox(&data_dir)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No medicines found."));
}

#[test]
fn test_export_import_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");
    let export_path = temp_dir.path().join("Inventory.csv");

    pillbox(&data_dir)
        .args(["add", "Aspirin", "-w", "2", "-q", "100", "-c", "5", "-d", "1"])
        .assert()
        .success();

    pillbox(&data_dir)
        .arg("export")
        .arg("--output")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 1 medicines"));

    let content = std::fs::read_to_string(&export_path).unwrap();
    assert!(content.starts_with("Medicines:\nname,weight,quantity,cost,drawer\n"));
    assert!(content.contains("Aspirin,2,100,5,1"));
    assert!(content.contains("Drawers:\ndrawerNumber,currentWeight,capacity\n"));

    // Wipe the ledger, then restore it from the export.
    pillbox(&data_dir)
        .args(["remove", "Aspirin", "100"])
        .assert()
        .success();

    pillbox(&data_dir)
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported 1 medicines"));

    pillbox(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Aspirin"))
        .stdout(predicates::str::contains("Drawer 1: 200/1000"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("data");

    pillbox(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("export-file = Inventory.csv"));

    pillbox(&data_dir)
        .args(["config", "export-file", "stock.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("export-file set to stock.csv"));

    pillbox(&data_dir)
        .args(["config", "export-file"])
        .assert()
        .success()
        .stdout(predicates::str::contains("stock.csv"));
}
