use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_output").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn creates_parent_dirs_and_writes_bytes() {
    let dir = scratch_dir("create");
    let dest = dir.join("nested").join("icon.bin");

    write_file(&dest, b"hello").unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), b"hello");
}

#[test]
fn replaces_existing_file_and_leaves_no_temp() {
    let dir = scratch_dir("replace");
    let dest = dir.join("icon.bin");

    write_file(&dest, b"first version").unwrap();
    write_file(&dest, b"2nd").unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), b"2nd");

    assert!(temp_leftovers(&dir).is_empty());
}

#[test]
fn destination_without_file_name_is_io_error() {
    let err = write_file(Path::new("/"), b"x").unwrap_err();
    assert!(matches!(err, IcopackError::Io { .. }), "{err}");
}

fn temp_leftovers(dir: &Path) -> Vec<std::fs::DirEntry> {
    std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect()
}

#[test]
fn temp_names_differ_per_call() {
    let dest = Path::new("out").join("icon.ico");
    let a = temp_sibling(&dest).unwrap();
    let b = temp_sibling(&dest).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.parent(), dest.parent());
}

#[test]
fn concurrent_writes_to_same_destination_all_succeed() {
    let dir = scratch_dir("concurrent");
    let dest = dir.join("icon.bin");
    let a = vec![0xAAu8; 1 << 20];
    let b = vec![0x55u8; 1 << 20];

    for _ in 0..20 {
        let (ra, rb) = std::thread::scope(|s| {
            let ha = s.spawn(|| write_file(&dest, &a));
            let hb = s.spawn(|| write_file(&dest, &b));
            (ha.join().unwrap(), hb.join().unwrap())
        });
        ra.unwrap();
        rb.unwrap();

        let got = std::fs::read(&dest).unwrap();
        assert!(got == a || got == b, "destination holds a mix of both writes");
    }
    assert!(temp_leftovers(&dir).is_empty());
}

#[test]
fn failed_rename_is_io_error_and_removes_temp() {
    let dir = scratch_dir("dest_is_dir");
    let dest = dir.join("icon.ico");
    std::fs::create_dir_all(&dest).unwrap();

    let err = write_file(&dest, b"payload").unwrap_err();
    assert!(matches!(err, IcopackError::Io { .. }), "{err}");
    assert!(dest.is_dir());
    assert!(temp_leftovers(&dir).is_empty());
}
