use recon_fs::{Error, NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.json"));

    io::write_atomic(&path, b"{}\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "{}\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.yaml");
    fs::write(&file_path, "a: 1\n").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"a: 2\n").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "a: 2\n");
}

#[test]
fn test_write_atomic_requires_existing_parent() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing").join("test.yaml"));

    let result = io::write_atomic(&path, b"a: 1\n");

    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(!temp.path().join("missing").exists());
}

#[cfg(unix)]
#[test]
fn test_write_atomic_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("secret.yaml");
    fs::write(&file_path, "token: old\n").unwrap();
    fs::set_permissions(&file_path, fs::Permissions::from_mode(0o600)).unwrap();

    io::write_text(&NormalizedPath::new(&file_path), "token: new\n").unwrap();

    let mode = fs::metadata(&file_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_read_bytes_if_exists_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.yaml"));

    assert_eq!(io::read_bytes_if_exists(&path).unwrap(), None);
}

#[test]
fn test_read_bytes_if_exists_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("present.yaml");
    fs::write(&file_path, "hello: world\n").unwrap();

    let content = io::read_bytes_if_exists(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(content.as_deref(), Some(b"hello: world\n".as_slice()));
}

#[test]
fn test_read_bytes_if_exists_keeps_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("latin1.yaml");
    fs::write(&file_path, b"a: \xff\xfe\n").unwrap();

    let content = io::read_bytes_if_exists(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(content, Some(b"a: \xff\xfe\n".to_vec()));
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    assert!(io::read_text(&path).is_err());
}

#[test]
fn test_ensure_parent_dir_creates_when_allowed() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("a").join("b").join("c.json"));

    let created = io::ensure_parent_dir(&path, true).unwrap();

    assert!(created);
    assert!(temp.path().join("a").join("b").is_dir());
}

#[test]
fn test_ensure_parent_dir_existing_parent_is_noop() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("c.json"));

    assert!(!io::ensure_parent_dir(&path, false).unwrap());
}

#[test]
fn test_ensure_parent_dir_refuses_when_disallowed() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("a").join("c.json"));

    let result = io::ensure_parent_dir(&path, false);

    assert!(matches!(result, Err(Error::MissingParent { .. })));
    assert!(!temp.path().join("a").exists());
}
