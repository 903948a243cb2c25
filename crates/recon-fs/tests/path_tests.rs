use pretty_assertions::assert_eq;
use recon_fs::NormalizedPath;
use rstest::rstest;

#[test]
fn test_backslashes_are_normalized() {
    let path = NormalizedPath::new("conf\\app\\settings.yaml");
    assert_eq!(path.as_str(), "conf/app/settings.yaml");
}

#[rstest]
#[case("/etc/app/settings.yaml", Some("/etc/app"))]
#[case("/settings.yaml", Some("/"))]
#[case("settings.yaml", Some("."))]
#[case("conf/settings.yaml", Some("conf"))]
#[case("", None)]
fn test_parent(#[case] input: &str, #[case] expected: Option<&str>) {
    let parent = NormalizedPath::new(input).parent();
    assert_eq!(parent.as_ref().map(NormalizedPath::as_str), expected);
}

#[rstest]
#[case("/etc/app/settings.yaml", Some("settings.yaml"))]
#[case("settings.yaml", Some("settings.yaml"))]
#[case("/etc/app/", Some("app"))]
#[case("", None)]
fn test_file_name(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).file_name(), expected);
}

#[rstest]
#[case("/etc/app/settings.yaml", "/etc/app/.settings.yaml.tmp")]
#[case("settings.yaml", ".settings.yaml.tmp")]
fn test_sibling(#[case] input: &str, #[case] expected: &str) {
    let path = NormalizedPath::new(input);
    let name = format!(".{}.tmp", path.file_name().unwrap());
    assert_eq!(path.sibling(&name).as_str(), expected);
}

#[test]
fn test_expand_leaves_plain_paths_alone() {
    assert_eq!(
        NormalizedPath::expand("/etc/app.json").as_str(),
        "/etc/app.json"
    );
    assert_eq!(NormalizedPath::expand("~other/x").as_str(), "~other/x");
}

#[test]
fn test_expand_home_prefix() {
    let Some(home) = dirs::home_dir() else {
        eprintln!("Skipping test: no home directory");
        return;
    };
    let home = NormalizedPath::new(home);

    assert_eq!(NormalizedPath::expand("~"), home);
    assert_eq!(
        NormalizedPath::expand("~/.config/app.yaml"),
        home.join(".config/app.yaml")
    );
}
