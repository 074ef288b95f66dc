use include_dir::{include_dir, Dir};

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Names of the word lists shipped with the binary, sorted.
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = ASSETS_DIR
        .files()
        .filter(|file| file.path().extension().is_some_and(|ext| ext == "txt"))
        .filter_map(|file| file.path().file_stem()?.to_str().map(String::from))
        .collect();
    names.sort();
    names
}

/// Text of a bundled list, or `None` if there is no such list.
pub fn get(name: &str) -> Option<&'static str> {
    ASSETS_DIR
        .get_file(format!("{name}.txt"))
        .and_then(|file| file.contents_utf8())
}
