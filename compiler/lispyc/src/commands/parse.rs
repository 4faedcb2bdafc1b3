//! The `parse` command: show the concrete syntax tree the reader sees.

use lispy_parse::ParseError;

use super::read_file;

/// Parse a file and print its syntax tree, or the parse error.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    match render_tree(path, &content) {
        Ok(tree) => print!("{tree}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// The indented outline of `source`'s syntax tree.
pub fn render_tree(source_name: &str, source: &str) -> Result<String, ParseError> {
    let tree = lispy_parse::parse_named(source_name, source)?;
    let mut text = tree.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
