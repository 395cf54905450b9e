// Reads the affix word lists and embeds them as JSON at compile time.

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EmbeddedAffixes {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

/// Which side of the root an affix list belongs to.
#[derive(Clone, Copy)]
enum Side {
    Prefix,
    Suffix,
}

fn main() {
    let data_dir = Path::new("../data");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("affixes.json");

    let prefixes = read_list(&data_dir.join("prefixes.txt"), Side::Prefix);
    let suffixes = read_list(&data_dir.join("suffixes.txt"), Side::Suffix);

    assert!(!prefixes.is_empty(), "data/prefixes.txt has no entries");
    assert!(!suffixes.is_empty(), "data/suffixes.txt has no entries");

    let data = EmbeddedAffixes { prefixes, suffixes };
    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write affixes.json");

    println!("cargo:rerun-if-changed=build.rs");
}

fn read_list(path: &Path, side: Side) -> Vec<String> {
    println!("cargo:rerun-if-changed={}", path.display());
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    parse_list(&content, side)
}

/// Parse one affix per line. Blank lines and `#` comments are skipped, the
/// attachment hyphen is removed and duplicates keep their first position.
fn parse_list(content: &str, side: Side) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let bare = match side {
            Side::Prefix => {
                assert!(
                    !line.starts_with('-'),
                    "line {}: prefix {line:?} is written as a suffix",
                    lineno + 1
                );
                line.trim_end_matches('-')
            }
            Side::Suffix => {
                assert!(
                    !line.ends_with('-'),
                    "line {}: suffix {line:?} is written as a prefix",
                    lineno + 1
                );
                line.trim_start_matches('-')
            }
        };
        let bare = bare.to_lowercase();
        if bare.is_empty() {
            continue;
        }
        if seen.insert(bare.clone()) {
            out.push(bare);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_strips_hyphens() {
        assert_eq!(parse_list("un-\nre-\n", Side::Prefix), vec!["un", "re"]);
        assert_eq!(parse_list("-ful\n-ness\n", Side::Suffix), vec!["ful", "ness"]);
    }

    #[test]
    fn test_parse_list_skips_comments_and_duplicates() {
        let list = "# header\n\n-ly\n-LY\n-ment\n";
        assert_eq!(parse_list(list, Side::Suffix), vec!["ly", "ment"]);
    }
}
