#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    info = { Category::Info, ">>\x1b[0;36minfo   \x1b[0m:" },
    warning = { Category::Warning, ">>\x1b[38;5;208mwarning\x1b[0m:" },
    alert = { Category::Alert, ">>\x1b[0;31malert  \x1b[0m:" },
    track = { Category::Track, ">>\x1b[0;32mtrack  \x1b[0m:" },
    debug = { Category::Debug, ">>\x1b[0;33mdebug  \x1b[0m:" },
)]
fn prefix_literals_are_exact(category: Category, expected: &str) {
    assert_eq!(category.prefix(), expected);
}

#[parameterized(
    info = { Category::Info, "info" },
    warning = { Category::Warning, "warning" },
    alert = { Category::Alert, "alert" },
    track = { Category::Track, "track" },
    debug = { Category::Debug, "debug" },
)]
fn label_and_display_agree(category: Category, expected: &str) {
    assert_eq!(category.label(), expected);
    assert_eq!(category.to_string(), expected);
}

#[test]
fn stripped_prefixes_align_colons() {
    let escapes = regex::Regex::new("\x1b\\[[0-9;]*m").unwrap();
    for category in [
        Category::Info,
        Category::Warning,
        Category::Alert,
        Category::Track,
        Category::Debug,
    ] {
        let plain = escapes.replace_all(category.prefix(), "");
        assert_eq!(plain, format!(">>{:<7}:", category.label()));
    }
}

#[test]
fn only_track_is_stamped() {
    assert!(Category::Track.stamped());
    assert!(!Category::Info.stamped());
    assert!(!Category::Warning.stamped());
    assert!(!Category::Alert.stamped());
    assert!(!Category::Debug.stamped());
}
