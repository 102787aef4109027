// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[test]
fn exact_pattern_matches_exact_event() {
    let pattern = Pattern::parse("room:join").unwrap();
    assert!(pattern.matches("room:join"));
    assert!(!pattern.matches("room:leave"));
    assert!(!pattern.matches("room:join:late"));
    assert!(!pattern.is_wildcard());
}

#[test]
fn exact_pattern_is_case_sensitive() {
    let pattern = Pattern::parse("Boot").unwrap();
    assert!(pattern.matches("Boot"));
    assert!(!pattern.matches("boot"));
}

#[parameterized(
    middle_segment = { "room:*:join", "room:42:join", true },
    missing_tail = { "room:*:join", "room:42", false },
    empty_run = { "room:*:join", "room::join", true },
    spans_separators = { "room:*:join", "room:a:b:join", true },
    trailing = { "user:*", "user:7", true },
    trailing_empty = { "user:*", "user:", true },
    leading = { "*:ready", "ws:ready", true },
    leading_mismatch = { "*:ready", "ws:ready:now", false },
    bare_star = { "*", "anything at all", true },
    bare_star_empty = { "*", "", true },
    double_star = { "a**b", "ab", true },
    anchored_start = { "oom:*", "room:1", false },
    anchored_end = { "room:*:joi", "room:1:join", false },
)]
fn wildcard_matching(pattern: &str, name: &str, expected: bool) {
    let compiled = Pattern::parse(pattern).unwrap();
    assert!(compiled.is_wildcard());
    assert_eq!(compiled.matches(name), expected, "{} vs {}", pattern, name);
}

#[parameterized(
    dot = { "v1.*", "v1.2", "v1x2" },
    plus = { "a+*", "a+b", "aab" },
    question = { "who?*", "who?me", "whome" },
    parens = { "(x)*", "(x)y", "xy" },
    brackets = { "[ab]*", "[ab]c", "ac" },
    caret_dollar = { "^$*", "^$!", "!" },
    pipe = { "a|b*", "a|bc", "bc" },
    backslash = { "a\\*", "a\\z", "az" },
    braces = { "x{2}*", "x{2}y", "xxy" },
)]
fn regex_metacharacters_are_literal(pattern: &str, literal_name: &str, regex_name: &str) {
    let compiled = Pattern::parse(pattern).unwrap();
    assert!(compiled.matches(literal_name));
    assert!(!compiled.matches(regex_name));
}

#[test]
fn wildcard_matches_embedded_newlines() {
    assert!(matches("log:line\nbreak", "log:*"));
}

#[test]
fn free_function_agrees_with_compiled_pattern() {
    assert!(matches("room:42:join", "room:*:join"));
    assert!(!matches("room:42", "room:*:join"));
    assert!(matches("boot", "boot"));
    assert!(!matches("boot", "Boot"));
}

#[test]
fn long_wildcard_runs_compile_and_match() {
    let stars = Pattern::parse(&"*".repeat(2000)).unwrap();
    assert!(stars.matches(""));
    assert!(stars.matches("room:42:join"));

    let segmented = "seg:*".repeat(1000);
    let compiled = Pattern::parse(&segmented).unwrap();
    assert!(compiled.matches(&"seg:x".repeat(1000)));
    assert!(compiled.matches(&"seg:".repeat(1000)));
    assert!(!compiled.matches(&"seg:x".repeat(999)));
    assert!(matches(&"seg:ab".repeat(1000), &segmented));
}

#[parameterized(
    overlapping_ends = { "ab*ba", "aba", false },
    ends_meet = { "ab*ba", "abba", true },
    middle_in_order = { "a*b*c", "xaxbxc", false },
    middle_found = { "a*b*c", "axbxc", true },
    middle_out_of_order = { "a*c*b*d", "abcd", false },
    middle_repeated = { "*ab*ab*", "abab", true },
    middle_once = { "*ab*ab*", "aab", false },
    multibyte = { "caf*\u{e9}", "caf\u{e9}", true },
)]
fn glob_edge_cases(pattern: &str, name: &str, expected: bool) {
    assert_eq!(matches(name, pattern), expected, "{} vs {}", pattern, name);
}

#[test]
fn display_and_equality_use_source_text() {
    let a = Pattern::parse("room:*").unwrap();
    let b = Pattern::parse("room:*").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "room:*");
    assert_eq!(a.as_str(), "room:*");
}

proptest! {
    #[test]
    fn literal_patterns_are_equality(name in "[a-z:.]{0,12}", pattern in "[a-z:.]{0,12}") {
        prop_assert_eq!(matches(&name, &pattern), name == pattern);
    }

    #[test]
    fn wildcard_accepts_any_fill(prefix in "[a-z:.]{0,6}", fill in "[a-z:.*]{0,6}", suffix in "[a-z:.]{0,6}") {
        let pattern = format!("{}*{}", prefix, suffix);
        let name = format!("{}{}{}", prefix, fill, suffix);
        prop_assert!(matches(&name, &pattern));
    }

    #[test]
    fn wildcard_requires_prefix(prefix in "[a-z]{1,6}", rest in "[a-z]{0,6}") {
        let pattern = format!("{}*", prefix);
        let name = format!("#{}", rest);
        prop_assert!(!matches(&name, &pattern));
    }
}
