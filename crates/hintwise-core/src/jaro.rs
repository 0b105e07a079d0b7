//! Jaro and Jaro-Winkler similarity
//!
//! The match search walks the first string from its last character backward
//! and searches each window from its far end backward. With repeated
//! characters this picks different match positions than the textbook forward
//! scan, so results are not interchangeable with other implementations.

use crate::constants::{WINKLER_MAX_PREFIX, WINKLER_PREFIX_SCALE};

/// Jaro similarity in `[0, 1]`.
///
/// Equal strings (including two empty strings) score 1.0; otherwise an empty
/// side scores 0.0.
pub fn jaro(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }

    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Signed: two single-character strings get -1, i.e. an empty window.
    let match_distance = (a.len().max(b.len()) / 2) as isize - 1;

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for i in (0..a.len()).rev() {
        let start = (i as isize - match_distance).max(0) as usize;
        let end = ((i as isize + match_distance + 1).max(0) as usize).min(b.len());

        for j in (start..end).rev() {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let transpositions = matched_chars(&a, &a_matched)
        .zip(matched_chars(&b, &b_matched))
        .filter(|(x, y)| x != y)
        .count()
        / 2;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64) / m) / 3.0
}

/// Matched characters, last to first.
fn matched_chars<'a>(chars: &'a [char], matched: &'a [bool]) -> impl Iterator<Item = char> + 'a {
    chars
        .iter()
        .zip(matched)
        .rev()
        .filter(|(_, m)| **m)
        .map(|(c, _)| *c)
}

/// Length of the common leading run of `s1` and `s2`, capped at 4.
pub fn common_prefix_len(s1: &str, s2: &str) -> usize {
    s1.chars()
        .zip(s2.chars())
        .take_while(|(x, y)| x == y)
        .take(WINKLER_MAX_PREFIX)
        .count()
}

/// Jaro-Winkler similarity: Jaro boosted by up to four shared leading characters.
pub fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    let jaro = jaro(s1, s2);
    let prefix = common_prefix_len(s1, s2) as f64;
    jaro + prefix * WINKLER_PREFIX_SCALE * (1.0 - jaro)
}
