//! Character-level case folding and the overlap-aware substring scanner
//! shared by every directional finder.
//!
//! Patterns here are literal words, not regexes, and the alphabet is small,
//! so a plain scanning loop beats pulling in a regex engine. The scanner
//! reports *every* occurrence, including overlapping ones: searching "AA" in
//! "AAA" yields hits at 0 and 1.

pub(crate) trait FoldedChar {
    /// Single-char uppercase fold. ASCII takes the fast path; a Unicode
    /// letter whose uppercase form is a single char folds to it, anything
    /// else is left untouched so positions stay 1:1 with grid cells.
    fn fold_upper(&self) -> char;

    /// Case-insensitive equality under [`fold_upper`](Self::fold_upper).
    fn eq_fold(&self, other: char) -> bool;
}

impl FoldedChar for char {
    fn fold_upper(&self) -> char {
        if self.is_ascii() {
            return self.to_ascii_uppercase();
        }
        let mut upper = self.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(c), None) => c,
            _ => *self,
        }
    }

    fn eq_fold(&self, other: char) -> bool {
        self.fold_upper() == other.fold_upper()
    }
}

/// Find every (possibly overlapping) case-insensitive occurrence of `needle`
/// in `haystack`, returning the start index of each hit in ascending order.
///
/// An empty needle or a needle longer than the haystack yields no hits.
pub(crate) fn find_overlapping(haystack: &[char], needle: &[char]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    (0..=haystack.len() - needle.len())
        .filter(|&start| {
            needle
                .iter()
                .zip(&haystack[start..])
                .all(|(n, h)| n.eq_fold(*h))
        })
        .collect()
}
