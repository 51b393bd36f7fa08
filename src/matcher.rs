use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// Tag assignments extracted from one filename, in order of first
/// appearance. A tag repeated in the pattern keeps one entry: the last
/// captured value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    fields: Vec<(String, String)>,
}

impl Extraction {
    fn insert(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Matches `filename` against the whole pattern and returns the extracted
/// tags. A placeholder that captured nothing means the filename is missing
/// that piece, which is an error rather than an empty tag value.
pub fn extract(pattern: &Pattern, filename: &str) -> Result<Extraction> {
    let Some(caps) = pattern.regex.captures(filename) else {
        return Err(Error::NoMatch {
            filename: filename.to_string(),
        });
    };

    let mut extraction = Extraction::default();
    for (i, name) in pattern.tags.iter().enumerate() {
        // group 0 is the full match
        let value = caps.get(i + 1).map_or("", |m| m.as_str());
        if value.is_empty() {
            return Err(Error::EmptyAssignment {
                field: name.clone(),
                filename: filename.to_string(),
            });
        }
        extraction.insert(name, value);
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(template: &str) -> Pattern {
        Pattern::compile(template).unwrap()
    }

    #[test]
    fn test_track_title_artist() {
        let pattern = compile("%(track). %(title) - %(artist)");
        let extraction = extract(&pattern, "01. Song Name - The Artist").unwrap();
        assert_eq!(extraction.get("track"), Some("01"));
        assert_eq!(extraction.get("title"), Some("Song Name"));
        assert_eq!(extraction.get("artist"), Some("The Artist"));
        assert_eq!(extraction.len(), 3);
    }

    #[test]
    fn test_empty_capture_is_an_error() {
        let pattern = compile("%(track). %(title) - %(artist)");
        let err = extract(&pattern, "01.  - The Artist").unwrap_err();
        match err {
            Error::EmptyAssignment { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected EmptyAssignment, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        let pattern = compile("%(track). %(title)");
        let err = extract(&pattern, "no separator here").unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
    }

    #[test]
    fn test_literal_only_round_trip() {
        let pattern = compile("exactly this");
        let extraction = extract(&pattern, "exactly this").unwrap();
        assert!(extraction.is_empty());

        let err = extract(&pattern, "exactly thiz").unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
    }

    #[test]
    fn test_match_spans_whole_filename() {
        let pattern = compile("%(title)!");
        // substring occurrences are not enough
        let err = extract(&pattern, "xx song! yy").unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
        let extraction = extract(&pattern, "song!").unwrap();
        assert_eq!(extraction.get("title"), Some("song"));
    }

    #[test]
    fn test_single_tag_captures_everything() {
        let pattern = compile("%(title)");
        let extraction = extract(&pattern, "A - B").unwrap();
        assert_eq!(extraction.get("title"), Some("A - B"));
    }

    #[test]
    fn test_greedy_leftmost_capture() {
        let pattern = compile("%(a)-%(b)");
        let extraction = extract(&pattern, "1-2-3").unwrap();
        assert_eq!(extraction.get("a"), Some("1-2"));
        assert_eq!(extraction.get("b"), Some("3"));
    }

    #[test]
    fn test_duplicate_tag_keeps_last_value() {
        let pattern = compile("%(x) %(x)");
        let extraction = extract(&pattern, "one two").unwrap();
        assert_eq!(extraction.get("x"), Some("two"));
        assert_eq!(extraction.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_first_appearance() {
        let pattern = compile("%(b)/%(a)/%(b)");
        let extraction = extract(&pattern, "1/2/3").unwrap();
        let names: Vec<_> = extraction.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(extraction.get("b"), Some("3"));
    }

    #[test]
    fn test_all_values_non_empty() {
        let pattern = compile("%(a) %(b) %(c)");
        let extraction = extract(&pattern, "x y z").unwrap();
        assert!(extraction.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn test_escaped_percent_matches_literally() {
        let pattern = compile(r"\%(literalpercent)");
        let extraction = extract(&pattern, "%(literalpercent)").unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_matcher_is_reusable() {
        let pattern = compile("%(n). %(t)");
        let first = extract(&pattern, "01. one").unwrap();
        let second = extract(&pattern, "02. two").unwrap();
        assert_eq!(first.get("n"), Some("01"));
        assert_eq!(second.get("n"), Some("02"));
    }
}
