/// Punctuation treated as a word boundary, on top of whitespace.
/// Dictionary keys are cut with this exact set.
const PUNCTUATION: &[char] = &[
    '|', '/', '\\', '(', ')', '{', '}', '[', ']', '<', '>', '@', '#', '$', '%', '^', '&', '*',
    '+', '-', '~', ':', ';', '"', '?', '!', ',', '.',
];

pub fn is_delimiter(c: char) -> bool {
    // Web page whitespace: BOM is in, NEL is not
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}' || PUNCTUATION.contains(&c)
}

/// A word found around an offset. All offsets count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub word: String,
    /// First char of the delimiter-free run, inclusive
    pub left: usize,
    /// Last char of the delimiter-free run, inclusive
    pub right: usize,
    /// Offset of the first char of `word`, past a stripped apostrophe
    pub start: usize,
}

impl WordSpan {
    /// Exclusive end offset of `word`
    pub fn end(&self) -> usize {
        self.start + self.word.chars().count()
    }
}

/// Expand `offset` to the surrounding run of non-delimiter chars, then drop
/// one enclosing apostrophe on each side.
pub fn resolve(text: &str, offset: usize) -> Option<WordSpan> {
    let chars: Vec<char> = text.chars().collect();
    let at = *chars.get(offset)?;

    if is_delimiter(at) {
        return None;
    }

    let (left, right) = expand_run(&chars, offset);

    let mut run = &chars[left..=right];
    let mut start = left;

    if run.first() == Some(&'\'') {
        run = &run[1..];
        start += 1;
    }

    if run.last() == Some(&'\'') {
        run = &run[..run.len() - 1];
    }

    if run.iter().all(|c| *c == '\'') {
        return None;
    }

    Some(WordSpan {
        word: run.iter().collect(),
        left,
        right,
        start,
    })
}

fn expand_run(chars: &[char], index: usize) -> (usize, usize) {
    let mut left = index;
    let mut right = index;

    while left > 0 && !is_delimiter(chars[left - 1]) {
        left -= 1;
    }

    while right + 1 < chars.len() && !is_delimiter(chars[right + 1]) {
        right += 1;
    }

    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_word_in_sentence() {
        let span = resolve("de kat loopt", 4).unwrap();
        assert_eq!(span.word, "kat");
        assert_eq!((span.left, span.right, span.start, span.end()), (3, 5, 3, 6));
    }

    #[test]
    fn test_delimiter_at_offset() {
        assert_eq!(resolve("de kat", 2), None);
        assert_eq!(resolve("(kat)", 0), None);
        assert_eq!(resolve("a-b", 1), None);
        assert_eq!(resolve("kat", 3), None);
        assert_eq!(resolve("", 0), None);
    }

    #[test]
    fn test_punctuation_ends_words() {
        assert_eq!(resolve("zie: huis, tuin.", 6).unwrap().word, "huis");
        assert_eq!(resolve("[boom]", 3).unwrap().word, "boom");
        assert_eq!(resolve("e-mail", 0).unwrap().word, "e");
        assert_eq!(resolve("\"citaat\"", 1).unwrap().word, "citaat");
    }

    #[test]
    fn test_strips_enclosing_apostrophes() {
        let span = resolve("'word'", 2).unwrap();
        assert_eq!(span.word, "word");
        assert_eq!((span.left, span.right, span.start), (0, 5, 1));

        assert_eq!(resolve("z'n fiets", 0).unwrap().word, "z'n");
        assert_eq!(resolve("opa's huis", 1).unwrap().word, "opa's");
        assert_eq!(resolve("auto'", 0).unwrap().word, "auto");
    }

    #[test]
    fn test_all_apostrophes_is_absent() {
        assert_eq!(resolve("'", 0), None);
        assert_eq!(resolve("a '' b", 2), None);
        assert_eq!(resolve("'''", 1), None);
    }

    #[test]
    fn test_non_ascii_word_characters() {
        let span = resolve("een café tegenover", 6).unwrap();
        assert_eq!(span.word, "café");
        assert_eq!(span.end(), 8);

        assert_eq!(resolve("ijsje\u{00a0}eten", 2).unwrap().word, "ijsje");
        assert_eq!(resolve("\u{feff}reeën", 3).unwrap().word, "reeën");
    }

    #[test]
    fn test_next_line_char_is_part_of_word() {
        assert!(!is_delimiter('\u{85}'));
        assert_eq!(resolve("a\u{85}b c", 0).unwrap().word, "a\u{85}b");
        assert_eq!(resolve("a\u{85}b c", 1).unwrap().word, "a\u{85}b");
    }

    #[test]
    fn test_every_offset_yields_maximal_run() {
        let text = "Het 'huis' (groot), z'n tuin-deur; café!";
        let chars: Vec<char> = text.chars().collect();

        for (i, c) in chars.iter().enumerate() {
            let span = resolve(text, i);

            if is_delimiter(*c) {
                assert_eq!(span, None, "offset {i}");
                continue;
            }

            let Some(span) = span else {
                assert!(chars[i] == '\'', "offset {i} should resolve");
                continue;
            };

            assert!(span.left <= i && i <= span.right);
            assert!(chars[span.left..=span.right].iter().all(|c| !is_delimiter(*c)));
            assert!(span.left == 0 || is_delimiter(chars[span.left - 1]));
            assert!(span.right + 1 == chars.len() || is_delimiter(chars[span.right + 1]));
        }
    }
}
