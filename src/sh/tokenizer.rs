use std::ops::Deref;

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Owned, ordered tokens of one input line. `args[0]` is the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSeq(Vec<String>);

impl Deref for TokenSeq {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> FromIterator<&'a str> for TokenSeq {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

pub fn tokenize(line: &str) -> TokenSeq {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let line = "  ls   -la\t/tmp \r\n";
        let tokens = tokenize(line);
        assert_eq!(&*tokens, &["ls", "-la", "/tmp"]);

        let collapsed: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(tokens.join(" "), collapsed.join(" "));
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n\x07").is_empty());
    }

    #[test]
    fn test_tokenize_bell_is_a_delimiter() {
        let tokens = tokenize("echo\x07hi");
        assert_eq!(&*tokens, &["echo", "hi"]);
        assert!(tokens.iter().all(|t| !t.contains(DELIMITERS)));
    }

    #[test]
    fn test_tokenize_keeps_operators_as_tokens() {
        let tokens = tokenize("cat < in.txt | wc -l > out.txt");
        assert_eq!(
            &*tokens,
            &["cat", "<", "in.txt", "|", "wc", "-l", ">", "out.txt"]
        );
    }

    #[test]
    fn test_tokenize_no_quoting() {
        let tokens = tokenize("echo \"hello world\"");
        assert_eq!(&*tokens, &["echo", "\"hello", "world\""]);
    }
}
