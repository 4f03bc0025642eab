//! Argument parsing for prefix commands.
//!
//! A single-token argument is one whitespace-delimited word or a double-quoted
//! string. A rest-of-line argument takes whatever follows, trimmed. Extra
//! arguments to single-token commands are ignored.

/// A recognised command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { lang: String, query: String },
    GitSearch { query: String },
    GitUser { username: String },
    Ask { question: String },
    Help,
    About,
}

impl Command {
    /// Command name as typed after the prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::GitSearch { .. } => "gitsearch",
            Command::GitUser { .. } => "gituser",
            Command::Ask { .. } => "ask",
            Command::Help => "help",
            Command::About => "about",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Command(Command),
    /// Known command, required argument missing. Holds the command name.
    MissingArgs(&'static str),
    Unknown,
}

/// Parse the text that follows the command prefix.
pub fn parse_command(body: &str) -> Parsed {
    let body = body.trim_start();
    let (name, rest) = match body.find(char::is_whitespace) {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => (body, ""),
    };

    match name {
        "search" => match first_arg(rest) {
            Some((lang, tail)) if !tail.trim().is_empty() => Parsed::Command(Command::Search {
                lang,
                query: tail.trim().to_string(),
            }),
            _ => Parsed::MissingArgs("search"),
        },
        "gitsearch" => match rest_arg(rest) {
            Some(query) => Parsed::Command(Command::GitSearch { query }),
            None => Parsed::MissingArgs("gitsearch"),
        },
        "gituser" => match first_arg(rest) {
            Some((username, _)) => Parsed::Command(Command::GitUser { username }),
            None => Parsed::MissingArgs("gituser"),
        },
        "ask" => match rest_arg(rest) {
            Some(question) => Parsed::Command(Command::Ask { question }),
            None => Parsed::MissingArgs("ask"),
        },
        "help" => Parsed::Command(Command::Help),
        "about" => Parsed::Command(Command::About),
        _ => Parsed::Unknown,
    }
}

/// Take one token (quoted or bare) from the front of `input`.
/// Returns the token and the unconsumed remainder.
fn first_arg(input: &str) -> Option<(String, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    if let Some(quoted) = input.strip_prefix('"')
        && let Some(end) = quoted.find('"')
    {
        return Some((quoted[..end].to_string(), &quoted[end + 1..]));
    }

    // Bare word; an unclosed quote is kept as part of the word.
    match input.find(char::is_whitespace) {
        Some(idx) => Some((input[..idx].to_string(), &input[idx..])),
        None => Some((input.to_string(), "")),
    }
}

fn rest_arg(input: &str) -> Option<String> {
    let rest = input.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(body: &str) -> Command {
        match parse_command(body) {
            Parsed::Command(c) => c,
            other => panic!("expected command for {:?}, got {:?}", body, other),
        }
    }

    #[test]
    fn search_splits_lang_and_rest() {
        assert_eq!(
            command("search python   list comprehension "),
            Command::Search {
                lang: "python".to_string(),
                query: "list comprehension".to_string(),
            }
        );
    }

    #[test]
    fn quoted_first_argument() {
        assert_eq!(
            command(r#"search "c++" std::vector push_back"#),
            Command::Search {
                lang: "c++".to_string(),
                query: "std::vector push_back".to_string(),
            }
        );
    }

    #[test]
    fn rest_of_line_keeps_inner_quotes() {
        assert_eq!(
            command(r#"ask what does "yield" do?"#),
            Command::Ask {
                question: r#"what does "yield" do?"#.to_string(),
            }
        );
    }

    #[test]
    fn gituser_ignores_extra_words() {
        assert_eq!(
            command("gituser octocat please"),
            Command::GitUser {
                username: "octocat".to_string(),
            }
        );
    }

    #[test]
    fn unclosed_quote_is_a_bare_word() {
        assert_eq!(
            command(r#"gituser "octocat"#),
            Command::GitUser {
                username: r#""octocat"#.to_string(),
            }
        );
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(parse_command("search python"), Parsed::MissingArgs("search"));
        assert_eq!(parse_command("search"), Parsed::MissingArgs("search"));
        assert_eq!(parse_command("gitsearch   "), Parsed::MissingArgs("gitsearch"));
        assert_eq!(parse_command("gituser"), Parsed::MissingArgs("gituser"));
        assert_eq!(parse_command("ask"), Parsed::MissingArgs("ask"));
    }

    #[test]
    fn no_argument_commands_ignore_trailing_text() {
        assert_eq!(command("help me"), Command::Help);
        assert_eq!(command("about"), Command::About);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(parse_command("Help"), Parsed::Unknown);
        assert_eq!(parse_command("SEARCH python x"), Parsed::Unknown);
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(parse_command("india"), Parsed::Unknown);
        assert_eq!(parse_command(""), Parsed::Unknown);
    }

    #[test]
    fn newline_separates_name() {
        assert_eq!(
            command("gitsearch\nweb framework"),
            Command::GitSearch {
                query: "web framework".to_string(),
            }
        );
    }
}
