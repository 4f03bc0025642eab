//! Documentation lookup: language tag + query -> documentation search URL.
//!
//! Only the tags in [`DocLanguage`] resolve. [`CATALOG`] lists documentation
//! sites for a wider set of languages and frameworks, but those entries are
//! reference data and are never turned into links.

/// Reply for any language tag without a resolver. Never starts with `http`.
pub const UNSUPPORTED_MESSAGE: &str = " Unsupported language. Try `python` or `javascript`.";

/// Languages that actually resolve to a documentation URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocLanguage {
    Python,
    JavaScript,
}

impl DocLanguage {
    /// Parse a case-folded tag. `js` is an alias for JavaScript.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "python" => Some(DocLanguage::Python),
            "js" | "javascript" => Some(DocLanguage::JavaScript),
            _ => None,
        }
    }

    /// URL prefix the encoded query is appended to.
    pub fn base_url(self) -> &'static str {
        match self {
            // DevDocs has no search endpoint; the query becomes a page path.
            DocLanguage::Python => "https://devdocs.io/python~3/",
            DocLanguage::JavaScript => "https://developer.mozilla.org/en-US/search?q=",
        }
    }
}

/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLink {
    Url(String),
    Unsupported,
}

/// Documentation search endpoints by tag. Broader than [`DocLanguage`].
pub const CATALOG: &[(&str, &str)] = &[
    ("python", "https://devdocs.io/python~3/"),
    ("javascript", "https://developer.mozilla.org/en-US/search?q="),
    ("java", "https://docs.oracle.com/javase/8/docs/api/index.html?search="),
    ("c++", "https://en.cppreference.com/mwiki/index.php?search="),
    ("c", "https://en.cppreference.com/mwiki/index.php?search="),
    ("go", "https://pkg.go.dev/search?q="),
    ("ruby", "https://ruby-doc.org/search.html?q="),
    ("php", "https://www.php.net/manual-lookup.php?pattern="),
    ("rust", "https://doc.rust-lang.org/std/?search="),
    ("kotlin", "https://kotlinlang.org/docs/home.html#search"),
    ("react", "https://react.dev/search?q="),
    ("vue", "https://vuejs.org/search?q="),
    ("angular", "https://angular.io/search?q="),
    ("svelte", "https://svelte.dev/search?q="),
    ("flask", "https://flask.palletsprojects.com/en/latest/search/?q="),
    ("django", "https://docs.djangoproject.com/en/stable/search/?q="),
    ("express", "https://expressjs.com/en/api.html#search="),
    ("pandas", "https://pandas.pydata.org/docs/search.html?q="),
    ("numpy", "https://numpy.org/search/?q="),
    ("scikit-learn", "https://scikit-learn.org/stable/search.html?q="),
    ("tensorflow", "https://www.tensorflow.org/search?query="),
    ("pytorch", "https://pytorch.org/search/?q="),
];

/// Replace each whitespace character of the trimmed query with `+`.
pub fn encode_query(query: &str) -> String {
    query
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect()
}

/// Resolve a language tag and query to a documentation link.
pub fn lookup(language: &str, query: &str) -> DocLink {
    let tag = language.to_lowercase();
    match DocLanguage::from_tag(&tag) {
        Some(lang) => DocLink::Url(format!("{}{}", lang.base_url(), encode_query(query))),
        None => {
            if CATALOG.iter().any(|(name, _)| *name == tag) {
                log::debug!("docs: '{}' is catalogued but has no resolver", tag);
            }
            DocLink::Unsupported
        }
    }
}

/// String form of [`lookup`]: a URL, or [`UNSUPPORTED_MESSAGE`].
/// Tell the two apart with [`is_doc_url`].
pub fn search_docs(language: &str, query: &str) -> String {
    match lookup(language, query) {
        DocLink::Url(url) => url,
        DocLink::Unsupported => UNSUPPORTED_MESSAGE.to_string(),
    }
}

/// True when a [`search_docs`] reply is a link rather than the unsupported message.
pub fn is_doc_url(reply: &str) -> bool {
    reply.starts_with("http")
}
