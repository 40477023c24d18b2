//! Identifier conversion for generated class and property names.
//!
//! Raw database identifiers are split into tokens of word characters and
//! each token is capitalized:
//!
//! | Input | retain underscores | Output |
//! |-------|--------------------|--------|
//! | `user_name` | no | `UserName` |
//! | `user_name` | yes | `User_name` |
//! | `order details` | no | `OrderDetails` |
//! | `createdAt` | no | `CreatedAt` |

/// Converts raw identifiers into PascalCase-like identifiers.
///
/// The only setting, whether `_` counts as a word character, is fixed at
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameConverter {
    retain_underscores: bool,
}

impl NameConverter {
    /// Create a converter.
    ///
    /// With `retain_underscores` false, `_` separates tokens and is dropped.
    /// With it true, `_` is kept inside tokens.
    pub fn new(retain_underscores: bool) -> Self {
        Self { retain_underscores }
    }

    /// Whether underscores are kept as word characters.
    pub fn retains_underscores(&self) -> bool {
        self.retain_underscores
    }

    /// Convert a raw identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use pocogen_core::NameConverter;
    ///
    /// assert_eq!(NameConverter::new(false).convert("foo_bar"), "FooBar");
    /// assert_eq!(NameConverter::new(true).convert("foo_bar"), "Foo_bar");
    /// assert_eq!(NameConverter::new(false).convert("123abc"), "123abc");
    /// ```
    pub fn convert(&self, raw: &str) -> String {
        raw.split(|c: char| !self.is_word_char(c))
            .filter(|token| !token.is_empty())
            .map(capitalize)
            .collect()
    }

    fn is_word_char(&self, c: char) -> bool {
        c.is_alphanumeric() || (self.retain_underscores && c == '_')
    }
}

/// Capitalize the first character of a string, leaving the rest unchanged.
///
/// # Examples
///
/// ```
/// use pocogen_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("helloWorld"), "HelloWorld");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
