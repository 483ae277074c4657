//! Bind parameter styles

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The placeholder convention a driver expects for positional parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindStyle {
    /// PostgreSQL style: `$1`, `$2`, ...
    #[default]
    Dollar,
    /// MySQL and SQLite style: a bare `?` for every parameter
    Question,
}

impl BindStyle {
    /// Render the placeholder for the 1-based `position`.
    ///
    /// `Question` ignores the position but the caller still supplies
    /// parameters in the same order.
    ///
    /// # Examples
    /// ```
    /// use tabula_core::BindStyle;
    ///
    /// assert_eq!(BindStyle::Dollar.placeholder(3), "$3");
    /// assert_eq!(BindStyle::Question.placeholder(3), "?");
    /// ```
    pub fn placeholder(&self, position: usize) -> String {
        match self {
            BindStyle::Dollar => format!("${}", position),
            BindStyle::Question => "?".to_string(),
        }
    }

    /// Get the configuration name of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            BindStyle::Dollar => "dollar",
            BindStyle::Question => "question",
        }
    }
}

impl Display for BindStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accept the style names plus the driver names people tend to write
impl FromStr for BindStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dollar" | "$" | "postgres" | "postgresql" => Ok(BindStyle::Dollar),
            "question" | "?" | "mysql" | "sqlite" => Ok(BindStyle::Question),
            _ => Err(Error::unknown_bind_style(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_placeholders() {
        assert_eq!(BindStyle::Dollar.placeholder(1), "$1");
        assert_eq!(BindStyle::Dollar.placeholder(12), "$12");
    }

    #[test]
    fn test_question_placeholders() {
        assert_eq!(BindStyle::Question.placeholder(1), "?");
        assert_eq!(BindStyle::Question.placeholder(12), "?");
    }

    #[test]
    fn test_default_is_dollar() {
        assert_eq!(BindStyle::default(), BindStyle::Dollar);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BindStyle::Dollar), "dollar");
        assert_eq!(format!("{}", BindStyle::Question), "question");
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("dollar".parse::<BindStyle>().unwrap(), BindStyle::Dollar);
        assert_eq!("$".parse::<BindStyle>().unwrap(), BindStyle::Dollar);
        assert_eq!("Postgres".parse::<BindStyle>().unwrap(), BindStyle::Dollar);
        assert_eq!("QUESTION".parse::<BindStyle>().unwrap(), BindStyle::Question);
        assert_eq!(" sqlite ".parse::<BindStyle>().unwrap(), BindStyle::Question);
    }

    #[test]
    fn test_invalid_string_conversion() {
        let err = "colon".parse::<BindStyle>().unwrap_err();
        assert_eq!(err, Error::unknown_bind_style("colon"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&BindStyle::Question).unwrap();
        assert_eq!(json, "\"question\"");
        let style: BindStyle = serde_json::from_str("\"dollar\"").unwrap();
        assert_eq!(style, BindStyle::Dollar);
    }
}
