//! Game tag domain types.

use std::fmt;

use serde::Serialize;

/// Category of a game tag. Each kind has its own table and join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Genre,
    Theme,
    Platform,
    Developer,
    Publisher,
}

impl TagKind {
    pub const ALL: [TagKind; 5] = [
        Self::Genre,
        Self::Theme,
        Self::Platform,
        Self::Developer,
        Self::Publisher,
    ];

    /// Plural form used as the collection path segment and JSON field name.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Genre => "genres",
            Self::Theme => "themes",
            Self::Platform => "platforms",
            Self::Developer => "developers",
            Self::Publisher => "publishers",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Genre => "genre",
            Self::Theme => "theme",
            Self::Platform => "platform",
            Self::Developer => "developer",
            Self::Publisher => "publisher",
        };
        f.write_str(s)
    }
}

/// A named category attachable to games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Interpret the `assigned_only` query flag.
///
/// Presence is what counts: any non-empty value enables the filter, so
/// `assigned_only=0` and `assigned_only=false` enable it too.
pub fn is_truthy_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_tag_as_its_name() {
        for name in ["Adventure", "Android", "Playdead", "Devolver Digital"] {
            let tag = Tag {
                id: 1,
                name: name.to_owned(),
            };
            assert_eq!(tag.to_string(), tag.name);
        }
    }

    #[test]
    fn should_treat_assigned_only_values() {
        assert!(!is_truthy_flag(None));
        assert!(!is_truthy_flag(Some("")));
        assert!(is_truthy_flag(Some("0")));
        assert!(is_truthy_flag(Some("false")));
        assert!(is_truthy_flag(Some("1")));
        assert!(is_truthy_flag(Some("true")));
        assert!(is_truthy_flag(Some("yes")));
    }
}
