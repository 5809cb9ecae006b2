use std::fmt;

use serde::Serialize;

/// The closed set of rules the engine reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCode {
    LineLength,
    IvarPublic,
    IvarRegex,
    SemicolonSpace,
    DeclarationOrder,
    EofNewLine,
    Tabs,
    Indent,
    Header,
    IncludeGuard,
}

impl RuleCode {
    pub const ALL: [Self; 10] = [
        Self::LineLength,
        Self::IvarPublic,
        Self::IvarRegex,
        Self::SemicolonSpace,
        Self::DeclarationOrder,
        Self::EofNewLine,
        Self::Tabs,
        Self::Indent,
        Self::Header,
        Self::IncludeGuard,
    ];

    /// Fixed three-letter display tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::LineLength => "LEN",
            Self::IvarPublic => "IVP",
            Self::IvarRegex => "IVR",
            Self::SemicolonSpace => "SEM",
            Self::DeclarationOrder => "DCL",
            Self::EofNewLine => "EOF",
            Self::Tabs => "TAB",
            Self::Indent => "IND",
            Self::Header => "HRD",
            Self::IncludeGuard => "DEF",
        }
    }

    /// Short human-readable name of the rule.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::LineLength => "line length",
            Self::IvarPublic => "public member variable",
            Self::IvarRegex => "member variable naming",
            Self::SemicolonSpace => "space before semicolon",
            Self::DeclarationOrder => "declaration order",
            Self::EofNewLine => "newline at end of file",
            Self::Tabs => "tab characters",
            Self::Indent => "indentation",
            Self::Header => "file header",
            Self::IncludeGuard => "include guard",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.tag() == tag)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
