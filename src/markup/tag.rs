//! Body element classification.

use std::fmt;

/// Container element holding a license body.
pub const BODY_TAG: &str = "text";

/// Container element holding license notes.
pub const NOTES_TAG: &str = "notes";

/// A recognized element inside a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Paragraph,
    Bullet,
    List,
    Item,
    Optional,
    Alt,
    Br,
    TitleText,
    CopyrightText,
    StandardLicenseHeader,
}

impl Tag {
    pub const ALL: [Tag; 10] = [
        Tag::Paragraph,
        Tag::Bullet,
        Tag::List,
        Tag::Item,
        Tag::Optional,
        Tag::Alt,
        Tag::Br,
        Tag::TitleText,
        Tag::CopyrightText,
        Tag::StandardLicenseHeader,
    ];

    /// Look up an element name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "p" => Some(Tag::Paragraph),
            "bullet" => Some(Tag::Bullet),
            "list" => Some(Tag::List),
            "item" => Some(Tag::Item),
            "optional" => Some(Tag::Optional),
            "alt" => Some(Tag::Alt),
            "br" => Some(Tag::Br),
            "titleText" => Some(Tag::TitleText),
            "copyrightText" => Some(Tag::CopyrightText),
            "standardLicenseHeader" => Some(Tag::StandardLicenseHeader),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Paragraph => "p",
            Tag::Bullet => "bullet",
            Tag::List => "list",
            Tag::Item => "item",
            Tag::Optional => "optional",
            Tag::Alt => "alt",
            Tag::Br => "br",
            Tag::TitleText => "titleText",
            Tag::CopyrightText => "copyrightText",
            Tag::StandardLicenseHeader => "standardLicenseHeader",
        }
    }

    /// Attribute names this element accepts.
    pub fn attributes(self) -> &'static [&'static str] {
        match self {
            Tag::Bullet | Tag::Optional => &["spacing"],
            Tag::Alt => &["name", "match", "spacing"],
            Tag::Paragraph
            | Tag::List
            | Tag::Item
            | Tag::Br
            | Tag::TitleText
            | Tag::CopyrightText
            | Tag::StandardLicenseHeader => &[],
        }
    }

    pub fn accepts_attribute(self, name: &str) -> bool {
        self.attributes().contains(&name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
