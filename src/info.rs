//! Document metadata (`\info` group).

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::encoder::{Encode, Encoder};

/// Title, author and creation time written to the `\info` group.
///
/// Nothing is written unless at least one field is set. Title and author
/// are plain text: `\`, `{` and `}` are escaped on output.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use rtf_writer::{DocumentInfo, Encoder};
///
/// let created = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .and_then(|date| date.and_hms_opt(10, 30, 0))
///     .unwrap();
/// let info = DocumentInfo::new().with_title("Report").with_created(created);
///
/// assert_eq!(
///     Encoder::encode_to_string(&info),
///     "{\\info\n{\\title Report}\n{\\creatim\\yr2024\\mo1\\dy15\\hr10\\min30}\n}\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub created: Option<NaiveDateTime>,
}

impl DocumentInfo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.created.is_none()
    }
}

impl Encode for DocumentInfo {
    fn encode(&self, encoder: &mut Encoder) {
        if self.is_empty() {
            return;
        }
        encoder.push("{\\info\n");
        if let Some(title) = &self.title {
            encoder.push("{\\title ");
            encoder.push_escaped(title);
            encoder.push("}\n");
        }
        if let Some(author) = &self.author {
            encoder.push("{\\author ");
            encoder.push_escaped(author);
            encoder.push("}\n");
        }
        if let Some(created) = &self.created {
            write!(
                encoder,
                "{{\\creatim\\yr{}\\mo{}\\dy{}\\hr{}\\min{}}}\n",
                created.year(),
                created.month(),
                created.day(),
                created.hour(),
                created.minute()
            );
        }
        encoder.push("}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_info_writes_nothing() {
        assert_eq!(Encoder::encode_to_string(&DocumentInfo::new()), "");
    }

    #[test]
    fn test_author_only() {
        let info = DocumentInfo::new().with_author("lambdaviking");
        assert_eq!(
            Encoder::encode_to_string(&info),
            "{\\info\n{\\author lambdaviking}\n}\n"
        );
    }

    #[test]
    fn test_title_escapes_group_characters() {
        let info = DocumentInfo::new()
            .with_title("Q3} \\par {x")
            .with_author("a{b}");
        assert_eq!(
            Encoder::encode_to_string(&info),
            "{\\info\n{\\title Q3\\} \\\\par \\{x}\n{\\author a\\{b\\}}\n}\n"
        );
    }

    #[test]
    fn test_info_from_json() {
        let info: DocumentInfo =
            serde_json::from_str(r#"{"title": "Report", "created": "2024-01-15T10:30:00"}"#)
                .unwrap();
        assert_eq!(info.title.as_deref(), Some("Report"));
        assert_eq!(info.author, None);
        assert_eq!(
            Encoder::encode_to_string(&info),
            "{\\info\n{\\title Report}\n{\\creatim\\yr2024\\mo1\\dy15\\hr10\\min30}\n}\n"
        );
    }
}
