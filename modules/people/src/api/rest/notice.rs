//! Transient operation notices, passed as explicit values rather than
//! session state. Redirects carry them in the target's query string.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Danger,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Danger => "danger",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "success" => Self::Success,
            "danger" => Self::Danger,
            _ => Self::Info,
        }
    }
}

/// Outcome notice shown to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Danger,
            message: message.into(),
        }
    }

    /// Query-string form used when carrying the notice across a redirect.
    pub fn to_query(&self) -> String {
        format!(
            "notice={}&kind={}",
            urlencoding::encode(&self.message),
            self.kind.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_message_for_redirect() {
        let n = Notice::success("Person added successfully!");
        assert_eq!(
            n.to_query(),
            "notice=Person%20added%20successfully%21&kind=success"
        );
    }

    #[test]
    fn unknown_kind_parses_as_info() {
        assert_eq!(NoticeKind::parse("success"), NoticeKind::Success);
        assert_eq!(NoticeKind::parse("danger"), NoticeKind::Danger);
        assert_eq!(NoticeKind::parse("warning"), NoticeKind::Info);
        assert_eq!(NoticeKind::parse(""), NoticeKind::Info);
    }
}
