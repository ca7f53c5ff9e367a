use serde::Deserialize;

use crate::api::rest::notice::{Notice, NoticeKind};
use crate::contract::model::PersonInput;
use crate::domain::query::ListQuery;

/// Raw listing query parameters as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    /// Transient notice carried across a redirect.
    pub notice: Option<String>,
    pub kind: Option<String>,
}

impl ListParams {
    pub fn to_query(&self) -> ListQuery {
        ListQuery::from_params(
            self.page.clone(),
            self.search.clone(),
            self.sort_by.clone(),
            self.order.clone(),
        )
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.as_ref().map(|message| Notice {
            kind: NoticeKind::parse(self.kind.as_deref().unwrap_or("")),
            message: message.clone(),
        })
    }
}

/// Form body for the add/edit pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub city: String,
}

impl From<PersonForm> for PersonInput {
    fn from(form: PersonForm) -> Self {
        Self {
            name: form.name,
            age: form.age,
            city: form.city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::{SortField, SortOrder};

    #[test]
    fn params_decode_into_typed_query() {
        let params = ListParams {
            page: Some("3".into()),
            search: Some("reno".into()),
            sort_by: Some("city".into()),
            order: Some("desc".into()),
            notice: None,
            kind: None,
        };
        let q = params.to_query();
        assert_eq!(q.page, 3);
        assert_eq!(q.search, "reno");
        assert_eq!(q.sort_by, SortField::City);
        assert_eq!(q.order, SortOrder::Desc);
    }

    #[test]
    fn notice_requires_message() {
        let params = ListParams {
            kind: Some("success".into()),
            ..Default::default()
        };
        assert!(params.notice().is_none());

        let params = ListParams {
            notice: Some("Done".into()),
            kind: Some("success".into()),
            ..Default::default()
        };
        let n = params.notice().unwrap();
        assert_eq!(n.kind, NoticeKind::Success);
        assert_eq!(n.message, "Done");
    }

    #[test]
    fn form_converts_to_input() {
        let form = PersonForm {
            name: "Alice".into(),
            age: "30".into(),
            city: "Reno".into(),
        };
        let input: PersonInput = form.into();
        assert_eq!(input.name, "Alice");
        assert_eq!(input.age, "30");
        assert_eq!(input.city, "Reno");
    }
}
