//! Server-rendered HTML pages, built inline with `format!`. Presentation
//! only: every page takes already-fetched data plus an optional notice.

use crate::api::rest::dto::PersonForm;
use crate::api::rest::notice::Notice;
use crate::contract::model::{Person, PersonPage};
use crate::domain::query::{ListQuery, SortField, SortOrder};

/// Escape text for safe interpolation into HTML element and attribute
/// context.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
    body { font-family: sans-serif; margin: 2em auto; max-width: 60em; padding: 0 1em; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ccc; padding: 0.4em 0.6em; text-align: left; }
    th a { text-decoration: none; color: inherit; }
    .notice { padding: 0.6em 1em; border-radius: 4px; margin-bottom: 1em; }
    .notice-success { background: #e6f4e6; color: #1d643b; }
    .notice-info { background: #e8f0fe; color: #1a4480; }
    .notice-danger { background: #fdeaea; color: #a12622; }
    .toolbar { margin-bottom: 1em; }
    .pagination { margin-top: 1em; }
    .pagination .current { font-weight: bold; }
    form.record label { display: block; margin-top: 0.8em; }
"#;

fn layout(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let notice_html = notice
        .map(|n| {
            format!(
                r#"<p class="notice notice-{}">{}</p>"#,
                n.kind.as_str(),
                escape_html(&n.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>{title} - People Management System</title>
  <style>{STYLE}</style>
</head>
<body>
  <h1><a href="/">People Management System</a></h1>
{notice_html}
{body}
</body>
</html>"#
    )
}

/// Href for the listing with the given page, keeping the rest of `query`.
fn listing_href(query: &ListQuery, page: u64, sort_by: SortField, order: SortOrder) -> String {
    let mut qs = format!(
        "page={page}&sort_by={}&order={}",
        sort_by.as_str(),
        order.as_str()
    );
    if !query.search.is_empty() {
        qs.push_str("&search=");
        qs.push_str(&urlencoding::encode(&query.search));
    }
    format!("/?{qs}")
}

/// Column header link: clicking an already-sorted column toggles the
/// direction, any other column starts ascending.
fn sort_header(query: &ListQuery, field: SortField, label: &str) -> String {
    let (order, marker) = if query.sort_by == field {
        let marker = match query.order {
            SortOrder::Asc => " &#9650;",
            SortOrder::Desc => " &#9660;",
        };
        (query.order.toggled(), marker)
    } else {
        (SortOrder::Asc, "")
    };
    format!(
        r#"<th><a href="{}">{label}{marker}</a></th>"#,
        listing_href(query, 1, field, order)
    )
}

fn person_row(p: &Person) -> String {
    let updated = p
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        r#"      <tr>
        <td>{name}</td>
        <td>{age}</td>
        <td>{city}</td>
        <td>{created}</td>
        <td>{updated}</td>
        <td><a href="/edit/{id}">Edit</a> <a href="/delete/{id}">Delete</a></td>
      </tr>"#,
        name = escape_html(&p.name),
        age = p.age,
        city = escape_html(&p.city),
        created = p.created_at.format("%Y-%m-%d %H:%M"),
        id = p.id,
    )
}

fn pagination_nav(page: &PersonPage, query: &ListQuery) -> String {
    if page.total_pages == 0 {
        return String::new();
    }

    let mut links = Vec::new();
    if page.current_page > 1 {
        links.push(format!(
            r#"<a href="{}">Previous</a>"#,
            listing_href(query, page.current_page - 1, query.sort_by, query.order)
        ));
    }
    for n in 1..=page.total_pages {
        if n == page.current_page {
            links.push(format!(r#"<span class="current">{n}</span>"#));
        } else {
            links.push(format!(
                r#"<a href="{}">{n}</a>"#,
                listing_href(query, n, query.sort_by, query.order)
            ));
        }
    }
    if page.current_page < page.total_pages {
        links.push(format!(
            r#"<a href="{}">Next</a>"#,
            listing_href(query, page.current_page + 1, query.sort_by, query.order)
        ));
    }

    format!(
        r#"  <nav class="pagination">{} <span class="page-info">Page {} of {}</span></nav>"#,
        links.join(" "),
        page.current_page,
        page.total_pages
    )
}

pub fn listing(page: &PersonPage, query: &ListQuery, notice: Option<Notice>) -> String {
    let toolbar = format!(
        r#"  <div class="toolbar">
    <a href="/add">Add Person</a>
    <form method="get" action="/">
      <input type="text" name="search" value="{search}" placeholder="Search name or city"/>
      <input type="hidden" name="sort_by" value="{sort_by}"/>
      <input type="hidden" name="order" value="{order}"/>
      <button type="submit">Search</button>
    </form>
  </div>"#,
        search = escape_html(&query.search),
        sort_by = query.sort_by.as_str(),
        order = query.order.as_str(),
    );

    let table = if page.items.is_empty() {
        r#"  <p class="empty">No people found.</p>"#.to_string()
    } else {
        let rows: Vec<String> = page.items.iter().map(person_row).collect();
        format!(
            r#"  <table>
    <thead>
      <tr>
        {name}
        {age}
        {city}
        <th>Created</th>
        <th>Updated</th>
        <th>Actions</th>
      </tr>
    </thead>
    <tbody>
{rows}
    </tbody>
  </table>"#,
            name = sort_header(query, SortField::Name, "Name"),
            age = sort_header(query, SortField::Age, "Age"),
            city = sort_header(query, SortField::City, "City"),
            rows = rows.join("\n"),
        )
    };

    let body = format!("{toolbar}\n{table}\n{}", pagination_nav(page, query));
    layout("People", notice.as_ref(), &body)
}

fn record_form(action: &str, name: &str, age: &str, city: &str) -> String {
    format!(
        r#"  <form class="record" method="post" action="{action}">
    <label>Name <input type="text" name="name" value="{name}"/></label>
    <label>Age <input type="text" name="age" value="{age}"/></label>
    <label>City <input type="text" name="city" value="{city}"/></label>
    <button type="submit">Save</button> <a href="/">Cancel</a>
  </form>"#,
        name = escape_html(name),
        age = escape_html(age),
        city = escape_html(city),
    )
}

pub fn add_form(form: &PersonForm, notice: Option<Notice>) -> String {
    let body = record_form("/add", &form.name, &form.age, &form.city);
    layout("Add Person", notice.as_ref(), &body)
}

pub fn edit_form(person: &Person, notice: Option<Notice>) -> String {
    let action = format!("/edit/{}", person.id);
    let body = record_form(&action, &person.name, &person.age.to_string(), &person.city);
    layout("Edit Person", notice.as_ref(), &body)
}

pub fn not_found() -> String {
    layout("Page Not Found", None, "  <p>The page you requested does not exist.</p>")
}

pub fn server_error(message: &str) -> String {
    let body = format!("  <p>{}</p>", escape_html(message));
    layout("Server Error", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rest::notice::Notice;
    use chrono::Utc;
    use uuid::Uuid;

    fn person(name: &str, age: i32, city: &str) -> Person {
        Person {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            city: city.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"O'Neil" & co</b>"#),
            "&lt;b&gt;&quot;O&#39;Neil&quot; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn listing_renders_rows_and_echoes_search() {
        let page = PersonPage {
            items: vec![person("Alice", 30, "Reno")],
            current_page: 1,
            total_pages: 1,
            total: 1,
        };
        let query = ListQuery {
            search: "ren".to_string(),
            ..Default::default()
        };
        let html = listing(&page, &query, None);
        assert!(html.contains("Alice"));
        assert!(html.contains("Reno"));
        assert!(html.contains(r#"value="ren""#));
        assert!(html.contains("Page 1 of 1"));
    }

    #[test]
    fn listing_escapes_record_fields() {
        let page = PersonPage {
            items: vec![person("<script>", 30, "Reno & Sparks")],
            current_page: 1,
            total_pages: 1,
            total: 1,
        };
        let html = listing(&page, &ListQuery::default(), None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Reno &amp; Sparks"));
    }

    #[test]
    fn empty_listing_shows_placeholder() {
        let page = PersonPage {
            items: vec![],
            current_page: 1,
            total_pages: 0,
            total: 0,
        };
        let html = listing(&page, &ListQuery::default(), None);
        assert!(html.contains("No people found."));
        assert!(!html.contains("Page 1 of 0"));
    }

    #[test]
    fn pagination_links_preserve_search_and_sort() {
        let page = PersonPage {
            items: vec![person("Alice", 30, "Reno")],
            current_page: 2,
            total_pages: 3,
            total: 25,
        };
        let query = ListQuery::from_params(
            Some("2".into()),
            Some("a b".into()),
            Some("city".into()),
            Some("desc".into()),
        );
        let html = listing(&page, &query, None);
        assert!(html.contains("page=1&sort_by=city&order=desc&search=a%20b"));
        assert!(html.contains("page=3&sort_by=city&order=desc&search=a%20b"));
        assert!(html.contains("Page 2 of 3"));
    }

    #[test]
    fn sorted_column_link_toggles_direction() {
        let page = PersonPage {
            items: vec![person("Alice", 30, "Reno")],
            current_page: 1,
            total_pages: 1,
            total: 1,
        };
        let query = ListQuery::default(); // sorted by name asc
        let html = listing(&page, &query, None);
        // Name column flips to desc, other columns start asc
        assert!(html.contains("sort_by=name&order=desc"));
        assert!(html.contains("sort_by=age&order=asc"));
    }

    #[test]
    fn add_form_preserves_submitted_values() {
        let form = PersonForm {
            name: "Alice".into(),
            age: "200".into(),
            city: "Reno".into(),
        };
        let html = add_form(&form, Some(Notice::danger("Age must be a valid number")));
        assert!(html.contains(r#"value="Alice""#));
        assert!(html.contains(r#"value="200""#));
        assert!(html.contains("notice-danger"));
    }

    #[test]
    fn edit_form_posts_to_record_url() {
        let p = person("Alice", 30, "Reno");
        let html = edit_form(&p, None);
        assert!(html.contains(&format!(r#"action="/edit/{}""#, p.id)));
        assert!(html.contains(r#"value="30""#));
    }
}
