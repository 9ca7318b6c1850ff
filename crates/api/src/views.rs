//! Server-rendered HTML views.
//!
//! Deliberately small: a shared layout, the two list pages, the actor
//! edit form, and an error page, assembled with `format!`. Anything
//! user-supplied goes through [`escape`] first.

use axum::http::StatusCode;
use validator::ValidationErrors;

use marquee_core::paging::{Page, SortOrder};
use marquee_db::models::actor::{Actor, ActorSortColumn};
use marquee_db::models::film::{Film, FilmOption, FilmSortColumn};

use crate::forms::ActorForm;

/// Escape a string for inclusion in HTML text or attribute values.
pub fn escape(s: &str) -> String {
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

/// Percent-encode a string for use as a query-string value.
fn encode_query(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let notice = match flash {
        Some(message) => format!(
            "<div class=\"flash-success\">{}</div>\n",
            escape(message)
        ),
        None => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} — Marquee</title>\n</head>\n<body>\n\
         <nav><a href=\"/actors\">Actors</a> | <a href=\"/films\">Films</a></nav>\n\
         {notice}{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn list_query(page: i64, sort_by: &str, order: SortOrder, filter: &str) -> String {
    format!(
        "page={page}&sortBy={sort_by}&order={}&filter={}",
        order.as_str(),
        encode_query(filter)
    )
}

/// A column header that links to the same list sorted by `column`,
/// toggling direction when the column is already active.
fn sort_header(
    base: &str,
    column: &str,
    label: &str,
    active_column: &str,
    order: SortOrder,
    filter: &str,
) -> String {
    let active = column == active_column;
    let next_order = if active { order.toggled() } else { SortOrder::Asc };
    let marker = match (active, order) {
        (true, SortOrder::Asc) => " &#9650;",
        (true, SortOrder::Desc) => " &#9660;",
        (false, _) => "",
    };
    format!(
        "<th><a href=\"{base}?{}\">{label}{marker}</a></th>",
        list_query(0, column, next_order, filter)
    )
}

/// "Displaying x to y of z" plus previous/next links.
fn pagination_nav<T>(base: &str, page: &Page<T>, sort_by: &str, order: SortOrder, filter: &str) -> String {
    let mut nav = String::from("<div class=\"pagination\">");
    if page.has_prev() {
        nav.push_str(&format!(
            "<a href=\"{base}?{}\">&larr; Previous</a> ",
            list_query(page.page - 1, sort_by, order, filter)
        ));
    }
    nav.push_str(&format!(
        "<span>Displaying {} to {} of {}</span>",
        page.display_from(),
        page.display_to(),
        page.total
    ));
    if page.has_next() {
        nav.push_str(&format!(
            " <a href=\"{base}?{}\">Next &rarr;</a>",
            list_query(page.page + 1, sort_by, order, filter)
        ));
    }
    nav.push_str("</div>");
    nav
}

fn filter_form(base: &str, filter: &str) -> String {
    format!(
        "<form action=\"{base}\" method=\"get\">\
         <input type=\"text\" name=\"filter\" value=\"{}\" placeholder=\"Filter...\">\
         <button type=\"submit\">Filter</button></form>",
        escape(filter)
    )
}

/// The paginated actor list.
pub fn actor_list(
    page: &Page<Actor>,
    sort_by: ActorSortColumn,
    order: SortOrder,
    filter: &str,
    flash: Option<&str>,
) -> String {
    let base = "/actors";
    let active = sort_by.as_sql();

    let mut rows = String::new();
    for actor in &page.items {
        rows.push_str(&format!(
            "<tr><td><a href=\"/actors/{id}\">{first}</a></td><td>{last}</td></tr>\n",
            id = actor.id,
            first = escape(&actor.first_name),
            last = escape(&actor.last_name),
        ));
    }
    if page.items.is_empty() {
        rows.push_str("<tr><td colspan=\"2\"><em>Nothing to display</em></td></tr>\n");
    }

    let body = format!(
        "<h1>{total} actors found</h1>\n{filter_form}\n<table>\n<thead><tr>{h_first}{h_last}</tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>\n{nav}",
        total = page.total,
        filter_form = filter_form(base, filter),
        h_first = sort_header(base, "first_name", "First name", active, order, filter),
        h_last = sort_header(base, "last_name", "Last name", active, order, filter),
        nav = pagination_nav(base, page, active, order, filter),
    );
    layout("Actors", flash, &body)
}

/// The paginated film list.
pub fn film_list(
    page: &Page<Film>,
    sort_by: FilmSortColumn,
    order: SortOrder,
    filter: &str,
    flash: Option<&str>,
) -> String {
    let base = "/films";
    let active = sort_by.as_sql();

    let mut rows = String::new();
    for film in &page.items {
        rows.push_str(&format!(
            "<tr><td>{title}</td><td>{description}</td></tr>\n",
            title = escape(&film.title),
            description = escape(&film.description),
        ));
    }
    if page.items.is_empty() {
        rows.push_str("<tr><td colspan=\"2\"><em>Nothing to display</em></td></tr>\n");
    }

    let body = format!(
        "<h1>{total} films found</h1>\n{filter_form}\n<table>\n<thead><tr>{h_title}<th>Description</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>\n{nav}",
        total = page.total,
        filter_form = filter_form(base, filter),
        h_title = sort_header(base, "title", "Title", active, order, filter),
        nav = pagination_nav(base, page, active, order, filter),
    );
    layout("Films", flash, &body)
}

fn field_errors(errors: &ValidationErrors, field: &str) -> String {
    let by_field = errors.field_errors();
    let Some(list) = by_field.get(field) else {
        return String::new();
    };
    let mut out = String::new();
    for error in list.iter() {
        let message = error
            .message
            .as_deref()
            .unwrap_or("Invalid value");
        out.push_str(&format!(
            "<span class=\"error\">{}</span>",
            escape(message)
        ));
    }
    out
}

/// The actor edit form, with field-level errors and the film picker.
pub fn actor_edit(
    id: i64,
    form: &ActorForm,
    errors: &ValidationErrors,
    options: &[FilmOption],
) -> String {
    let mut picker = String::from("<select name=\"films\" multiple>\n");
    for option in options {
        picker.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            escape(&option.value),
            escape(&option.label),
        ));
    }
    picker.push_str("</select>");

    let body = format!(
        "<h1>Edit actor</h1>\n\
         <form action=\"/actors/{id}\" method=\"post\">\n\
         <p><label>First name <input type=\"text\" name=\"first_name\" value=\"{first}\"></label>{first_errors}</p>\n\
         <p><label>Last name <input type=\"text\" name=\"last_name\" value=\"{last}\"></label>{last_errors}</p>\n\
         <p><label>Films {picker}</label></p>\n\
         <button type=\"submit\">Save</button> <a href=\"/actors\">Cancel</a>\n\
         </form>\n\
         <form action=\"/actors/{id}/delete\" method=\"post\">\n\
         <button type=\"submit\">Delete this actor</button>\n\
         </form>",
        first = escape(&form.first_name),
        last = escape(&form.last_name),
        first_errors = field_errors(errors, "first_name"),
        last_errors = field_errors(errors, "last_name"),
    );
    layout("Edit actor", None, &body)
}

/// A bare error page for statuses surfaced by [`crate::error::AppError`].
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n<p><a href=\"/actors\">Back to the list</a></p>",
        status.as_u16(),
        escape(reason),
        escape(message),
    );
    layout(reason, None, &body)
}
