//! HTML pages. Every value coming from a request or the database goes
//! through [`escape`] before it is written into markup.

use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;
use models::cafe::{self, CafeSubmission};
use models::errors::ValidationError;

/// Column headings of the `/all` table.
pub const LIST_TITLES: [&str; 10] = [
    "Name",
    "Map URL",
    "Img URL",
    "Location",
    "Seats",
    "Has toilet?",
    "Has wifi?",
    "Has socket?",
    "Can take calls?",
    "Coffee Price",
];

enum Input {
    Text,
    Checkbox,
}

/// (form field, label, input kind), in form order.
const FORM_FIELDS: [(&str, &str, Input); 10] = [
    ("name", "Cafe name", Input::Text),
    ("map_url", "Cafe location in Google maps (URL)", Input::Text),
    ("img_url", "Image location (URL)", Input::Text),
    ("location", "Cafe location (City or State)", Input::Text),
    ("seats", "Number of seats", Input::Text),
    ("has_toilet", "Has toilet?", Input::Checkbox),
    ("has_wifi", "Has wifi?", Input::Checkbox),
    ("has_sockets", "Has sockets?", Input::Checkbox),
    ("can_take_calls", "Can take calls?", Input::Checkbox),
    ("coffee_price", "Coffee Price", Input::Text),
];

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<div class="container py-4">
{body}
</div>
</body>
</html>"#,
        title = escape(title),
        body = body,
    ))
}

pub fn index() -> Html<String> {
    layout(
        "Cafe & Wifi",
        r#"<div class="p-5 mb-4 bg-light rounded-3">
    <h1 class="display-5">Cafe &amp; Wifi</h1>
    <p class="lead">Find a café with working wifi and power for your laptop.</p>
    <a class="btn btn-primary" href="/all">Show me!</a>
    <a class="btn btn-outline-secondary" href="/add">Add a café</a>
</div>"#,
    )
}

fn flag(value: bool) -> &'static str {
    if value { "✔" } else { "✘" }
}

pub fn all_cafes(cafes: &[cafe::Model]) -> Html<String> {
    let mut body = String::from("<h1>All Cafes</h1>\n<table class=\"table table-striped\">\n<thead><tr>");
    for title in LIST_TITLES {
        let _ = write!(body, "<th>{}</th>", escape(title));
    }
    body.push_str("<th></th></tr></thead>\n<tbody>\n");
    for c in cafes {
        let _ = write!(
            body,
            "<tr><td>{name}</td><td><a href=\"{map}\">Maps Link</a></td><td><a href=\"{img}\">Image</a></td>\
             <td>{location}</td><td>{seats}</td><td>{toilet}</td><td>{wifi}</td><td>{sockets}</td><td>{calls}</td>\
             <td>{price}</td><td><a class=\"btn btn-sm btn-danger\" href=\"/delete/{id}\">Delete</a></td></tr>\n",
            name = escape(&c.name),
            map = escape(&c.map_url),
            img = escape(&c.img_url),
            location = escape(&c.location),
            seats = escape(&c.seats),
            toilet = flag(c.has_toilet),
            wifi = flag(c.has_wifi),
            sockets = flag(c.has_sockets),
            calls = flag(c.can_take_calls),
            price = escape(c.coffee_price.as_deref().unwrap_or_default()),
            id = c.id,
        );
    }
    body.push_str("</tbody>\n</table>\n<a href=\"/add\">Add a café</a> | <a href=\"/\">Return to index page</a>");
    layout("All Cafes", &body)
}

fn submitted<'a>(sub: &'a CafeSubmission, field: &str) -> Option<&'a str> {
    match field {
        "name" => sub.name.as_deref(),
        "map_url" => sub.map_url.as_deref(),
        "img_url" => sub.img_url.as_deref(),
        "location" => sub.location.as_deref(),
        "seats" => sub.seats.as_deref(),
        "has_toilet" => sub.has_toilet.as_deref(),
        "has_wifi" => sub.has_wifi.as_deref(),
        "has_sockets" => sub.has_sockets.as_deref(),
        "can_take_calls" => sub.can_take_calls.as_deref(),
        "coffee_price" => sub.coffee_price.as_deref(),
        _ => None,
    }
}

/// The add form, pre-filled with `sub` and annotated with `errors` when re-presented.
pub fn add_form(sub: &CafeSubmission, errors: Option<&ValidationError>) -> Html<String> {
    let mut body = String::from("<h1>Add a new cafe into the database</h1>\n<form method=\"post\" action=\"/add\" novalidate>\n");
    for (field, label, input) in &FORM_FIELDS {
        let value = submitted(sub, field);
        let error = errors.and_then(|e| e.for_field(field));
        match input {
            Input::Text => {
                let invalid = if error.is_some() { " is-invalid" } else { "" };
                let _ = write!(
                    body,
                    "<div class=\"mb-3\"><label class=\"form-label\" for=\"{field}\">{label}</label>\
                     <input class=\"form-control{invalid}\" type=\"text\" id=\"{field}\" name=\"{field}\" value=\"{value}\">",
                    label = escape(label),
                    value = escape(value.unwrap_or_default()),
                );
            }
            Input::Checkbox => {
                let checked = if cafe::is_checked(value) { " checked" } else { "" };
                let _ = write!(
                    body,
                    "<div class=\"form-check mb-3\"><input class=\"form-check-input\" type=\"checkbox\" id=\"{field}\" name=\"{field}\" value=\"y\"{checked}>\
                     <label class=\"form-check-label\" for=\"{field}\">{label}</label>",
                    label = escape(label),
                );
            }
        }
        if let Some(e) = error {
            let _ = write!(body, "<div class=\"invalid-feedback d-block\">{}</div>", escape(e.message));
        }
        body.push_str("</div>\n");
    }
    body.push_str("<input class=\"btn btn-primary\" type=\"submit\" value=\"Submit\">\n</form>\n<a href=\"/all\">See all cafes</a>");
    layout("Add Cafe", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        "<h1>{code} {reason}</h1>\n<p>{message}</p>\n<a href=\"/all\">Back to all cafes</a>",
        code = status.as_u16(),
        reason = escape(status.canonical_reason().unwrap_or("Error")),
        message = escape(message),
    );
    layout("Error", &body)
}
