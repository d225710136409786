//! Páginas HTML de la aplicación
//!
//! El HTML se construye como strings con clases de Bootstrap 5.
//! Los errores de validación se renderizan campo a campo junto a su input.

use validator::ValidationErrors;

use crate::dto::{AddCarForm, EditCarForm};
use crate::models::Car;

/// Escapar texto para interpolarlo en HTML
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
<div class="container py-4">
{body}
</div>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn error_messages(errors: Option<&ValidationErrors>, field: &str) -> String {
    let Some(errors) = errors else {
        return String::new();
    };

    let field_errors = errors.field_errors();
    let Some(field_errors) = field_errors.get(field) else {
        return String::new();
    };

    field_errors
        .iter()
        .map(|e| {
            let message = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string());
            format!(
                r#"<div class="invalid-feedback d-block">{}</div>"#,
                escape(&message)
            )
        })
        .collect()
}

fn input_class(errors: Option<&ValidationErrors>, field: &str) -> &'static str {
    let has_error = errors
        .map(|e| e.field_errors().contains_key(field))
        .unwrap_or(false);
    if has_error {
        "form-control is-invalid"
    } else {
        "form-control"
    }
}

/// Listado principal: los coches llegan ya ordenados por ranking
pub fn index_page(cars: &[Car]) -> String {
    let rows: String = cars
        .iter()
        .map(|car| {
            format!(
                r#"        <tr>
            <td>{ranking}</td>
            <td><img src="{img_url}" alt="{name}" width="120"></td>
            <td>{name}</td>
            <td>{year}</td>
            <td>{rating:.1}</td>
            <td>{review}</td>
            <td>{description}</td>
            <td>
                <a class="btn btn-sm btn-outline-primary" href="/edit?id={id}">Edit</a>
                <a class="btn btn-sm btn-outline-danger" href="/delete?id={id}">Delete</a>
            </td>
        </tr>
"#,
                ranking = car.ranking,
                img_url = escape(&car.img_url),
                name = escape(&car.name),
                year = car.year,
                rating = car.rating,
                review = escape(&car.review),
                description = escape(&car.description),
                id = car.id,
            )
        })
        .collect();

    let body = format!(
        r#"<h1 class="mb-4">My Top Cars</h1>
<table class="table table-striped align-middle">
    <thead>
        <tr>
            <th>Rank</th>
            <th></th>
            <th>Name</th>
            <th>Year</th>
            <th>Rating</th>
            <th>Review</th>
            <th>Description</th>
            <th></th>
        </tr>
    </thead>
    <tbody>
{rows}    </tbody>
</table>
<a class="btn btn-primary" href="/add">Add Car</a>
"#,
        rows = rows,
    );

    layout("My Top Cars", &body)
}

/// Formulario de alta; en caso de error se re-renderiza con lo ya escrito
pub fn add_page(form: &AddCarForm, errors: Option<&ValidationErrors>) -> String {
    let body = format!(
        r#"<h1 class="mb-4">Add Car</h1>
<form method="post" action="/add" class="col-md-6">
    <div class="mb-3">
        <label class="form-label" for="name">Car Name</label>
        <input class="{name_class}" type="text" id="name" name="name" value="{name}">
{name_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="year">Year</label>
        <input class="{year_class}" type="text" id="year" name="year" value="{year}">
{year_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="rating">Rating out of 10, e.g. 9.5</label>
        <input class="{rating_class}" type="text" id="rating" name="rating" value="{rating}">
{rating_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="comment">Your Comment</label>
        <input class="{comment_class}" type="text" id="comment" name="comment" value="{comment}">
{comment_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="description">Description</label>
        <textarea class="{description_class}" id="description" name="description" rows="4">{description}</textarea>
{description_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="img_url">Image URL</label>
        <input class="{img_url_class}" type="text" id="img_url" name="img_url" value="{img_url}">
{img_url_errors}    </div>
    <button class="btn btn-primary" type="submit">Add Car</button>
    <a class="btn btn-secondary" href="/">Cancel</a>
</form>
"#,
        name = escape(&form.name),
        name_class = input_class(errors, "name"),
        name_errors = error_messages(errors, "name"),
        year = escape(&form.year),
        year_class = input_class(errors, "year"),
        year_errors = error_messages(errors, "year"),
        rating = escape(&form.rating),
        rating_class = input_class(errors, "rating"),
        rating_errors = error_messages(errors, "rating"),
        comment = escape(&form.comment),
        comment_class = input_class(errors, "comment"),
        comment_errors = error_messages(errors, "comment"),
        description = escape(&form.description),
        description_class = input_class(errors, "description"),
        description_errors = error_messages(errors, "description"),
        img_url = escape(&form.img_url),
        img_url_class = input_class(errors, "img_url"),
        img_url_errors = error_messages(errors, "img_url"),
    );

    layout("Add Car", &body)
}

/// Formulario de edición parcial: campos en blanco conservan el valor actual
pub fn edit_page(car: &Car, form: &EditCarForm, errors: Option<&ValidationErrors>) -> String {
    let body = format!(
        r#"<h1 class="mb-4">Edit {name}</h1>
<p class="text-muted">Current rating: {current_rating:.1}. Leave a field blank to keep its current value.</p>
<form method="post" action="/edit?id={id}" class="col-md-6">
    <div class="mb-3">
        <label class="form-label" for="rating">New Rating out of 10, e.g. 9.5</label>
        <input class="{rating_class}" type="text" id="rating" name="rating" value="{rating}">
{rating_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="comment">New Comment</label>
        <input class="{comment_class}" type="text" id="comment" name="comment" value="{comment}">
{comment_errors}    </div>
    <div class="mb-3">
        <label class="form-label" for="img_link">New Image URL</label>
        <input class="{img_link_class}" type="text" id="img_link" name="img_link" value="{img_link}">
{img_link_errors}    </div>
    <button class="btn btn-primary" type="submit">Done</button>
    <a class="btn btn-secondary" href="/">Cancel</a>
</form>
"#,
        name = escape(&car.name),
        current_rating = car.rating,
        id = car.id,
        rating = escape(&form.rating),
        rating_class = input_class(errors, "rating"),
        rating_errors = error_messages(errors, "rating"),
        comment = escape(&form.comment),
        comment_class = input_class(errors, "comment"),
        comment_errors = error_messages(errors, "comment"),
        img_link = escape(&form.img_link),
        img_link_class = input_class(errors, "img_link"),
        img_link_errors = error_messages(errors, "img_link"),
    );

    layout("Edit Car", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    fn car(id: i64, name: &str, rating: f64, ranking: i64) -> Car {
        Car {
            id,
            name: name.to_string(),
            year: 2013,
            description: "desc".to_string(),
            rating,
            ranking,
            review: "review".to_string(),
            img_url: "https://example.com/car.jpg".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_page_renders_cars_in_given_order() {
        let cars = vec![car(2, "McLaren P1", 9.5, 1), car(1, "BMW M3", 8.0, 2)];
        let html = index_page(&cars);

        let p1 = html.find("McLaren P1").unwrap();
        let m3 = html.find("BMW M3").unwrap();
        assert!(p1 < m3);
        assert!(html.contains("/edit?id=2"));
        assert!(html.contains("/delete?id=1"));
    }

    #[test]
    fn test_index_page_escapes_names() {
        let cars = vec![car(1, "<script>alert(1)</script>", 5.0, 1)];
        let html = index_page(&cars);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_add_page_marks_invalid_fields() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("not_empty");
        error.message = Some("This field is required".into());
        errors.add("name", error);

        let html = add_page(&AddCarForm::default(), Some(&errors));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("This field is required"));
    }

    #[test]
    fn test_edit_page_targets_car_id() {
        let html = edit_page(&car(7, "BMW M3", 8.0, 1), &EditCarForm::default(), None);
        assert!(html.contains("action=\"/edit?id=7\""));
        assert!(html.contains("Edit BMW M3"));
    }
}
