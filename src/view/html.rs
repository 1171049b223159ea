//! HTML rendering of the view model.
//!
//! Every page is a full document; the browser reloads it after each action.

use crate::models::user::UserId;
use crate::utils::html::escape;
use crate::view::model::{OptionView, RosterView, RowView};
use std::fmt::Write;

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;color:#222}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.5rem;text-align:left}\
form.inline{display:inline}\
.btn{padding:.3rem .8rem;border:0;border-radius:4px;cursor:pointer}\
.btn-primary{background:#2d6cdf;color:#fff}\
.btn-secondary{background:#777;color:#fff}\
.btn-danger{background:#c0392b;color:#fff}\
.status-idle{color:#b9770e}\
.status-active{color:#1e8449}\
.status-inactive{color:#7f8c8d}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Block Shift</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<h1>Block Shift</h1>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

/// Roster table with the add-user form
pub fn index_page(view: &RosterView) -> String {
    let mut body = String::new();

    body.push_str(
        "<section id=\"actions\">\n\
         <form id=\"addUserForm\" method=\"post\" action=\"/users\">\n\
         <label for=\"userName\">Name</label>\n\
         <input id=\"userName\" name=\"name\" type=\"text\" required>\n\
         <button class=\"btn btn-primary\" type=\"submit\">Add User</button>\n\
         </form>\n\
         <a class=\"btn btn-primary\" href=\"/frequency\">Assign Frequency</a>\n\
         </section>\n",
    );

    body.push_str(
        "<table>\n<thead><tr><th>ID</th><th>Name</th><th>Frequency</th>\
         <th>Status</th><th>Last Activity</th><th>Actions</th></tr></thead>\n\
         <tbody id=\"frequencyTableBody\">\n",
    );

    match view {
        RosterView::Empty { message, colspan } => {
            let _ = writeln!(
                body,
                "<tr><td colspan=\"{colspan}\" style=\"text-align: center; padding: 2rem;\">{}</td></tr>",
                escape(message)
            );
        }
        RosterView::Rows(rows) => {
            for row in rows {
                write_row(&mut body, row);
            }
        }
    }

    body.push_str("</tbody>\n</table>\n");

    page("Roster", &body)
}

fn write_row(out: &mut String, row: &RowView) {
    let id = row.id;
    let _ = writeln!(
        out,
        "<tr><td>{id}</td><td>{name}</td><td>{frequency}</td>\
         <td class=\"{class}\">{status}</td><td>{activity}</td>\
         <td><a class=\"btn btn-danger delete-btn\" href=\"/users/{id}/delete\">Delete</a> \
         <form class=\"inline\" method=\"post\" action=\"/users/{id}/status\">\
         <button class=\"btn btn-secondary status-toggle\" type=\"submit\">Change Status</button>\
         </form></td></tr>",
        name = escape(&row.name),
        frequency = escape(&row.frequency),
        class = escape(&row.status_class),
        status = row.status,
        activity = escape(&row.last_activity),
    );
}

/// Assign-frequency form with the user list as it is right now
pub fn assign_frequency_page(options: &[OptionView]) -> String {
    let mut body = String::new();

    body.push_str(
        "<h2>Assign Frequency</h2>\n\
         <form id=\"assignFrequencyForm\" method=\"post\" action=\"/frequency\">\n\
         <label for=\"userSelect\">User</label>\n\
         <select id=\"userSelect\" name=\"userId\">\n",
    );

    for option in options {
        let _ = writeln!(
            body,
            "<option value=\"{}\">{}</option>",
            escape(&option.value),
            escape(&option.label)
        );
    }

    body.push_str(
        "</select>\n\
         <label for=\"frequencyValue\">Frequency (MHz)</label>\n\
         <input id=\"frequencyValue\" name=\"frequency\" type=\"number\" step=\"any\" min=\"0\">\n\
         <button class=\"btn btn-primary\" type=\"submit\">Assign</button>\n\
         </form>\n\
         <p><a href=\"/\">Cancel</a></p>\n",
    );

    page("Assign Frequency", &body)
}

/// Yes/cancel prompt shown before a delete is carried out
pub fn confirm_delete_page(user_id: UserId, prompt: &str) -> String {
    let body = format!(
        "<p>{prompt}</p>\n\
         <form method=\"post\" action=\"/users/{user_id}/delete\">\n\
         <button class=\"btn btn-danger\" type=\"submit\" name=\"confirm\" value=\"yes\">OK</button>\n\
         <button class=\"btn btn-secondary\" type=\"submit\" name=\"confirm\" value=\"no\">Cancel</button>\n\
         </form>\n",
        prompt = escape(prompt),
    );

    page("Confirm", &body)
}

/// Page for unknown routes
pub fn not_found_page() -> String {
    page("Not Found", "<p>Nothing here.</p>\n<p><a href=\"/\">Back to roster</a></p>\n")
}
