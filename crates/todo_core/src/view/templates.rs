//! Markup templates for the list body and footer.
//!
//! # Responsibility
//! - Define the pure templating contract consumed by the render engine.
//! - Provide the default HTML markup.
//!
//! # Invariants
//! - Templates are pure: same input, same markup.
//! - All user text is HTML-escaped.

use crate::model::filter::Filter;
use crate::model::item::Item;
use serde::Serialize;

/// Data supplied to the footer template.
///
/// Serialized keys match the host template contract (`activeTodoCount`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContext {
    pub active_todo_count: usize,
    pub active_todo_word: String,
    pub completed_todos: usize,
    pub filter: Filter,
}

/// Pure markup producers.
pub trait Templates {
    fn list(&self, items: &[&Item]) -> String;
    fn footer(&self, context: &FooterContext) -> String;
}

/// Returns `word` for a count of one, `word` + `s` otherwise.
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Default TodoMVC-style markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplates;

const FILTER_LINKS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

impl Templates for HtmlTemplates {
    fn list(&self, items: &[&Item]) -> String {
        let mut out = String::new();
        for item in items {
            let id = escape_html(&item.id);
            let title = escape_html(&item.title);
            let row_class = if item.completed { " class=\"completed\"" } else { "" };
            let checked = if item.completed { " checked" } else { "" };
            out.push_str(&format!(
                "<li{row_class} data-id=\"{id}\">\
                 <div class=\"view\">\
                 <input class=\"toggle\" type=\"checkbox\"{checked}>\
                 <label>{title}</label>\
                 <button class=\"destroy\"></button>\
                 </div>\
                 <input class=\"edit\" value=\"{title}\">\
                 </li>"
            ));
        }
        out
    }

    fn footer(&self, context: &FooterContext) -> String {
        let mut out = format!(
            "<span id=\"todo-count\"><strong>{}</strong> {} left</span><ul id=\"filters\">",
            context.active_todo_count,
            escape_html(&context.active_todo_word)
        );
        for (filter, label) in FILTER_LINKS {
            let selected = if *filter == context.filter {
                " class=\"selected\""
            } else {
                ""
            };
            out.push_str(&format!(
                "<li><a{selected} href=\"#/{}\">{label}</a></li>",
                filter.as_str()
            ));
        }
        out.push_str("</ul>");
        if context.completed_todos > 0 {
            out.push_str("<button id=\"clear-completed\">Clear completed</button>");
        }
        out
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, pluralize, FooterContext, HtmlTemplates, Templates};
    use crate::model::filter::Filter;
    use crate::model::item::Item;

    #[test]
    fn pluralize_uses_singular_only_for_one() {
        assert_eq!(pluralize(0, "item"), "items");
        assert_eq!(pluralize(1, "item"), "item");
        assert_eq!(pluralize(2, "item"), "items");
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn list_marks_completed_rows_and_escapes_titles() {
        let mut done = Item::with_id("id-1", "<script>").unwrap();
        done.completed = true;
        let open = Item::with_id("id-2", "open").unwrap();

        let markup = HtmlTemplates.list(&[&done, &open]);
        assert!(markup.contains("<li class=\"completed\" data-id=\"id-1\">"));
        assert!(markup.contains("type=\"checkbox\" checked>"));
        assert!(markup.contains("<label>&lt;script&gt;</label>"));
        assert!(markup.contains("<li data-id=\"id-2\">"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn list_row_markup_is_complete_for_single_item() {
        let item = Item::with_id("a", "tea & cake").unwrap();

        assert_eq!(
            HtmlTemplates.list(&[&item]),
            "<li data-id=\"a\"><div class=\"view\">\
             <input class=\"toggle\" type=\"checkbox\">\
             <label>tea &amp; cake</label><button class=\"destroy\"></button></div>\
             <input class=\"edit\" value=\"tea &amp; cake\"></li>"
        );
        assert_eq!(HtmlTemplates.list(&[]), "");
    }

    #[test]
    fn footer_highlights_filter_and_hides_clear_without_completed() {
        let context = FooterContext {
            active_todo_count: 2,
            active_todo_word: "items".to_string(),
            completed_todos: 0,
            filter: Filter::Active,
        };
        let markup = HtmlTemplates.footer(&context);
        assert!(markup.contains("<strong>2</strong> items left"));
        assert!(markup.contains("<a class=\"selected\" href=\"#/active\">Active</a>"));
        assert!(markup.contains("<a href=\"#/all\">All</a>"));
        assert!(!markup.contains("clear-completed"));
    }

    #[test]
    fn footer_context_serializes_host_template_keys() {
        let context = FooterContext {
            active_todo_count: 1,
            active_todo_word: "item".to_string(),
            completed_todos: 3,
            filter: Filter::Completed,
        };
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "activeTodoCount": 1,
                "activeTodoWord": "item",
                "completedTodos": 3,
                "filter": "completed"
            })
        );
    }
}
