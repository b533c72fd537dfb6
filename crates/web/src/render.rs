//! List-view rendering.
//!
//! The templating dependency is kept behind the [`ListRenderer`] trait so
//! handlers only see "records in, document out". The default
//! implementation builds the page by string concatenation; swapping in a
//! real templating engine means implementing the trait, nothing else.

use std::fmt::Write;

use todo_core::error::CoreError;
use todo_core::todo::Todo;

/// Renders the todo list page.
pub trait ListRenderer: Send + Sync {
    /// Render the full list document for `todos`. `search` is the filter
    /// the rows were selected with and is echoed back into the search box.
    fn render(&self, todos: &[Todo], search: &str) -> Result<String, CoreError>;
}

/// Default renderer: a hand-built HTML document.
pub struct HtmlRenderer;

impl ListRenderer for HtmlRenderer {
    fn render(&self, todos: &[Todo], search: &str) -> Result<String, CoreError> {
        render_page(todos, search).map_err(|e| CoreError::Internal(format!("Render failed: {e}")))
    }
}

fn render_page(todos: &[Todo], search: &str) -> Result<String, std::fmt::Error> {
    let mut page = String::with_capacity(2048);

    page.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Todos</title>\n",
        "<link rel=\"stylesheet\" href=\"/static/style.css\">\n",
        "</head>\n",
        "<body>\n",
        "<h1>Todos</h1>\n",
    ));

    // Search form (GET so the filter lands in the query string).
    write!(
        page,
        concat!(
            "<form class=\"search\" action=\"/\" method=\"get\">\n",
            "<input type=\"text\" name=\"search\" value=\"{}\" placeholder=\"Search\">\n",
            "<button type=\"submit\">Search</button>\n",
            "</form>\n",
        ),
        escape_html(search)
    )?;

    // Add form.
    page.push_str(concat!(
        "<form class=\"add\" action=\"/add\" method=\"post\">\n",
        "<input type=\"text\" name=\"title\" placeholder=\"Title\">\n",
        "<input type=\"text\" name=\"description\" placeholder=\"Description\">\n",
        "<button type=\"submit\">Add</button>\n",
        "</form>\n",
    ));

    page.push_str("<ul class=\"todos\">\n");
    for todo in todos {
        render_row(&mut page, todo)?;
    }
    page.push_str("</ul>\n");

    // Bulk transfer controls.
    page.push_str(concat!(
        "<div class=\"transfer\">\n",
        "<a href=\"/export\">Export CSV</a>\n",
        "<form action=\"/import\" method=\"post\" enctype=\"multipart/form-data\">\n",
        "<input type=\"file\" name=\"file\" accept=\".csv\">\n",
        "<button type=\"submit\">Import</button>\n",
        "</form>\n",
        "</div>\n",
    ));

    page.push_str("</body>\n</html>\n");
    Ok(page)
}

fn render_row(page: &mut String, todo: &Todo) -> Result<(), std::fmt::Error> {
    let class = if todo.done { "todo done" } else { "todo" };
    let title = escape_html(&todo.title);
    let description = escape_html(&todo.description);

    write!(
        page,
        concat!(
            "<li class=\"{class}\" data-id=\"{id}\">\n",
            "<span class=\"title\">{title}</span>\n",
            "<span class=\"description\">{description}</span>\n",
            "<form action=\"/toggle\" method=\"post\">",
            "<input type=\"hidden\" name=\"id\" value=\"{id}\">",
            "<button type=\"submit\">{toggle_label}</button>",
            "</form>\n",
            "<form action=\"/edit\" method=\"post\">",
            "<input type=\"hidden\" name=\"id\" value=\"{id}\">",
            "<input type=\"text\" name=\"title\" value=\"{title}\">",
            "<input type=\"text\" name=\"description\" value=\"{description}\">",
            "<button type=\"submit\">Save</button>",
            "</form>\n",
            "<form action=\"/delete\" method=\"post\">",
            "<input type=\"hidden\" name=\"id\" value=\"{id}\">",
            "<button type=\"submit\">Delete</button>",
            "</form>\n",
            "</li>\n",
        ),
        class = class,
        id = todo.id,
        title = title,
        description = description,
        toggle_label = if todo.done { "Undo" } else { "Done" },
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str, description: &str, done: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: description.to_string(),
            done,
        }
    }

    #[test]
    fn escape_covers_the_five_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn rows_carry_ids_and_done_class() {
        let todos = vec![
            todo(1, "Buy milk", "2%", false),
            todo(2, "Call plumber", "sink", true),
        ];
        let page = HtmlRenderer.render(&todos, "").unwrap();

        assert!(page.contains("data-id=\"1\""));
        assert!(page.contains("class=\"todo done\" data-id=\"2\""));
        assert!(page.contains("Buy milk"));
        assert!(page.contains("Call plumber"));
    }

    #[test]
    fn titles_are_escaped() {
        let todos = vec![todo(1, "<script>alert(1)</script>", "x", false)];
        let page = HtmlRenderer.render(&todos, "").unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn search_term_is_echoed_escaped() {
        let page = HtmlRenderer.render(&[], "\"><b>").unwrap();
        assert!(page.contains("value=\"&quot;&gt;&lt;b&gt;\""));
    }

    #[test]
    fn empty_list_still_renders_forms() {
        let page = HtmlRenderer.render(&[], "").unwrap();
        assert!(page.contains("action=\"/add\""));
        assert!(page.contains("action=\"/import\""));
        assert!(page.contains("href=\"/export\""));
    }
}
