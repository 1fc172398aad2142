//! HTML rendering of the table view.

use anyhow::Result;
use minijinja::{Environment, context};
use serde::Serialize;

use sorter::core::view::TableView;

const TABLE_TEMPLATE: &str = include_str!("templates/table.html");

#[derive(Debug, Serialize)]
struct HeaderContext {
    key: &'static str,
    icon: &'static str,
    glyph: &'static str,
    active: bool,
}

/// Template engine wrapper around minijinja.
///
/// The template name ends in `.html`, so values are autoescaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("table.html", TABLE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &TableView, lang: &str) -> Result<String> {
        let headers: Vec<HeaderContext> = view
            .headers
            .iter()
            .map(|header| HeaderContext {
                key: header.column.as_str(),
                icon: header.icon,
                glyph: header.indicator.glyph(),
                active: header.active,
            })
            .collect();
        let rows: Vec<&[String]> = view.rows.iter().map(|row| row.cells.as_slice()).collect();
        let template = self.env.get_template("table.html")?;
        let rendered = template.render(context! {
            lang => lang,
            headers => headers,
            rows => rows,
        })?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorter::core::sort_state::SortState;
    use sorter::core::types::ColumnKey;
    use sorter::record::Record;

    #[test]
    fn active_header_is_marked_sorted() {
        let records = vec![Record::new(1, "가", 3)];
        let state = SortState::default().transition(ColumnKey::Name);
        let html = PageRenderer::new()
            .expect("renderer")
            .render(&TableView::project(&records, &state), "ko")
            .expect("render");

        assert!(html.contains(r#"<th data-key="name" class="sorted">"#));
        assert!(html.contains(r#"<th data-key="age">"#));
        assert!(html.contains(r#"data-icon="arrow_upward""#));
        assert!(html.contains(r#"action="/sort/age""#));
        assert!(html.contains("<td>가</td>"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let records = vec![Record::new(1, "<b>x</b>", 3)];
        let html = PageRenderer::new()
            .expect("renderer")
            .render(&TableView::project(&records, &SortState::default()), "en")
            .expect("render");

        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains("&lt;b&gt;x"));
    }
}
