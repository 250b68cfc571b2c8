//! Static HTML renderer.

use crate::emit::{DocumentSet, SummaryDoc, TableDoc};
use crate::model::Badge;

use super::{Page, Renderer};

const STYLESHEET: &str = "\
body { font-family: sans-serif; margin: 2em; color: #222; }
table { border-collapse: collapse; margin-bottom: 2em; }
th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: left; }
th { background: #f0f0f0; }
.badge { display: inline-block; padding: 0 0.4em; margin-right: 0.2em;
         border-radius: 3px; background: #357; color: #fff; font-size: 0.8em; }
nav a { margin-right: 1em; }
";

const NAV: &str = "<nav><a href=\"index.html\">Summary</a>\
<a href=\"tables.html\">Tables</a>\
<a href=\"indexes.html\">Indexes</a>\
<a href=\"triggers.html\">Triggers</a></nav>";

/// Renders the document set as a directory of static HTML pages plus a
/// stylesheet.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, docs: &DocumentSet) -> Vec<Page> {
        let mut pages = vec![
            Page {
                file_name: "style.css".to_string(),
                contents: STYLESHEET.to_string(),
            },
            Page {
                file_name: "index.html".to_string(),
                contents: render_summary(&docs.summary),
            },
            Page {
                file_name: "tables.html".to_string(),
                contents: render_table_list(docs),
            },
            Page {
                file_name: "indexes.html".to_string(),
                contents: render_indexes(docs),
            },
            Page {
                file_name: "triggers.html".to_string(),
                contents: render_triggers(docs),
            },
        ];
        for doc in &docs.tables {
            pages.push(Page {
                file_name: format!("table_{}.html", doc.table.name),
                contents: render_table(doc),
            });
        }
        pages
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\">\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"style.css\"></head>\n\
         <body>{NAV}\n<h1>{title}</h1>\n{body}</body></html>\n",
        title = escape(title),
    )
}

fn render_summary(summary: &SummaryDoc) -> String {
    let migration = match &summary.latest_migration {
        Some(m) => format!("<p>Latest migration: <code>{}</code></p>", escape(m)),
        None => String::new(),
    };
    page(
        &format!("Schema: {}", summary.schema),
        &format!("{migration}<p>Generated schema documentation.</p>"),
    )
}

fn render_table_list(docs: &DocumentSet) -> String {
    let mut body = String::from("<ul>\n");
    for name in &docs.table_list.table_names {
        body.push_str(&format!(
            "<li><a href=\"table_{0}.html\">{0}</a></li>\n",
            escape(name)
        ));
    }
    body.push_str("</ul>");
    page("Tables", &body)
}

fn badge_markup(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| format!("<span class=\"badge\">{b}</span>"))
        .collect()
}

fn render_table(doc: &TableDoc) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Column</th><th>Type</th><th>Length</th>\
         <th>Badges</th><th>References</th></tr>\n",
    );
    for column in &doc.table.columns {
        let reference = column
            .resolved_foreign_key
            .as_ref()
            .map(|r| {
                format!(
                    "<a href=\"table_{0}.html\">{0}</a>.{1}",
                    escape(&r.table),
                    escape(&r.column)
                )
            })
            .unwrap_or_default();
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(column.name()),
            escape(&column.display_type),
            escape(column.display_length.as_deref().unwrap_or("")),
            badge_markup(&column.badges),
            reference,
        ));
    }
    body.push_str("</table>\n");

    if !doc.table.indexes.is_empty() {
        body.push_str("<h2>Indexes</h2>\n<table>\n<tr><th>Name</th><th>Columns</th><th>Unique</th></tr>\n");
        for index in &doc.table.indexes {
            let columns: Vec<&str> = index.columns.iter().map(|c| c.name.as_str()).collect();
            let unique = index.columns.iter().all(|c| c.unique);
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&index.name),
                escape(&columns.join(", ")),
                if unique { "yes" } else { "no" },
            ));
        }
        body.push_str("</table>\n");
    }

    if !doc.table.triggers.is_empty() {
        body.push_str(
            "<h2>Triggers</h2>\n<table>\n<tr><th>Name</th><th>Timing</th>\
             <th>Event</th><th>Statement</th></tr>\n",
        );
        for trigger in &doc.table.triggers {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td><code>{}</code></td></tr>\n",
                escape(&trigger.name),
                escape(&trigger.timing),
                escape(&trigger.event),
                escape(&trigger.statement),
            ));
        }
        body.push_str("</table>\n");
    }

    page(&doc.table.name, &body)
}

fn render_indexes(docs: &DocumentSet) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Table</th><th>Index</th><th>Columns</th><th>Unique</th></tr>\n",
    );
    for entry in &docs.indexes.tables {
        for index in &entry.indexes {
            let columns: Vec<&str> = index.columns.iter().map(|c| c.name.as_str()).collect();
            let unique = index.columns.iter().all(|c| c.unique);
            body.push_str(&format!(
                "<tr><td><a href=\"table_{0}.html\">{0}</a></td><td>{1}</td>\
                 <td>{2}</td><td>{3}</td></tr>\n",
                escape(&entry.table),
                escape(&index.name),
                escape(&columns.join(", ")),
                if unique { "yes" } else { "no" },
            ));
        }
    }
    body.push_str("</table>");
    page("Indexes", &body)
}

fn render_triggers(docs: &DocumentSet) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Table</th><th>Trigger</th><th>Timing</th>\
         <th>Event</th><th>Definer</th></tr>\n",
    );
    for entry in &docs.triggers.tables {
        for trigger in &entry.triggers {
            body.push_str(&format!(
                "<tr><td><a href=\"table_{0}.html\">{0}</a></td><td>{1}</td>\
                 <td>{2}</td><td>{3}</td><td>{4}</td></tr>\n",
                escape(&entry.table),
                escape(&trigger.name),
                escape(&trigger.timing),
                escape(&trigger.event),
                escape(&trigger.definer),
            ));
        }
    }
    body.push_str("</table>");
    page("Triggers", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_badge_markup() {
        let markup = badge_markup(&[Badge::Pk, Badge::Fk]);
        assert!(markup.contains(">PK<"));
        assert!(markup.contains(">FK<"));
    }
}
