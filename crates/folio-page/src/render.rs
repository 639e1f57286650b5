/// HTML card rendering for the project and writeup grids.
///
/// Markup is assembled by appending fragments into a `String`. Every text
/// field and attribute value passes through `escape_html` on insertion, so
/// document content cannot break the surrounding structure. Absent optional
/// fields contribute nothing: no placeholder, no disabled control.
use std::fmt::Write;

use crate::model::{Project, Writeup};

/// Escape the HTML special characters in `s` for use in element text or
/// attribute values.
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

/// One inline label per tag, source order preserved.
fn badges(tags: &[String]) -> String {
    let mut out = String::new();
    for tag in tags {
        write!(out, "<span class=\"badge\">{}</span>", escape_html(tag))
            .expect("write to String");
    }
    out
}

/// An external action link. Opens in a new browsing context and leaks no
/// referrer or opener back to the page.
fn action_link(label: &str, href: &str, ghost: bool) -> String {
    let class = if ghost {
        "btn btn-small btn-ghost"
    } else {
        "btn btn-small"
    };
    format!(
        "<a class=\"{class}\" href=\"{}\" target=\"_blank\" rel=\"noreferrer noopener\">{label}</a>",
        escape_html(href)
    )
}

pub fn project_card(project: &Project) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"card\">");
    write!(
        out,
        "<h3 class=\"project-title\">{}</h3>",
        escape_html(&project.title)
    )
    .expect("write to String");
    write!(
        out,
        "<p class=\"project-desc\">{}</p>",
        escape_html(&project.description)
    )
    .expect("write to String");
    write!(out, "<div class=\"badges\">{}</div>", badges(&project.tags))
        .expect("write to String");

    out.push_str("<div class=\"card-actions\">");
    if let Some(repo) = &project.repo {
        out.push_str(&action_link("Repo", repo, false));
    }
    if let Some(writeup) = &project.writeup {
        out.push_str(&action_link("Writeup", writeup, true));
    }
    if let Some(demo) = &project.demo {
        out.push_str(&action_link("Demo", demo, true));
    }
    out.push_str("</div></article>");
    out
}

pub fn writeup_card(writeup: &Writeup) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"card\">");
    write!(
        out,
        "<h4 class=\"project-title\">{}</h4>",
        escape_html(&writeup.title)
    )
    .expect("write to String");
    write!(
        out,
        "<p class=\"muted small\">{}</p>",
        escape_html(&writeup.summary)
    )
    .expect("write to String");
    write!(out, "<div class=\"badges\">{}</div>", badges(&writeup.tags))
        .expect("write to String");
    write!(
        out,
        "<div class=\"card-actions\">{}</div>",
        action_link("Read", &writeup.link, false)
    )
    .expect("write to String");
    out.push_str("</article>");
    out
}

/// Render the visible project list. An empty list renders exactly one
/// "no matches" placeholder card: the cause is the visitor's own filter.
pub fn render_project_grid(visible: &[&Project]) -> String {
    if visible.is_empty() {
        return "<div class=\"card\">\
                <h3 class=\"project-title\">No matches</h3>\
                <p class=\"project-desc\">Try a different search term or set Filter to \u{201c}All\u{201d}.</p>\
                </div>"
            .to_string();
    }
    visible.iter().map(|p| project_card(p)).collect()
}

/// Render the writeup list. An empty list renders exactly one "data missing"
/// placeholder card: writeups are never filtered, so emptiness means the
/// document did not load (or was empty at the source).
pub fn render_writeup_grid(writeups: &[Writeup]) -> String {
    if writeups.is_empty() {
        return "<div class=\"card\">\
                <h4 class=\"project-title\">Writeups unavailable</h4>\
                <p class=\"muted small\">Verify assets/data/writeups.json exists and is valid JSON.</p>\
                </div>"
            .to_string();
    }
    writeups.iter().map(writeup_card).collect()
}
