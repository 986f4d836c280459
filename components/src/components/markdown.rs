use leptos::*;
use pulldown_cmark::{html, Options, Parser};

/// Markdown to HTML, with tables and strikethrough enabled.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders designer notes and other markdown text.
#[component]
pub fn MarkdownView(#[prop(into)] content: String) -> impl IntoView {
    view! {
        <div class="markdown-content" inner_html=render_markdown(&content)></div>
    }
}
