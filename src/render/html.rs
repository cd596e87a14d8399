// 页面 HTML 输出
//
// 不依赖模板引擎，按块拼接字符串。所有来自用户或远端的文本都要经过 escape。

use std::fmt::Write;

use super::grid::{CellView, Expanded, Grid};
use super::page::PageModel;
use crate::models::{FilterState, ALL_SENTINEL, MAX_RATING, MIN_RATING, MIN_YEAR, RATING_STEP};

const PAGE_TITLE: &str = "Movie Recommender";

const STYLE: &str = r#"
body { background-color: #0e1117; color: #fafafa; font-family: sans-serif; margin: 0; }
.app { max-width: 1200px; margin: 0 auto; padding: 16px; }
.title { color: #ffffff; font-size: 42px; font-weight: bold; margin-bottom: 20px; text-align: center; }
.layout { display: flex; gap: 24px; }
.sidebar { width: 240px; flex-shrink: 0; }
.sidebar label { display: block; margin-bottom: 16px; }
.sidebar select, .sidebar input { width: 100%; }
main { flex: 1; }
.search { width: 100%; padding: 8px; margin-bottom: 16px; }
.error { background-color: #3e1f1f; color: #ff6b6b; padding: 8px 12px; border-radius: 6px; margin-bottom: 12px; }
.row { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 16px; }
.movie { padding: 12px; border-radius: 10px; background-color: #1e1e1e; }
.movie img { width: 100%; border-radius: 6px; }
.button { display: inline-block; padding: 6px 10px; border: 1px solid #555; border-radius: 6px; color: #fafafa; text-decoration: none; }
.similar { margin-top: 12px; }
.empty { color: #999; }
.footer { text-align: center; }
"#;

/// 转义 HTML 特殊字符
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// 保留当前筛选条件的页面链接
pub fn page_link(filters: &FilterState, expanded: &Expanded, anchor: Option<u32>) -> String {
    let mut pairs: Vec<(&str, String)> = filters.to_query_pairs();
    if !expanded.is_empty() {
        pairs.push(("expand", expanded.to_param()));
    }

    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    match anchor {
        Some(id) => format!("/?{}#movie-{}", query, id),
        None => format!("/?{}", query),
    }
}

/// 渲染整个页面
pub fn render_page(model: &PageModel) -> String {
    let mut html = String::new();
    open_document(&mut html);

    html.push_str(r#"<form method="get" action="/" class="layout">"#);
    render_sidebar(&mut html, model);

    html.push_str("<main>");
    let _ = write!(
        html,
        r#"<input class="search" type="text" name="q" placeholder="Enter a movie title" aria-label="Search for a movie..." value="{}">"#,
        escape(model.filters.search_query.as_deref().unwrap_or_default())
    );

    for error in &model.errors {
        render_error(&mut html, error);
    }

    if model.grid.is_empty() && model.errors.is_empty() {
        html.push_str(r#"<p class="empty">No movies found.</p>"#);
    }

    render_grid(&mut html, &model.grid, &|cell: &CellView| {
        Some(page_link(
            &model.filters,
            &model.expanded.with(cell.movie_id),
            Some(cell.movie_id),
        ))
    });
    html.push_str("</main></form>");

    close_document(&mut html);
    html
}

/// 参数校验失败时的页面
pub fn render_error_page(message: &str) -> String {
    let mut html = String::new();
    open_document(&mut html);
    render_error(&mut html, message);
    html.push_str(r#"<p><a class="button" href="/">Reset filters</a></p>"#);
    close_document(&mut html);
    html
}

fn open_document(html: &mut String) {
    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>{}</title><style>{}</style></head><body><div class="app"><p class="title">🎬 {}</p>"#,
        PAGE_TITLE, STYLE, PAGE_TITLE
    );
}

fn close_document(html: &mut String) {
    html.push_str(r#"<hr><p class="footer">Made with ❤️ using axum and TMDB API</p></div></body></html>"#);
}

fn render_error(html: &mut String, message: &str) {
    let _ = write!(html, r#"<div class="error" role="alert">{}</div>"#, escape(message));
}

fn render_sidebar(html: &mut String, model: &PageModel) {
    html.push_str(r#"<aside class="sidebar"><h2>Filters</h2>"#);

    // 年份：All + 当前年份倒序到 1900
    html.push_str(r#"<label>Release Year <select name="year" onchange="this.form.submit()">"#);
    render_option(html, ALL_SENTINEL, ALL_SENTINEL, model.filters.year.is_none());
    for year in (MIN_YEAR..=model.current_year).rev() {
        let value = year.to_string();
        render_option(html, &value, &value, model.filters.year == Some(year));
    }
    html.push_str("</select></label>");

    html.push_str(r#"<label>Genre <select name="genre" onchange="this.form.submit()">"#);
    render_option(html, ALL_SENTINEL, ALL_SENTINEL, model.filters.genre_id.is_none());
    for genre in &model.genres {
        let key = genre.key();
        let selected = model.filters.genre_id.as_deref() == Some(key.as_str());
        render_option(html, &key, &genre.name, selected);
    }
    html.push_str("</select></label>");

    let _ = write!(
        html,
        r#"<label>Minimum Rating <output>{:.1}</output><input type="range" name="min_rating" min="{}" max="{}" step="{}" value="{:.1}" onchange="this.form.submit()"></label>"#,
        model.filters.min_rating, MIN_RATING, MAX_RATING, RATING_STEP, model.filters.min_rating
    );

    html.push_str("</aside>");
}

fn render_option(html: &mut String, value: &str, label: &str, selected: bool) {
    let _ = write!(
        html,
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    );
}

/// 渲染网格；action 为单元生成 "Get Recommendations" 链接
fn render_grid(html: &mut String, grid: &Grid, action: &dyn Fn(&CellView) -> Option<String>) {
    if grid.is_empty() {
        return;
    }

    html.push_str(r#"<div class="grid">"#);
    for row in &grid.rows {
        html.push_str(r#"<div class="row">"#);
        for cell in row {
            render_cell(html, cell, action);
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
}

fn render_cell(html: &mut String, cell: &CellView, action: &dyn Fn(&CellView) -> Option<String>) {
    let class = if cell.expandable { "movie" } else { "movie recommended" };
    let _ = write!(
        html,
        r#"<div class="{}" id="{}movie-{}" data-column="{}">"#,
        class,
        if cell.expandable { "" } else { "rec-" },
        cell.movie_id,
        cell.column
    );

    if let Some(ref url) = cell.poster_url {
        let _ = write!(
            html,
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(url),
            escape(&cell.title)
        );
    }

    let _ = write!(
        html,
        r#"<p class="movie-title"><strong>{}</strong></p><p class="rating">{}</p>"#,
        escape(&cell.title),
        escape(&cell.rating)
    );

    if cell.expandable {
        if let Some(href) = action(cell) {
            let _ = write!(
                html,
                r#"<a class="button" href="{}">Get Recommendations</a>"#,
                escape(&href)
            );
        }
    }

    if let Some(ref recommendations) = cell.recommendations {
        html.push_str(r#"<div class="similar"><h3>Similar Movies</h3>"#);
        if let Some(ref error) = recommendations.error {
            render_error(html, error);
        }
        render_grid(html, &recommendations.grid, &|_: &CellView| None);
        html.push_str("</div>");
    }

    html.push_str("</div>");
}
