pub mod article;
pub mod bookmarks;
pub mod feed;
pub mod push;
pub mod search;
pub mod serve;
pub mod theme;

use chrono::Local;
use nf_core::article::Article;
use nf_core::time_format::format_time_ago;

/// One block per article: heading, id, media, relative time, text.
pub fn render_articles(articles: &[Article]) -> String {
    let now = Local::now();
    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let media = article.media();
        let kind = if media.is_video() { "video" } else { "image" };
        out.push_str(&format!(
            "{}\n  id: {}\n  {kind}: {}\n  {}\n  {}\n",
            article.heading,
            article.id,
            media.url(),
            format_time_ago(article.updated_at, now),
            article.text,
        ));
    }
    out
}

pub fn print_articles(articles: &[Article], empty_message: &str) {
    if articles.is_empty() {
        println!("{empty_message}");
        return;
    }
    print!("{}", render_articles(articles));
    println!("\n{} article(s)", articles.len());
}
