use axum::{http::header, response::IntoResponse, routing::get, Router};

pub(crate) const PATH: &str = "/rss";

/// Outage feed of the upstream provider, captured verbatim. The bytes never
/// change: consumers under test may diff responses across polls.
pub(crate) const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<rss version="2.0">
<channel>
<title>Odstávky externích služeb SUPIN s.r.o</title>
<link>http://www.ckp.cz/Aplikace/Support/RSS/</link>
<description> | Plánované odstávky | Mimořádné odstávky | </description>
<lastBuildDate>Fri, 06 Sep 2024 09:34:19 +0200</lastBuildDate>
<language>cs</language>
<item>
<title>Plánovaná odstávka od 09.09.2024 09:00 do 11.09.2024 18:30</title>
<description>Aktualizace SVII (update 291 a 292)<h5>Služby mimo provoz:</h5><ol><li>X1 – Webová služba SVIPO II (Test)</li></ol></description>
<guid isPermaLink="false">66dab07b5452ss</guid>
<pubDate>Fri, 06 Sep 2024 09:34:19 +0200</pubDate>
</item>
</channel>
</rss>
"#;

pub(crate) fn router() -> Router {
    Router::new().route("/", get(get_endpoint))
}

async fn get_endpoint() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], FEED)
}
