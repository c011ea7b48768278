//! Best-effort RSS/Atom item extraction.
//!
//! Feeds in the wild are frequently malformed, so extraction never fails:
//! fields that cannot be found are left empty and blocks that are never
//! closed are dropped instead of being returned half-built.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

use crate::model::RawItem;

pub const SUMMARY_MAX_CHARS: usize = 400;
pub const UNTITLED: &str = "(sin título)";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static IMG_SRC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]+src\s*=\s*["']([^"']+)["']"#).expect("valid img regex")
});

/// Elements whose text content is collected inside an item block.
const TEXT_TAGS: &[&str] = &[
    "title",
    "link",
    "guid",
    "pubdate",
    "published",
    "updated",
    "description",
    "summary",
    "content",
];

const DATE_TAGS: &[&str] = &["pubdate", "published", "updated"];
const SUMMARY_TAGS: &[&str] = &["description", "summary", "content"];

/// Parse raw feed text into items, in document order.
pub fn extract_items(xml: &str) -> Vec<RawItem> {
    let mut reader = Reader::from_str(xml);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut items = Vec::new();
    let mut current: Option<ItemBlock> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(e.name().as_ref());
                match current.as_mut() {
                    Some(block) => block.on_start(&name, &e),
                    None if is_item_tag(&name) => current = Some(ItemBlock::default()),
                    None => {}
                }
            }
            Ok(Event::Empty(e)) => {
                if let Some(block) = current.as_mut() {
                    let name = element_name(e.name().as_ref());
                    block.on_empty(&name, &e);
                }
            }
            Ok(Event::End(e)) => {
                let name = element_name(e.name().as_ref());
                if is_item_tag(&name) {
                    if let Some(block) = current.take() {
                        items.push(block.build());
                    }
                } else if let Some(block) = current.as_mut() {
                    block.on_end(&name);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(block) = current.as_mut() {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        // HTML entities such as &nbsp; are not predefined in XML
                        Err(_) => html_escape::decode_html_entities(&String::from_utf8_lossy(&e))
                            .into_owned(),
                    };
                    block.on_text(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(block) = current.as_mut() {
                    block.on_cdata(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                debug!(
                    "Stopping feed extraction at byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
            _ => {}
        }
    }

    items
}

/// Remove markup, decode the common entities and collapse whitespace.
pub fn strip_html(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");
    let decoded = without_tags
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Hard cut at `max` characters; not word-boundary aware.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// First `<img src>` of an HTML fragment, unless it looks like a tracking pixel.
pub fn first_inline_image(html: &str) -> Option<String> {
    let src = IMG_SRC_RE.captures(html)?.get(1)?.as_str();
    let lower = src.to_ascii_lowercase();
    if lower.contains("pixel") || lower.contains("tracker") {
        return None;
    }
    Some(src.to_string())
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn is_item_tag(name: &str) -> bool {
    name == "item" || name == "entry"
}

fn text_tag(name: &str) -> Option<&'static str> {
    TEXT_TAGS.iter().copied().find(|t| *t == name)
}

fn attributes(e: &BytesStart) -> Vec<(String, String)> {
    let mut attrs = e.attributes();
    attrs.with_checks(false);
    attrs
        .flatten()
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
            let value = match attr.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
            };
            (key, value)
        })
        .collect()
}

fn attribute<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.trim().is_empty())
}

/// First occurrences of a tag inside one block, split by form.
#[derive(Debug, Default)]
struct TagText {
    cdata: Option<String>,
    plain: Option<String>,
}

impl TagText {
    fn value(&self) -> Option<&str> {
        self.cdata.as_deref().or(self.plain.as_deref())
    }
}

/// An element whose end tag has not been seen yet.
#[derive(Debug)]
struct OpenTag {
    tag: &'static str,
    body: String,
    cdata: Option<String>,
    cdata_sections: usize,
    has_other_content: bool,
}

impl OpenTag {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            body: String::new(),
            cdata: None,
            cdata_sections: 0,
            has_other_content: false,
        }
    }

    fn push_markup(&mut self, markup: &str) {
        self.has_other_content = true;
        self.body.push_str(markup);
    }

    fn is_cdata_only(&self) -> bool {
        self.cdata_sections == 1 && !self.has_other_content
    }
}

#[derive(Debug, Default)]
struct ItemBlock {
    texts: HashMap<&'static str, TagText>,
    open: Vec<OpenTag>,
    link_href: Option<String>,
    media_content: Option<String>,
    media_thumbnail: Option<String>,
    enclosure_image: Option<String>,
}

impl ItemBlock {
    fn on_start(&mut self, name: &str, e: &BytesStart) {
        let markup = format!("<{}>", String::from_utf8_lossy(e));
        for open in &mut self.open {
            open.push_markup(&markup);
        }
        self.inspect_attributes(name, e);
        if let Some(tag) = text_tag(name) {
            self.open.push(OpenTag::new(tag));
        }
    }

    fn on_empty(&mut self, name: &str, e: &BytesStart) {
        let markup = format!("<{}/>", String::from_utf8_lossy(e));
        for open in &mut self.open {
            open.push_markup(&markup);
        }
        self.inspect_attributes(name, e);
    }

    fn on_end(&mut self, name: &str) {
        if let Some(idx) = self.open.iter().rposition(|o| o.tag == name) {
            let closed = self.open.remove(idx);
            self.record(closed);
        }
        let markup = format!("</{}>", name);
        for open in &mut self.open {
            open.push_markup(&markup);
        }
    }

    fn on_text(&mut self, text: &str) {
        let significant = !text.trim().is_empty();
        for open in &mut self.open {
            open.has_other_content |= significant;
            open.body.push_str(text);
        }
    }

    fn on_cdata(&mut self, text: &str) {
        for open in &mut self.open {
            open.cdata_sections += 1;
            if open.cdata.is_none() {
                open.cdata = Some(text.to_string());
            }
            open.body.push_str(text);
        }
    }

    fn record(&mut self, closed: OpenTag) {
        let entry = self.texts.entry(closed.tag).or_default();
        if closed.is_cdata_only() {
            if entry.cdata.is_none() {
                entry.cdata = closed.cdata.map(|c| c.trim().to_string());
            }
        } else if entry.plain.is_none() {
            entry.plain = Some(closed.body.trim().to_string());
        }
    }

    fn inspect_attributes(&mut self, name: &str, e: &BytesStart) {
        let slot = match name {
            "link" => &mut self.link_href,
            "media:content" => &mut self.media_content,
            "media:thumbnail" => &mut self.media_thumbnail,
            "enclosure" => &mut self.enclosure_image,
            _ => return,
        };
        if slot.is_some() {
            return;
        }

        let attrs = attributes(e);
        *slot = match name {
            "link" => attribute(&attrs, "href").map(str::to_string),
            "enclosure" => {
                let is_image = attribute(&attrs, "type")
                    .map(|t| t.to_ascii_lowercase().starts_with("image/"))
                    .unwrap_or(false);
                if is_image {
                    attribute(&attrs, "url").map(str::to_string)
                } else {
                    None
                }
            }
            _ => attribute(&attrs, "url").map(str::to_string),
        };
    }

    fn text(&self, tag: &str) -> Option<&str> {
        self.texts.get(tag).and_then(TagText::value)
    }

    fn first_text(&self, tags: &[&str]) -> Option<&str> {
        tags.iter().find_map(|tag| self.text(tag))
    }

    fn build(self) -> RawItem {
        let title = self
            .text("title")
            .map(strip_html)
            .unwrap_or_else(|| UNTITLED.to_string());

        let link = self
            .text("link")
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| self.link_href.clone())
            .or_else(|| self.text("guid").map(str::to_string))
            .unwrap_or_default()
            .trim()
            .to_string();

        let published_at = self
            .first_text(DATE_TAGS)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let raw_summary = self.first_text(SUMMARY_TAGS).unwrap_or("");
        let image = self
            .media_content
            .clone()
            .or_else(|| self.media_thumbnail.clone())
            .or_else(|| self.enclosure_image.clone())
            .or_else(|| first_inline_image(raw_summary));
        let summary = truncate_chars(&strip_html(raw_summary), SUMMARY_MAX_CHARS);

        RawItem {
            title,
            link,
            published_at,
            summary,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod strip_html_tests {
        use super::*;

        #[test]
        fn test_strips_tags_and_decodes_entities() {
            assert_eq!(strip_html("<b>Soja</b> &amp; Maíz"), "Soja & Maíz");
        }

        #[test]
        fn test_decodes_all_common_entities() {
            assert_eq!(
                strip_html("&lt;x&gt; &quot;q&quot; &#39;s&#39;&nbsp;end"),
                "<x> \"q\" 's' end"
            );
        }

        #[test]
        fn test_collapses_whitespace() {
            assert_eq!(strip_html("  a\n\n\t b   <br/>c  "), "a b c");
        }

        #[test]
        fn test_tags_become_word_breaks() {
            assert_eq!(strip_html("<p>one</p><p>two</p>"), "one two");
        }

        #[test]
        fn test_lone_angle_bracket_is_kept() {
            assert_eq!(strip_html("a < b"), "a < b");
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(strip_html(""), "");
        }
    }

    mod truncate_tests {
        use super::*;

        #[test]
        fn test_short_text_unchanged() {
            assert_eq!(truncate_chars("hola", 400), "hola");
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            assert_eq!(truncate_chars("ñandú", 3), "ñan");
        }

        #[test]
        fn test_hard_cut_mid_word() {
            assert_eq!(truncate_chars("deforestation", 5), "defor");
        }
    }

    mod rss_tests {
        use super::*;

        const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
                <channel>
                    <title>Channel title is not an item</title>
                    <link>https://channel.example.com</link>
                    <item>
                        <title>First &amp; foremost</title>
                        <link>https://news.example.com/1</link>
                        <pubDate>Mon, 09 Dec 2024 12:00:00 GMT</pubDate>
                        <description>&lt;p&gt;Hello &lt;b&gt;world&lt;/b&gt;&lt;/p&gt;</description>
                    </item>
                    <item>
                        <title><![CDATA[Second <em>story</em>]]></title>
                        <guid>https://news.example.com/2</guid>
                        <description><![CDATA[<img src="https://img.example.com/2.jpg"> Body]]></description>
                    </item>
                </channel>
            </rss>"#;

        #[test]
        fn test_one_item_per_element_in_document_order() {
            let items = extract_items(RSS);
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].title, "First & foremost");
            assert_eq!(items[1].title, "Second story");
        }

        #[test]
        fn test_fields_of_first_item() {
            let items = extract_items(RSS);
            assert_eq!(items[0].link, "https://news.example.com/1");
            assert_eq!(
                items[0].published_at.as_deref(),
                Some("Mon, 09 Dec 2024 12:00:00 GMT")
            );
            assert_eq!(items[0].summary, "Hello world");
            assert_eq!(items[0].image, None);
        }

        #[test]
        fn test_guid_used_when_link_missing() {
            let items = extract_items(RSS);
            assert_eq!(items[1].link, "https://news.example.com/2");
            assert_eq!(items[1].published_at, None);
        }

        #[test]
        fn test_inline_image_from_summary() {
            let items = extract_items(RSS);
            assert_eq!(
                items[1].image.as_deref(),
                Some("https://img.example.com/2.jpg")
            );
            assert_eq!(items[1].summary, "Body");
        }

        #[test]
        fn test_escaped_markup_is_stripped() {
            let xml = "<rss><item><title>t</title>\
                <description>&lt;b&gt;Soja&lt;/b&gt; &amp;amp; Maíz</description></item></rss>";
            let items = extract_items(xml);
            assert_eq!(items[0].summary, "Soja & Maíz");
        }

        #[test]
        fn test_html_entity_in_text_is_decoded() {
            let xml = "<rss><item><title>Hello&nbsp;world</title></item></rss>";
            let items = extract_items(xml);
            assert_eq!(items[0].title, "Hello world");
        }
    }

    mod atom_tests {
        use super::*;

        const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
            <feed xmlns="http://www.w3.org/2005/Atom">
                <title>Atom feed</title>
                <entry>
                    <title type="html">CBAM update</title>
                    <link rel="alternate" href="https://ec.example.eu/cbam"/>
                    <id>urn:uuid:1</id>
                    <published>2024-12-01T10:00:00Z</published>
                    <updated>2024-12-02T10:00:00Z</updated>
                    <summary>Short summary</summary>
                    <content type="html">Long content</content>
                </entry>
                <entry>
                    <title>Only updated</title>
                    <link href="https://ec.example.eu/second"></link>
                    <updated>2024-11-30T08:00:00Z</updated>
                    <content type="xhtml"><div>Rich <img src="https://ec.example.eu/p.png"/> text</div></content>
                </entry>
            </feed>"#;

        #[test]
        fn test_entries_extracted() {
            let items = extract_items(ATOM);
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].title, "CBAM update");
            assert_eq!(items[1].title, "Only updated");
        }

        #[test]
        fn test_link_from_href_attribute() {
            let items = extract_items(ATOM);
            assert_eq!(items[0].link, "https://ec.example.eu/cbam");
            assert_eq!(items[1].link, "https://ec.example.eu/second");
        }

        #[test]
        fn test_date_precedence() {
            let items = extract_items(ATOM);
            assert_eq!(items[0].published_at.as_deref(), Some("2024-12-01T10:00:00Z"));
            assert_eq!(items[1].published_at.as_deref(), Some("2024-11-30T08:00:00Z"));
        }

        #[test]
        fn test_summary_precedence() {
            let items = extract_items(ATOM);
            assert_eq!(items[0].summary, "Short summary");
            assert_eq!(items[1].summary, "Rich text");
        }

        #[test]
        fn test_image_inside_xhtml_content() {
            let items = extract_items(ATOM);
            assert_eq!(
                items[1].image.as_deref(),
                Some("https://ec.example.eu/p.png")
            );
        }
    }

    mod field_policy_tests {
        use super::*;

        fn single(block: &str) -> RawItem {
            let xml = format!("<rss><channel><item>{}</item></channel></rss>", block);
            let mut items = extract_items(&xml);
            assert_eq!(items.len(), 1, "expected exactly one item in {}", xml);
            items.remove(0)
        }

        #[test]
        fn test_missing_title_uses_placeholder() {
            let item = single("<link>https://a.example.com</link>");
            assert_eq!(item.title, UNTITLED);
        }

        #[test]
        fn test_missing_everything() {
            let item = single("");
            assert_eq!(item.title, UNTITLED);
            assert_eq!(item.link, "");
            assert_eq!(item.published_at, None);
            assert_eq!(item.summary, "");
            assert_eq!(item.image, None);
        }

        #[test]
        fn test_cdata_preferred_over_earlier_plain() {
            let item = single("<title>Plain</title><title><![CDATA[From CDATA]]></title>");
            assert_eq!(item.title, "From CDATA");
        }

        #[test]
        fn test_first_plain_wins_without_cdata() {
            let item = single("<title>One</title><title>Two</title>");
            assert_eq!(item.title, "One");
        }

        #[test]
        fn test_whitespace_around_values_is_trimmed() {
            let item = single(
                "<title>\n   Spaced   \n</title><link>\n  https://a.example.com/x \n</link>",
            );
            assert_eq!(item.title, "Spaced");
            assert_eq!(item.link, "https://a.example.com/x");
        }

        #[test]
        fn test_cdata_with_surrounding_whitespace() {
            let item = single("<description>\n  <![CDATA[<p>Texto</p>]]>\n</description>");
            assert_eq!(item.summary, "Texto");
        }

        #[test]
        fn test_link_text_preferred_over_guid() {
            let item = single("<guid>guid-1</guid><link>https://a.example.com</link>");
            assert_eq!(item.link, "https://a.example.com");
        }

        #[test]
        fn test_description_preferred_over_summary_and_content() {
            let item = single(
                "<content>C</content><summary>S</summary><description>D</description>",
            );
            assert_eq!(item.summary, "D");
        }

        #[test]
        fn test_pubdate_preferred_over_updated() {
            let item = single(
                "<updated>2024-01-02T00:00:00Z</updated><pubDate>Tue, 02 Jan 2024 00:00:00 GMT</pubDate>",
            );
            assert_eq!(
                item.published_at.as_deref(),
                Some("Tue, 02 Jan 2024 00:00:00 GMT")
            );
        }

        #[test]
        fn test_tag_names_are_case_insensitive() {
            let item = single("<TITLE>Upper</TITLE><PUBDATE>Wed, 03 Jan 2024 00:00:00 GMT</PUBDATE>");
            assert_eq!(item.title, "Upper");
            assert!(item.published_at.is_some());
        }

        #[test]
        fn test_summary_never_exceeds_limit() {
            let long = "palabra ".repeat(200);
            let item = single(&format!("<description>{}</description>", long));
            assert_eq!(item.summary.chars().count(), SUMMARY_MAX_CHARS);
        }

        #[test]
        fn test_multibyte_summary_limit() {
            let long = "ñ".repeat(1000);
            let item = single(&format!("<description>{}</description>", long));
            assert_eq!(item.summary.chars().count(), SUMMARY_MAX_CHARS);
        }
    }

    mod image_tests {
        use super::*;

        fn image_of(block: &str) -> Option<String> {
            let xml = format!(
                r#"<rss xmlns:media="http://search.yahoo.com/mrss/"><item>{}</item></rss>"#,
                block
            );
            extract_items(&xml).remove(0).image
        }

        #[test]
        fn test_media_thumbnail_beats_inline_img() {
            let image = image_of(
                r#"<description><![CDATA[<img src="https://x.com/inline.jpg">]]></description>
                   <media:thumbnail url="https://x.com/thumb.jpg"/>"#,
            );
            assert_eq!(image.as_deref(), Some("https://x.com/thumb.jpg"));
        }

        #[test]
        fn test_media_content_beats_thumbnail() {
            let image = image_of(
                r#"<media:thumbnail url="https://x.com/thumb.jpg"/>
                   <media:content url="https://x.com/content.jpg" medium="image"/>"#,
            );
            assert_eq!(image.as_deref(), Some("https://x.com/content.jpg"));
        }

        #[test]
        fn test_enclosure_with_type_first() {
            let image = image_of(r#"<enclosure type="image/jpeg" url="https://x.com/enc.jpg"/>"#);
            assert_eq!(image.as_deref(), Some("https://x.com/enc.jpg"));
        }

        #[test]
        fn test_enclosure_with_url_first() {
            let image = image_of(r#"<enclosure url="https://x.com/enc.png" length="10" type="image/png"/>"#);
            assert_eq!(image.as_deref(), Some("https://x.com/enc.png"));
        }

        #[test]
        fn test_non_image_enclosure_ignored() {
            let image = image_of(r#"<enclosure url="https://x.com/a.mp3" type="audio/mpeg"/>"#);
            assert_eq!(image, None);
        }

        #[test]
        fn test_tracking_pixel_rejected() {
            let image = image_of(
                r#"<description><![CDATA[<img src="https://x.com/pixel.gif"> text]]></description>"#,
            );
            assert_eq!(image, None);
        }

        #[test]
        fn test_tracker_url_rejected() {
            assert_eq!(
                first_inline_image(r#"<img width="1" src="https://x.com/tracker/open?id=1">"#),
                None
            );
        }

        #[test]
        fn test_single_quoted_src() {
            assert_eq!(
                first_inline_image("<p><IMG alt='' src='https://x.com/a.jpg'></p>").as_deref(),
                Some("https://x.com/a.jpg")
            );
        }
    }

    mod malformed_tests {
        use super::*;

        #[test]
        fn test_empty_string() {
            assert!(extract_items("").is_empty());
        }

        #[test]
        fn test_non_xml_text() {
            assert!(extract_items("this is not a feed at all").is_empty());
        }

        #[test]
        fn test_html_error_page() {
            let html = "<html><body><h1>502 Bad Gateway</h1></body></html>";
            assert!(extract_items(html).is_empty());
        }

        #[test]
        fn test_unclosed_item_is_dropped() {
            let xml = "<rss><item><title>Complete</title></item><item><title>Cut off";
            let items = extract_items(xml);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "Complete");
        }

        #[test]
        fn test_unclosed_field_yields_fallback() {
            let xml = "<rss><item><title>Broken<link>https://a.example.com</link></item></rss>";
            let items = extract_items(xml);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, UNTITLED);
            assert_eq!(items[0].link, "https://a.example.com");
        }

        #[test]
        fn test_unclosed_html_inside_description() {
            let xml = "<rss><item><description>a<br>b</description></item></rss>";
            let items = extract_items(xml);
            assert_eq!(items[0].summary, "a b");
        }

        #[test]
        fn test_mismatched_end_tags_do_not_abort() {
            let xml = "<rss><channel><item><title>One</title></wrong></item>\
                <item><title>Two</title></item></channel></rss>";
            let items = extract_items(xml);
            assert_eq!(items.len(), 2);
            assert_eq!(items[1].title, "Two");
        }

        #[test]
        fn test_more_stray_end_tags_than_open_elements() {
            let xml = "<rss><channel><item><title>A</title>\
                <description>x</p></div></span></description></item>\
                <item><title>B</title></item></channel></rss>";
            let items = extract_items(xml);
            let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(titles, vec!["A", "B"]);
            assert_eq!(items[0].summary, "x");
        }

        #[test]
        fn test_html_entities_in_title_are_decoded() {
            let xml = "<rss><item>\
                <title>Organizaci&#243;n&nbsp;mundial &amp; comercio</title>\
                </item></rss>";
            let items = extract_items(xml);
            assert_eq!(items[0].title, "Organización mundial & comercio");
        }

        #[test]
        fn test_escaped_markup_with_html_entity_is_stripped() {
            let xml = "<rss><item><title>T</title>\
                <description>&lt;p&gt;Hola&nbsp;mundo&lt;/p&gt;</description>\
                </item></rss>";
            let items = extract_items(xml);
            assert_eq!(items[0].summary, "Hola mundo");
        }
    }
}
