use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Everything except unreserved URL characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Deep link that opens a graph in the Logseq desktop app
///
/// ```
/// use logseq_sidekick::widget::links::graph_url;
///
/// assert_eq!(graph_url("Chrome Import"), "logseq://graph/Chrome%20Import");
/// ```
pub fn graph_url(graph: &str) -> String {
    format!("logseq://graph/{}", utf8_percent_encode(graph, COMPONENT))
}

pub fn page_url(graph: &str, page_name: &str) -> String {
    format!("{}?page={}", graph_url(graph), utf8_percent_encode(page_name, COMPONENT))
}
