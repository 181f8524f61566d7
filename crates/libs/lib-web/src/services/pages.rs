//! # HTML Pages
//!
//! Script-carrying pages for the browser probes. Both templates are emitted
//! byte for byte; values are substituted without any HTML or JavaScript
//! escaping, which is the point of the probes.

/// Largest client-side delay `/sleep` will emit, in seconds.
pub const MAX_SLEEP_SECS: i64 = 10;

const SLEEP_TEMPLATE: &str = r#"<!DOCTYPE html><head></head><body><script>
console.log("before");
setTimeout(() => console.log("after"), {sec}000);
</script></body></html>"#;

const DOCUMENT_WRITE_TEMPLATE: &str = r#"<!DOCTYPE html><head></head><body><script>
var t = new XMLHttpRequest;
t.onload = function () {
  t.status >= 200 && t.status < 300 ? document.write(t.responseText) : console.error("Request failed with status: " + t.status)
};
t.open("GET", "{url}");
t.send();
</script></body></html>"#;

/// Cap the delay: any `sec` whose magnitude exceeds the limit becomes `+10`.
///
/// Values within the limit keep their sign, so `-5` stays `-5`.
pub fn clamp_sleep_secs(sec: i64) -> i64 {
    if sec.unsigned_abs() > MAX_SLEEP_SECS.unsigned_abs() {
        MAX_SLEEP_SECS
    } else {
        sec
    }
}

/// Page that logs "before", then "after" once `sec` seconds have passed.
///
/// `sec` is written literally followed by `000`, so `-5` becomes `-5000`.
pub fn render_sleep_page(sec: i64) -> String {
    SLEEP_TEMPLATE.replacen("{sec}", &sec.to_string(), 1)
}

/// Page that fetches `url` with XHR and `document.write`s a 2xx body.
pub fn render_document_write_page(url: &str) -> String {
    DOCUMENT_WRITE_TEMPLATE.replacen("{url}", url, 1)
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_sleep_secs() {
        assert_eq!(clamp_sleep_secs(15), 10);
        assert_eq!(clamp_sleep_secs(-15), 10);
        assert_eq!(clamp_sleep_secs(10), 10);
        assert_eq!(clamp_sleep_secs(-10), -10);
        assert_eq!(clamp_sleep_secs(-5), -5);
        assert_eq!(clamp_sleep_secs(0), 0);
        assert_eq!(clamp_sleep_secs(i64::MIN), 10);
    }

    #[test]
    fn test_sleep_page_exact() {
        assert_eq!(
            render_sleep_page(3),
            "<!DOCTYPE html><head></head><body><script>\n\
             console.log(\"before\");\n\
             setTimeout(() => console.log(\"after\"), 3000);\n\
             </script></body></html>"
        );
    }

    #[test]
    fn test_sleep_page_keeps_sign() {
        assert!(render_sleep_page(-5).contains(", -5000);"));
        assert!(render_sleep_page(0).contains(", 0000);"));
    }

    #[test]
    fn test_document_write_page_exact() {
        let expected = "<!DOCTYPE html><head></head><body><script>\n\
            var t = new XMLHttpRequest;\n\
            t.onload = function () {\n  \
            t.status >= 200 && t.status < 300 ? document.write(t.responseText) : console.error(\"Request failed with status: \" + t.status)\n\
            };\n\
            t.open(\"GET\", \"http://localhost\");\n\
            t.send();\n\
            </script></body></html>";
        assert_eq!(render_document_write_page("http://localhost"), expected);
    }

    #[test]
    fn test_document_write_url_is_not_escaped() {
        let page = render_document_write_page("http://x/\"});alert(1);//");
        assert!(page.contains("t.open(\"GET\", \"http://x/\"});alert(1);//\");"));
    }
}
// endregion: --- Tests
