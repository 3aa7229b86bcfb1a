//! Page shell: head, sidebar navigation and content region.

use std::fmt::{self, Write};

use tanager_core::entities::NavigationEntry;

use super::html::escape;
use crate::router::NAV_ENDPOINT;

const STYLE: &str = "\
body{margin:0;font-family:Arial,Helvetica,sans-serif;color:#222;background:#f3f4f6;}\
.app{min-height:100vh;display:flex;flex-direction:row;}\
.sidebar{width:220px;background:#1f2937;color:#e5e7eb;padding:16px;box-sizing:border-box;}\
.sidebar a{display:block;color:#e5e7eb;text-decoration:none;padding:6px 4px;border-radius:4px;}\
.sidebar a:hover{background:#374151;}\
.sidebar input{width:100%;box-sizing:border-box;margin:8px 0;padding:4px;}\
#page-content{flex:1;padding:0 80px 40px 80px;}\
h1{color:#9ca3af;font-weight:bold;font-size:40px;margin:40px 0;}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(480px,1fr));gap:24px;}\
.panel{background:#fff;border-radius:8px;padding:16px;display:flex;flex-direction:column;align-items:center;}\
.panel form{width:100%;}\
.panel input[type=range]{width:100%;}\
.message.error{color:#b91c1c;}\
.message.warning{color:#b45309;}\
.message.sources{color:#6b7280;font-size:12px;}\
.summary{font-size:13px;color:#374151;}";

const SCRIPT: &str = "\
function refreshNav(){\
const f=document.getElementById('experiment-filter').value;\
fetch('NAV_ENDPOINT?filter='+encodeURIComponent(f))\
.then(r=>r.text())\
.then(h=>{document.getElementById('experiment-nav').innerHTML=h;});\
}";

/// Links for the sidebar; also the body of the navigation endpoint.
///
/// # Errors
///
/// Only fails if writing to the output string fails.
pub fn nav_links(out: &mut String, entries: &[NavigationEntry]) -> fmt::Result {
    for entry in entries {
        writeln!(
            out,
            "<a class=\"nav-item\" href=\"{}\">{}</a>",
            escape(&entry.href),
            escape(&entry.label)
        )?;
    }
    Ok(())
}

/// Full HTML document around `content`.
///
/// # Errors
///
/// Only fails if writing to the output string fails.
pub fn shell(
    out: &mut String,
    title: &str,
    entries: &[NavigationEntry],
    content: &str,
) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>"
    )?;
    writeln!(out, "<title>{}</title>", escape(title))?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(
        out,
        "<script>{}</script>",
        SCRIPT.replace("NAV_ENDPOINT", NAV_ENDPOINT)
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"app\">")?;

    writeln!(out, "<aside class=\"sidebar\">")?;
    writeln!(out, "<a class=\"brand\" href=\"/\"><strong>Tanager</strong></a>")?;
    writeln!(
        out,
        "<input id=\"experiment-filter\" type=\"text\" placeholder=\"Filter projects\" oninput=\"refreshNav()\"/>"
    )?;
    writeln!(
        out,
        "<button id=\"dir-refresh\" type=\"button\" onclick=\"refreshNav()\">Refresh</button>"
    )?;
    writeln!(out, "<nav id=\"experiment-nav\">")?;
    nav_links(out, entries)?;
    writeln!(out, "</nav>")?;
    writeln!(out, "</aside>")?;

    writeln!(out, "<div id=\"page-content\">")?;
    out.push_str(content);
    writeln!(out, "</div>")?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}
