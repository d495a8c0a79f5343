//! Server-rendered pages.
//!
//! Markup is built with `maud`; every page shares [`layout`]. Interactive bits
//! (live filtering, the detail overlay, form submission) are small inline
//! scripts over the rendered markup.

mod auth;
mod dashboard;
mod outlines;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use outliner_core::AuthSession;

pub use auth::{access_denied, sign_in};
pub use dashboard::dashboard;
pub use outlines::{load_error, new_outline_form, outline_list};

const STYLES: &str = r"
body { font-family: system-ui, -apple-system, sans-serif; line-height: 1.5; margin: 0; color: #111; background: #fff; }
header { display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; border-bottom: 1px solid #e5e5e5; }
header nav a { margin-right: 16px; color: #111; text-decoration: none; }
header form { display: inline; }
main { max-width: 56rem; margin: 0 auto; padding: 24px 16px; }
.card { border: 1px solid #e5e5e5; border-radius: 8px; padding: 24px; margin-bottom: 24px; }
.muted { color: #666; }
.row { display: block; padding: 16px 0; border-top: 1px solid #eee; color: inherit; text-decoration: none; }
.row:first-child { border-top: none; padding-top: 0; }
.meta span { margin-right: 16px; font-size: 0.875rem; color: #666; }
.empty { text-align: center; padding: 64px 0; border: 1px dashed #ccc; border-radius: 8px; }
.overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; padding: 16px; }
.overlay[hidden] { display: none; }
.dialog { background: #fff; border-radius: 8px; width: 100%; max-width: 42rem; max-height: 90vh; overflow-y: auto; padding: 24px; }
.block { background: #f7f7f7; border-radius: 6px; padding: 12px; margin: 0 0 8px; list-style: none; }
.error { color: #b91c1c; }
input, textarea { width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid #ccc; border-radius: 6px; font: inherit; }
label { display: block; margin: 16px 0 4px; font-weight: 500; }
button, .button { display: inline-block; margin-top: 16px; padding: 8px 16px; background: #111; color: #fff; border: none; border-radius: 6px; text-decoration: none; cursor: pointer; }
button:disabled { opacity: 0.5; }
";

/// Wrap page content in the shared document shell. The navigation bar is
/// shown only to signed-in users.
pub fn layout(title: &str, session: Option<&AuthSession>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Outliner" }
                style { (PreEscaped(STYLES)) }
            }
            body {
                @if let Some(session) = session {
                    header {
                        nav {
                            a href="/" { "Dashboard" }
                            a href="/outlines" { "Outlines" }
                            a href="/outlines/new" { "New Outline" }
                        }
                        div {
                            @if let Some(email) = &session.email {
                                span class="muted" { (email) " " }
                            }
                            form method="post" action="/sign-out" {
                                button type="submit" { "Sign out" }
                            }
                        }
                    }
                }
                main { (content) }
            }
        }
    }
}
