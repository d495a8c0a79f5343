use maud::{Markup, html};
use outliner_core::SIGN_IN_PATH;

use super::layout;

/// Email/password form posting back to the sign-in route.
pub fn sign_in(error: Option<&str>) -> Markup {
    let content = html! {
        div class="card" style="max-width:24rem;margin:64px auto" {
            h1 { "Sign In" }
            @if let Some(error) = error {
                p class="error" { (error) }
            }
            form method="post" action=(SIGN_IN_PATH) {
                label for="email" { "Email" }
                input id="email" type="email" name="email" required autocomplete="email";
                label for="password" { "Password" }
                input id="password" type="password" name="password" required
                    autocomplete="current-password";
                button type="submit" { "Sign In" }
            }
        }
    };
    layout("Sign In", None, content)
}

/// Shown when a page is reached without a usable session.
pub fn access_denied(message: Option<&str>) -> Markup {
    let content = html! {
        div style="max-width:28rem;margin:64px auto;text-align:center" {
            h1 { "Access Denied" }
            p class="muted" {
                (message.unwrap_or("You need to be signed in to access this page."))
            }
            a class="button" href=(SIGN_IN_PATH) { "Sign In" }
        }
    };
    layout("Access Denied", None, content)
}
