use chrono::{DateTime, Utc};
use maud::{Markup, PreEscaped, html};
use outliner_core::{
    AuthSession, NO_POINTS_TEXT, NO_THESIS_TEXT, Outline, display_title, format_date,
    format_time_ago, points_label,
};

use super::layout;

const FILTER_SCRIPT: &str = r"
const search = document.getElementById('outline-search');
const noMatches = document.getElementById('no-matches');
search.addEventListener('input', () => {
  const q = search.value.toLowerCase();
  let shown = 0;
  document.querySelectorAll('[data-title]').forEach((row) => {
    const match = row.dataset.title.includes(q);
    row.hidden = !match;
    if (match) shown += 1;
  });
  if (noMatches) noMatches.hidden = shown !== 0;
});
document.querySelectorAll('[data-outline]').forEach((row) => {
  row.addEventListener('click', (event) => {
    event.preventDefault();
    document.getElementById('detail-' + row.dataset.outline).hidden = false;
  });
});
document.querySelectorAll('[data-close]').forEach((button) => {
  button.addEventListener('click', (event) => {
    event.preventDefault();
    button.closest('.overlay').hidden = true;
  });
});
";

const SUBMIT_SCRIPT: &str = r"
const form = document.getElementById('outline-form');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const error = document.getElementById('form-error');
  error.hidden = true;
  const data = new FormData(form);
  const payload = {
    title: data.get('title'),
    thesis: data.get('thesis'),
    points: data.getAll('point'),
  };
  try {
    const res = await fetch('/api/outlines', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    if (!res.ok) throw new Error('Failed to submit outline');
    window.location.href = '/outlines';
  } catch (err) {
    error.textContent = err.message;
    error.hidden = false;
  }
});
";

/// The outline list with search box and one hidden detail overlay per row.
///
/// `query` pre-filters server side; the inline script narrows further on
/// every keystroke. `selected` opens that outline's overlay on load.
pub fn outline_list(
    session: &AuthSession,
    outlines: &[Outline],
    query: Option<&str>,
    selected: Option<&str>,
    now: DateTime<Utc>,
) -> Markup {
    let content = html! {
        div style="display:flex;justify-content:space-between;align-items:center" {
            h1 { "Outlines" }
            a class="button" href="/outlines/new" { "New Outline" }
        }
        form method="get" action="/outlines" {
            input id="outline-search" type="text" name="q" placeholder="Search outlines..."
                value=(query.unwrap_or_default()) autocomplete="off";
        }
        @if outlines.is_empty() {
            (empty_state(query.is_some_and(|q| !q.is_empty())))
        } @else {
            div id="no-matches" hidden { (empty_state(true)) }
            div class="card" {
                @for outline in outlines {
                    a class="row" href={ "/outlines?selected=" (outline.id) }
                        data-outline=(outline.id) data-title=(outline.title.to_lowercase()) {
                        strong { (display_title(outline)) }
                        div class="meta" {
                            span { (format_time_ago(outline.created_at, now)) }
                            span { (points_label(outline)) }
                        }
                    }
                }
            }
            @for outline in outlines {
                (detail_overlay(outline, selected == Some(outline.id.as_str())))
            }
        }
        script { (PreEscaped(FILTER_SCRIPT)) }
    };
    layout("Outlines", Some(session), content)
}

fn empty_state(searching: bool) -> Markup {
    html! {
        div class="empty" {
            @if searching {
                h3 { "No matching outlines" }
                p class="muted" { "Try a different search term" }
            } @else {
                h3 { "No outlines found" }
                p class="muted" { "Create your first outline to get started" }
                a class="button" href="/outlines/new" { "New Outline" }
            }
        }
    }
}

fn detail_overlay(outline: &Outline, open: bool) -> Markup {
    html! {
        div class="overlay" id={ "detail-" (outline.id) } hidden[!open] {
            div class="dialog" {
                div style="display:flex;justify-content:space-between;align-items:start" {
                    h2 { (display_title(outline)) }
                    a href="/outlines" data-close aria-label="Close" { "✕" }
                }
                h3 class="muted" { "Thesis Statement" }
                div class="block" {
                    @if outline.content.thesis.is_empty() { (NO_THESIS_TEXT) } @else { (outline.content.thesis) }
                }
                h3 class="muted" { "Key Points" }
                @if outline.content.points.is_empty() {
                    div class="block muted" { (NO_POINTS_TEXT) }
                } @else {
                    ul style="padding:0" {
                        @for point in &outline.content.points {
                            li class="block" { (point) }
                        }
                    }
                }
                p class="muted" { "Created " (format_date(outline.created_at)) }
            }
        }
    }
}

/// Form for writing an outline by hand: title, thesis, and three points.
pub fn new_outline_form(session: &AuthSession) -> Markup {
    let content = html! {
        div class="card" {
            h2 { "Submit Your Outline" }
            p id="form-error" class="error" hidden {}
            form id="outline-form" method="post" action="/api/outlines" {
                label for="title" { "Title" }
                input id="title" type="text" name="title" required;
                label for="thesis" { "Thesis" }
                textarea id="thesis" name="thesis" rows="3" required {}
                @for n in 1..=3 {
                    label for={ "point-" (n) } { "Point " (n) }
                    input id={ "point-" (n) } type="text" name="point" required;
                }
                button type="submit" { "Submit Outline" }
            }
        }
        script { (PreEscaped(SUBMIT_SCRIPT)) }
    };
    layout("New Outline", Some(session), content)
}

/// Shown when the outline list could not be fetched.
pub fn load_error(session: &AuthSession, message: &str) -> Markup {
    let content = html! {
        div class="empty" {
            h3 { "Error Loading Outlines" }
            p class="muted" { (message) }
            a class="button" href="/outlines" { "Try again" }
        }
    };
    layout("Outlines", Some(session), content)
}
