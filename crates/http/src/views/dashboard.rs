use chrono::{DateTime, Utc};
use maud::{Markup, PreEscaped, html};
use outliner_core::{
    AuthSession, Outline, display_title, format_time_ago, points_label, truncate_text,
};

const THESIS_PREVIEW_CHARS: usize = 120;

use super::layout;

const GENERATE_SCRIPT: &str = r"
const form = document.getElementById('generate-form');
const question = document.getElementById('question');
const button = document.getElementById('generate-button');
const error = document.getElementById('generate-error');
question.addEventListener('input', () => { button.disabled = !question.value; });
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  error.hidden = true;
  button.disabled = true;
  button.textContent = 'Generating...';
  try {
    const res = await fetch('/api/generate-outline', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ question: question.value }),
    });
    const body = await res.json();
    if (!res.ok) throw new Error(body.error || 'Failed to generate outline');
    window.location.href = '/outlines?selected=' + body.data[0].id;
  } catch (err) {
    error.textContent = err.message;
    error.hidden = false;
    button.disabled = false;
    button.textContent = 'Generate Outline';
  }
});
";

/// Home page: question box plus the newest few outlines. `recent` is `Err`
/// with a message when they could not be loaded.
pub fn dashboard(
    session: &AuthSession,
    recent: Result<&[Outline], &str>,
    now: DateTime<Utc>,
) -> Markup {
    let content = html! {
        div class="card" {
            h2 { "Create New Outline" }
            p class="muted" {
                "Enter your extemp question and let AI help you create a structured outline."
            }
            p id="generate-error" class="error" hidden {}
            form id="generate-form" {
                textarea id="question" name="question" rows="3"
                    placeholder="How has artificial intelligence impacted global economics in 2024?" {}
                button id="generate-button" type="submit" disabled { "Generate Outline" }
            }
        }
        div class="card" {
            h2 { "Recent Outlines" }
            @match recent {
                Err(message) => {
                    h3 { "Error Loading Outlines" }
                    p class="muted" { (message) }
                },
                Ok([]) => {
                    p class="muted" { "No outlines yet. Ask a question above to create one." }
                },
                Ok(outlines) => {
                    @for outline in outlines {
                        a class="row" href={ "/outlines?selected=" (outline.id) } {
                            strong { (display_title(outline)) }
                            @if !outline.content.thesis.is_empty() {
                                p class="muted" {
                                    (truncate_text(&outline.content.thesis, THESIS_PREVIEW_CHARS))
                                }
                            }
                            div class="meta" {
                                span { (format_time_ago(outline.created_at, now)) }
                                span { (points_label(outline)) }
                            }
                        }
                    }
                    a href="/outlines" { "View all outlines" }
                },
            }
        }
        script { (PreEscaped(GENERATE_SCRIPT)) }
    };
    layout("Dashboard", Some(session), content)
}
