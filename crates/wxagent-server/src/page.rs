use maud::{html, Markup, DOCTYPE};
use wxagent_core::Outcome;

/// The question form, optionally followed by the result of the last submission.
///
/// Everything interpolated here is escaped by maud, including model output.
pub fn render(outcome: Option<&Outcome>) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "🌤️ AI Weather Assistant" }
            }
            body {
                h2 { "Ask your weather question" }
                form method="POST" {
                    label for="question" { "Weather Question:" }
                    br;
                    textarea id="question" name="question" rows="4" cols="50" required {}
                    br; br;
                    label for="email" { "Your Email:" }
                    br;
                    input type="email" id="email" name="email" required;
                    br; br;
                    input type="submit" value="Ask";
                }
                br;
                @if let Some(outcome) = outcome {
                    (result(outcome))
                }
            }
        }
    }
}

fn result(outcome: &Outcome) -> Markup {
    match outcome {
        Outcome::Sent { recipient, answer } => html! {
            div class="result" {
                "✅ Answer sent to " (recipient)
                br; br;
                strong { (answer) }
            }
        },
        Outcome::Unrecognized | Outcome::Failed(_) => html! {
            div class="result" { (outcome.to_string()) }
        },
    }
}
