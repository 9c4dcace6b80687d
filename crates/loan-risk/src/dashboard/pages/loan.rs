use crate::dashboard::canvas::Canvas;
use crate::dashboard::registry::{PageContext, RenderError};
use super::CLIENT_PARAM;
use crate::risk::Verdict;

pub(super) fn render(ctx: &PageContext<'_>, canvas: &mut Canvas) -> Result<(), RenderError> {
    let decision = ctx.service.explain(ctx.require(CLIENT_PARAM)?)?;

    canvas.title(format!("Loan request for client {}", decision.client_id));
    canvas.metric("Verdict", decision.verdict);

    match (decision.verdict, decision.probability) {
        (Verdict::Unknown, _) | (_, None) => {
            canvas.text("This client is not listed in the loaded sample.");
        }
        (verdict, Some(probability)) => {
            canvas.metric("Default probability", percent(probability));
            canvas.metric("Decision threshold", percent(ctx.service.threshold().value()));
            let note = if verdict == Verdict::Approved {
                "Default risk is below the threshold: the loan is granted."
            } else {
                "Default risk reaches the threshold: the loan is declined."
            };
            canvas.text(note);
        }
    }

    Ok(())
}

fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
