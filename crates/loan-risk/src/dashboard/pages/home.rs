use crate::dashboard::canvas::Canvas;
use crate::dashboard::registry::{PageContext, RenderError};
use super::{CLIENT_PARAM, LOAN_REQUEST};

const SAMPLE_IDS: usize = 5;

pub(super) fn render(ctx: &PageContext<'_>, canvas: &mut Canvas) -> Result<(), RenderError> {
    let store = ctx.store();

    canvas.title("Loan decision dashboard");
    canvas.text("Explore the client sample and request a loan decision for any listed client.");
    canvas.metric("Clients", store.len());
    canvas.metric("Decision threshold", ctx.service.threshold());

    let samples: Vec<String> = store
        .records()
        .take(SAMPLE_IDS)
        .map(|record| record.id.to_string())
        .collect();
    if !samples.is_empty() {
        canvas.text(format!(
            "Open '{LOAN_REQUEST}' with {CLIENT_PARAM} set to one of: {}",
            samples.join(", ")
        ));
    }

    Ok(())
}
