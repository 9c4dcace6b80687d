use crate::dashboard::canvas::Canvas;
use crate::dashboard::registry::{PageContext, RenderError};
use super::{format_feature, CLIENT_PARAM};
use crate::risk::service::parse_client_id;

pub(super) fn render(ctx: &PageContext<'_>, canvas: &mut Canvas) -> Result<(), RenderError> {
    let client_id = parse_client_id(ctx.require(CLIENT_PARAM)?)?;
    let store = ctx.store();

    canvas.title(format!("Client {client_id}"));
    let Some(record) = store.get(client_id) else {
        canvas.text("This client is not listed in the loaded sample.");
        return Ok(());
    };

    let rows = store
        .schema()
        .iter()
        .zip(&record.features)
        .map(|(name, value)| vec![name.clone(), format_feature(*value)])
        .collect();
    canvas.table(vec!["Feature".to_string(), "Value".to_string()], rows);

    Ok(())
}
