use chrono::SecondsFormat;

use crate::dashboard::canvas::Canvas;
use crate::dashboard::registry::{PageContext, RenderError};
use super::format_feature;

pub(super) fn render(ctx: &PageContext<'_>, canvas: &mut Canvas) -> Result<(), RenderError> {
    let store = ctx.store();

    canvas.title("Dataset");
    canvas.metric("Clients", store.len());
    canvas.metric("Features", store.schema().len());
    canvas.metric("Identifier column", store.id_column());
    canvas.metric(
        "Loaded at",
        store.loaded_at().to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    let features = store
        .schema()
        .iter()
        .enumerate()
        .map(|(position, name)| vec![(position + 1).to_string(), name.clone()])
        .collect();
    canvas.table(vec!["#".to_string(), "Feature".to_string()], features);

    if let Some(raw) = ctx.param("rows") {
        let limit = raw
            .parse::<usize>()
            .map_err(|_| RenderError::InvalidParameter {
                name: "rows",
                value: raw.to_string(),
            })?;

        let mut headers = Vec::with_capacity(store.schema().len() + 1);
        headers.push(store.id_column().to_string());
        headers.extend(store.schema().iter().cloned());

        let rows = store
            .records()
            .take(limit)
            .map(|record| {
                std::iter::once(record.id.to_string())
                    .chain(record.features.iter().copied().map(format_feature))
                    .collect::<Vec<String>>()
            })
            .collect();
        canvas.table(headers, rows);
    }

    Ok(())
}
