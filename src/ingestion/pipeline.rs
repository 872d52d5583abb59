use super::names::NameSource;
use super::segment::segment_fragments;
use super::source::TextSource;
use super::types::{IngestError, IngestReport};
use crate::records::store::RecordStore;
use crate::records::types::Record;

/// Downloads `source_url`, segments the body and appends one record per fragment.
///
/// Ids are allocated once, before the fetch, and handed out sequentially to the
/// batch. On failure the store is left untouched. An empty body is a success that
/// creates nothing.
pub async fn ingest<S, N>(
    store: &mut RecordStore,
    source: &S,
    names: &mut N,
    source_url: &str,
) -> Result<IngestReport, IngestError>
where
    S: TextSource + ?Sized,
    N: NameSource + ?Sized,
{
    let mut next_id = store.next_id();
    tracing::info!("Downloading {}", source_url);

    let body = match source.fetch_text(source_url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::error!("Failed to download {}: {}", source_url, err);
            return Err(err);
        }
    };

    let mut batch = Vec::new();
    for content in segment_fragments(&body) {
        batch.push(Record::new(next_id, names.full_name(), content));
        next_id = next_id.next();
    }

    let created = batch.iter().map(Record::id).collect::<Vec<_>>();
    store.extend(batch);

    tracing::info!(
        "Ingested {} records from {} ({} bytes)",
        created.len(),
        source_url,
        body.len()
    );

    Ok(IngestReport {
        source_url: source_url.to_string(),
        created,
    })
}
