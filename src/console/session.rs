use super::menu::*;
use crate::config::OutputFormat;
use crate::ingestion::names::NameSource;
use crate::ingestion::pipeline::ingest;
use crate::ingestion::source::TextSource;
use crate::records::store::RecordStore;
use crate::records::types::RecordId;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

/// One interactive run of the menu, owning the record store for its lifetime.
pub struct Session<S, N> {
    store: RecordStore,
    source: S,
    names: N,
    source_url: String,
    format: OutputFormat,
}

impl<S, N> Session<S, N>
where
    S: TextSource,
    N: NameSource,
{
    pub fn new(source: S, names: N, source_url: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            store: RecordStore::new(),
            source,
            names,
            source_url: source_url.into(),
            format,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Runs the menu loop until Exit is selected or input ends.
    ///
    /// Only I/O failures on `input`/`output` are returned as errors; every store or
    /// download outcome is written to `output` instead.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            write_str(output, MENU).await?;

            let Some(line) = lines.next_line().await? else {
                tracing::info!("Input closed, leaving menu");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Download) => {
                    let message = self.download().await;
                    write_line(output, &message).await?;
                }
                Some(MenuChoice::List) => self.list(output).await?,
                Some(MenuChoice::Delete) => self.delete(&mut lines, output).await?,
                Some(MenuChoice::Edit) => self.edit(&mut lines, output).await?,
                Some(MenuChoice::Add) => self.add(&mut lines, output).await?,
                Some(MenuChoice::Exit) => break,
                None => write_line(output, MSG_INVALID_OPTION).await?,
            }
        }

        Ok(())
    }

    async fn download(&mut self) -> String {
        match ingest(
            &mut self.store,
            &self.source,
            &mut self.names,
            &self.source_url,
        )
        .await
        {
            Ok(report) => report.to_string(),
            Err(err) => format!("An error occurred: {}", err),
        }
    }

    async fn list<W>(&self, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.format {
            OutputFormat::Text => {
                for record in self.store.list_all() {
                    write_line(output, &record.to_string()).await?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.store.list_all())?;
                write_line(output, &json).await?;
            }
        }
        Ok(())
    }

    async fn delete<R, W>(&mut self, lines: &mut Lines<R>, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let input = prompt(lines, output, "Enter id: ").await?;

        let message = if input.is_empty() {
            MSG_ID_REQUIRED.to_string()
        } else {
            match parse_id(&input) {
                Some(id) => self.store.remove(id).to_string(),
                None => MSG_INVALID_ID.to_string(),
            }
        };

        write_line(output, &message).await
    }

    async fn edit<R, W>(&mut self, lines: &mut Lines<R>, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let input = prompt(lines, output, "Enter the ID of the record to update: ").await?;
        let Some(id) = parse_id(&input) else {
            return write_line(output, MSG_INVALID_ID).await;
        };

        let author = prompt(lines, output, "Enter new name: ").await?;
        let content = prompt(lines, output, "Enter new data: ").await?;

        if author.is_empty() || content.is_empty() {
            return write_line(output, MSG_EDIT_FIELDS_REQUIRED).await;
        }

        let outcome = self.store.update(id, author, content);
        write_line(output, &outcome.to_string()).await
    }

    async fn add<R, W>(&mut self, lines: &mut Lines<R>, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let author = prompt(lines, output, "Enter Name: ").await?;
        let content = prompt(lines, output, "Enter data: ").await?;

        if author.is_empty() || content.is_empty() {
            return write_line(output, MSG_ADD_FIELDS_REQUIRED).await;
        }

        let id = self.store.add(author, content);
        write_line(output, &format!("Record with ID {} was created", id)).await
    }
}

/// Parses a user-typed id. Surrounding whitespace is ignored. Any integer is
/// accepted; ids that cannot exist are reported as not found by the store.
pub fn parse_id(input: &str) -> Option<RecordId> {
    input.trim().parse::<i32>().ok().map(RecordId)
}

/// Writes `text`, then reads one line. End of input reads as an empty line.
async fn prompt<R, W>(lines: &mut Lines<R>, output: &mut W, text: &str) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_str(output, text).await?;
    Ok(lines.next_line().await?.unwrap_or_default())
}

async fn write_str<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

async fn write_line<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
