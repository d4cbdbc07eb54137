/*!
# Incremental writing

Records are appended to line-delimited JSON files, batch after batch.
Single JSON documents (cleaned articles, counts) are written with [write_json].
!*/
mod jsonl;
mod writertrait;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use jsonl::JsonlWriter;
pub use writertrait::WriterTrait;

use serde::Serialize;

use crate::error::Error;

/// Write a pretty-printed JSON document at `dst`.
pub fn write_json<T: Serialize + ?Sized>(dst: &Path, val: &T) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(dst)?);
    serde_json::to_writer_pretty(&mut writer, val)?;
    writer.flush()?;
    Ok(())
}
