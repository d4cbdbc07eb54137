/*! Line-delimited JSON writer.

The destination file is created (or truncated) on creation, and records are appended one per line.
Each [WriterTrait::write] call ends with a flush, so that a crash only loses the in-flight batch.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error;

use super::WriterTrait;

pub struct JsonlWriter<T> {
    handle: BufWriter<File>,
    nb_lines: usize,
    item: PhantomData<T>,
}

impl<T> JsonlWriter<T> {
    /// Number of written lines.
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }
}

impl<T: Serialize> WriterTrait for JsonlWriter<T> {
    type Item = T;

    fn new(dst: &Path) -> Result<Self, error::Error> {
        if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!("creating {:?}", dst);
        Ok(Self {
            handle: BufWriter::new(File::create(dst)?),
            nb_lines: 0,
            item: PhantomData,
        })
    }

    /// writes the provided records, one per line, and flushes.
    fn write(&mut self, vals: &[T]) -> Result<(), error::Error> {
        for val in vals {
            self.write_single(val)?;
        }
        self.flush()
    }

    fn write_single(&mut self, val: &T) -> Result<(), error::Error> {
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), error::Error> {
        Ok(self.handle.flush()?)
    }
}
