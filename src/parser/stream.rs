use crate::error::Result;
use crate::parser::record::{HEADER_SIZE, RECORD_SIZE};
use std::io::{ErrorKind, Read};

/// Sequential reader over the fixed-size records of a BON stream
///
/// The 8-byte header is consumed on the first read and never inspected.
/// A trailing partial record ends the stream; its length is kept in
/// [`BonRecordStream::truncated_tail`].
pub struct BonRecordStream<R: Read> {
    reader: R,
    header_skipped: bool,
    pub records_read: usize,
    pub truncated_tail: usize,
    pub eof: bool,
}

impl<R: Read> BonRecordStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            header_skipped: false,
            records_read: 0,
            truncated_tail: 0,
            eof: false,
        }
    }

    /// Read the next complete record, or `None` at end of stream.
    ///
    /// Read errors other than `Interrupted` are returned to the caller and
    /// end the conversion.
    pub fn next_record(&mut self) -> Result<Option<[u8; RECORD_SIZE]>> {
        if self.eof {
            return Ok(None);
        }

        if !self.header_skipped {
            self.header_skipped = true;
            let mut header = [0u8; HEADER_SIZE];
            let filled = self.fill(&mut header)?;
            if filled < HEADER_SIZE {
                log::debug!("Header is {filled} bytes, treating stream as empty");
                self.eof = true;
                return Ok(None);
            }
        }

        let mut record = [0u8; RECORD_SIZE];
        let filled = self.fill(&mut record)?;
        if filled == RECORD_SIZE {
            self.records_read += 1;
            return Ok(Some(record));
        }

        self.eof = true;
        if filled > 0 {
            self.truncated_tail = filled;
            log::warn!(
                "Discarding truncated trailing record ({filled} of {RECORD_SIZE} bytes) after {} records",
                self.records_read
            );
        }
        Ok(None)
    }

    /// Fill `buf` as far as the reader allows, returning the byte count.
    ///
    /// A read error ends the stream: the record boundary is lost.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.eof = true;
                    return Err(e.into());
                }
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for BonRecordStream<R> {
    type Item = Result<[u8; RECORD_SIZE]>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
