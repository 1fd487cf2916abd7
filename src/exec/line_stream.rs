// src/exec/line_stream.rs

//! Newline splitting for child process pipes.
//!
//! [`for_each_row`] is the shared primitive: it hands every row to a
//! callback as raw bytes, *including* its trailing `\n`, and still yields a
//! final row that has no terminator. Concatenating the rows gives back the
//! input byte for byte.
//!
//! On top of it:
//! - [`print_rows`] is live print mode (each row goes straight to a sink,
//!   prefixed with the command name).
//! - [`collect_rows`] is accumulate mode (all rows joined into one buffer).
//!
//! Only read errors end a stream early. Output that cannot be written is
//! dropped while the pipe keeps being drained, so the child never blocks on
//! a full pipe and runs to completion.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::warn;

use crate::exec::sink::LineSink;

/// Read `reader` to the end, calling `on_row` for every row in order.
///
/// A read error stops the iteration and is returned; rows already passed to
/// `on_row` are not taken back. An empty stream succeeds without calling
/// `on_row`.
pub async fn for_each_row<R, F>(reader: R, mut on_row: F) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut(&[u8]),
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        on_row(&buf);
    }
}

/// Live print mode: write each row to `sink` as `"[name] row"`.
///
/// The first failed write is logged and printing stops for this stream;
/// the rest of the stream is still read and discarded.
pub async fn print_rows<R>(reader: R, name: &str, sink: &LineSink) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut sink_open = true;
    for_each_row(reader, |row| {
        if !sink_open {
            return;
        }
        if let Err(err) = sink.write_row(name, row) {
            warn!(command = %name, error = %err, "cannot write command output; discarding the rest");
            sink_open = false;
        }
    })
    .await
}

/// Accumulate mode: return every row concatenated, in order.
pub async fn collect_rows<R>(reader: R) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut out = Vec::new();
    for_each_row(reader, |row| out.extend_from_slice(row)).await?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::task::{Context, Poll};

    use tokio::io::ReadBuf;

    use super::*;

    /// Reader that yields `data` once and then fails.
    struct FailingReader {
        data: Option<Vec<u8>>,
    }

    impl AsyncRead for FailingReader {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            match self.data.take() {
                Some(data) => {
                    buf.put_slice(&data);
                    Poll::Ready(Ok(()))
                }
                None => Poll::Ready(Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "pipe went away",
                ))),
            }
        }
    }

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Write for Buf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buf {
        fn bytes(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    /// Writer that counts attempts and rejects every one of them.
    #[derive(Clone, Default)]
    struct ClosedPipe(Arc<AtomicUsize>);

    impl Write for ClosedPipe {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn rows_of(input: &[u8]) -> Vec<Vec<u8>> {
        let mut rows = Vec::new();
        for_each_row(input, |row| rows.push(row.to_vec())).await.unwrap();
        rows
    }

    #[tokio::test]
    async fn empty_stream_yields_no_rows() {
        assert!(rows_of(b"").await.is_empty());
        assert!(collect_rows(&b""[..]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn trailing_partial_row_is_kept() {
        assert_eq!(rows_of(b"a\nb\nc").await, vec![b"a\n".to_vec(), b"b\n".to_vec(), b"c".to_vec()]);
    }

    #[tokio::test]
    async fn blank_rows_are_rows() {
        assert_eq!(rows_of(b"\n\nx\n").await, vec![b"\n".to_vec(), b"\n".to_vec(), b"x\n".to_vec()]);
    }

    #[tokio::test]
    async fn non_utf8_bytes_pass_through_untouched() {
        let input = b"caf\xe9\nok\n";
        assert_eq!(rows_of(input).await.concat(), input.to_vec());
        assert_eq!(collect_rows(&input[..]).await.unwrap(), input.to_vec());
    }

    #[tokio::test]
    async fn print_rows_prefixes_each_row_in_order() {
        let buf = Buf::default();
        let sink = LineSink::new(buf.clone());

        print_rows(&b"a\nb\nc"[..], "brew", &sink).await.unwrap();

        assert_eq!(buf.bytes(), b"[brew] a\n[brew] b\n[brew] c\n");
    }

    #[tokio::test]
    async fn read_error_keeps_already_printed_rows() {
        let buf = Buf::default();
        let sink = LineSink::new(buf.clone());
        let reader = FailingReader {
            data: Some(b"first\nsecond\n".to_vec()),
        };

        let err = print_rows(reader, "npm", &sink).await.unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(buf.bytes(), b"[npm] first\n[npm] second\n");
    }

    #[tokio::test]
    async fn write_failure_stops_printing_but_drains_the_stream() {
        let pipe = ClosedPipe::default();
        let attempts = Arc::clone(&pipe.0);
        let sink = LineSink::new(pipe);

        print_rows(&b"one\ntwo\nthree\n"[..], "brew", &sink)
            .await
            .expect("a closed output is not a read failure");

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn collect_rows_surfaces_read_error() {
        let reader = FailingReader {
            data: Some(b"partial".to_vec()),
        };
        let err = collect_rows(reader).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
