//! Writers that mask card numbers on their way out.
//!
//! [`MaskingWriter`] wraps any [`io::Write`] and masks each buffer passed to
//! `write`. Log formatters write one rendered event per call, so a card
//! number is never split across two writes in practice. Bytes that are not
//! valid UTF-8 are copied through and the text around them is still masked.
//! With the `subscriber` feature, [`MaskingMakeWriter`] plugs the same
//! behaviour into a `tracing-subscriber` fmt layer:
//!
//! ```rust,ignore
//! use luhn_mask::MaskingMakeWriter;
//!
//! tracing_subscriber::fmt()
//!     .with_writer(MaskingMakeWriter::new(std::io::stdout))
//!     .init();
//! ```

use std::io;

use crate::converter::{LuhnMaskingConverter, MessageConverter};

/// Writer wrapper that masks card numbers before forwarding.
#[derive(Debug)]
pub struct MaskingWriter<W: io::Write> {
    inner: W,
    converter: LuhnMaskingConverter,
}

impl<W: io::Write> MaskingWriter<W> {
    /// Wrap a writer using the default converter.
    pub const fn new(inner: W) -> Self {
        Self::with_converter(inner, LuhnMaskingConverter::new())
    }

    /// Wrap a writer using a configured converter.
    pub const fn with_converter(inner: W, converter: LuhnMaskingConverter) -> Self {
        Self { inner, converter }
    }

    /// Get a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap, returning the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> io::Write for MaskingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Invalid bytes are never digits or separators, so they end a run
        // just like any other character and each valid chunk is masked alone.
        let mut invalid_bytes = 0;
        for chunk in buf.utf8_chunks() {
            let converted = self.converter.convert(chunk.valid());
            self.inner.write_all(converted.as_bytes())?;
            self.inner.write_all(chunk.invalid())?;
            invalid_bytes += chunk.invalid().len();
        }

        if invalid_bytes > 0 {
            tracing::warn!(
                invalid_bytes,
                len = buf.len(),
                "non-UTF-8 bytes passed through verbatim"
            );
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(feature = "subscriber")]
pub use make_writer::MaskingMakeWriter;

#[cfg(feature = "subscriber")]
mod make_writer {
    use tracing_subscriber::fmt::MakeWriter;

    use super::MaskingWriter;
    use crate::converter::LuhnMaskingConverter;

    /// `MakeWriter` adapter that masks every event a fmt layer writes.
    #[derive(Debug, Clone)]
    pub struct MaskingMakeWriter<M> {
        inner: M,
        converter: LuhnMaskingConverter,
    }

    impl<M> MaskingMakeWriter<M> {
        /// Wrap a `MakeWriter` using the default converter.
        pub const fn new(inner: M) -> Self {
            Self::with_converter(inner, LuhnMaskingConverter::new())
        }

        /// Wrap a `MakeWriter` using a configured converter.
        pub const fn with_converter(inner: M, converter: LuhnMaskingConverter) -> Self {
            Self { inner, converter }
        }
    }

    impl<'a, M> MakeWriter<'a> for MaskingMakeWriter<M>
    where
        M: MakeWriter<'a>,
    {
        type Writer = MaskingWriter<M::Writer>;

        fn make_writer(&'a self) -> Self::Writer {
            MaskingWriter::with_converter(self.inner.make_writer(), self.converter)
        }

        fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
            MaskingWriter::with_converter(self.inner.make_writer_for(meta), self.converter)
        }
    }
}
