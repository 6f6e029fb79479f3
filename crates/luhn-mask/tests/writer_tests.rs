//! Integration tests for masking log output through tracing-subscriber.
//!
//! These tests require the `subscriber` feature to be enabled.

#![cfg(feature = "subscriber")]

use std::io;
use std::sync::{Arc, Mutex};

use luhn_mask::{LuhnMaskingConverter, MaskingConfig, MaskingMakeWriter};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(make_writer: MaskingMakeWriter<SharedBuf>, emit: impl FnOnce()) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::with_default(subscriber, emit);
}

#[test]
fn log_events_are_masked() {
    let sink = SharedBuf::default();
    capture(MaskingMakeWriter::new(sink.clone()), || {
        tracing::info!("charged card 5137 0049 8639 6403 for order 42");
        tracing::info!(card = "4111111111111111", "field values are masked too");
    });

    let output = sink.contents();
    assert!(output.contains("charged card ****MASKED*****6403 for order 42"));
    assert!(output.contains("***MASKED***1111"));
    assert!(!output.contains("5137 0049 8639 6403"));
    assert!(!output.contains("4111111111111111"));
}

#[test]
fn non_card_numbers_are_logged_verbatim() {
    let sink = SharedBuf::default();
    capture(MaskingMakeWriter::new(sink.clone()), || {
        tracing::warn!("rejected 5137 0049 8639 6404");
    });

    assert!(sink.contents().contains("rejected 5137 0049 8639 6404"));
}

#[test]
fn disabled_converter_leaves_output() {
    let sink = SharedBuf::default();
    let converter =
        LuhnMaskingConverter::from_config(&MaskingConfig::new().enabled(false)).unwrap();
    capture(
        MaskingMakeWriter::with_converter(sink.clone(), converter),
        || tracing::info!("charged 4111111111111111"),
    );

    assert!(sink.contents().contains("charged 4111111111111111"));
}
