pub mod display;

pub use display::{DisplaySink, RecordingDisplay, WriterDisplay};
