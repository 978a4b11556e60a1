//! Capability wiring.
//!
//! Four effects cover everything the core asks of the shell: repaint, the
//! search HTTP request, key-value persistence for the two collections, and
//! file saves. `Effect` and its FFI mirror are generated from the
//! `Capabilities` struct.

mod file_saver;

pub use self::file_saver::{
    FileSaveRequest, FileSaver, FileSaverError, FileSaverOperation, FileSaverOutput,
    FileSaverResult,
};

pub use crux_core::render::Render;
pub use crux_http::Http;
pub use crux_kv::KeyValue;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub http: Http<Event>,
    pub key_value: KeyValue<Event>,
    pub file_saver: FileSaver<Event>,
}
