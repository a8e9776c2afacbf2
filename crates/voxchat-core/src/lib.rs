pub mod config;
pub mod error;
pub mod mode;
pub mod respond;
pub mod transcribe;
pub mod ui;
pub mod verbose;

pub use config::{OPENAI_API_KEY_ENV, ResponderConfig, TranscriberConfig};
pub use error::{AnswerError, TranscribeError};
pub use mode::ExecutionMode;
pub use respond::Responder;
pub use transcribe::Transcriber;
pub use ui::{
    ERROR_MARKER, NO_AUDIO_PLACEHOLDER, TRANSCRIBE_FIRST, answer_action,
    is_actionable_transcript, transcribe_action,
};
pub use verbose::set_verbose;
