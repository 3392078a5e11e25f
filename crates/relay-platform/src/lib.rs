pub mod chat;
pub mod memory;
pub mod status;
pub mod transcribe;

pub use chat::HttpChatAdapter;
pub use memory::HttpMemoryAdapter;
pub use status::HttpStatusAdapter;
pub use transcribe::HttpTranscribeAdapter;
