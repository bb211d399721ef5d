pub mod adapter;
pub mod provider;
pub mod registry;
pub mod scripted;

pub use adapter::SpeechAdapter;
pub use provider::SpeechProvider;
pub use registry::ProviderRegistry;
pub use scripted::{ScriptedProvider, ScriptedReply};
