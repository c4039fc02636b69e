mod memory_registry;
mod recording_installer;
mod scripted_prompter;

pub use memory_registry::MemoryRegistry;
pub use recording_installer::RecordingInstaller;
pub use scripted_prompter::{ScriptedAnswer, ScriptedPrompter};
