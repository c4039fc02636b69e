pub mod ports;

#[allow(unused_imports)]
pub use ports::MemoryRegistry;
#[allow(unused_imports)]
pub use ports::RecordingInstaller;
#[allow(unused_imports)]
pub use ports::{ScriptedAnswer, ScriptedPrompter};
