//! CLI commands

mod changelog;
mod completions;
mod docs;
mod publish;
mod version;

pub use changelog::ChangelogCommand;
pub use completions::CompletionsCommand;
pub use docs::DocsCommand;
pub use publish::PublishCommand;
pub use version::{ReleaseVersionArgs, VersionCommand};
