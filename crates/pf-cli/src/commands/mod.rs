pub mod check;
pub mod load;
pub mod menu;
pub mod play;
pub mod saves;
pub mod stats;
pub mod stories;

use std::io::{self, StdinLock, Stdout};

use pf_session::StorageConfig;

use crate::game::PlayContext;

/// A play context reading the terminal's stdin and writing its stdout.
fn terminal(config: &StorageConfig) -> PlayContext<StdinLock<'static>, Stdout> {
    PlayContext::new(io::stdin().lock(), io::stdout(), config)
}
