use crate::error::{Result, SkillshareError};
use inquire::Confirm;
use inquire::error::InquireError;
use std::io::IsTerminal;

pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Asks before copying local skills into the source. Cancelling the prompt
/// counts as "no".
pub fn confirm_pull(count: usize, interactive: bool) -> Result<bool> {
    if !interactive {
        return Ok(true);
    }
    let prompt = t!("pull.confirm", count = count);
    match Confirm::new(&prompt).with_default(true).prompt() {
        Ok(confirmed) => Ok(confirmed),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(SkillshareError::Inquire(e)),
    }
}
