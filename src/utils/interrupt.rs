// Ctrl-C handling: an interrupt at any point is a cancellation

use std::process;
use crate::utils::error::{ScaffoldError, UserError};

/// Listen for Ctrl-C and exit the way a declined prompt does.
///
/// Prompts block the calling task on stdin, so the listener runs as its own
/// task and needs the multi-threaded runtime.
pub fn exit_on_interrupt() {
    tokio::spawn(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Could not listen for Ctrl-C: {}", e);
            return;
        }

        tracing::debug!("Interrupted");
        // End the half-written prompt line
        println!();
        let user_error = UserError::from_scaffold_error(&ScaffoldError::Cancelled);
        user_error.print();
        process::exit(user_error.exit_code);
    });
}
