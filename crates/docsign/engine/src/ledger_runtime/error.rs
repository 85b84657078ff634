pub type Result<T, E = LedgerRuntimeError> = core::result::Result<T, E>;

/// Errors that can occur in the ledger runtime.
#[derive(Debug, thiserror::Error)]
pub enum LedgerRuntimeError {
    /// The runtime thread could not be spawned.
    #[error("spawn error: {0}")]
    Spawn(#[from] std::io::Error),

    /// Error sending a reply back through the oneshot channel.
    ///
    /// The caller dropped its receiver before the reply was ready. The command itself
    /// was still applied to the ledger.
    #[error("sender error")]
    Sender,
}
