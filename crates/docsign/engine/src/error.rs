use std::borrow::Cow;

use secspace_docsign_ledger::LedgerError;
use tokio::sync::oneshot::error::RecvError;

use crate::ledger_runtime::LedgerRuntimeError;

/// Error returned by [`LedgerEngine`](crate::LedgerEngine) operations.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct LedgerEngineError(#[from] LedgerEngineErrorKind);

/// The specific failure behind a [`LedgerEngineError`].
#[derive(Debug, thiserror::Error)]
pub enum LedgerEngineErrorKind {
    /// The ledger rejected the command.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The ledger runtime is no longer accepting messages.
    #[error("mpsc sender error: {0}")]
    MpscSender(Cow<'static, str>),

    /// The ledger runtime dropped the reply channel.
    #[error("oneshot receiver error: {0}")]
    OneshotReceiver(#[from] RecvError),

    /// The ledger runtime failed.
    #[error("ledger runtime error: {0}")]
    Runtime(#[from] LedgerRuntimeError),

    #[error("other error: {0}")]
    Other(Cow<'static, str>),
}

impl LedgerEngineError {
    /// Returns the specific failure.
    pub fn kind(&self) -> &LedgerEngineErrorKind {
        &self.0
    }

    /// Returns the ledger error, if the ledger rejected the command.
    pub fn as_ledger_error(&self) -> Option<&LedgerError> {
        match &self.0 {
            LedgerEngineErrorKind::Ledger(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LedgerError> for LedgerEngineError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl LedgerEngineErrorKind {
    pub(crate) fn mpsc_sender<E>(err: E) -> Self
    where
        Cow<'static, str>: From<E>,
    {
        Self::MpscSender(err.into())
    }

    pub(crate) fn other<E>(err: E) -> Self
    where
        Cow<'static, str>: From<E>,
    {
        Self::Other(err.into())
    }
}
