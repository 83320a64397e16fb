use super::host::BackendError;

/// Failure of a docking operation.
#[derive(Debug)]
pub enum DockError {
    /// A host-container or window backend call failed. `op` names the
    /// collaborator method.
    Backend {
        op: &'static str,
        source: BackendError,
    },
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend { op, source } => {
                write!(f, "backend call `{op}` failed: {source}")
            }
        }
    }
}

impl std::error::Error for DockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend { source, .. } => Some(source.as_ref()),
        }
    }
}

impl DockError {
    pub(super) fn backend(op: &'static str) -> impl FnOnce(BackendError) -> Self {
        move |source| Self::Backend { op, source }
    }
}
