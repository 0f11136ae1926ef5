use uuid::Uuid;

/// Opaque session identity, extracted from the session header by the
/// middleware and handed to handlers as an extension.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);
