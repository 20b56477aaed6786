use crate::Identity;

/// Holder of the single signed-in identity.
///
/// `login` always replaces the previous identity wholesale; `logout` on an
/// empty store is a no-op.
pub trait SessionStore {
    fn login(&mut self, identity: Identity);

    fn logout(&mut self);

    fn current(&self) -> Option<Identity>;

    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

/// Plain owned session cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current identity without cloning it.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

impl SessionStore for Session {
    fn login(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    fn logout(&mut self) {
        self.identity = None;
    }

    fn current(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
