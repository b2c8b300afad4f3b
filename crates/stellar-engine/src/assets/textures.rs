use serde::Serialize;

/// Handle to a texture owned by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Slot value written into render instances for meshes whose texture
/// has not resolved (or failed). The host renders those flat-colored.
pub const UNTEXTURED_SLOT: f32 = -1.0;

/// Lifecycle of one texture load.
///
/// `load()` hands back a Pending handle immediately; the host fetches
/// and decodes the image on its own schedule and calls back with the
/// GPU slot, or reports failure. Failure is absorbed: the owning mesh
/// simply stays untextured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureState {
    Pending,
    Resolved { slot: u32 },
    Failed,
}

/// One load request handed to the host image loader.
#[derive(Debug, Clone, Serialize)]
pub struct TextureRequest {
    pub id: u32,
    pub path: String,
}

struct TextureEntry {
    path: String,
    state: TextureState,
}

/// Registry of texture handles and their resolution state.
/// Single writer per phase: app code requests loads during init, the
/// host loader resolves them, render extraction only reads.
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    /// Requests not yet handed to the host loader.
    outbox: Vec<TextureRequest>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            outbox: Vec::new(),
        }
    }

    /// Request a texture by relative path. Returns a handle immediately;
    /// the pixel data resolves asynchronously. Repeated loads of the
    /// same path share one handle.
    pub fn load(&mut self, path: &str) -> TextureId {
        if let Some(idx) = self.entries.iter().position(|e| e.path == path) {
            return TextureId(idx as u32);
        }
        let id = TextureId(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            path: path.to_string(),
            state: TextureState::Pending,
        });
        self.outbox.push(TextureRequest {
            id: id.0,
            path: path.to_string(),
        });
        id
    }

    /// Host callback: the image decoded and was uploaded to `slot`.
    pub fn resolve(&mut self, id: TextureId, slot: u32) {
        if let Some(entry) = self.entries.get_mut(id.0 as usize) {
            entry.state = TextureState::Resolved { slot };
        }
    }

    /// Host callback: the fetch or decode failed. Logged and absorbed.
    pub fn fail(&mut self, id: TextureId) {
        if let Some(entry) = self.entries.get_mut(id.0 as usize) {
            log::warn!("texture load failed: {}", entry.path);
            entry.state = TextureState::Failed;
        }
    }

    pub fn state(&self, id: TextureId) -> Option<TextureState> {
        self.entries.get(id.0 as usize).map(|e| e.state)
    }

    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|e| e.path.as_str())
    }

    /// Wire-format slot for a mesh texture reference: the resolved GPU
    /// slot, or UNTEXTURED_SLOT while pending/failed/absent.
    pub fn slot_for(&self, id: Option<TextureId>) -> f32 {
        match id.and_then(|id| self.state(id)) {
            Some(TextureState::Resolved { slot }) => slot as f32,
            _ => UNTEXTURED_SLOT,
        }
    }

    /// Drain load requests accumulated since the last call, for the host
    /// loader to fetch.
    pub fn take_requests(&mut self) -> Vec<TextureRequest> {
        std::mem::take(&mut self.outbox)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_pending_until_resolved() {
        let mut reg = TextureRegistry::new();
        let id = reg.load("Images/sun.jpg");
        assert_eq!(reg.state(id), Some(TextureState::Pending));
        assert_eq!(reg.slot_for(Some(id)), UNTEXTURED_SLOT);

        reg.resolve(id, 3);
        assert_eq!(reg.state(id), Some(TextureState::Resolved { slot: 3 }));
        assert_eq!(reg.slot_for(Some(id)), 3.0);
    }

    #[test]
    fn failed_load_stays_untextured() {
        let mut reg = TextureRegistry::new();
        let id = reg.load("Images/missing.jpg");
        reg.fail(id);
        assert_eq!(reg.state(id), Some(TextureState::Failed));
        assert_eq!(reg.slot_for(Some(id)), UNTEXTURED_SLOT);
    }

    #[test]
    fn duplicate_paths_share_a_handle() {
        let mut reg = TextureRegistry::new();
        let a = reg.load("Images/earth.jpg");
        let b = reg.load("Images/earth.jpg");
        assert_eq!(a, b);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.take_requests().len(), 1);
    }

    #[test]
    fn take_requests_drains_outbox() {
        let mut reg = TextureRegistry::new();
        reg.load("a.jpg");
        reg.load("b.jpg");
        let reqs = reg.take_requests();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].path, "a.jpg");
        assert!(reg.take_requests().is_empty());
    }

    #[test]
    fn absent_reference_is_untextured() {
        let reg = TextureRegistry::new();
        assert_eq!(reg.slot_for(None), UNTEXTURED_SLOT);
    }
}
