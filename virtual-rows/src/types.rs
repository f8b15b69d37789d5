/// Stable identity of a row instance, assigned when the pool constructs it.
///
/// Identities survive recycling, so they can be used to follow a row instance across rebinds
/// (e.g. in [`crate::VirtualizationController::paint_order`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowId(pub u32);

/// A reusable row instance.
///
/// A row is bound to at most one collection index at a time. It is owned by the controller
/// while it is part of the bound-row sequence and by the pool while idle.
#[derive(Clone, Debug)]
pub struct Row<H> {
    id: RowId,
    index: Option<usize>,
    height: f32,
    handle: H,
}

impl<H> Row<H> {
    pub(crate) fn new(id: RowId, handle: H) -> Self {
        Self {
            id,
            index: None,
            height: 0.0,
            handle,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// The bound collection index, `None` while unbound.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_bound(&self) -> bool {
        self.index.is_some()
    }

    /// Height last written for this row.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The caller's visual handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub(crate) fn set_index(&mut self, index: Option<usize>) {
        self.index = index;
    }

    pub(crate) fn set_height(&mut self, height: f32) {
        self.height = height;
    }
}

/// Target of a scroll-to-item request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollTarget {
    /// Scroll so that the given index is fully visible.
    Index(usize),
    /// Scroll to the last item.
    Last,
}

impl ScrollTarget {
    /// Maps a signed index where `-1` means "last item".
    ///
    /// Indexes below `-1` map to `None`.
    pub fn from_index(index: isize) -> Option<Self> {
        match index {
            -1 => Some(Self::Last),
            i if i < -1 => None,
            i => Some(Self::Index(i as usize)),
        }
    }
}

impl From<usize> for ScrollTarget {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}
