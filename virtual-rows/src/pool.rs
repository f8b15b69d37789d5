use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Default upper bound on idle items retained by a [`RecyclingPool`].
pub const DEFAULT_POOL_LIMIT: usize = 10_000;

/// Constructs a fresh pooled item on a pool miss.
pub type CreateFn<T> = Box<dyn FnMut() -> T>;

/// Clears a recycled item before it is handed out again.
pub type ResetFn<T> = Box<dyn FnMut(&mut T)>;

/// A node of the pool's free list.
///
/// The pool keeps its nodes in a contiguous arena and links them by slot index, so pushing or
/// popping an item never allocates once the arena has reached its high-water mark. A slot is
/// either occupied (part of the idle chain) or vacant (part of the vacant chain, waiting for
/// the next `release`).
#[derive(Clone, Debug)]
pub struct LinkedSlot<T> {
    value: Option<T>,
    next: Option<usize>,
}

impl<T> LinkedSlot<T> {
    fn occupied(value: T, next: Option<usize>) -> Self {
        Self {
            value: Some(value),
            next,
        }
    }

    /// The pooled payload, or `None` for a vacant slot.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Slot index of the next node in the same chain.
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn is_occupied(&self) -> bool {
        self.value.is_some()
    }
}

/// A bounded free-list allocator for reusable items.
///
/// - `acquire` pops the most recently released item and passes it through the reset function,
///   or constructs a fresh one with the factory on a miss.
/// - `release` pushes the item onto the idle chain while `count < limit`; past the limit the
///   item is dropped.
///
/// `limit` is a retention cap, not a capacity guarantee: callers must not assume `acquire`
/// returns a recycled item.
pub struct RecyclingPool<T> {
    create: CreateFn<T>,
    reset: Option<ResetFn<T>>,
    limit: usize,

    slots: Vec<LinkedSlot<T>>,
    head: Option<usize>,
    vacant: Option<usize>,
    count: usize,

    created: u64,
    recycled: u64,
}

impl<T> RecyclingPool<T> {
    /// Creates a pool with a factory, a reset function and a retention limit.
    pub fn new(
        create: impl FnMut() -> T + 'static,
        reset: impl FnMut(&mut T) + 'static,
        limit: usize,
    ) -> Self {
        Self::from_parts(Box::new(create), Some(Box::new(reset)), limit)
    }

    /// Creates a pool whose recycled items are handed out as-is.
    pub fn with_limit(create: impl FnMut() -> T + 'static, limit: usize) -> Self {
        Self::from_parts(Box::new(create), None, limit)
    }

    pub fn from_parts(create: CreateFn<T>, reset: Option<ResetFn<T>>, limit: usize) -> Self {
        debug_assert!(limit > 0, "RecyclingPool: limit must be positive");
        Self {
            create,
            reset,
            limit,
            slots: Vec::new(),
            head: None,
            vacant: None,
            count: 0,
            created: 0,
            recycled: 0,
        }
    }

    /// Number of idle items currently retained.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of items the factory has constructed.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Number of `acquire` calls served from the idle chain.
    pub fn recycled(&self) -> u64 {
        self.recycled
    }

    /// Takes an item from the pool, constructing one if the pool is empty.
    ///
    /// A panicking factory unwinds through this call and leaves the pool untouched.
    pub fn acquire(&mut self) -> T {
        if let Some(mut item) = self.pop_idle() {
            self.recycled = self.recycled.saturating_add(1);
            if let Some(reset) = self.reset.as_mut() {
                reset(&mut item);
            }
            vtrace!(count = self.count, "RecyclingPool::acquire hit");
            return item;
        }

        let item = (self.create)();
        self.created = self.created.saturating_add(1);
        vtrace!(created = self.created, "RecyclingPool::acquire miss");
        item
    }

    /// Returns an item to the pool.
    ///
    /// Returns `false` when the pool is at its limit and the item was dropped instead.
    pub fn release(&mut self, item: T) -> bool {
        if self.count >= self.limit {
            vtrace!(limit = self.limit, "RecyclingPool::release dropped item at limit");
            return false;
        }

        let next = self.head;
        let slot = match self.vacant {
            Some(slot) => {
                let node = &mut self.slots[slot];
                self.vacant = node.next;
                *node = LinkedSlot::occupied(item, next);
                slot
            }
            None => {
                self.slots.push(LinkedSlot::occupied(item, next));
                self.slots.len() - 1
            }
        };
        self.head = Some(slot);
        self.count += 1;
        true
    }

    /// Drops every idle item without running any per-item teardown.
    pub fn clear(&mut self) {
        vdebug!(count = self.count, "RecyclingPool::clear");
        self.slots.clear();
        self.head = None;
        self.vacant = None;
        self.count = 0;
    }

    /// Iterates over the idle items, most recently released first.
    pub fn iter(&self) -> PoolIter<'_, T> {
        PoolIter {
            slots: &self.slots,
            cursor: self.head,
        }
    }

    fn pop_idle(&mut self) -> Option<T> {
        let slot = self.head?;
        let node = &mut self.slots[slot];
        let item = node.value.take();
        self.head = node.next;
        node.next = self.vacant;
        self.vacant = Some(slot);
        self.count = self.count.saturating_sub(1);
        debug_assert!(
            item.is_some(),
            "RecyclingPool: idle chain points at a vacant slot ({slot})"
        );
        item
    }
}

impl<T: Default + 'static> RecyclingPool<T> {
    /// A pool that constructs items with `T::default()` and resets recycled items to it.
    pub fn defaulted(limit: usize) -> Self {
        Self::new(T::default, |item: &mut T| *item = T::default(), limit)
    }
}

impl<T> fmt::Debug for RecyclingPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclingPool")
            .field("count", &self.count)
            .field("limit", &self.limit)
            .field("created", &self.created)
            .field("recycled", &self.recycled)
            .finish_non_exhaustive()
    }
}

/// Iterator over a pool's idle chain. See [`RecyclingPool::iter`].
pub struct PoolIter<'a, T> {
    slots: &'a [LinkedSlot<T>],
    cursor: Option<usize>,
}

impl<'a, T> Iterator for PoolIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.slots[self.cursor?];
        self.cursor = node.next;
        node.value()
    }
}
