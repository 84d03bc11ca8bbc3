//! Generational slot pools that recycle entity storage across a run.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Behaviour shared by entities stored in a [`Pool`].
pub trait Pooled {
    /// Parameters used to construct or reinitialise an instance.
    type Params;

    /// Constructs a fresh instance.
    fn spawn(params: Self::Params) -> Self;

    /// Reinitialises a recycled instance in place, keeping its allocations.
    fn reset(&mut self, params: Self::Params);

    /// Reports whether the instance should stay in the active list.
    fn is_alive(&self) -> bool;
}

/// Generational reference to an entity stored in a [`Pool`].
///
/// Releasing the entity bumps the slot generation, so handles captured
/// before the release resolve to `None` afterwards.
pub struct Handle<T> {
    index: u32,
    generation: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    const fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            marker: PhantomData,
        }
    }

    /// Slot index the handle points at.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when the handle was issued.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Handle<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.index, self.generation).cmp(&(other.index, other.generation))
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    active: bool,
    value: Option<T>,
}

/// Arena of reusable entity slots with an ordered active list.
///
/// Every slot is either referenced by the active list or by the free list,
/// never both. The active list preserves acquisition order so iteration is
/// deterministic.
#[derive(Debug)]
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    active: Vec<Handle<T>>,
}

impl<T: Pooled> Pool<T> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Activates an entity, recycling a free slot when one is available.
    pub fn acquire(&mut self, params: T::Params) -> Handle<T> {
        let index = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                match slot.value.as_mut() {
                    Some(value) => value.reset(params),
                    None => slot.value = Some(T::spawn(params)),
                }
                slot.active = true;
                index
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    active: true,
                    value: Some(T::spawn(params)),
                });
                index
            }
        };

        let handle = Handle::new(index, self.slots[index as usize].generation);
        self.active.push(handle);
        handle
    }

    /// Returns the entity to the free list. Stale handles are ignored and
    /// reported as `false`.
    pub fn release(&mut self, handle: Handle<T>) -> bool {
        if !self.contains(handle) {
            return false;
        }
        if let Some(position) = self.active.iter().position(|entry| *entry == handle) {
            let _ = self.active.remove(position);
        }
        self.free_slot(handle.index);
        true
    }

    /// Releases every active entity whose [`Pooled::is_alive`] is false,
    /// invoking `on_dead` on each before it is returned to the free list.
    pub fn reap(&mut self, mut on_dead: impl FnMut(Handle<T>, &T)) {
        let mut kept = 0;
        for read in 0..self.active.len() {
            let handle = self.active[read];
            let slot = &self.slots[handle.index as usize];
            match slot.value.as_ref() {
                Some(value) if value.is_alive() => {
                    self.active[kept] = handle;
                    kept += 1;
                }
                Some(value) => {
                    on_dead(handle, value);
                    self.free_slot(handle.index);
                }
                None => self.free_slot(handle.index),
            }
        }
        self.active.truncate(kept);
    }

    /// Releases every active entity.
    pub fn release_all(&mut self) {
        for read in 0..self.active.len() {
            let index = self.active[read].index;
            self.free_slot(index);
        }
        self.active.clear();
    }

    /// Drops every free instance. Slots stay reserved and are rebuilt by a
    /// later [`Pool::acquire`].
    pub fn destroy_all(&mut self) {
        for index in &self.free {
            self.slots[*index as usize].value = None;
        }
    }

    /// Reports whether the handle refers to a currently active entity.
    #[must_use]
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.slots
            .get(handle.index as usize)
            .map_or(false, |slot| slot.active && slot.generation == handle.generation)
    }

    /// Resolves a handle to its entity.
    #[must_use]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        if !self.contains(handle) {
            return None;
        }
        self.slots[handle.index as usize].value.as_ref()
    }

    /// Resolves a handle to its entity mutably.
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        if !self.contains(handle) {
            return None;
        }
        self.slots[handle.index as usize].value.as_mut()
    }

    /// Handles of active entities in acquisition order.
    #[must_use]
    pub fn handles(&self) -> &[Handle<T>] {
        &self.active
    }

    /// Iterates over active entities in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        self.active.iter().filter_map(move |handle| {
            self.slots[handle.index as usize]
                .value
                .as_ref()
                .map(|value| (*handle, value))
        })
    }

    /// Visits every active entity mutably in acquisition order.
    pub fn for_each_mut(&mut self, mut visit: impl FnMut(Handle<T>, &mut T)) {
        for read in 0..self.active.len() {
            let handle = self.active[read];
            if let Some(value) = self.slots[handle.index as usize].value.as_mut() {
                visit(handle, value);
            }
        }
    }

    /// Number of active entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Reports whether no entity is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of free slots awaiting reuse.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Total number of slots ever allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of free slots that still hold an instance.
    #[must_use]
    pub fn pooled_instances(&self) -> usize {
        self.free
            .iter()
            .filter(|index| self.slots[**index as usize].value.is_some())
            .count()
    }

    fn free_slot(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];
        slot.active = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
    }
}

impl<T: Pooled> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Handle, Pool, Pooled};

    #[derive(Debug)]
    struct Dummy {
        hp: i32,
        spawned: u32,
    }

    impl Pooled for Dummy {
        type Params = i32;

        fn spawn(hp: i32) -> Self {
            Self { hp, spawned: 1 }
        }

        fn reset(&mut self, hp: i32) {
            self.hp = hp;
            self.spawned += 1;
        }

        fn is_alive(&self) -> bool {
            self.hp > 0
        }
    }

    fn assert_partitioned(pool: &Pool<Dummy>) {
        let active: HashSet<u32> = pool.handles().iter().map(Handle::index).collect();
        let free: HashSet<u32> = pool.free.iter().copied().collect();
        assert!(active.is_disjoint(&free), "slot both active and free");
        assert_eq!(active.len(), pool.len(), "duplicate active entry");
        assert_eq!(free.len(), pool.free_len(), "duplicate free entry");
        assert_eq!(active.len() + free.len(), pool.capacity());
    }

    #[test]
    fn released_slot_is_reused_without_growth() {
        let mut pool: Pool<Dummy> = Pool::new();
        let first = pool.acquire(3);
        assert!(pool.release(first));

        let second = pool.acquire(5);
        assert_eq!(second.index(), first.index());
        assert_eq!(pool.capacity(), 1);
        assert_eq!(pool.get(second).map(|dummy| dummy.spawned), Some(2));
    }

    #[test]
    fn stale_handles_resolve_to_none() {
        let mut pool: Pool<Dummy> = Pool::new();
        let stale = pool.acquire(3);
        assert!(pool.release(stale));
        let _fresh = pool.acquire(4);

        assert!(pool.get(stale).is_none());
        assert!(!pool.release(stale));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn reap_releases_dead_in_order() {
        let mut pool: Pool<Dummy> = Pool::new();
        let handles: Vec<_> = (1..=5).map(|hp| pool.acquire(hp)).collect();
        for handle in [handles[1], handles[3]] {
            if let Some(dummy) = pool.get_mut(handle) {
                dummy.hp = 0;
            }
        }

        let mut reaped = Vec::new();
        pool.reap(|handle, _| reaped.push(handle));

        assert_eq!(reaped, vec![handles[1], handles[3]]);
        assert_eq!(pool.handles(), &[handles[0], handles[2], handles[4]]);
        assert_partitioned(&pool);
    }

    #[test]
    fn partition_holds_across_mixed_operations() {
        let mut pool: Pool<Dummy> = Pool::new();
        let mut live = Vec::new();
        for step in 0..60 {
            match step % 4 {
                0 | 1 => live.push(pool.acquire(step + 1)),
                2 => {
                    if let Some(handle) = live.pop() {
                        assert!(pool.release(handle));
                    }
                }
                _ => {
                    if let Some(handle) = live.first().copied() {
                        if let Some(dummy) = pool.get_mut(handle) {
                            dummy.hp = 0;
                        }
                        pool.reap(|_, _| {});
                        let _ = live.remove(0);
                    }
                }
            }
            assert_partitioned(&pool);
        }
    }

    #[test]
    fn destroy_all_drops_free_instances_only() {
        let mut pool: Pool<Dummy> = Pool::new();
        let kept = pool.acquire(2);
        let dropped = pool.acquire(3);
        assert!(pool.release(dropped));
        assert_eq!(pool.pooled_instances(), 1);

        pool.destroy_all();
        assert_eq!(pool.pooled_instances(), 0);
        assert!(pool.get(kept).is_some());

        let rebuilt = pool.acquire(7);
        assert_eq!(pool.get(rebuilt).map(|dummy| dummy.spawned), Some(1));
    }

    #[test]
    fn release_all_empties_active_list() {
        let mut pool = Pool::new();
        for hp in 1..=4 {
            let _ = pool.acquire(hp);
        }
        pool.release_all();
        assert!(pool.is_empty());
        assert_eq!(pool.free_len(), 4);
        assert_partitioned(&pool);
    }
}
