//! Array-backed binary heap ordered by a caller-supplied comparator.
//!
//! Besides the usual push/pop/peek, both heaps support re-positioning an element whose
//! ordering key changed while it was enqueued ([PriorityQueue::update_priority]). [Heap]
//! finds the element with a linear scan, which makes the update O(n); [IndexedHeap] keeps
//! an index from element to slot and updates in O(log n).
//!
//! Slots are 0-based: the parent of `i` is `(i - 1) / 2`, its children `2i + 1` and `2i + 2`.
use core::fmt;
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

pub trait PriorityQueue<T> {
    /// Inserts an element.
    fn push(&mut self, item: T);
    /// Removes and returns the top element, [None] when empty.
    fn pop(&mut self) -> Option<T>;
    /// The top element without removing it, [None] when empty.
    fn peek(&self) -> Option<&T>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Replaces the enqueued element equal to `item` with `item` and restores the heap order
    /// around it. Returns false if no equal element is enqueued.
    fn update_priority(&mut self, item: T) -> bool;
}

/// A min-heap under `comparator`, or a max-heap when built with [Heap::new_max].
#[derive(Clone)]
pub struct Heap<T, F = fn(&T, &T) -> Ordering> {
    items: Vec<T>,
    comparator: F,
    max_heap: bool,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(comparator: F) -> Heap<T, F> {
        Heap {
            items: Vec::new(),
            comparator,
            max_heap: false,
        }
    }

    /// A heap that yields the largest element under `comparator` first.
    pub fn new_max(comparator: F) -> Heap<T, F> {
        Heap {
            items: Vec::new(),
            comparator,
            max_heap: true,
        }
    }

    pub fn is_max_heap(&self) -> bool {
        self.max_heap
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ord = (self.comparator)(a, b);
        if self.max_heap {
            ord.reverse()
        } else {
            ord
        }
    }

    /// Checks that no element ranks before its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len())
            .all(|i| self.compare(&self.items[i], &self.items[(i - 1) / 2]) != Ordering::Less)
    }

    /// The enqueued elements in slot order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drains the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop_placed(&mut |_, _| {}) {
            sorted.push(item);
        }
        sorted
    }

    // The `placed` callbacks below are told every slot an element lands in, which is how
    // IndexedHeap keeps its slot index current.

    fn sift_up<P>(&mut self, mut ix: usize, placed: &mut P) -> usize
    where
        P: FnMut(&T, usize),
    {
        while ix > 0 {
            let parent = (ix - 1) / 2;
            if self.compare(&self.items[ix], &self.items[parent]) != Ordering::Less {
                break;
            }
            self.items.swap(ix, parent);
            placed(&self.items[ix], ix);
            ix = parent;
        }
        placed(&self.items[ix], ix);
        ix
    }

    fn sift_down<P>(&mut self, mut ix: usize, placed: &mut P) -> usize
    where
        P: FnMut(&T, usize),
    {
        let len = self.items.len();
        loop {
            let left = 2 * ix + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && self.compare(&self.items[right], &self.items[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if self.compare(&self.items[child], &self.items[ix]) != Ordering::Less {
                break;
            }
            self.items.swap(ix, child);
            placed(&self.items[ix], ix);
            ix = child;
        }
        placed(&self.items[ix], ix);
        ix
    }

    fn resift<P>(&mut self, ix: usize, placed: &mut P)
    where
        P: FnMut(&T, usize),
    {
        let ix = self.sift_up(ix, placed);
        self.sift_down(ix, placed);
    }

    fn push_placed<P>(&mut self, item: T, placed: &mut P)
    where
        P: FnMut(&T, usize),
    {
        self.items.push(item);
        self.sift_up(self.items.len() - 1, placed);
    }

    fn pop_placed<P>(&mut self, placed: &mut P) -> Option<T>
    where
        P: FnMut(&T, usize),
    {
        if self.items.is_empty() {
            return None;
        }
        // Moves the last element into the root slot.
        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0, placed);
        }
        Some(top)
    }
}

impl<T: Ord> Heap<T> {
    /// A min-heap under the natural order of `T`.
    pub fn natural() -> Heap<T> {
        Self::new(T::cmp)
    }

    /// A max-heap under the natural order of `T`.
    pub fn natural_max() -> Heap<T> {
        Self::new_max(T::cmp)
    }
}

impl<T, F> PriorityQueue<T> for Heap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> Ordering,
{
    fn push(&mut self, item: T) {
        self.push_placed(item, &mut |_, _| {});
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_placed(&mut |_, _| {})
    }
    fn peek(&self) -> Option<&T> {
        self.items.first()
    }
    fn len(&self) -> usize {
        self.items.len()
    }
    /// Linear scan for the element, then a re-sift in whichever direction is needed.
    fn update_priority(&mut self, item: T) -> bool {
        match self.items.iter().position(|x| *x == item) {
            Some(ix) => {
                self.items[ix] = item;
                self.resift(ix, &mut |_, _| {});
                true
            }
            None => false,
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Heap")
            .field("items", &self.items)
            .field("max_heap", &self.max_heap)
            .finish()
    }
}

/// A [Heap] that also tracks the slot of every element, so [update_priority] does not scan.
/// Elements must be unique under [Eq]; pushing an element equal to one already enqueued
/// updates that element instead.
///
/// [update_priority]: PriorityQueue::update_priority
#[derive(Clone)]
pub struct IndexedHeap<T, F = fn(&T, &T) -> Ordering> {
    heap: Heap<T, F>,
    slots: FxHashMap<T, usize>,
}

impl<T, F> IndexedHeap<T, F>
where
    T: Hash + Eq + Clone,
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(comparator: F) -> IndexedHeap<T, F> {
        IndexedHeap {
            heap: Heap::new(comparator),
            slots: FxHashMap::default(),
        }
    }

    pub fn new_max(comparator: F) -> IndexedHeap<T, F> {
        IndexedHeap {
            heap: Heap::new_max(comparator),
            slots: FxHashMap::default(),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Checks the heap order and that every element sits in the slot recorded for it.
    pub fn is_valid(&self) -> bool {
        self.heap.is_valid()
            && self.slots.len() == self.heap.items.len()
            && self
                .heap
                .items
                .iter()
                .enumerate()
                .all(|(ix, item)| self.slots.get(item) == Some(&ix))
    }
}

impl<T: Ord + Hash + Clone> IndexedHeap<T> {
    pub fn natural() -> IndexedHeap<T> {
        Self::new(T::cmp)
    }
}

impl<T, F> PriorityQueue<T> for IndexedHeap<T, F>
where
    T: Hash + Eq + Clone,
    F: Fn(&T, &T) -> Ordering,
{
    fn push(&mut self, item: T) {
        if self.slots.contains_key(&item) {
            self.update_priority(item);
            return;
        }
        let slots = &mut self.slots;
        self.heap.push_placed(item, &mut |item, ix| {
            slots.insert(item.clone(), ix);
        });
    }
    fn pop(&mut self) -> Option<T> {
        let slots = &mut self.slots;
        let top = self.heap.pop_placed(&mut |item, ix| {
            slots.insert(item.clone(), ix);
        })?;
        self.slots.remove(&top);
        Some(top)
    }
    fn peek(&self) -> Option<&T> {
        self.heap.items.first()
    }
    fn len(&self) -> usize {
        self.heap.items.len()
    }
    fn update_priority(&mut self, item: T) -> bool {
        let Some(&ix) = self.slots.get(&item) else {
            return false;
        };
        self.heap.items[ix] = item;
        let slots = &mut self.slots;
        self.heap.resift(ix, &mut |item, ix| {
            slots.insert(item.clone(), ix);
        });
        true
    }
}

impl<T: fmt::Debug, F> fmt::Debug for IndexedHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("heap", &self.heap)
            .field("slots", &self.slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    /// An element whose identity is `id` and whose rank is `key`, like a search cell whose
    /// cost changes while it is enqueued.
    #[derive(Clone, Copy, Debug, Eq)]
    struct Keyed {
        id: u32,
        key: i64,
    }
    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }
    impl Hash for Keyed {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }
    fn by_key(a: &Keyed, b: &Keyed) -> Ordering {
        a.key.cmp(&b.key)
    }

    #[test]
    fn empty_heap_yields_nothing() {
        let mut heap: Heap<i32> = Heap::natural();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert!(!heap.update_priority(3));
        let mut indexed: IndexedHeap<i32> = IndexedHeap::natural();
        assert_eq!(indexed.pop(), None);
        assert_eq!(indexed.peek(), None);
    }

    #[test]
    fn offer_then_poll_in_order() {
        let mut heap = Heap::new(|a: &i32, b: &i32| a.cmp(b));
        for i in (0..5).rev() {
            heap.push(i);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&0));
        assert_eq!(heap.len(), 5);
        for i in 0..5 {
            assert_eq!(heap.pop(), Some(i));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn extraction_matches_reference_sort() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in [100, 257, 1000] {
            let mut nums = (0..n).map(|_| rng.gen_range(0..300)).collect::<Vec<i32>>();
            let mut heap = Heap::natural();
            for &x in &nums {
                heap.push(x);
                assert!(heap.is_valid());
            }
            nums.sort();
            assert_eq!(heap.into_sorted_vec(), nums);
        }
    }

    #[test]
    fn max_heap_reverses_min_heap_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let nums = (0..500).map(|_| rng.gen_range(-50..50)).collect::<Vec<i32>>();
        let mut min = Heap::natural();
        let mut max = Heap::natural_max();
        for &x in &nums {
            min.push(x);
            max.push(x);
        }
        assert!(max.is_max_heap());
        assert_eq!(max.peek(), nums.iter().max());
        let mut min_order = min.into_sorted_vec();
        min_order.reverse();
        assert_eq!(max.into_sorted_vec(), min_order);
    }

    #[test]
    fn update_priority_moves_both_ways() {
        let mut heap = Heap::new(by_key);
        for id in 0..10 {
            heap.push(Keyed {
                id,
                key: 10 * id as i64,
            });
        }
        assert!(heap.update_priority(Keyed { id: 7, key: -1 }));
        assert!(heap.is_valid());
        assert_eq!(heap.peek().map(|k| k.id), Some(7));
        assert!(heap.update_priority(Keyed { id: 7, key: 1000 }));
        assert!(heap.update_priority(Keyed { id: 0, key: 55 }));
        assert!(heap.is_valid());
        assert!(!heap.update_priority(Keyed { id: 42, key: 0 }));
        let order = heap.into_sorted_vec().iter().map(|k| k.id).collect::<Vec<u32>>();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 0, 6, 8, 9, 7]);
    }

    /// Random interleavings of push, pop and update keep both heaps valid and in agreement.
    #[test]
    fn fuzz_interleaved_operations() {
        const N_OPS: usize = 5000;
        let mut rng = StdRng::seed_from_u64(2);
        let cmp: fn(&Keyed, &Keyed) -> Ordering = by_key;
        for max_heap in [false, true] {
            let (mut plain, mut indexed) = if max_heap {
                (Heap::new_max(cmp), IndexedHeap::new_max(cmp))
            } else {
                (Heap::new(cmp), IndexedHeap::new(cmp))
            };
            let mut live: Vec<u32> = Vec::new();
            let mut next_id = 0;
            for _ in 0..N_OPS {
                match rng.gen_range(0..10) {
                    0..=4 => {
                        let item = Keyed {
                            id: next_id,
                            key: rng.gen_range(0..1000),
                        };
                        next_id += 1;
                        live.push(item.id);
                        plain.push(item);
                        indexed.push(item);
                    }
                    5..=7 if !live.is_empty() => {
                        let id = live[rng.gen_range(0..live.len())];
                        let item = Keyed {
                            id,
                            key: rng.gen_range(0..1000),
                        };
                        assert!(plain.update_priority(item));
                        assert!(indexed.update_priority(item));
                    }
                    _ => {
                        let a = plain.pop();
                        let b = indexed.pop();
                        assert_eq!(a.map(|k| (k.id, k.key)), b.map(|k| (k.id, k.key)));
                        if let Some(k) = a {
                            live.retain(|&id| id != k.id);
                        }
                    }
                }
                assert!(plain.is_valid());
                assert!(indexed.is_valid());
                assert_eq!(plain.len(), live.len());
                assert_eq!(indexed.len(), live.len());
            }
        }
    }

    #[test]
    fn indexed_push_of_present_element_updates_it() {
        let mut heap = IndexedHeap::new(by_key);
        heap.push(Keyed { id: 1, key: 5 });
        heap.push(Keyed { id: 2, key: 3 });
        heap.push(Keyed { id: 1, key: 1 });
        assert_eq!(heap.len(), 2);
        assert!(heap.contains(&Keyed { id: 1, key: 0 }));
        assert_eq!(heap.pop().map(|k| k.key), Some(1));
        assert!(!heap.contains(&Keyed { id: 1, key: 0 }));
    }

    #[test]
    fn million_elements() {
        const N: usize = 1_000_000;
        let mut rng = StdRng::seed_from_u64(3);
        let mut heap = Heap::natural();
        for _ in 0..N {
            heap.push(rng.gen_range(0..i32::MAX));
        }
        assert_eq!(heap.len(), N);
        let mut last = i32::MIN;
        while let Some(x) = heap.pop() {
            assert!(x >= last);
            last = x;
        }
    }
}
