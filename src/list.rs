//! Position-addressable doubly-linked list of integers.
//!
//! Nodes live in a slab of slots and link to each other through stable
//! `usize` indices rather than pointers, so splicing a node out is a single
//! well-defined release point: the slot is vacated the moment the node
//! leaves the chain, and dropping or rebuilding the slab releases every
//! node at once.
//!
//! # Complexity
//!
//! - `insert_start` / `delete_start`: O(1)
//! - `insert_end` / `insert_pos` / `find` / `delete_end` / `delete_pos`: O(n)
//!
//! The tail is found by traversal; only the head index is cached.

/// Outcome of a list operation.
///
/// Every operation that cannot proceed degrades to a no-op rather than an
/// error, but callers that care (tests, mostly) can still tell which case
/// occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    /// The operation took effect.
    Done,
    /// The list was empty; nothing happened.
    EmptyList,
    /// The requested position does not exist; nothing happened.
    NotFound,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    value: i64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A slab slot. Vacant slots form a free list threaded through `next_free`.
#[derive(Debug)]
enum Entry {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// A doubly-linked list of `i64` values, 0-indexed from the head.
#[derive(Debug)]
pub struct List {
    entries: Vec<Entry>,
    free: Option<usize>,
    head: Option<usize>,
    len: usize,
}

impl List {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: None,
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Replaces any existing list with a single-node list holding `value`.
    ///
    /// The slab is rebuilt, so every node of the prior chain is released
    /// here, not merely abandoned.
    pub fn create(&mut self, value: i64) {
        *self = Self::new();
        let idx = self.alloc(Node {
            value,
            prev: None,
            next: None,
        });
        self.head = Some(idx);
    }

    /// Links a new node in front of the current head. O(1).
    ///
    /// No-op on an empty list; `create` establishes the first node.
    pub fn insert_start(&mut self, value: i64) -> OpStatus {
        let Some(old_head) = self.head else {
            return OpStatus::EmptyList;
        };
        let new_head = self.alloc(Node {
            value,
            prev: None,
            next: Some(old_head),
        });
        self.node_mut(old_head).prev = Some(new_head);
        self.head = Some(new_head);
        OpStatus::Done
    }

    /// Walks to the tail and appends a new node after it. O(n).
    pub fn insert_end(&mut self, value: i64) -> OpStatus {
        let Some(tail) = self.tail_index() else {
            return OpStatus::EmptyList;
        };
        let new_tail = self.alloc(Node {
            value,
            prev: Some(tail),
            next: None,
        });
        self.node_mut(tail).next = Some(new_tail);
        OpStatus::Done
    }

    /// Inserts `value` immediately before the node currently at `index`.
    ///
    /// `index == 0` behaves as [`insert_start`](Self::insert_start). An index
    /// past the tail degrades to an append rather than an error.
    pub fn insert_pos(&mut self, value: i64, index: usize) -> OpStatus {
        if self.head.is_none() {
            return OpStatus::EmptyList;
        }
        if index == 0 {
            return self.insert_start(value);
        }
        let Some(at) = self.walk(index) else {
            return self.insert_end(value);
        };
        let before = self
            .node(at)
            .prev
            .expect("Invariant broken: non-head node missing prev link");
        let new_node = self.alloc(Node {
            value,
            prev: Some(before),
            next: Some(at),
        });
        self.node_mut(before).next = Some(new_node);
        self.node_mut(at).prev = Some(new_node);
        OpStatus::Done
    }

    /// Returns the value at `index`, or `None` if the list is empty or the
    /// chain ends before `index` is reached. O(n).
    pub fn find(&self, index: usize) -> Option<i64> {
        self.walk(index).map(|idx| self.node(idx).value)
    }

    /// Removes the head node. Removing the only node empties the list.
    pub fn delete_start(&mut self) -> OpStatus {
        let Some(old_head) = self.head else {
            return OpStatus::EmptyList;
        };
        let next = self.node(old_head).next;
        if let Some(next) = next {
            self.node_mut(next).prev = None;
        }
        self.head = next;
        self.release(old_head);
        OpStatus::Done
    }

    /// Walks to the tail and removes it. O(n).
    pub fn delete_end(&mut self) -> OpStatus {
        let Some(tail) = self.tail_index() else {
            return OpStatus::EmptyList;
        };
        let prev = self.node(tail).prev;
        match prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        self.release(tail);
        OpStatus::Done
    }

    /// Splices out the node at `index` by relinking its neighbors.
    ///
    /// Head and tail removal fall out of the two neighbor checks; no
    /// special-casing. A position past the tail is a silent no-op.
    pub fn delete_pos(&mut self, index: usize) -> OpStatus {
        if self.head.is_none() {
            return OpStatus::EmptyList;
        }
        let Some(at) = self.walk(index) else {
            return OpStatus::NotFound;
        };
        let Node { prev, next, .. } = *self.node(at);
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        if let Some(next) = next {
            self.node_mut(next).prev = prev;
        }
        self.release(at);
        OpStatus::Done
    }

    /// Renders the head-to-tail snapshot framed by delimiter lines, or
    /// `None` if the list is empty.
    pub fn render(&self) -> Option<String> {
        if self.head.is_none() {
            return None;
        }
        let mut out = String::from("\n//-----------------------\n// Values: ");
        for value in self.values() {
            out.push_str(&format!(" {} ", value));
        }
        out.push_str("\n//-----------------------\n");
        Some(out)
    }

    /// All values from head to tail.
    pub fn values(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(idx) = current {
            let node = self.node(idx);
            out.push(node.value);
            current = node.next;
        }
        out
    }

    /// Index of the tail slot, found by traversal from the head.
    fn tail_index(&self) -> Option<usize> {
        let mut current = self.head?;
        while let Some(next) = self.node(current).next {
            current = next;
        }
        Some(current)
    }

    /// Walks `index` steps forward from the head. Returns `None` if the
    /// list is empty or the chain ends before `index` is reached.
    fn walk(&self, index: usize) -> Option<usize> {
        let mut current = self.head?;
        for _ in 0..index {
            current = self.node(current).next?;
        }
        Some(current)
    }

    /// Claims a slot for `node`, reusing a vacant one when available.
    fn alloc(&mut self, node: Node) -> usize {
        self.len += 1;
        match self.free {
            Some(idx) => {
                let Entry::Vacant { next_free } = &self.entries[idx] else {
                    panic!("Invariant broken: free list points at occupied slot {idx}");
                };
                self.free = *next_free;
                self.entries[idx] = Entry::Occupied(node);
                idx
            }
            None => {
                self.entries.push(Entry::Occupied(node));
                self.entries.len() - 1
            }
        }
    }

    /// Vacates a slot at the moment its node leaves the chain.
    fn release(&mut self, index: usize) {
        assert!(
            matches!(self.entries[index], Entry::Occupied(_)),
            "Invariant broken: releasing vacant slot {index}"
        );
        self.entries[index] = Entry::Vacant {
            next_free: self.free,
        };
        self.free = Some(index);
        self.len -= 1;
    }

    fn node(&self, index: usize) -> &Node {
        match &self.entries[index] {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => {
                panic!("Invariant broken: link points at vacant slot {index}")
            }
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        match &mut self.entries[index] {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => {
                panic!("Invariant broken: link points at vacant slot {index}")
            }
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}
