use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    mem,
};

use log::{debug, trace};
use rand::Rng;

use crate::depth::Depth;
use crate::error::Error;

/// Arena slot of the sentinel. Every missing child, and the parent of
/// root, point here.
const NIL: usize = 0;

/// Maximum depth a random descent shall walk before picking an entry.
const RANDOM_DEPTH: u8 = 40;

/// Rbt manage a single instance of in-memory index using
/// [red-black][rbt] tree.
///
/// Nodes live in an arena and refer to each other by slot index. Slot
/// zero is a black sentinel that stands for every leaf and for the
/// parent of root, so that rotation and fixup code never deal with
/// missing nodes. Slots released by delete are recycled by later
/// inserts.
///
/// Keys must observe a total order. A comparator that is not a strict
/// weak ordering will not corrupt memory, but the tree invariants
/// checked by [`Rbt::validate`] are no longer guaranteed.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    name: String,
    nodes: Vec<Node<K, V>>, // nodes[NIL] is the sentinel.
    free: Vec<usize>,       // released slots, reused by insert.
    root: usize,
    n_count: usize, // number of entries in the tree.
}

/// Different ways to construct a new Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create an empty instance of Rbt, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Rbt<K, V>
    where
        S: AsRef<str>,
    {
        Rbt::with_capacity(name, 0)
    }

    /// Create an empty instance of Rbt with room for `capacity` entries
    /// before the arena has to grow.
    pub fn with_capacity<S>(name: S, capacity: usize) -> Rbt<K, V>
    where
        S: AsRef<str>,
    {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Rbt {
            name: name.as_ref().to_string(),
            nodes,
            free: Default::default(),
            root: NIL,
            n_count: Default::default(),
        }
    }

    /// Create a new instance of Rbt tree and load it with entries
    /// from `iter`. Note that iterator should return (key, value) tuples,
    /// where key must be ``unique``.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<Rbt<K, V>, Error<K>>
    where
        S: AsRef<str>,
        I: Iterator<Item = (K, V)>,
    {
        let mut rbt = Rbt::with_capacity(name, iter.size_hint().0);
        for (key, value) in iter {
            rbt.create(key, value)?;
        }
        debug!("{}: loaded {} entries", rbt.name, rbt.n_count);
        Ok(rbt)
    }
}

/// Maintenance API.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Rbt instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return quickly with basic statisics, blacks() and depths() are
    /// only computed by [`Rbt::validate`].
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        stats.set_slots(self.nodes.len(), self.free.len());
        stats
    }

    /// Drop all entries, keeping the name.
    pub fn clear(&mut self) {
        debug!("{}: clear {} entries", self.name, self.n_count);
        self.nodes.truncate(1);
        self.nodes[NIL] = Node::sentinel();
        self.free.clear();
        self.root = NIL;
        self.n_count = 0;
    }
}

/// Write operations on Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find_slot(&key) {
            Ok(z) => Some(mem::replace(self.nodes[z].value_mut(), value)),
            Err(y) => {
                self.attach(y, key, value);
                None
            }
        }
    }

    /// Create a new {key, value} entry in the index. If key is already
    /// present return error, leaving the index untouched.
    pub fn create(&mut self, key: K, value: V) -> Result<(), Error<K>> {
        match self.find_slot(&key) {
            Ok(_) => Err(Error::OverwriteKey),
            Err(y) => {
                self.attach(y, key, value);
                Ok(())
            }
        }
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then remove is effectively a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let z = self.find(key)?;

        let (x, removed_color) = if self.left(z) == NIL {
            let x = self.right(z);
            self.transplant(z, x);
            (x, self.color(z))
        } else if self.right(z) == NIL {
            let x = self.left(z);
            self.transplant(z, x);
            (x, self.color(z))
        } else {
            // y, the in-order successor, has no left child.
            let y = self.minimum(self.right(z));
            let (x, y_color) = (self.right(y), self.color(y));
            if self.parent(y) == z {
                self.nodes[x].parent = y;
            } else {
                self.transplant(y, x);
                let zr = self.right(z);
                self.nodes[y].right = zr;
                self.nodes[zr].parent = y;
            }
            self.transplant(z, y);
            let zl = self.left(z);
            self.nodes[y].left = zl;
            self.nodes[zl].parent = y;
            self.nodes[y].color = self.color(z);
            (x, y_color)
        };

        if removed_color == Color::Black {
            self.delete_fixup(x);
        }
        // parent of sentinel is scratch while deleting.
        self.nodes[NIL].parent = NIL;

        self.n_count -= 1;
        let (_, value) = self.release(z);
        Some(value)
    }

    /// Delete key from this instance, return true if an entry was
    /// removed.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Sentinel is black and root is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Every child points back to its parent, and every entry is
    ///   reachable from root.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>> {
        let res = self.do_validate();
        if res.is_err() {
            debug!("{}: validate failed with {} entries", self.name, self.n_count);
        }
        res
    }
}

/// Read operations on Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Get the value for key.
    pub fn search<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).cloned()
    }

    /// Get a reference to the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|n| self.nodes[n].value())
    }

    /// Check whether key is present in this index.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Return the entry with smallest key.
    pub fn first(&self) -> Option<(K, V)> {
        match self.root {
            NIL => None,
            root => Some(self.nodes[self.minimum(root)].to_entry()),
        }
    }

    /// Return the entry with largest key.
    pub fn last(&self) -> Option<(K, V)> {
        match self.root {
            NIL => None,
            root => Some(self.nodes[self.maximum(root)].to_entry()),
        }
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(K, V)> {
        let mut n = match self.root {
            NIL => return None,
            root => root,
        };

        let mut at_depth = rng.gen::<u8>() % RANDOM_DEPTH;
        loop {
            let next = match rng.gen::<bool>() {
                true => self.left(n),
                false => self.right(n),
            };
            if at_depth == 0 || next == NIL {
                break Some(self.nodes[n].to_entry());
            }
            at_depth -= 1;
            n = next;
        }
    }

    /// Return an iterator over all entries in ascending order of key.
    pub fn iter(&self) -> Iter<K, V> {
        let mut iter = Iter {
            rbt: self,
            stack: Vec::with_capacity(self.height_hint()),
        };
        iter.push_left(self.root);
        iter
    }

    /// Return all entries in ascending order of key.
    pub fn inorder(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    #[inline]
    fn left(&self, n: usize) -> usize {
        self.nodes[n].left
    }

    #[inline]
    fn right(&self, n: usize) -> usize {
        self.nodes[n].right
    }

    #[inline]
    fn parent(&self, n: usize) -> usize {
        self.nodes[n].parent
    }

    #[inline]
    fn child(&self, n: usize, side: Side) -> usize {
        match side {
            Side::Left => self.left(n),
            Side::Right => self.right(n),
        }
    }

    #[inline]
    fn color(&self, n: usize) -> Color {
        self.nodes[n].color
    }

    #[inline]
    fn is_red(&self, n: usize) -> bool {
        self.nodes[n].color == Color::Red
    }

    // sentinel stays black, writes to its color are dropped.
    #[inline]
    fn paint(&mut self, n: usize, color: Color) {
        if n == NIL {
            debug_assert!(color == Color::Black, "painting sentinel red");
        } else {
            self.nodes[n].color = color;
        }
    }

    // side of n under its parent, valid for sentinel only while
    // its parent is set by remove().
    #[inline]
    fn side_of(&self, n: usize) -> Side {
        if n == self.left(self.parent(n)) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn minimum(&self, mut n: usize) -> usize {
        while self.left(n) != NIL {
            n = self.left(n);
        }
        n
    }

    fn maximum(&self, mut n: usize) -> usize {
        while self.right(n) != NIL {
            n = self.right(n);
        }
        n
    }

    // 2*log2(n+1) bounds the height of a red-black tree.
    fn height_hint(&self) -> usize {
        let bits = (mem::size_of::<usize>() * 8) as u32;
        2 * (bits - (self.n_count + 1).leading_zeros()) as usize
    }

    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut n = self.root;
        while n != NIL {
            n = match self.nodes[n].key().borrow().cmp(key) {
                Ordering::Less => self.right(n),
                Ordering::Greater => self.left(n),
                Ordering::Equal => return Some(n),
            };
        }
        None
    }

    // Ok(slot) if key is present, else Err(parent) for the new node,
    // parent is NIL for an empty tree.
    fn find_slot(&self, key: &K) -> Result<usize, usize> {
        let (mut y, mut n) = (NIL, self.root);
        while n != NIL {
            y = n;
            n = match key.cmp(self.nodes[n].key()) {
                Ordering::Less => self.left(n),
                Ordering::Greater => self.right(n),
                Ordering::Equal => return Ok(n),
            };
        }
        Err(y)
    }

    fn alloc(&mut self, key: K, value: V) -> usize {
        let node = Node::new(key, value);
        match self.free.pop() {
            Some(n) => {
                self.nodes[n] = node;
                n
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, n: usize) -> (K, V) {
        let node = mem::replace(&mut self.nodes[n], Node::sentinel());
        self.free.push(n);
        node.into_entry()
    }

    fn attach(&mut self, y: usize, key: K, value: V) {
        let less = y != NIL && key.lt(self.nodes[y].key());
        let z = self.alloc(key, value);
        self.nodes[z].parent = y;
        if y == NIL {
            self.root = z;
        } else if less {
            self.nodes[y].left = z;
        } else {
            self.nodes[y].right = z;
        }
        self.n_count += 1;
        self.insert_fixup(z);
    }

    fn insert_fixup(&mut self, mut z: usize) {
        // sentinel is black, root's parent ends the loop.
        while self.is_red(self.parent(z)) {
            let p = self.parent(z);
            let g = self.parent(p);
            let side = self.side_of(p);
            let uncle = self.child(g, side.flip());

            if self.is_red(uncle) {
                trace!("{}: insert_fixup recolor at {}", self.name, g);
                self.paint(p, Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(g, Color::Red);
                z = g;
                continue;
            }

            if z == self.child(p, side.flip()) {
                // inner child, rotate it to the outside.
                z = p;
                self.rotate(z, side);
            }
            let p = self.parent(z);
            let g = self.parent(p);
            trace!("{}: insert_fixup rotate at {}", self.name, g);
            self.paint(p, Color::Black);
            self.paint(g, Color::Red);
            self.rotate(g, side.flip());
        }
        let root = self.root;
        self.paint(root, Color::Black);
    }

    fn delete_fixup(&mut self, mut x: usize) {
        while x != self.root && !self.is_red(x) {
            let p = self.parent(x);
            let side = self.side_of(x);
            let mut w = self.child(p, side.flip());

            if self.is_red(w) {
                trace!("{}: delete_fixup red sibling at {}", self.name, w);
                self.paint(w, Color::Black);
                self.paint(p, Color::Red);
                self.rotate(p, side);
                w = self.child(p, side.flip());
            }

            let (near, far) = (self.child(w, side), self.child(w, side.flip()));
            if !self.is_red(near) && !self.is_red(far) {
                trace!("{}: delete_fixup push deficit to {}", self.name, p);
                self.paint(w, Color::Red);
                x = p;
                continue;
            }

            if !self.is_red(far) {
                self.paint(near, Color::Black);
                self.paint(w, Color::Red);
                self.rotate(w, side.flip());
                w = self.child(p, side.flip());
            }
            trace!("{}: delete_fixup resolve at {}", self.name, p);
            let p_color = self.color(p);
            self.paint(w, p_color);
            self.paint(p, Color::Black);
            let far = self.child(w, side.flip());
            self.paint(far, Color::Black);
            self.rotate(p, side);
            x = self.root;
        }
        self.paint(x, Color::Black);
    }

    // replace subtree at u with subtree at v, v may be the sentinel.
    fn transplant(&mut self, u: usize, v: usize) {
        let up = self.parent(u);
        if u == self.root {
            self.root = v;
        } else if u == self.left(up) {
            self.nodes[up].left = v;
        } else {
            self.nodes[up].right = v;
        }
        self.nodes[v].parent = up;
    }

    //--------- rotation primitives ----------------

    // rotate n down toward `side`, its child on the other side moves up.
    fn rotate(&mut self, n: usize, side: Side) {
        match side {
            Side::Left => self.left_rotate(n),
            Side::Right => self.right_rotate(n),
        }
    }

    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            /     \                   /     \
    //          xl       y                 x       yr
    //                  / \               / \
    //                yl   yr           xl   yl
    //
    fn left_rotate(&mut self, x: usize) {
        let y = self.right(x);
        if y == NIL {
            panic!("left_rotate(): rotating around sentinel ? Call the programmer");
        }
        trace!("{}: left_rotate {}", self.name, x);

        let yl = self.left(y);
        self.nodes[x].right = yl;
        if yl != NIL {
            self.nodes[yl].parent = x;
        }
        let xp = self.parent(x);
        self.nodes[y].parent = xp;
        if x == self.root {
            self.root = y;
        } else if x == self.left(xp) {
            self.nodes[xp].left = y;
        } else {
            self.nodes[xp].right = y;
        }
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    //              (p)                       (p)
    //               |                         |
    //               y                         x
    //              / \                       / \
    //             /   \                     /   \
    //            /     \                   /     \
    //           x       yr               xl       y
    //          / \                               / \
    //        xl   xr                           xr   yr
    //
    fn right_rotate(&mut self, y: usize) {
        let x = self.left(y);
        if x == NIL {
            panic!("right_rotate(): rotating around sentinel ? Call the programmer");
        }
        trace!("{}: right_rotate {}", self.name, y);

        let xr = self.right(x);
        self.nodes[y].left = xr;
        if xr != NIL {
            self.nodes[xr].parent = y;
        }
        let yp = self.parent(y);
        self.nodes[x].parent = yp;
        if y == self.root {
            self.root = x;
        } else if y == self.right(yp) {
            self.nodes[yp].right = x;
        } else {
            self.nodes[yp].left = x;
        }
        self.nodes[x].right = y;
        self.nodes[y].parent = x;
    }

    //--------- validation ----------------

    fn do_validate(&self) -> Result<Stats, Error<K>> {
        let sentinel = &self.nodes[NIL];
        if sentinel.color != Color::Black {
            return Err(Error::SentinelColor);
        }
        let links = (sentinel.left, sentinel.right, sentinel.parent);
        if links != (NIL, NIL, NIL) {
            let err = format!("sentinel links {:?}", links);
            return Err(Error::BrokenLink(err));
        }
        if self.root != NIL {
            if self.is_red(self.root) {
                return Err(Error::RedRoot);
            }
            if self.parent(self.root) != NIL {
                let err = format!("root {} parent {}", self.root, self.parent(self.root));
                return Err(Error::BrokenLink(err));
            }
        }

        let mut stats = self.stats();
        let (mut depths, mut reachable) = (Depth::new(), 0);
        let blacks = self.validate_tree(self.root, false, 0, 0, &mut depths, &mut reachable)?;
        if reachable != self.n_count {
            return Err(Error::CountMismatch(reachable, self.n_count));
        }

        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            match prev {
                Some(pkey) if pkey.ge(key) => {
                    return Err(Error::SortError(pkey.clone(), key.clone()));
                }
                _ => prev = Some(key),
            }
        }

        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }

    fn validate_tree(
        &self,
        n: usize,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        depths: &mut Depth,
        reachable: &mut usize,
    ) -> Result<usize, Error<K>> {
        if n == NIL {
            depths.sample(depth);
            return Ok(nb);
        }
        *reachable += 1;

        let red = self.is_red(n);
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }

        let (left, right) = (self.left(n), self.right(n));
        for &child in [left, right].iter() {
            if child != NIL && self.parent(child) != n {
                let err = format!("child {} of {} has parent {}", child, n, self.parent(child));
                return Err(Error::BrokenLink(err));
            }
        }

        let lblacks = self.validate_tree(left, red, nb, depth + 1, depths, reachable)?;
        let rblacks = self.validate_tree(right, red, nb, depth + 1, depths, reachable)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

// Hooks to break invariants on purpose, they bypass paint().
#[cfg(test)]
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    pub(crate) fn root_key(&self) -> Option<K> {
        match self.root {
            NIL => None,
            root => Some(self.nodes[root].key().clone()),
        }
    }

    pub(crate) fn force_red(&mut self, key: &K) {
        if let Some(n) = self.find(key) {
            self.nodes[n].color = Color::Red;
        }
    }

    pub(crate) fn force_red_sentinel(&mut self) {
        self.nodes[NIL].color = Color::Red;
    }

    pub(crate) fn force_parent(&mut self, key: &K, parent: &K) {
        if let (Some(n), Some(p)) = (self.find(key), self.find(parent)) {
            self.nodes[n].parent = p;
        }
    }
}

/// Iterator over entries of [`Rbt`] in ascending order of key.
pub struct Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    rbt: &'a Rbt<K, V>,
    stack: Vec<usize>, // path of pending ancestors.
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn push_left(&mut self, mut n: usize) {
        while n != NIL {
            self.stack.push(n);
            n = self.rbt.left(n);
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let rbt: &'a Rbt<K, V> = self.rbt;
        let n = self.stack.pop()?;
        self.push_left(rbt.right(n));
        let node = &rbt.nodes[n];
        Some((node.key(), node.value()))
    }
}

impl<'a, K, V> IntoIterator for &'a Rbt<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Node corresponds to a single entry in Rbt instance, or to the
/// sentinel and released slots when entry is None.
#[derive(Clone)]
struct Node<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    entry: Option<(K, V)>,
    color: Color,
    left: usize,   // slot of left child
    right: usize,  // slot of right child
    parent: usize, // slot of parent
}

impl<K, V> Node<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    // new nodes are red, hanging off the sentinel.
    fn new(key: K, value: V) -> Node<K, V> {
        Node {
            entry: Some((key, value)),
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    fn sentinel() -> Node<K, V> {
        Node {
            entry: None,
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    #[inline]
    fn key(&self) -> &K {
        match &self.entry {
            Some((key, _)) => key,
            None => panic!("key(): empty slot in tree, call the programmer"),
        }
    }

    #[inline]
    fn value(&self) -> &V {
        match &self.entry {
            Some((_, value)) => value,
            None => panic!("value(): empty slot in tree, call the programmer"),
        }
    }

    #[inline]
    fn value_mut(&mut self) -> &mut V {
        match &mut self.entry {
            Some((_, value)) => value,
            None => panic!("value_mut(): empty slot in tree, call the programmer"),
        }
    }

    fn to_entry(&self) -> (K, V) {
        (self.key().clone(), self.value().clone())
    }

    fn into_entry(self) -> (K, V) {
        match self.entry {
            Some(entry) => entry,
            None => panic!("into_entry(): empty slot in tree, call the programmer"),
        }
    }
}

/// Statistics on [`Rbt`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Rbt::stats`] method.
/// * To get full statisics via [`Rbt::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    slots: usize,
    free_slots: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            slots: Default::default(),
            free_slots: Default::default(),
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_slots(&mut self, slots: usize, free_slots: usize) {
        self.slots = slots;
        self.free_slots = free_slots;
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Rbt`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Rbt<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types. EG:
    ///
    /// ```
    /// use rbt_index::Rbt;
    /// let mut rbt: Rbt<u64, i128> = Rbt::new("myinstance");
    /// rbt.insert(10, 100);
    ///
    /// // size of key: 8 bytes
    /// // size of value: 16 bytes
    /// assert!(rbt.stats().node_size() > 24);
    /// assert_eq!(rbt.stats().entries(), 1);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of arena slots, including the sentinel and
    /// released slots waiting for reuse.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Return number of released slots waiting for reuse.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.free_slots
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if self.entries > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
