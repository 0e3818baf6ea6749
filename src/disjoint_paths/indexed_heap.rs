// Binary min-heap over vertex ids whose keys live outside the heap. `position` is the
// inverse of `heap`: position[heap[i]] == i for every slot, including the slots past
// `len` that hold the vertices already popped.
#[derive(Default, Debug)]
pub(crate) struct IndexedBinaryHeap {
    heap: Vec<usize>,
    position: Vec<usize>,
    len: usize,
}

impl IndexedBinaryHeap {
    /// Puts every vertex `0..num_vertices` back into the heap in id order. The caller must
    /// then restore heap order, e.g. by giving a single vertex a smaller key than the rest.
    pub fn reset(&mut self, num_vertices: usize) {
        self.heap.clear();
        self.heap.extend(0..num_vertices);
        self.position.clear();
        self.position.extend(0..num_vertices);
        self.len = num_vertices;
    }

    #[allow(dead_code)]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.position[v] < self.len
    }

    #[inline]
    pub fn peek(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.heap[0])
        }
    }

    pub fn pop<Key, F>(&mut self, key: F) -> Option<usize>
    where
        Key: PartialOrd,
        F: Fn(usize) -> Key,
    {
        let top = self.peek()?;
        self.len -= 1;
        self.swap(0, self.len);
        self.sift_down(0, &key);
        Some(top)
    }

    // O(log n)
    pub fn decrease_key<Key, F>(&mut self, v: usize, key: F)
    where
        Key: PartialOrd,
        F: Fn(usize) -> Key,
    {
        assert!(self.contains(v), "vertex {} is no longer in the heap", v);
        self.sift_up(self.position[v], &key);
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = i;
        self.position[self.heap[j]] = j;
    }

    fn sift_up<Key, F>(&mut self, mut i: usize, key: &F)
    where
        Key: PartialOrd,
        F: Fn(usize) -> Key,
    {
        while i > 0 {
            let parent = (i - 1) / 2;
            if key(self.heap[parent]) <= key(self.heap[i]) {
                break;
            }
            self.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down<Key, F>(&mut self, mut i: usize, key: &F)
    where
        Key: PartialOrd,
        F: Fn(usize) -> Key,
    {
        loop {
            let left = 2 * i + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;
            let child = if right < self.len && key(self.heap[right]) < key(self.heap[left]) { right } else { left };
            if key(self.heap[child]) < key(self.heap[i]) {
                self.swap(child, i);
                i = child;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.heap.iter().enumerate().all(|(i, &v)| self.position[v] == i)
    }
}
