use crate::{Cost, Node, NodeId, Point, PointMap};

/// Which of the two sets a Node currently belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Open,
    Closed,
}

/// Storage for all Nodes of a search.
///
/// Nodes live in a slab and are referenced by their [`NodeId`]. `pos_map` maps every
/// coordinate to the single Node that represents it, so a coordinate is never open and closed
/// at the same time. `open` and `closed` keep their Nodes in insertion order.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Node>,
    pos_map: PointMap<(NodeId, Slot)>,
    open: Vec<NodeId>,
    closed: Vec<NodeId>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    pub fn open_ids(&self) -> &[NodeId] {
        &self.open
    }

    pub fn closed_ids(&self) -> &[NodeId] {
        &self.closed
    }

    pub fn lookup(&self, pos: Point) -> Option<(NodeId, Slot)> {
        self.pos_map.get(&pos).copied()
    }

    #[track_caller]
    pub fn add_open(&mut self, node: Node) -> NodeId {
        let pos = node.pos;
        debug_assert!(
            !self.pos_map.contains_key(&pos),
            "{:?} is already part of the search",
            pos
        );
        let id = self.nodes.insert(node);
        self.pos_map.insert(pos, (id, Slot::Open));
        self.open.push(id);
        id
    }

    /// Drops every open Node. Closed Nodes only ever point at other closed Nodes.
    pub fn clear_open(&mut self) {
        for id in self.open.drain(..) {
            let node = self.nodes.remove(id);
            self.pos_map.remove(&node.pos);
        }
    }

    /// Removes the Node at `pos` from the closed set.
    pub fn forget_closed(&mut self, pos: Point) {
        if let Some((id, Slot::Closed)) = self.lookup(pos) {
            self.pos_map.remove(&pos);
            self.closed.retain(|&other| other != id);
        }
    }

    /// Removes the open Node with the smallest `f` and moves it to the closed set.
    ///
    /// Among Nodes with equal `f`, the one that was opened first wins.
    pub fn close_min_f(&mut self) -> Option<NodeId> {
        let mut best: Option<(usize, Cost)> = None;
        for (index, &id) in self.open.iter().enumerate() {
            let f = self.nodes[id].f;
            if best.map_or(true, |(_, best_f)| f < best_f) {
                best = Some((index, f));
            }
        }
        let (index, _) = best?;
        let id = self.open.remove(index);

        let slot = self
            .pos_map
            .get_mut(&self.nodes[id].pos)
            .expect("open Node missing from pos_map");
        debug_assert_eq!(*slot, (id, Slot::Open));
        slot.1 = Slot::Closed;

        self.closed.push(id);
        Some(id)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.pos_map.clear();
        self.open.clear();
        self.closed.clear();
    }

    #[cfg(test)]
    pub fn is_consistent(&self) -> bool {
        self.pos_map.len() == self.open.len() + self.closed.len()
            && self
                .open
                .iter()
                .all(|&id| self.lookup(self.nodes[id].pos) == Some((id, Slot::Open)))
            && self
                .closed
                .iter()
                .all(|&id| self.lookup(self.nodes[id].pos) == Some((id, Slot::Closed)))
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeId> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeId) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeId> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeId) -> &mut Node {
        &mut self.nodes[index]
    }
}
