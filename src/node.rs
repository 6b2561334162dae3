use crate::{Cost, Point};

/// The Type used to reference a Node inside of an [`Engine`](crate::Engine)
pub type NodeId = usize;

/// A Tile that was visited by the search.
///
/// Nodes are owned by the Engine. `related_to` only names the predecessor, it can be
/// resolved with [`Engine::predecessor`](crate::Engine::predecessor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// the Position of the Node on the Grid
    pub pos: Point,
    /// Cost of the best known Path from the start to this Node
    pub g: Cost,
    /// estimated Cost from this Node to the destination
    pub h: Cost,
    /// `g + h`
    pub f: Cost,
    /// the previous Node on the best known Path, `None` for the start
    pub related_to: Option<NodeId>,
    /// marks the start of the search
    pub is_start: bool,
}

impl Node {
    pub(crate) fn new(pos: Point, related_to: Option<NodeId>) -> Node {
        Node {
            pos,
            g: 0,
            h: 0,
            f: 0,
            related_to,
            is_start: false,
        }
    }

    pub(crate) fn start(pos: Point) -> Node {
        Node {
            is_start: true,
            ..Node::new(pos, None)
        }
    }

    pub(crate) fn set_values(&mut self, g: Cost, h: Cost) {
        self.g = g;
        self.h = h;
        self.f = g + h;
    }
}

#[test]
fn set_values() {
    let mut node = Node::new((1, 2), Some(0));
    node.set_values(24, 30);
    assert_eq!((node.g, node.h, node.f), (24, 30, 54));
    assert!(!node.is_start);
    assert!(Node::start((0, 0)).is_start);
}
