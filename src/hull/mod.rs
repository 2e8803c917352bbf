use crate::spatial::predicates::turn_dir;
use crate::spatial::{CapacityError, PointId, PointSet};
use crate::visual::Visualizer;

pub mod ring;


pub use ring::{NodeId, Ring};

// one hull layer: a convex ring plus its running statistics
#[derive(Debug, Clone, Default)]
pub struct Layer {
    ring: Ring,
    max_len: usize,
    mean_len: f64,
    updates: usize,
}

impl Layer {
    fn new() -> Self {
        Layer {
            ring: Ring::new(),
            max_len: 0,
            mean_len: 0.0,
            updates: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    // a ring of fewer than three points is a degenerate polygon
    pub fn is_closed(&self) -> bool {
        self.ring.len() > 2
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn mean_len(&self) -> f64 {
        self.mean_len
    }

    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn points(&self) -> ring::Points<'_> {
        self.ring.iter()
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    fn update(&mut self) {
        // streaming mean over every update, no windowing or decay
        let len = self.ring.len();
        if len > self.max_len {
            self.max_len = len;
        }
        self.mean_len =
            (self.mean_len * self.updates as f64 + len as f64) / (self.updates as f64 + 1.0);
        self.updates += 1;
    }
}

// nested convex hulls of a point set, outermost layer first
// layer k + 1 holds exactly the points displaced out of layer k
#[derive(Debug, Clone)]
pub struct Peeling {
    layers: Vec<Layer>,
}

impl Peeling {
    pub fn new() -> Self {
        Peeling {
            layers: vec![Layer::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, k: usize) -> Option<&Layer> {
        self.layers.get(k)
    }

    pub fn layers(&self) -> impl Iterator<Item = &'_ Layer> {
        self.layers.iter()
    }

    // incorporate one point, starting at the outermost layer
    pub fn insert(&mut self, set: &PointSet, p: PointId) -> Result<(), CapacityError> {
        // explicit work stack in place of call recursion over inward layers;
        // displaced points are pushed in reverse so the first one evicted is
        // fully absorbed inward before the next
        let mut pending = vec![(0, p)];
        while let Some((depth, p)) = pending.pop() {
            if depth == self.layers.len() {
                self.layers.push(Layer::new());
            }
            let displaced = self.insert_at(set, depth, p)?;
            for d in displaced.into_iter().rev() {
                pending.push((depth + 1, d));
            }
        }
        Ok(())
    }

    // discard every layer and re-insert the whole set in order
    pub fn rebuild(&mut self, set: &PointSet) -> Result<(), CapacityError> {
        self.layers.clear();
        self.layers.push(Layer::new());
        for id in set.ids() {
            self.insert(set, id)?;
        }
        Ok(())
    }

    // place p into layer `depth`, returning the points displaced inward
    fn insert_at(
        &mut self,
        set: &PointSet,
        depth: usize,
        p: PointId,
    ) -> Result<Vec<PointId>, CapacityError> {
        let layer = &mut self.layers[depth];

        // one or two points are trivially convex
        if layer.ring.len() < 2 {
            layer.ring.push_head(p)?;
            layer.update();
            return Ok(Vec::new());
        }

        // third point: force the first triangle into the direct orientation
        if layer.ring.len() == 2 {
            let head = layer.ring.push_head(p)?;
            let (next, prev) = (layer.ring.next(head), layer.ring.prev(head));
            let dir = turn_dir(
                set[layer.ring.point(head)],
                set[layer.ring.point(next)],
                set[layer.ring.point(prev)],
            );
            if !dir.is_direct() {
                layer.ring.swap_points(next, prev);
            }
            layer.update();
            return Ok(Vec::new());
        }

        // general case: walk the ring looking for an edge the point can see,
        // starting one step past the head (the skipped edge is covered when
        // the walk wraps around)
        let q = set[p];
        let head = layer.ring.head().expect("ring with points has a head");
        let mut s_i = head;
        let mut s_j = layer.ring.next(s_i);
        let direct = loop {
            s_i = s_j;
            s_j = layer.ring.next(s_j);
            let dir = turn_dir(q, set[layer.ring.point(s_i)], set[layer.ring.point(s_j)]);
            if !dir.is_direct() || s_i == head {
                break dir.is_direct();
            }
        };

        if direct {
            // a full lap of direct triangles: the point is inside this hull
            // and falls through to the layer beneath
            layer.update();
            return Ok(vec![p]);
        }

        // the point lies outside: splice it in between s_i and s_j as the
        // new head
        layer.ring.set_head(s_j);
        let head = layer.ring.push_head(p)?;

        let mut displaced = Vec::new();

        // forward cleanup: evict vertices swallowed on the successor side
        while layer.ring.len() > 2 {
            let s_i = layer.ring.next(head);
            let s_j = layer.ring.next(s_i);
            let dir = turn_dir(
                set[layer.ring.point(head)],
                set[layer.ring.point(s_i)],
                set[layer.ring.point(s_j)],
            );
            if dir.is_direct() {
                break;
            }
            displaced.push(layer.ring.point(s_i));
            layer.ring.remove(s_i);
        }

        // backward cleanup: the same on the predecessor side
        while layer.ring.len() > 2 {
            let s_j = layer.ring.prev(head);
            let s_i = layer.ring.prev(s_j);
            let dir = turn_dir(
                set[layer.ring.point(head)],
                set[layer.ring.point(s_i)],
                set[layer.ring.point(s_j)],
            );
            if dir.is_direct() {
                break;
            }
            displaced.push(layer.ring.point(s_j));
            layer.ring.remove(s_j);
        }

        layer.update();
        Ok(displaced)
    }

    // copy ring contents out for drawing; the renderer never touches the
    // live structure
    pub fn visualize(&self, set: &PointSet) -> Visualizer {
        let mut vis: Visualizer = set.iter().cloned().collect::<Vec<_>>().into();

        let rings = self
            .layers
            .iter()
            .filter(|l| l.is_closed())
            .map(|l| l.points().map(|id| set[id]).collect())
            .collect();
        vis.set_rings(rings);
        vis
    }
}
