//! Bellman-Ford algorithm for single-source shortest paths.
//!
//! Handles negative edge weights and detects negative cycles reachable from
//! the source.

use tracing::{debug, debug_span, trace};

use crate::error::Result;
use crate::graph::{Graph, Id, IndexType, VertexId, Weight};
use super::result::ShortestPaths;

/// Bellman-Ford single-source shortest paths.
///
/// Relaxes every edge of the graph `|V| - 1` times, then makes one more
/// pass: if any edge can still be relaxed, a negative-weight cycle is
/// reachable from `start`.  That outcome is reported through
/// [`ShortestPaths::has_negative_cycle`](struct.ShortestPaths.html#method.has_negative_cycle)
/// together with one offending cycle, not as an error; distances of vertices
/// reachable through the cycle are then meaningless.
///
/// A pass that relaxes nothing ends the main loop early, since every
/// following pass would find the same fixed point.
///
/// Fails with `Error::UnknownVertex` if `start` is not in the graph.
///
/// Time: O(V * E)
pub fn bellman_ford<L, W, Ix>(graph: &Graph<L, W, Ix>, start: VertexId<Ix>) -> Result<ShortestPaths<W, Ix>>
    where W: Weight, Ix: IndexType
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let _span = debug_span!("bellman_ford", source = start.index(), vertices = n,
                            edges = graph.edge_count()).entered();

    let mut paths = ShortestPaths::new(start, n);
    let mut passes = 0;
    for _ in 1..n {
        passes += 1;
        if ! relax_all(graph, &mut paths) {
            break;
        }
    }

    if graph.edges().any(|e| paths.can_relax(e.source(), e.target(), e.weight())) {
        let cycle = find_negative_cycle(graph, &mut paths);
        debug!(passes, cycle_len = cycle.len(), "negative-weight cycle reachable from source");
        paths.set_negative_cycle(cycle);
    } else {
        debug!(passes, "bellman-ford finished");
    }
    Ok(paths)
}

/// One pass over every edge; returns true if anything was relaxed.
fn relax_all<L, W, Ix>(graph: &Graph<L, W, Ix>, paths: &mut ShortestPaths<W, Ix>) -> bool
    where W: Weight, Ix: IndexType
{
    let mut relaxed = false;
    for e in graph.edges() {
        if paths.relax(e.source(), e.target(), e.weight()) {
            trace!(from = e.source().index(), to = e.target().index(),
                   distance = ?paths.distance_at(e.target()), "relaxed");
            relaxed = true;
        }
    }
    relaxed
}

/// Relax until the predecessor links close into a cycle, and return that
/// cycle.
///
/// Any cycle among predecessor links has negative total weight.  While a
/// negative cycle stays reachable, distances keep dropping, and once they
/// drop below the weight of every simple path the links must contain a
/// cycle.  In practice one or two extra passes suffice; the loop is capped
/// at `|V| + 1` passes and returns an empty witness if the cap is hit.
fn find_negative_cycle<L, W, Ix>(graph: &Graph<L, W, Ix>, paths: &mut ShortestPaths<W, Ix>)
                                 -> Vec<VertexId<Ix>>
    where W: Weight, Ix: IndexType
{
    for _ in 0..=graph.vertex_count() {
        if let Some(cycle) = predecessor_cycle(paths.predecessors()) {
            return cycle;
        }
        relax_all(graph, paths);
    }
    predecessor_cycle(paths.predecessors()).unwrap_or_default()
}

/// Find a cycle in the functional graph `v → predecessors[v]`.
///
/// Returns the cycle's vertices in edge order (each vertex precedes the
/// next on an edge of the original graph).
fn predecessor_cycle<Ix: IndexType>(predecessors: &[Option<VertexId<Ix>>]) -> Option<Vec<VertexId<Ix>>> {
    // walk[v] is 0 for unexplored vertices, else 1 + the walk that reached v.
    let mut walk = vec![0usize; predecessors.len()];

    for start in 0..predecessors.len() {
        if walk[start] != 0 {
            continue;
        }
        let tag = start + 1;
        let mut v = start;
        loop {
            walk[v] = tag;
            match predecessors[v] {
                None => break,
                Some(p) => {
                    let p = p.index();
                    if walk[p] == tag {
                        return Some(collect_cycle(predecessors, p));
                    } else if walk[p] != 0 {
                        break;
                    }
                    v = p;
                }
            }
        }
    }
    None
}

fn collect_cycle<Ix: IndexType>(predecessors: &[Option<VertexId<Ix>>], on_cycle: usize) -> Vec<VertexId<Ix>> {
    let first = VertexId::new(on_cycle);
    let mut cycle = vec![first];
    let mut v = predecessors[on_cycle];
    while let Some(p) = v {
        if p == first {
            break;
        }
        cycle.push(p);
        v = predecessors[p.index()];
    }
    cycle.reverse();
    cycle
}


#[cfg(test)]
mod tests {
    use crate::graph::{Graph, Id, VertexId};
    use super::{bellman_ford, predecessor_cycle};

    fn v(i: usize) -> VertexId<u32> {
        VertexId::new(i)
    }

    #[test]
    fn handles_negative_edges() {
        let mut g = Graph::<u8, f64>::new();
        let vs = g.add_vertices(0..4);
        g.add_edges(&[(0, 1, 4.0), (0, 2, 5.0), (2, 1, -3.0), (1, 3, 2.0)]).unwrap();

        let paths = bellman_ford(&g, vs[0]).unwrap();
        assert!(! paths.has_negative_cycle());
        assert_eq!(&[0.0, 2.0, 5.0, 4.0], paths.distances());
        assert_eq!(Ok(Some(vec![vs[0], vs[2], vs[1], vs[3]])), paths.path_to(vs[3]));
    }

    #[test]
    fn finds_witness_cycle() {
        // 0 → 1 → 2 → 3 → 1, cycle weight 1 + 1 - 3 = -1
        let mut g = Graph::<u8, f64>::new();
        g.add_vertices(0..5);
        g.add_edges(&[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 1, -3.0), (3, 4, 0.0)]).unwrap();

        let paths = bellman_ford(&g, v(0)).unwrap();
        assert!(paths.has_negative_cycle());

        let cycle = paths.negative_cycle().expect("witness cycle");
        assert_eq!(3, cycle.len());
        let mut sorted = cycle.to_vec();
        sorted.sort();
        assert_eq!(vec![v(1), v(2), v(3)], sorted);

        // Consecutive witness vertices are joined by edges, and the total is
        // negative.
        let total: f64 = (0..cycle.len())
            .map(|i| {
                let e = g.find_edge(cycle[i], cycle[(i + 1) % cycle.len()]).expect("cycle edge");
                g[e]
            })
            .sum();
        assert_eq!(-1.0, total);
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let mut g = Graph::<u8, f64>::new();
        g.add_vertices(0..4);
        g.add_edges(&[(0, 1, 2.0), (2, 3, -1.0), (3, 2, -1.0)]).unwrap();

        let paths = bellman_ford(&g, v(0)).unwrap();
        assert!(! paths.has_negative_cycle());
        assert_eq!(&[0.0, 2.0, f64::INFINITY, f64::INFINITY], paths.distances());
    }

    #[test]
    fn negative_self_loop_is_a_cycle() {
        let mut g = Graph::<u8, f64>::new();
        g.add_vertices(0..2);
        g.add_edges(&[(0, 1, 1.0), (1, 1, -0.5)]).unwrap();

        let paths = bellman_ford(&g, v(0)).unwrap();
        assert!(paths.has_negative_cycle());
        assert_eq!(Some(&[v(1)][..]), paths.negative_cycle());
    }

    #[test]
    fn predecessor_cycle_in_functional_graph() {
        let preds = vec![None, Some(v(0)), Some(v(3)), Some(v(2)), Some(v(2))];
        let cycle = predecessor_cycle(&preds).unwrap();
        assert_eq!(2, cycle.len());
        assert!(cycle.contains(&v(2)) && cycle.contains(&v(3)));

        assert_eq!(None, predecessor_cycle(&[None, Some(v(0)), Some(v(1))]));
    }
}
