//! Tests for the graph store: insertion, validation, and adjacency lookup.

use wgraph::graph::{Graph, Id, VertexId};
use wgraph::Error;

use super::init_logging;

fn v(i: usize) -> VertexId<u32> {
    VertexId::new(i)
}

#[test]
fn adjacency_is_cross_referenced() {
    init_logging();
    let mut g = Graph::<char, f64>::new();
    let vs = g.add_vertices("abcd".chars());
    let ids = g.add_edges(&[(0, 1, 1.0), (0, 2, 2.0), (1, 2, 3.0), (2, 2, 0.5), (3, 0, 4.0)]).unwrap();

    // Every edge shows up once in its source's outgoing list and once in its
    // target's incoming list.
    for e in g.edges() {
        panic_unless_eq!(1, g.out_edges(e.source()).unwrap().filter(|o| o.id() == e.id()).count(),
                         "edge {} in outgoing list of {}", e.id(), e.source());
        panic_unless_eq!(1, g.in_edges(e.target()).unwrap().filter(|i| i.id() == e.id()).count(),
                         "edge {} in incoming list of {}", e.id(), e.target());
    }

    let out: Vec<_> = g.successors(vs[0]).unwrap().collect();
    assert_eq!(vec![vs[1], vs[2]], out);
    assert_eq!(3, g.in_edges(vs[2]).unwrap().count());
    assert_eq!(Some(ids[3]), g.find_edge(vs[2], vs[2]));
    assert_eq!(Some(&'c'), g.label(vs[2]));
    assert_eq!(Some(vs[3]), g.find_vertex(&'d'));
    assert_eq!(4.0, g[ids[4]]);
    assert_eq!('a', g[vs[0]]);
}

#[test]
fn rejected_edges_leave_graph_unchanged() {
    init_logging();
    let mut g = Graph::<(), f64>::new();
    g.add_vertices(vec![(); 3]);
    g.add_edge(v(0), v(1), 1.0).unwrap();

    assert_eq!(Err(Error::DuplicateEdge{from: 0, to: 1}), g.add_edge(v(0), v(1), 7.0));
    assert_eq!(Err(Error::UnknownVertex(3)), g.add_edge(v(0), v(3), 1.0));
    assert_eq!(Err(Error::UnknownVertex(9)), g.add_edge(v(9), v(0), 1.0));
    match g.add_edge(v(1), v(2), f64::NAN) {
        Err(Error::NonFiniteWeight(w)) => assert!(w.is_nan()),
        other => panic!("expected NonFiniteWeight, got {:?}", other)
    }
    assert_eq!(Err(Error::NonFiniteWeight(f64::INFINITY)), g.add_edge(v(1), v(2), f64::INFINITY));

    // One half already exists, so neither half is inserted.
    assert_eq!(Err(Error::DuplicateEdge{from: 0, to: 1}), g.add_undirected_edge(v(0), v(1), 2.0));
    assert_eq!(Err(Error::DuplicateEdge{from: 0, to: 1}), g.add_undirected_edge(v(1), v(0), 2.0));

    assert_eq!(1, g.edge_count());
    assert_eq!(0, g.in_edges(v(2)).unwrap().count());
    assert_eq!(1, g.out_edges(v(0)).unwrap().count());
}

#[test]
fn undirected_edges_are_reciprocal_pairs() {
    let mut g = Graph::<(), f32>::new();
    g.add_vertices(vec![(); 2]);
    let (ab, ba) = g.add_undirected_edge(v(0), v(1), 2.5).unwrap();
    assert_ne!(ab, ba);
    assert_eq!(Some(ab), g.find_edge(v(0), v(1)));
    assert_eq!(Some(ba), g.find_edge(v(1), v(0)));
    assert_eq!(g[ab], g[ba]);

    let (l1, l2) = g.add_undirected_edge(v(1), v(1), 1.0).unwrap();
    assert_eq!(l1, l2);
    assert_eq!(3, g.edge_count());
}

#[test]
fn vertex_enumeration_is_stable() {
    let mut g = Graph::<u32, f64, u16>::with_capacity(8, 0);
    for i in 0..8 {
        assert_eq!(i as usize, g.add_vertex(i * 10).index());
    }
    let ids: Vec<usize> = g.vertices().map(|v| v.index()).collect();
    assert_eq!((0..8).collect::<Vec<_>>(), ids);
    assert_eq!(8, g.vertices().len());
    assert!(! g.contains_vertex(VertexId::new(8)));
    assert_eq!(None, g.label(VertexId::new(8)));
}
