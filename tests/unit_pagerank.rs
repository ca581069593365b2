// tests/unit_pagerank.rs
//! Behavioural properties of the ranking engine and selector.

use linkrank_core::graph::GraphIndex;
use linkrank_core::rank::{self, top_k, Outcome, PageRankEngine, PageRankParams};

fn web() -> GraphIndex {
    let mut g = GraphIndex::new();
    for (s, t) in [
        ("home", "about"),
        ("home", "blog"),
        ("blog", "post-1"),
        ("blog", "post-2"),
        ("post-1", "home"),
        ("post-2", "home"),
        ("post-2", "post-2"),
        ("about", "contact"),
        ("external", "blog"),
        ("external", "blog"),
    ] {
        g.add_edge(s, t);
    }
    g
}

#[test]
fn test_scores_sum_to_one_for_any_lambda() {
    let g = web();
    for lambda in [0.01, 0.15, 0.5, 0.85, 0.99] {
        for max_iterations in [1, 3, 1000] {
            let params = PageRankParams::default()
                .with_lambda(lambda)
                .with_max_iterations(max_iterations);
            let result = PageRankEngine::new(params).run(g.adjacency());
            let total: f64 = result.scores.iter().sum();
            assert!((total - 1.0).abs() < 1e-6, "lambda={lambda} sum={total}");
            assert_eq!(result.scores.len(), g.node_count());
        }
    }
}

#[test]
fn test_single_node_scores_one() {
    let mut g = GraphIndex::new();
    g.register("alone");
    let scores = rank::compute(g.node_count(), g.adjacency(), 0.15, 0.0001, 1000);
    assert_eq!(scores.len(), 1);
    assert!((scores[0] - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_nodes_returns_empty() {
    assert!(rank::compute(0, &[], 0.15, 0.0001, 1000).is_empty());
}

#[test]
fn test_symmetric_cycle() {
    let mut g = GraphIndex::new();
    g.add_edge("A", "B");
    g.add_edge("B", "A");
    let scores = rank::compute(g.node_count(), g.adjacency(), 0.15, 0.0001, 1000);
    assert!((scores[0] - 0.5).abs() < 1e-4);
    assert!((scores[1] - 0.5).abs() < 1e-4);
}

#[test]
fn test_duplicate_links_carry_more_weight() {
    // "external" links to "blog" twice; a single link would give it nothing extra.
    let g = web();
    let with_dup = PageRankEngine::default().run(g.adjacency());

    let mut single = GraphIndex::new();
    for (s, t) in [
        ("home", "about"),
        ("home", "blog"),
        ("blog", "post-1"),
        ("blog", "post-2"),
        ("post-1", "home"),
        ("post-2", "home"),
        ("post-2", "post-2"),
        ("about", "contact"),
        ("external", "blog"),
        ("external", "home"),
    ] {
        single.add_edge(s, t);
    }
    let without_dup = PageRankEngine::default().run(single.adjacency());

    let blog = g.lookup("blog").unwrap();
    assert_eq!(single.lookup("blog"), Some(blog));
    assert!(with_dup.scores[blog] > without_dup.scores[blog]);
}

#[test]
fn test_iteration_cap_is_exact() {
    let mut g = GraphIndex::new();
    g.add_edge("x", "y");
    g.add_edge("y", "x");
    g.add_edge("z", "x");
    let params = PageRankParams::default()
        .with_lambda(0.0)
        .with_tau(1e-12)
        .with_max_iterations(25);
    let result = PageRankEngine::new(params).run(g.adjacency());
    assert_eq!(result.outcome, Outcome::Exhausted);
    assert_eq!(result.iterations, 25);
    assert_eq!(result.scores.len(), 3);
}

#[test]
fn test_top_k_over_labelled_scores() {
    let g = web();
    let result = PageRankEngine::default().run(g.adjacency());
    let top = top_k(g.label(&result.scores), 100);
    assert_eq!(top.len(), g.node_count());
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));

    let again = top_k(g.label(&result.scores), 100);
    assert_eq!(top, again);
}

#[test]
fn test_inlink_top_k() {
    let g = web();
    // blog: 3, home: 2, post-2: 2 (one of them a self-loop); ties keep node order.
    let top = top_k(g.inlink_counts(), 3);
    assert_eq!(top, vec![("blog", 3), ("home", 2), ("post-2", 2)]);
}
