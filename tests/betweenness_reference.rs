mod common;

use common::{assert_close, brandes, petgraph_from_edges, PetGraph};
use msbc::{BetweennessConfig, CsrGraph, MsBetweennessCentrality, Orientation, TerminationFlag};

fn config(width: usize, undirected: bool) -> BetweennessConfig {
    BetweennessConfig::default()
        .with_batch_width(width)
        .with_undirected(undirected)
        .with_concurrency(2)
}

#[test]
fn single_source_batches_match_brandes() -> anyhow::Result<()> {
    // Path, star and cycle, both orientations.
    let fixtures: Vec<(usize, Vec<(usize, usize)>)> = vec![
        (5, vec![(0, 1), (1, 2), (2, 3), (3, 4)]),
        (6, (1..6).map(|leaf| (0, leaf)).collect()),
        (5, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
    ];

    for (n, edges) in &fixtures {
        for undirected in [false, true] {
            let pg = petgraph_from_edges(*n, edges, undirected);
            let expected = brandes(&pg, if undirected { 2.0 } else { 1.0 });

            let scores = MsBetweennessCentrality::new(&PetGraph(&pg), config(1, undirected))?
                .compute()?
                .into_vec();
            assert_close(&scores, &expected);
        }
    }
    Ok(())
}

#[test]
fn csr_and_petgraph_agree() -> anyhow::Result<()> {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (2, 5), (5, 0)];
    let csr = CsrGraph::from_edges(6, &edges, Orientation::Natural)?;
    let pg = petgraph_from_edges(6, &edges, false);

    let from_csr = MsBetweennessCentrality::new(&csr, config(4, false))?.compute()?;
    let from_pg = MsBetweennessCentrality::new(&PetGraph(&pg), config(4, false))?.compute()?;
    assert_close(&from_csr.to_vec(), &from_pg.to_vec());
    assert_close(&from_csr.to_vec(), &brandes(&pg, 1.0));
    Ok(())
}

#[test]
fn result_rows_carry_original_ids() -> anyhow::Result<()> {
    let pg = petgraph_from_edges(3, &[(0, 1), (1, 2)], true);
    let graph = PetGraph(&pg);
    let scores = MsBetweennessCentrality::new(&graph, config(3, true))?.compute()?;

    let rows: Vec<_> = scores.result_stream(&graph).collect();
    assert_eq!(
        rows.iter().map(|r| r.node_id).collect::<Vec<_>>(),
        vec![1000, 1001, 1002]
    );
    assert_eq!(rows[1].centrality, 1.0);
    Ok(())
}

#[test]
fn terminated_runs_return_no_scores() -> anyhow::Result<()> {
    let graph = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)], Orientation::Natural)?;
    let flag = TerminationFlag::new();
    let algo = MsBetweennessCentrality::new(&graph, config(1, false))?
        .with_termination_flag(flag.clone());
    flag.terminate();
    assert!(matches!(algo.compute(), Err(msbc::Error::Terminated)));
    Ok(())
}

#[test]
fn json_config_drives_the_run() -> anyhow::Result<()> {
    let graph = CsrGraph::from_edges(3, &[(0, 1), (1, 2)], Orientation::Undirected)?;
    let config = BetweennessConfig::from_json_str(
        r#"{ "undirected": true, "batchWidth": 2, "concurrency": 1 }"#,
    )?;
    let scores = MsBetweennessCentrality::new(&graph, config)?.compute()?;
    assert_eq!(scores.to_vec(), vec![0.0, 1.0, 0.0]);
    Ok(())
}

/// `count` diamonds in a row: `a -> a+1, a+2 -> a+3` for every `a = 3i`.
fn diamond_chain(count: usize) -> (usize, Vec<(usize, usize)>) {
    let edges = (0..count)
        .flat_map(|i| {
            let a = 3 * i;
            [(a, a + 1), (a, a + 2), (a + 1, a + 3), (a + 2, a + 3)]
        })
        .collect();
    (3 * count + 1, edges)
}

#[test]
fn path_counts_beyond_u64_match_brandes() -> anyhow::Result<()> {
    // 2^64 shortest paths reach the last node.
    let (n, edges) = diamond_chain(64);
    for undirected in [false, true] {
        let orientation = if undirected { Orientation::Undirected } else { Orientation::Natural };
        let graph = CsrGraph::from_edges(n, &edges, orientation)?;
        let expected = brandes(
            &petgraph_from_edges(n, &edges, undirected),
            if undirected { 2.0 } else { 1.0 },
        );
        for width in [1, 64] {
            let scores = MsBetweennessCentrality::new(&graph, config(width, undirected))?
                .compute()?
                .into_vec();
            assert_close(&scores, &expected);
        }
    }
    Ok(())
}

#[test]
fn batches_wider_than_one_sweep_match_brandes() -> anyhow::Result<()> {
    let n = 150;
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| [(i, (i + 1) % n), (i, (i * 7 + 3) % n)])
        .collect();

    for undirected in [false, true] {
        let orientation = if undirected { Orientation::Undirected } else { Orientation::Natural };
        let graph = CsrGraph::from_edges(n, &edges, orientation)?;
        let expected = brandes(
            &petgraph_from_edges(n, &edges, undirected),
            if undirected { 2.0 } else { 1.0 },
        );
        for width in [65, 100, n] {
            let scores = MsBetweennessCentrality::new(&graph, config(width, undirected))?
                .compute()?
                .into_vec();
            assert_close(&scores, &expected);
        }
    }
    Ok(())
}
