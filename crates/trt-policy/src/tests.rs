//! Unit tests for trt-policy.

use trt_core::{Direction, EdgeId, EdgeOccupancy, RoadIndex, RoadIndexBuilder, Vehicle, VehicleId};

use crate::{
    MIN_LOOKAHEAD_M, NoopPolicy, PolicyContext, RandomPolicy, RouteController,
    ShortestQueuePolicy, compute_local_target,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A chain of `n` edges of `len` metres each, connected by Straight.
fn chain_road(n: usize, len: f64) -> (RoadIndex, Vec<EdgeId>) {
    let mut b = RoadIndexBuilder::new();
    let ids: Vec<EdgeId> = (0..n)
        .map(|i| b.add_edge(format!("e{i}"), len).unwrap())
        .collect();
    for w in ids.windows(2) {
        b.connect(w[0], Direction::Straight, w[1]).unwrap();
    }
    (b.build(), ids)
}

fn vehicle_on(edge: EdgeId, destination: EdgeId, speed: f64) -> Vehicle {
    let mut v = Vehicle::new(VehicleId(0), destination, 600.0);
    v.enter_edge(edge, speed);
    v
}

fn ctx<'a>(road: &'a RoadIndex, occupancy: &'a EdgeOccupancy) -> PolicyContext<'a> {
    PolicyContext { road, occupancy }
}

// ── compute_local_target ──────────────────────────────────────────────────────

mod target_tests {
    use super::*;

    #[test]
    fn empty_choices_return_current_edge() {
        let (road, ids) = chain_road(3, 100.0);
        let v = vehicle_on(ids[0], ids[2], 0.0);
        assert_eq!(compute_local_target(&[], &v, &road), ids[0]);
    }

    #[test]
    fn walk_stops_at_destination() {
        let (road, ids) = chain_road(5, 1.0); // edges so short the lookahead never fills
        let v = vehicle_on(ids[0], ids[2], 0.0);
        let choices = [Direction::Straight; 4];
        assert_eq!(compute_local_target(&choices, &v, &road), ids[2]);
    }

    #[test]
    fn walk_covers_the_lookahead_distance() {
        // 5 m edges, 20 m lookahead: the walk must pass 20 m, i.e. take the
        // edge that brings the total to 25 m (edge index 5) and stop there.
        let (road, ids) = chain_road(10, 5.0);
        let v = vehicle_on(ids[0], ids[9], 0.0);
        let choices = [Direction::Straight; 9];
        assert_eq!(compute_local_target(&choices, &v, &road), ids[5]);
    }

    #[test]
    fn faster_vehicle_gets_a_longer_lookahead() {
        let (road, ids) = chain_road(20, 5.0);
        let v = vehicle_on(ids[0], ids[19], 40.0); // speed > MIN_LOOKAHEAD_M
        assert!(MIN_LOOKAHEAD_M < 40.0);
        let choices = [Direction::Straight; 19];
        // 5 m edges, 40 m lookahead → stop on the edge reaching 45 m.
        assert_eq!(compute_local_target(&choices, &v, &road), ids[9]);
    }

    #[test]
    fn invalid_choice_stops_the_walk() {
        let (road, ids) = chain_road(3, 100.0);
        let v = vehicle_on(ids[0], ids[2], 0.0);
        // Left is never a valid turn in the chain.
        let choices = [Direction::Left, Direction::Straight];
        assert_eq!(compute_local_target(&choices, &v, &road), ids[0]);
    }

    #[test]
    fn double_turnaround_stops_the_walk() {
        let mut b = RoadIndexBuilder::new();
        let a = b.add_edge("A", 1.0).unwrap();
        let back = b.add_edge("A_rev", 1.0).unwrap();
        b.connect(a, Direction::TurnAround, back).unwrap();
        b.connect(back, Direction::TurnAround, a).unwrap();
        let road = b.build();

        let v = vehicle_on(a, EdgeId(99), 0.0);
        let choices = [
            Direction::TurnAround,
            Direction::TurnAround,
            Direction::TurnAround,
        ];
        // Walk: a → back → a, then the double-turnaround stop fires.
        assert_eq!(compute_local_target(&choices, &v, &road), a);
    }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

mod random_tests {
    use super::*;

    #[test]
    fn same_seed_same_decisions() {
        let (road, ids) = chain_road(10, 5.0);
        let occ = EdgeOccupancy::for_road(&road);
        let v = vehicle_on(ids[0], ids[9], 0.0);
        let batch = [&v];

        let d1 = RandomPolicy::seeded(7).decide(&batch, &ctx(&road, &occ)).unwrap();
        let d2 = RandomPolicy::seeded(7).decide(&batch, &ctx(&road, &occ)).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn decision_targets_are_recognized_edges() {
        let (road, ids) = chain_road(10, 5.0);
        let occ = EdgeOccupancy::for_road(&road);
        let v = vehicle_on(ids[0], ids[9], 0.0);

        let decisions = RandomPolicy::seeded(1)
            .decide(&[&v], &ctx(&road, &occ))
            .unwrap();
        let target = decisions[&v.id];
        assert!(road.contains(target));
        assert_ne!(target, ids[0], "a chain walk must make progress");
    }

    #[test]
    fn off_network_vehicle_is_omitted() {
        let (road, ids) = chain_road(3, 5.0);
        let occ = EdgeOccupancy::for_road(&road);
        let v = vehicle_on(EdgeId::INVALID, ids[2], 0.0);

        let decisions = RandomPolicy::seeded(1)
            .decide(&[&v], &ctx(&road, &occ))
            .unwrap();
        assert!(decisions.is_empty());
    }

    #[test]
    fn dead_end_vehicle_targets_its_own_edge() {
        let (road, ids) = chain_road(3, 5.0);
        let occ = EdgeOccupancy::for_road(&road);
        let v = vehicle_on(ids[2], ids[0], 0.0); // last edge: no outgoing

        let decisions = RandomPolicy::seeded(1)
            .decide(&[&v], &ctx(&road, &occ))
            .unwrap();
        assert_eq!(decisions[&v.id], ids[2]);
    }
}

// ── ShortestQueuePolicy ───────────────────────────────────────────────────────

mod shortest_queue_tests {
    use super::*;

    /// A fork: `from` splits Left (len 50) / Right (len 100).
    fn fork_road() -> (RoadIndex, EdgeId, EdgeId, EdgeId) {
        let mut b = RoadIndexBuilder::new();
        let from = b.add_edge("from", 10.0).unwrap();
        let short = b.add_edge("short", 50.0).unwrap();
        let long = b.add_edge("long", 100.0).unwrap();
        b.connect(from, Direction::Left, short).unwrap();
        b.connect(from, Direction::Right, long).unwrap();
        (b.build(), from, short, long)
    }

    #[test]
    fn prefers_shorter_edge() {
        let (road, from, short, _long) = fork_road();
        let occ = EdgeOccupancy::for_road(&road);
        let v = vehicle_on(from, EdgeId(99), 0.0);

        let decisions = ShortestQueuePolicy.decide(&[&v], &ctx(&road, &occ)).unwrap();
        assert_eq!(decisions[&v.id], short);
    }

    #[test]
    fn equal_lengths_break_tie_on_occupancy() {
        let mut b = RoadIndexBuilder::new();
        let from = b.add_edge("from", 10.0).unwrap();
        let busy = b.add_edge("busy", 50.0).unwrap();
        let quiet = b.add_edge("quiet", 50.0).unwrap();
        b.connect(from, Direction::Left, busy).unwrap();
        b.connect(from, Direction::Right, quiet).unwrap();
        let road = b.build();

        let mut occ = EdgeOccupancy::for_road(&road);
        occ.set(busy, 9);
        occ.set(quiet, 1);
        let v = vehicle_on(from, EdgeId(99), 0.0);

        let decisions = ShortestQueuePolicy.decide(&[&v], &ctx(&road, &occ)).unwrap();
        assert_eq!(decisions[&v.id], quiet);
    }

    #[test]
    fn dead_end_vehicle_is_omitted() {
        let (road, _from, short, _long) = fork_road();
        let occ = EdgeOccupancy::for_road(&road);
        let v = vehicle_on(short, EdgeId(99), 0.0); // no outgoing from `short`

        let decisions = ShortestQueuePolicy.decide(&[&v], &ctx(&road, &occ)).unwrap();
        assert!(decisions.is_empty());
    }
}

// ── NoopPolicy ────────────────────────────────────────────────────────────────

#[test]
fn noop_never_decides() {
    let (road, ids) = chain_road(3, 5.0);
    let occ = EdgeOccupancy::for_road(&road);
    let v = vehicle_on(ids[0], ids[2], 0.0);

    let decisions = NoopPolicy.decide(&[&v], &ctx(&road, &occ)).unwrap();
    assert!(decisions.is_empty());
}
