use wcq_sim::adjustments::HistoryIndex;
use wcq_sim::group_data;
use wcq_sim::simulate::Simulation;
use wcq_sim::win_prob;

#[test]
fn builtin_distributions_are_normalized() {
    let cfg = group_data::afc_group_c();
    cfg.validate().unwrap();

    let history = HistoryIndex::build(&cfg.history);
    let probs = win_prob::compose_all(&cfg, &history).unwrap();
    assert_eq!(probs.len(), cfg.remaining.len());

    for fp in &probs {
        assert!(
            fp.prob.home >= 0.0 && fp.prob.draw >= 0.0 && fp.prob.away >= 0.0,
            "{} vs {} produced a negative probability",
            fp.fixture.home,
            fp.fixture.away
        );
        assert!(
            (fp.prob.sum() - 1.0).abs() < 1e-9,
            "{} vs {} sums to {}",
            fp.fixture.home,
            fp.fixture.away,
            fp.prob.sum()
        );
    }
}

#[test]
fn seeded_run_is_reproducible_end_to_end() {
    let cfg = group_data::afc_group_c();
    let history = HistoryIndex::build(&cfg.history);
    let probs = win_prob::compose_all(&cfg, &history).unwrap();
    let sim = Simulation::new(&cfg, &probs).unwrap();

    let first = sim.run(10_000, Some(1234));
    let second = sim.run(10_000, Some(1234));
    assert_eq!(first.direct, second.direct);
    assert_eq!(first.playoff, second.playoff);

    assert!(first.direct_pct() >= 0.0 && first.direct_pct() <= 100.0);
    assert!(first.playoff_pct() >= 0.0 && first.playoff_pct() <= 100.0);
    assert!(first.direct + first.playoff <= first.trials);
}

#[test]
fn estimates_tighten_with_more_trials() {
    let cfg = group_data::afc_group_c();
    let history = HistoryIndex::build(&cfg.history);
    let probs = win_prob::compose_all(&cfg, &history).unwrap();
    let sim = Simulation::new(&cfg, &probs).unwrap();

    let seeds = [11u64, 22, 33, 44, 55, 66];
    let spread_at = |trials: usize| {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &seed in &seeds {
            let pct = sim.run(trials, Some(seed)).playoff_pct();
            lo = lo.min(pct);
            hi = hi.max(pct);
        }
        hi - lo
    };

    // Not an exact law, so the small sample gets a generous cushion; with
    // 100x the trials the spread across seeds should still come down.
    let small = spread_at(200);
    let large = spread_at(20_000);
    assert!(
        large <= small + 1.0,
        "spread did not tighten: {small:.2} -> {large:.2}"
    );
    assert!(large < 5.0, "20k-trial spread too wide: {large:.2}");
}

#[test]
fn fatal_config_error_reports_the_unknown_code() {
    let mut cfg = group_data::afc_group_c();
    cfg.remaining[0].home = "xyz".to_string();

    let err = cfg.validate().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("xyz"), "message was: {msg}");
}
