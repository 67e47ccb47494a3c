use relval::{
    AnalysisConfig, DataError, Interval, PairEngine, RawTimestamp, Series, TickRecord,
    aggregate_ticks, bars_dataframe, forward_fill, snapshot_dataframe,
};

#[test]
fn full_pipeline_produces_consistent_snapshot() {
    let outcome = aggregate_ticks(&sample_pair_ticks(240), Interval::S1);
    assert_eq!(outcome.dropped, 0);

    let engine = PairEngine::new(sample_config());
    let snapshot = engine.analyze(&outcome.bars).expect("analysis should succeed");

    assert_eq!(snapshot.close_a.len(), 240);
    assert_eq!(snapshot.close_b.len(), 240);
    assert_eq!(snapshot.spread.len(), 240);
    assert_eq!(snapshot.zscore.len(), 240);
    assert_eq!(snapshot.correlation.len(), 240);

    assert!(snapshot.hedge_ratio.is_finite());
    assert!((snapshot.hedge_ratio - 2.0).abs() < 0.2);

    // Correlation warms up over a full window, then tracks the linear link.
    let corr = snapshot.correlation.values();
    assert!(corr[..19].iter().all(|v| v.is_nan()));
    assert!(corr.last().expect("non-empty").is_finite());
    assert!(corr.iter().skip(19).any(|v| *v > 0.9));

    // Every alert points at a z-score that actually crossed the threshold.
    for alert in &snapshot.alerts {
        assert!(alert.zscore.abs() > engine.config().z_threshold);
    }
}

#[test]
fn pipeline_is_deterministic_across_runs() {
    let ticks = sample_pair_ticks(240);

    let outcome_a = aggregate_ticks(&ticks, Interval::S1);
    let outcome_b = aggregate_ticks(&ticks, Interval::S1);

    let engine = PairEngine::new(sample_config());
    let snap_a = engine.analyze(&outcome_a.bars).expect("first run succeeds");
    let snap_b = engine.analyze(&outcome_b.bars).expect("second run succeeds");

    assert_eq!(snap_a.hedge_ratio.to_bits(), snap_b.hedge_ratio.to_bits());
    assert_series_bit_identical(&snap_a.spread, &snap_b.spread);
    assert_series_bit_identical(&snap_a.zscore, &snap_b.zscore);
    assert_series_bit_identical(&snap_a.correlation, &snap_b.correlation);
    assert_eq!(snap_a.adf.statistic.to_bits(), snap_b.adf.statistic.to_bits());
    assert_eq!(snap_a.adf.pvalue.to_bits(), snap_b.adf.pvalue.to_bits());
    assert_eq!(snap_a.adf.usedlag, snap_b.adf.usedlag);
    assert_eq!(snap_a.alerts, snap_b.alerts);
}

#[test]
fn unknown_symbol_is_reported() {
    let outcome = aggregate_ticks(&sample_pair_ticks(60), Interval::S1);
    let engine = PairEngine::new(AnalysisConfig {
        symbol_b: "MISSING".to_string(),
        ..sample_config()
    });
    match engine.analyze(&outcome.bars) {
        Err(DataError::UnknownSymbol(symbol)) => assert_eq!(symbol, "MISSING"),
        other => panic!("expected unknown symbol, got {other:?}"),
    }
}

#[test]
fn disjoint_pair_domains_are_insufficient_data() {
    // SYM1 trades in the first minute only, SYM2 in the second.
    let mut ticks = Vec::new();
    for i in 0..30 {
        ticks.push(tick(i, "SYM1", 100.0 + i as f64 * 0.1));
        ticks.push(tick(100 + i, "SYM2", 50.0 + i as f64 * 0.1));
    }

    let outcome = aggregate_ticks(&ticks, Interval::S1);
    let engine = PairEngine::new(sample_config());
    assert!(matches!(
        engine.analyze(&outcome.bars),
        Err(DataError::InsufficientData(_))
    ));
}

#[test]
fn dataframe_views_match_pipeline_output() {
    let outcome = aggregate_ticks(&sample_pair_ticks(120), Interval::S1);
    let engine = PairEngine::new(sample_config());
    let snapshot = engine.analyze(&outcome.bars).expect("analysis should succeed");

    let bars_frame = bars_dataframe(&outcome.bars).expect("bars frame builds");
    assert_eq!(bars_frame.height(), outcome.bars.bar_count());
    assert_eq!(bars_frame.width(), 7);

    let pair_frame = snapshot_dataframe(&snapshot).expect("pair frame builds");
    assert_eq!(pair_frame.height(), snapshot.spread.len());
    assert_eq!(
        pair_frame.get_column_names(),
        vec!["datetime", "SYM1", "SYM2", "spread", "zscore"]
    );
}

#[test]
fn forward_fill_is_display_only_gap_patching() {
    let points = vec![
        (ts(0), 1.0),
        (ts(1), f64::NAN),
        (ts(2), f64::NAN),
        (ts(3), 4.0),
    ];
    let filled = forward_fill(&Series::from_points(points));
    let values = filled.values();
    assert_eq!(values[0], 1.0);
    assert_eq!(values[1], 1.0);
    assert_eq!(values[2], 1.0);
    assert_eq!(values[3], 4.0);

    let leading = forward_fill(&Series::from_points(vec![(ts(0), f64::NAN), (ts(1), 2.0)]));
    assert!(leading.values()[0].is_nan());
    assert_eq!(leading.values()[1], 2.0);
}

fn sample_config() -> AnalysisConfig {
    AnalysisConfig {
        interval: Interval::S1,
        rolling_window: 20,
        z_threshold: 2.0,
        symbol_a: "SYM1".to_string(),
        symbol_b: "SYM2".to_string(),
    }
}

fn ts(offset: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp(1_735_689_600 + offset, 0).expect("valid timestamp")
}

fn tick(offset: i64, symbol: &str, price: f64) -> TickRecord {
    TickRecord {
        timestamp: RawTimestamp::Epoch(1_735_689_600 + offset),
        symbol: symbol.to_string(),
        price,
        quantity: 1.0 + (offset % 4) as f64,
    }
}

/// Two linearly linked walks with independent small wobbles, one tick per
/// second per symbol.
fn sample_pair_ticks(count: usize) -> Vec<TickRecord> {
    let mut out = Vec::with_capacity(count * 2);
    for i in 0..count {
        let base = 50.0 + i as f64 * 0.05;
        let wobble_a = ((i * 31) % 11) as f64 / 50.0 - 0.1;
        let wobble_b = ((i * 17) % 7) as f64 / 100.0 - 0.03;
        out.push(tick(i as i64, "SYM1", 2.0 * base + wobble_a));
        out.push(tick(i as i64, "SYM2", base + wobble_b));
    }
    out
}

fn assert_series_bit_identical(a: &Series, b: &Series) {
    assert_eq!(a.len(), b.len());
    for ((ta, va), (tb, vb)) in a.points().iter().zip(b.points().iter()) {
        assert_eq!(ta, tb);
        assert_eq!(va.to_bits(), vb.to_bits());
    }
}
