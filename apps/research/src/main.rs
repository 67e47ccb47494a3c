use dataset::{export_pair_csv, gen_universe, load_ticks_csv};
use relval::{
	AnalysisConfig, Interval, PairEngine, aggregate_ticks, bars_dataframe, forward_fill,
	init_logging,
};

fn main() {
	init_logging();
	if let Err(error) = run() {
		println!("research run failed: {error}");
	}
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
	let symbols = env_symbols();
	let count = env_usize("RELVAL_TICKS").unwrap_or(240);

	let defaults = AnalysisConfig::default();
	let config = AnalysisConfig {
		interval: env_interval("RELVAL_INTERVAL").unwrap_or(defaults.interval),
		rolling_window: env_usize("RELVAL_WINDOW").unwrap_or(defaults.rolling_window),
		z_threshold: env_f64("RELVAL_THRESHOLD").unwrap_or(defaults.z_threshold),
		symbol_a: symbols.first().cloned().unwrap_or(defaults.symbol_a),
		symbol_b: symbols.get(1).cloned().unwrap_or(defaults.symbol_b),
	};

	let ticks = match std::env::var("RELVAL_TICKS_CSV") {
		Ok(path) => {
			println!("loading ticks from {path}");
			load_ticks_csv(&path)?
		}
		Err(_) => gen_universe(&symbols, count),
	};

	println!("--- HEADLESS RESEARCH REPORT ---");
	println!(
		"ticks: {} rows; symbols: {}; interval: {}",
		ticks.len(),
		symbols.join(","),
		config.interval.as_str()
	);

	let outcome = aggregate_ticks(&ticks, config.interval);
	if outcome.dropped > 0 {
		println!("dropped {} unparseable ticks", outcome.dropped);
	}
	let bars = outcome.bars;
	println!(
		"\nOHLCV bars: {} rows across {} symbols",
		bars.bar_count(),
		bars.symbols().len()
	);
	println!("{}", bars_dataframe(&bars)?.head(Some(8)));

	let engine = PairEngine::new(config.clone());
	let snapshot = engine.analyze(&bars)?;

	println!(
		"\nOLS hedge ratio ({} ~ {}): {:.6}",
		snapshot.symbol_a, snapshot.symbol_b, snapshot.hedge_ratio
	);

	println!("\nspread tail:");
	for (timestamp, value) in tail(snapshot.spread.points(), 8) {
		println!("{timestamp}  {value:.6}");
	}

	println!("\nz-score tail:");
	for (timestamp, value) in tail(snapshot.zscore.points(), 8) {
		println!("{timestamp}  {value:.6}");
	}

	let correlation_display = forward_fill(&snapshot.correlation);
	println!("\nrolling correlation tail (display forward-filled):");
	for (timestamp, value) in tail(correlation_display.points(), 4) {
		println!("{timestamp}  {value:.6}");
	}

	println!(
		"\nADF: statistic={:.6} pvalue={:.6} usedlag={} nobs={}",
		snapshot.adf.statistic, snapshot.adf.pvalue, snapshot.adf.usedlag, snapshot.adf.nobs
	);

	println!(
		"\nalerts (|z| > {}): {}",
		config.z_threshold,
		snapshot.alerts.len()
	);
	for alert in snapshot.alerts.iter().take(10) {
		println!("{}  z={:.4}", alert.timestamp, alert.zscore);
	}

	let out = std::env::var("RELVAL_OUT").unwrap_or_else(|_| "pair_analysis.csv".to_string());
	export_pair_csv(&out, &snapshot)?;
	println!("\nwrote {out}");
	Ok(())
}

fn tail<T>(points: &[T], n: usize) -> &[T] {
	&points[points.len().saturating_sub(n)..]
}

fn env_usize(key: &str) -> Option<usize> {
	std::env::var(key)
		.ok()
		.and_then(|value| value.parse::<usize>().ok())
		.filter(|value| *value > 0)
}

fn env_f64(key: &str) -> Option<f64> {
	std::env::var(key)
		.ok()
		.and_then(|value| value.parse::<f64>().ok())
		.filter(|value| *value > 0.0)
}

fn env_interval(key: &str) -> Option<Interval> {
	std::env::var(key)
		.ok()
		.and_then(|value| Interval::parse(&value).ok())
}

fn env_symbols() -> Vec<String> {
	let raw = std::env::var("RELVAL_SYMBOLS").unwrap_or_else(|_| "SYM1,SYM2".to_string());
	let mut symbols = raw
		.split(',')
		.map(|x| x.trim())
		.filter(|x| !x.is_empty())
		.map(|x| x.to_string())
		.collect::<Vec<_>>();

	if symbols.is_empty() {
		symbols.push("SYM1".to_string());
		symbols.push("SYM2".to_string());
	}

	let mut deduped = Vec::new();
	for symbol in symbols {
		if !deduped.iter().any(|x| x == &symbol) {
			deduped.push(symbol);
		}
	}

	deduped
}
