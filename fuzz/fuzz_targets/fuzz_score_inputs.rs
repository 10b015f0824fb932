#![no_main]
use libfuzzer_sys::fuzz_target;
use risk_tools::{
    build_heat_map, calculate_risk_score, detect_anomalies, percentile, FactorVector,
};

/// Drive the numeric core with arbitrary f64 triples. Invalid factors
/// must be rejected with an error, never a panic, and valid ones must
/// flow through aggregation without panicking.
fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let f = |i: usize| f64::from_le_bytes(data[i..i + 8].try_into().unwrap());
    let factors = FactorVector::new(f(0), f(8), f(16));

    if let Ok(score) = calculate_risk_score("fuzz", &factors) {
        let scores = vec![score];
        let map = build_heat_map(&scores);
        assert_eq!(map.total(), 1);

        let residuals = [scores[0].residual_risk];
        let _ = percentile(&residuals, 95.0);
        let _ = detect_anomalies(&residuals, 5);
    }
});
