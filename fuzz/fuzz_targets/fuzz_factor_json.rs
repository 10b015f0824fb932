#![no_main]
use libfuzzer_sys::fuzz_target;
use risk_tools::{calculate_risk_score, FactorVector};

/// Fuzz the JSON deserialization path collaborators feed factor data
/// through, then run any successfully parsed vector through the
/// scoring formula. Neither step may panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(factors) = serde_json::from_str::<FactorVector>(s) {
            let _ = calculate_risk_score("fuzz", &factors);
        }
    }
});
