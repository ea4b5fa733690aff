use premia_prediction::encode;
use premia_prediction::transform::{expm1, log1p};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn expm1_inverts_log1p(x in 0.0f64..1e12) {
        let back = expm1(log1p(x));
        let tolerance = 1e-12 * x.max(1.0);
        prop_assert!((back - x).abs() <= tolerance, "{} -> {}", x, back);
    }

    #[test]
    fn log1p_inverts_expm1_on_model_scale(raw in -5.0f64..20.0) {
        let back = log1p(expm1(raw));
        prop_assert!((back - raw).abs() <= 1e-9 * raw.abs().max(1.0));
    }

    #[test]
    fn encoded_vector_matches_inputs_except_children(
        age in 18.0f64..100.0,
        bmi in 10.0f64..60.0,
        children in 0u32..10,
        male in prop::bool::ANY,
        smoker in prop::bool::ANY,
        region in 0usize..4,
    ) {
        let onehot = |on: bool| if on { 1 } else { 0 };
        let raw = json!({
            "age": age,
            "bmi": bmi,
            "children": children,
            "sex_male": onehot(male),
            "sex_female": onehot(!male),
            "smoker_yes": onehot(smoker),
            "smoker_no": onehot(!smoker),
            "region_northwest": onehot(region == 0),
            "region_southeast": onehot(region == 1),
            "region_southwest": onehot(region == 2),
            "region_northeast": onehot(region == 3),
        });
        let inputs: Vec<f64> = premia_core::FEATURE_FIELDS
            .iter()
            .map(|f| raw[*f].as_f64().unwrap())
            .collect();

        let vector = encode(raw.as_object().unwrap()).unwrap();
        prop_assert_eq!(vector.len(), 11);
        for (i, (value, input)) in vector.values().iter().zip(&inputs).enumerate() {
            if i == 2 {
                prop_assert!((value - input.ln_1p()).abs() < 1e-15);
            } else {
                prop_assert_eq!(*value, *input);
            }
        }
    }
}
