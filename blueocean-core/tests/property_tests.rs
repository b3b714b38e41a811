//! Property tests for the request codec.

use blueocean_core::codec::RequestCodec;
use blueocean_core::dto::pipeline::GetPipeline;
use proptest::prelude::*;

// Strategy: strings biased towards characters JSON has to escape
fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::string::string_regex(r#"[\\"\n\r\t\x00-\x1fa-z]{0,12}"#).unwrap(),
        Just(String::new()),
    ]
}

proptest! {
    /// Property: decoding an encoded request yields the same request
    #[test]
    fn proptest_round_trip(organization in arb_field(), pipeline in arb_field()) {
        let request = GetPipeline::new(organization, pipeline);
        let json = request.encode().unwrap();
        prop_assert_eq!(GetPipeline::decode(&json).unwrap(), request);
    }

    /// Property: pretty output decodes to the same request as compact output
    #[test]
    fn proptest_pretty_matches_compact(organization in arb_field(), pipeline in arb_field()) {
        let request = GetPipeline::new(organization, pipeline);
        let compact = GetPipeline::decode(&request.encode().unwrap()).unwrap();
        let pretty = GetPipeline::decode(&request.encode_pretty().unwrap()).unwrap();
        prop_assert_eq!(compact, pretty);
    }

    /// Property: arbitrary text never panics the decoder
    #[test]
    fn proptest_decode_never_panics(input in any::<String>()) {
        let _ = GetPipeline::decode(&input);
    }
}
