#[cfg(test)]
mod tests {
    use crate::utils::artist_param;
    use model::filter::join::JoinPolicy;
    use model::filter::param::ParamKind;
    use model::filter::spec::FilterSpec;
    use predicate_engine::{compile, to_json};
    use serde_json::json;
    use std::collections::HashMap;

    // Golden document for the canonical two-artists-any example: the exact
    // node shapes the downstream engine expects, byte for byte.
    #[test]
    fn tc_golden_two_any_artists() {
        let mut overrides = HashMap::new();
        overrides.insert(ParamKind::Artist, JoinPolicy::Any);
        let spec = FilterSpec::new(
            vec![
                artist_param("artist-a", false),
                artist_param("artist-b", false),
            ],
            overrides,
        );

        let contains_structure = json!({
            "contains": {
                "args": [
                    { "keyPath": { "args": [{ "variable": {} }, "string"] } },
                    { "value": { "args": ["string"] } },
                ]
            }
        });
        let not_disliked_structure = json!({
            "equal": {
                "args": [
                    { "keyPath": { "args": [{ "variable": {} }, "bool"] } },
                    { "value": { "args": ["bool"] } },
                ]
            }
        });

        assert_eq!(
            to_json(&compile(&spec)),
            json!({
                "predicate": [
                    {
                        "variable": { "key": 1 },
                        "expression": [
                            [
                                [
                                    { "identifier": "Track.artistIds", "root": { "key": 1 } },
                                    "artist-a",
                                ],
                                [
                                    { "identifier": "Track.artistIds", "root": { "key": 1 } },
                                    "artist-b",
                                ],
                            ],
                            [
                                { "identifier": "Track.isDisliked", "root": { "key": 1 } },
                                false,
                            ],
                        ],
                        "structure": {
                            "conjunction": {
                                "args": [
                                    {
                                        "disjunction": {
                                            "args": [contains_structure.clone(), contains_structure],
                                        }
                                    },
                                    not_disliked_structure,
                                ]
                            }
                        }
                    }
                ]
            })
        );
    }

    // A bounded duration range carries its direction markers as zero-arg
    // nodes in the operand tree, third in each comparison list.
    #[test]
    fn tc_range_markers() {
        let spec = FilterSpec::from_params(vec![
            model::filter::param::FilterParam::DurationRange {
                min: Some(60),
                max: Some(300),
            },
        ]);
        let doc = to_json(&compile(&spec));

        let expression = &doc["predicate"][0]["expression"];
        let range_group = &expression[0];
        assert_eq!(
            range_group[0][2],
            json!({ "greaterThanOrEqual": {} }),
            "lower bound marker"
        );
        assert_eq!(
            range_group[1][2],
            json!({ "lessThanOrEqual": {} }),
            "upper bound marker"
        );
        assert_eq!(range_group[0][1], json!(60.0));
        assert_eq!(range_group[1][1], json!(300.0));
    }

    // Structure leaves never leak literal values; operand trees never leak
    // type names.
    #[test]
    fn tc_halves_stay_separate() {
        let spec = FilterSpec::from_params(vec![artist_param("artist-a", false)]);
        let doc = to_json(&compile(&spec));

        let structure_text = doc["predicate"][0]["structure"].to_string();
        assert!(!structure_text.contains("artist-a"));
        assert!(structure_text.contains("\"string\""));

        let expression_text = doc["predicate"][0]["expression"].to_string();
        assert!(expression_text.contains("artist-a"));
        assert!(!expression_text.contains("keyPath"));
    }
}
