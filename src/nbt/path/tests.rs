use serde_json::json;

use crate::nbt::NbtError;
use crate::nbt::path::{PathStep, TreePath};

#[test]
fn parses_fields_and_indexes() {
	let path = TreePath::parse("data.players[2].name").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Field("data".to_owned()),
			PathStep::Field("players".to_owned()),
			PathStep::Index(2),
			PathStep::Field("name".to_owned()),
		]
	);
}

#[test]
fn rejects_invalid_syntax() {
	for input in ["", ".", "a..b", "a[", "a[]", "a[x]", "a.", "[0]"] {
		let err = TreePath::parse(input).expect_err("invalid path fails");
		assert!(matches!(err, NbtError::InvalidTreePath { .. }), "input {input:?}");
	}
}

#[test]
fn resolves_against_unwrapped_tree() {
	let tree = json!({
		"data": {
			"contents": {
				"players": [
					{ "name": "alpha" },
					{ "name": "beta" },
				],
			},
		},
	});

	let path = TreePath::parse("data.contents.players[1].name").expect("path parses");
	let selected = path.resolve(&tree).expect("path resolves");
	assert_eq!(selected, &json!("beta"));
}

#[test]
fn missing_step_reports_the_step() {
	let tree = json!({ "data": {} });
	let path = TreePath::parse("data.missing").expect("path parses");

	let err = path.resolve(&tree).expect_err("missing member fails");
	match err {
		NbtError::TreePathNotFound { step } => assert_eq!(step, "missing"),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn index_into_non_array_fails() {
	let tree = json!({ "data": { "value": 5 } });
	let path = TreePath::parse("data.value[0]").expect("path parses");
	assert!(path.resolve(&tree).is_err());
}
