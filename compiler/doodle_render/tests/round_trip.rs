//! Properties of the parse, derive, re-parse cycle over generated
//! programs.

use doodle_ir::ParseTree;
use proptest::prelude::*;

fn parse_ok(input: &str) -> ParseTree {
    match doodle_parse::parse(input) {
        Ok(tree) => tree,
        Err(err) => panic!("parse failed for {input:?}: {err}"),
    }
}

fn coord() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!['A', 'B', 'C', 'D', 'E']),
        prop::sample::select(vec!['1', '2', '3', '4', '5']),
    )
        .prop_map(|(x, y)| format!("{x}{y}"))
}

fn action() -> impl Strategy<Value = String> {
    prop_oneof![
        (coord(), prop::sample::select(vec!['1', '2', '3', '4', '5']))
            .prop_map(|(c, h)| format!("bar {c},{h}")),
        (coord(), coord()).prop_map(|(a, b)| format!("line {a},{b}")),
        coord().prop_map(|c| format!("fill {c}")),
    ]
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(action(), 1..4).prop_map(|actions| format!("HI {} BYE", actions.join("; ")))
}

proptest! {
    #[test]
    fn derivation_round_trips(input in program()) {
        let tree = parse_ok(&input);
        let steps = doodle_render::derive(&tree);

        prop_assert_eq!(steps.first().map(String::as_str), Some("<graph>"));

        // The final sentential form is all terminals and re-parses to an
        // equal tree.
        let last = match steps.last() {
            Some(last) => last,
            None => panic!("derivation produced no steps"),
        };
        prop_assert!(!last.contains('<'));
        prop_assert_eq!(&parse_ok(last), &tree);
    }

    #[test]
    fn derivation_never_repeats_a_form(input in program()) {
        let tree = parse_ok(&input);
        let steps = doodle_render::derive(&tree);

        // Every step rewrites one non-terminal, so adjacent forms differ.
        for pair in steps.windows(2) {
            prop_assert_ne!(&pair[0], &pair[1]);
        }
    }

    #[test]
    fn diagram_is_well_formed(input in program()) {
        let tree = parse_ok(&input);
        let rows = doodle_render::render(&tree);

        // Node rows alternate with connector rows.
        prop_assert!(rows.len() % 2 == 1);
        prop_assert!(rows[0].contains("<graph>"));
        for row in &rows {
            prop_assert_eq!(row.trim_end(), row.as_str());
        }
    }
}
