use apmv::generator::target_identifiers;
use apmv::{resolve_model, ApmvError, Warning};
use idf::Idf;
use proptest::prelude::*;
use std::collections::HashSet;

/// A model in which every zone is occupied by its own People
fn model_with_zones(names: &[String]) -> Idf {
    let mut model = Idf::with_version("23.1");
    for (i, name) in names.iter().enumerate() {
        test_models::add_zone(&mut model, name).unwrap();
        test_models::add_people(&mut model, &format!("People {}", i), name).unwrap();
    }
    model
}

proptest! {
    #[test]
    fn generated_names_are_unique_or_rejected(
        names in prop::collection::vec("[A-Za-z0-9][A-Za-z0-9 :_-]{0,4}[A-Za-z0-9]", 1..12)
    ) {
        let model = model_with_zones(&names);
        match resolve_model(&model) {
            Ok((_, resolution)) => {
                let mut seen = HashSet::new();
                let mut generated = HashSet::new();
                for t in &resolution.targets {
                    prop_assert!(seen.insert(t.ems_suffix.to_uppercase()), "repeated suffix {}", t.ems_suffix);
                    for (namespace, identifier) in target_identifiers(&t.ems_suffix) {
                        prop_assert!(
                            generated.insert((namespace, identifier.to_uppercase())),
                            "repeated name {}",
                            identifier
                        );
                    }
                }
                // Whatever was not resolved was reported
                let duplicates = resolution
                    .warnings
                    .iter()
                    .filter(|w| matches!(w, Warning::DuplicateTarget { .. }))
                    .count();
                prop_assert_eq!(resolution.targets.len() + duplicates, names.len());
            }
            Err(ApmvError::SuffixCollision { first, second, .. })
            | Err(ApmvError::IdentifierCollision { first, second, .. }) => {
                prop_assert!(!first.eq_ignore_ascii_case(&second));
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn alphanumeric_names_never_collide(
        names in prop::collection::btree_set("[a-z0-9]{1,6}", 1..12)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let model = model_with_zones(&names);
        let (_, resolution) = resolve_model(&model).unwrap();
        prop_assert_eq!(resolution.targets.len(), names.len());
        prop_assert!(resolution.warnings.is_empty());
        for (t, name) in resolution.targets.iter().zip(&names) {
            prop_assert_eq!(&t.ems_suffix, name);
        }
    }
}
