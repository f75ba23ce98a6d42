//! Property tests for the course index.

use std::collections::BTreeSet;

use catalog::{canonicalize, catalog as queries, Course, CourseIndex};
use proptest::prelude::*;

fn course_number() -> impl Strategy<Value = String> {
    "[ \t]{0,2}[A-Za-z]{2,4}[0-9]{1,3}[ \t]{0,2}"
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(s in ".*") {
        let once = canonicalize(&s);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn index_never_holds_duplicate_keys(
        numbers in prop::collection::vec(course_number(), 0..60),
        buckets in 1usize..8,
    ) {
        let mut index = CourseIndex::with_buckets(buckets).unwrap();
        let mut first_titles = std::collections::HashMap::new();

        for (i, number) in numbers.iter().enumerate() {
            let title = format!("title {}", i);
            let inserted = index.insert(Course::new(number.clone(), title.clone())).is_ok();
            let fresh = !first_titles.contains_key(&canonicalize(number));
            prop_assert_eq!(inserted, fresh);
            first_titles.entry(canonicalize(number)).or_insert(title);
        }

        let keys: Vec<String> = index.all_courses().iter().map(Course::key).collect();
        let unique: BTreeSet<&String> = keys.iter().collect();
        prop_assert_eq!(unique.len(), keys.len());
        prop_assert_eq!(keys.len(), first_titles.len());

        // First write wins.
        for (key, title) in &first_titles {
            prop_assert_eq!(&index.search(key).unwrap().title, title);
        }
    }

    #[test]
    fn listing_round_trip(
        keys in prop::collection::btree_set("[A-Z]{3,4}[0-9]{3}", 1..40),
        buckets in 1usize..25,
    ) {
        let mut index = CourseIndex::with_buckets(buckets).unwrap();
        for key in &keys {
            index.insert(Course::new(key.to_lowercase(), "t")).unwrap();
        }

        let rows = queries::list_all(&index).unwrap();
        let listed: Vec<String> = rows.iter().map(|r| canonicalize(&r.number)).collect();
        let expected: Vec<String> = keys.iter().cloned().collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn lookup_survives_case_and_padding(number in course_number(), pad in "[ ]{0,3}") {
        let mut index = CourseIndex::new();
        index.insert(Course::new(number.clone(), "t")).unwrap();

        let query = format!("{}{}{}", pad, number.trim().to_ascii_lowercase(), pad);
        prop_assert!(index.search(&query).is_some());
        prop_assert!(index.search(&number.to_ascii_uppercase()).is_some());
    }
}
