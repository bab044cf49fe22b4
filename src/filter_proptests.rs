use super::*;
use proptest::prelude::*;

/// 区切り文字を含まない名前
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,16}"
}

fn to_records(names: &[String]) -> Vec<ElementRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| ElementRecord::new(ElementId::new(i as u64), name.clone()))
        .collect()
}

fn discard() -> Splitter {
    Splitter::new(DEFAULT_PATTERN, EmptyTermPolicy::Discard).unwrap()
}

proptest! {
    /// 名前そのものを大文字化して検索しても必ず一致する
    #[test]
    fn prop_own_name_always_matches(names in prop::collection::vec(name_strategy(), 1..32), pick in any::<prop::sample::Index>()) {
        let target = pick.index(names.len());
        let query = names[target].to_uppercase();
        let filter = NameFilter::new(&discard(), &query, to_records(&names)).unwrap();

        prop_assert!(filter.matching_results().contains(&ElementId::new(target as u64)));
    }

    /// 結果は入力レコードの部分列（順序保存）で、繰り返し呼んでも同じ
    #[test]
    fn prop_results_are_ordered_subsequence(names in prop::collection::vec(name_strategy(), 1..32), query in "[a-z ,;]{1,12}") {
        let filter = NameFilter::new(&discard(), &query, to_records(&names)).unwrap();
        let first = filter.matching_results();

        prop_assert!(first.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(first.len() <= names.len());
        prop_assert_eq!(first, filter.matching_results());
    }

    /// 空語を捨てるポリシーでは空の語が残らない
    #[test]
    fn prop_discard_policy_has_no_empty_terms(query in "[a-z ,;\t]{1,24}") {
        let records = vec![ElementRecord::new(ElementId::new(0), "x")];
        let filter = NameFilter::new(&discard(), &query, records).unwrap();

        prop_assert!(filter.terms().iter().all(|t| !t.is_empty()));
    }
}
