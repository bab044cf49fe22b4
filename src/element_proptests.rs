use super::*;
use proptest::prelude::*;

/// IDをそのまま名前に写すルックアップ
struct EchoLookup;

impl NameLookup for EchoLookup {
    fn name(&self, id: ElementId) -> Result<String> {
        Ok(format!("element-{}", id.get()))
    }
}

proptest! {
    /// 非空のIDリストからは同じ長さ・同じ順序のレコード列が得られる
    #[test]
    fn prop_records_preserve_length_and_order(raw in prop::collection::vec(any::<u64>(), 1..64)) {
        let ids: Vec<ElementId> = raw.iter().copied().map(ElementId::new).collect();
        let records = build_records(&ids, &EchoLookup).unwrap();

        prop_assert_eq!(records.len(), ids.len());
        for (record, id) in records.iter().zip(ids.iter()) {
            prop_assert_eq!(record.element_id(), *id);
            prop_assert_eq!(record.name(), format!("element-{}", id.get()));
        }
    }
}
