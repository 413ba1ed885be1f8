//! BOM 關聯儲存
//!
//! 持有 `(product_id, raw_material_id)` 複合鍵到關聯的映射，
//! 每對至多一條。參照完整性在寫入時檢查：關聯永遠指向
//! 存在的產品與原料。

use std::collections::BTreeMap;

use catalog_core::{BomLine, CatalogError, Result};
use rust_decimal::Decimal;

use crate::InventoryStore;

/// BOM 關聯儲存
#[derive(Debug, Default)]
pub struct BomRepository {
    lines: BTreeMap<(u64, u64), BomLine>,
}

impl BomRepository {
    /// 創建空的關聯儲存
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增或覆蓋關聯
    ///
    /// 檢查順序：產品存在 → 原料存在 → 用量大於 0。任何
    /// 檢查失敗都不落地。同一組合已有關聯時只覆蓋用量，
    /// 保留原記錄 ID。
    pub fn associate(
        &mut self,
        inventory: &InventoryStore,
        product_id: u64,
        raw_material_id: u64,
        quantity: Decimal,
    ) -> Result<BomLine> {
        if !inventory.contains_product(product_id) {
            return Err(CatalogError::ProductNotFound(product_id));
        }
        if !inventory.contains_raw_material(raw_material_id) {
            return Err(CatalogError::RawMaterialNotFound(raw_material_id));
        }
        if quantity <= Decimal::ZERO {
            return Err(CatalogError::InvalidQuantity(quantity));
        }

        let line = self
            .lines
            .entry((product_id, raw_material_id))
            .and_modify(|line| line.quantity = quantity)
            .or_insert_with(|| BomLine::new(product_id, raw_material_id, quantity));

        Ok(line.clone())
    }

    /// 產品的所有關聯（依原料 ID 遞增）；沒有關聯時為空
    pub fn lines_for_product(&self, product_id: u64) -> Vec<BomLine> {
        self.lines
            .range((product_id, u64::MIN)..=(product_id, u64::MAX))
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// 移除產品的全部關聯（產品刪除時的級聯清理）
    ///
    /// 冪等：沒有任何關聯也算成功。回傳移除筆數。
    pub fn remove_for_product(&mut self, product_id: u64) -> usize {
        let keys: Vec<(u64, u64)> = self
            .lines
            .range((product_id, u64::MIN)..=(product_id, u64::MAX))
            .map(|(key, _)| *key)
            .collect();

        for key in &keys {
            self.lines.remove(key);
        }

        if !keys.is_empty() {
            tracing::debug!("級聯移除產品 {} 的 {} 條關聯", product_id, keys.len());
        }
        keys.len()
    }

    /// 移除單條關聯；不存在時為 no-op，回傳 `false`
    pub fn remove_association(&mut self, product_id: u64, raw_material_id: u64) -> bool {
        self.lines.remove(&(product_id, raw_material_id)).is_some()
    }

    /// 引用指定原料的產品 ID 清單（依產品 ID 遞增）
    pub fn products_referencing(&self, raw_material_id: u64) -> Vec<u64> {
        self.lines
            .keys()
            .filter(|(_, material)| *material == raw_material_id)
            .map(|(product, _)| *product)
            .collect()
    }

    /// 關聯總筆數
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 是否沒有任何關聯
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{ProductDraft, RawMaterialDraft};

    fn store_with_entities() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.insert_product(ProductDraft::new(
            "Estrutura Metálica".to_string(),
            Decimal::from(500),
        )); // id 1
        store.insert_raw_material(RawMaterialDraft::new(
            "Aço".to_string(),
            Decimal::from(20),
            Decimal::from(200),
        )); // id 1
        store.insert_raw_material(RawMaterialDraft::new(
            "Parafusos".to_string(),
            Decimal::ONE,
            Decimal::from(500),
        )); // id 2
        store
    }

    #[test]
    fn test_associate_creates_line() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        let line = bom.associate(&store, 1, 1, Decimal::from(25)).unwrap();

        assert_eq!(line.key(), (1, 1));
        assert_eq!(line.quantity, Decimal::from(25));
        assert_eq!(bom.len(), 1);
    }

    #[test]
    fn test_reassociate_replaces_quantity_and_keeps_record_id() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        let first = bom.associate(&store, 1, 1, Decimal::from(25)).unwrap();
        let second = bom.associate(&store, 1, 1, Decimal::from(40)).unwrap();

        // 覆蓋而不是新增一條
        assert_eq!(bom.len(), 1);
        assert_eq!(second.quantity, Decimal::from(40));
        assert_eq!(second.id, first.id);
        assert_eq!(
            bom.lines_for_product(1)[0].quantity,
            Decimal::from(40)
        );
    }

    #[test]
    fn test_associate_missing_product_fails_before_material_check() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        // 產品與原料都不存在時，先回報產品
        let err = bom.associate(&store, 99, 98, Decimal::ONE).unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(99)));
        assert!(bom.is_empty());
    }

    #[test]
    fn test_associate_missing_material_fails() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        let err = bom.associate(&store, 1, 98, Decimal::ONE).unwrap_err();
        assert!(matches!(err, CatalogError::RawMaterialNotFound(98)));
        assert!(bom.is_empty());
    }

    #[test]
    fn test_associate_rejects_non_positive_quantity() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        let zero = bom.associate(&store, 1, 1, Decimal::ZERO).unwrap_err();
        assert!(matches!(zero, CatalogError::InvalidQuantity(_)));

        let negative = bom.associate(&store, 1, 1, Decimal::from(-5)).unwrap_err();
        assert!(matches!(negative, CatalogError::InvalidQuantity(_)));

        assert!(bom.is_empty());
    }

    #[test]
    fn test_lines_for_product_ordered_by_material_id() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        bom.associate(&store, 1, 2, Decimal::from(50)).unwrap();
        bom.associate(&store, 1, 1, Decimal::from(25)).unwrap();

        let materials: Vec<u64> = bom
            .lines_for_product(1)
            .iter()
            .map(|line| line.raw_material_id)
            .collect();
        assert_eq!(materials, vec![1, 2]);
    }

    #[test]
    fn test_lines_for_unknown_product_is_empty() {
        let bom = BomRepository::new();
        assert!(bom.lines_for_product(7).is_empty());
    }

    #[test]
    fn test_remove_for_product_is_idempotent() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        bom.associate(&store, 1, 1, Decimal::from(25)).unwrap();
        bom.associate(&store, 1, 2, Decimal::from(50)).unwrap();

        assert_eq!(bom.remove_for_product(1), 2);
        assert!(bom.is_empty());
        assert_eq!(bom.remove_for_product(1), 0); // 再跑一次也成功
    }

    #[test]
    fn test_remove_association_single_line() {
        let store = store_with_entities();
        let mut bom = BomRepository::new();

        bom.associate(&store, 1, 1, Decimal::from(25)).unwrap();
        bom.associate(&store, 1, 2, Decimal::from(50)).unwrap();

        assert!(bom.remove_association(1, 1));
        assert_eq!(bom.lines_for_product(1).len(), 1);
        assert!(!bom.remove_association(1, 1)); // 已不存在
    }

    #[test]
    fn test_products_referencing() {
        let mut store = store_with_entities();
        store.insert_product(ProductDraft::new(
            "Portão".to_string(),
            Decimal::from(800),
        )); // id 2
        let mut bom = BomRepository::new();

        bom.associate(&store, 1, 1, Decimal::from(25)).unwrap();
        bom.associate(&store, 2, 1, Decimal::from(10)).unwrap();
        bom.associate(&store, 2, 2, Decimal::from(80)).unwrap();

        assert_eq!(bom.products_referencing(1), vec![1, 2]);
        assert_eq!(bom.products_referencing(2), vec![2]);
        assert!(bom.products_referencing(9).is_empty());
    }
}
