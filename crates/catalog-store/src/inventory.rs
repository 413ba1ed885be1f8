//! 庫存儲存
//!
//! 產品與原料兩張表的記憶體實作。主鍵單調遞增，
//! 以 `BTreeMap` 保存，依主鍵走訪即插入順序，列表輸出
//! 因此穩定且可重現。儲存層本身不做欄位驗證，信任邊界
//! 在服務層。

use std::collections::BTreeMap;

use catalog_core::{Product, ProductDraft, RawMaterial, RawMaterialDraft};

/// 庫存儲存（產品表 + 原料表）
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: BTreeMap<u64, Product>,
    raw_materials: BTreeMap<u64, RawMaterial>,
    next_product_id: u64,
    next_raw_material_id: u64,
}

impl InventoryStore {
    /// 創建空的儲存
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 產品表 =====

    /// 寫入新產品並配發 ID
    pub fn insert_product(&mut self, draft: ProductDraft) -> Product {
        self.next_product_id += 1;
        let product = Product::from_draft(self.next_product_id, draft);
        self.products.insert(product.id, product.clone());
        product
    }

    /// 依 ID 查詢產品
    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.get(&id)
    }

    /// 產品是否存在
    pub fn contains_product(&self, id: u64) -> bool {
        self.products.contains_key(&id)
    }

    /// 整筆覆蓋產品（保留原 ID）；產品不存在時回傳 `None`
    pub fn replace_product(&mut self, id: u64, draft: ProductDraft) -> Option<Product> {
        if !self.products.contains_key(&id) {
            return None;
        }
        let product = Product::from_draft(id, draft);
        self.products.insert(id, product.clone());
        Some(product)
    }

    /// 移除產品
    pub fn remove_product(&mut self, id: u64) -> Option<Product> {
        self.products.remove(&id)
    }

    /// 所有產品（依 ID 遞增，即插入順序）
    pub fn products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// 產品筆數
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    // ===== 原料表 =====

    /// 寫入新原料並配發 ID
    pub fn insert_raw_material(&mut self, draft: RawMaterialDraft) -> RawMaterial {
        self.next_raw_material_id += 1;
        let material = RawMaterial::from_draft(self.next_raw_material_id, draft);
        self.raw_materials.insert(material.id, material.clone());
        material
    }

    /// 依 ID 查詢原料
    pub fn raw_material(&self, id: u64) -> Option<&RawMaterial> {
        self.raw_materials.get(&id)
    }

    /// 原料是否存在
    pub fn contains_raw_material(&self, id: u64) -> bool {
        self.raw_materials.contains_key(&id)
    }

    /// 依名稱查詢原料（完全比對）
    pub fn find_raw_material_by_name(&self, name: &str) -> Option<&RawMaterial> {
        self.raw_materials.values().find(|m| m.name == name)
    }

    /// 整筆覆蓋原料（保留原 ID；庫存為設定值）
    pub fn replace_raw_material(&mut self, id: u64, draft: RawMaterialDraft) -> Option<RawMaterial> {
        if !self.raw_materials.contains_key(&id) {
            return None;
        }
        let material = RawMaterial::from_draft(id, draft);
        self.raw_materials.insert(id, material.clone());
        Some(material)
    }

    /// 進貨：草稿中的庫存視為到貨量累加進現有庫存，
    /// 成本與描述以本次為準，名稱不變
    pub fn restock(&mut self, id: u64, draft: RawMaterialDraft) -> Option<RawMaterial> {
        let material = self.raw_materials.get_mut(&id)?;
        material.receive(draft.current_stock);
        material.cost = draft.cost;
        material.description = draft.description;
        Some(material.clone())
    }

    /// 移除原料
    pub fn remove_raw_material(&mut self, id: u64) -> Option<RawMaterial> {
        self.raw_materials.remove(&id)
    }

    /// 所有原料（依 ID 遞增，即插入順序）
    pub fn raw_materials(&self) -> Vec<RawMaterial> {
        self.raw_materials.values().cloned().collect()
    }

    /// 原料筆數
    pub fn raw_material_count(&self) -> usize {
        self.raw_materials.len()
    }
}
