//! 型錄服務門面
//!
//! 把庫存儲存、BOM 儲存與可生產性引擎組合成呈現層消費的
//! 一組操作。所有驗證都在任何變更落地之前完成，失敗的
//! 操作不留下部分寫入。

use catalog_calc::{ProducibilityCalculator, Shortage};
use catalog_core::{
    validation, BomLine, CatalogError, Product, ProductDraft, RawMaterial, RawMaterialDraft,
    Result,
};
use catalog_store::{BomRepository, InventoryStore};
use rust_decimal::Decimal;

/// 型錄服務
///
/// 變更操作取 `&mut self`、查詢取 `&self`，借用規則保證
/// 可生產性掃描不會觀察到做到一半的變更（例如產品已刪
/// 但關聯還在）。服務本身不在呼叫之間快取任何東西。
#[derive(Debug, Default)]
pub struct CatalogService {
    inventory: InventoryStore,
    bom: BomRepository,
}

impl CatalogService {
    /// 創建空的服務
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 產品 =====

    /// 建立產品
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<Product> {
        validation::validate_product(&draft)?;

        let product = self.inventory.insert_product(draft);
        tracing::info!("建立產品 {} ({})", product.id, product.name);
        Ok(product)
    }

    /// 所有產品（插入順序）
    pub fn list_products(&self) -> Vec<Product> {
        self.inventory.products()
    }

    /// 依 ID 查詢產品
    pub fn get_product(&self, id: u64) -> Result<Product> {
        self.inventory
            .product(id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// 更新產品
    ///
    /// 整筆覆蓋，不支援部分欄位省略；呼叫端每次都提交完整
    /// 表單狀態。
    pub fn update_product(&mut self, id: u64, draft: ProductDraft) -> Result<Product> {
        if !self.inventory.contains_product(id) {
            return Err(CatalogError::ProductNotFound(id));
        }
        validation::validate_product(&draft)?;

        let product = self
            .inventory
            .replace_product(id, draft)
            .ok_or(CatalogError::ProductNotFound(id))?;
        tracing::info!("更新產品 {}", id);
        Ok(product)
    }

    /// 刪除產品並級聯移除其全部 BOM 關聯
    ///
    /// 被引用的原料不受影響。
    pub fn delete_product(&mut self, id: u64) -> Result<()> {
        let product = self
            .inventory
            .remove_product(id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        let removed = self.bom.remove_for_product(id);

        tracing::info!("刪除產品 {} ({})，級聯移除 {} 條關聯", id, product.name, removed);
        Ok(())
    }

    // ===== 原料 =====

    /// 建立原料
    ///
    /// 同名原料已存在時視為進貨：提交的庫存累加到現有庫存，
    /// 成本與描述以本次為準；否則建立新原料。
    pub fn create_raw_material(&mut self, draft: RawMaterialDraft) -> Result<RawMaterial> {
        validation::validate_raw_material(&draft)?;

        let existing_id = self
            .inventory
            .find_raw_material_by_name(&draft.name)
            .map(|material| material.id);

        if let Some(id) = existing_id {
            let material = self
                .inventory
                .restock(id, draft)
                .ok_or(CatalogError::RawMaterialNotFound(id))?;
            tracing::info!("原料 {} ({}) 進貨，現有庫存 {}", id, material.name, material.current_stock);
            return Ok(material);
        }

        let material = self.inventory.insert_raw_material(draft);
        tracing::info!("建立原料 {} ({})", material.id, material.name);
        Ok(material)
    }

    /// 所有原料（插入順序）
    pub fn list_raw_materials(&self) -> Vec<RawMaterial> {
        self.inventory.raw_materials()
    }

    /// 依 ID 查詢原料
    pub fn get_raw_material(&self, id: u64) -> Result<RawMaterial> {
        self.inventory
            .raw_material(id)
            .cloned()
            .ok_or(CatalogError::RawMaterialNotFound(id))
    }

    /// 更新原料
    ///
    /// 整筆覆蓋；庫存為設定值，不做累加。
    pub fn update_raw_material(&mut self, id: u64, draft: RawMaterialDraft) -> Result<RawMaterial> {
        if !self.inventory.contains_raw_material(id) {
            return Err(CatalogError::RawMaterialNotFound(id));
        }
        validation::validate_raw_material(&draft)?;

        let material = self
            .inventory
            .replace_raw_material(id, draft)
            .ok_or(CatalogError::RawMaterialNotFound(id))?;
        tracing::info!("更新原料 {}", id);
        Ok(material)
    }

    /// 刪除原料
    ///
    /// 仍被任何 BOM 關聯引用時拒絕，錯誤帶回引用它的產品
    /// 清單；呼叫端得先解除那些關聯。
    pub fn delete_raw_material(&mut self, id: u64) -> Result<()> {
        if !self.inventory.contains_raw_material(id) {
            return Err(CatalogError::RawMaterialNotFound(id));
        }

        let product_ids = self.bom.products_referencing(id);
        if !product_ids.is_empty() {
            tracing::warn!("拒絕刪除原料 {}：仍被 {} 個產品引用", id, product_ids.len());
            return Err(CatalogError::RawMaterialInUse {
                raw_material_id: id,
                product_ids,
            });
        }

        self.inventory.remove_raw_material(id);
        tracing::info!("刪除原料 {}", id);
        Ok(())
    }

    // ===== BOM 關聯 =====

    /// 產品與原料建立關聯
    ///
    /// 同一組合重複關聯時覆蓋用量。`NotFound` 與
    /// `InvalidQuantity` 原樣往上傳。
    pub fn associate_raw_material(
        &mut self,
        product_id: u64,
        raw_material_id: u64,
        quantity: Decimal,
    ) -> Result<BomLine> {
        let line = self
            .bom
            .associate(&self.inventory, product_id, raw_material_id, quantity)?;
        tracing::info!(
            "關聯產品 {} → 原料 {}，用量 {}",
            product_id,
            raw_material_id,
            quantity
        );
        Ok(line)
    }

    /// 解除單條關聯
    pub fn dissociate_raw_material(&mut self, product_id: u64, raw_material_id: u64) -> Result<()> {
        if !self.bom.remove_association(product_id, raw_material_id) {
            return Err(CatalogError::AssociationNotFound {
                product_id,
                raw_material_id,
            });
        }
        tracing::info!("解除產品 {} → 原料 {} 的關聯", product_id, raw_material_id);
        Ok(())
    }

    /// 產品的 BOM 清單（沒有關聯時為空）
    pub fn bom_for_product(&self, product_id: u64) -> Result<Vec<BomLine>> {
        if !self.inventory.contains_product(product_id) {
            return Err(CatalogError::ProductNotFound(product_id));
        }
        Ok(self.bom.lines_for_product(product_id))
    }

    // ===== 可生產性 =====

    /// 當下可生產的產品
    ///
    /// 每次呼叫都委派引擎重新計算，不快取。
    pub fn list_producible(&self) -> Vec<Product> {
        ProducibilityCalculator::list_producible(&self.inventory, &self.bom)
    }

    /// 產品的缺料清單
    pub fn shortages_for_product(&self, product_id: u64) -> Result<Vec<Shortage>> {
        if !self.inventory.contains_product(product_id) {
            return Err(CatalogError::ProductNotFound(product_id));
        }
        Ok(ProducibilityCalculator::shortages(
            product_id,
            &self.inventory,
            &self.bom,
        ))
    }
}
