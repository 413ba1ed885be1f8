//! 工廠型錄完整範例
//!
//! 展示從建檔、BOM 關聯到可生產性查詢的完整流程

use catalog::{CatalogService, ProductDraft, RawMaterialDraft};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("===== Factory Catalog Example =====\n");

    let mut service = CatalogService::new();

    // 步驟 1: 原料建檔
    println!("[1] Register Raw Materials");
    let aco = service.create_raw_material(RawMaterialDraft::new(
        "Aço".to_string(),
        Decimal::from(20),
        Decimal::from(200),
    ))?;
    println!("    {} (stock {})", aco.name, aco.current_stock);

    let madeira = service.create_raw_material(RawMaterialDraft::new(
        "Madeira".to_string(),
        Decimal::from(50),
        Decimal::from(100),
    ))?;
    println!("    {} (stock {})", madeira.name, madeira.current_stock);

    let parafusos = service.create_raw_material(RawMaterialDraft::new(
        "Parafusos".to_string(),
        Decimal::ONE,
        Decimal::from(5),
    ))?;
    println!("    {} (stock {})\n", parafusos.name, parafusos.current_stock);

    // 步驟 2: 產品建檔
    println!("[2] Register Products");
    let estrutura = service.create_product(
        ProductDraft::new("Estrutura Metálica".to_string(), Decimal::from(500))
            .with_description("Estrutura soldada".to_string()),
    )?;
    let estante = service.create_product(ProductDraft::new(
        "Estante".to_string(),
        Decimal::from(350),
    ))?;
    println!("    {} / {}\n", estrutura.name, estante.name);

    // 步驟 3: BOM 關聯
    println!("[3] Associate BOM Lines");
    service.associate_raw_material(estrutura.id, aco.id, Decimal::from(25))?;
    println!("    Estrutura Metálica ← Aço x25");
    service.associate_raw_material(estante.id, madeira.id, Decimal::from(20))?;
    service.associate_raw_material(estante.id, parafusos.id, Decimal::from(50))?;
    println!("    Estante ← Madeira x20, Parafusos x50\n");

    // 步驟 4: 可生產性查詢
    println!("[4] Producible Products");
    for product in service.list_producible() {
        println!("    ✓ {}", product.name);
    }

    // 步驟 5: 缺料報告
    println!("\n[5] Shortages for Estante");
    for shortage in service.shortages_for_product(estante.id)? {
        println!(
            "    raw material {}: need {}, have {}, missing {}",
            shortage.raw_material_id,
            shortage.required,
            shortage.available,
            shortage.missing()
        );
    }

    // 步驟 6: 螺絲進貨後再查一次
    println!("\n[6] Restock Parafusos (+45) and Re-check");
    service.create_raw_material(RawMaterialDraft::new(
        "Parafusos".to_string(),
        Decimal::ONE,
        Decimal::from(45),
    ))?;
    for product in service.list_producible() {
        println!("    ✓ {}", product.name);
    }

    Ok(())
}
