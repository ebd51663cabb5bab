//! End-to-end tests for the content-page pipeline writing to disk

use serde_json::{json, Value};

use producer::pages::{seed_record, PagePipeline, Product, ProductSource, ProductStore};
use producer::ProducerError;

fn read_json(path: &std::path::Path) -> Value {
    let text = std::fs::read_to_string(path).expect("page written");
    serde_json::from_str(&text).expect("page is JSON")
}

#[tokio::test]
async fn test_seed_pipeline_writes_all_pages() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("outputs");

    let pages = PagePipeline::default().run(ProductSource::Raw(seed_record())).unwrap();
    let paths = pages.write_to(&output_dir).await.unwrap();

    for path in paths.all() {
        assert!(path.is_file(), "{}", path.display());
    }
    assert_eq!(paths.faq, output_dir.join("faq.json"));
    assert!(paths.dag_metadata.ends_with("dag_metadata.json"));

    let faq = read_json(&paths.faq);
    assert_eq!(
        faq,
        json!({
            "page_type": "faq",
            "product_name": "GlowBoost Vitamin C Serum",
            "items": [
                {
                    "question": "What is GlowBoost Vitamin C Serum?",
                    "answer": "GlowBoost Vitamin C Serum is a 10% Vitamin C serum designed for Oily, Combination skin. It includes 10% Vitamin C, Hyaluronic Acid, Niacinamide and is positioned for Brightening, Even skin tone, Antioxidant protection.",
                    "category": "Informational"
                },
                {
                    "question": "How do I use GlowBoost Vitamin C Serum in a morning routine?",
                    "answer": "Usage instruction: Apply 2-3 drops on clean face in the morning. Follow with moisturizer and sunscreen.",
                    "category": "Usage"
                },
                {
                    "question": "Are there any side effects from using GlowBoost Vitamin C Serum?",
                    "answer": "Reported side effect in the dataset: No known side effects.",
                    "category": "Safety"
                },
                {
                    "question": "What is the price of GlowBoost Vitamin C Serum?",
                    "answer": "The listed price is ₹799.",
                    "category": "Purchase"
                },
                {
                    "question": "What is the concentration of Vitamin C in GlowBoost Vitamin C Serum?",
                    "answer": "The stated concentration is 10% Vitamin C.",
                    "category": "Informational"
                }
            ],
            "disclaimer": "Informational only. Not medical advice. Patch test when trying new skincare."
        })
    );

    let product_page = read_json(&paths.product_page);
    assert_eq!(
        product_page["summary"],
        "GlowBoost Vitamin C Serum is a 10% Vitamin C serum for Oily, Combination skin, focused on brightening, even skin tone, antioxidant protection."
    );
    assert_eq!(product_page["disclaimer"], "Informational only. This content is generated from a limited dataset.");

    let comparison = read_json(&paths.comparison_page);
    assert_eq!(
        comparison["comparison"]["differences"]["ingredients"],
        json!({
            "product_a_only": ["10% Vitamin C", "Hyaluronic Acid"],
            "product_b_only": ["Panthenol"],
            "shared": ["Niacinamide"]
        })
    );
    assert_eq!(comparison["product_b"]["benefits"], json!(["Oil control", "Helps even-looking tone"]));

    let dag = read_json(&paths.dag_metadata);
    assert_eq!(dag["execution_order"].as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn test_pages_keep_field_order_and_indentation() {
    let dir = tempfile::tempdir().unwrap();

    let pages = PagePipeline::default().run(ProductSource::Raw(seed_record())).unwrap();
    let paths = pages.write_to(dir.path()).await.unwrap();

    let text = std::fs::read_to_string(&paths.comparison_page).unwrap();
    assert!(text.starts_with("{\n  \"page_type\": \"comparison_page\",\n  \"product_a\": {"));
    let faq_text = std::fs::read_to_string(&paths.faq).unwrap();
    assert!(faq_text.contains("The listed price is ₹799."));
}

#[tokio::test]
async fn test_pipeline_is_deterministic() {
    let first = PagePipeline::default().run(ProductSource::Raw(seed_record())).unwrap();
    let second = PagePipeline::default().run(ProductSource::Raw(seed_record())).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_dataset_product_flows_into_pages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("products.json"),
        r#"[{"name": "Calm Cica Toner", "price": "₹450", "ingredients": "Centella, Niacinamide",
             "benefits": "Soothing", "skin_types": ["Sensitive"], "concentration": "5% Centella",
             "usage": "Swipe after cleansing.", "warnings": "Stop if redness persists."}]"#,
    )
    .unwrap();

    let product = ProductStore::discover(dir.path()).unwrap().find("cica");
    let pages = PagePipeline::default().run(ProductSource::Parsed(product)).unwrap();
    let paths = pages.write_to(&dir.path().join("out")).await.unwrap();

    let faq = read_json(&paths.faq);
    assert_eq!(faq["product_name"], "Calm Cica Toner");
    assert_eq!(faq["items"][2]["answer"], "Reported side effect in the dataset: Stop if redness persists.");

    let comparison = read_json(&paths.comparison_page);
    assert_eq!(comparison["comparison"]["differences"]["price_inr"]["delta_b_minus_a"], 349);
    assert_eq!(comparison["comparison"]["differences"]["ingredients"]["shared"], json!(["Niacinamide"]));
}

#[tokio::test]
async fn test_unwritable_output_dir_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let pages = PagePipeline::default().run(ProductSource::Parsed(Product::named("Serum"))).unwrap();
    let err = pages.write_to(&blocker.join("outputs")).await.unwrap_err();

    assert!(matches!(err, ProducerError::OutputError { .. }));
}
