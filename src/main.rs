use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rebate_engine::application::engine::RebateEngine;
use rebate_engine::application::registry::CalculatorRegistry;
use rebate_engine::domain::calculation::CalculationRequest;
use rebate_engine::domain::ports::{ProductStoreBox, RebateStoreBox};
use rebate_engine::domain::product::Product;
use rebate_engine::domain::rebate::Rebate;
use rebate_engine::infrastructure::demo::{demo_products, demo_rebates};
use rebate_engine::infrastructure::in_memory::{InMemoryProductStore, InMemoryRebateStore};
use rebate_engine::interfaces::csv::record_reader::RecordReader;
use rebate_engine::interfaces::csv::result_writer::ResultWriter;
use rebate_engine::logger;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Calculation requests CSV file (rebate, product, volume)
    input: PathBuf,

    /// Rebates CSV file (identifier, incentive, amount, percentage). Defaults to the demo catalogue.
    #[arg(long)]
    rebates: Option<PathBuf>,

    /// Products CSV file (identifier, price, supported_incentives). Defaults to the demo catalogue.
    #[arg(long)]
    products: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn read_catalogue<T: serde::de::DeserializeOwned>(
    path: Option<&Path>,
    fallback: impl FnOnce() -> Vec<T>,
) -> Result<Vec<T>> {
    match path {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            RecordReader::new(file).read_all().into_diagnostic()
        }
        None => Ok(fallback()),
    }
}

fn in_memory_stores(rebates: Vec<Rebate>, products: Vec<Product>) -> (RebateStoreBox, ProductStoreBox) {
    (
        Box::new(InMemoryRebateStore::from_rebates(rebates)),
        Box::new(InMemoryProductStore::from_products(products)),
    )
}

#[cfg(feature = "storage-rocksdb")]
fn persistent_stores(
    db_path: &Path,
    rebates: Vec<Rebate>,
    products: Vec<Product>,
) -> Result<(RebateStoreBox, ProductStoreBox)> {
    use rebate_engine::infrastructure::rocksdb::RocksDBStore;

    let store = RocksDBStore::open(db_path).into_diagnostic()?;
    for rebate in &rebates {
        store.put_rebate(rebate).into_diagnostic()?;
    }
    for product in &products {
        store.put_product(product).into_diagnostic()?;
    }

    Ok((Box::new(store.clone()), Box::new(store)))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn persistent_stores(
    _db_path: &Path,
    rebates: Vec<Rebate>,
    products: Vec<Product>,
) -> Result<(RebateStoreBox, ProductStoreBox)> {
    tracing::warn!(
        "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
    );
    Ok(in_memory_stores(rebates, products))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let rebates = read_catalogue(cli.rebates.as_deref(), demo_rebates)?;
    let products = read_catalogue(cli.products.as_deref(), demo_products)?;
    tracing::debug!(
        rebates = rebates.len(),
        products = products.len(),
        "catalogue loaded"
    );

    let (rebate_store, product_store) = match cli.db_path.as_deref() {
        Some(db_path) => persistent_stores(db_path, rebates, products)?,
        None => in_memory_stores(rebates, products),
    };
    let engine = RebateEngine::new(rebate_store, product_store, CalculatorRegistry::standard());

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RecordReader::new(file);
    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    for request in reader.records::<CalculationRequest>() {
        match request {
            Ok(request) => {
                let result = engine.calculate(&request).await.into_diagnostic()?;
                if !result.is_success() {
                    tracing::warn!(
                        rebate = %request.rebate_identifier,
                        product = %request.product_identifier,
                        "calculation failed: {}",
                        result.error_message()
                    );
                }
                writer.write_outcome(&request, &result).into_diagnostic()?;
            }
            Err(e) => {
                tracing::error!("Error reading request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
